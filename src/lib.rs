//! `vessel-recon` — fuzzy entity resolution for historical vessel records.
//!
//! Reconciles ship identities (and linked voyages/wrecks) across
//! independently curated archives that share no identifier scheme and vary
//! in spelling, transliteration, and date/nationality completeness.
//! Normalized-name, Levenshtein, phonetic, and temporal evidence combine
//! into one calibrated confidence per candidate; a three-tier index keeps
//! lookups interactive over pools of tens of thousands of records.
//!
//! Pure engine crate: receives pre-loaded archive records, returns ranked
//! matches. Deterministic, synchronous, CPU-bound; no CLI or IO
//! dependencies.

pub mod audit;
pub mod config;
pub mod dates;
pub mod distance;
pub mod error;
pub mod index;
pub mod model;
pub mod normalize;
pub mod phonetic;
pub mod score;

pub use audit::audit_links;
pub use config::{AuditConfig, ResolverConfig};
pub use dates::date_proximity_score;
pub use distance::{levenshtein_distance, levenshtein_similarity};
pub use error::ResolveError;
pub use index::ShipNameIndex;
pub use model::{
    AuditReport, CandidateRecord, GroundTruthLink, LinkAssertion, MatchQuery, MatchResult,
    MatchType,
};
pub use normalize::normalize_ship_name;
pub use phonetic::phonetic_code;
pub use score::score_ship_match;
