use std::collections::BTreeMap;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// A single vessel record from one archive's snapshot.
///
/// Records stay owned by their source archive and are referenced, not
/// copied, by the index. Date fields hold the archive's original strings
/// ("1628-10-27", "1628"); year extraction happens during scoring.
#[derive(Debug, Clone)]
pub struct CandidateRecord {
    pub candidate_id: String,
    pub ship_name: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub nationality: Option<String>,
}

/// One lookup against an index: the ship identity being resolved plus the
/// result bounds the caller is willing to pay for.
#[derive(Debug, Clone)]
pub struct MatchQuery {
    pub name: String,
    pub date: Option<String>,
    pub nationality: Option<String>,
    pub min_confidence: f64,
    pub max_results: usize,
}

impl MatchQuery {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date: None,
            nationality: None,
            min_confidence: 0.0,
            max_results: 10,
        }
    }
}

// ---------------------------------------------------------------------------
// Match output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Exact,
    NormalizedExact,
    Phonetic,
    Fuzzy,
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::NormalizedExact => write!(f, "normalized_exact"),
            Self::Phonetic => write!(f, "phonetic"),
            Self::Fuzzy => write!(f, "fuzzy"),
        }
    }
}

/// Scored comparison of a query against one candidate. Ephemeral: created
/// per query, never persisted. `nationality_match` is `None` when either
/// side's nationality is unknown.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub candidate_id: String,
    pub confidence: f64,
    pub match_type: MatchType,
    pub name_similarity: f64,
    pub date_proximity: f64,
    pub nationality_match: Option<bool>,
    pub details: String,
}

// ---------------------------------------------------------------------------
// Audit
// ---------------------------------------------------------------------------

/// A cross-archive link asserted by the linking pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkAssertion {
    pub source_id: String,
    pub target_id: String,
}

/// A curated, manually verified cross-archive link used only for evaluation.
#[derive(Debug, Clone)]
pub struct GroundTruthLink {
    pub source_id: String,
    pub query_name: String,
    pub query_date: Option<String>,
    pub query_nationality: Option<String>,
    pub target_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditSummary {
    pub asserted: usize,
    pub ground_truth: usize,
    pub matched: usize,
    pub precision: f64,
    pub recall: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditMeta {
    pub engine_version: String,
    pub run_at: String,
    pub confidence_threshold: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub meta: AuditMeta,
    pub summary: AuditSummary,
    /// Ground-truth source ids that did not come back matched.
    pub missed: Vec<String>,
    /// Best confidence per ground-truth query, bucketed by one-decimal
    /// rounding ("0.9" -> count).
    pub histogram: BTreeMap<String, usize>,
}
