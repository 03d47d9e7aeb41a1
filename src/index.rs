//! Pre-built three-tier index for fuzzy ship name lookup.

use std::collections::HashMap;

use log::{debug, trace};

use crate::error::ResolveError;
use crate::model::{CandidateRecord, MatchQuery, MatchResult};
use crate::normalize::normalize_ship_name;
use crate::phonetic::phonetic_code;
use crate::score::score_ship_match;

/// Read-only index over one archive snapshot.
///
/// Three lookup tiers avoid a full-pool distance scan per query:
/// 1. exact normalized-name map
/// 2. phonetic buckets (small in practice for ship-name-length strings)
/// 3. scan of everything not yet scored, entered only when the first two
///    tiers cannot fill `max_results`
///
/// Candidates are referenced, not copied. The index never mutates after
/// build: a refreshed snapshot means building a new index and swapping the
/// reference, so concurrent readers need no locking.
#[derive(Debug)]
pub struct ShipNameIndex<'a> {
    records: &'a [CandidateRecord],
    exact: HashMap<String, Vec<usize>>,
    buckets: HashMap<String, Vec<usize>>,
}

impl<'a> ShipNameIndex<'a> {
    /// Build the index, validating every record at the boundary.
    ///
    /// An empty `candidate_id`, or a ship name that normalizes to nothing,
    /// is a contract violation: the build fails immediately rather than
    /// silently skipping or partially indexing. Upstream archive-data
    /// validation is the caller's job; nothing is auto-corrected here.
    pub fn build(records: &'a [CandidateRecord]) -> Result<Self, ResolveError> {
        let mut exact: HashMap<String, Vec<usize>> = HashMap::new();
        let mut buckets: HashMap<String, Vec<usize>> = HashMap::new();

        for (position, record) in records.iter().enumerate() {
            if record.candidate_id.is_empty() {
                return Err(ResolveError::MissingCandidateId { position });
            }
            let norm = normalize_ship_name(&record.ship_name);
            if norm.is_empty() {
                return Err(ResolveError::EmptyShipName {
                    position,
                    candidate_id: record.candidate_id.clone(),
                });
            }

            let code = phonetic_code(&norm);
            if !code.is_empty() {
                buckets.entry(code).or_default().push(position);
            }
            exact.entry(norm).or_default().push(position);
        }

        debug!(
            "indexed {} records: {} distinct names, {} phonetic buckets",
            records.len(),
            exact.len(),
            buckets.len()
        );

        Ok(Self {
            records,
            exact,
            buckets,
        })
    }

    /// Number of indexed records.
    pub fn size(&self) -> usize {
        self.records.len()
    }

    /// Ranked matches for a query: descending confidence, ties kept in
    /// insertion order, filtered by `min_confidence`, truncated to
    /// `max_results`. Records sharing a candidate_id collapse to their
    /// best score. An empty query returns an empty list with no scoring
    /// attempted; a low-confidence or empty outcome is a valid result,
    /// never an error.
    pub fn find_matches(&self, query: &MatchQuery) -> Vec<MatchResult> {
        let q_norm = normalize_ship_name(&query.name);
        if q_norm.is_empty() {
            return Vec::new();
        }

        let mut scored = vec![false; self.records.len()];
        let mut by_id: HashMap<String, usize> = HashMap::new();
        let mut results: Vec<MatchResult> = Vec::new();

        // Tier 1: verbatim and normalized query forms in the exact map.
        for key in [query.name.as_str(), q_norm.as_str()] {
            if let Some(positions) = self.exact.get(key) {
                for &pos in positions {
                    self.score_into(pos, query, &mut scored, &mut by_id, &mut results);
                }
            }
        }

        // Tier 2: the query's phonetic bucket.
        let code = phonetic_code(&q_norm);
        if let Some(positions) = self.buckets.get(&code) {
            for &pos in positions {
                self.score_into(pos, query, &mut scored, &mut by_id, &mut results);
            }
        }

        // Tier 3: fuzzy fallback over everything not yet scored, only when
        // the earlier tiers cannot fill the result cap.
        let qualifying = results
            .iter()
            .filter(|r| r.confidence >= query.min_confidence)
            .count();
        if qualifying < query.max_results {
            trace!("fuzzy fallback scan for '{q_norm}' ({qualifying} qualifying so far)");
            for pos in 0..self.records.len() {
                self.score_into(pos, query, &mut scored, &mut by_id, &mut results);
            }
        }

        results.retain(|r| r.confidence >= query.min_confidence);
        // Stable sort: equal confidences keep insertion order.
        results.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results.truncate(query.max_results);
        results
    }

    /// Score one record position, deduplicating by candidate_id across
    /// tiers and keeping the higher-confidence result.
    fn score_into(
        &self,
        pos: usize,
        query: &MatchQuery,
        scored: &mut [bool],
        by_id: &mut HashMap<String, usize>,
        results: &mut Vec<MatchResult>,
    ) {
        if scored[pos] {
            return;
        }
        scored[pos] = true;

        let result = score_ship_match(query, &self.records[pos]);
        match by_id.get(&result.candidate_id) {
            Some(&i) => {
                if result.confidence > results[i].confidence {
                    results[i] = result;
                }
            }
            None => {
                by_id.insert(result.candidate_id.clone(), results.len());
                results.push(result);
            }
        }
    }
}
