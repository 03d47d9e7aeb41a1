//! Precision/recall audit of asserted cross-archive links against curated
//! ground truth.

use std::collections::BTreeMap;

use log::debug;

use crate::config::AuditConfig;
use crate::index::ShipNameIndex;
use crate::model::{
    AuditMeta, AuditReport, AuditSummary, GroundTruthLink, LinkAssertion, MatchQuery,
};

/// Re-resolve every ground-truth link through the index and grade the
/// asserted links against the outcome.
///
/// A ground-truth link is *resolved* when the top match at or above the
/// configured confidence threshold carries the expected candidate id, and
/// *matched* when that same (source, target) pair was also asserted.
/// precision = matched / asserted, recall = matched / ground_truth; both
/// are 0.0 on an empty denominator. The histogram buckets each query's
/// best confidence by one-decimal rounding.
pub fn audit_links(
    index: &ShipNameIndex<'_>,
    ground_truth: &[GroundTruthLink],
    asserted: &[LinkAssertion],
    config: &AuditConfig,
) -> AuditReport {
    let mut matched = 0usize;
    let mut missed = Vec::new();
    let mut histogram: BTreeMap<String, usize> = BTreeMap::new();

    for link in ground_truth {
        let query = MatchQuery {
            name: link.query_name.clone(),
            date: link.query_date.clone(),
            nationality: link.query_nationality.clone(),
            min_confidence: 0.0,
            max_results: 1,
        };
        let top = index.find_matches(&query).into_iter().next();

        if let Some(ref best) = top {
            *histogram.entry(format!("{:.1}", best.confidence)).or_insert(0) += 1;
        }

        let resolved = top.as_ref().is_some_and(|best| {
            best.confidence >= config.confidence_threshold && best.candidate_id == link.target_id
        });
        let was_asserted = asserted
            .iter()
            .any(|a| a.source_id == link.source_id && a.target_id == link.target_id);

        if resolved && was_asserted {
            matched += 1;
        } else {
            missed.push(link.source_id.clone());
        }
    }

    let ratio = |numerator: usize, denominator: usize| {
        if denominator == 0 {
            0.0
        } else {
            numerator as f64 / denominator as f64
        }
    };

    debug!(
        "audit: {matched}/{} ground-truth links matched against {} assertions",
        ground_truth.len(),
        asserted.len()
    );

    AuditReport {
        meta: AuditMeta {
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
            confidence_threshold: config.confidence_threshold,
        },
        summary: AuditSummary {
            asserted: asserted.len(),
            ground_truth: ground_truth.len(),
            matched,
            precision: ratio(matched, asserted.len()),
            recall: ratio(matched, ground_truth.len()),
        },
        missed,
        histogram,
    }
}
