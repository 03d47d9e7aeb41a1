//! Temporal proximity between a query date and a candidate's validity
//! interval.

use chrono::{Datelike, NaiveDate};

/// Extract a year from an archive date string: a full `YYYY-MM-DD` date or
/// a bare leading 4-digit year ("1628-10-27", "1628", "1628c" all yield
/// 1628). Anything else is treated as unknown.
pub fn extract_year(date: Option<&str>) -> Option<i32> {
    let raw = date?.trim();
    if let Ok(parsed) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(parsed.year());
    }
    let prefix = raw.get(..4)?;
    if prefix.chars().all(|c| c.is_ascii_digit()) {
        prefix.parse().ok()
    } else {
        None
    }
}

/// Score date proximity in [0.0, 1.0].
///
/// A missing query year, or a candidate with neither bound, scores the
/// neutral 0.5: absent data never rewards or penalizes. Otherwise the
/// minimal absolute year gap to the closer candidate bound maps through a
/// fixed step function. Deliberately coarse so scores stay auditable.
pub fn date_proximity_score(
    query_date: Option<&str>,
    candidate_start: Option<&str>,
    candidate_end: Option<&str>,
) -> f64 {
    let Some(q_year) = extract_year(query_date) else {
        return 0.5;
    };

    let gap = match (extract_year(candidate_start), extract_year(candidate_end)) {
        (None, None) => return 0.5,
        (Some(start), None) => (q_year - start).abs(),
        (None, Some(end)) => (q_year - end).abs(),
        (Some(start), Some(end)) => (q_year - start).abs().min((q_year - end).abs()),
    };

    match gap {
        0 => 1.0,
        1 => 0.8,
        2 => 0.5,
        3 => 0.2,
        _ => 0.0,
    }
}
