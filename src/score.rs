//! Composite match scoring.

use crate::dates::date_proximity_score;
use crate::distance::levenshtein_similarity;
use crate::model::{CandidateRecord, MatchQuery, MatchResult, MatchType};
use crate::normalize::normalize_ship_name;
use crate::phonetic::phonetic_code;

// Fixed historical weights. Downstream confidence thresholds depend on
// these staying stable across releases.
pub const NAME_WEIGHT: f64 = 0.50;
pub const DATE_WEIGHT: f64 = 0.30;
pub const NATIONALITY_WEIGHT: f64 = 0.10;
pub const PHONETIC_WEIGHT: f64 = 0.10;

/// Name similarity at or above this is a string-level (`fuzzy`) match even
/// when the phonetic codes agree; below it, phonetic agreement is the only
/// signal and the match is labeled `phonetic`.
pub const FUZZY_SIMILARITY_THRESHOLD: f64 = 0.7;

fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

/// Score one candidate against a query. Pure function of its inputs:
/// identical arguments always produce an identical result.
///
/// Terms: Levenshtein similarity on normalized names (0.50), year-gap
/// proximity (0.30), nationality agreement (0.10), phonetic-code agreement
/// (0.10). Unknown dates and nationalities contribute the neutral 0.5.
pub fn score_ship_match(query: &MatchQuery, candidate: &CandidateRecord) -> MatchResult {
    let q_norm = normalize_ship_name(&query.name);
    let c_norm = normalize_ship_name(&candidate.ship_name);

    let q_code = phonetic_code(&q_norm);
    let c_code = phonetic_code(&c_norm);
    let codes_agree = !q_code.is_empty() && q_code == c_code;

    let (name_similarity, match_type) = if query.name == candidate.ship_name {
        (1.0, MatchType::Exact)
    } else if q_norm == c_norm {
        (1.0, MatchType::NormalizedExact)
    } else {
        let sim = levenshtein_similarity(&q_norm, &c_norm);
        let kind = if codes_agree && sim < FUZZY_SIMILARITY_THRESHOLD {
            MatchType::Phonetic
        } else {
            MatchType::Fuzzy
        };
        (sim, kind)
    };

    let date_proximity = date_proximity_score(
        query.date.as_deref(),
        candidate.start_date.as_deref(),
        candidate.end_date.as_deref(),
    );

    let nationality_match = match (query.nationality.as_deref(), candidate.nationality.as_deref()) {
        (Some(q), Some(c)) => Some(q.eq_ignore_ascii_case(c)),
        _ => None,
    };
    let nationality_term = match nationality_match {
        Some(true) => 1.0,
        Some(false) => 0.0,
        None => 0.5,
    };

    let phonetic_term = if codes_agree { 1.0 } else { 0.0 };

    let confidence = (NAME_WEIGHT * name_similarity
        + DATE_WEIGHT * date_proximity
        + NATIONALITY_WEIGHT * nationality_term
        + PHONETIC_WEIGHT * phonetic_term)
        .clamp(0.0, 1.0);

    let details = format!(
        "name={name_similarity:.2} date={date_proximity:.2} nat={} phon={}",
        match nationality_match {
            Some(true) => "Y",
            Some(false) => "N",
            None => "?",
        },
        if codes_agree { "Y" } else { "N" },
    );

    MatchResult {
        candidate_id: candidate.candidate_id.clone(),
        confidence: round4(confidence),
        match_type,
        name_similarity: round4(name_similarity),
        date_proximity: round4(date_proximity),
        nationality_match,
        details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str, name: &str) -> CandidateRecord {
        CandidateRecord {
            candidate_id: id.into(),
            ship_name: name.into(),
            start_date: None,
            end_date: None,
            nationality: None,
        }
    }

    #[test]
    fn exact_requires_verbatim_equality() {
        let result = score_ship_match(&MatchQuery::new("BATAVIA"), &candidate("1", "BATAVIA"));
        assert_eq!(result.match_type, MatchType::Exact);
        assert_eq!(result.name_similarity, 1.0);

        let result = score_ship_match(&MatchQuery::new("Batavia"), &candidate("1", "BATAVIA"));
        assert_eq!(result.match_type, MatchType::NormalizedExact);
        assert_eq!(result.name_similarity, 1.0);
    }

    #[test]
    fn article_variants_are_normalized_exact() {
        let result = score_ship_match(&MatchQuery::new("De Batavia"), &candidate("1", "BATAVIA"));
        assert_eq!(result.match_type, MatchType::NormalizedExact);
        assert_eq!(result.name_similarity, 1.0);
    }

    #[test]
    fn high_similarity_with_code_agreement_is_fuzzy() {
        // 1 edit over 9 chars: similarity ~0.89, codes agree
        let result = score_ship_match(&MatchQuery::new("HOLANDIA"), &candidate("1", "HOLLANDIA"));
        assert_eq!(result.match_type, MatchType::Fuzzy);
        assert!(result.name_similarity > FUZZY_SIMILARITY_THRESHOLD);
    }

    #[test]
    fn low_similarity_with_code_agreement_is_phonetic() {
        // Same code, different spelling: B310 for both
        let q = phonetic_code("BETHOVY");
        assert_eq!(q, phonetic_code("BATAVIA"));
        let result = score_ship_match(&MatchQuery::new("BETHOVY"), &candidate("1", "BATAVIA"));
        assert_eq!(result.match_type, MatchType::Phonetic);
        assert!(result.name_similarity < FUZZY_SIMILARITY_THRESHOLD);
    }

    #[test]
    fn differing_codes_are_fuzzy() {
        let result = score_ship_match(&MatchQuery::new("XATAVIA"), &candidate("1", "BATAVIA"));
        assert_eq!(result.match_type, MatchType::Fuzzy);
    }

    #[test]
    fn nationality_terms() {
        let mut query = MatchQuery::new("BATAVIA");
        let mut rec = candidate("1", "BATAVIA");

        let result = score_ship_match(&query, &rec);
        assert_eq!(result.nationality_match, None);

        query.nationality = Some("NL".into());
        rec.nationality = Some("nl".into());
        let result = score_ship_match(&query, &rec);
        assert_eq!(result.nationality_match, Some(true));

        rec.nationality = Some("PT".into());
        let result = score_ship_match(&query, &rec);
        assert_eq!(result.nationality_match, Some(false));
    }

    #[test]
    fn composite_weighting() {
        // normalized_exact + 1-year gap + nationality + phonetic:
        // 0.50*1.0 + 0.30*0.8 + 0.10*1.0 + 0.10*1.0 = 0.94
        let query = MatchQuery {
            name: "De Batavia".into(),
            date: Some("1629-01-01".into()),
            nationality: Some("NL".into()),
            min_confidence: 0.0,
            max_results: 10,
        };
        let rec = CandidateRecord {
            candidate_id: "1".into(),
            ship_name: "BATAVIA".into(),
            start_date: Some("1628-10-27".into()),
            end_date: None,
            nationality: Some("NL".into()),
        };
        let result = score_ship_match(&query, &rec);
        assert!((result.confidence - 0.94).abs() < 1e-9);
        assert_eq!(result.details, "name=1.00 date=0.80 nat=Y phon=Y");
    }

    #[test]
    fn confidence_in_range_and_deterministic() {
        let query = MatchQuery::new("Wapen van Hoorn");
        let rec = candidate("x", "HOORN");
        let a = score_ship_match(&query, &rec);
        let b = score_ship_match(&query, &rec);
        assert_eq!(a.confidence, b.confidence);
        assert_eq!(a.details, b.details);
        assert!((0.0..=1.0).contains(&a.confidence));
        assert!((0.0..=1.0).contains(&a.name_similarity));
    }

    #[test]
    fn date_decay_is_monotone_in_confidence() {
        let rec = CandidateRecord {
            candidate_id: "1".into(),
            ship_name: "BATAVIA".into(),
            start_date: Some("1628".into()),
            end_date: None,
            nationality: None,
        };
        let mut last = f64::INFINITY;
        for year in 1628..=1633 {
            let query = MatchQuery {
                name: "BATAVIA".into(),
                date: Some(year.to_string()),
                nationality: None,
                min_confidence: 0.0,
                max_results: 10,
            };
            let confidence = score_ship_match(&query, &rec).confidence;
            assert!(confidence <= last, "confidence rose at gap {}", year - 1628);
            last = confidence;
        }
    }
}
