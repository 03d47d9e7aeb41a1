//! Levenshtein edit distance and normalized similarity.

/// Minimum single-character insertions, deletions, and substitutions to
/// transform one string into the other. Two-row DP; ship names are short
/// (5-25 chars) so this stays cheap even on the fuzzy fallback path.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let mut s: Vec<char> = a.chars().collect();
    let mut t: Vec<char> = b.chars().collect();
    // Keep the shorter string on the row axis.
    if s.len() > t.len() {
        std::mem::swap(&mut s, &mut t);
    }
    if s.is_empty() {
        return t.len();
    }

    let mut prev: Vec<usize> = (0..=s.len()).collect();
    let mut curr: Vec<usize> = vec![0; s.len() + 1];

    for (j, tc) in t.iter().enumerate() {
        curr[0] = j + 1;
        for (i, sc) in s.iter().enumerate() {
            let cost = usize::from(sc != tc);
            curr[i + 1] = (curr[i] + 1) // insertion
                .min(prev[i + 1] + 1) // deletion
                .min(prev[i] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[s.len()]
}

/// Normalized similarity in [0.0, 1.0]: `1 - distance / max(len_a, len_b)`.
/// Two empty strings are identical by convention.
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein_distance(a, b) as f64 / max_len as f64
}
