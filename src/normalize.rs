//! Ship name normalization.

/// Leading determiners and prefixes stripped during normalization.
/// San/Santa/Sao are never stripped: they are part of the identity of
/// names like "San Pablo", "Santa Ana", "Sao Gabriel".
const STRIP_PREFIXES: &[&str] = &[
    "DE", "HET", "DEN", "DER", "A", "O", "LA", "EL", "LOS", "LAS", "LE", "LES", "HMS", "VOC",
    "SS", "USS", "CSS", "RMS", "S", "T",
];

fn is_strippable(token: &str) -> bool {
    STRIP_PREFIXES.contains(&token)
}

/// Normalize a ship name for matching.
///
/// Uppercases, drops non-alphanumeric characters, collapses whitespace,
/// then strips leading determiner/prefix tokens while at least one
/// non-strippable token remains in the rest of the name. A name made
/// solely of strippable tokens comes back unstripped, never empty.
/// Idempotent under repeated application.
///
/// Examples:
///     "De Batavia"         -> "BATAVIA"
///     "'T Wapen van Hoorn" -> "WAPEN VAN HOORN"
///     "HMS Victory"        -> "VICTORY"
///     "Santa Ana"          -> "SANTA ANA"
pub fn normalize_ship_name(name: &str) -> String {
    let upper = name.to_uppercase();

    let mut tokens: Vec<String> = upper
        .split_whitespace()
        .map(|t| {
            t.chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect::<String>()
        })
        .filter(|t| !t.is_empty())
        .collect();

    // Strip leading prefixes only while a non-strippable token remains
    // after them, so "De La Rosa" -> "ROSA" but "De La" stays "DE LA".
    while tokens.len() > 1
        && is_strippable(&tokens[0])
        && tokens[1..].iter().any(|t| !is_strippable(t))
    {
        tokens.remove(0);
    }

    tokens.join(" ")
}
