//! Phonetic encoding for bucketing spelling variants of the same name.

/// Consonant-class digit for a letter; '0' for vowels and the letters the
/// scheme treats as separators (H, W, Y).
fn consonant_class(c: char) -> char {
    match c {
        'B' | 'F' | 'P' | 'V' => '1',
        'C' | 'G' | 'J' | 'K' | 'Q' | 'S' | 'X' | 'Z' => '2',
        'D' | 'T' => '3',
        'L' => '4',
        'M' | 'N' => '5',
        'R' => '6',
        _ => '0',
    }
}

/// 4-character phonetic code: first letter + 3 consonant-class digits,
/// adjacent duplicate classes collapsed, vowels dropped (and resetting the
/// duplicate window), zero-padded. Best-effort bucketing: spelling variants
/// like "HOLLANDIA"/"HOLANDIA" share a code, but unrelated names can
/// collide. Empty or letterless input yields an empty code.
pub fn phonetic_code(name: &str) -> String {
    let letters: Vec<char> = name
        .to_uppercase()
        .chars()
        .filter(char::is_ascii_alphabetic)
        .collect();

    let Some((&first, rest)) = letters.split_first() else {
        return String::new();
    };

    let mut code = String::with_capacity(4);
    code.push(first);
    let mut prev = consonant_class(first);

    for &c in rest {
        let digit = consonant_class(c);
        if digit != '0' && digit != prev {
            code.push(digit);
            if code.len() == 4 {
                break;
            }
        }
        prev = digit;
    }

    while code.len() < 4 {
        code.push('0');
    }
    code
}
