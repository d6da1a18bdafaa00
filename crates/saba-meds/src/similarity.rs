//! Typo-tolerant string similarity for drug-name resolution.
//!
//! Jaro similarity with the Winkler common-prefix bonus. Transpositions
//! and single-character slips score well above unrelated strings, which
//! is what the normalizer needs to resolve misspelled medication names.

/// Winkler prefix scaling factor.
const PREFIX_SCALE: f64 = 0.1;

/// Maximum common-prefix length the Winkler bonus considers.
const MAX_PREFIX: usize = 4;

/// Classic Jaro similarity in [0, 1].
///
/// Two empty strings compare as identical (1.0); one empty string against
/// anything else is 0.0.
pub fn jaro(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    // Characters match when equal and within half the longer length.
    let window = (a.len().max(b.len()) / 2).saturating_sub(1);

    let mut a_matched = vec![false; a.len()];
    let mut b_matched = vec![false; b.len()];
    let mut matches = 0usize;

    for (i, &ca) in a.iter().enumerate() {
        let lo = i.saturating_sub(window);
        let hi = (i + window + 1).min(b.len());
        for j in lo..hi {
            if !b_matched[j] && b[j] == ca {
                a_matched[i] = true;
                b_matched[j] = true;
                matches += 1;
                break;
            }
        }
    }

    if matches == 0 {
        return 0.0;
    }

    // Half-transpositions: matched characters out of order.
    let mut transpositions = 0usize;
    let mut j = 0usize;
    for (i, &ca) in a.iter().enumerate() {
        if !a_matched[i] {
            continue;
        }
        while !b_matched[j] {
            j += 1;
        }
        if ca != b[j] {
            transpositions += 1;
        }
        j += 1;
    }

    let m = matches as f64;
    let t = (transpositions / 2) as f64;
    (m / a.len() as f64 + m / b.len() as f64 + (m - t) / m) / 3.0
}

/// Jaro-Winkler: Jaro boosted by a shared-prefix bonus of up to four
/// characters.
pub fn similarity(a: &str, b: &str) -> f64 {
    let base = jaro(a, b);

    let prefix = a
        .chars()
        .zip(b.chars())
        .take(MAX_PREFIX)
        .take_while(|(x, y)| x == y)
        .count();

    base + prefix as f64 * PREFIX_SCALE * (1.0 - base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_one() {
        assert_eq!(similarity("warfarin", "warfarin"), 1.0);
        assert_eq!(similarity("a", "a"), 1.0);
    }

    #[test]
    fn both_empty_is_one_single_empty_is_zero() {
        // Degenerate case kept as-is: two empty strings are fully similar.
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity("", "warfarin"), 0.0);
        assert_eq!(similarity("warfarin", ""), 0.0);
    }

    #[test]
    fn bounded_between_zero_and_one() {
        let samples = [
            ("warfarin", "wafrin"),
            ("aspirin", "asprin"),
            ("metformin", "xyz"),
            ("abc", "cba"),
            ("קומדין", "קומדין"),
            ("", "x"),
        ];
        for (a, b) in samples {
            let s = similarity(a, b);
            assert!((0.0..=1.0).contains(&s), "similarity({a:?}, {b:?}) = {s}");
        }
    }

    #[test]
    fn tolerates_transposition_typo() {
        // A dropped/transposed character must stay above the acceptance
        // threshold used by the normalizer.
        assert!(similarity("wafrin", "warfarin") >= 0.85);
        assert!(similarity("asprin", "aspirin") >= 0.85);
    }

    #[test]
    fn unrelated_names_score_low() {
        assert!(similarity("warfarin", "metformin") < 0.75);
        assert!(similarity("omeprazole", "bisoprolol") < 0.75);
    }

    #[test]
    fn prefix_bonus_favors_shared_start() {
        let with_prefix = similarity("amlodipine", "amlodipin");
        let without = similarity("amlodipine", "mlodipinea");
        assert!(with_prefix > without);
    }
}
