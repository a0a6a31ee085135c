//! Root-independent chord names for movable shapes.

/// Placeholder that stands in for the root letter.
pub const GENERIC_PREFIX: &str = "Ac. ";

/// Replace the leading root (`C`, `F#`, `Bb`, ...) of a chord name with
/// [`GENERIC_PREFIX`]. Names that don't start with a root letter are returned
/// unchanged.
///
/// # Example
/// ```
/// use fretlab::chord::generic_name;
///
/// assert_eq!(generic_name("C7"), "Ac. 7");
/// assert_eq!(generic_name("F#m7"), "Ac. m7");
/// assert_eq!(generic_name("Bb"), "Ac. ");
/// ```
pub fn generic_name(chord_name: &str) -> String {
    let mut chars = chord_name.chars();
    match chars.next() {
        Some('A'..='G') => {}
        _ => return chord_name.to_string(),
    }

    let rest = chars.as_str();
    let rest = rest
        .strip_prefix('#')
        .or_else(|| rest.strip_prefix('b'))
        .unwrap_or(rest);

    format!("{}{}", GENERIC_PREFIX, rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_name() {
        assert_eq!(generic_name("C7"), "Ac. 7");
        assert_eq!(generic_name("F#m7"), "Ac. m7");
        assert_eq!(generic_name("Ebm7b5"), "Ac. m7b5");
        assert_eq!(generic_name("G7(b13)"), "Ac. 7(b13)");
    }

    #[test]
    fn test_only_one_accidental_is_stripped() {
        assert_eq!(generic_name("Bbb9"), "Ac. b9");
    }

    #[test]
    fn test_non_chord_text_is_untouched() {
        assert_eq!(generic_name("Unnamed"), "Unnamed");
        assert_eq!(generic_name(""), "");
        assert_eq!(generic_name("c7"), "c7");
    }
}
