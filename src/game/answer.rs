//! Answer text comparison.
//!
//! Guesses are matched against the stored title loosely: case, punctuation,
//! and whitespace shape never decide correctness.

/// Check a submitted guess against the stored answer
pub fn matches(submitted: &str, correct: &str) -> bool {
    normalize(submitted) == normalize(correct)
}

/// Canonical form used for comparison: lowercased, punctuation stripped,
/// whitespace trimmed and collapsed to single spaces.
///
/// Normalizing an already-normalized string returns it unchanged.
pub fn normalize(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();

    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = ["  The Lord of the Rings! ", "don't", "ab   cd", "🎬 movie"];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "second pass changed '{}'", input);
        }
    }

    #[test]
    fn test_case_and_punctuation_do_not_matter() {
        assert!(matches("spider-man", "Spider-Man"));
        assert!(matches("  the GODFATHER. ", "The Godfather"));
        assert!(matches("don't look up", "Dont Look Up"));
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(normalize("home   alone"), "home alone");
        assert!(matches("home \t alone", "Home Alone"));
    }

    #[test]
    fn test_non_latin_titles_survive_normalization() {
        // Stripping must only remove punctuation, not non-ASCII letters
        assert_eq!(normalize("ფორესტ გამპი"), "ფორესტ გამპი");
        assert!(matches("ფორესტ გამპი!", "ფორესტ გამპი"));
    }

    #[test]
    fn test_different_titles_do_not_match() {
        assert!(!matches("Jaws", "Jaws 2"));
        assert!(!matches("", "Jaws"));
    }
}
