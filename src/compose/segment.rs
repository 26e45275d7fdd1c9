//! Sentence segmentation for rough notes.

/// Minimum trimmed length for a fragment to survive segmentation.
/// Filters empty splits and throwaway fillers like "ok" or "hmm".
const MIN_CLAUSE_LEN: usize = 5;

/// Split raw notes into cleaned, capitalized clauses.
///
/// Splits on runs of sentence terminators (`.`, `!`, `?`) and newlines,
/// drops fragments of trimmed length ≤ 4, and uppercases the first
/// character of each survivor. Source order is preserved; it determines
/// paragraph and step order in the assembled email.
pub fn segment(raw: &str) -> Vec<String> {
    raw.split(['.', '!', '?', '\n'])
        .map(str::trim)
        .filter(|fragment| fragment.chars().count() >= MIN_CLAUSE_LEN)
        .map(capitalize)
        .collect()
}

/// Uppercase the first character, leaving the rest untouched.
fn capitalize(fragment: &str) -> String {
    let mut chars = fragment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_fragments_dropped() {
        let clauses = segment("Hi. Ok. This one is long enough.");
        assert_eq!(clauses, vec!["This one is long enough"]);
    }

    #[test]
    fn test_capitalizes_first_char() {
        let clauses = segment("the profile was rejected");
        assert_eq!(clauses, vec!["The profile was rejected"]);
    }

    #[test]
    fn test_rest_of_clause_unchanged() {
        let clauses = segment("check the MDM server URL");
        assert_eq!(clauses, vec!["Check the MDM server URL"]);
    }

    #[test]
    fn test_splits_on_newlines_and_punctuation() {
        let clauses = segment("first problem here\nsecond problem there! third one too?");
        assert_eq!(
            clauses,
            vec![
                "First problem here",
                "Second problem there",
                "Third one too"
            ]
        );
    }

    #[test]
    fn test_order_preserved() {
        let clauses = segment("alpha step one. bravo step two. charlie step three.");
        assert_eq!(clauses.len(), 3);
        assert!(clauses[0].starts_with("Alpha"));
        assert!(clauses[2].starts_with("Charlie"));
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(segment("").is_empty());
        assert!(segment("  \n  . ! ?").is_empty());
    }
}
