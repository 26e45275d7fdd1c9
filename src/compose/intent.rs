//! Keyword-based intent classification for rough notes.

use std::collections::HashSet;
use std::sync::OnceLock;

use aho_corasick::{AhoCorasick, AhoCorasickBuilder};
use regex::Regex;

/// Coarse category of what the agent's notes are about.
///
/// Drives the opening-sentence choice and whether logs-guide links are
/// appended to the documentation block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Troubleshoot,
    Followup,
    Gratitude,
    Apology,
    Guide,
    Logs,
    Enrollment,
    Patch,
    License,
    /// Fallback when no keyword pattern matches
    General,
}

/// Keyword patterns and the intent each one signals.
/// Matched case-insensitively as substrings.
const INTENT_PATTERNS: &[(&str, Intent)] = &[
    ("fail", Intent::Troubleshoot),
    ("error", Intent::Troubleshoot),
    ("issue", Intent::Troubleshoot),
    ("problem", Intent::Troubleshoot),
    ("not work", Intent::Troubleshoot),
    ("doesn't work", Intent::Troubleshoot),
    ("broken", Intent::Troubleshoot),
    ("unable", Intent::Troubleshoot),
    ("crash", Intent::Troubleshoot),
    ("stuck", Intent::Troubleshoot),
    ("follow up", Intent::Followup),
    ("following up", Intent::Followup),
    ("checking in", Intent::Followup),
    ("any update", Intent::Followup),
    ("reminder", Intent::Followup),
    ("thank", Intent::Gratitude),
    ("appreciate", Intent::Gratitude),
    ("grateful", Intent::Gratitude),
    ("sorry", Intent::Apology),
    ("apolog", Intent::Apology),
    ("delay", Intent::Apology),
    ("inconvenience", Intent::Apology),
    ("how to", Intent::Guide),
    ("how do", Intent::Guide),
    ("guide", Intent::Guide),
    ("steps", Intent::Guide),
    ("instructions", Intent::Guide),
    ("configure", Intent::Guide),
    ("set up", Intent::Guide),
    ("traces", Intent::Logs),
    ("enroll", Intent::Enrollment),
    ("onboard", Intent::Enrollment),
    ("activation", Intent::Enrollment),
    ("patch", Intent::Patch),
    ("hotfix", Intent::Patch),
    ("upgrade", Intent::Patch),
    ("update the", Intent::Patch),
    ("license", Intent::License),
    ("licence", Intent::License),
    ("subscription", Intent::License),
    ("renewal", Intent::License),
];

/// Word-bounded pattern for the logs intent. A bare "log" substring
/// would also hit "apology", "catalog", "dialog", and "login".
fn logs_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)\blogs?\b").expect("valid logs pattern"))
}

/// Build the pattern automaton once; patterns are fixed at compile time.
fn matcher() -> &'static AhoCorasick {
    static MATCHER: OnceLock<AhoCorasick> = OnceLock::new();
    MATCHER.get_or_init(|| {
        AhoCorasickBuilder::new()
            .ascii_case_insensitive(true)
            .build(INTENT_PATTERNS.iter().map(|(pattern, _)| *pattern))
            .expect("intent patterns are a valid automaton")
    })
}

/// Classify free text into the set of matching intents.
///
/// Returns every intent with at least one keyword hit; when nothing
/// matches (including empty input) the result is exactly `{General}`.
pub fn classify(text: &str) -> HashSet<Intent> {
    let mut intents = HashSet::new();

    for mat in matcher().find_overlapping_iter(text) {
        intents.insert(INTENT_PATTERNS[mat.pattern().as_usize()].1);
    }

    if logs_pattern().is_match(text) {
        intents.insert(Intent::Logs);
    }

    if intents.is_empty() {
        intents.insert(Intent::General);
    }
    intents
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_falls_back_to_general() {
        assert_eq!(classify(""), HashSet::from([Intent::General]));
    }

    #[test]
    fn test_no_match_falls_back_to_general() {
        assert_eq!(classify("xyz"), HashSet::from([Intent::General]));
    }

    #[test]
    fn test_general_never_mixed_with_matches() {
        let intents = classify("the agent crashed");
        assert!(intents.contains(&Intent::Troubleshoot));
        assert!(!intents.contains(&Intent::General));
    }

    #[test]
    fn test_multiple_intents() {
        let intents = classify("Enrollment failed, please check the agent logs");
        assert!(intents.contains(&Intent::Enrollment));
        assert!(intents.contains(&Intent::Troubleshoot));
        assert!(intents.contains(&Intent::Logs));
    }

    #[test]
    fn test_case_insensitive() {
        let intents = classify("LICENSE RENEWAL");
        assert_eq!(intents, HashSet::from([Intent::License]));
    }

    #[test]
    fn test_apology_text_is_not_logs() {
        let intents = classify("we apologize for the inconvenience");
        assert!(intents.contains(&Intent::Apology));
        assert!(!intents.contains(&Intent::Logs));
    }

    #[test]
    fn test_log_requires_word_boundary() {
        assert!(!classify("browse the product catalog").contains(&Intent::Logs));
        assert!(!classify("the login dialog hangs").contains(&Intent::Logs));
        assert!(classify("attach the agent log").contains(&Intent::Logs));
        assert!(classify("send us the logs").contains(&Intent::Logs));
    }

    #[test]
    fn test_duplicate_keywords_collapse() {
        // "fail" appears twice but sets have no duplicates
        let intents = classify("it failed and failed again");
        assert_eq!(intents.len(), 1);
    }
}
