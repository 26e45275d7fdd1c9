//! ManageEngine documentation catalog and topic detection.
//!
//! A topic is relevant to a text blob iff any of its trigger keywords
//! appears as a case-insensitive substring. Topics are independent;
//! the same notes can match several.

use std::sync::OnceLock;

use aho_corasick::{AhoCorasick, AhoCorasickBuilder};

/// A product documentation bundle eligible for linking
#[derive(Debug)]
pub struct DocTopic {
    pub key: &'static str,
    pub label: &'static str,
    pub help_url: &'static str,
    pub logs_label: &'static str,
    pub logs_url: &'static str,
    pub keywords: &'static [&'static str],
}

/// Fixed topic catalog; detection results preserve this order.
pub static CATALOG: &[DocTopic] = &[
    DocTopic {
        key: "mdm",
        label: "MDM Help Center",
        help_url: "https://www.manageengine.com/mobile-device-management/help/",
        logs_label: "MDM Logs Guide",
        logs_url: "https://www.manageengine.com/mobile-device-management/how-to/logs-how-to.html",
        keywords: &[
            "mdm",
            "mobile device",
            "enrollment",
            "profile",
            "policy",
            "app management",
            "ios",
            "android",
            "remote wipe",
            "byod",
            "kiosk",
        ],
    },
    DocTopic {
        key: "dc",
        label: "Desktop Central Help",
        help_url: "https://www.manageengine.com/products/desktop-central/help/",
        logs_label: "Desktop Central Logs Guide",
        logs_url: "https://www.manageengine.com/products/desktop-central/logs-how-to.html",
        keywords: &[
            "desktop central",
            "patch",
            "software deployment",
            "remote control",
            "inventory",
            "windows",
            "mac",
            "linux",
            "endpoint",
            "agent",
        ],
    },
];

/// One automaton over all keywords, each pattern mapped back to its
/// topic's index in [`CATALOG`].
fn matcher() -> &'static (AhoCorasick, Vec<usize>) {
    static MATCHER: OnceLock<(AhoCorasick, Vec<usize>)> = OnceLock::new();
    MATCHER.get_or_init(|| {
        let mut patterns = Vec::new();
        let mut topic_of_pattern = Vec::new();
        for (idx, topic) in CATALOG.iter().enumerate() {
            for keyword in topic.keywords {
                patterns.push(*keyword);
                topic_of_pattern.push(idx);
            }
        }
        let ac = AhoCorasickBuilder::new()
            .ascii_case_insensitive(true)
            .build(&patterns)
            .expect("topic keywords are a valid automaton");
        (ac, topic_of_pattern)
    })
}

/// Detect which documentation topics are relevant to the given text.
/// Returns topics in catalog order, each at most once.
pub fn detect(text: &str) -> Vec<&'static DocTopic> {
    let (ac, topic_of_pattern) = matcher();

    let mut hit = vec![false; CATALOG.len()];
    for mat in ac.find_overlapping_iter(text) {
        hit[topic_of_pattern[mat.pattern().as_usize()]] = true;
    }

    CATALOG
        .iter()
        .zip(hit)
        .filter_map(|(topic, matched)| matched.then_some(topic))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_mdm_topic() {
        let topics = detect("the MDM enrollment profile failed");
        assert!(topics.iter().any(|t| t.key == "mdm"));
    }

    #[test]
    fn test_unrelated_text_matches_nothing() {
        assert!(detect("unrelated text").is_empty());
    }

    #[test]
    fn test_topics_are_independent() {
        let topics = detect("push the patch policy to every endpoint");
        let keys: Vec<_> = topics.iter().map(|t| t.key).collect();
        assert_eq!(keys, vec!["mdm", "dc"]);
    }

    #[test]
    fn test_catalog_order_preserved() {
        // "agent" (dc) appears before "ios" (mdm) in the text, but the
        // result follows catalog order
        let topics = detect("the agent on the ios device");
        let keys: Vec<_> = topics.iter().map(|t| t.key).collect();
        assert_eq!(keys, vec!["mdm", "dc"]);
    }

    #[test]
    fn test_case_insensitive_matching() {
        assert!(!detect("BYOD rollout").is_empty());
    }

    #[test]
    fn test_topic_deduplication() {
        // Several mdm keywords, still a single topic entry
        let topics = detect("mdm policy profile for ios");
        assert_eq!(topics.len(), 1);
    }
}
