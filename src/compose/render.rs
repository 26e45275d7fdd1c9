//! Plain-text rendering of the markdown links the assembler emits.

use std::sync::OnceLock;

use regex::Regex;

/// The exact link pattern the assembler produces: `[text](url)`.
fn link_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link pattern"))
}

/// Rewrite every markdown link as `text (url)` for clipboard-friendly
/// plain text. Lossless with respect to labels and URLs.
pub fn links_to_plain(text: &str) -> String {
    link_pattern().replace_all(text, "$1 ($2)").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_rewritten() {
        assert_eq!(links_to_plain("see [A](http://x) now"), "see A (http://x) now");
    }

    #[test]
    fn test_no_markdown_left_behind() {
        let plain = links_to_plain("[MDM Help Center](https://example.com/help/)");
        assert!(plain.contains("MDM Help Center (https://example.com/help/)"));
        assert!(!link_pattern().is_match(&plain));
    }

    #[test]
    fn test_multiple_links() {
        let plain = links_to_plain("[a](u1)\n[b](u2)");
        assert_eq!(plain, "a (u1)\nb (u2)");
    }

    #[test]
    fn test_text_without_links_untouched() {
        let text = "nothing to rewrite here";
        assert_eq!(links_to_plain(text), text);
    }
}
