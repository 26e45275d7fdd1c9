//! Prompts sent to the remote generation providers.

use crate::compose::{DocTopic, Tone};

/// System prompt shared by all remote providers
pub const COMPOSE_SYSTEM: &str = r#"You are an expert professional email writer for a ManageEngine support team. Transform the user's rough thoughts into a polished, complete email.

Output ONLY the email body. Start with a greeting like "Dear [Customer Name]," and end with a professional sign-off. No subject line, no meta commentary."#;

/// Build the user prompt: tone, documentation links to embed, the rough
/// notes, and the email being replied to when present.
pub fn build_user_prompt(
    notes: &str,
    reply_context: &str,
    tone: Tone,
    topics: &[&'static DocTopic],
) -> String {
    let mut prompt = format!("Tone: {}\n", tone.id());

    if !topics.is_empty() {
        prompt.push_str(
            "\nIMPORTANT: Embed these documentation links naturally in the email using markdown [anchor text](URL) format:\n",
        );
        for topic in topics {
            prompt.push_str(&format!("• {}: {}\n", topic.label, topic.help_url));
            prompt.push_str(&format!("• {}: {}\n", topic.logs_label, topic.logs_url));
        }
    }

    prompt.push_str(&format!("\nMy rough thoughts:\n{}", notes));

    if !reply_context.trim().is_empty() {
        prompt.push_str(&format!("\n\nEmail I am replying to:\n{}", reply_context));
    }

    prompt.push_str("\n\nWrite the complete polished email now:");
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::detect_topics;

    #[test]
    fn test_prompt_includes_tone_and_notes() {
        let prompt = build_user_prompt("fix the thing", "", Tone::Warm, &[]);
        assert!(prompt.contains("Tone: warm"));
        assert!(prompt.contains("My rough thoughts:\nfix the thing"));
        assert!(!prompt.contains("Email I am replying to"));
    }

    #[test]
    fn test_prompt_embeds_detected_docs() {
        let topics = detect_topics("mdm profile issue");
        let prompt = build_user_prompt("notes here", "", Tone::Formal, &topics);
        assert!(prompt.contains("MDM Help Center"));
        assert!(prompt.contains("MDM Logs Guide"));
    }

    #[test]
    fn test_prompt_includes_reply_context() {
        let prompt = build_user_prompt("notes", "their mail", Tone::Formal, &[]);
        assert!(prompt.contains("Email I am replying to:\ntheir mail"));
    }
}
