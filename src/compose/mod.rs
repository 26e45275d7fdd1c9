//! Deterministic template engine for composing support emails.
//!
//! Rough notes (plus optional reply context) flow through a fixed
//! pipeline: intent classification and topic detection over the combined
//! text, sentence segmentation over the notes, then template assembly
//! against the selected tone's phrase bank. Everything is pure except
//! the two injected random choices (opener and closer).

mod assemble;
mod docs;
mod intent;
mod render;
mod segment;
mod tone;

pub use assemble::{Chooser, FixedChooser, RandomChooser};
pub use docs::{DocTopic, detect as detect_topics};
pub use intent::{Intent, classify as classify_intents};
pub use render::links_to_plain;
pub use segment::segment;
pub use tone::{PhraseBank, Tone};

use anyhow::Result;

/// Compose a polished email from rough notes.
///
/// Fails fast on empty or whitespace-only notes; the caller is expected
/// to filter those before invoking generation. Repeated calls with the
/// same inputs and the same chooser produce identical output.
pub fn generate(
    notes: &str,
    reply_context: &str,
    tone: Tone,
    chooser: &mut dyn Chooser,
) -> Result<String> {
    if notes.trim().is_empty() {
        anyhow::bail!("Cannot compose an email from empty notes");
    }

    let combined = if reply_context.trim().is_empty() {
        notes.to_string()
    } else {
        format!("{} {}", notes, reply_context)
    };
    let intents = classify_intents(&combined);
    let topics = detect_topics(&combined);
    let clauses = segment(notes);

    tracing::debug!(
        clauses = clauses.len(),
        topics = topics.len(),
        tone = tone.id(),
        "assembling email"
    );

    Ok(assemble::assemble(
        &clauses,
        reply_context,
        tone,
        &intents,
        &topics,
        chooser,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENROLLMENT_NOTES: &str =
        "device enrollment is failing because the MDM profile wasn't accepted";

    #[test]
    fn test_empty_notes_rejected() {
        let mut chooser = FixedChooser(0);
        assert!(generate("", "", Tone::Formal, &mut chooser).is_err());
        assert!(generate("   \n ", "", Tone::Formal, &mut chooser).is_err());
    }

    #[test]
    fn test_concise_enrollment_scenario() {
        let mut chooser = FixedChooser(0);
        let email = generate(ENROLLMENT_NOTES, "", Tone::Concise, &mut chooser).unwrap();

        assert!(email.starts_with("Hi,"));
        assert!(email.contains("• "));
        assert!(email.contains(
            "[MDM Help Center](https://www.manageengine.com/mobile-device-management/help/)"
        ));
        assert!(email.ends_with("Best,\n[Your Name]"));
    }

    #[test]
    fn test_deterministic_with_pinned_chooser() {
        let first = generate(ENROLLMENT_NOTES, "", Tone::Warm, &mut FixedChooser(0)).unwrap();
        let second = generate(ENROLLMENT_NOTES, "", Tone::Warm, &mut FixedChooser(0)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_reply_context_wins_over_troubleshoot_keywords() {
        let email = generate(
            ENROLLMENT_NOTES,
            "My device still shows the old profile.",
            Tone::Formal,
            &mut FixedChooser(0),
        )
        .unwrap();
        assert!(email.contains(Tone::Formal.bank().reply_ack));
        assert!(!email.contains(Tone::Formal.bank().troubleshoot_opener));
    }

    #[test]
    fn test_whitespace_reply_treated_as_absent() {
        let with_blank =
            generate(ENROLLMENT_NOTES, "   \n", Tone::Concise, &mut FixedChooser(0)).unwrap();
        let without =
            generate(ENROLLMENT_NOTES, "", Tone::Concise, &mut FixedChooser(0)).unwrap();
        assert_eq!(with_blank, without);
        assert!(!with_blank.contains(Tone::Concise.bank().reply_ack));
    }

    #[test]
    fn test_reply_context_contributes_to_detection() {
        // Topic keyword appears only in the reply, not the notes
        let email = generate(
            "they asked about the setup timeline",
            "our desktop central console shows nothing",
            Tone::Formal,
            &mut FixedChooser(0),
        )
        .unwrap();
        assert!(email.contains("[Desktop Central Help]"));
    }

    #[test]
    fn test_apology_notes_keep_apologetic_opening() {
        let email = generate(
            "we apologize for the slow response to your ticket",
            "",
            Tone::Apologetic,
            &mut FixedChooser(0),
        )
        .unwrap();
        let bank = Tone::Apologetic.bank();
        assert!(email.contains(bank.openers[0]));
        assert!(!email.contains(bank.troubleshoot_opener));
    }

    #[test]
    fn test_plain_copy_round_trip() {
        let email = generate(ENROLLMENT_NOTES, "", Tone::Technical, &mut FixedChooser(0)).unwrap();
        let plain = links_to_plain(&email);
        assert!(plain.contains(
            "MDM Help Center (https://www.manageengine.com/mobile-device-management/help/)"
        ));
        assert!(!plain.contains("]("));
    }

    #[test]
    fn test_every_tone_produces_output() {
        for tone in Tone::ALL {
            let email = generate("please check the agent inventory", "", tone, &mut FixedChooser(0))
                .unwrap();
            assert!(email.starts_with(tone.bank().greeting));
            assert!(email.ends_with(tone.bank().signoff));
        }
    }
}
