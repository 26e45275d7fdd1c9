//! Template assembly: greeting, opening, body, docs, closing, sign-off.

use std::collections::HashSet;

use super::docs::DocTopic;
use super::intent::Intent;
use super::tone::Tone;

/// Fixed lead-in for technical-tone step lists
const STEPS_HEADER: &str = "Please follow the steps below:";

/// Clauses grouped per paragraph in the default body format
const CLAUSES_PER_PARAGRAPH: usize = 2;

/// Selection seam for the two random choice points (opener and closer).
///
/// Production uses [`RandomChooser`]; tests pin an index so assembly
/// becomes fully deterministic.
pub trait Chooser {
    /// Pick an index in `0..len`. `len` is always at least 1 (phrase
    /// banks are never empty).
    fn choose(&mut self, len: usize) -> usize;
}

/// Uniform selection backed by the OS RNG
#[derive(Debug, Default)]
pub struct RandomChooser;

impl Chooser for RandomChooser {
    fn choose(&mut self, len: usize) -> usize {
        let mut bytes = [0u8; 8];
        // A zeroed buffer on RNG failure degrades to picking index 0
        if let Err(e) = getrandom::fill(&mut bytes) {
            tracing::warn!("OS RNG unavailable, using first variant: {}", e);
        }
        (u64::from_le_bytes(bytes) % len as u64) as usize
    }
}

/// Always picks the same index; for tests and reproducible output
#[derive(Debug, Clone, Copy)]
pub struct FixedChooser(pub usize);

impl Chooser for FixedChooser {
    fn choose(&mut self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}

/// Compose the full email from the classified inputs.
///
/// Section order is fixed: greeting, opening, body, documentation block
/// (only when topics were detected), closing, sign-off. Non-empty
/// sections are joined with blank lines.
pub fn assemble(
    clauses: &[String],
    reply_context: &str,
    tone: Tone,
    intents: &HashSet<Intent>,
    topics: &[&'static DocTopic],
    chooser: &mut dyn Chooser,
) -> String {
    let bank = tone.bank();
    let troubleshooting =
        intents.contains(&Intent::Troubleshoot) || intents.contains(&Intent::Logs);

    // Opening: reply acknowledgment wins, then troubleshoot opener, then
    // a random opener with the first clause folded in.
    let mut body_clauses = clauses;
    let opening = if !reply_context.trim().is_empty() {
        bank.reply_ack.to_string()
    } else if troubleshooting {
        bank.troubleshoot_opener.to_string()
    } else {
        let opener = bank.openers[chooser.choose(bank.openers.len())];
        match clauses.split_first() {
            Some((first, rest)) => {
                body_clauses = rest;
                format!("{} {}.", opener, lowercase_first(first))
            }
            None => opener.to_string(),
        }
    };

    let body = format_body(body_clauses, tone);
    let docs = format_docs(topics, tone, troubleshooting);
    let closing = bank.closers[chooser.choose(bank.closers.len())];

    [
        bank.greeting,
        opening.as_str(),
        body.as_str(),
        docs.as_str(),
        closing,
        bank.signoff,
    ]
    .iter()
    .filter(|section| !section.is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join("\n\n")
}

/// Render the body clauses in the tone's format: bullets for concise,
/// numbered steps for technical, two-clause paragraphs otherwise.
fn format_body(clauses: &[String], tone: Tone) -> String {
    if clauses.is_empty() {
        return String::new();
    }

    match tone {
        Tone::Concise => clauses
            .iter()
            .map(|clause| format!("• {}.", clause))
            .collect::<Vec<_>>()
            .join("\n"),
        Tone::Technical => {
            let mut lines = vec![STEPS_HEADER.to_string()];
            lines.extend(
                clauses
                    .iter()
                    .enumerate()
                    .map(|(i, clause)| format!("{}. {}.", i + 1, clause)),
            );
            lines.join("\n")
        }
        _ => clauses
            .chunks(CLAUSES_PER_PARAGRAPH)
            .map(|pair| {
                pair.iter()
                    .map(|clause| format!("{}.", clause))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

/// Render the documentation block: intro line, a help-center link per
/// detected topic, plus the logs guide when troubleshooting.
fn format_docs(topics: &[&'static DocTopic], tone: Tone, troubleshooting: bool) -> String {
    if topics.is_empty() {
        return String::new();
    }

    let mut lines = vec![tone.bank().doc_intro.to_string()];
    for topic in topics {
        lines.push(format!("[{}]({})", topic.label, topic.help_url));
        if troubleshooting {
            lines.push(format!("[{}]({})", topic.logs_label, topic.logs_url));
        }
    }
    lines.join("\n")
}

/// Lowercase the first character so a clause reads naturally after an
/// opener fragment.
fn lowercase_first(clause: &str) -> String {
    let mut chars = clause.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
