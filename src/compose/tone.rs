//! Tone profiles and their phrase banks.
//!
//! Every tone maps to an immutable [`PhraseBank`] holding all the canned
//! fragments the assembler draws from. The banks are static data so new
//! tones can be added without touching the assembly algorithm.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Style profile controlling phrase selection and body formatting
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Formal,
    Warm,
    Concise,
    Technical,
    Apologetic,
    Proactive,
}

/// Canned phrases for one tone.
///
/// Invariant: every field is populated for every tone; `openers` and
/// `closers` each hold at least one variant.
#[derive(Debug)]
pub struct PhraseBank {
    pub greeting: &'static str,
    pub signoff: &'static str,
    /// Lead-in fragments; the first segmented clause is appended to the
    /// chosen opener when no reply context or troubleshoot intent applies.
    pub openers: &'static [&'static str],
    pub closers: &'static [&'static str],
    pub reply_ack: &'static str,
    pub troubleshoot_opener: &'static str,
    pub doc_intro: &'static str,
}

impl Tone {
    pub const ALL: [Tone; 6] = [
        Tone::Formal,
        Tone::Warm,
        Tone::Concise,
        Tone::Technical,
        Tone::Apologetic,
        Tone::Proactive,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Tone::Formal => "formal",
            Tone::Warm => "warm",
            Tone::Concise => "concise",
            Tone::Technical => "technical",
            Tone::Apologetic => "apologetic",
            Tone::Proactive => "proactive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tone::Formal => "Formal",
            Tone::Warm => "Warm",
            Tone::Concise => "Concise",
            Tone::Technical => "Technical",
            Tone::Apologetic => "Apologetic",
            Tone::Proactive => "Proactive",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Tone::Formal => "Professional & authoritative",
            Tone::Warm => "Friendly & empathetic",
            Tone::Concise => "Brief & to the point",
            Tone::Technical => "Detailed & precise",
            Tone::Apologetic => "Sincere & reassuring",
            Tone::Proactive => "Confident & solutions-focused",
        }
    }

    /// Get the phrase bank for this tone
    pub fn bank(&self) -> &'static PhraseBank {
        match self {
            Tone::Formal => &FORMAL,
            Tone::Warm => &WARM,
            Tone::Concise => &CONCISE,
            Tone::Technical => &TECHNICAL,
            Tone::Apologetic => &APOLOGETIC,
            Tone::Proactive => &PROACTIVE,
        }
    }
}

impl FromStr for Tone {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "formal" => Ok(Tone::Formal),
            "warm" => Ok(Tone::Warm),
            "concise" => Ok(Tone::Concise),
            "technical" => Ok(Tone::Technical),
            "apologetic" => Ok(Tone::Apologetic),
            "proactive" => Ok(Tone::Proactive),
            other => anyhow::bail!(
                "Unknown tone '{}'. Valid tones: formal, warm, concise, technical, apologetic, proactive",
                other
            ),
        }
    }
}

static FORMAL: PhraseBank = PhraseBank {
    greeting: "Dear [Customer Name],",
    signoff: "Best regards,\n[Your Name]",
    openers: &[
        "Thank you for contacting our support team. I understand that",
        "I am writing to inform you that",
        "Thank you for bringing this to our attention. We have noted that",
    ],
    closers: &[
        "Please do not hesitate to reach out if you have any further questions.",
        "We appreciate your patience and cooperation.",
        "Thank you for your continued trust in our products.",
    ],
    reply_ack: "Thank you for your reply. I have reviewed the details you shared.",
    troubleshoot_opener: "Thank you for reporting this issue. I understand how disruptive this can be, and I would like to help you resolve it.",
    doc_intro: "For your reference, the following documentation may be helpful:",
};

static WARM: PhraseBank = PhraseBank {
    greeting: "Hi there,",
    signoff: "Warm regards,\n[Your Name]",
    openers: &[
        "Thanks so much for getting in touch! I understand that",
        "Hope you're doing well! I wanted to reach out because",
        "Thanks for reaching out! It sounds like",
    ],
    closers: &[
        "Don't hesitate to reach out if anything else comes up, we're always happy to help!",
        "Wishing you a great rest of your day!",
        "We're here whenever you need us!",
    ],
    reply_ack: "Thanks for getting back to us! I've gone through your message.",
    troubleshoot_opener: "I'm sorry to hear you're running into trouble. Let's get this sorted out together.",
    doc_intro: "Here are a few resources that should help:",
};

static CONCISE: PhraseBank = PhraseBank {
    greeting: "Hi,",
    signoff: "Best,\n[Your Name]",
    openers: &[
        "Quick update:",
        "Regarding your request:",
        "Here's where things stand:",
    ],
    closers: &[
        "Let me know if you have questions.",
        "Happy to clarify if needed.",
        "Reach out if anything is unclear.",
    ],
    reply_ack: "Thanks for your reply.",
    troubleshoot_opener: "Thanks for flagging this. Here's what we found:",
    doc_intro: "Relevant docs:",
};

static TECHNICAL: PhraseBank = PhraseBank {
    greeting: "Hello,",
    signoff: "Regards,\n[Your Name]\nTechnical Support",
    openers: &[
        "After reviewing your request, our analysis indicates that",
        "Based on the information provided, we have determined that",
        "Our initial investigation shows that",
    ],
    closers: &[
        "Please share the results once you have completed these steps.",
        "If the issue persists after these steps, please send us the relevant log files.",
        "Let us know the outcome and we will proceed with further analysis.",
    ],
    reply_ack: "Thank you for the additional details. I have analyzed the information in your reply.",
    troubleshoot_opener: "Thank you for the report. We have investigated the behavior you described and identified the likely cause.",
    doc_intro: "Refer to the following technical documentation:",
};

static APOLOGETIC: PhraseBank = PhraseBank {
    greeting: "Dear [Customer Name],",
    signoff: "Sincerely,\n[Your Name]",
    openers: &[
        "I sincerely apologize for the inconvenience. I understand that",
        "Please accept our apologies for the trouble this has caused. We recognize that",
        "I'm very sorry for the difficulty you've experienced. I understand that",
    ],
    closers: &[
        "Once again, we apologize for any inconvenience this has caused.",
        "Thank you for your patience and understanding while we make this right.",
        "We truly appreciate your patience as we work through this.",
    ],
    reply_ack: "Thank you for your patience, and I apologize for the delay in getting back to you.",
    troubleshoot_opener: "I'm truly sorry for the disruption this issue has caused. Resolving it is our top priority.",
    doc_intro: "To help prevent this in the future, these resources may be useful:",
};

static PROACTIVE: PhraseBank = PhraseBank {
    greeting: "Hello,",
    signoff: "Best,\n[Your Name]\nCustomer Success Team",
    openers: &[
        "Good news: we've already started looking into this. We noticed that",
        "We've been monitoring this on our end and found that",
        "We wanted to get ahead of this and let you know that",
    ],
    closers: &[
        "We'll keep monitoring on our end and follow up with any updates.",
        "We've already scheduled a follow-up check to confirm everything stays healthy.",
        "Expect another update from us shortly.",
    ],
    reply_ack: "Thanks for the update. We've already begun acting on the information you sent.",
    troubleshoot_opener: "We've identified the issue and have already begun working on a resolution.",
    doc_intro: "To stay ahead of this, we recommend the following guides:",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tone_has_complete_bank() {
        for tone in Tone::ALL {
            let bank = tone.bank();
            assert!(!bank.greeting.is_empty(), "{}: empty greeting", tone.id());
            assert!(!bank.signoff.is_empty(), "{}: empty signoff", tone.id());
            assert!(!bank.openers.is_empty(), "{}: no openers", tone.id());
            assert!(!bank.closers.is_empty(), "{}: no closers", tone.id());
            assert!(!bank.reply_ack.is_empty(), "{}: empty reply ack", tone.id());
            assert!(
                !bank.troubleshoot_opener.is_empty(),
                "{}: empty troubleshoot opener",
                tone.id()
            );
            assert!(!bank.doc_intro.is_empty(), "{}: empty doc intro", tone.id());
            assert!(bank.openers.iter().all(|o| !o.is_empty()));
            assert!(bank.closers.iter().all(|c| !c.is_empty()));
        }
    }

    #[test]
    fn test_tone_from_str() {
        assert_eq!("formal".parse::<Tone>().unwrap(), Tone::Formal);
        assert_eq!("  Concise ".parse::<Tone>().unwrap(), Tone::Concise);
        assert!("casual".parse::<Tone>().is_err());
        assert!("".parse::<Tone>().is_err());
    }

    #[test]
    fn test_tone_ids_round_trip() {
        for tone in Tone::ALL {
            assert_eq!(tone.id().parse::<Tone>().unwrap(), tone);
        }
    }
}
