//! Text trigger classification
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Case-insensitive reminder prefix
//! - 1.0.0: Initial trigger set

use regex::Regex;
use std::sync::OnceLock;

pub const ROLL_TRIGGER: &str = "на дабл";
pub const RESET_TRIGGER: &str = "клара ресет";
pub const REMIND_PREFIX: &str = "клара напомни";

/// Whole-message match: "ех" plus optional trailing dots, nothing else.
const EXH_PATTERN: &str = r"^ех(\.+)?$";
/// ASCII digits only; `\d` would also accept other scripts' digits.
const NUMBER_PATTERN: &str = r"[0-9]+";

static EXH_RE: OnceLock<Regex> = OnceLock::new();
static NUMBER_RE: OnceLock<Regex> = OnceLock::new();

fn exh_re() -> &'static Regex {
    EXH_RE.get_or_init(|| Regex::new(EXH_PATTERN).expect("EXH_PATTERN is a valid regex"))
}

fn number_re() -> &'static Regex {
    NUMBER_RE.get_or_init(|| Regex::new(NUMBER_PATTERN).expect("NUMBER_PATTERN is a valid regex"))
}

/// What a message asks for. Produced per message and consumed immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandKind {
    /// Roll 0-100 for the phrase following the trigger.
    RollDouble(String),
    ResetQuery,
    ExhQuery,
    /// First run of digits after the prefix, empty if there was none.
    ReminderRequest(String),
    Unrecognized,
}

/// Classify a message. Rules are tried in order and the first hit wins.
pub fn classify(text: &str) -> CommandKind {
    let text = text.trim();

    if let Some(idx) = text.find(ROLL_TRIGGER) {
        let phrase = text[idx + ROLL_TRIGGER.len()..].trim();
        return CommandKind::RollDouble(phrase.to_string());
    }

    if text.contains(RESET_TRIGGER) {
        return CommandKind::ResetQuery;
    }

    if exh_re().is_match(text) {
        return CommandKind::ExhQuery;
    }

    if let Some(rest) = strip_prefix_ignore_case(text, REMIND_PREFIX) {
        let number = number_re()
            .find(rest)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        return CommandKind::ReminderRequest(number);
    }

    CommandKind::Unrecognized
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let mut chars = text.char_indices();
    for expected in prefix.chars() {
        let (_, actual) = chars.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    let rest_start = chars.next().map_or(text.len(), |(idx, _)| idx);
    Some(&text[rest_start..])
}
