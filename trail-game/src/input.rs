//! Sanitizing filters applied to every console answer.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// How a raw console line is cleaned before the game sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputFilter {
    /// Free text with markup tags and control characters removed.
    #[default]
    PlainText,
    /// Digits plus an optional leading `+` or `-`. The result stays a string.
    IntegerDigitsOnly,
}

impl InputFilter {
    /// Clean an already trimmed line.
    #[must_use]
    pub fn apply(self, line: &str) -> String {
        match self {
            Self::PlainText => strip_unsafe_text(line),
            Self::IntegerDigitsOnly => keep_signed_digits(line),
        }
    }
}

fn strip_unsafe_text(line: &str) -> String {
    // Tags (including one left unclosed at end of line) and ASCII control characters.
    Regex::new(r"<[^>]*(?:>|$)|[\x00-\x1F\x7F]")
        .map(|re| re.replace_all(line, "").into_owned())
        .unwrap_or_default()
}

fn keep_signed_digits(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    for ch in line.chars() {
        if ch.is_ascii_digit() || (out.is_empty() && matches!(ch, '+' | '-')) {
            out.push(ch);
        }
    }
    out
}

/// Read a yes/no answer. Empty or unrecognised input yields `default`.
#[must_use]
pub fn interpret_confirmation(input: &str, default: bool) -> bool {
    match input.chars().next().map(|ch| ch.to_ascii_lowercase()) {
        Some('y') => true,
        Some('n') => false,
        _ => default,
    }
}
