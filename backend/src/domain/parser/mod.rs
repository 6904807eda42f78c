//! Transcript-to-transaction parsing engine.
//!
//! Takes the raw, free-form transcript a speech capture session produced and
//! deterministically extracts a payee/item name and a positive amount. The
//! parser is pure: no clocks, no ids, no I/O, so every behavior here is
//! covered by plain unit tests. Id and timestamp assignment belong to the
//! ledger service.
//!
//! ## Pipeline
//!
//! 1. Reject empty/whitespace-only transcripts outright.
//! 2. Normalize: lower-case, strip currency symbols and filler words,
//!    substitute vernacular number phrases ("two thousand" -> "2000") from
//!    the active [`LocaleProfile`].
//! 3. Tokenize on whitespace and scan from the last token backward; the
//!    first token that converts to a finite value strictly greater than
//!    zero is the amount, everything before it is the name.
//!
//! Spoken amounts trail the name ("coffee twenty five"), which is why the
//! scan runs from the end. A digit inside a name ("Room 2 Coffee 25")
//! therefore stays part of the name; that is an accepted limitation of the
//! heuristic, not a bug.

pub mod locale;

pub use locale::{LocaleProfile, NumberPhrase};

use thiserror::Error;

/// Why a transcript could not be turned into a transaction. Both cases are
/// user-recoverable: the caller prompts the user to speak again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The capture session delivered no speech content.
    #[error("no speech detected, please speak to record a transaction")]
    EmptyTranscript,
    /// No strictly positive amount token was found, or nothing was left
    /// over to serve as a name.
    #[error("could not detect a name and amount, please speak the name followed by the amount")]
    NoAmountOrName,
}

/// The `{name, amount}` candidate produced by a successful parse, before
/// the ledger assigns an id and timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTransaction {
    pub name: String,
    pub amount: f64,
}

/// Pure transcript parser configured with a locale's word lists.
#[derive(Debug, Clone)]
pub struct TranscriptParser {
    locale: LocaleProfile,
}

impl TranscriptParser {
    /// Parser with the default (English) locale profile.
    pub fn new() -> Self {
        Self::with_locale(LocaleProfile::default())
    }

    pub fn with_locale(locale: LocaleProfile) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> &LocaleProfile {
        &self.locale
    }

    /// Extract a `{name, amount}` candidate from a finished transcript.
    pub fn parse(&self, transcript: &str) -> Result<ParsedTransaction, ParseError> {
        if transcript.trim().is_empty() {
            return Err(ParseError::EmptyTranscript);
        }

        let normalized = self.normalize(transcript);
        let words: Vec<&str> = normalized.split_whitespace().collect();

        // First positive number found scanning backward wins; earlier
        // numeric-looking tokens stay part of the name.
        for index in (0..words.len()).rev() {
            let Some(amount) = numeric_value(words[index]) else {
                continue;
            };
            if !amount.is_finite() || amount <= 0.0 {
                continue;
            }
            let name = title_case(&words[..index]);
            if name.is_empty() {
                return Err(ParseError::NoAmountOrName);
            }
            return Ok(ParsedTransaction { name, amount });
        }

        Err(ParseError::NoAmountOrName)
    }

    /// Ordered normalization pipeline: currency symbols, currency words,
    /// then vernacular number phrases (already sorted longest-first).
    fn normalize(&self, transcript: &str) -> String {
        let mut text = transcript.to_lowercase();
        for symbol in &self.locale.currency_symbols {
            text = text.replace(symbol.as_str(), " ");
        }
        for word in &self.locale.currency_words {
            text = replace_whole_words(&text, word, " ");
        }
        for phrase in &self.locale.number_phrases {
            text = replace_whole_words(&text, &phrase.spoken, &phrase.digits);
        }
        text.trim().to_string()
    }
}

impl Default for TranscriptParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip every character except digits, decimal point and minus sign, then
/// attempt numeric conversion. "rs.500" -> Some(500.0), "coffee" -> None.
fn numeric_value(token: &str) -> Option<f64> {
    let cleaned: String = token
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    cleaned.parse::<f64>().ok()
}

/// Upper-case the leading character of every word; the rest of each word is
/// left exactly as spoken.
fn title_case(words: &[&str]) -> String {
    words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Replace whole-word occurrences of `needle` (which may contain spaces)
/// with `replacement`. A match only counts when not butted up against other
/// alphanumeric characters, so "rs" never fires inside "cars".
fn replace_whole_words(haystack: &str, needle: &str, replacement: &str) -> String {
    if needle.is_empty() {
        return haystack.to_string();
    }
    let mut out = String::with_capacity(haystack.len());
    let mut rest = haystack;
    while let Some(pos) = rest.find(needle) {
        let end = pos + needle.len();
        let boundary_before = rest[..pos]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let boundary_after = rest[end..].chars().next().map_or(true, |c| !c.is_alphanumeric());
        if boundary_before && boundary_after {
            out.push_str(&rest[..pos]);
            out.push_str(replacement);
        } else {
            out.push_str(&rest[..end]);
        }
        rest = &rest[end..];
    }
    out.push_str(rest);
    out
}
