//! Locale word lists for the transcript parser.
//!
//! Currency fillers and vernacular number phrases are plain data, so adding
//! a locale means adding a profile (or loading one from JSON), not touching
//! the parser logic.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A spoken multi-word number expression and the digit string it stands for,
/// e.g. "two thousand" -> "2000" or "do hazaar" -> "2000".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberPhrase {
    pub spoken: String,
    pub digits: String,
}

/// Word lists the parser strips or substitutes before tokenizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocaleProfile {
    /// Symbols removed wherever they appear, including glued to digits ("₹250").
    pub currency_symbols: Vec<String>,
    /// Filler words removed at word boundaries ("rupees", "bucks").
    pub currency_words: Vec<String>,
    /// Phrase table applied longest-spoken-first, so "two thousand" is
    /// substituted before a bare "thousand" can match inside it.
    pub number_phrases: Vec<NumberPhrase>,
}

impl LocaleProfile {
    /// English profile: dollar/rupee fillers plus "<unit> hundred/thousand"
    /// compound phrases.
    pub fn english() -> Self {
        Self {
            currency_symbols: symbols(),
            currency_words: to_strings(&[
                "rupees", "rupee", "dollars", "dollar", "bucks", "rs",
            ]),
            number_phrases: scaled_phrases(ENGLISH_UNITS, ENGLISH_SCALES),
        }
        .normalized()
    }

    /// Hinglish profile: everything in [`LocaleProfile::english`] plus the
    /// Hindi unit/scale vocabulary ("do hazaar", "teen sau", "ek lakh").
    pub fn hinglish() -> Self {
        let mut profile = Self::english();
        profile
            .number_phrases
            .extend(scaled_phrases(HINDI_UNITS, HINDI_SCALES));
        profile.normalized()
    }

    /// Load a profile from a JSON file, for locales shipped as data rather
    /// than code.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref())
            .with_context(|| format!("reading locale profile {}", path.as_ref().display()))?;
        let profile: Self = serde_json::from_str(&raw).context("parsing locale profile JSON")?;
        Ok(profile.normalized())
    }

    /// Lower-case everything and order phrases longest-first; parsing
    /// depends on both.
    fn normalized(mut self) -> Self {
        for symbol in &mut self.currency_symbols {
            *symbol = symbol.to_lowercase();
        }
        for word in &mut self.currency_words {
            *word = word.to_lowercase();
        }
        for phrase in &mut self.number_phrases {
            phrase.spoken = phrase.spoken.to_lowercase();
        }
        self.number_phrases
            .sort_by(|a, b| b.spoken.len().cmp(&a.spoken.len()));
        self
    }
}

impl Default for LocaleProfile {
    fn default() -> Self {
        Self::english()
    }
}

const ENGLISH_UNITS: &[(&str, &str)] = &[
    ("one", "1"),
    ("two", "2"),
    ("three", "3"),
    ("four", "4"),
    ("five", "5"),
    ("six", "6"),
    ("seven", "7"),
    ("eight", "8"),
    ("nine", "9"),
];

const ENGLISH_SCALES: &[(&str, &str)] = &[("thousand", "000"), ("hundred", "00")];

const HINDI_UNITS: &[(&str, &str)] = &[
    ("ek", "1"),
    ("do", "2"),
    ("teen", "3"),
    ("chaar", "4"),
    ("paanch", "5"),
    ("cheh", "6"),
    ("saat", "7"),
    ("aath", "8"),
    ("nau", "9"),
];

const HINDI_SCALES: &[(&str, &str)] = &[
    ("lakh", "00000"),
    ("hazaar", "000"),
    ("hazar", "000"),
    ("sau", "00"),
];

fn symbols() -> Vec<String> {
    to_strings(&["$", "₹"])
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|word| word.to_string()).collect()
}

/// Build "<unit> <scale>" phrases for every unit/scale pair, plus the bare
/// scale word standing for one of that scale ("thousand" -> "1000").
fn scaled_phrases(units: &[(&str, &str)], scales: &[(&str, &str)]) -> Vec<NumberPhrase> {
    let mut phrases = Vec::new();
    for (scale, zeros) in scales {
        for (unit, digit) in units {
            phrases.push(NumberPhrase {
                spoken: format!("{} {}", unit, scale),
                digits: format!("{}{}", digit, zeros),
            });
        }
        phrases.push(NumberPhrase {
            spoken: scale.to_string(),
            digits: format!("1{}", zeros),
        });
    }
    phrases
}
