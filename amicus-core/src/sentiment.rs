//! Keyword classifier mapping free text to a sentiment.
//!
//! Literal substring containment only, no tokenization. "hard" matches
//! "hardly", and that is accepted behavior.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::{CategoryKey, parse_key};
use crate::error::CoreError;

/// Sentiment of a chat signal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sentiment {
    #[serde(rename = "positive")]
    Positive,
    #[serde(rename = "negative")]
    Negative,
    #[serde(rename = "neutral")]
    Neutral,
}

impl CategoryKey for Sentiment {
    const KIND: &'static str = "sentiment";
    const ALL: &'static [Self] = &[Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    fn key(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl Sentiment {
    /// Name used on the quote-of-the-day mood picker.
    pub fn quote_mood(&self) -> &'static str {
        match self {
            Sentiment::Positive => "happy",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "sad",
        }
    }

    /// Accepts both sentiment keys and quote moods ("happy", "sad").
    pub fn from_quote_mood(s: &str) -> Result<Self, CoreError> {
        match s.trim().to_lowercase().as_str() {
            "happy" => Ok(Sentiment::Positive),
            "sad" => Ok(Sentiment::Negative),
            other => other.parse(),
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Sentiment {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key(s)
    }
}

pub const POSITIVE_MARKERS: &[&str] = &[
    "happy", "great", "good", "wonderful", "amazing", "excited", "joy", "love", "peaceful",
];

pub const NEGATIVE_MARKERS: &[&str] = &[
    "sad", "angry", "frustrated", "tired", "stressed", "anxious", "worried", "difficult", "hard",
];

/// Classify a chat message.
/// Priority: positive markers > negative markers > neutral.
pub fn classify(text: &str) -> Sentiment {
    let lower = text.to_lowercase();

    if POSITIVE_MARKERS.iter().any(|m| lower.contains(m)) {
        return Sentiment::Positive;
    }

    if NEGATIVE_MARKERS.iter().any(|m| lower.contains(m)) {
        return Sentiment::Negative;
    }

    Sentiment::Neutral
}
