//! Mood colors picked on the calendar and on the flix page.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::{CategoryKey, parse_key};
use crate::error::CoreError;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MoodColor {
    #[serde(rename = "red")]
    Red,
    /// Mood given to a day that only has a note.
    #[default]
    #[serde(rename = "yellow")]
    Yellow,
    #[serde(rename = "green")]
    Green,
}

impl CategoryKey for MoodColor {
    const KIND: &'static str = "mood color";
    const ALL: &'static [Self] = &[MoodColor::Red, MoodColor::Yellow, MoodColor::Green];

    fn key(&self) -> &'static str {
        match self {
            MoodColor::Red => "red",
            MoodColor::Yellow => "yellow",
            MoodColor::Green => "green",
        }
    }
}

impl MoodColor {
    /// Calendar label
    pub fn label(&self) -> &'static str {
        match self {
            MoodColor::Red => "Sad/Stressed",
            MoodColor::Yellow => "Meh/Neutral",
            MoodColor::Green => "Happy/Content",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            MoodColor::Red => "😔",
            MoodColor::Yellow => "😐",
            MoodColor::Green => "😊",
        }
    }

    /// Heading for the film shelf matching this mood.
    pub fn flix_label(&self) -> &'static str {
        match self {
            MoodColor::Red => "Comforting & Healing",
            MoodColor::Yellow => "Light & Chill",
            MoodColor::Green => "Inspiring & Energetic",
        }
    }

    pub fn flix_description(&self) -> &'static str {
        match self {
            MoodColor::Red => "Movies that provide comfort, hope, and emotional healing",
            MoodColor::Yellow => "Easy-going films perfect for a relaxed, peaceful mood",
            MoodColor::Green => "Uplifting movies that motivate and energize your spirit",
        }
    }
}

impl fmt::Display for MoodColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MoodColor {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key(s)
    }
}
