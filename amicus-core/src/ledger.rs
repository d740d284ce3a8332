//! Mood ledger: one entry per calendar day, with upsert semantics.
//!
//! Entries are keyed by `DayKey` (`YYYY-MM-DD`). A second write for the same
//! day overwrites fields in place instead of appending.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::catalog::CategoryKey;
use crate::error::{CoreError, Result};
use crate::mood::MoodColor;

const DAY_FORMAT: &str = "%Y-%m-%d";

/// Calendar-day key in canonical `YYYY-MM-DD` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| CoreError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    fn in_month(&self, year: i32, month: u32) -> bool {
        self.0.year() == year && self.0.month() == month
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DAY_FORMAT))
    }
}

impl FromStr for DayKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let date = NaiveDate::parse_from_str(s, DAY_FORMAT)
            .map_err(|_| CoreError::InvalidDate(s.to_string()))?;
        let key = DayKey(date);
        // Reject non-canonical spellings like "2024-1-5" so keys compare as strings.
        if key.to_string() != s {
            return Err(CoreError::InvalidDate(s.to_string()));
        }
        Ok(key)
    }
}

impl Serialize for DayKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DayKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoodEntry {
    pub date: DayKey,
    pub mood: MoodColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Percentage of entries per mood color.
///
/// Each percentage is rounded on its own, so the three need not sum to 100:
/// one entry of each color gives 33 / 33 / 33.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoodStats {
    pub red: u32,
    pub yellow: u32,
    pub green: u32,
    /// Number of entries the percentages were computed over.
    pub total: usize,
}

impl MoodStats {
    pub fn get(&self, mood: MoodColor) -> u32 {
        match mood {
            MoodColor::Red => self.red,
            MoodColor::Yellow => self.yellow,
            MoodColor::Green => self.green,
        }
    }

    pub fn has_data(&self) -> bool {
        self.total > 0
    }
}

/// Per-color `round(count / total * 100)`. All zero when there is nothing to count.
pub fn statistics_for<I>(moods: I) -> MoodStats
where
    I: IntoIterator<Item = MoodColor>,
{
    let mut counts = [0usize; 3];
    let mut total = 0usize;
    for mood in moods {
        let slot = match mood {
            MoodColor::Red => 0,
            MoodColor::Yellow => 1,
            MoodColor::Green => 2,
        };
        counts[slot] += 1;
        total += 1;
    }

    if total == 0 {
        return MoodStats::default();
    }

    let pct = |count: usize| ((count as f64 / total as f64) * 100.0).round() as u32;
    MoodStats {
        red: pct(counts[0]),
        yellow: pct(counts[1]),
        green: pct(counts[2]),
        total,
    }
}

/// One cell of a Sunday-first month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarSlot<'a> {
    /// Padding before the 1st of the month.
    Blank,
    Day {
        date: DayKey,
        entry: Option<&'a MoodEntry>,
    },
}

#[derive(Debug, Clone)]
pub struct CalendarMonth<'a> {
    /// e.g. "January 2024"
    pub label: String,
    pub slots: Vec<CalendarSlot<'a>>,
}

impl CalendarMonth<'_> {
    pub fn leading_blanks(&self) -> usize {
        self.slots
            .iter()
            .take_while(|s| matches!(s, CalendarSlot::Blank))
            .count()
    }

    pub fn days(&self) -> impl Iterator<Item = (DayKey, Option<&MoodEntry>)> + '_ {
        self.slots.iter().filter_map(|s| match s {
            CalendarSlot::Blank => None,
            CalendarSlot::Day { date, entry } => Some((*date, *entry)),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<MoodEntry>", into = "Vec<MoodEntry>")]
pub struct MoodLedger {
    entries: BTreeMap<DayKey, MoodEntry>,
}

impl From<Vec<MoodEntry>> for MoodLedger {
    /// Later entries for the same day win.
    fn from(entries: Vec<MoodEntry>) -> Self {
        Self {
            entries: entries.into_iter().map(|e| (e.date, e)).collect(),
        }
    }
}

impl From<MoodLedger> for Vec<MoodEntry> {
    fn from(ledger: MoodLedger) -> Self {
        ledger.entries.into_values().collect()
    }
}

impl MoodLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, date: DayKey) -> Option<&MoodEntry> {
        self.entries.get(&date)
    }

    /// Entries in date order.
    pub fn entries(&self) -> impl Iterator<Item = &MoodEntry> {
        self.entries.values()
    }

    /// Upsert the mood for a day, keeping any existing note.
    pub fn set_mood(&mut self, date: DayKey, mood: MoodColor) -> &MoodEntry {
        tracing::debug!(%date, %mood, "set mood");
        let entry = self.entries.entry(date).or_insert_with(|| MoodEntry {
            date,
            mood,
            note: None,
        });
        entry.mood = mood;
        entry
    }

    /// Upsert the note for a day. A new day gets the default (yellow) mood.
    pub fn set_note(&mut self, date: DayKey, text: impl Into<String>) -> &MoodEntry {
        tracing::debug!(%date, "set note");
        let text = text.into();
        let entry = self.entries.entry(date).or_insert_with(|| MoodEntry {
            date,
            mood: MoodColor::default(),
            note: None,
        });
        entry.note = Some(text);
        entry
    }

    pub fn statistics(&self) -> MoodStats {
        statistics_for(self.entries().map(|e| e.mood))
    }

    /// Statistics over a single month's entries. Invalid months fail with `InvalidMonth`.
    pub fn statistics_in_month(&self, year: i32, month: u32) -> Result<MoodStats> {
        first_of_month(year, month)?;
        Ok(statistics_for(
            self.entries()
                .filter(|e| e.date.in_month(year, month))
                .map(|e| e.mood),
        ))
    }

    /// Sunday-first grid for one month: `weekday(1st)` blanks, then one slot per day.
    pub fn calendar_month(&self, year: i32, month: u32) -> Result<CalendarMonth<'_>> {
        let first = first_of_month(year, month)?;
        let next = first
            .checked_add_months(Months::new(1))
            .ok_or(CoreError::InvalidMonth { year, month })?;
        let days_in_month = next.signed_duration_since(first).num_days() as usize;
        let leading = first.weekday().num_days_from_sunday() as usize;

        let mut slots = Vec::with_capacity(leading + days_in_month);
        slots.extend(std::iter::repeat_n(CalendarSlot::Blank, leading));
        for date in first.iter_days().take(days_in_month) {
            let key = DayKey(date);
            slots.push(CalendarSlot::Day {
                date: key,
                entry: self.entries.get(&key),
            });
        }

        Ok(CalendarMonth {
            label: first.format("%B %Y").to_string(),
            slots,
        })
    }
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(CoreError::InvalidMonth { year, month })
}

/// Every mood color with its percentage, in display order.
pub fn stats_rows(stats: &MoodStats) -> Vec<(MoodColor, u32)> {
    MoodColor::ALL.iter().map(|m| (*m, stats.get(*m))).collect()
}
