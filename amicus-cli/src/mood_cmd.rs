use amicus_core::ledger::stats_rows;
use amicus_core::{CalendarSlot, DayKey, MoodColor, MoodLedger, MoodStats};
use anyhow::{Context, Result, bail};
use chrono::Datelike;
use clap::Subcommand;

use crate::config::Config;
use crate::state::{LEDGER_FILE, Store};

#[derive(Subcommand, Debug)]
pub enum MoodCommand {
    /// Record a mood color (red, yellow, green) for a day
    Set {
        color: MoodColor,

        /// Day as YYYY-MM-DD (default: today in the profile timezone)
        #[arg(long)]
        date: Option<DayKey>,
    },

    /// Attach a note to a day (a day without a mood becomes yellow)
    Note {
        text: String,

        #[arg(long)]
        date: Option<DayKey>,
    },

    /// Percentage of days per mood color
    Stats {
        /// Restrict to one month, as YYYY-MM
        #[arg(long)]
        month: Option<String>,
    },

    /// Print a month grid with logged moods
    Calendar {
        #[arg(long)]
        year: Option<i32>,

        #[arg(long)]
        month: Option<u32>,
    },
}

pub fn run(command: MoodCommand, store: &Store, cfg: &Config) -> Result<()> {
    let mut ledger: MoodLedger = store.load_or_default(LEDGER_FILE)?;

    match command {
        MoodCommand::Set { color, date } => {
            let date = date.map_or_else(|| cfg.today(), Ok)?;
            let entry = ledger.set_mood(date, color);
            println!("{} {} {}", entry.date, entry.mood.emoji(), entry.mood.label());
            store.save(LEDGER_FILE, &ledger)?;
        }

        MoodCommand::Note { text, date } => {
            if text.trim().is_empty() {
                bail!("note text is empty");
            }
            let date = date.map_or_else(|| cfg.today(), Ok)?;
            let entry = ledger.set_note(date, text);
            println!("{} {} note saved", entry.date, entry.mood.emoji());
            store.save(LEDGER_FILE, &ledger)?;
        }

        MoodCommand::Stats { month } => {
            let stats = match month {
                Some(m) => {
                    let (year, month) = parse_year_month(&m)?;
                    ledger.statistics_in_month(year, month)?
                }
                None => ledger.statistics(),
            };
            print_stats(&stats);
        }

        MoodCommand::Calendar { year, month } => {
            let today = cfg.today()?.date();
            let year = year.unwrap_or(today.year());
            let month = month.unwrap_or(today.month());
            print_calendar(&ledger, year, month)?;
        }
    }

    Ok(())
}

fn parse_year_month(s: &str) -> Result<(i32, u32)> {
    let (y, m) = s
        .split_once('-')
        .with_context(|| format!("expected YYYY-MM, got '{s}'"))?;
    let year: i32 = y.parse().with_context(|| format!("bad year in '{s}'"))?;
    let month: u32 = m.parse().with_context(|| format!("bad month in '{s}'"))?;
    Ok((year, month))
}

fn print_stats(stats: &MoodStats) {
    if !stats.has_data() {
        println!("Start tracking your moods to see insights here");
        return;
    }
    println!("Mood summary ({} days)\n", stats.total);
    for (mood, pct) in stats_rows(stats) {
        println!("  {} {:<14} {:>3}%", mood.emoji(), mood.label(), pct);
    }
}

fn print_calendar(ledger: &MoodLedger, year: i32, month: u32) -> Result<()> {
    let cal = ledger.calendar_month(year, month)?;
    println!("{}\n", cal.label);
    println!(" Sun  Mon  Tue  Wed  Thu  Fri  Sat");

    let mut line = String::new();
    for (i, slot) in cal.slots.iter().enumerate() {
        let cell = match slot {
            CalendarSlot::Blank => "     ".to_string(),
            CalendarSlot::Day { date, entry } => {
                let mark = match entry.map(|e| e.mood) {
                    Some(MoodColor::Red) => 'R',
                    Some(MoodColor::Yellow) => 'Y',
                    Some(MoodColor::Green) => 'G',
                    None => ' ',
                };
                format!(" {:>2}{} ", date.day(), mark)
            }
        };
        line.push_str(&cell);
        if i % 7 == 6 {
            println!("{}", line.trim_end());
            line.clear();
        }
    }
    if !line.is_empty() {
        println!("{}", line.trim_end());
    }

    let notes: Vec<_> = cal
        .days()
        .filter_map(|(date, e)| e.and_then(|e| e.note.as_deref().map(|n| (date, n))))
        .collect();
    if !notes.is_empty() {
        println!("\nNotes:");
        for (date, note) in notes {
            println!("- {date}: {note}");
        }
    }

    Ok(())
}
