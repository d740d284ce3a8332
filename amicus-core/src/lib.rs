//! amicus-core: signal -> category -> content rules for the Amicus wellness companion

pub mod assessment;
pub mod catalog;
pub mod chat;
pub mod content;
pub mod error;
pub mod flix;
pub mod ledger;
pub mod mood;
pub mod reviews;
pub mod sentiment;
pub mod toggle;
pub mod window;

pub use assessment::{AnswerOption, Assessment, Progress, Question, ScoreResult, Tier, score};
pub use catalog::{Catalog, CategoryKey, ContentBundle, MediaOrigin, MediaTag};
pub use chat::{ChatMessage, ChatSession, Reply, daily_quote, respond};
pub use error::{CoreError, Result};
pub use flix::FlixBrowser;
pub use ledger::{CalendarMonth, CalendarSlot, DayKey, MoodEntry, MoodLedger, MoodStats, statistics_for};
pub use mood::MoodColor;
pub use reviews::{Review, ReviewBoard};
pub use sentiment::{Sentiment, classify};
pub use toggle::ToggleSet;
pub use window::{advance, window};
