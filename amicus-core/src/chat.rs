//! Chat-style check-in: classify what the user wrote and answer from the
//! response catalog.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::content;
use crate::sentiment::{Sentiment, classify};
use crate::window::window;

pub const GREETING: &str = "Hello! I'm here to listen and support you. Tell me about your day in a word or two, or share whatever is on your mind...";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub from_user: bool,
    pub at: DateTime<Utc>,
    /// Set on replies only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

/// Reply to a single message, without touching any history.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub sentiment: Sentiment,
    pub message: String,
    pub suggestions: Vec<String>,
}

pub fn respond<R: Rng + ?Sized>(text: &str, rng: &mut R) -> Reply {
    let sentiment = classify(text);
    let bundle = content::chat_responses().pick_one(sentiment, rng);
    Reply {
        sentiment,
        message: bundle.message,
        suggestions: bundle.suggestions,
    }
}

/// Quote of the day for the mood picked on the home screen.
pub fn daily_quote<R: Rng + ?Sized>(mood: Sentiment, rng: &mut R) -> String {
    content::daily_quotes().pick_one(mood, rng).message
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    /// New session opened with the greeting.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            messages: vec![ChatMessage {
                id: 1,
                text: GREETING.to_string(),
                from_user: false,
                at: now,
                sentiment: None,
                suggestions: Vec::new(),
            }],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Append the user's message and a reply. Blank input is ignored.
    pub fn submit<R: Rng + ?Sized>(
        &mut self,
        text: &str,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Option<&ChatMessage> {
        if text.trim().is_empty() {
            return None;
        }

        let reply = respond(text, rng);
        let base = self.messages.len() as u64;
        tracing::debug!(sentiment = %reply.sentiment, "chat reply");

        self.messages.push(ChatMessage {
            id: base + 1,
            text: text.to_string(),
            from_user: true,
            at: now,
            sentiment: None,
            suggestions: Vec::new(),
        });
        self.messages.push(ChatMessage {
            id: base + 2,
            text: reply.message,
            from_user: false,
            at: now,
            sentiment: Some(reply.sentiment),
            suggestions: reply.suggestions,
        });
        self.messages.last()
    }

    /// A page of history, oldest first.
    pub fn page(&self, cursor: usize, size: usize) -> &[ChatMessage] {
        window(&self.messages, cursor, size)
    }
}
