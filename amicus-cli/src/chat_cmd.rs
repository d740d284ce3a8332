use amicus_core::{ChatMessage, ChatSession, Sentiment, daily_quote};
use anyhow::{Result, bail};
use chrono::Utc;
use clap::Subcommand;

use crate::config::Config;
use crate::state::{CHAT_FILE, Store};

#[derive(Subcommand, Debug)]
pub enum ChatCommand {
    /// Tell Amicus about your day
    Say { text: Vec<String> },

    /// Show earlier messages
    History {
        /// First message to show (0 = oldest)
        #[arg(long, default_value_t = 0)]
        cursor: usize,
    },

    /// Forget the conversation
    Clear,
}

pub fn run(command: ChatCommand, store: &Store, cfg: &Config) -> Result<()> {
    let now = Utc::now();
    let mut session: ChatSession = store
        .load(CHAT_FILE)?
        .unwrap_or_else(|| ChatSession::new(now));

    match command {
        ChatCommand::Say { text } => {
            let text = text.join(" ");
            let mut rng = rand::thread_rng();
            let Some(reply) = session.submit(&text, now, &mut rng) else {
                bail!("nothing to say? type a word or two about your day");
            };
            print_message(reply);
            store.save(CHAT_FILE, &session)?;
        }

        ChatCommand::History { cursor } => {
            for msg in session.page(cursor, cfg.chat.history_page) {
                print_message(msg);
            }
        }

        ChatCommand::Clear => {
            store.save(CHAT_FILE, &ChatSession::new(now))?;
            println!("Conversation cleared.");
        }
    }

    Ok(())
}

pub fn print_quote(mood: Sentiment) {
    let mut rng = rand::thread_rng();
    println!("\"{}\"", daily_quote(mood, &mut rng));
}

fn print_message(msg: &ChatMessage) {
    let who = if msg.from_user { "you" } else { "amicus" };
    let at = msg.at.format("%H:%M");
    match msg.sentiment {
        Some(s) => println!("[{at}] {who} ({s}): {}", msg.text),
        None => println!("[{at}] {who}: {}", msg.text),
    }
    for s in &msg.suggestions {
        println!("    * {s}");
    }
}
