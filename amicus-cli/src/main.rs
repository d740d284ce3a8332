use amicus_core::Sentiment;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod chat_cmd;
mod config;
mod flix_cmd;
mod mood_cmd;
mod quiz_cmd;
mod reviews_cmd;
mod state;

use chat_cmd::ChatCommand;
use flix_cmd::FlixCommand;
use mood_cmd::MoodCommand;
use reviews_cmd::ReviewsCommand;
use state::Store;

#[derive(Parser, Debug)]
#[command(
    name = "amicus",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("AMICUS_BUILD_SHA"), ")"),
    about = "Amicus wellness companion"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Chat-style daily check-in
    Chat {
        #[command(subcommand)]
        command: ChatCommand,
    },

    /// Quote of the day for a mood
    Quote {
        /// happy, neutral or sad
        #[arg(long, default_value = "neutral", value_parser = Sentiment::from_quote_mood)]
        mood: Sentiment,
    },

    /// Take the mental wellness assessment
    Quiz {
        /// Comma-separated answer weights (4 = best), skips the prompts
        #[arg(long)]
        answers: Option<String>,
    },

    /// Mood calendar: log colors and notes, view stats
    Mood {
        #[command(subcommand)]
        command: MoodCommand,
    },

    /// Films matched to your mood
    Flix {
        #[command(subcommand)]
        command: FlixCommand,
    },

    /// Read and write app reviews
    Reviews {
        #[command(subcommand)]
        command: ReviewsCommand,
    },

    /// Write a default config.toml
    ConfigInit,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new("amicus=warn"))
                .context("build log filter")?,
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = Store::open()?;
    let cfg = config::load_config(store.dir())?;
    tracing::debug!(dir = %store.dir().display(), "state directory");

    match cli.command {
        Command::Chat { command } => chat_cmd::run(command, &store, &cfg)?,
        Command::Quote { mood } => chat_cmd::print_quote(mood),
        Command::Quiz { answers } => quiz_cmd::run(answers)?,
        Command::Mood { command } => mood_cmd::run(command, &store, &cfg)?,
        Command::Flix { command } => flix_cmd::run(command, &store, &cfg)?,
        Command::Reviews { command } => reviews_cmd::run(command, &store, &cfg)?,
        Command::ConfigInit => config::init_config(store.dir())?,
    }

    Ok(())
}
