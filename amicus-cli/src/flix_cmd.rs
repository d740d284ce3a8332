use amicus_core::{ContentBundle, FlixBrowser, MoodColor};
use anyhow::{Result, bail};
use clap::Subcommand;

use crate::config::Config;
use crate::state::{FLIX_FILE, Store};

#[derive(Subcommand, Debug)]
pub enum FlixCommand {
    /// Show films for a mood color (red, yellow, green)
    Show { color: MoodColor },

    /// Rotate the current shelf by one film
    Refresh,

    /// Toggle a film title in favorites
    Fav { title: String },

    /// List favorite titles
    Favorites,
}

pub fn run(command: FlixCommand, store: &Store, cfg: &Config) -> Result<()> {
    let mut browser: FlixBrowser = store.load_or_default(FLIX_FILE)?;

    match command {
        FlixCommand::Show { color } => {
            browser.select(color);
            print_shelf(&browser, cfg.flix.page_size);
        }

        FlixCommand::Refresh => {
            if browser.mood.is_none() {
                bail!("no shelf selected yet (run: amicus flix show <color>)");
            }
            browser.refresh();
            print_shelf(&browser, cfg.flix.page_size);
        }

        FlixCommand::Fav { title } => {
            if browser.toggle_favorite(&title) {
                println!("Added to favorites: {title}");
            } else {
                println!("Removed from favorites: {title}");
            }
        }

        FlixCommand::Favorites => {
            if browser.favorites.is_empty() {
                println!("No favorites yet.");
            }
            for title in browser.favorites.iter() {
                println!("- {title}");
            }
        }
    }

    store.save(FLIX_FILE, &browser)
}

fn print_shelf(browser: &FlixBrowser, page_size: usize) {
    let Some(mood) = browser.mood else {
        return;
    };
    println!("{} {} Movies", mood.emoji(), mood.flix_label());
    println!("{}\n", mood.flix_description());
    for film in browser.visible(page_size) {
        print_film(film, browser);
    }
}

fn print_film(film: &ContentBundle, browser: &FlixBrowser) {
    let title = film.title.as_deref().unwrap_or("(untitled)");
    let heart = if browser.is_favorite(title) { " ♥" } else { "" };
    println!("{title}{heart}");
    if let Some(media) = &film.media {
        println!("  {} | {}", media.genre, media.origin.label());
    }
    if let Some(rating) = film.rating {
        println!("  ★ {rating:.1}");
    }
    println!("  {}\n", film.message);
}
