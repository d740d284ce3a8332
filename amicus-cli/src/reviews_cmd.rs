use amicus_core::ReviewBoard;
use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;
use crate::state::{REVIEWS_FILE, Store};

#[derive(Subcommand, Debug)]
pub enum ReviewsCommand {
    /// Overall rating and all reviews, newest first
    List,

    /// Write a review
    Add {
        #[arg(long)]
        name: String,

        /// 1-5 stars
        #[arg(long, default_value_t = 5)]
        rating: u8,

        #[arg(long)]
        comment: String,
    },

    /// Mark a review as helpful (once per review)
    Helpful { id: u32 },
}

pub fn run(command: ReviewsCommand, store: &Store, cfg: &Config) -> Result<()> {
    let mut board: ReviewBoard = store
        .load(REVIEWS_FILE)?
        .unwrap_or_else(ReviewBoard::with_samples);

    match command {
        ReviewsCommand::List => print_board(&board),

        ReviewsCommand::Add {
            name,
            rating,
            comment,
        } => {
            let review = board.submit(&name, rating, &comment, cfg.today()?)?;
            println!("Thanks, {}! Review #{} posted.", review.name, review.id);
            store.save(REVIEWS_FILE, &board)?;
        }

        ReviewsCommand::Helpful { id } => {
            if board.vote_helpful(id)? {
                println!("Marked review #{id} as helpful.");
                store.save(REVIEWS_FILE, &board)?;
            } else {
                println!("You already marked review #{id} as helpful.");
            }
        }
    }

    Ok(())
}

fn stars(n: u8) -> String {
    (1..=5).map(|i| if i <= n { '★' } else { '☆' }).collect()
}

fn print_board(board: &ReviewBoard) {
    match board.average_rating() {
        Some(avg) => println!(
            "{avg:.1} {} ({} reviews)\n",
            stars(board.star_count().unwrap_or(0)),
            board.reviews().len()
        ),
        None => {
            println!("No reviews yet.");
            return;
        }
    }

    for r in board.reviews() {
        let voted = if board.has_voted(r.id) { " ✓" } else { "" };
        println!("#{} {} {} {}", r.id, r.name, stars(r.rating), r.date);
        println!("  {}", r.comment);
        println!("  Helpful ({}){voted}\n", r.helpful);
    }
}
