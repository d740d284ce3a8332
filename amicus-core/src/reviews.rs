//! App reviews: newest-first list, one helpful vote per review, average rating.

use serde::{Deserialize, Serialize};

use crate::content;
use crate::error::{CoreError, Result};
use crate::ledger::DayKey;
use crate::toggle::ToggleSet;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Review {
    pub id: u32,
    pub name: String,
    /// 1-5 stars
    pub rating: u8,
    pub comment: String,
    pub date: DayKey,
    pub helpful: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewBoard {
    reviews: Vec<Review>,
    #[serde(default)]
    votes: ToggleSet<u32>,
}

impl ReviewBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Board pre-filled with the built-in sample reviews.
    pub fn with_samples() -> Self {
        Self {
            reviews: content::sample_reviews(),
            votes: ToggleSet::new(),
        }
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn has_voted(&self, id: u32) -> bool {
        self.votes.contains(&id)
    }

    /// Add a review at the top of the list.
    pub fn submit(
        &mut self,
        name: &str,
        rating: u8,
        comment: &str,
        date: DayKey,
    ) -> Result<&Review> {
        let name = name.trim();
        let comment = comment.trim();
        if name.is_empty() {
            return Err(CoreError::EmptyField("name"));
        }
        if comment.is_empty() {
            return Err(CoreError::EmptyField("comment"));
        }
        if !(1..=5).contains(&rating) {
            return Err(CoreError::InvalidRating(rating));
        }

        let id = self.reviews.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        self.reviews.insert(
            0,
            Review {
                id,
                name: name.to_string(),
                rating,
                comment: comment.to_string(),
                date,
                helpful: 0,
            },
        );
        tracing::debug!(id, rating, "review submitted");
        Ok(&self.reviews[0])
    }

    /// Count a helpful vote. A second vote for the same review is a no-op and returns false.
    pub fn vote_helpful(&mut self, id: u32) -> Result<bool> {
        let review = self
            .reviews
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(CoreError::UnknownReview(id))?;
        if !self.votes.add(id) {
            return Ok(false);
        }
        review.helpful += 1;
        Ok(true)
    }

    /// Mean star rating, or `None` when there are no reviews.
    pub fn average_rating(&self) -> Option<f64> {
        if self.reviews.is_empty() {
            return None;
        }
        let sum: u32 = self.reviews.iter().map(|r| u32::from(r.rating)).sum();
        Some(f64::from(sum) / self.reviews.len() as f64)
    }

    /// Filled stars for the overall rating.
    pub fn star_count(&self) -> Option<u8> {
        self.average_rating().map(|avg| avg.round() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> DayKey {
        s.parse().unwrap()
    }

    fn board() -> ReviewBoard {
        let mut b = ReviewBoard::new();
        b.submit("Michael T.", 4, "Quiz was insightful", day("2024-01-05")).unwrap();
        b.submit("Priya R.", 5, "A safe space", day("2024-01-08")).unwrap();
        b.submit("Alex K.", 4, "Love the games", day("2024-01-10")).unwrap();
        b.submit("Sarah M.", 5, "A game-changer", day("2024-01-15")).unwrap();
        b
    }

    #[test]
    fn test_average_rating() {
        let b = board();
        assert_eq!(b.average_rating(), Some(4.5));
        assert_eq!(b.star_count(), Some(5));
    }

    #[test]
    fn test_empty_board_has_no_average() {
        let b = ReviewBoard::new();
        assert_eq!(b.average_rating(), None);
        assert_eq!(b.star_count(), None);
    }

    #[test]
    fn test_newest_first_with_sequential_ids() {
        let b = board();
        assert_eq!(b.reviews()[0].name, "Sarah M.");
        assert_eq!(b.reviews()[0].id, 4);
        assert_eq!(b.reviews()[3].id, 1);
    }

    #[test]
    fn test_submit_validation() {
        let mut b = ReviewBoard::new();
        assert_eq!(
            b.submit("  ", 5, "x", day("2024-01-01")).unwrap_err(),
            CoreError::EmptyField("name")
        );
        assert_eq!(
            b.submit("A", 5, "", day("2024-01-01")).unwrap_err(),
            CoreError::EmptyField("comment")
        );
        assert_eq!(
            b.submit("A", 6, "x", day("2024-01-01")).unwrap_err(),
            CoreError::InvalidRating(6)
        );
        assert!(b.reviews().is_empty());
    }

    #[test]
    fn test_sample_board() {
        let mut b = ReviewBoard::with_samples();
        assert_eq!(b.reviews().len(), 4);
        assert_eq!(b.reviews()[0].name, "Sarah M.");
        assert_eq!(b.reviews()[0].helpful, 12);
        assert_eq!(b.average_rating(), Some(4.5));
        assert!(b.votes.is_empty());

        let id = b.submit("Dana", 3, "Nice", day("2024-02-01")).unwrap().id;
        assert_eq!(id, 5);
        assert_eq!(b.reviews()[0].id, 5);
    }

    #[test]
    fn test_vote_helpful_once() {
        let mut b = board();
        assert!(b.vote_helpful(2).unwrap());
        assert!(!b.vote_helpful(2).unwrap());
        assert!(b.has_voted(2));
        let r = b.reviews().iter().find(|r| r.id == 2).unwrap();
        assert_eq!(r.helpful, 1);
        assert_eq!(b.vote_helpful(99).unwrap_err(), CoreError::UnknownReview(99));
    }
}
