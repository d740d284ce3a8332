//! Wellness assessment: weighted answers -> percentage -> tier + guidance.
//!
//! Thresholds compare the unrounded percentage and are evaluated top down:
//! - >= 85 excellent
//! - >= 70 good
//! - >= 50 moderate
//! - otherwise needs-attention
//!
//! Rounding only happens for display (`ScoreResult::display_percentage`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::{CategoryKey, parse_key};
use crate::content;
use crate::error::{CoreError, Result};

/// Wellness tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    #[serde(rename = "excellent")]
    Excellent,
    #[serde(rename = "good")]
    Good,
    #[serde(rename = "moderate")]
    Moderate,
    #[serde(rename = "needs-attention")]
    NeedsAttention,
}

impl CategoryKey for Tier {
    const KIND: &'static str = "tier";
    const ALL: &'static [Self] = &[Tier::Excellent, Tier::Good, Tier::Moderate, Tier::NeedsAttention];

    fn key(&self) -> &'static str {
        match self {
            Tier::Excellent => "excellent",
            Tier::Good => "good",
            Tier::Moderate => "moderate",
            Tier::NeedsAttention => "needs-attention",
        }
    }
}

impl Tier {
    /// Lower bound (inclusive) of each tier, highest first.
    pub const THRESHOLDS: [(f64, Tier); 3] = [
        (85.0, Tier::Excellent),
        (70.0, Tier::Good),
        (50.0, Tier::Moderate),
    ];

    pub fn from_percentage(percentage: f64) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(min, _)| percentage >= *min)
            .map(|(_, tier)| *tier)
            .unwrap_or(Tier::NeedsAttention)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Tier {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        parse_key(s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnswerOption {
    pub label: String,
    pub weight: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn new(id: u32, prompt: impl Into<String>) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            options: Vec::new(),
        }
    }

    pub fn with_option(mut self, label: impl Into<String>, weight: u32) -> Self {
        self.options.push(AnswerOption {
            label: label.into(),
            weight,
        });
        self
    }
}

/// Derived result; recomputed on every call, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreResult {
    /// Unrounded, 0.0 - 100.0
    pub percentage: f64,
    pub tier: Tier,
    pub title: String,
    pub description: String,
    pub recommendations: Vec<String>,
}

impl ScoreResult {
    pub fn display_percentage(&self) -> u32 {
        self.percentage.round() as u32
    }
}

/// Score a completed assessment.
///
/// `answers` must hold exactly one weight per question; anything shorter or
/// longer fails with `IncompleteAssessment`. A weight above `max_weight` fails
/// with `InvalidWeight`, which keeps the percentage within 0..=100.
pub fn score(answers: &[u32], question_count: usize, max_weight: u32) -> Result<ScoreResult> {
    if question_count == 0 || answers.len() != question_count {
        return Err(CoreError::IncompleteAssessment {
            answered: answers.len(),
            expected: question_count,
        });
    }
    if let Some((question, &weight)) = answers.iter().enumerate().find(|(_, w)| **w > max_weight) {
        return Err(CoreError::InvalidWeight { question, weight });
    }

    let total: u64 = answers.iter().map(|w| u64::from(*w)).sum();
    let max_total = question_count as u64 * u64::from(max_weight);
    // Multiply first so exact boundaries (17/20 -> 85.0) stay exact.
    let percentage = if max_total == 0 {
        0.0
    } else {
        (total as f64 * 100.0) / max_total as f64
    };

    let tier = Tier::from_percentage(percentage);
    let guidance = content::tier_guidance().pick_at(tier, 0);

    tracing::debug!(total, max_total, percentage, %tier, "scored assessment");

    Ok(ScoreResult {
        percentage,
        tier,
        title: guidance.title.unwrap_or_default(),
        description: guidance.message,
        recommendations: guidance.suggestions,
    })
}

/// An ordered question bank.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Assessment {
    questions: Vec<Question>,
}

impl Assessment {
    /// Fails with `InvalidOption` if a question offers no options.
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        if let Some(q) = questions.iter().position(|q| q.options.is_empty()) {
            return Err(CoreError::InvalidOption { question: q, option: 0 });
        }
        Ok(Self { questions })
    }

    /// The built-in five-question wellness check.
    pub fn standard() -> &'static Assessment {
        content::standard_assessment()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Highest weight offered by any option in the bank.
    pub fn max_weight(&self) -> u32 {
        self.questions
            .iter()
            .flat_map(|q| q.options.iter().map(|o| o.weight))
            .max()
            .unwrap_or(0)
    }

    /// Every answer must be a weight its question actually offers.
    pub fn score(&self, answers: &[u32]) -> Result<ScoreResult> {
        if answers.len() == self.question_count() {
            for (question, (q, &weight)) in self.questions.iter().zip(answers).enumerate() {
                if !q.options.iter().any(|o| o.weight == weight) {
                    return Err(CoreError::InvalidWeight { question, weight });
                }
            }
        }
        score(answers, self.question_count(), self.max_weight())
    }
}

/// In-progress answers for one pass through an assessment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Progress {
    answers: Vec<u32>,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answers(&self) -> &[u32] {
        &self.answers
    }

    /// Index of the question awaiting an answer, or `None` when complete.
    pub fn current_question(&self, assessment: &Assessment) -> Option<usize> {
        let i = self.answers.len();
        (i < assessment.question_count()).then_some(i)
    }

    pub fn is_complete(&self, assessment: &Assessment) -> bool {
        self.answers.len() >= assessment.question_count()
    }

    /// "Question N of M" progress bar value.
    pub fn progress_percent(&self, assessment: &Assessment) -> u32 {
        let count = assessment.question_count();
        if count == 0 {
            return 100;
        }
        let shown = (self.answers.len() + 1).min(count);
        ((shown as f64 / count as f64) * 100.0).round() as u32
    }

    /// Record the chosen option for the current question.
    pub fn answer(&mut self, assessment: &Assessment, option: usize) -> Result<()> {
        let question = self
            .current_question(assessment)
            .ok_or(CoreError::AssessmentComplete)?;
        let weight = assessment.questions[question]
            .options
            .get(option)
            .map(|o| o.weight)
            .ok_or(CoreError::InvalidOption { question, option })?;
        self.answers.push(weight);
        Ok(())
    }

    pub fn reset(&mut self) {
        self.answers.clear();
    }

    pub fn result(&self, assessment: &Assessment) -> Result<ScoreResult> {
        assessment.score(&self.answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fours_is_excellent() {
        let r = Assessment::standard().score(&[4, 4, 4, 4, 4]).unwrap();
        assert_eq!(r.percentage, 100.0);
        assert_eq!(r.tier, Tier::Excellent);
        assert_eq!(r.display_percentage(), 100);
        assert!(r.title.starts_with("Excellent Mental Wellness"));
        assert_eq!(r.recommendations.len(), 4);
    }

    #[test]
    fn test_all_ones_needs_attention() {
        // 5/20
        let r = score(&[1, 1, 1, 1, 1], 5, 4).unwrap();
        assert_eq!(r.percentage, 25.0);
        assert_eq!(r.display_percentage(), 25);
        assert_eq!(r.tier, Tier::NeedsAttention);
        assert_eq!(r.recommendations.len(), 5);
    }

    #[test]
    fn test_boundaries_belong_to_higher_tier() {
        // 17/20, 14/20, 10/20
        assert_eq!(score(&[4, 4, 4, 3, 2], 5, 4).unwrap().tier, Tier::Excellent);
        assert_eq!(score(&[4, 3, 3, 2, 2], 5, 4).unwrap().tier, Tier::Good);
        assert_eq!(score(&[2, 2, 2, 2, 2], 5, 4).unwrap().tier, Tier::Moderate);
        assert_eq!(score(&[4, 3, 3, 3, 2], 5, 4).unwrap().percentage, 75.0);
    }

    #[test]
    fn test_threshold_compares_unrounded() {
        assert_eq!(Tier::from_percentage(85.0), Tier::Excellent);
        assert_eq!(Tier::from_percentage(84.999), Tier::Good);
        assert_eq!(Tier::from_percentage(69.9999), Tier::Moderate);
        assert_eq!(Tier::from_percentage(49.5), Tier::NeedsAttention);
        assert_eq!(Tier::from_percentage(0.0), Tier::NeedsAttention);
    }

    #[test]
    fn test_incomplete_fails() {
        let err = Assessment::standard().score(&[4, 4]).unwrap_err();
        assert_eq!(err, CoreError::IncompleteAssessment { answered: 2, expected: 5 });
        assert!(score(&[4; 6], 5, 4).is_err());
        assert!(score(&[], 0, 4).is_err());
    }

    #[test]
    fn test_weights_outside_the_bank_are_rejected() {
        let bank = Assessment::standard();
        assert_eq!(
            bank.score(&[9, 9, 9, 9, 9]).unwrap_err(),
            CoreError::InvalidWeight { question: 0, weight: 9 }
        );
        assert_eq!(
            bank.score(&[0; 5]).unwrap_err(),
            CoreError::InvalidWeight { question: 0, weight: 0 }
        );
        assert_eq!(
            bank.score(&[4, 4, 4, 4, 5]).unwrap_err(),
            CoreError::InvalidWeight { question: 4, weight: 5 }
        );
        assert_eq!(
            score(&[4, 4, 9, 4, 4], 5, 4).unwrap_err(),
            CoreError::InvalidWeight { question: 2, weight: 9 }
        );
    }

    #[test]
    fn test_incomplete_wins_over_bad_weight() {
        let err = Assessment::standard().score(&[9, 9]).unwrap_err();
        assert_eq!(err, CoreError::IncompleteAssessment { answered: 2, expected: 5 });
    }

    #[test]
    fn test_guidance_is_static_per_tier() {
        let a = score(&[4, 4, 4, 4, 4], 5, 4).unwrap();
        let b = score(&[4, 4, 4, 4, 3], 5, 4).unwrap();
        assert_eq!(a.tier, b.tier);
        assert_eq!(a.description, b.description);
        assert_eq!(a.recommendations, b.recommendations);
    }

    #[test]
    fn test_standard_bank_shape() {
        let bank = Assessment::standard();
        assert_eq!(bank.question_count(), 5);
        assert_eq!(bank.max_weight(), 4);
        assert!(bank.questions().iter().all(|q| q.options.len() == 4));
    }

    #[test]
    fn test_progress_walkthrough() {
        let bank = Assessment::standard();
        let mut p = Progress::new();
        assert_eq!(p.current_question(bank), Some(0));
        assert_eq!(p.progress_percent(bank), 20);
        assert!(p.result(bank).is_err());

        for _ in 0..5 {
            p.answer(bank, 0).unwrap();
        }
        assert!(p.is_complete(bank));
        assert_eq!(p.current_question(bank), None);
        assert_eq!(p.progress_percent(bank), 100);
        assert_eq!(p.answer(bank, 0).unwrap_err(), CoreError::AssessmentComplete);
        assert_eq!(p.result(bank).unwrap().tier, Tier::Excellent);

        p.reset();
        assert!(p.answers().is_empty());
    }

    #[test]
    fn test_progress_rejects_bad_option() {
        let bank = Assessment::standard();
        let mut p = Progress::new();
        assert_eq!(
            p.answer(bank, 9).unwrap_err(),
            CoreError::InvalidOption { question: 0, option: 9 }
        );
        assert!(p.answers().is_empty());
    }

    #[test]
    fn test_custom_bank_requires_options() {
        let err = Assessment::new(vec![Question::new(1, "empty")]).unwrap_err();
        assert_eq!(err, CoreError::InvalidOption { question: 0, option: 0 });

        let bank = Assessment::new(vec![
            Question::new(1, "a").with_option("yes", 2).with_option("no", 0),
            Question::new(2, "b").with_option("yes", 2).with_option("no", 0),
        ])
        .unwrap();
        let r = bank.score(&[2, 0]).unwrap();
        assert_eq!(r.percentage, 50.0);
        assert_eq!(r.tier, Tier::Moderate);
    }

    #[test]
    fn test_tier_serde_key() {
        assert_eq!(serde_json::to_string(&Tier::NeedsAttention).unwrap(), "\"needs-attention\"");
        assert_eq!("needs-attention".parse::<Tier>().unwrap(), Tier::NeedsAttention);
    }
}
