//! Content catalogs: category -> ordered list of immutable bundles.
//!
//! A catalog is validated once at construction: every declared category of
//! its key type must map to at least one bundle. Lookups afterwards cannot
//! miss, so `bundles_for` indexes directly.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::error::{CoreError, Result};

/// A closed set of categories a catalog can be keyed by.
pub trait CategoryKey: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Human-readable name of the category family, used in errors.
    const KIND: &'static str;
    /// Every declared category, in display order.
    const ALL: &'static [Self];

    /// Stable lowercase key.
    fn key(&self) -> &'static str;
}

/// Case-insensitive lookup of a category by its key.
pub fn parse_key<C: CategoryKey>(s: &str) -> Result<C> {
    let needle = s.trim().to_lowercase();
    C::ALL
        .iter()
        .copied()
        .find(|c| c.key() == needle)
        .ok_or_else(|| CoreError::UnknownCategory {
            kind: C::KIND,
            value: s.to_string(),
        })
}

/// Where a film comes from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MediaOrigin {
    #[serde(rename = "bollywood")]
    Bollywood,
    #[serde(rename = "hollywood")]
    Hollywood,
}

impl MediaOrigin {
    pub fn label(&self) -> &'static str {
        match self {
            MediaOrigin::Bollywood => "Bollywood",
            MediaOrigin::Hollywood => "Hollywood",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaTag {
    pub genre: String,
    pub origin: MediaOrigin,
}

/// Immutable response payload tied to a category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentBundle {
    /// Heading (film title, tier title). Chat and quote bundles have none.
    pub title: Option<String>,
    /// Primary message or description
    pub message: String,
    /// Ordered suggestions / recommendations
    pub suggestions: Vec<String>,
    pub rating: Option<f32>,
    pub media: Option<MediaTag>,
}

impl ContentBundle {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            title: None,
            message: message.into(),
            suggestions: Vec::new(),
            rating: None,
            media: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_suggestions<I, S>(mut self, suggestions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suggestions = suggestions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_media(mut self, genre: impl Into<String>, origin: MediaOrigin) -> Self {
        self.media = Some(MediaTag {
            genre: genre.into(),
            origin,
        });
        self
    }
}

#[derive(Debug, Clone)]
pub struct Catalog<C: CategoryKey> {
    name: &'static str,
    entries: HashMap<C, Vec<ContentBundle>>,
}

impl<C: CategoryKey> Catalog<C> {
    /// Build a catalog, failing if any declared category has no bundles.
    pub fn build<I>(name: &'static str, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (C, Vec<ContentBundle>)>,
    {
        let mut map: HashMap<C, Vec<ContentBundle>> = HashMap::new();
        for (category, bundles) in entries {
            map.entry(category).or_default().extend(bundles);
        }

        for category in C::ALL {
            if map.get(category).is_none_or(|b| b.is_empty()) {
                return Err(CoreError::UndeclaredCategory {
                    catalog: name,
                    category: category.key(),
                });
            }
        }

        Ok(Self { name, entries: map })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ordered, non-empty bundle list for a category.
    pub fn bundles_for(&self, category: C) -> &[ContentBundle] {
        &self.entries[&category]
    }

    /// Uniform-random pick.
    pub fn pick_one<R: Rng + ?Sized>(&self, category: C, rng: &mut R) -> ContentBundle {
        let bundles = self.bundles_for(category);
        // Lists are never empty after `build`.
        bundles.choose(rng).unwrap_or(&bundles[0]).clone()
    }

    /// Cursor pick; the cursor wraps around the list.
    pub fn pick_at(&self, category: C, cursor: usize) -> ContentBundle {
        let bundles = self.bundles_for(category);
        bundles[cursor % bundles.len()].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::Sentiment;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn tiny() -> Vec<(Sentiment, Vec<ContentBundle>)> {
        vec![
            (Sentiment::Positive, vec![ContentBundle::new("p1"), ContentBundle::new("p2")]),
            (Sentiment::Negative, vec![ContentBundle::new("n1")]),
            (Sentiment::Neutral, vec![ContentBundle::new("u1")]),
        ]
    }

    #[test]
    fn test_build_rejects_missing_category() {
        let mut entries = tiny();
        entries.pop();
        let err = Catalog::build("tiny", entries).unwrap_err();
        assert_eq!(
            err,
            CoreError::UndeclaredCategory { catalog: "tiny", category: "neutral" }
        );
    }

    #[test]
    fn test_build_rejects_empty_list() {
        let mut entries = tiny();
        entries[1].1.clear();
        assert!(Catalog::build("tiny", entries).is_err());
    }

    #[test]
    fn test_bundles_stable_across_calls() {
        let catalog = Catalog::build("tiny", tiny()).unwrap();
        assert_eq!(catalog.bundles_for(Sentiment::Positive), catalog.bundles_for(Sentiment::Positive));
        assert_eq!(catalog.bundles_for(Sentiment::Positive).len(), 2);
    }

    #[test]
    fn test_pick_one_in_declared_set() {
        let catalog = Catalog::build("tiny", tiny()).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let b = catalog.pick_one(Sentiment::Positive, &mut rng);
            assert!(catalog.bundles_for(Sentiment::Positive).contains(&b));
        }
    }

    #[test]
    fn test_pick_one_reaches_every_bundle() {
        let catalog = Catalog::build("tiny", tiny()).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let seen: std::collections::HashSet<String> = (0..64)
            .map(|_| catalog.pick_one(Sentiment::Positive, &mut rng).message)
            .collect();
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_pick_at_wraps() {
        let catalog = Catalog::build("tiny", tiny()).unwrap();
        assert_eq!(catalog.pick_at(Sentiment::Positive, 0).message, "p1");
        assert_eq!(catalog.pick_at(Sentiment::Positive, 3).message, "p2");
    }

    #[test]
    fn test_parse_key_case_insensitive() {
        assert_eq!(parse_key::<Sentiment>(" NEUTRAL ").unwrap(), Sentiment::Neutral);
        let err = parse_key::<Sentiment>("meh").unwrap_err();
        assert_eq!(err.to_string(), "unknown sentiment 'meh'");
    }

    #[test]
    fn test_bundle_builder() {
        let b = ContentBundle::new("summary")
            .with_title("Chef")
            .with_rating(7.3)
            .with_media("Comedy/Drama", MediaOrigin::Hollywood)
            .with_suggestions(["a", "b"]);
        assert_eq!(b.title.as_deref(), Some("Chef"));
        assert_eq!(b.suggestions, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(b.media.unwrap().origin.label(), "Hollywood");
    }
}
