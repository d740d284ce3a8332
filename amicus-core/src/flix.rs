//! Mood-matched film shelf: pick a color, page through its films, keep favorites.

use serde::{Deserialize, Serialize};

use crate::catalog::ContentBundle;
use crate::content;
use crate::mood::MoodColor;
use crate::toggle::ToggleSet;
use crate::window::{advance, window};

pub const DEFAULT_PAGE_SIZE: usize = 3;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlixBrowser {
    pub mood: Option<MoodColor>,
    pub cursor: usize,
    pub favorites: ToggleSet<String>,
}

impl FlixBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch shelves. The cursor always restarts at the first film.
    pub fn select(&mut self, mood: MoodColor) {
        self.mood = Some(mood);
        self.cursor = 0;
    }

    /// Rotate the starting film by one, wrapping at the end of the shelf.
    pub fn refresh(&mut self) {
        if let Some(mood) = self.mood {
            let len = content::mood_flix().bundles_for(mood).len();
            self.cursor = advance(self.cursor, len);
        }
    }

    /// Films on screen: `page_size` from the cursor, shorter near the end.
    pub fn visible(&self, page_size: usize) -> &'static [ContentBundle] {
        match self.mood {
            Some(mood) => window(content::mood_flix().bundles_for(mood), self.cursor, page_size),
            None => &[],
        }
    }

    /// Returns true when the title is now a favorite.
    pub fn toggle_favorite(&mut self, title: &str) -> bool {
        self.favorites.toggle(title.to_string())
    }

    pub fn is_favorite(&self, title: &str) -> bool {
        self.favorites.contains(&title.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(films: &[ContentBundle]) -> Vec<&str> {
        films.iter().filter_map(|f| f.title.as_deref()).collect()
    }

    #[test]
    fn test_nothing_visible_before_selection() {
        let browser = FlixBrowser::new();
        assert!(browser.visible(DEFAULT_PAGE_SIZE).is_empty());
    }

    #[test]
    fn test_refresh_rotates_and_shortens() {
        let mut b = FlixBrowser::new();
        b.select(MoodColor::Yellow);
        assert_eq!(
            titles(b.visible(3)),
            vec!["The Grand Budapest Hotel", "3 Idiots", "Paddington"]
        );

        for _ in 0..3 {
            b.refresh();
        }
        assert_eq!(b.cursor, 3);
        assert_eq!(titles(b.visible(3)), vec!["Zindagi Na Milegi Dobara", "Julie & Julia"]);

        b.refresh();
        b.refresh();
        assert_eq!(b.cursor, 0);
    }

    #[test]
    fn test_select_resets_cursor() {
        let mut b = FlixBrowser::new();
        b.select(MoodColor::Red);
        b.refresh();
        b.select(MoodColor::Green);
        assert_eq!(b.cursor, 0);
        assert_eq!(titles(b.visible(1)), vec!["The Greatest Showman"]);
    }

    #[test]
    fn test_favorites_toggle() {
        let mut b = FlixBrowser::new();
        assert!(b.toggle_favorite("Chef"));
        assert!(b.is_favorite("Chef"));
        assert!(!b.toggle_favorite("Chef"));
        assert!(!b.is_favorite("Chef"));
    }
}
