//! The display surface the search dispatcher writes into.

use crate::core::favorites::FavoritesStore;
use crate::display::render::favorite_button;
use crate::display::view::{LargeCard, MiniCard};

/// Named regions of the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Grid,
    LargeCard,
    Notices,
}

/// Grid of mini-cards, the large-card holder and pending user notices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Screen {
    pub grid: Vec<MiniCard>,
    pub large_card: Option<LargeCard>,
    pub notices: Vec<String>,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start of every dispatch: empties every region.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.large_card = None;
        self.notices.clear();
    }

    pub fn append_mini_card(&mut self, card: MiniCard) {
        self.grid.push(card);
    }

    pub fn show_large_card(&mut self, card: LargeCard) {
        self.large_card = Some(card);
    }

    pub fn close_large_card(&mut self) {
        self.large_card = None;
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.notices.push(message.into());
    }

    /// Hand the notices to whoever shows them; they are shown once.
    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }

    /// Re-render the favorite control of the open card from the store.
    pub fn refresh_favorite(&mut self, favorites: &FavoritesStore) {
        if let Some(card) = self.large_card.as_mut() {
            card.favorite = favorite_button(&card.id_name, favorites.contains(&card.id_name));
        }
    }

    /// Regions whose content differs from `previous`.
    pub fn changed_regions(&self, previous: &Screen) -> Vec<Region> {
        let mut changed = Vec::new();
        if self.grid != previous.grid {
            changed.push(Region::Grid);
        }
        if self.large_card != previous.large_card {
            changed.push(Region::LargeCard);
        }
        if !self.notices.is_empty() {
            changed.push(Region::Notices);
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::{PokemonRecord, SpriteSet};
    use crate::display::render::{large_card, mini_card};

    fn record(name: &str) -> PokemonRecord {
        PokemonRecord {
            id: 7,
            name: name.to_string(),
            weight: 90,
            height: 5,
            types: Vec::new(),
            abilities: Vec::new(),
            moves: Vec::new(),
            stats: Vec::new(),
            sprites: SpriteSet::from_views(std::array::from_fn(|_| "ph.png".to_string())),
            cry: None,
        }
    }

    #[test]
    fn test_clear_empties_all_regions() {
        let mut screen = Screen::new();
        screen.append_mini_card(mini_card(&record("squirtle")));
        screen.show_large_card(large_card(&record("squirtle"), None, false));
        screen.notify("hello");

        screen.clear();
        assert_eq!(screen, Screen::new());
    }

    #[test]
    fn test_refresh_favorite() {
        let mut screen = Screen::new();
        screen.show_large_card(large_card(&record("squirtle"), None, false));

        let mut favorites = FavoritesStore::new();
        favorites.toggle("squirtle");
        screen.refresh_favorite(&favorites);

        let card = screen.large_card.as_ref().unwrap();
        assert_eq!(card.favorite.label, "UnFavorite");
        assert!(card.favorite.favorited);
    }

    #[test]
    fn test_changed_regions() {
        let previous = Screen::new();
        let mut screen = Screen::new();
        assert!(screen.changed_regions(&previous).is_empty());

        screen.append_mini_card(mini_card(&record("squirtle")));
        assert_eq!(screen.changed_regions(&previous), vec![Region::Grid]);

        screen.show_large_card(large_card(&record("squirtle"), None, false));
        screen.notify("note");
        assert_eq!(
            screen.changed_regions(&previous),
            vec![Region::Grid, Region::LargeCard, Region::Notices]
        );

        assert_eq!(screen.take_notices(), vec!["note"]);
        assert!(screen.notices.is_empty());
    }
}
