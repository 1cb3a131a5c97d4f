//! Search dispatcher: drives the fetch layer and writes rendered cards into a
//! [`Screen`].
//!
//! Everything runs sequentially. A type search fetches and renders one species
//! at a time so the grid keeps the order of the name list, and a failure on one
//! species only costs that species its card.

use crate::core::evolution::evolution_line;
use crate::core::favorites::FavoritesStore;
use crate::core::record::{EvolutionNode, PokemonRecord};
use crate::core::services::{PokedexService, TypeQuery};
use crate::display::render;
use crate::display::screen::Screen;
use crate::display::view::LargeCard;
use crate::error::SearchError;

pub struct SearchDispatcher {
    service: PokedexService,
}

impl SearchDispatcher {
    pub fn new(service: PokedexService) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &PokedexService {
        &self.service
    }

    /// Clear the screen and show one Pokémon as the large card.
    pub async fn search_individual(
        &self,
        screen: &mut Screen,
        favorites: &FavoritesStore,
        identifier: &str,
    ) -> Result<(), SearchError> {
        screen.clear();
        let card = self.load_large_card(identifier, favorites).await?;
        screen.show_large_card(card);
        Ok(())
    }

    /// Clear the screen and resolve a type (or the favorites) to species names.
    pub async fn search_by_type(
        &self,
        screen: &mut Screen,
        favorites: &FavoritesStore,
        query: &str,
    ) -> Result<Vec<String>, SearchError> {
        screen.clear();
        let query = TypeQuery::parse(query)?;
        self.service.fetch_by_type(&query, favorites).await
    }

    /// Append one mini-card per name, in order. Failed lookups become notices.
    pub async fn render_list(&self, screen: &mut Screen, names: &[String]) {
        self.render_list_with_progress(screen, names, |_, _, _| {})
            .await
    }

    /// Like [`render_list`](Self::render_list), reporting `(index, total, name)`
    /// before each fetch.
    pub async fn render_list_with_progress<F>(
        &self,
        screen: &mut Screen,
        names: &[String],
        mut progress: F,
    ) where
        F: FnMut(usize, usize, &str),
    {
        for (index, name) in names.iter().enumerate() {
            progress(index, names.len(), name);
            match self.service.fetch_by_identifier(name).await {
                Ok(mut record) => {
                    self.resolve_type_icons(&mut record).await;
                    screen.append_mini_card(render::mini_card(&record));
                }
                Err(e) => {
                    log::warn!("Skipping '{}' in grid: {}", name, e);
                    screen.notify(e.to_string());
                }
            }
        }
    }

    /// `search_by_type` followed by `render_list`.
    pub async fn search_type(
        &self,
        screen: &mut Screen,
        favorites: &FavoritesStore,
        query: &str,
    ) -> Result<(), SearchError> {
        let names = self.search_by_type(screen, favorites, query).await?;
        self.render_list(screen, &names).await;
        Ok(())
    }

    /// Mini-card or evolution click: replace the large card, keep the grid.
    pub async fn open_card(
        &self,
        screen: &mut Screen,
        favorites: &FavoritesStore,
        name: &str,
    ) -> Result<(), SearchError> {
        let card = self.load_large_card(name, favorites).await?;
        screen.show_large_card(card);
        Ok(())
    }

    pub fn close_card(&self, screen: &mut Screen) {
        screen.close_large_card();
    }

    /// Flip membership of `name` and update the open card's control in place.
    pub fn toggle_favorite(
        &self,
        screen: &mut Screen,
        favorites: &mut FavoritesStore,
        name: &str,
    ) -> bool {
        let now_favorite = favorites.toggle(name);
        screen.refresh_favorite(favorites);
        now_favorite
    }

    async fn load_large_card(
        &self,
        identifier: &str,
        favorites: &FavoritesStore,
    ) -> Result<LargeCard, SearchError> {
        let mut record = self.service.fetch_by_identifier(identifier).await?;
        self.resolve_type_icons(&mut record).await;
        let evolution = self.load_evolution(record.id).await;
        Ok(render::large_card(
            &record,
            evolution.as_deref(),
            favorites.contains(&record.name),
        ))
    }

    async fn resolve_type_icons(&self, record: &mut PokemonRecord) {
        for tag in record.types.iter_mut() {
            tag.icon = Some(self.service.fetch_type_icon(&tag.name).await);
        }
    }

    async fn load_evolution(&self, id: u32) -> Option<Vec<EvolutionNode>> {
        let chain_ref = self.service.fetch_evolution_chain_ref(id).await;
        let tree = self.service.fetch_evolution_tree(chain_ref.as_deref()).await?;

        let mut nodes = Vec::new();
        for name in evolution_line(&tree) {
            let sprite = self.service.fetch_sprite_for(&name).await;
            nodes.push(EvolutionNode { name, sprite });
        }
        Some(nodes)
    }
}
