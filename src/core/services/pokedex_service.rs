use crate::api::client::PokeApiClient;
use crate::api::models::{DEFAULT_PLACEHOLDER_IMAGE, EvolutionChainResponse};
use crate::core::extract;
use crate::core::favorites::FavoritesStore;
use crate::core::record::PokemonRecord;
use crate::error::{ApiError, SearchError};
use crate::utils::validation::normalize_identifier;

const FAVORITES_SENTINEL: &str = "favorites";

/// What a type search asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeQuery {
    Type(String),
    Favorites,
}

impl TypeQuery {
    pub fn parse(input: &str) -> Result<Self, SearchError> {
        let normalized =
            normalize_identifier(input).ok_or(SearchError::EmptyInput { field: "Type" })?;
        if normalized == FAVORITES_SENTINEL {
            Ok(TypeQuery::Favorites)
        } else {
            Ok(TypeQuery::Type(normalized))
        }
    }
}

/// Fetch layer over PokeAPI: one record, type members, and the auxiliary data
/// a card needs. Auxiliary lookups never fail; they log and fall back.
#[derive(Debug, Clone)]
pub struct PokedexService {
    client: PokeApiClient,
    placeholder: String,
}

impl PokedexService {
    pub fn new(client: PokeApiClient) -> Self {
        Self::with_placeholder(client, DEFAULT_PLACEHOLDER_IMAGE.to_string())
    }

    pub fn with_placeholder(client: PokeApiClient, placeholder: String) -> Self {
        Self {
            client,
            placeholder,
        }
    }

    /// Look up one Pokémon by name or National Dex number, case-insensitively.
    pub async fn fetch_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<PokemonRecord, SearchError> {
        let normalized = normalize_identifier(identifier).ok_or(SearchError::EmptyInput {
            field: "Name or ID",
        })?;

        match self.client.get_pokemon(&normalized).await {
            Ok(response) => Ok(extract::record(&response, &self.placeholder)),
            Err(source) => {
                log::error!("Error fetching Pokémon data for '{}': {}", normalized, source);
                Err(SearchError::NotFound {
                    identifier: identifier.trim().to_string(),
                    source,
                })
            }
        }
    }

    /// Species names for a type, or the current favorites.
    ///
    /// A failed type lookup is logged and yields an empty list.
    pub async fn fetch_by_type(
        &self,
        query: &TypeQuery,
        favorites: &FavoritesStore,
    ) -> Result<Vec<String>, SearchError> {
        match query {
            TypeQuery::Favorites => {
                if favorites.is_empty() {
                    Err(SearchError::EmptyFavorites)
                } else {
                    Ok(favorites.names().to_vec())
                }
            }
            TypeQuery::Type(name) => match self.client.get_type(name).await {
                Ok(response) => Ok(response.member_names()),
                Err(e) => {
                    log::error!("Error fetching Pokémon by type '{}': {}", name, e);
                    Ok(Vec::new())
                }
            },
        }
    }

    /// Type icon URL, or an empty string.
    pub async fn fetch_type_icon(&self, type_name: &str) -> String {
        match self.client.get_type(&type_name.to_lowercase()).await {
            Ok(response) => response.name_icon(),
            Err(e) => {
                log::warn!("Error fetching type icon for '{}': {}", type_name, e);
                String::new()
            }
        }
    }

    /// Evolution-chain URL from the species metadata, if the species has one.
    pub async fn fetch_evolution_chain_ref(&self, id: u32) -> Option<String> {
        match self.client.get_species(id).await {
            Ok(species) => species.evolution_chain_url(),
            Err(e) => {
                log::warn!("Error fetching evolution chain reference for #{}: {}", id, e);
                None
            }
        }
    }

    pub async fn fetch_evolution_tree(
        &self,
        chain_ref: Option<&str>,
    ) -> Option<EvolutionChainResponse> {
        let url = chain_ref?;
        match self.client.get_evolution_chain(url).await {
            Ok(chain) => Some(chain),
            Err(e) => {
                log::warn!("Error fetching evolution chain data from {}: {}", url, e);
                None
            }
        }
    }

    /// Front sprite of one Pokémon, or the placeholder. Never alerts the user.
    pub async fn fetch_sprite_for(&self, name: &str) -> String {
        let Some(normalized) = normalize_identifier(name) else {
            return self.placeholder.clone();
        };
        match self.client.get_pokemon(&normalized).await {
            Ok(response) => response.sprites.front_default_or(&self.placeholder),
            Err(e) => {
                log::warn!("Error fetching sprite for '{}': {}", name, e);
                self.placeholder.clone()
            }
        }
    }

    pub async fn fetch_cry(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        self.client.get_bytes(url).await
    }
}
