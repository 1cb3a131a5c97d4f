//! Typed PokeAPI response schema.
//!
//! Only the fields the cards need are modelled. Everything the API may omit is
//! an `Option` or defaults to empty, and the accessors below are the single
//! place where a missing field turns into a fallback value.

use serde::Deserialize;

/// Image shown wherever a sprite or icon is unavailable.
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "assets/imageNotAvailable.png";

/// Bucket name for moves whose source data carries no learn method.
pub const UNKNOWN_LEARN_METHOD: &str = "unknown";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiResource {
    pub url: String,
}

// /pokemon/{name or id}
#[derive(Debug, Deserialize, Clone)]
pub struct PokemonResponse {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub types: Vec<PokemonTypeSlot>,
    #[serde(default)]
    pub abilities: Vec<PokemonAbilitySlot>,
    #[serde(default)]
    pub moves: Vec<PokemonMoveSlot>,
    #[serde(default)]
    pub stats: Vec<PokemonStatSlot>,
    #[serde(default)]
    pub sprites: Sprites,
    pub cries: Option<Cries>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PokemonTypeSlot {
    #[serde(rename = "type")]
    pub type_info: NamedResource,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PokemonAbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PokemonMoveSlot {
    #[serde(rename = "move")]
    pub move_info: NamedResource,
    #[serde(default)]
    pub version_group_details: Vec<VersionGroupDetail>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct VersionGroupDetail {
    pub move_learn_method: Option<NamedResource>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PokemonStatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub back_default: Option<String>,
    pub front_shiny: Option<String>,
    pub back_shiny: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Cries {
    pub latest: Option<String>,
    pub legacy: Option<String>,
}

// /type/{name}
#[derive(Debug, Deserialize, Clone)]
pub struct TypeResponse {
    #[serde(default)]
    pub pokemon: Vec<TypePokemonEntry>,
    #[serde(default)]
    pub sprites: TypeSprites,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TypePokemonEntry {
    pub pokemon: NamedResource,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct TypeSprites {
    #[serde(rename = "generation-viii")]
    pub generation_viii: Option<GenerationViiiTypeSprites>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GenerationViiiTypeSprites {
    #[serde(rename = "legends-arceus")]
    pub legends_arceus: Option<TypeIcon>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TypeIcon {
    pub name_icon: Option<String>,
}

// /pokemon-species/{id}
#[derive(Debug, Deserialize, Clone)]
pub struct SpeciesResponse {
    pub evolution_chain: Option<ApiResource>,
}

// /evolution-chain/{id}
#[derive(Debug, Deserialize, Clone)]
pub struct EvolutionChainResponse {
    pub chain: ChainLink,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

impl Sprites {
    /// The four card views in display order, each defaulted on its own.
    pub fn views_or(&self, placeholder: &str) -> [String; 4] {
        [
            &self.front_default,
            &self.back_default,
            &self.front_shiny,
            &self.back_shiny,
        ]
        .map(|sprite| or_placeholder(sprite.as_deref(), placeholder))
    }

    pub fn front_default_or(&self, placeholder: &str) -> String {
        or_placeholder(self.front_default.as_deref(), placeholder)
    }
}

impl PokemonResponse {
    pub fn latest_cry(&self) -> Option<&str> {
        self.cries
            .as_ref()
            .and_then(|cries| cries.latest.as_deref())
            .filter(|url| !url.is_empty())
    }
}

impl PokemonMoveSlot {
    /// Learn method of the first version group only.
    pub fn learn_method(&self) -> Option<&str> {
        self.version_group_details
            .first()
            .and_then(|detail| detail.move_learn_method.as_ref())
            .map(|method| method.name.as_str())
    }
}

impl TypeResponse {
    pub fn member_names(self) -> Vec<String> {
        self.pokemon
            .into_iter()
            .map(|entry| entry.pokemon.name)
            .collect()
    }

    /// Legends: Arceus name icon, or an empty string.
    pub fn name_icon(&self) -> String {
        self.sprites
            .generation_viii
            .as_ref()
            .and_then(|generation| generation.legends_arceus.as_ref())
            .and_then(|icons| icons.name_icon.clone())
            .unwrap_or_default()
    }
}

impl SpeciesResponse {
    pub fn evolution_chain_url(self) -> Option<String> {
        self.evolution_chain
            .map(|chain| chain.url)
            .filter(|url| !url.is_empty())
    }
}

fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    match value {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => placeholder.to_string(),
    }
}
