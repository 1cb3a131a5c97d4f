//! Domain model the cards are rendered from.

#[derive(Debug, Clone, PartialEq)]
pub struct PokemonRecord {
    pub id: u32,
    pub name: String,
    /// Hectograms.
    pub weight: u32,
    /// Decimetres.
    pub height: u32,
    pub types: Vec<TypeTag>,
    pub abilities: Vec<AbilityEntry>,
    pub moves: Vec<MoveEntry>,
    pub stats: Vec<StatEntry>,
    pub sprites: SpriteSet,
    pub cry: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeTag {
    pub name: String,
    /// Filled in by the fetch layer after extraction.
    pub icon: Option<String>,
}

impl TypeTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: None,
        }
    }

    pub fn icon_or_empty(&self) -> &str {
        self.icon.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AbilityEntry {
    pub name: String,
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoveEntry {
    pub name: String,
    pub learn_method: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatEntry {
    pub name: String,
    pub base: u32,
}

/// The four canonical sprite views; every slot holds a URL or the placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteSet {
    pub front_default: String,
    pub back_default: String,
    pub front_shiny: String,
    pub back_shiny: String,
}

impl SpriteSet {
    pub fn from_views([front_default, back_default, front_shiny, back_shiny]: [String; 4]) -> Self {
        Self {
            front_default,
            back_default,
            front_shiny,
            back_shiny,
        }
    }

    pub fn primary(&self) -> &str {
        &self.front_default
    }

    pub fn all(&self) -> [&str; 4] {
        [
            &self.front_default,
            &self.back_default,
            &self.front_shiny,
            &self.back_shiny,
        ]
    }
}

/// One stop of an evolution row with its resolved sprite.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionNode {
    pub name: String,
    pub sprite: String,
}
