//! View tree for the two card shapes.
//!
//! Plain data: no I/O and nothing terminal specific. A presenter decides how
//! it ends up on screen; the search dispatcher only ever builds these.

/// What a clickable control does when activated.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Mini-card click: open the large card for this species.
    ShowDetails(String),
    /// Evolution-row click.
    Navigate(String),
    PlayCry(String),
    ToggleFavorite(String),
    CloseCard,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub label: String,
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MiniCard {
    /// Raw API name; the card's identity.
    pub id_name: String,
    pub title: String,
    pub subtitle: String,
    pub sprite: Image,
    pub weight: String,
    pub height: String,
    pub type_icons: Vec<Image>,
    pub on_click: Action,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteButton {
    pub label: String,
    pub favorited: bool,
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AbilityLine {
    pub name: String,
    pub hidden: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoveGroup {
    pub heading: String,
    pub moves: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MovesSection {
    Groups(Vec<MoveGroup>),
    Empty(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionButton {
    pub image: Image,
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EvolutionSection {
    Chain(Vec<EvolutionButton>),
    Missing(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LargeCard {
    pub id_name: String,
    pub title: String,
    pub subtitle: String,
    pub weight: String,
    pub height: String,
    pub close: Button,
    pub favorite: FavoriteButton,
    pub type_icons: Vec<Image>,
    pub sprites: Vec<Image>,
    pub abilities_heading: String,
    pub abilities: Vec<AbilityLine>,
    pub moves_heading: String,
    pub moves: MovesSection,
    pub stats_heading: String,
    pub stats: Vec<String>,
    pub evolution_heading: String,
    pub evolution: EvolutionSection,
    pub cry: Option<Button>,
}

impl MiniCard {
    pub fn type_names(&self) -> Vec<&str> {
        self.type_icons
            .iter()
            .map(|icon| icon.alt.trim_end_matches(" Icon"))
            .collect()
    }
}

impl LargeCard {
    /// Species names of the evolution row, in display order.
    pub fn evolution_names(&self) -> Vec<&str> {
        match &self.evolution {
            EvolutionSection::Chain(buttons) => buttons
                .iter()
                .filter_map(|button| match &button.action {
                    Action::Navigate(name) => Some(name.as_str()),
                    _ => None,
                })
                .collect(),
            EvolutionSection::Missing(_) => Vec::new(),
        }
    }
}
