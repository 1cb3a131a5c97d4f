//! Pure render functions: `(record, derived data) -> view tree`.

use crate::core::extract::group_moves;
use crate::core::record::{EvolutionNode, PokemonRecord};
use crate::display::view::{
    AbilityLine, Action, Button, EvolutionButton, EvolutionSection, FavoriteButton, Image,
    LargeCard, MiniCard, MoveGroup, MovesSection,
};
use crate::utils::text::format_text;

const NO_MOVES: &str = "No Moves Available For This Pokémon";
const NO_EVOLUTIONS: &str = "No Evolution Chain For This Pokémon.";

pub fn mini_card(record: &PokemonRecord) -> MiniCard {
    MiniCard {
        id_name: record.name.clone(),
        title: format_text(&record.name),
        subtitle: format!("ID: {}", record.id),
        sprite: Image {
            src: record.sprites.primary().to_string(),
            alt: "Pokemon Sprite".to_string(),
        },
        weight: weight_label(record),
        height: height_label(record),
        type_icons: type_icons(record),
        on_click: Action::ShowDetails(record.name.clone()),
    }
}

/// `evolution` is `None` when the species has no chain (or it could not be loaded).
pub fn large_card(
    record: &PokemonRecord,
    evolution: Option<&[EvolutionNode]>,
    is_favorite: bool,
) -> LargeCard {
    LargeCard {
        id_name: record.name.clone(),
        title: format_text(&record.name),
        subtitle: format!("ID: {}", record.id),
        weight: weight_label(record),
        height: height_label(record),
        close: Button {
            label: "Close Card".to_string(),
            action: Action::CloseCard,
        },
        favorite: favorite_button(&record.name, is_favorite),
        type_icons: type_icons(record),
        sprites: record
            .sprites
            .all()
            .iter()
            .map(|src| Image {
                src: src.to_string(),
                alt: "Pokemon Sprite".to_string(),
            })
            .collect(),
        abilities_heading: "Abilities:".to_string(),
        abilities: record
            .abilities
            .iter()
            .map(|ability| AbilityLine {
                name: format_text(&ability.name),
                hidden: format!("Is Hidden: {}", format_text(&ability.hidden.to_string())),
            })
            .collect(),
        moves_heading: "Moves: (Can Be Learned)".to_string(),
        moves: moves_section(record),
        stats_heading: "Statistics:".to_string(),
        stats: record
            .stats
            .iter()
            .map(|stat| format!("{}: {}", stat.name.to_uppercase(), stat.base))
            .collect(),
        evolution_heading: "Evolution Chain:".to_string(),
        evolution: evolution_section(evolution),
        cry: record.cry.as_ref().map(|url| Button {
            label: "Play Pokémon Cry".to_string(),
            action: Action::PlayCry(url.clone()),
        }),
    }
}

pub fn favorite_button(name: &str, is_favorite: bool) -> FavoriteButton {
    FavoriteButton {
        label: (if is_favorite { "UnFavorite" } else { "Favorite" }).to_string(),
        favorited: is_favorite,
        action: Action::ToggleFavorite(name.to_string()),
    }
}

fn weight_label(record: &PokemonRecord) -> String {
    format!("Weight: {}hg", record.weight)
}

fn height_label(record: &PokemonRecord) -> String {
    format!("Height: {}dm", record.height)
}

fn type_icons(record: &PokemonRecord) -> Vec<Image> {
    record
        .types
        .iter()
        .map(|tag| Image {
            src: tag.icon_or_empty().to_string(),
            alt: format!("{} Icon", tag.name),
        })
        .collect()
}

fn moves_section(record: &PokemonRecord) -> MovesSection {
    let groups = group_moves(&record.moves);
    if groups.is_empty() {
        return MovesSection::Empty(NO_MOVES.to_string());
    }
    MovesSection::Groups(
        groups
            .into_iter()
            .map(|(method, moves)| MoveGroup {
                heading: format!("Learned By {}", format_text(&method)),
                moves: moves.iter().map(|name| format_text(name)).collect(),
            })
            .collect(),
    )
}

fn evolution_section(evolution: Option<&[EvolutionNode]>) -> EvolutionSection {
    match evolution {
        Some(nodes) if !nodes.is_empty() => EvolutionSection::Chain(
            nodes
                .iter()
                .map(|node| EvolutionButton {
                    image: Image {
                        src: node.sprite.clone(),
                        alt: format!("{} Image", node.name),
                    },
                    action: Action::Navigate(node.name.clone()),
                })
                .collect(),
        ),
        _ => EvolutionSection::Missing(NO_EVOLUTIONS.to_string()),
    }
}
