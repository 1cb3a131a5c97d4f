//! Pure projections from a `/pokemon` response into the domain model.

use crate::api::models::{PokemonResponse, UNKNOWN_LEARN_METHOD};
use crate::core::record::{AbilityEntry, MoveEntry, PokemonRecord, SpriteSet, StatEntry, TypeTag};

pub fn record(response: &PokemonResponse, placeholder: &str) -> PokemonRecord {
    PokemonRecord {
        id: response.id,
        name: response.name.clone(),
        weight: response.weight,
        height: response.height,
        types: types(response),
        abilities: abilities(response),
        moves: moves(response),
        stats: stats(response),
        sprites: sprites(response, placeholder),
        cry: response.latest_cry().map(str::to_string),
    }
}

pub fn types(response: &PokemonResponse) -> Vec<TypeTag> {
    response
        .types
        .iter()
        .map(|slot| TypeTag::new(slot.type_info.name.clone()))
        .collect()
}

pub fn moves(response: &PokemonResponse) -> Vec<MoveEntry> {
    response
        .moves
        .iter()
        .map(|slot| MoveEntry {
            name: slot.move_info.name.clone(),
            learn_method: slot.learn_method().map(str::to_string),
        })
        .collect()
}

pub fn abilities(response: &PokemonResponse) -> Vec<AbilityEntry> {
    response
        .abilities
        .iter()
        .map(|slot| AbilityEntry {
            name: slot.ability.name.clone(),
            hidden: slot.is_hidden,
        })
        .collect()
}

pub fn stats(response: &PokemonResponse) -> Vec<StatEntry> {
    response
        .stats
        .iter()
        .map(|slot| StatEntry {
            name: slot.stat.name.clone(),
            base: slot.base_stat,
        })
        .collect()
}

pub fn sprites(response: &PokemonResponse, placeholder: &str) -> SpriteSet {
    SpriteSet::from_views(response.sprites.views_or(placeholder))
}

/// Groups move names by learn method, in order of first appearance.
///
/// Moves without a learn method share the `unknown` bucket.
pub fn group_moves(moves: &[MoveEntry]) -> Vec<(String, Vec<String>)> {
    let mut groups: Vec<(String, Vec<String>)> = Vec::new();
    for entry in moves {
        let method = entry.learn_method.as_deref().unwrap_or(UNKNOWN_LEARN_METHOD);
        match groups.iter_mut().find(|(name, _)| name == method) {
            Some((_, names)) => names.push(entry.name.clone()),
            None => groups.push((method.to_string(), vec![entry.name.clone()])),
        }
    }
    groups
}
