//! Service layer - the fetch operations the search dispatcher is built on.

pub mod pokedex_service;

pub use pokedex_service::{PokedexService, TypeQuery};
