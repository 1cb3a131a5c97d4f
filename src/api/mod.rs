//! PokeAPI HTTP client and response models.

pub mod client;
pub mod models;

pub use client::{DEFAULT_BASE_URL, PokeApiClient};
