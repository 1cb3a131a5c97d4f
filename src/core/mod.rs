//! Business logic layer
//!
//! Extraction of API responses into the domain model, the session favorites,
//! the fetch services and the search dispatcher that ties them together.

pub mod evolution;
pub mod extract;
pub mod favorites;
pub mod record;
pub mod search;
pub mod services;
