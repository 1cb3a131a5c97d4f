//! Storage layer: the TOML configuration file.
//!
//! Favorites live only in memory for the length of a session.

use crate::error::StorageError;

pub mod config;

type Result<T> = std::result::Result<T, StorageError>;
