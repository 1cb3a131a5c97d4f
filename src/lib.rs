pub use error::AppError;

/// Main architecture layers (dependency flow: CLI → Core → Storage)
pub mod cli; // Command-line interface
pub mod core; // Search, extraction and favorites
pub mod storage; // Configuration file

/// Support modules (used across layers)
pub mod api; // PokeAPI client
pub mod display; // View tree and terminal output
pub mod error; // Error handling
pub mod utils; // Shared utilities and helpers

pub type Result<T> = std::result::Result<T, AppError>;
