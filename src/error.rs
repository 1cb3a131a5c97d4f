use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("ApiError: {0}")]
    Api(#[from] ApiError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("DisplayError: {0}")]
    Display(#[from] DisplayError),
    #[error("{0}")]
    Search(#[from] SearchError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("Unknown command: {command}")]
    UnknownCommand { command: String },
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64, endpoint: String },
    #[error("HTTP error: {status} {message}")]
    Http {
        status: u16,
        endpoint: String,
        message: String,
    },
    #[error("Resource not found: {endpoint}")]
    NotFound { endpoint: String },
}

/// User-facing search failures. Auxiliary fetch failures never end up here.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("No {field} Specified.")]
    EmptyInput { field: &'static str },
    #[error("Couldn't Find Any Pokémon With The Name/ID: {identifier}")]
    NotFound {
        identifier: String,
        #[source]
        source: ApiError,
    },
    #[error("No Favorite Pokémon")]
    EmptyFavorites,
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration save failed: {message}")]
    ConfigSaveFailed { message: String },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Terminal output error: {0}")]
    TerminalOutput(String),
    #[error("Audio playback error: {0}")]
    Audio(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown configuration key '{key}'")]
    UnknownKey { key: String },
    #[error("Invalid configuration value for '{field}': {value}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            ErrorSeverity::Critical => "🚨",
            ErrorSeverity::High => "❌",
            ErrorSeverity::Medium => "⚠️",
            ErrorSeverity::Low => "ℹ️",
        }
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Cli(_) => ErrorSeverity::Medium,
            AppError::Api(api_error) => match api_error {
                ApiError::Timeout { .. } => ErrorSeverity::Medium,
                ApiError::Http { status, .. } if *status >= 500 => ErrorSeverity::High,
                _ => ErrorSeverity::Medium,
            },
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Storage(_) => ErrorSeverity::Medium,
            AppError::Display(_) => ErrorSeverity::Low,
            AppError::Search(search_error) => match search_error {
                SearchError::NotFound { .. } => ErrorSeverity::Medium,
                SearchError::EmptyInput { .. } | SearchError::EmptyFavorites => ErrorSeverity::Low,
            },
        }
    }

    pub fn display_friendly(&self) -> String {
        match self {
            AppError::Search(search_error) => search_error.to_string(),
            AppError::Api(ApiError::NotFound { endpoint }) => {
                format!("Nothing found at {}", endpoint)
            }
            _ => format!("{}", self),
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Search(SearchError::NotFound { .. }) => {
                Some("Check the spelling, or try the National Dex number instead".to_string())
            }
            AppError::Search(SearchError::EmptyFavorites) => {
                Some("'fav' on an open card adds it to your favorites".to_string())
            }
            AppError::Api(ApiError::Timeout { .. }) => {
                Some("Check your internet connection and try again".to_string())
            }
            AppError::Config(ConfigError::UnknownKey { .. }) => Some(format!(
                "Known keys: {}",
                crate::storage::config::CONFIG_KEYS.join(", ")
            )),
            _ => None,
        }
    }
}
