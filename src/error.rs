//! Error types for layout and transition operations

/// Error types for layout and transition operations.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Unknown layout: {0}")]
    UnknownLayout(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
