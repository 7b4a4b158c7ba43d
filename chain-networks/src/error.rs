//! Error types for the networks crate

use thiserror::Error;

/// Errors raised around the registry: configuration, parsing and
/// exclusive registration. Lookups themselves never fail.
#[derive(Error, Debug)]
pub enum NetworksError {
    #[error("Unknown network field: {0}")]
    UnknownField(String),

    #[error("Invalid network magic: {0}")]
    InvalidMagic(String),

    #[error("Hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),

    #[error("Value {value} of field `{field}` is already used by network {existing}")]
    Collision {
        field: &'static str,
        value: String,
        existing: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config source error: {0}")]
    ConfigSource(#[from] config::ConfigError),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for networks operations
pub type NetworksResult<T> = Result<T, NetworksError>;
