use thiserror::Error;

/// All the ways things can go wrong in apidex
///
/// Short list on purpose: the engines are total functions over in-memory
/// data, so only the edges (catalog file, config file) can actually fail.
/// An empty result set is a valid outcome, never an error.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Catalog unavailable: {0}")]
    CatalogError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("API record not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
