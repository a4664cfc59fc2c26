//! One error enum for the whole binary.
//!
//! Every layer (RPC polling, event decoding, SQLite storage, configuration)
//! returns [`IndexerError`] through the crate-local [`Result`]; `main`
//! converts it to `anyhow` at the boundary. Decode failures of individual
//! events are *not* errors — an unrecognised event is stored as `unknown`
//! rather than stopping the poll loop.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexerError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required environment variable is missing or unparsable.
    #[error("configuration error: {0}")]
    Config(String),

    /// The RPC returned a response shape we cannot work with at all
    /// (hard JSON-RPC errors, empty results).
    #[error("event parse error: {0}")]
    EventParse(String),
}

pub type Result<T> = std::result::Result<T, IndexerError>;
