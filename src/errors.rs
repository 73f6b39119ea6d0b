//! Error handling for the solmap renderer.
//!
//! One typed error covers the whole pipeline. Absence of a block is
//! deliberately not represented here: a missing or skipped slot degrades to
//! an empty transaction set and still renders a valid image.

use thiserror::Error;

/// Main error type for the solmap renderer.
#[derive(Error, Debug)]
pub enum SolmapError {
    /// RPC communication failures reaching the ledger endpoint. Never
    /// retried; the HTTP layer decides how to report it.
    #[error("RPC error: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),

    /// Transaction payload serialization failures during size extraction.
    #[error("Transaction serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// PNG encoding failures. Only reachable with a malformed raster, which
    /// is an internal invariant violation rather than a runtime condition.
    #[error("Image encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    /// File I/O failures when saving a rendered image to disk.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment configuration failures at startup.
    #[error("Configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration values that deserialized but fail validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for the solmap renderer.
pub type SolmapResult<T> = Result<T, SolmapError>;
