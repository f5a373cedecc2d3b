//! Error types for the portfolio core

use thiserror::Error;

/// Main error type for portfolio operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// Query against the content store failed
    #[error("Query failed: {0}")]
    Query(String),

    /// Transport-level HTTP failure (connection refused, timeout, TLS)
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// The content store answered with a non-success status
    #[error("Content store error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the store
        status: u16,
        /// Human-readable description taken from the response body
        message: String,
    },

    /// Document was not found in the content store
    #[error("Project not found: {0}")]
    NotFound(String),

    /// Write operations need a write token that was not provided
    #[error("Admin client not configured. Please set PORTFOLIO_WRITE_TOKEN")]
    NotConfigured,

    /// Input rejected before reaching the store
    #[error("Invalid input: {0}")]
    Validation(String),

    /// A raw record could not be mapped into a gallery item
    #[error("Mapping error: {0}")]
    Mapping(#[from] crate::mapping::MappingError),

    /// Image asset reference could not be parsed
    #[error("Invalid image reference: {0}")]
    InvalidAssetRef(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PortfolioError {
    /// True for failures that a manual retry might fix.
    pub fn is_retryable(&self) -> bool {
        match self {
            PortfolioError::Http(_) | PortfolioError::Query(_) => true,
            PortfolioError::Api { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;
