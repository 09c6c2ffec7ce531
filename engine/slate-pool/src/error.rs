//! Error types for slate loading.

use thiserror::Error;

/// Result type alias for pool operations.
pub type Result<T> = std::result::Result<T, PoolError>;

/// Errors that can occur while loading a slate.
#[derive(Debug, Error)]
pub enum PoolError {
    /// I/O errors reading slate files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Slate document parse errors.
    #[error("slate parse error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Reference configuration parse errors.
    #[error("slate config error: {0}")]
    Config(#[from] toml::de::Error),

    /// Two slate entries resolved to the same identifier.
    #[error("duplicate entry id {entry_id} in slate")]
    DuplicateEntry { entry_id: u32 },

    /// An entry carried a non-positive salary.
    #[error("entry '{name}' has no salary")]
    InvalidSalary { name: String },
}
