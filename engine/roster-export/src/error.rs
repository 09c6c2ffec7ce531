//! Error types for roster export.

use thiserror::Error;

/// Result type alias for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors that can occur while exporting lineups.
#[derive(Debug, Error)]
pub enum ExportError {
    /// I/O errors writing output files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Summary serialization errors.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A fixed position column could not be filled.
    #[error("lineup fills only {found} of {required} {slot} slots")]
    SlotShortfall {
        slot: &'static str,
        required: usize,
        found: usize,
    },

    /// The lineup carried no entries at all.
    #[error("cannot arrange an empty lineup")]
    EmptyLineup,
}
