//! Slate Pool
//!
//! Loads daily-fantasy slate documents into the candidate pool the lineup
//! engine consumes, and carries the injectable slate reference data (games,
//! team aliases, designated stack games) that collaborators need.

pub mod error;
pub mod pool;
pub mod slate;
pub mod types;

pub use error::{PoolError, Result};
pub use pool::{CandidatePool, PoolSummary};
pub use slate::{GameInfo, SlateConfig, StackSettings};
pub use types::{SlateData, SlateEntry};
