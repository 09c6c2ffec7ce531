//! Roster Export
//!
//! The output consumer for built lineups: arranges entries into the fixed
//! submission columns (two guard slots, three forward slots, one utility
//! slot) and renders submission CSV rows and JSON summaries to disk.

pub mod error;
pub mod slots;
pub mod writer;

pub use error::{ExportError, Result};
pub use slots::{arrange, RosterSlots};
pub use writer::SubmissionWriter;
