// Chalkline - per-slate deterministic lineup construction engine

mod batch;
mod builder;
mod config;
mod error;
mod lineup;
mod strategy;
mod types;
mod validator;

pub use batch::BatchGenerator;
pub use builder::LineupBuilder;
pub use config::{BuilderConfig, CfgError, CostBands, StackPlan};
pub use error::{BuildError, ValidationFailure};
pub use lineup::Lineup;
pub use strategy::StrategyKind;
pub use types::{CandidateEntry, EntryId, Role};
pub use validator::{check, validate, RosterRules};

/// Entries in a complete lineup.
pub const ROSTER_SIZE: usize = 6;

/// Total salary available to a lineup.
pub const SALARY_CAP: u32 = 50_000;
