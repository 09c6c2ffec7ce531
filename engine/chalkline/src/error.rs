//! Error types for lineup construction and validation.

use thiserror::Error;

use crate::{Role, StrategyKind};

/// Errors that can occur while assembling a lineup.
///
/// `EmptyPool` is fatal for the invocation; every other variant is
/// recoverable and simply means this strategy attempt produced nothing.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    /// No candidates were supplied.
    #[error("candidate pool is empty")]
    EmptyPool,

    /// The strategy ran out of affordable candidates before filling the
    /// roster. Greedy passes never backtrack, so this can happen even when
    /// a feasible full lineup exists.
    #[error("{strategy} build stalled at {selected} of {required} slots")]
    RosterIncomplete {
        strategy: StrategyKind,
        selected: usize,
        required: usize,
    },

    /// A salary band held too few affordable entries for the balanced mix.
    #[error("{strategy} build needs {required} {band} entries, found {found}")]
    BandExhausted {
        strategy: StrategyKind,
        band: &'static str,
        required: usize,
        found: usize,
    },

    /// A designated stack game held too few affordable entries.
    #[error("game stack needs {required} affordable entries from {game}, found {found}")]
    StackExhausted {
        game: String,
        required: usize,
        found: usize,
    },

    /// Game-stack build requested without designated games.
    #[error("game stack requested but no stack plan is configured")]
    MissingStackPlan,
}

/// Reasons a built lineup fails validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("lineup has {found} entries, expected {expected}")]
    RosterSize { found: usize, expected: usize },

    #[error("lineup salary {total} exceeds cap {cap}")]
    CapExceeded { total: u32, cap: u32 },

    #[error("lineup has {found} {role} entries, needs at least {required}")]
    RoleShortfall {
        role: Role,
        found: usize,
        required: usize,
    },
}
