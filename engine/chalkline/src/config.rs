use thiserror::Error;

use crate::{ROSTER_SIZE, SALARY_CAP};

/// Salary bands used by the balanced strategy.
#[derive(Clone, Copy, Debug)]
pub struct CostBands {
    /// Entries at or above this salary are premium plays.
    pub high_floor: u32,

    /// Entries at or above this salary (and below `high_floor`) are
    /// mid-tier; everything cheaper is a value play.
    pub mid_floor: u32,
}

impl Default for CostBands {
    fn default() -> Self {
        Self { high_floor: 9_000, mid_floor: 6_000 }
    }
}

/// The two designated games for the game-stack strategy.
///
/// Which games anchor a stack is slate knowledge supplied by the caller;
/// the engine never derives it from the pool.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StackPlan {
    /// Game key contributing three entries.
    pub primary: String,

    /// Game key contributing two entries.
    pub secondary: String,
}

/// Builder configuration. Defaults carry the slate-standard constants.
#[derive(Clone, Debug)]
pub struct BuilderConfig {
    /// Total salary available to a lineup.
    pub salary_cap: u32,

    /// Entries in a complete lineup.
    pub roster_size: usize,

    /// Salary bands for the balanced strategy.
    pub bands: CostBands,

    /// Minimum projection an entry needs to be contrarian-eligible.
    pub contrarian_floor: f64,

    /// Designated games for the game-stack strategy, when known.
    pub stack: Option<StackPlan>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            salary_cap: SALARY_CAP,
            roster_size: ROSTER_SIZE,
            bands: CostBands::default(),
            contrarian_floor: 20.0,
            stack: None,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CfgError {
    #[error("salary cap must be positive")]
    CapZero,

    #[error("roster size must be positive")]
    RosterZero,

    #[error("cost bands must satisfy 0 < mid_floor < high_floor")]
    BandsInverted,

    #[error("contrarian projection floor must be a finite, non-negative number")]
    FloorInvalid,

    #[error("stack plan designates the same game twice")]
    StackDegenerate,
}

impl BuilderConfig {
    pub fn validate(&self) -> Result<(), CfgError> {
        if self.salary_cap == 0 {
            return Err(CfgError::CapZero);
        }
        if self.roster_size == 0 {
            return Err(CfgError::RosterZero);
        }
        if self.bands.mid_floor == 0 || self.bands.mid_floor >= self.bands.high_floor {
            return Err(CfgError::BandsInverted);
        }
        if !self.contrarian_floor.is_finite() || self.contrarian_floor < 0.0 {
            return Err(CfgError::FloorInvalid);
        }
        if let Some(plan) = &self.stack {
            if plan.primary == plan.secondary {
                return Err(CfgError::StackDegenerate);
            }
        }
        Ok(())
    }
}
