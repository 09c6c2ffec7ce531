//! Budget and role-composition checks for built lineups.

use crate::error::ValidationFailure;
use crate::{Lineup, Role, ROSTER_SIZE, SALARY_CAP};

/// Thresholds a lineup must meet to be playable.
#[derive(Clone, Copy, Debug)]
pub struct RosterRules {
    pub roster_size: usize,
    pub salary_cap: u32,
    pub min_guards: usize,
    pub min_forwards: usize,
}

impl Default for RosterRules {
    fn default() -> Self {
        Self {
            roster_size: ROSTER_SIZE,
            salary_cap: SALARY_CAP,
            min_guards: 2,
            min_forwards: 3,
        }
    }
}

/// Check `lineup` against `rules`, reporting the first violation.
///
/// Checks run in order: roster size, salary cap, role minimums. The lineup
/// is not mutated.
pub fn check(lineup: &Lineup, rules: &RosterRules) -> Result<(), ValidationFailure> {
    if lineup.entries.len() != rules.roster_size {
        return Err(ValidationFailure::RosterSize {
            found: lineup.entries.len(),
            expected: rules.roster_size,
        });
    }
    if lineup.total_salary > rules.salary_cap {
        return Err(ValidationFailure::CapExceeded {
            total: lineup.total_salary,
            cap: rules.salary_cap,
        });
    }
    let guards = lineup.role_count(Role::Guard);
    if guards < rules.min_guards {
        return Err(ValidationFailure::RoleShortfall {
            role: Role::Guard,
            found: guards,
            required: rules.min_guards,
        });
    }
    let forwards = lineup.role_count(Role::Forward);
    if forwards < rules.min_forwards {
        return Err(ValidationFailure::RoleShortfall {
            role: Role::Forward,
            found: forwards,
            required: rules.min_forwards,
        });
    }
    Ok(())
}

/// `true` when `lineup` satisfies `rules`.
pub fn validate(lineup: &Lineup, rules: &RosterRules) -> bool {
    check(lineup, rules).is_ok()
}
