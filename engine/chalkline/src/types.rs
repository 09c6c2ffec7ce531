use core::fmt;

use serde::{Deserialize, Serialize};

pub type EntryId = u32;

/// Roster role used for composition checks.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(alias = "G")]
    Guard = 0,
    #[serde(alias = "F")]
    Forward = 1,
}

impl Role {
    /// Single-letter slot label used by submission formats.
    pub fn as_letter(&self) -> &'static str {
        match self {
            Role::Guard => "G",
            Role::Forward => "F",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_letter())
    }
}

/// One selectable unit of a slate.
///
/// All numeric fields are immutable once loaded; construction reads the
/// pool, it never writes back into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateEntry {
    /// Unique within the pool for the duration of a build.
    pub entry_id: EntryId,

    /// Player name (e.g., "A'ja Wilson").
    pub name: String,

    /// Roster role for composition checks.
    pub role: Role,

    /// Salary consumed from the cap. Positive.
    pub salary: u32,

    /// Projected fantasy points; the quantity lineups are scored on.
    pub projection: f64,

    /// Projected field ownership in percent (0-100).
    pub ownership: f64,

    /// Game key shared by entries from the same matchup (e.g., "LVA@SEA").
    pub game: String,
}

impl CandidateEntry {
    /// Projection per thousand dollars of salary.
    ///
    /// Computed on demand; never stored back onto the entry, so repeated
    /// strategy passes over the same pool see identical inputs.
    pub fn value_score(&self) -> f64 {
        self.projection / (self.salary as f64 / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_accepts_slate_letters() {
        let guard: Role = serde_json::from_str("\"G\"").unwrap();
        let forward: Role = serde_json::from_str("\"F\"").unwrap();
        assert_eq!(guard, Role::Guard);
        assert_eq!(forward, Role::Forward);
    }

    #[test]
    fn value_score_scales_per_thousand() {
        let entry = CandidateEntry {
            entry_id: 1,
            name: "Test Player".to_string(),
            role: Role::Guard,
            salary: 5_000,
            projection: 25.0,
            ownership: 10.0,
            game: "LVA@SEA".to_string(),
        };
        assert!((entry.value_score() - 5.0).abs() < f64::EPSILON);
    }
}
