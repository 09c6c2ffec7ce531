use serde::{Deserialize, Serialize};

use crate::{CandidateEntry, Role, StrategyKind};

/// A completed roster produced by one strategy pass.
///
/// Owns copies of the entries it selected; it never references back into
/// the pool. Assembled atomically from a finalized selection and immutable
/// afterwards — a lineup that fails validation is discarded, not patched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lineup {
    /// Selected entries in pick order.
    pub entries: Vec<CandidateEntry>,

    /// Sum of entry salaries.
    pub total_salary: u32,

    /// Sum of entry projections.
    pub total_projection: f64,

    /// Mean entry ownership in percent.
    pub average_ownership: f64,

    /// Salary cap minus `total_salary`.
    pub remaining_salary: u32,

    /// Strategy that produced this lineup.
    pub strategy: StrategyKind,

    /// 1-based attempt index within a batch; 0 until the batch tags it.
    pub sequence: u32,
}

impl Lineup {
    /// Roll a finalized selection up into an immutable lineup.
    pub(crate) fn assemble(
        entries: Vec<CandidateEntry>,
        strategy: StrategyKind,
        salary_cap: u32,
    ) -> Self {
        let total_salary: u32 = entries.iter().map(|e| e.salary).sum();
        let total_projection: f64 = entries.iter().map(|e| e.projection).sum();
        let average_ownership = if entries.is_empty() {
            0.0
        } else {
            entries.iter().map(|e| e.ownership).sum::<f64>() / entries.len() as f64
        };

        Self {
            total_salary,
            total_projection,
            average_ownership,
            remaining_salary: salary_cap.saturating_sub(total_salary),
            strategy,
            sequence: 0,
            entries,
        }
    }

    /// Tag with a 1-based batch sequence number.
    pub(crate) fn with_sequence(mut self, sequence: u32) -> Self {
        self.sequence = sequence;
        self
    }

    /// Number of selected entries carrying `role`.
    pub fn role_count(&self, role: Role) -> usize {
        self.entries.iter().filter(|e| e.role == role).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u32, role: Role, salary: u32, projection: f64, ownership: f64) -> CandidateEntry {
        CandidateEntry {
            entry_id: id,
            name: format!("Player {id}"),
            role,
            salary,
            projection,
            ownership,
            game: "LVA@SEA".to_string(),
        }
    }

    #[test]
    fn assemble_rolls_up_aggregates() {
        let lineup = Lineup::assemble(
            vec![
                entry(1, Role::Guard, 8_000, 30.0, 20.0),
                entry(2, Role::Forward, 7_000, 25.0, 10.0),
            ],
            StrategyKind::Ceiling,
            50_000,
        );

        assert_eq!(lineup.total_salary, 15_000);
        assert_eq!(lineup.remaining_salary, 35_000);
        assert!((lineup.total_projection - 55.0).abs() < 1e-9);
        assert!((lineup.average_ownership - 15.0).abs() < 1e-9);
        assert_eq!(lineup.sequence, 0);
    }

    #[test]
    fn role_count_filters_by_role() {
        let lineup = Lineup::assemble(
            vec![
                entry(1, Role::Guard, 5_000, 20.0, 5.0),
                entry(2, Role::Guard, 5_000, 20.0, 5.0),
                entry(3, Role::Forward, 5_000, 20.0, 5.0),
            ],
            StrategyKind::Value,
            50_000,
        );

        assert_eq!(lineup.role_count(Role::Guard), 2);
        assert_eq!(lineup.role_count(Role::Forward), 1);
    }
}
