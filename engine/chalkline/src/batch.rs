//! Batch generation across the strategy rotation.

use tracing::{info, warn};

use crate::builder::LineupBuilder;
use crate::error::BuildError;
use crate::validator::{check, RosterRules};
use crate::{CandidateEntry, Lineup, StrategyKind};

/// Produces a run of validated lineups by cycling the strategy rotation.
pub struct BatchGenerator {
    builder: LineupBuilder,
    rules: RosterRules,
}

impl BatchGenerator {
    pub fn new(builder: LineupBuilder, rules: RosterRules) -> Self {
        Self { builder, rules }
    }

    /// Build up to `count` lineups. Attempt `i` uses rotation slot
    /// `i % 5` and, when it survives validation, carries sequence number
    /// `i + 1`.
    ///
    /// Build and validation failures are logged and skipped — not retried,
    /// not fatal — so the output can be shorter than `count`, or empty.
    /// An empty pool is the one error that propagates.
    pub fn generate(
        &self,
        pool: &[CandidateEntry],
        count: u32,
    ) -> Result<Vec<Lineup>, BuildError> {
        if pool.is_empty() {
            return Err(BuildError::EmptyPool);
        }

        let rotation = StrategyKind::ROTATION;
        let mut lineups = Vec::with_capacity(count as usize);

        for i in 0..count {
            let strategy = rotation[i as usize % rotation.len()];
            let lineup = match self.builder.build(pool, strategy) {
                Ok(lineup) => lineup,
                Err(err @ BuildError::EmptyPool) => return Err(err),
                Err(err) => {
                    warn!(strategy = %strategy, attempt = i + 1, "build skipped: {err}");
                    continue;
                }
            };

            if let Err(err) = check(&lineup, &self.rules) {
                warn!(strategy = %strategy, attempt = i + 1, "lineup discarded: {err}");
                continue;
            }

            lineups.push(lineup.with_sequence(i + 1));
        }

        info!(requested = count, produced = lineups.len(), "batch generation finished");
        Ok(lineups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BuilderConfig, StackPlan};
    use crate::Role;

    fn entry(
        id: u32,
        role: Role,
        salary: u32,
        projection: f64,
        ownership: f64,
        game: &str,
    ) -> CandidateEntry {
        CandidateEntry {
            entry_id: id,
            name: format!("Player {id}"),
            role,
            salary,
            projection,
            ownership,
            game: game.to_string(),
        }
    }

    /// Same two-game showdown slate as the builder tests.
    fn reference_pool() -> Vec<CandidateEntry> {
        vec![
            entry(1, Role::Forward, 11_800, 52.5, 38.5, "LVA@SEA"),
            entry(2, Role::Forward, 10_500, 47.8, 33.2, "NYL@CON"),
            entry(3, Role::Guard, 9_600, 44.1, 29.8, "LVA@SEA"),
            entry(4, Role::Guard, 8_700, 39.6, 27.4, "NYL@CON"),
            entry(5, Role::Forward, 8_200, 33.8, 24.1, "LVA@SEA"),
            entry(6, Role::Guard, 7_400, 30.4, 21.7, "NYL@CON"),
            entry(7, Role::Forward, 6_800, 27.6, 18.9, "LVA@SEA"),
            entry(8, Role::Guard, 6_300, 24.9, 16.2, "NYL@CON"),
            entry(9, Role::Forward, 5_600, 22.3, 13.8, "LVA@SEA"),
            entry(10, Role::Guard, 5_100, 20.1, 11.4, "NYL@CON"),
            entry(11, Role::Forward, 4_400, 36.2, 8.7, "LVA@SEA"),
            entry(12, Role::Guard, 3_900, 18.9, 6.3, "NYL@CON"),
        ]
    }

    fn stacked_generator() -> BatchGenerator {
        let builder = LineupBuilder::new(BuilderConfig {
            stack: Some(StackPlan {
                primary: "LVA@SEA".to_string(),
                secondary: "NYL@CON".to_string(),
            }),
            ..Default::default()
        })
        .unwrap();
        BatchGenerator::new(builder, RosterRules::default())
    }

    #[test]
    fn batch_of_five_walks_the_rotation_in_order() {
        let lineups = stacked_generator().generate(&reference_pool(), 5).unwrap();

        let tags: Vec<StrategyKind> = lineups.iter().map(|l| l.strategy).collect();
        assert_eq!(tags, StrategyKind::ROTATION);
        let sequences: Vec<u32> = lineups.iter().map(|l| l.sequence).collect();
        assert_eq!(sequences, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn reference_slate_yields_four_validated_lineups() {
        let lineups = stacked_generator().generate(&reference_pool(), 4).unwrap();

        assert_eq!(lineups.len(), 4);
        for lineup in &lineups {
            assert_eq!(lineup.entries.len(), 6);
            assert!(lineup.total_salary <= 50_000);
            assert!(lineup.role_count(Role::Guard) >= 2);
            assert!(lineup.role_count(Role::Forward) >= 3);

            let mut ids: Vec<u32> = lineup.entries.iter().map(|e| e.entry_id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), 6, "duplicate entry in {} lineup", lineup.strategy);
        }

        // The ceiling lineup projects at least as high as every other.
        let ceiling = &lineups[0];
        assert_eq!(ceiling.strategy, StrategyKind::Ceiling);
        for other in &lineups[1..] {
            assert!(ceiling.total_projection >= other.total_projection);
        }
    }

    #[test]
    fn failed_attempts_leave_holes_in_the_sequence() {
        // No stack plan: the game-stack attempt fails and is skipped.
        let builder = LineupBuilder::new(BuilderConfig::default()).unwrap();
        let generator = BatchGenerator::new(builder, RosterRules::default());

        let lineups = generator.generate(&reference_pool(), 5).unwrap();

        assert_eq!(lineups.len(), 4);
        let sequences: Vec<u32> = lineups.iter().map(|l| l.sequence).collect();
        assert_eq!(sequences, vec![1, 2, 3, 5]);
        assert!(lineups.iter().all(|l| l.strategy != StrategyKind::GameStack));
    }

    #[test]
    fn infeasible_pool_yields_an_empty_batch_without_error() {
        let pool: Vec<CandidateEntry> = (1..=8)
            .map(|i| {
                let game = if i % 2 == 0 { "NYL@CON" } else { "LVA@SEA" };
                let role = if i % 2 == 0 { Role::Guard } else { Role::Forward };
                entry(i, role, 9_500, 25.0, 15.0, game)
            })
            .collect();

        let lineups = stacked_generator().generate(&pool, 5).unwrap();
        assert!(lineups.is_empty());
    }

    #[test]
    fn empty_pool_propagates() {
        let err = stacked_generator().generate(&[], 3).unwrap_err();
        assert_eq!(err, BuildError::EmptyPool);
    }
}
