//! The slate-to-submission pipeline.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use chalkline::{BatchGenerator, BuilderConfig, LineupBuilder, RosterRules};
use roster_export::SubmissionWriter;
use slate_pool::{CandidatePool, SlateConfig};

use crate::config::ServiceConfig;

/// What one service run produced.
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub requested: u32,
    pub produced: usize,
    pub submission: PathBuf,
    pub summary: PathBuf,
}

/// Runs the load -> build -> validate -> export pipeline once.
pub struct LineupService {
    config: ServiceConfig,
}

impl LineupService {
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    pub async fn run(&self) -> Result<BatchReport> {
        let pool = CandidatePool::load_from_file(&self.config.slate_file)
            .await
            .context("Failed to load slate")?;
        let pool_summary = pool.summary();
        info!(
            entries = pool_summary.entries,
            games = pool_summary.games,
            min_salary = pool_summary.min_salary,
            max_salary = pool_summary.max_salary,
            "candidate pool ready"
        );

        let reference = match &self.config.slate_config {
            Some(path) => {
                SlateConfig::load_from_file(path).context("Failed to load slate reference data")?
            }
            None => SlateConfig::default(),
        };

        let builder = LineupBuilder::new(BuilderConfig {
            stack: reference.stack_plan(),
            ..Default::default()
        })
        .context("Invalid builder configuration")?;
        let generator = BatchGenerator::new(builder, RosterRules::default());

        let lineups = generator
            .generate(pool.entries(), self.config.lineup_count)
            .context("Batch generation failed")?;

        for lineup in &lineups {
            info!(
                strategy = %lineup.strategy,
                sequence = lineup.sequence,
                salary = lineup.total_salary,
                projection = lineup.total_projection,
                ownership = lineup.average_ownership,
                "lineup ready"
            );
        }

        let writer = SubmissionWriter::new(&self.config.output_dir);
        let submission =
            writer.write_submission(&lineups).await.context("Failed to write submission")?;
        let summary =
            writer.write_summary(&lineups).await.context("Failed to write lineup summary")?;

        Ok(BatchReport {
            requested: self.config.lineup_count,
            produced: lineups.len(),
            submission,
            summary,
        })
    }
}
