use std::collections::HashSet;
use std::path::Path;

use chalkline::CandidateEntry;
use tracing::info;

use crate::error::{PoolError, Result};
use crate::types::SlateData;

/// The candidate pool a build pass reads from.
///
/// Entries keep slate order, which is what makes tie-breaks in the engine's
/// stable sorts reproducible run to run. The pool is read-only once built.
#[derive(Debug)]
pub struct CandidatePool {
    entries: Vec<CandidateEntry>,
}

/// Salary/ownership rollups over a loaded pool.
#[derive(Debug, Clone, PartialEq)]
pub struct PoolSummary {
    pub entries: usize,
    pub games: usize,
    pub min_salary: u32,
    pub max_salary: u32,
    pub average_ownership: f64,
}

impl CandidatePool {
    /// Build a pool from a slate document.
    ///
    /// Entries without an explicit id get one from their slate position
    /// (1-based). Duplicate ids and zero salaries are rejected.
    pub fn from_slate(data: &SlateData) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(data.entries.len());

        for (index, row) in data.entries.iter().enumerate() {
            if row.salary == 0 {
                return Err(PoolError::InvalidSalary { name: row.name.clone() });
            }
            let candidate = row.to_candidate(index as u32 + 1);
            if !seen.insert(candidate.entry_id) {
                return Err(PoolError::DuplicateEntry { entry_id: candidate.entry_id });
            }
            entries.push(candidate);
        }

        Ok(Self { entries })
    }

    /// Read and parse a slate JSON file.
    pub async fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        info!("loading slate from {:?}", path.as_ref());

        let json = tokio::fs::read_to_string(&path).await?;
        let data: SlateData = serde_json::from_str(&json)?;

        let pool = Self::from_slate(&data)?;
        info!(slate = %data.slate, entries = pool.len(), "slate loaded");
        Ok(pool)
    }

    pub fn entries(&self) -> &[CandidateEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct game keys in first-seen order.
    pub fn games(&self) -> Vec<&str> {
        let mut games: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !games.contains(&entry.game.as_str()) {
                games.push(&entry.game);
            }
        }
        games
    }

    /// Entries belonging to one game.
    pub fn by_game(&self, game: &str) -> Vec<&CandidateEntry> {
        self.entries.iter().filter(|e| e.game == game).collect()
    }

    /// Top `limit` entries by projection.
    pub fn top_by_projection(&self, limit: usize) -> Vec<&CandidateEntry> {
        let mut ranked: Vec<&CandidateEntry> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.projection.total_cmp(&a.projection));
        ranked.truncate(limit);
        ranked
    }

    /// Salary and ownership rollups for logging and sanity checks.
    pub fn summary(&self) -> PoolSummary {
        let average_ownership = if self.entries.is_empty() {
            0.0
        } else {
            self.entries.iter().map(|e| e.ownership).sum::<f64>() / self.entries.len() as f64
        };

        PoolSummary {
            entries: self.entries.len(),
            games: self.games().len(),
            min_salary: self.entries.iter().map(|e| e.salary).min().unwrap_or(0),
            max_salary: self.entries.iter().map(|e| e.salary).max().unwrap_or(0),
            average_ownership,
        }
    }
}
