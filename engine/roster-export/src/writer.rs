//! Submission and summary file output.

use std::path::{Path, PathBuf};

use chalkline::Lineup;
use tracing::info;

use crate::error::Result;
use crate::slots::arrange;

const SUBMISSION_HEADER: &str = "G,G,F,F,F,UTIL";

/// Writes lineup batches into an output directory.
pub struct SubmissionWriter {
    out_dir: PathBuf,
}

impl SubmissionWriter {
    pub fn new<P: AsRef<Path>>(out_dir: P) -> Self {
        Self { out_dir: out_dir.as_ref().to_path_buf() }
    }

    /// Render one submission row per lineup and write the CSV file.
    ///
    /// Rows use the site's upload convention of `Name (id)` per column.
    pub async fn write_submission(&self, lineups: &[Lineup]) -> Result<PathBuf> {
        let mut contents = String::from(SUBMISSION_HEADER);
        contents.push('\n');

        for lineup in lineups {
            let slots = arrange(lineup)?;
            let row: Vec<String> = slots
                .in_column_order()
                .iter()
                .map(|e| format!("{} ({})", e.name, e.entry_id))
                .collect();
            contents.push_str(&row.join(","));
            contents.push('\n');
        }

        let path = self.out_dir.join("submission.csv");
        tokio::fs::create_dir_all(&self.out_dir).await?;
        tokio::fs::write(&path, contents).await?;

        info!(lineups = lineups.len(), path = %path.display(), "submission written");
        Ok(path)
    }

    /// Write the full lineup batch as pretty JSON for downstream tooling.
    pub async fn write_summary(&self, lineups: &[Lineup]) -> Result<PathBuf> {
        let json = serde_json::to_string_pretty(lineups)?;

        let path = self.out_dir.join("lineups.json");
        tokio::fs::create_dir_all(&self.out_dir).await?;
        tokio::fs::write(&path, json).await?;

        info!(lineups = lineups.len(), path = %path.display(), "summary written");
        Ok(path)
    }
}
