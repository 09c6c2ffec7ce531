use chalkline::{CandidateEntry, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of a slate document as exported by the site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlateEntry {
    /// Stable identifier; assigned from slate order when absent.
    #[serde(default)]
    pub entry_id: Option<u32>,

    /// Player name (e.g., "A'ja Wilson").
    pub name: String,

    /// Roster position; slate exports use "G"/"F".
    pub position: Role,

    /// Contest salary.
    pub salary: u32,

    /// Projected fantasy points.
    pub projection: f64,

    /// Projected field ownership in percent.
    pub ownership: f64,

    /// Game key (e.g., "LVA@SEA").
    pub game: String,
}

impl SlateEntry {
    /// Convert to the engine's candidate record, using `fallback_id` when
    /// the slate did not carry one.
    pub fn to_candidate(&self, fallback_id: u32) -> CandidateEntry {
        CandidateEntry {
            entry_id: self.entry_id.unwrap_or(fallback_id),
            name: self.name.clone(),
            role: self.position,
            salary: self.salary,
            projection: self.projection,
            ownership: self.ownership,
            game: self.game.clone(),
        }
    }
}

/// Container for one slate's worth of entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlateData {
    /// Slate label (e.g., "WNBA Showdown 2026-08-06").
    pub slate: String,

    /// When this document was last refreshed.
    pub last_updated: DateTime<Utc>,

    /// Selectable entries.
    pub entries: Vec<SlateEntry>,
}

impl SlateData {
    /// Create an empty slate document.
    pub fn new(slate: String) -> Self {
        Self { slate, last_updated: Utc::now(), entries: Vec::new() }
    }
}
