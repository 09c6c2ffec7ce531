//! Injectable slate reference data.
//!
//! Game metadata, team-name normalization, and the designated stack games
//! live in a configuration file supplied by the operator, not in code, so
//! the engine itself stays free of slate-specific constants.

use std::collections::HashMap;
use std::path::Path;

use chalkline::StackPlan;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One scheduled matchup on the slate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameInfo {
    /// Game key entries reference (e.g., "LVA@SEA").
    pub key: String,

    /// Home team abbreviation.
    pub home: String,

    /// Away team abbreviation.
    pub away: String,

    /// Pace rating used by projection collaborators, when known.
    #[serde(default)]
    pub pace: Option<f64>,

    /// Scheduled tip-off.
    #[serde(default)]
    pub tipoff: Option<DateTime<Utc>>,
}

/// Designated games for the game-stack strategy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StackSettings {
    pub primary: String,
    pub secondary: String,
}

/// Slate reference configuration, loaded from TOML.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SlateConfig {
    /// Matchups on the slate.
    #[serde(default)]
    pub games: Vec<GameInfo>,

    /// Site spelling -> canonical abbreviation (e.g., "Las Vegas" -> "LVA").
    #[serde(default)]
    pub team_aliases: HashMap<String, String>,

    /// Designated stack games, when the operator has picked them.
    #[serde(default)]
    pub stack: Option<StackSettings>,
}

impl SlateConfig {
    /// Load reference data from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: SlateConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Canonical team abbreviation for a site spelling.
    pub fn canonical_team(&self, name: &str) -> String {
        self.team_aliases.get(name).cloned().unwrap_or_else(|| name.to_string())
    }

    /// Look up a game by key.
    pub fn game(&self, key: &str) -> Option<&GameInfo> {
        self.games.iter().find(|g| g.key == key)
    }

    /// The engine-facing stack plan, when designated.
    pub fn stack_plan(&self) -> Option<StackPlan> {
        self.stack.as_ref().map(|s| StackPlan {
            primary: s.primary.clone(),
            secondary: s.secondary.clone(),
        })
    }
}
