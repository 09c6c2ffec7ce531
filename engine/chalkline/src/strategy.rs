use core::fmt;

use serde::{Deserialize, Serialize};

/// Construction policy applied over a candidate pool.
///
/// Each variant is a distinct deterministic selection policy; dispatch is an
/// exhaustive `match`, so adding a variant without a handler fails to
/// compile.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Highest projection first.
    Ceiling = 0,
    /// One premium anchor, three mid-tier value plays, cheap fill.
    Balanced = 1,
    /// Lowest ownership first, above a projection floor.
    Contrarian = 2,
    /// Three entries from a designated game plus two from a second.
    GameStack = 3,
    /// Best projection per thousand dollars of salary.
    Value = 4,
}

impl StrategyKind {
    /// Fixed rotation the batch generator cycles through.
    pub const ROTATION: [StrategyKind; 5] = [
        StrategyKind::Ceiling,
        StrategyKind::Balanced,
        StrategyKind::Contrarian,
        StrategyKind::GameStack,
        StrategyKind::Value,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Ceiling => "ceiling",
            StrategyKind::Balanced => "balanced",
            StrategyKind::Contrarian => "contrarian",
            StrategyKind::GameStack => "game-stack",
            StrategyKind::Value => "value",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_covers_every_strategy_once() {
        let rotation = StrategyKind::ROTATION;
        assert_eq!(rotation.len(), 5);
        for (i, a) in rotation.iter().enumerate() {
            for b in rotation.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn display_matches_tag() {
        assert_eq!(StrategyKind::GameStack.to_string(), "game-stack");
        assert_eq!(StrategyKind::Ceiling.to_string(), "ceiling");
    }
}
