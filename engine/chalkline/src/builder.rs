//! Greedy, strategy-driven lineup construction.

use tracing::debug;

use crate::config::{BuilderConfig, CfgError};
use crate::error::BuildError;
use crate::{CandidateEntry, Lineup, StrategyKind};

/// Entries the game-stack strategy takes from the primary game.
const STACK_PRIMARY: usize = 3;
/// Entries the game-stack strategy takes from the secondary game.
const STACK_SECONDARY: usize = 2;
/// Premium anchors in a balanced lineup.
const BALANCED_PREMIUM: usize = 1;
/// Mid-tier entries in a balanced lineup.
const BALANCED_MID: usize = 3;

/// Assembles lineups from a candidate pool, one strategy at a time.
///
/// Construction is deterministic and greedy: each strategy walks its own
/// sorted ordering, an entry that does not fit the remaining salary is
/// skipped (never substituted), and the walk never backtracks. A feasible
/// lineup can therefore be missed; that is the behavior class this engine
/// implements, not an optimizer.
pub struct LineupBuilder {
    cfg: BuilderConfig,
}

/// Running state for one build pass.
struct Selection {
    picked: Vec<CandidateEntry>,
    remaining: u32,
}

impl Selection {
    fn new(cap: u32) -> Self {
        Self { picked: Vec::new(), remaining: cap }
    }

    fn contains(&self, entry: &CandidateEntry) -> bool {
        self.picked.iter().any(|p| p.entry_id == entry.entry_id)
    }

    /// Add `entry` if it is new and fits the remaining salary.
    fn try_add(&mut self, entry: &CandidateEntry) -> bool {
        if self.contains(entry) || entry.salary > self.remaining {
            return false;
        }
        self.remaining -= entry.salary;
        self.picked.push(entry.clone());
        true
    }

    fn len(&self) -> usize {
        self.picked.len()
    }
}

impl LineupBuilder {
    /// Create a builder from a validated configuration.
    pub fn new(cfg: BuilderConfig) -> Result<Self, CfgError> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.cfg
    }

    /// Build one lineup from `pool` under `strategy`.
    ///
    /// The pool is read-only input. Every ordering a strategy derives is
    /// local to this call, so repeated builds over an unmodified pool
    /// return identical selections.
    pub fn build(
        &self,
        pool: &[CandidateEntry],
        strategy: StrategyKind,
    ) -> Result<Lineup, BuildError> {
        if pool.is_empty() {
            return Err(BuildError::EmptyPool);
        }

        let selection = match strategy {
            StrategyKind::Ceiling => self.build_ceiling(pool),
            StrategyKind::Balanced => self.build_balanced(pool),
            StrategyKind::Contrarian => self.build_contrarian(pool),
            StrategyKind::GameStack => self.build_game_stack(pool),
            StrategyKind::Value => self.build_value(pool),
        }?;

        debug!(
            strategy = %strategy,
            salary = self.cfg.salary_cap - selection.remaining,
            "lineup assembled"
        );
        Ok(Lineup::assemble(selection.picked, strategy, self.cfg.salary_cap))
    }

    /// Highest projection first.
    fn build_ceiling(&self, pool: &[CandidateEntry]) -> Result<Selection, BuildError> {
        let mut ordered: Vec<&CandidateEntry> = pool.iter().collect();
        ordered.sort_by(|a, b| b.projection.total_cmp(&a.projection));

        let mut selection = Selection::new(self.cfg.salary_cap);
        fill_from(&mut selection, ordered, self.cfg.roster_size);
        self.complete(selection, StrategyKind::Ceiling)
    }

    /// One premium anchor, three mid-tier entries by projection per dollar,
    /// then the cheapest band by raw projection until the roster is full.
    fn build_balanced(&self, pool: &[CandidateEntry]) -> Result<Selection, BuildError> {
        let bands = self.cfg.bands;
        let mut premium: Vec<&CandidateEntry> =
            pool.iter().filter(|e| e.salary >= bands.high_floor).collect();
        let mut mid: Vec<&CandidateEntry> = pool
            .iter()
            .filter(|e| e.salary >= bands.mid_floor && e.salary < bands.high_floor)
            .collect();
        let mut cheap: Vec<&CandidateEntry> =
            pool.iter().filter(|e| e.salary < bands.mid_floor).collect();

        premium.sort_by(|a, b| b.projection.total_cmp(&a.projection));
        mid.sort_by(|a, b| b.value_score().total_cmp(&a.value_score()));
        cheap.sort_by(|a, b| b.projection.total_cmp(&a.projection));

        let mut selection = Selection::new(self.cfg.salary_cap);

        let anchors = fill_from(&mut selection, premium, BALANCED_PREMIUM);
        if anchors < BALANCED_PREMIUM {
            return Err(BuildError::BandExhausted {
                strategy: StrategyKind::Balanced,
                band: "premium",
                required: BALANCED_PREMIUM,
                found: anchors,
            });
        }

        let mids = fill_from(&mut selection, mid, BALANCED_MID);
        if mids < BALANCED_MID {
            return Err(BuildError::BandExhausted {
                strategy: StrategyKind::Balanced,
                band: "mid-tier",
                required: BALANCED_MID,
                found: mids,
            });
        }

        let open = self.cfg.roster_size.saturating_sub(selection.len());
        fill_from(&mut selection, cheap, open);
        self.complete(selection, StrategyKind::Balanced)
    }

    /// Lowest ownership first among entries above the projection floor.
    fn build_contrarian(&self, pool: &[CandidateEntry]) -> Result<Selection, BuildError> {
        let floor = self.cfg.contrarian_floor;
        let mut ordered: Vec<&CandidateEntry> =
            pool.iter().filter(|e| e.projection >= floor).collect();
        // Stable sort: tied ownership keeps original pool order.
        ordered.sort_by(|a, b| a.ownership.total_cmp(&b.ownership));

        let mut selection = Selection::new(self.cfg.salary_cap);
        fill_from(&mut selection, ordered, self.cfg.roster_size);
        self.complete(selection, StrategyKind::Contrarian)
    }

    /// Top three from the designated primary game, top two from the
    /// secondary, best remaining projection from anywhere in the last slot.
    fn build_game_stack(&self, pool: &[CandidateEntry]) -> Result<Selection, BuildError> {
        let plan = self.cfg.stack.as_ref().ok_or(BuildError::MissingStackPlan)?;

        let mut selection = Selection::new(self.cfg.salary_cap);
        self.fill_stack(&mut selection, pool, &plan.primary, STACK_PRIMARY)?;
        self.fill_stack(&mut selection, pool, &plan.secondary, STACK_SECONDARY)?;

        let mut rest: Vec<&CandidateEntry> = pool.iter().collect();
        rest.sort_by(|a, b| b.projection.total_cmp(&a.projection));
        let open = self.cfg.roster_size.saturating_sub(selection.len());
        fill_from(&mut selection, rest, open);
        self.complete(selection, StrategyKind::GameStack)
    }

    fn fill_stack(
        &self,
        selection: &mut Selection,
        pool: &[CandidateEntry],
        game: &str,
        want: usize,
    ) -> Result<(), BuildError> {
        let mut from_game: Vec<&CandidateEntry> =
            pool.iter().filter(|e| e.game == game).collect();
        from_game.sort_by(|a, b| b.projection.total_cmp(&a.projection));

        let got = fill_from(selection, from_game, want);
        if got < want {
            return Err(BuildError::StackExhausted {
                game: game.to_string(),
                required: want,
                found: got,
            });
        }
        Ok(())
    }

    /// Best projection per thousand dollars of salary.
    fn build_value(&self, pool: &[CandidateEntry]) -> Result<Selection, BuildError> {
        // Scores live in a local ranking; the pool is never annotated.
        let mut ranked: Vec<(f64, &CandidateEntry)> =
            pool.iter().map(|e| (e.value_score(), e)).collect();
        ranked.sort_by(|a, b| b.0.total_cmp(&a.0));

        let mut selection = Selection::new(self.cfg.salary_cap);
        fill_from(&mut selection, ranked.into_iter().map(|(_, e)| e), self.cfg.roster_size);
        self.complete(selection, StrategyKind::Value)
    }

    /// Reject a selection that stalled short of a full roster.
    fn complete(
        &self,
        selection: Selection,
        strategy: StrategyKind,
    ) -> Result<Selection, BuildError> {
        if selection.len() < self.cfg.roster_size {
            return Err(BuildError::RosterIncomplete {
                strategy,
                selected: selection.len(),
                required: self.cfg.roster_size,
            });
        }
        Ok(selection)
    }
}

/// Walk `ordered` and greedily add up to `limit` entries that fit.
///
/// Returns how many were added. Unaffordable or already-selected entries
/// are skipped in place; the walk never revisits them.
fn fill_from<'a, I>(selection: &mut Selection, ordered: I, limit: usize) -> usize
where
    I: IntoIterator<Item = &'a CandidateEntry>,
{
    let mut added = 0;
    for entry in ordered {
        if added == limit {
            break;
        }
        if selection.try_add(entry) {
            added += 1;
        }
    }
    added
}
