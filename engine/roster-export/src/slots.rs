//! Fixed position-column arrangement.

use std::collections::HashSet;

use chalkline::{CandidateEntry, Lineup, Role};
use serde::Serialize;

use crate::error::{ExportError, Result};

const GUARD_SLOTS: usize = 2;
const FORWARD_SLOTS: usize = 3;

/// A lineup arranged into submission columns: G, G, F, F, F, UTIL.
#[derive(Debug, Clone, Serialize)]
pub struct RosterSlots {
    pub guards: Vec<CandidateEntry>,
    pub forwards: Vec<CandidateEntry>,
    pub utility: CandidateEntry,
}

impl RosterSlots {
    /// Entries in column order, utility last.
    pub fn in_column_order(&self) -> Vec<&CandidateEntry> {
        self.guards
            .iter()
            .chain(self.forwards.iter())
            .chain(std::iter::once(&self.utility))
            .collect()
    }
}

/// Arrange a lineup into the fixed submission columns.
///
/// Guards fill the two guard slots in selection order and forwards the
/// three forward slots; the utility slot takes the first entry not already
/// placed, falling back to the last selected entry when no remainder
/// exists.
pub fn arrange(lineup: &Lineup) -> Result<RosterSlots> {
    let mut guards = Vec::with_capacity(GUARD_SLOTS);
    let mut forwards = Vec::with_capacity(FORWARD_SLOTS);

    for entry in &lineup.entries {
        match entry.role {
            Role::Guard if guards.len() < GUARD_SLOTS => guards.push(entry.clone()),
            Role::Forward if forwards.len() < FORWARD_SLOTS => forwards.push(entry.clone()),
            _ => {}
        }
    }

    if guards.len() < GUARD_SLOTS {
        return Err(ExportError::SlotShortfall {
            slot: "G",
            required: GUARD_SLOTS,
            found: guards.len(),
        });
    }
    if forwards.len() < FORWARD_SLOTS {
        return Err(ExportError::SlotShortfall {
            slot: "F",
            required: FORWARD_SLOTS,
            found: forwards.len(),
        });
    }

    let placed: HashSet<u32> = guards
        .iter()
        .chain(forwards.iter())
        .map(|e| e.entry_id)
        .collect();
    let utility = lineup
        .entries
        .iter()
        .find(|e| !placed.contains(&e.entry_id))
        .or_else(|| lineup.entries.last())
        .cloned()
        .ok_or(ExportError::EmptyLineup)?;

    Ok(RosterSlots { guards, forwards, utility })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry_json(id: u32, name: &str, role: &str) -> serde_json::Value {
        json!({
            "entry_id": id,
            "name": name,
            "role": role,
            "salary": 8_000,
            "projection": 30.0,
            "ownership": 15.0,
            "game": "LVA@SEA",
        })
    }

    fn lineup_from(entries: Vec<serde_json::Value>) -> Lineup {
        serde_json::from_value(json!({
            "entries": entries,
            "total_salary": 48_000,
            "total_projection": 180.0,
            "average_ownership": 15.0,
            "remaining_salary": 2_000,
            "strategy": "Ceiling",
            "sequence": 1,
        }))
        .unwrap()
    }

    #[test]
    fn third_guard_lands_in_the_utility_slot() {
        let lineup = lineup_from(vec![
            entry_json(1, "Jackie Young", "Guard"),
            entry_json(2, "Sabrina Ionescu", "Guard"),
            entry_json(3, "Leonie Fiebich", "Guard"),
            entry_json(4, "A'ja Wilson", "Forward"),
            entry_json(5, "Breanna Stewart", "Forward"),
            entry_json(6, "Nneka Ogwumike", "Forward"),
        ]);

        let slots = arrange(&lineup).unwrap();
        assert_eq!(slots.guards.len(), 2);
        assert_eq!(slots.forwards.len(), 3);
        assert_eq!(slots.utility.entry_id, 3);

        let order: Vec<u32> = slots.in_column_order().iter().map(|e| e.entry_id).collect();
        assert_eq!(order, vec![1, 2, 4, 5, 6, 3]);
    }

    #[test]
    fn utility_falls_back_to_the_last_entry_without_a_remainder() {
        // Five entries placing exactly 2 + 3 leaves no remainder.
        let lineup = lineup_from(vec![
            entry_json(1, "Jackie Young", "Guard"),
            entry_json(2, "Sabrina Ionescu", "Guard"),
            entry_json(3, "A'ja Wilson", "Forward"),
            entry_json(4, "Breanna Stewart", "Forward"),
            entry_json(5, "Nneka Ogwumike", "Forward"),
        ]);

        let slots = arrange(&lineup).unwrap();
        assert_eq!(slots.utility.entry_id, 5);
    }

    #[test]
    fn reports_unfillable_guard_column() {
        let lineup = lineup_from(vec![
            entry_json(1, "Jackie Young", "Guard"),
            entry_json(2, "A'ja Wilson", "Forward"),
            entry_json(3, "Breanna Stewart", "Forward"),
            entry_json(4, "Nneka Ogwumike", "Forward"),
            entry_json(5, "Ezi Magbegor", "Forward"),
            entry_json(6, "Gabby Williams", "Forward"),
        ]);

        match arrange(&lineup) {
            Err(ExportError::SlotShortfall { slot: "G", required: 2, found: 1 }) => {}
            other => panic!("expected guard shortfall, got {other:?}"),
        }
    }
}
