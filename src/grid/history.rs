//! Per-side population history.

use serde::{Deserialize, Serialize};

/// Population counts indexed by generation.
///
/// Holds exactly `max_generations + 1` slots for regulation play: slot `t`
/// is the live-cell count immediately after generation `t`, slot 0 the
/// population at load time. Slots not yet reached are `None`.
///
/// In extended tiebreak mode additional entries are appended past the
/// regulation slots, one per tiebreak generation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationHistory {
    entries: Vec<Option<u32>>,
    regulation_len: usize,
}

impl PopulationHistory {
    /// Create an empty history for a game of `max_generations` steps.
    #[must_use]
    pub fn new(max_generations: u32) -> Self {
        let regulation_len = max_generations as usize + 1;
        Self {
            entries: vec![None; regulation_len],
            regulation_len,
        }
    }

    /// Record the population after `generation`.
    pub fn record(&mut self, generation: u32, population: u32) {
        self.entries[generation as usize] = Some(population);
    }

    /// Append a tiebreak-phase entry past the regulation slots.
    pub fn append_tiebreak(&mut self, population: u32) {
        self.entries.push(Some(population));
    }

    /// Get the recorded population after `generation`, if written.
    #[must_use]
    pub fn get(&self, generation: u32) -> Option<u32> {
        self.entries.get(generation as usize).copied().flatten()
    }

    /// The most recently recorded population, if any.
    #[must_use]
    pub fn latest(&self) -> Option<u32> {
        self.entries.iter().rev().find_map(|entry| *entry)
    }

    /// All slots, recorded or not.
    #[must_use]
    pub fn entries(&self) -> &[Option<u32>] {
        &self.entries
    }

    /// Total number of slots, including appended tiebreak entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no slot has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|entry| entry.is_none())
    }

    /// Number of regulation slots (`max_generations + 1`).
    #[must_use]
    pub fn regulation_len(&self) -> usize {
        self.regulation_len
    }
}
