//! Board configuration parameters.

use serde::{Deserialize, Serialize};

/// How population history behaves once the generation limit is reached.
///
/// By default recording stops at the limit: tiebreak rounds mutate the
/// grids but the history stays at its final regulation entry. Callers that
/// want to plot the tiebreak phase can opt into `Extended`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TiebreakHistory {
    /// History is frozen at `max_generations + 1` entries.
    #[default]
    Frozen,
    /// Each tiebreak generation appends a new entry past the limit.
    Extended,
}

/// Board configuration parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Board height N. Each player's starting pattern is `rows` tall.
    pub rows: usize,

    /// Half-board width M. The full board is `2 * half_width` wide;
    /// each player's starting pattern is `half_width` wide.
    pub half_width: usize,

    /// Generation limit T. Regulation play ends after this many steps.
    pub max_generations: u32,

    /// History behavior during the tiebreak phase.
    pub tiebreak_history: TiebreakHistory,

    /// Retry bound for drawing two distinct tiebreak coordinates.
    /// A defensive cap, not a tuning knob.
    pub seed_retry_limit: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: 100,
            half_width: 100,
            max_generations: 1000,
            tiebreak_history: TiebreakHistory::default(),
            seed_retry_limit: 10_000,
        }
    }
}

impl BoardConfig {
    /// Create a config with the given dimensions and generation limit.
    #[must_use]
    pub fn new(rows: usize, half_width: usize, max_generations: u32) -> Self {
        Self {
            rows,
            half_width,
            max_generations,
            ..Self::default()
        }
    }

    /// Set the tiebreak history behavior.
    #[must_use]
    pub fn with_tiebreak_history(mut self, mode: TiebreakHistory) -> Self {
        self.tiebreak_history = mode;
        self
    }

    /// Set the tiebreak seed retry bound.
    #[must_use]
    pub fn with_seed_retry_limit(mut self, limit: u32) -> Self {
        self.seed_retry_limit = limit;
        self
    }

    /// Full board width (`2 * half_width`).
    #[must_use]
    pub const fn width(&self) -> usize {
        2 * self.half_width
    }
}
