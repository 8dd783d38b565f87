//! The match board: both players' grids, the clock, and histories.
//!
//! ## Lifecycle
//!
//! A board is created empty from a `BoardConfig`, loaded once per side with
//! a starting pattern, then driven by `evolve()` / `outcome()` through
//! regulation play and by `begin_tiebreak()` / `seed_random_cells()` through
//! the tiebreak phase. It is never reset or destroyed mid-process.
//!
//! ## Ownership invariant
//!
//! No coordinate is ever live in both grids: the evolution rule preserves
//! exclusivity by construction, and tiebreak seeding claims its coordinate
//! from the opponent outright.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::{BoardConfig, EngineError, GameRng, Side, SideMap, TiebreakHistory};
use crate::grid::{Coord, Grid, PopulationHistory};

use super::outcome::{self, Outcome};
use super::rules;
use super::snapshot::BoardSnapshot;
use super::tiebreak::{self, SeededCells};

/// Simulation state for one two-player match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    config: BoardConfig,
    /// Live cells per side, `rows × 2 * half_width` each.
    grids: SideMap<Grid>,
    /// Starting patterns as loaded, `rows × half_width` each. Retained so
    /// the tiebreak double-extinction reset never re-reads external input.
    originals: SideMap<Option<Grid>>,
    names: SideMap<Option<String>>,
    histories: SideMap<PopulationHistory>,
    generation: u32,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        assert!(config.rows > 0, "Board must have at least 1 row");
        assert!(config.half_width > 0, "Board halves must be at least 1 wide");

        Self {
            grids: SideMap::new(|_| Grid::new(config.rows, config.width())),
            originals: SideMap::with_value(None),
            names: SideMap::with_value(None),
            histories: SideMap::new(|_| PopulationHistory::new(config.max_generations)),
            generation: 0,
            config,
        }
    }

    /// The board configuration.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Current generation index, in `[0, max_generations]`.
    #[must_use]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// A side's live-cell grid.
    #[must_use]
    pub fn grid(&self, side: Side) -> &Grid {
        &self.grids[side]
    }

    /// A side's current live-cell count.
    #[must_use]
    pub fn population(&self, side: Side) -> u32 {
        self.grids[side].population()
    }

    /// A side's population history.
    #[must_use]
    pub fn history(&self, side: Side) -> &PopulationHistory {
        &self.histories[side]
    }

    /// A side's display name, once loaded.
    #[must_use]
    pub fn name(&self, side: Side) -> Option<&str> {
        self.names[side].as_deref()
    }

    /// Column where a side's half begins.
    fn half_offset(&self, side: Side) -> usize {
        match side {
            Side::Red => 0,
            Side::Black => self.config.half_width,
        }
    }

    /// Install a side's starting configuration.
    ///
    /// `pattern` must be exactly `rows × half_width`; red lands in columns
    /// `[0, half_width)`, black in `[half_width, 2 * half_width)`. The
    /// pattern is also retained as the side's original for the tiebreak
    /// reset, its population is recorded as history entry 0, and `name`
    /// becomes the side's display name.
    pub fn load(
        &mut self,
        side: Side,
        name: impl Into<String>,
        pattern: &[Vec<bool>],
    ) -> Result<(), EngineError> {
        let expected_rows = self.config.rows;
        let expected_cols = self.config.half_width;

        if pattern.len() != expected_rows {
            return Err(EngineError::ShapeMismatch {
                side,
                expected_rows,
                expected_cols,
                found_rows: pattern.len(),
                found_cols: pattern.first().map_or(0, Vec::len),
            });
        }
        if let Some(bad_row) = pattern.iter().find(|row| row.len() != expected_cols) {
            return Err(EngineError::ShapeMismatch {
                side,
                expected_rows,
                expected_cols,
                found_rows: pattern.len(),
                found_cols: bad_row.len(),
            });
        }

        let half = Grid::from_rows(pattern);
        let offset = self.half_offset(side);

        self.grids[side].clear();
        self.grids[side].install(&half, offset);
        self.histories[side].record(0, half.population());
        self.names[side] = Some(name.into());
        self.originals[side] = Some(half);

        debug!(
            "loaded {side} ({}) with {} starting cells",
            self.names[side].as_deref().unwrap_or(""),
            self.population(side)
        );
        Ok(())
    }

    fn ensure_initialized(&self) -> Result<(), EngineError> {
        for side in Side::BOTH {
            if self.originals[side].is_none() {
                return Err(EngineError::NotInitialized { side });
            }
        }
        Ok(())
    }

    /// Advance the board by exactly one generation.
    ///
    /// Both next grids are computed from the committed previous generation.
    /// While the clock is below the generation limit, it advances and both
    /// populations are recorded at the new index; at the limit the grids
    /// still evolve, and history behavior follows the configured
    /// `TiebreakHistory` mode.
    pub fn evolve(&mut self) -> Result<(), EngineError> {
        self.ensure_initialized()?;

        let (next_red, next_black) =
            rules::step(&self.grids[Side::Red], &self.grids[Side::Black]);
        self.grids[Side::Red] = next_red;
        self.grids[Side::Black] = next_black;

        if self.generation < self.config.max_generations {
            self.generation += 1;
            for side in Side::BOTH {
                let population = self.grids[side].population();
                self.histories[side].record(self.generation, population);
            }
        } else if self.config.tiebreak_history == TiebreakHistory::Extended {
            for side in Side::BOTH {
                let population = self.grids[side].population();
                self.histories[side].append_tiebreak(population);
            }
        }

        trace!(
            "generation {}: red={} black={}",
            self.generation,
            self.population(Side::Red),
            self.population(Side::Black)
        );
        Ok(())
    }

    /// Evaluate the three-way result for the current state.
    pub fn outcome(&self) -> Result<Outcome, EngineError> {
        self.ensure_initialized()?;
        Ok(outcome::evaluate(
            self.population(Side::Red),
            self.population(Side::Black),
            self.generation,
            self.config.max_generations,
        ))
    }

    /// Force the clock to the generation limit.
    ///
    /// Called when entering the tiebreak phase, so deadline scoring (most
    /// cells wins) applies to every tiebreak round even when the tiebreak
    /// was reached early through double extinction.
    pub fn begin_tiebreak(&mut self) {
        self.generation = self.config.max_generations;
    }

    /// Seed one random cell per side for a tiebreak round.
    ///
    /// If both sides are extinct the board is first restored to the original
    /// loaded configurations. The two seeds are drawn uniformly over the
    /// full board, redrawn together until distinct, and each claims its
    /// coordinate for its side. The caller is expected to `evolve()` once
    /// and re-check `outcome()`; rounds repeat until a winner emerges,
    /// which terminates with probability 1 but has no deterministic bound.
    pub fn seed_random_cells(&mut self, rng: &mut GameRng) -> Result<SeededCells, EngineError> {
        self.ensure_initialized()?;

        let reset_to_original =
            self.grids[Side::Red].is_empty() && self.grids[Side::Black].is_empty();
        if reset_to_original {
            debug!("both sides extinct, restoring original configurations");
            self.restore_originals();
        }

        let (red_seed, black_seed) = tiebreak::draw_distinct_coords(
            rng,
            self.config.rows,
            self.config.width(),
            self.config.seed_retry_limit,
        )?;

        self.claim(Side::Red, red_seed);
        self.claim(Side::Black, black_seed);

        debug!("tiebreak seeds: red at {red_seed}, black at {black_seed}");
        Ok(SeededCells {
            red: red_seed,
            black: black_seed,
            reset_to_original,
        })
    }

    /// Mark a cell live for `side`, taking the coordinate from the opponent
    /// if the opponent held it.
    fn claim(&mut self, side: Side, at: Coord) {
        self.grids[side].set(at.row, at.col, true);
        self.grids[side.opponent()].set(at.row, at.col, false);
    }

    fn restore_originals(&mut self) {
        for side in Side::BOTH {
            let offset = self.half_offset(side);
            let original = self.originals[side]
                .as_ref()
                .expect("restore requires both sides loaded");
            self.grids[side].clear();
            self.grids[side].install(original, offset);
        }
    }

    /// Take a cloned, read-only snapshot for observers.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            generation: self.generation,
            max_generations: self.config.max_generations,
            names: self.names.clone(),
            grids: self.grids.clone(),
            populations: self.grids.map(|_, grid| grid.population()),
            histories: self.histories.clone(),
        }
    }
}
