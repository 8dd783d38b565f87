//! # life-duel
//!
//! A two-player Conway's Game of Life match engine.
//!
//! Two players, red and black, each load a starting pattern into their half
//! of a shared toroidal board. Cells then evolve under modified Life rules
//! where neighbors count regardless of owner and a newborn cell belongs to
//! whichever player contributed the majority of the three neighbors that
//! caused the birth. A side wins by opposing extinction, or by holding more
//! cells when the generation limit is reached; ties are broken by a
//! randomized seeding protocol that repeats until one side leads.
//!
//! ## Design Principles
//!
//! 1. **Pure stepping**: each generation is computed entirely from the
//!    previous generation's committed state; the update rule is a total,
//!    deterministic function.
//!
//! 2. **Injected randomness**: the engine never owns a random source. The
//!    tiebreak protocol takes a seedable `GameRng`, so whole matches replay
//!    deterministically from a seed.
//!
//! 3. **Engine, not UI**: pattern files, drawing, plotting, and frame
//!    export live outside this crate. Input is an in-memory boolean grid
//!    per side; output is read-only snapshots and a three-way outcome.
//!
//! ## Modules
//!
//! - `core`: sides, RNG, configuration, errors
//! - `grid`: boolean cell grids, coordinates, population history
//! - `engine`: the board, evolution rule, outcomes, tiebreak, checkpoints
//! - `runner`: the match loop and observer hooks
//!
//! ## Example
//!
//! ```
//! use life_duel::{Board, BoardConfig, GameRng, Side, run_match};
//!
//! let mut board = Board::new(BoardConfig::new(6, 4, 100));
//! let blinker = vec![
//!     vec![false, false, false, false],
//!     vec![false, true, false, false],
//!     vec![false, true, false, false],
//!     vec![false, true, false, false],
//!     vec![false, false, false, false],
//!     vec![false, false, false, false],
//! ];
//! let empty = vec![vec![false; 4]; 6];
//!
//! board.load(Side::Red, "blinker", &blinker).unwrap();
//! board.load(Side::Black, "empty", &empty).unwrap();
//!
//! let mut rng = GameRng::new(42);
//! let report = run_match(&mut board, &mut rng, &mut ()).unwrap();
//! assert_eq!(report.winner, Side::Red);
//! ```

pub mod core;
pub mod engine;
pub mod grid;
pub mod runner;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, EngineError, GameRng, GameRngState, Side, SideMap, TiebreakHistory,
};

pub use crate::grid::{Coord, Grid, PopulationHistory};

pub use crate::engine::{
    Board, BoardSnapshot, CheckpointError, MatchCheckpoint, Outcome, SeededCells,
};

pub use crate::runner::{run_match, MatchObserver, MatchReport};
