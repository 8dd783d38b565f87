//! Match driving: the regulation loop and the tiebreak cycle.
//!
//! The runner owns no display state. Rendering, plotting, and frame export
//! implement `MatchObserver` and receive cloned snapshots after every
//! generation; the engine never holds references into display code.
//!
//! ## Phases
//!
//! 1. **Regulation**: check the outcome, evolve, notify — until a winner
//!    emerges or a tiebreak is required. Regulation always terminates: once
//!    the clock reaches the generation limit, the outcome is a win or a tie,
//!    never in-progress.
//! 2. **Tiebreak**: force the clock to the limit so deadline scoring
//!    applies, then seed one random cell per side, evolve once, and
//!    re-check, repeating until one side leads. Terminates with probability
//!    1; there is no deterministic round bound.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{EngineError, GameRng, Side};
use crate::engine::{Board, BoardSnapshot, Outcome, SeededCells};

/// Callbacks fired while a match runs.
///
/// All hooks default to no-ops; implement only what the caller needs.
/// `()` implements the trait for observer-less runs.
pub trait MatchObserver {
    /// Fired after every evolution step, regulation and tiebreak alike.
    fn on_generation(&mut self, _snapshot: &BoardSnapshot) {}

    /// Fired after each tiebreak round places its seeds, before the
    /// round's evolution step. Rounds count from 1.
    fn on_tiebreak_seeded(&mut self, _round: u32, _seeds: &SeededCells) {}

    /// Fired when regulation play ends (with a winner or a tiebreak
    /// verdict) and again with the final winner if a tiebreak ran.
    fn on_outcome(&mut self, _outcome: Outcome) {}
}

impl MatchObserver for () {}

/// How a finished match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    /// The winning side.
    pub winner: Side,
    /// Final generation index (capped at the configured limit).
    pub generations: u32,
    /// Number of tiebreak rounds played; 0 when regulation decided it.
    pub tiebreak_rounds: u32,
}

/// Drive a loaded board to completion.
///
/// Both sides must be loaded. The RNG is only consumed if the match goes
/// to a tiebreak, so a fixed seed makes the entire run replayable.
pub fn run_match(
    board: &mut Board,
    rng: &mut GameRng,
    observer: &mut dyn MatchObserver,
) -> Result<MatchReport, EngineError> {
    loop {
        match board.outcome()? {
            Outcome::Winner(winner) => {
                observer.on_outcome(Outcome::Winner(winner));
                info!(
                    "{winner} ({}) wins after {} generations",
                    board.name(winner).unwrap_or(""),
                    board.generation()
                );
                return Ok(MatchReport {
                    winner,
                    generations: board.generation(),
                    tiebreak_rounds: 0,
                });
            }
            Outcome::TiebreakNeeded => break,
            Outcome::InProgress => {
                board.evolve()?;
                observer.on_generation(&board.snapshot());
            }
        }
    }

    observer.on_outcome(Outcome::TiebreakNeeded);
    info!(
        "tiebreak needed at generation {} (red={}, black={})",
        board.generation(),
        board.population(Side::Red),
        board.population(Side::Black)
    );

    board.begin_tiebreak();
    let mut rounds = 0;
    loop {
        rounds += 1;
        let seeds = board.seed_random_cells(rng)?;
        observer.on_tiebreak_seeded(rounds, &seeds);

        board.evolve()?;
        observer.on_generation(&board.snapshot());

        if let Outcome::Winner(winner) = board.outcome()? {
            observer.on_outcome(Outcome::Winner(winner));
            info!(
                "{winner} ({}) wins after {rounds} tiebreak rounds",
                board.name(winner).unwrap_or("")
            );
            return Ok(MatchReport {
                winner,
                generations: board.generation(),
                tiebreak_rounds: rounds,
            });
        }
        debug!("tiebreak round {rounds} undecided");
    }
}
