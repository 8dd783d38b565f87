//! Tiebreak coordinate drawing.
//!
//! Each tiebreak round seeds one new cell per side, drawn independently and
//! uniformly over the full board. The two seeds must never land on the same
//! cell as each other; on a collision both coordinates are redrawn. Either
//! seed may land on, and take over, any already-occupied cell.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, GameRng};
use crate::grid::Coord;

/// Where a tiebreak round placed its seeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeededCells {
    /// Red's new cell.
    pub red: Coord,
    /// Black's new cell.
    pub black: Coord,
    /// True when both sides were extinct and the board was restored to the
    /// original configurations before seeding.
    pub reset_to_original: bool,
}

/// Draw one distinct coordinate per side, uniformly over a `rows × cols`
/// board.
///
/// Redraws both coordinates on a collision, up to `retry_limit` attempts.
/// The bound is a safety net: with at least two cells on the board, each
/// attempt collides with probability at most 1/2.
pub(crate) fn draw_distinct_coords(
    rng: &mut GameRng,
    rows: usize,
    cols: usize,
    retry_limit: u32,
) -> Result<(Coord, Coord), EngineError> {
    for _ in 0..retry_limit {
        let red = Coord::new(
            rng.gen_range_usize(0..rows),
            rng.gen_range_usize(0..cols),
        );
        let black = Coord::new(
            rng.gen_range_usize(0..rows),
            rng.gen_range_usize(0..cols),
        );
        if red != black {
            return Ok((red, black));
        }
    }

    Err(EngineError::SeedRetriesExhausted {
        attempts: retry_limit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draws_are_in_bounds() {
        let mut rng = GameRng::new(42);

        for _ in 0..500 {
            let (red, black) = draw_distinct_coords(&mut rng, 7, 11, 100).unwrap();
            assert!(red.row < 7 && red.col < 11);
            assert!(black.row < 7 && black.col < 11);
        }
    }

    #[test]
    fn test_draws_are_always_distinct() {
        let mut rng = GameRng::new(1234);

        for _ in 0..1000 {
            let (red, black) = draw_distinct_coords(&mut rng, 3, 4, 100).unwrap();
            assert_ne!(red, black);
        }
    }

    #[test]
    fn test_distinct_on_two_cell_board() {
        // Smallest legal board: collisions are frequent, draws must still
        // resolve
        let mut rng = GameRng::new(7);

        for _ in 0..200 {
            let (red, black) = draw_distinct_coords(&mut rng, 1, 2, 1000).unwrap();
            assert_ne!(red, black);
        }
    }

    #[test]
    fn test_draws_are_deterministic() {
        let mut rng1 = GameRng::new(99);
        let mut rng2 = GameRng::new(99);

        for _ in 0..50 {
            assert_eq!(
                draw_distinct_coords(&mut rng1, 5, 10, 100).unwrap(),
                draw_distinct_coords(&mut rng2, 5, 10, 100).unwrap()
            );
        }
    }

    #[test]
    fn test_zero_retry_limit_errors() {
        let mut rng = GameRng::new(42);

        let result = draw_distinct_coords(&mut rng, 5, 5, 0);
        assert_eq!(
            result,
            Err(EngineError::SeedRetriesExhausted { attempts: 0 })
        );
    }
}
