//! The two-player evolution rule.
//!
//! A single step is a pure function of the previous generation: both next
//! grids are rebuilt from an immutable snapshot of the prior grids, so no
//! write can corrupt a later neighbor count within the same step.
//!
//! ## Rules
//!
//! Neighbors are counted across both owners on the full toroidal board:
//!
//! - A live cell survives, keeping its owner, iff its total neighbor count
//!   is 2 or 3.
//! - A live cell with fewer than 2 or more than 3 total neighbors dies.
//! - An empty cell is born iff its total neighbor count is exactly 3; it
//!   belongs to the player that contributed the majority of those 3.

use crate::grid::Grid;

/// Advance one generation, returning the next `(red, black)` grids.
///
/// The inputs are not modified. Both grids must have identical dimensions.
#[must_use]
pub fn step(red: &Grid, black: &Grid) -> (Grid, Grid) {
    assert_eq!(red.rows(), black.rows(), "grids must have identical dimensions");
    assert_eq!(red.cols(), black.cols(), "grids must have identical dimensions");

    let rows = red.rows();
    let cols = red.cols();
    let mut next_red = Grid::new(rows, cols);
    let mut next_black = Grid::new(rows, cols);

    for row in 0..rows {
        for col in 0..cols {
            let red_neighbors = red.live_neighbors(row, col);
            let black_neighbors = black.live_neighbors(row, col);
            let total = red_neighbors + black_neighbors;

            let red_here = red.get(row, col);
            let black_here = black.get(row, col);

            if red_here || black_here {
                // Survival keeps the current owner
                if total == 2 || total == 3 {
                    next_red.set(row, col, red_here);
                    next_black.set(row, col, black_here);
                }
            } else if total == 3 {
                // 3 is odd, so one side always holds a strict majority
                if red_neighbors > black_neighbors {
                    next_red.set(row, col, true);
                } else {
                    next_black.set(row, col, true);
                }
            }
        }
    }

    (next_red, next_black)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_pair(rows: usize, cols: usize) -> (Grid, Grid) {
        (Grid::new(rows, cols), Grid::new(rows, cols))
    }

    #[test]
    fn test_lonely_cell_dies() {
        let (mut red, black) = empty_pair(5, 5);
        red.set(2, 2, true);

        let (next_red, next_black) = step(&red, &black);

        assert!(next_red.is_empty());
        assert!(next_black.is_empty());
    }

    #[test]
    fn test_block_is_still_life() {
        let (mut red, black) = empty_pair(6, 6);
        red.set(2, 2, true);
        red.set(2, 3, true);
        red.set(3, 2, true);
        red.set(3, 3, true);

        let (next_red, next_black) = step(&red, &black);

        assert_eq!(next_red, red);
        assert!(next_black.is_empty());
    }

    #[test]
    fn test_blinker_oscillates() {
        let (mut red, black) = empty_pair(5, 5);
        red.set(2, 1, true);
        red.set(2, 2, true);
        red.set(2, 3, true);

        let (vertical, _) = step(&red, &black);
        assert_eq!(vertical.population(), 3);
        assert!(vertical.get(1, 2));
        assert!(vertical.get(2, 2));
        assert!(vertical.get(3, 2));

        let (horizontal, _) = step(&vertical, &black);
        assert_eq!(horizontal, red);
    }

    #[test]
    fn test_overcrowded_cell_dies() {
        let (mut red, mut black) = empty_pair(5, 5);
        red.set(2, 2, true);
        red.set(1, 1, true);
        red.set(1, 2, true);
        black.set(1, 3, true);
        black.set(2, 1, true);

        // (2, 2) has 4 neighbors in total
        let (next_red, _) = step(&red, &black);
        assert!(!next_red.get(2, 2));
    }

    #[test]
    fn test_survival_ignores_neighbor_ownership() {
        let (mut red, mut black) = empty_pair(5, 5);
        red.set(2, 2, true);
        black.set(1, 1, true);
        black.set(1, 2, true);

        // 2 black neighbors keep the red cell alive, still red
        let (next_red, next_black) = step(&red, &black);
        assert!(next_red.get(2, 2));
        assert!(!next_black.get(2, 2));
    }

    #[test]
    fn test_birth_majority_two_red_one_black() {
        let (mut red, mut black) = empty_pair(6, 6);
        // L-shaped cluster around the empty cell (2, 2)
        red.set(1, 2, true);
        red.set(2, 1, true);
        black.set(1, 1, true);

        let (next_red, next_black) = step(&red, &black);

        assert!(next_red.get(2, 2), "majority red neighbors must birth red");
        assert!(!next_black.get(2, 2));
    }

    #[test]
    fn test_birth_majority_one_red_two_black() {
        let (mut red, mut black) = empty_pair(6, 6);
        black.set(1, 2, true);
        black.set(2, 1, true);
        red.set(1, 1, true);

        let (next_red, next_black) = step(&red, &black);

        assert!(next_black.get(2, 2), "majority black neighbors must birth black");
        assert!(!next_red.get(2, 2));
    }

    #[test]
    fn test_no_birth_with_two_neighbors() {
        let (mut red, black) = empty_pair(6, 6);
        red.set(1, 2, true);
        red.set(2, 1, true);

        let (next_red, next_black) = step(&red, &black);

        assert!(!next_red.get(2, 2));
        assert!(!next_black.get(2, 2));
    }

    #[test]
    fn test_birth_across_torus_seam() {
        let (mut red, black) = empty_pair(4, 4);
        // Vertical blinker on the column seam: neighbors wrap to column 3
        red.set(0, 0, true);
        red.set(1, 0, true);
        red.set(2, 0, true);

        let (next_red, _) = step(&red, &black);

        assert!(next_red.get(1, 3), "birth must see wraparound neighbors");
        assert!(next_red.get(1, 0));
        assert!(next_red.get(1, 1));
    }

    #[test]
    fn test_step_is_deterministic() {
        let (mut red, mut black) = empty_pair(8, 8);
        red.set(1, 1, true);
        red.set(1, 2, true);
        red.set(2, 1, true);
        black.set(5, 5, true);
        black.set(5, 6, true);
        black.set(6, 5, true);

        let first = step(&red, &black);
        let second = step(&red, &black);

        assert_eq!(first, second);
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let (mut red, black) = empty_pair(5, 5);
        red.set(2, 2, true);
        let red_before = red.clone();
        let black_before = black.clone();

        let _ = step(&red, &black);

        assert_eq!(red, red_before);
        assert_eq!(black, black_before);
    }
}
