//! Caller-facing engine errors.
//!
//! The update rule itself is total and cannot fail; errors arise only at the
//! boundary (mis-shaped patterns, use before setup) and from the defensive
//! bound on tiebreak coordinate draws.

use thiserror::Error;

use super::side::Side;

/// Errors returned by board operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A loaded pattern does not match the configured half-board dimensions.
    ///
    /// Reported for mis-sized patterns and for ragged rows (the first row
    /// with an unexpected width is reported). Patterns are never silently
    /// truncated or padded.
    #[error(
        "{side} pattern is {found_rows}x{found_cols}, \
         expected {expected_rows}x{expected_cols}"
    )]
    ShapeMismatch {
        side: Side,
        expected_rows: usize,
        expected_cols: usize,
        found_rows: usize,
        found_cols: usize,
    },

    /// The board was asked to evolve or evaluate before both sides loaded
    /// a starting configuration.
    #[error("{side} has no starting configuration loaded")]
    NotInitialized { side: Side },

    /// The tiebreak coordinate draw failed to produce two distinct cells
    /// within the configured retry bound.
    ///
    /// A safety net only: any legal board has at least two cells, so the
    /// bound is unreachable in practice.
    #[error("failed to draw distinct tiebreak coordinates after {attempts} attempts")]
    SeedRetriesExhausted { attempts: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::ShapeMismatch {
            side: Side::Red,
            expected_rows: 10,
            expected_cols: 5,
            found_rows: 10,
            found_cols: 6,
        };
        assert_eq!(format!("{err}"), "red pattern is 10x6, expected 10x5");

        let err = EngineError::NotInitialized { side: Side::Black };
        assert_eq!(format!("{err}"), "black has no starting configuration loaded");

        let err = EngineError::SeedRetriesExhausted { attempts: 100 };
        assert_eq!(
            format!("{err}"),
            "failed to draw distinct tiebreak coordinates after 100 attempts"
        );
    }
}
