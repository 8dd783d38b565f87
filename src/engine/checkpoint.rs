//! Match checkpointing.
//!
//! Captures the complete match state (board and RNG position) so a run can
//! be suspended and resumed byte-identically. The RNG is stored as its O(1)
//! seed + word-position state rather than its full internal buffer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{GameRng, GameRngState};

use super::board::Board;

/// Errors from encoding or decoding checkpoint bytes.
#[derive(Error, Debug)]
pub enum CheckpointError {
    #[error("checkpoint codec error: {0}")]
    Codec(#[from] bincode::Error),
}

/// A resumable snapshot of a match in progress.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchCheckpoint {
    board: Board,
    rng: GameRngState,
}

impl MatchCheckpoint {
    /// Capture the current match state.
    #[must_use]
    pub fn capture(board: &Board, rng: &GameRng) -> Self {
        Self {
            board: board.clone(),
            rng: rng.state(),
        }
    }

    /// Rebuild the board and RNG; both continue exactly where capture
    /// left off.
    #[must_use]
    pub fn restore(self) -> (Board, GameRng) {
        let rng = GameRng::from_state(&self.rng);
        (self.board, rng)
    }

    /// Encode to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bytes produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
