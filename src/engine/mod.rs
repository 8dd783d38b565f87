//! The simulation engine: board state, evolution rule, win/tie evaluation,
//! tiebreak seeding, observation snapshots, and checkpointing.

pub mod board;
pub mod checkpoint;
pub mod outcome;
pub mod rules;
pub mod snapshot;
pub mod tiebreak;

pub use board::Board;
pub use checkpoint::{CheckpointError, MatchCheckpoint};
pub use outcome::Outcome;
pub use snapshot::BoardSnapshot;
pub use tiebreak::SeededCells;
