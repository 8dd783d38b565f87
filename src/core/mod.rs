//! Core engine types: sides, RNG, configuration, errors.
//!
//! This module contains the fundamental building blocks shared by the grid
//! and engine layers.

pub mod config;
pub mod error;
pub mod rng;
pub mod side;

pub use config::{BoardConfig, TiebreakHistory};
pub use error::EngineError;
pub use rng::{GameRng, GameRngState};
pub use side::{Side, SideMap};
