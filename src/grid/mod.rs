//! Grid storage: boolean cell grids, coordinates, population history.

pub mod cell;
pub mod history;
pub mod torus;

pub use cell::Coord;
pub use history::PopulationHistory;
pub use torus::Grid;
