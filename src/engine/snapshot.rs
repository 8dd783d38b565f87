//! Read-only board observation.
//!
//! Rendering, plotting, and frame export live outside the engine; they are
//! fed by cloned snapshots taken after each step so display code can never
//! reach back into live simulation state.

use serde::{Deserialize, Serialize};

use crate::core::SideMap;
use crate::grid::{Grid, PopulationHistory};

/// A cloned, read-only view of the board after a step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Current generation index.
    pub generation: u32,
    /// The configured generation limit.
    pub max_generations: u32,
    /// Display names, if loaded.
    pub names: SideMap<Option<String>>,
    /// Full cell grids per side.
    pub grids: SideMap<Grid>,
    /// Current live-cell counts per side.
    pub populations: SideMap<u32>,
    /// Full population history per side.
    pub histories: SideMap<PopulationHistory>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Side;

    #[test]
    fn test_snapshot_serde_round_trip() {
        let snapshot = BoardSnapshot {
            generation: 3,
            max_generations: 10,
            names: SideMap::new(|side| Some(format!("{side} player"))),
            grids: SideMap::new(|_| Grid::new(2, 4)),
            populations: SideMap::with_value(0),
            histories: SideMap::new(|_| PopulationHistory::new(10)),
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: BoardSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(snapshot, deserialized);
        assert_eq!(deserialized.names[Side::Red].as_deref(), Some("red player"));
    }
}
