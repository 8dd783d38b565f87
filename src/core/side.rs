//! Player identification and per-side data storage.
//!
//! ## Side
//!
//! The two players are fixed: red owns the left half of the board at setup,
//! black the right half. Ownership of individual cells migrates freely once
//! the simulation runs.
//!
//! ## SideMap
//!
//! Per-side data storage with O(1) access. Supports iteration and indexing
//! by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Loads into columns `[0, half_width)`.
    Red,
    /// Loads into columns `[half_width, 2 * half_width)`.
    Black,
}

impl Side {
    /// Both sides, red first.
    pub const BOTH: [Side; 2] = [Side::Red, Side::Black];

    /// Get the opposing side.
    ///
    /// ```
    /// use life_duel::Side;
    ///
    /// assert_eq!(Side::Red.opponent(), Side::Black);
    /// assert_eq!(Side::Black.opponent(), Side::Red);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Red => Side::Black,
            Side::Black => Side::Red,
        }
    }

    /// Get the raw side index (red = 0, black = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Red => 0,
            Side::Black => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Red => write!(f, "red"),
            Side::Black => write!(f, "black"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// Holds one value per side. Use `SideMap::new()` to create with a factory
/// function, or `SideMap::with_value()` to initialize both entries to the
/// same value.
///
/// ## Example
///
/// ```
/// use life_duel::{Side, SideMap};
///
/// let mut counts: SideMap<u32> = SideMap::with_value(0);
///
/// counts[Side::Red] = 5;
/// assert_eq!(counts[Side::Red], 5);
/// assert_eq!(counts[Side::Black], 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    red: T,
    black: T,
}

impl<T> SideMap<T> {
    /// Create a new SideMap with values from a factory function.
    ///
    /// The factory receives the `Side` for each entry.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            red: factory(Side::Red),
            black: factory(Side::Black),
        }
    }

    /// Create a new SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Red => &self.red,
            Side::Black => &self.black,
        }
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Red => &mut self.red,
            Side::Black => &mut self.black,
        }
    }

    /// Iterate over (Side, &T) pairs, red first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::BOTH.into_iter().map(move |side| (side, self.get(side)))
    }

    /// Build a new SideMap by applying a function to each entry.
    pub fn map<U>(&self, f: impl Fn(Side, &T) -> U) -> SideMap<U> {
        SideMap::new(|side| f(side, self.get(side)))
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
