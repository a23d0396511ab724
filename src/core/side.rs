//! Side identification and per-side data storage.
//!
//! The game is strictly two-sided: every card in play belongs to either
//! the home or the away team, and conditions compare "my board" against
//! "the opposing board" through `Side::opponent`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    /// The opposing side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }

    /// Index into per-side storage (home = 0, away = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Home => 0,
            Side::Away => 1,
        }
    }

    /// Iterate both sides, home first.
    pub fn both() -> impl Iterator<Item = Side> {
        [Side::Home, Side::Away].into_iter()
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Home => write!(f, "Home"),
            Side::Away => write!(f, "Away"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// Backed by a fixed pair, indexed by `Side`.
///
/// ## Example
///
/// ```
/// use gridiron_rules::core::{Side, SideMap};
///
/// let mut scores: SideMap<i32> = SideMap::with_value(0);
/// scores[Side::Home] = 7;
///
/// assert_eq!(scores[Side::Home], 7);
/// assert_eq!(scores[Side::Away], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Home), factory(Side::Away)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a map with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs, home first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::both().zip(self.data.iter())
    }
}

impl<T: Default> Default for SideMap<T> {
    fn default() -> Self {
        Self::with_default()
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &T {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut T {
        self.get_mut(side)
    }
}
