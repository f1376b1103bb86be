//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! A match always pits the student against the scripted AI opponent, so
//! sides are a fixed two-variant enum rather than a numeric player id.
//!
//! ## SideMap
//!
//! Per-side data storage with O(1) access, indexable by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One side of a match: the human student or the scripted AI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Student,
    Ai,
}

impl Side {
    /// The opposing side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Student => Side::Ai,
            Side::Ai => Side::Student,
        }
    }

    /// Both sides, student first.
    pub fn both() -> impl Iterator<Item = Side> {
        [Side::Student, Side::Ai].into_iter()
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Student => write!(f, "student"),
            Side::Ai => write!(f, "ai"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use place_value_showdown::core::{Side, SideMap};
///
/// let mut scores: SideMap<u32> = SideMap::with_value(0);
/// scores[Side::Student] += 1;
///
/// assert_eq!(scores[Side::Student], 1);
/// assert_eq!(scores[Side::Ai], 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideMap<T> {
    student: T,
    ai: T,
}

impl<T> SideMap<T> {
    /// Create a new SideMap with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            student: factory(Side::Student),
            ai: factory(Side::Ai),
        }
    }

    /// Create a new SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            student: value.clone(),
            ai: value,
        }
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Student => &self.student,
            Side::Ai => &self.ai,
        }
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Student => &mut self.student,
            Side::Ai => &mut self.ai,
        }
    }

    /// Iterate over (Side, &T) pairs, student first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::Student, &self.student), (Side::Ai, &self.ai)].into_iter()
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
