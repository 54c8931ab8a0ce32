//! The two child positions of a [`BinaryNode`][crate::BinaryNode].

use std::convert::TryFrom;
use std::fmt;

use crate::error::InvalidSlotIndex;

/// One of the two fixed child positions. `Left` is index 0 and `Right` is index 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Index 0.
    Left,
    /// Index 1.
    Right,
}

impl Slot {
    /// Both slots in insertion order.
    pub const ALL: [Slot; 2] = [Slot::Left, Slot::Right];

    /// The position of this slot in the child array.
    pub fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }

    /// The sibling slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_node::Slot;
    ///
    /// assert_eq!(Slot::Left.other(), Slot::Right);
    /// assert_eq!(Slot::Right.other(), Slot::Left);
    /// ```
    pub fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl From<Slot> for usize {
    fn from(slot: Slot) -> Self {
        slot.index()
    }
}

/// Only 0 and 1 name a slot.
impl TryFrom<usize> for Slot {
    type Error = InvalidSlotIndex;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::Left),
            1 => Ok(Self::Right),
            _ => Err(InvalidSlotIndex(index)),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}
