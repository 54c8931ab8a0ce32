use thiserror::Error;

/// A raw child index other than 0 (left) or 1 (right).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("child index {0} is out of range; a binary node only has slots 0 and 1")]
pub struct InvalidSlotIndex(pub usize);

/// Errors triggered by binary node operations.
///
/// Failed insertions hand the rejected child back so it isn't dropped along with the error.
/// Use [`NodeError::into_child`] to recover it.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum NodeError<C> {
    /// `insert` was called while both slots were occupied.
    #[error("cannot insert a new child: left and right children are already set")]
    ChildSlotsFull(C),
    /// `insert_left` was called while the left slot was occupied.
    #[error("left child is already set")]
    LeftSlotOccupied(C),
    /// `insert_right` was called while the right slot was occupied.
    #[error("right child is already set")]
    RightSlotOccupied(C),
    /// No child's value carries the requested identifier.
    #[error("child does not exist")]
    ChildNotFound,
    /// A raw index didn't name a slot.
    #[error(transparent)]
    InvalidSlot(#[from] InvalidSlotIndex),
}

impl<C> NodeError<C> {
    /// Returns the child that was refused, if this error came from an insertion.
    pub fn into_child(self) -> Option<C> {
        match self {
            Self::ChildSlotsFull(child)
            | Self::LeftSlotOccupied(child)
            | Self::RightSlotOccupied(child) => Some(child),
            Self::ChildNotFound | Self::InvalidSlot(_) => None,
        }
    }
}
