//! A binary tree node. Each node owns a value and at most two children kept in fixed
//! positions: [`Slot::Left`] (index 0) and [`Slot::Right`] (index 1).
//!
//! # Examples
//!
//! ```
//! use binary_node::{BinaryNode, NodeError, Shape};
//!
//! let mut node = BinaryNode::new(1);
//! assert!(node.is_leaf());
//!
//! // `insert` fills the left slot first, then the right one.
//! node.insert(BinaryNode::new(2))?.insert(BinaryNode::new(3))?;
//! assert_eq!(node.shape(), Shape::Double);
//! assert_eq!(node.left().map(BinaryNode::value), Some(&2));
//! assert_eq!(node.right().map(BinaryNode::value), Some(&3));
//!
//! // A full node refuses more children and hands the rejected one back.
//! let err = node.insert(BinaryNode::new(4)).unwrap_err();
//! assert!(matches!(err, NodeError::ChildSlotsFull(_)));
//! assert_eq!(err.into_child().map(BinaryNode::into_value), Some(4));
//!
//! // Children are looked up by the identifier of their value.
//! node.delete_left();
//! assert!(node.is_simple_right());
//! assert_eq!(node.get_child(&3)?.value(), &3);
//! assert!(!node.child_exists(&2));
//! # Ok::<(), NodeError<BinaryNode<i32>>>(())
//! ```

use std::borrow::Borrow;
use std::convert::TryFrom;
use std::mem;

use tracing::{debug, instrument, trace};

use crate::error::NodeError;
use crate::identify::Identify;
use crate::shape::Shape;
use crate::slot::Slot;

/// Result of a fallible [`BinaryNode`] operation. Rejected children come back inside the error.
pub type NodeResult<T, V> = Result<T, NodeError<BinaryNode<V>>>;

type Link<V> = Option<Box<BinaryNode<V>>>;

/// A tree node holding a value and up to two ordered children.
///
/// The node doesn't know its parent. Detaching a child either drops it ([`delete`][Self::delete])
/// or hands it to the caller ([`take`][Self::take]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BinaryNode<V> {
    value: V,
    /// Indexed by [`Slot::index`]. An empty slot is `None` whether it was never set or cleared.
    children: [Link<V>; 2],
}

impl<V> From<V> for BinaryNode<V> {
    fn from(value: V) -> Self {
        Self::new(value)
    }
}

impl<V> BinaryNode<V> {
    /// Creates a leaf carrying `value`.
    pub fn new(value: V) -> Self {
        Self {
            value,
            children: [None, None],
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Mutable access to the value stored in this node.
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Replaces the value stored in this node and returns the previous one.
    pub fn set_value(&mut self, value: V) -> V {
        mem::replace(&mut self.value, value)
    }

    /// Consumes the node, dropping its children, and returns its value.
    pub fn into_value(self) -> V {
        self.value
    }

    /// Inserts `child` into the first empty slot, left before right.
    ///
    /// Fails with [`NodeError::ChildSlotsFull`] when both slots are occupied. The node is left
    /// untouched in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_node::{BinaryNode, NodeError};
    ///
    /// let mut node = BinaryNode::new('n');
    /// node.insert(BinaryNode::new('a'))?;
    /// assert!(node.is_simple_left());
    ///
    /// node.insert(BinaryNode::new('b'))?;
    /// assert!(node.is_double());
    ///
    /// assert!(node.insert(BinaryNode::new('c')).is_err());
    /// # Ok::<(), NodeError<BinaryNode<char>>>(())
    /// ```
    pub fn insert(&mut self, child: Self) -> NodeResult<&mut Self, V> {
        let slot = match self.shape() {
            Shape::Leaf | Shape::SimpleRight => Slot::Left,
            Shape::SimpleLeft => Slot::Right,
            Shape::Double => {
                debug!("rejecting insert: both child slots are occupied");
                return Err(NodeError::ChildSlotsFull(child));
            }
        };

        Ok(self.place(slot, child))
    }

    /// Sets the left child. Fails with [`NodeError::LeftSlotOccupied`] if it is already set.
    /// The right slot isn't consulted.
    pub fn insert_left(&mut self, child: Self) -> NodeResult<&mut Self, V> {
        if self.children[Slot::Left.index()].is_some() {
            debug!("rejecting insert: left child is already set");
            return Err(NodeError::LeftSlotOccupied(child));
        }

        Ok(self.place(Slot::Left, child))
    }

    /// Sets the right child. Fails with [`NodeError::RightSlotOccupied`] if it is already set,
    /// including when the left child is set too.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_node::{BinaryNode, NodeError};
    ///
    /// let mut node = BinaryNode::new(0);
    /// node.insert_right(BinaryNode::new(2))?;
    /// node.insert_left(BinaryNode::new(1))?;
    ///
    /// let err = node.insert_right(BinaryNode::new(3)).unwrap_err();
    /// assert!(matches!(err, NodeError::RightSlotOccupied(_)));
    /// assert_eq!(node.right().map(BinaryNode::value), Some(&2));
    /// # Ok::<(), NodeError<BinaryNode<i32>>>(())
    /// ```
    pub fn insert_right(&mut self, child: Self) -> NodeResult<&mut Self, V> {
        if self.children[Slot::Right.index()].is_some() {
            debug!("rejecting insert: right child is already set");
            return Err(NodeError::RightSlotOccupied(child));
        }

        Ok(self.place(Slot::Right, child))
    }

    /// [`insert_left`][Self::insert_left] or [`insert_right`][Self::insert_right] depending on
    /// `slot`.
    pub fn insert_at(&mut self, slot: Slot, child: Self) -> NodeResult<&mut Self, V> {
        match slot {
            Slot::Left => self.insert_left(child),
            Slot::Right => self.insert_right(child),
        }
    }

    /// Stores `child` in `slot`. Callers have already checked that the slot is free.
    fn place(&mut self, slot: Slot, child: Self) -> &mut Self {
        self.children[slot.index()] = Some(Box::new(child));
        trace!(%slot, shape = ?self.shape(), "inserted child");
        self
    }

    /// Clears `slot`, dropping the child that was there. Clearing an empty slot does nothing.
    #[instrument(level = "trace", skip(self))]
    pub fn delete(&mut self, slot: Slot) -> &mut Self {
        if self.children[slot.index()].take().is_some() {
            trace!(shape = ?self.shape(), "deleted child");
        }
        self
    }

    /// [`delete`][Self::delete] addressed by raw index. Only 0 (left) and 1 (right) are valid.
    #[instrument(level = "trace", skip(self))]
    pub fn delete_index(&mut self, index: usize) -> NodeResult<&mut Self, V> {
        let slot = Slot::try_from(index)?;
        Ok(self.delete(slot))
    }

    /// Clears the left slot.
    pub fn delete_left(&mut self) -> &mut Self {
        self.delete(Slot::Left)
    }

    /// Clears the right slot.
    pub fn delete_right(&mut self) -> &mut Self {
        self.delete(Slot::Right)
    }

    /// Detaches the child in `slot` and returns it with its whole subtree.
    pub fn take(&mut self, slot: Slot) -> Option<Self> {
        let child = self.children[slot.index()].take().map(|child| *child);
        if child.is_some() {
            trace!(%slot, shape = ?self.shape(), "detached child");
        }
        child
    }

    /// Detaches the left child.
    pub fn take_left(&mut self) -> Option<Self> {
        self.take(Slot::Left)
    }

    /// Detaches the right child.
    pub fn take_right(&mut self) -> Option<Self> {
        self.take(Slot::Right)
    }

    /// Which of the four occupancy states this node is in.
    pub fn shape(&self) -> Shape {
        Shape::from_occupancy(
            self.children[Slot::Left.index()].is_some(),
            self.children[Slot::Right.index()].is_some(),
        )
    }

    /// Left child set, right child empty.
    pub fn is_simple_left(&self) -> bool {
        self.shape() == Shape::SimpleLeft
    }

    /// Left child empty, right child set.
    pub fn is_simple_right(&self) -> bool {
        self.shape() == Shape::SimpleRight
    }

    /// Both children set.
    pub fn is_double(&self) -> bool {
        self.shape() == Shape::Double
    }

    /// No children.
    pub fn is_leaf(&self) -> bool {
        self.shape() == Shape::Leaf
    }

    /// At least one child. Always the opposite of [`is_leaf`][Self::is_leaf].
    pub fn is_node(&self) -> bool {
        !self.is_leaf()
    }

    /// The child in `slot`, if any.
    pub fn get(&self, slot: Slot) -> Option<&Self> {
        self.children[slot.index()].as_deref()
    }

    /// Mutable access to the child in `slot`, if any.
    pub fn get_mut(&mut self, slot: Slot) -> Option<&mut Self> {
        self.children[slot.index()].as_deref_mut()
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<&Self> {
        self.get(Slot::Left)
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<&Self> {
        self.get(Slot::Right)
    }

    /// Mutable access to the left child, if any.
    pub fn left_mut(&mut self) -> Option<&mut Self> {
        self.get_mut(Slot::Left)
    }

    /// Mutable access to the right child, if any.
    pub fn right_mut(&mut self) -> Option<&mut Self> {
        self.get_mut(Slot::Right)
    }

    /// The occupied slots and their children, left first.
    pub fn children(&self) -> impl Iterator<Item = (Slot, &Self)> + '_ {
        IntoIterator::into_iter(Slot::ALL).filter_map(move |slot| self.get(slot).map(|c| (slot, c)))
    }

    /// How many slots are occupied: 0, 1 or 2.
    pub fn child_count(&self) -> usize {
        self.shape().child_count()
    }

    /// Finds the child whose value has identifier `id`, checking the left child before the right
    /// one. Fails with [`NodeError::ChildNotFound`] when neither matches.
    ///
    /// `id` may be any borrowed form of the identifier, as with `HashMap::get`.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_node::{BinaryNode, NodeError};
    ///
    /// let mut node = BinaryNode::new(String::from("root"));
    /// node.insert(BinaryNode::new(String::from("a")))?
    ///     .insert(BinaryNode::new(String::from("b")))?;
    ///
    /// assert_eq!(node.get_child("b")?.value(), "b");
    /// assert!(matches!(node.get_child("z"), Err(NodeError::ChildNotFound)));
    /// # Ok::<(), NodeError<BinaryNode<String>>>(())
    /// ```
    pub fn get_child<Q>(&self, id: &Q) -> NodeResult<&Self, V>
    where
        V: Identify,
        V::Id: Borrow<Q>,
        Q: ?Sized + PartialEq,
    {
        let found = self
            .children
            .iter()
            .filter_map(Option::as_deref)
            .find(|child| child.has_id(id));

        found.ok_or_else(|| {
            debug!("no child matches the requested identifier");
            NodeError::ChildNotFound
        })
    }

    /// Mutable version of [`get_child`][Self::get_child].
    pub fn get_child_mut<Q>(&mut self, id: &Q) -> NodeResult<&mut Self, V>
    where
        V: Identify,
        V::Id: Borrow<Q>,
        Q: ?Sized + PartialEq,
    {
        let found = self
            .children
            .iter_mut()
            .filter_map(Option::as_deref_mut)
            .find(|child| child.has_id(id));

        found.ok_or_else(|| {
            debug!("no child matches the requested identifier");
            NodeError::ChildNotFound
        })
    }

    /// Whether [`get_child`][Self::get_child] would succeed for `id`.
    pub fn child_exists<Q>(&self, id: &Q) -> bool
    where
        V: Identify,
        V::Id: Borrow<Q>,
        Q: ?Sized + PartialEq,
    {
        self.child_slot(id).is_some()
    }

    /// The slot of the child whose value has identifier `id`, left first.
    pub fn child_slot<Q>(&self, id: &Q) -> Option<Slot>
    where
        V: Identify,
        V::Id: Borrow<Q>,
        Q: ?Sized + PartialEq,
    {
        self.children().find(|(_, child)| child.has_id(id)).map(|(slot, _)| slot)
    }

    fn has_id<Q>(&self, id: &Q) -> bool
    where
        V: Identify,
        V::Id: Borrow<Q>,
        Q: ?Sized + PartialEq,
    {
        Borrow::<Q>::borrow(self.value.id()) == id
    }
}
