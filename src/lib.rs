//! This crate exposes a binary tree node: the building block for tree structures that need
//! exactly two ordered child positions rather than an arbitrary list of children.
//!
//! ## Binary Node
//!
//! A [`BinaryNode`] owns a value and at most two children. The children live in fixed
//! [`Slot`]s, `Left` (index 0) and `Right` (index 1). The important invariants are:
//!
//! 1. A node never has more than two children.
//! 2. [`BinaryNode::insert`] fills the left slot first, then the right one, and refuses
//!    further children once both are set.
//!
//! Every node is in exactly one [`Shape`]:
//!
//! | Shape         | Left     | Right    |
//! |---------------|----------|----------|
//! | `Leaf`        | empty    | empty    |
//! | `SimpleLeft`  | occupied | empty    |
//! | `SimpleRight` | empty    | occupied |
//! | `Double`      | occupied | occupied |
//!
//! > Note that a node doesn't know its parent, and that this crate gives no meaning to the
//! > order in which a tree is walked. Search trees and expression trees built on top of it
//! > decide that for themselves.
//!
//! Children can be found by the identifier of their value, see [`Identify`].

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod identify;
mod node;
mod shape;
mod slot;

pub use error::{InvalidSlotIndex, NodeError};
pub use identify::Identify;
pub use node::{BinaryNode, NodeResult};
pub use shape::Shape;
pub use slot::Slot;
