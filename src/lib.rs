//! This crate exposes the classic container data types mostly for
//! educational purposes: linked lists, a binary search tree, a binary
//! heap and a prefix trie.
//!
//! ## Nodes and links
//!
//! Most of these containers are defined in terms of `Node`s. A `Node`
//! stores a value along with links to its neighbours: the next (and maybe
//! previous) node in a list, or the left and right children in a tree.
//! Without a garbage collector the tricky part is deciding who _owns_ a
//! node. Here every container owns all of its nodes in one arena and links
//! them with [`NodeId`] handles. A handle is just an index, so a list can
//! point backwards and a tree can be thousands of levels deep without any
//! fights over borrowing or deeply recursive drops.
//!
//! ## The containers
//!
//! - [`singly::SinglyLinkedList`]: append, find, delete, reverse and merge
//!   two sorted lists.
//! - [`doubly::DoublyLinkedList`]: append and reverse with links in both
//!   directions.
//! - [`bst::Tree`]: an unbalanced Binary Search Tree. For every `Node` all
//!   the values in its left subtree are smaller and all the values in its
//!   right subtree are larger. It supports pre-, in- and post-order
//!   traversal and computes heights.
//! - [`heap::Heap`]: a fixed-capacity binary min-heap stored in an array.
//! - [`trie::Trie`]: a prefix tree counting how many inserted strings share
//!   each prefix.
//!
//! Operations that can fail return [`Error`].

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod arena;
pub mod bst;
pub mod doubly;
pub mod error;
pub mod heap;
pub mod singly;
pub mod trie;
mod util;

pub use arena::NodeId;
pub use error::{Error, Result};
pub use util::DEFAULT_SEPARATOR;
