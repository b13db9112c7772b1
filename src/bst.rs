//! An unbalanced Binary Search Tree.
//!
//! Values are placed by repeated comparison descent from the root, so the shape of the tree
//! depends entirely on insertion order. Inserting already-sorted values degenerates into a
//! chain. Because of that every walk over the tree (traversals, heights) uses an explicit
//! stack or queue rather than recursion, and nodes live in an arena so dropping a chain-shaped
//! tree doesn't recurse either.
//!
//! Inserting a value that's already present does nothing.
//!
//! # Examples
//!
//! ```
//! use dsa::bst::{Order, Tree};
//!
//! let mut tree = Tree::new();
//! for x in [4, 2, 3, 1, 6, 5, 7] {
//!     tree.insert(x);
//! }
//!
//! assert_eq!(tree.render(Order::Pre), "4 2 1 3 6 5 7 ");
//! assert_eq!(tree.render(Order::In), "1 2 3 4 5 6 7 ");
//! assert_eq!(tree.render(Order::Post), "1 3 2 5 7 6 4 ");
//! assert_eq!(tree.height(), Ok(2));
//!
//! // Orders can also be named the way a command line would spell them.
//! let order: Order = "IN".parse().unwrap();
//! assert_eq!(tree.traverse(order), vec![&1, &2, &3, &4, &5, &6, &7]);
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::iter::FromIterator;
use std::str::FromStr;

use crate::arena::{Arena, NodeId};
use crate::error::{Error, Result};
use crate::util::render_spaced;

/// The order in which [`Tree::traverse`] visits nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Node, then left subtree, then right subtree.
    Pre,
    /// Left subtree, then node, then right subtree. Yields values in ascending order.
    In,
    /// Left subtree, then right subtree, then node.
    Post,
}

impl FromStr for Order {
    type Err = Error;

    /// Parses `"PRE"`, `"IN"` or `"POST"`.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "PRE" => Ok(Order::Pre),
            "IN" => Ok(Order::In),
            "POST" => Ok(Order::Post),
            other => Err(Error::InvalidArgument(format!(
                "unknown traversal order {other:?}"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    left: Option<NodeId>,
    right: Option<NodeId>,
    /// Depth of this node below the root. The root is at level 0.
    level: usize,
}

/// An unbalanced Binary Search Tree holding distinct values.
#[derive(Clone)]
pub struct Tree<T> {
    nodes: Arena<Node<T>>,
    root: Option<NodeId>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Number of values in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no root.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Handle of the root node, if any.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// The value stored at `id`.
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id).map(|n| &n.value)
    }

    /// Handle of the left child of `id`.
    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|n| n.left)
    }

    /// Handle of the right child of `id`.
    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|n| n.right)
    }

    /// How far below the root `id` sits. The root is at level 0.
    pub fn level(&self, id: NodeId) -> Option<usize> {
        self.nodes.get(id).map(|n| n.level)
    }

    /// Inserts `value`, returning `false` (and leaving the tree untouched) if an equal value is
    /// already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.insert(2));
    /// assert!(tree.insert(1));
    ///
    /// // Duplicates are ignored.
    /// assert!(!tree.insert(2));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let Some(mut current) = self.root else {
            self.root = Some(self.nodes.insert(Node::new(value, 0)));
            return true;
        };

        loop {
            let node = &self.nodes[current];
            let (child, goes_left) = match value.cmp(&node.value) {
                Ordering::Less => (node.left, true),
                Ordering::Greater => (node.right, false),
                Ordering::Equal => return false,
            };
            match child {
                Some(child) => current = child,
                None => {
                    let level = node.level + 1;
                    let id = self.nodes.insert(Node::new(value, level));
                    let parent = &mut self.nodes[current];
                    if goes_left {
                        parent.left = Some(id);
                    } else {
                        parent.right = Some(id);
                    }

                    if cfg!(debug_assertions) {
                        let parent = &self.nodes[current];
                        let child = &self.nodes[id];
                        assert_eq!(goes_left, child.value < parent.value);
                    }
                    return true;
                }
            }
        }
    }

    /// Finds the node holding `value`.
    pub fn find(&self, value: &T) -> Option<NodeId>
    where
        T: Ord,
    {
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.nodes[id];
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left,
                Ordering::Equal => return Some(id),
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// Whether `value` is stored in the tree.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// Collects references to every value in the given order.
    pub fn traverse(&self, order: Order) -> Vec<&T> {
        let mut out = Vec::with_capacity(self.len());
        match order {
            Order::Pre => {
                let mut stack: Vec<NodeId> = self.root.into_iter().collect();
                while let Some(id) = stack.pop() {
                    let node = &self.nodes[id];
                    out.push(&node.value);
                    stack.extend(node.right);
                    stack.extend(node.left);
                }
            }
            Order::In => {
                let mut stack = Vec::new();
                let mut current = self.root;
                loop {
                    while let Some(id) = current {
                        stack.push(id);
                        current = self.nodes[id].left;
                    }
                    let Some(id) = stack.pop() else {
                        break;
                    };
                    let node = &self.nodes[id];
                    out.push(&node.value);
                    current = node.right;
                }
            }
            Order::Post => {
                // Node-right-left pre-order, reversed, is left-right-node.
                let mut stack: Vec<NodeId> = self.root.into_iter().collect();
                while let Some(id) = stack.pop() {
                    let node = &self.nodes[id];
                    out.push(&node.value);
                    stack.extend(node.left);
                    stack.extend(node.right);
                }
                out.reverse();
            }
        }
        out
    }

    /// Renders a traversal as values each followed by a single space, e.g. `"1 2 3 "`.
    pub fn render(&self, order: Order) -> String
    where
        T: fmt::Display,
    {
        render_spaced(self.traverse(order))
    }

    /// Prints [`render`](Self::render) to stdout without a trailing newline.
    pub fn print_traversal(&self, order: Order)
    where
        T: fmt::Display,
    {
        print!("{}", self.render(order));
    }

    /// Height of the whole tree. A lone root has height 0.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if the tree is empty, since an empty tree has no root to
    /// measure from.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::bst::Tree;
    /// use dsa::Error;
    ///
    /// let mut tree = Tree::new();
    /// assert!(matches!(tree.height(), Err(Error::InvalidArgument(_))));
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.height(), Ok(0));
    ///
    /// tree.insert(2);
    /// tree.insert(3);
    /// assert_eq!(tree.height(), Ok(2));
    /// ```
    pub fn height(&self) -> Result<usize> {
        let root = self
            .root
            .ok_or_else(|| Error::InvalidArgument("height of an empty tree".to_string()))?;
        self.height_of(root)
    }

    /// Height of the subtree rooted at `id`: the number of edges on the longest path from `id`
    /// down to a leaf. Leaves have height 0.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `id` is not a node of this tree: it was handed out by another
    /// tree, or its node has since been removed.
    pub fn height_of(&self, id: NodeId) -> Result<usize> {
        if !self.nodes.contains(id) {
            return Err(Error::InvalidArgument(
                "node is not part of this tree".to_string(),
            ));
        }

        // Count levels breadth first.
        let mut height = 0;
        let mut frontier = VecDeque::new();
        frontier.push_back(id);
        loop {
            for _ in 0..frontier.len() {
                if let Some(id) = frontier.pop_front() {
                    let node = &self.nodes[id];
                    frontier.extend(node.left);
                    frontier.extend(node.right);
                }
            }
            if frontier.is_empty() {
                return Ok(height);
            }
            height += 1;
        }
    }
}

impl<T> Node<T> {
    fn new(value: T, level: usize) -> Self {
        Self {
            value,
            left: None,
            right: None,
            level,
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.traverse(Order::In)).finish()
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
