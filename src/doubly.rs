//! A linked list with both forward and backward links.
//!
//! Unlike [`SinglyLinkedList`](crate::singly::SinglyLinkedList) this list only appends,
//! reverses and renders. The backward `prev` links are plain [`NodeId`]s, so they never own the
//! node they point at.
//!
//! # Examples
//!
//! ```
//! use dsa::doubly::DoublyLinkedList;
//!
//! let mut list = DoublyLinkedList::new();
//! list.insert('a');
//! list.insert('b');
//! list.insert('c');
//! assert_eq!(list.to_string(), "[a, b, c]");
//!
//! // Walk backwards from the tail.
//! let tail = list.tail().unwrap();
//! let middle = list.prev(tail).unwrap();
//! assert_eq!(list.get(middle), Some(&'b'));
//!
//! list.reverse();
//! assert_eq!(list.render(""), "[cba]");
//! ```

use std::fmt;
use std::iter::FromIterator;

use crate::arena::{Arena, NodeId};
use crate::util::{render_list, DEFAULT_SEPARATOR};

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: Option<NodeId>,
    prev: Option<NodeId>,
}

/// A doubly linked list. See the [module docs](self) for an overview.
#[derive(Clone)]
pub struct DoublyLinkedList<T> {
    nodes: Arena<Node<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DoublyLinkedList<T> {
    /// Generates a new, empty list.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: None,
            tail: None,
        }
    }

    /// Number of elements in the list.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Handle of the first node, if any.
    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    /// Handle of the last node, if any.
    pub fn tail(&self) -> Option<NodeId> {
        self.tail
    }

    /// Handle of the node after `id`.
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|n| n.next)
    }

    /// Handle of the node before `id`.
    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|n| n.prev)
    }

    /// The value stored at `id`, or `None` for a handle that isn't in this list.
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id).map(|n| &n.value)
    }

    /// Appends `value` after the current tail, linking it in both directions.
    pub fn insert(&mut self, value: T) {
        let id = self.nodes.insert(Node {
            value,
            next: None,
            prev: self.tail,
        });
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.check_ends();
    }

    /// Reverses the list in place. Every node's `next` and `prev` links trade places in a
    /// single pass and the head and tail swap.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::doubly::DoublyLinkedList;
    ///
    /// let mut list: DoublyLinkedList<_> = (1..=3).collect();
    /// list.reverse();
    /// assert_eq!(list.to_string(), "[3, 2, 1]");
    ///
    /// let head = list.head().unwrap();
    /// assert_eq!(list.prev(head), None);
    /// assert_eq!(list.get(list.next(head).unwrap()), Some(&2));
    /// ```
    pub fn reverse(&mut self) {
        let mut current = self.head;
        while let Some(id) = current {
            let node = &mut self.nodes[id];
            std::mem::swap(&mut node.next, &mut node.prev);
            // The old `next` is now in `prev`.
            current = node.prev;
        }
        std::mem::swap(&mut self.head, &mut self.tail);
        self.check_ends();
    }

    /// Renders the list as `[a<sep>b<sep>c]`.
    pub fn render(&self, sep: &str) -> String
    where
        T: fmt::Display,
    {
        render_list(self.iter(), sep)
    }

    /// Prints [`render`](Self::render) followed by a newline to stdout.
    pub fn printer(&self, sep: &str)
    where
        T: fmt::Display,
    {
        println!("{}", self.render(sep));
    }

    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.head,
        }
    }

    fn check_ends(&self) {
        if cfg!(debug_assertions) {
            assert_eq!(self.head.is_none(), self.tail.is_none());
            assert_eq!(self.head.is_none(), self.nodes.len() == 0);
            if let Some(head) = self.head {
                assert!(self.nodes[head].prev.is_none());
            }
            if let Some(tail) = self.tail {
                assert!(self.nodes[tail].next.is_none());
            }
        }
    }
}

pub(crate) struct Iter<'a, T> {
    nodes: &'a Arena<Node<T>>,
    front: Option<NodeId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.nodes.get(self.front?)?;
        self.front = node.next;
        Some(&node.value)
    }
}

impl<T> fmt::Display for DoublyLinkedList<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_SEPARATOR))
    }
}

impl<T> fmt::Debug for DoublyLinkedList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}
