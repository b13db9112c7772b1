//! A forward-only linked list that appends at its tail.
//!
//! Nodes live in the list's arena and are linked with [`NodeId`]s. The list keeps handles to
//! both its head and its tail so appending is `O(1)`.
//!
//! # Examples
//!
//! ```
//! use dsa::singly::{merge, Position, SinglyLinkedList};
//!
//! let mut list = SinglyLinkedList::new();
//! list.insert(1);
//! list.insert(2);
//! list.insert(3);
//! assert_eq!(list.to_string(), "[1, 2, 3]");
//!
//! // `find` reports where the first match sits relative to its predecessor.
//! assert_eq!(list.find(&1), Position::Head);
//! assert_eq!(list.find(&42), Position::NotFound);
//!
//! assert!(list.delete_val(&2));
//! list.reverse();
//! assert_eq!(list.render(" -> "), "[3 -> 1]");
//!
//! // Merging two sorted lists consumes them both.
//! let evens: SinglyLinkedList<_> = vec![2, 4, 6].into_iter().collect();
//! let odds: SinglyLinkedList<_> = vec![1, 3, 5].into_iter().collect();
//! assert_eq!(merge(evens, odds).to_string(), "[1, 2, 3, 4, 5, 6]");
//! ```

use std::fmt;
use std::iter::FromIterator;

use crate::arena::{Arena, NodeId};
use crate::util::{render_list, DEFAULT_SEPARATOR};

/// Where the first node holding a searched-for value sits. Returned by
/// [`SinglyLinkedList::find`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// No node holds the value.
    NotFound,
    /// The head holds the value, so it has no predecessor.
    Head,
    /// The value is held by the node right after the given predecessor.
    After(NodeId),
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    next: Option<NodeId>,
}

/// A singly linked list. See the [module docs](self) for an overview.
#[derive(Clone)]
pub struct SinglyLinkedList<T> {
    nodes: Arena<Node<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SinglyLinkedList<T> {
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

    /// Handle of the node following `id`. `None` at the tail or for a handle that isn't in
    /// this list.
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|n| n.next)
    }

    /// The value stored at `id`, or `None` for a handle that isn't in this list.
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id).map(|n| &n.value)
    }

    /// Appends `value` after the current tail.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::singly::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::new();
    /// list.insert("a");
    /// list.insert("b");
    ///
    /// let tail = list.tail().unwrap();
    /// assert_eq!(list.get(tail), Some(&"b"));
    /// ```
    pub fn insert(&mut self, value: T) {
        let id = self.nodes.insert(Node { value, next: None });
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.check_ends();
    }

    /// Finds the first node equal to `value` and reports its predecessor.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::singly::{Position, SinglyLinkedList};
    ///
    /// let list: SinglyLinkedList<_> = vec![10, 20, 30].into_iter().collect();
    ///
    /// assert_eq!(list.find(&10), Position::Head);
    /// assert_eq!(list.find(&99), Position::NotFound);
    ///
    /// // 30 follows 20.
    /// match list.find(&30) {
    ///     Position::After(pred) => assert_eq!(list.get(pred), Some(&20)),
    ///     other => panic!("unexpected {:?}", other),
    /// }
    /// ```
    pub fn find(&self, value: &T) -> Position
    where
        T: PartialEq,
    {
        let mut prev = None;
        let mut current = self.head;
        while let Some(id) = current {
            let node = &self.nodes[id];
            if node.value == *value {
                return match prev {
                    Some(pred) => Position::After(pred),
                    None => Position::Head,
                };
            }
            prev = Some(id);
            current = node.next;
        }
        Position::NotFound
    }

    /// Unlinks the first node equal to `value`. Returns whether a node was removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::singly::SinglyLinkedList;
    ///
    /// let mut list: SinglyLinkedList<_> = vec![1, 2, 3, 2].into_iter().collect();
    ///
    /// assert!(list.delete_val(&2));
    /// assert_eq!(list.to_string(), "[1, 3, 2]");
    ///
    /// assert!(!list.delete_val(&42));
    /// ```
    pub fn delete_val(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.find(value) {
            Position::NotFound => false,
            Position::Head => self.pop_front().is_some(),
            Position::After(pred) => {
                let Some(target) = self.nodes[pred].next else {
                    return false;
                };
                let Some(removed) = self.nodes.remove(target) else {
                    return false;
                };
                self.nodes[pred].next = removed.next;
                if self.tail == Some(target) {
                    self.tail = Some(pred);
                }
                self.check_ends();
                true
            }
        }
    }

    /// Reverses the list in place by flipping every `next` link in a single pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::singly::SinglyLinkedList;
    ///
    /// let mut list: SinglyLinkedList<_> = (1..=4).collect();
    /// list.reverse();
    /// assert_eq!(list.to_string(), "[4, 3, 2, 1]");
    /// ```
    pub fn reverse(&mut self) {
        let mut prev = None;
        let mut current = self.head;
        while let Some(id) = current {
            let node = &mut self.nodes[id];
            current = node.next;
            node.next = prev;
            prev = Some(id);
        }
        self.tail = self.head;
        self.head = prev;
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

    pub(crate) fn front(&self) -> Option<&T> {
        self.head.map(|id| &self.nodes[id].value)
    }

    pub(crate) fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        let node = self.nodes.remove(head)?;
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.check_ends();
        Some(node.value)
    }

    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            current: self.head,
        }
    }

    /// Cheap structural checks run after every mutation in debug builds.
    fn check_ends(&self) {
        if cfg!(debug_assertions) {
            assert_eq!(self.head.is_none(), self.tail.is_none());
            assert_eq!(self.head.is_none(), self.nodes.len() == 0);
            if let Some(tail) = self.tail {
                assert!(self.nodes[tail].next.is_none());
            }
        }
    }
}

/// Merges two lists sorted in ascending order into one sorted list, consuming both.
///
/// Elements keep their relative order. When the fronts compare equal the element from `list2`
/// is taken first. Once either input runs out the rest of the other follows as is.
///
/// # Examples
///
/// ```
/// use dsa::singly::{merge, SinglyLinkedList};
///
/// let a: SinglyLinkedList<_> = vec![1, 4, 9].into_iter().collect();
/// let b: SinglyLinkedList<_> = vec![2, 3, 10, 11].into_iter().collect();
///
/// let merged = merge(a, b);
/// assert_eq!(merged.to_string(), "[1, 2, 3, 4, 9, 10, 11]");
/// ```
pub fn merge<T>(
    mut list1: SinglyLinkedList<T>,
    mut list2: SinglyLinkedList<T>,
) -> SinglyLinkedList<T>
where
    T: Ord,
{
    let mut merged = SinglyLinkedList::new();
    loop {
        let take_first = match (list1.front(), list2.front()) {
            (Some(a), Some(b)) => a < b,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let value = if take_first {
            list1.pop_front()
        } else {
            list2.pop_front()
        };
        if let Some(value) = value {
            merged.insert(value);
        }
    }
    merged
}

pub(crate) struct Iter<'a, T> {
    nodes: &'a Arena<Node<T>>,
    current: Option<NodeId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.nodes.get(self.current?)?;
        self.current = node.next;
        Some(&node.value)
    }
}

impl<T> fmt::Display for SinglyLinkedList<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_SEPARATOR))
    }
}

impl<T> fmt::Debug for SinglyLinkedList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values<T: Clone>(list: &SinglyLinkedList<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn empty_list() {
        let list: SinglyLinkedList<i32> = SinglyLinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.head(), None);
        assert_eq!(list.tail(), None);
        assert_eq!(list.find(&1), Position::NotFound);
        assert_eq!(list.to_string(), "[]");
    }

    #[test]
    fn insert_links_head_to_tail() {
        let mut list = SinglyLinkedList::new();
        list.insert(1);
        assert_eq!(list.head(), list.tail());

        list.insert(2);
        list.insert(3);
        assert_eq!(list.len(), 3);

        let head = list.head().unwrap();
        let second = list.next(head).unwrap();
        let third = list.next(second).unwrap();
        assert_eq!(Some(third), list.tail());
        assert_eq!(list.next(third), None);
        assert_eq!(list.get(second), Some(&2));
    }

    #[test]
    fn find_reports_predecessor() {
        let list: SinglyLinkedList<_> = vec![5, 6, 7, 6].into_iter().collect();

        assert_eq!(list.find(&5), Position::Head);
        let head = list.head().unwrap();
        // First match wins.
        assert_eq!(list.find(&6), Position::After(head));
        assert_eq!(list.find(&8), Position::NotFound);
    }

    #[test]
    fn delete_head() {
        let mut list: SinglyLinkedList<_> = vec![1, 2, 3].into_iter().collect();
        assert!(list.delete_val(&1));
        assert_eq!(values(&list), vec![2, 3]);
        assert_eq!(list.get(list.head().unwrap()), Some(&2));
    }

    #[test]
    fn delete_tail_moves_tail() {
        let mut list: SinglyLinkedList<_> = vec![1, 2, 3].into_iter().collect();
        assert!(list.delete_val(&3));
        assert_eq!(list.get(list.tail().unwrap()), Some(&2));

        // Appending after deleting the tail must link from the new tail.
        list.insert(4);
        assert_eq!(values(&list), vec![1, 2, 4]);
    }

    #[test]
    fn delete_only_element() {
        let mut list = SinglyLinkedList::new();
        list.insert("x");
        assert!(list.delete_val(&"x"));
        assert!(list.is_empty());
        assert_eq!(list.tail(), None);
        assert!(!list.delete_val(&"x"));
    }

    #[test]
    fn delete_missing() {
        let mut list: SinglyLinkedList<_> = vec![1, 2].into_iter().collect();
        assert!(!list.delete_val(&3));
        assert_eq!(values(&list), vec![1, 2]);
    }

    #[test]
    fn deleted_handle_is_stale() {
        let mut list: SinglyLinkedList<_> = vec![1, 2].into_iter().collect();
        let tail = list.tail().unwrap();
        list.delete_val(&2);
        assert_eq!(list.get(tail), None);
        assert_eq!(list.next(tail), None);
    }

    #[test]
    fn reverse_swaps_ends() {
        let mut list: SinglyLinkedList<_> = (1..=5).collect();
        let old_head = list.head();
        let old_tail = list.tail();

        list.reverse();
        assert_eq!(values(&list), vec![5, 4, 3, 2, 1]);
        assert_eq!(list.head(), old_tail);
        assert_eq!(list.tail(), old_head);

        list.insert(0);
        assert_eq!(values(&list), vec![5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn reverse_empty_and_single() {
        let mut list: SinglyLinkedList<i32> = SinglyLinkedList::new();
        list.reverse();
        assert!(list.is_empty());

        list.insert(1);
        list.reverse();
        assert_eq!(values(&list), vec![1]);
        assert_eq!(list.head(), list.tail());
    }

    #[test]
    fn render_formats() {
        let list: SinglyLinkedList<_> = vec![1, 2, 3].into_iter().collect();
        assert_eq!(list.render(DEFAULT_SEPARATOR), "[1, 2, 3]");
        assert_eq!(list.render(""), "[123]");
        assert_eq!(format!("{:?}", list), "[1, 2, 3]");
    }

    #[test]
    fn merge_interleaves() {
        let a: SinglyLinkedList<_> = vec![1, 3, 5, 7].into_iter().collect();
        let b: SinglyLinkedList<_> = vec![2, 4].into_iter().collect();
        assert_eq!(values(&merge(a, b)), vec![1, 2, 3, 4, 5, 7]);
    }

    /// Orders by key only so ties between lists can be told apart.
    #[derive(Debug, PartialEq, Eq)]
    struct Keyed(i32, char);

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.cmp(&other.0)
        }
    }

    #[test]
    fn merge_prefers_second_list_on_ties() {
        let a: SinglyLinkedList<_> = vec![Keyed(1, 'a'), Keyed(2, 'a')].into_iter().collect();
        let b: SinglyLinkedList<_> = vec![Keyed(1, 'b')].into_iter().collect();

        let merged = merge(a, b);
        let tags: Vec<char> = merged.iter().map(|k| k.1).collect();
        assert_eq!(tags, vec!['b', 'a', 'a']);
    }

    #[test]
    fn merge_with_empty() {
        let a: SinglyLinkedList<_> = vec![1, 2].into_iter().collect();
        let merged = merge(a, SinglyLinkedList::new());
        assert_eq!(values(&merged), vec![1, 2]);
        assert_eq!(merged.get(merged.tail().unwrap()), Some(&2));

        let empty: SinglyLinkedList<i32> =
            merge(SinglyLinkedList::new(), SinglyLinkedList::new());
        assert!(empty.is_empty());
    }
}
