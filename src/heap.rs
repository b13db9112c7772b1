//! A fixed-capacity binary min-heap laid out in an array.
//!
//! The element at index `i` has its parent at `(i - 1) / 2` and its children at `2i + 1` and
//! `2i + 2`. Every parent compares less than or equal to its children, so the minimum is always
//! at index 0.
//!
//! The capacity is chosen up front. [`Heap::insert`] quietly drops values once the heap is full;
//! use [`Heap::try_insert`] to find out when that happens.
//!
//! # Examples
//!
//! ```
//! use dsa::heap::Heap;
//!
//! let mut heap = Heap::new(5);
//! for x in [5, 3, 4, 1, 2] {
//!     heap.insert(x);
//! }
//! assert_eq!(heap.as_slice(), &[1, 2, 4, 5, 3]);
//! assert_eq!(heap.min(), Ok(&1));
//!
//! assert_eq!(heap.delete_min(), Some(1));
//! assert_eq!(heap.as_slice(), &[2, 3, 4, 5]);
//! ```

use crate::error::{Error, Result};

/// A binary min-heap holding at most `capacity` elements.
#[derive(Debug, Clone)]
pub struct Heap<T> {
    /// The populated slots, `items[0..len)`. Never grows past `capacity`.
    items: Vec<T>,
    capacity: usize,
}

impl<T> Heap<T> {
    /// Creates an empty heap that will hold at most `capacity` elements.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Index of the parent of `i`. The root, index 0, has none.
    pub fn parent(i: usize) -> Option<usize> {
        i.checked_sub(1).map(|j| j / 2)
    }

    /// Index of the left child of `i`.
    pub fn left(i: usize) -> usize {
        2 * i + 1
    }

    /// Index of the right child of `i`.
    pub fn right(i: usize) -> usize {
        2 * (i + 1)
    }

    /// Maximum number of elements the heap holds.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of elements currently stored.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the heap has no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether another insert would be dropped.
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// The populated part of the backing array, in heap order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// The smallest element.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] if the heap is empty.
    pub fn min(&self) -> Result<&T> {
        self.items.first().ok_or(Error::EmptyContainer)
    }
}

impl<T: Ord> Heap<T> {
    /// Inserts `value`, sifting it up until its parent is no larger. If the heap is full the
    /// value is dropped without complaint.
    pub fn insert(&mut self, value: T) {
        let _ = self.try_insert(value);
    }

    /// Like [`insert`](Self::insert) but reports a full heap.
    ///
    /// # Errors
    ///
    /// [`Error::CapacityExceeded`] if the heap already holds `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::heap::Heap;
    /// use dsa::Error;
    ///
    /// let mut heap = Heap::new(1);
    /// assert_eq!(heap.try_insert(7), Ok(()));
    /// assert_eq!(heap.try_insert(3), Err(Error::CapacityExceeded { capacity: 1 }));
    /// assert_eq!(heap.min(), Ok(&7));
    /// ```
    pub fn try_insert(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        self.items.push(value);
        let mut i = self.items.len() - 1;
        while let Some(p) = Self::parent(i) {
            if self.items[p] <= self.items[i] {
                break;
            }
            self.items.swap(i, p);
            i = p;
        }

        self.check_heap();
        Ok(())
    }

    /// Restores the heap property for the subtree rooted at `index` by sifting its element down
    /// towards the leaves. Both children's subtrees must already be heaps. Indices past the end
    /// are ignored.
    pub fn heapify(&mut self, index: usize) {
        let l = Self::left(index);
        let r = Self::right(index);
        let len = self.items.len();

        let mut smallest = index;
        if l < len && self.items[l] < self.items[smallest] {
            smallest = l;
        }
        if r < len && self.items[r] < self.items[smallest] {
            smallest = r;
        }
        if smallest != index {
            self.items.swap(index, smallest);
            self.heapify(smallest);
        }
    }

    /// Removes and returns the smallest element. The last element takes its place at the root
    /// and is sifted down. Does nothing on an empty heap.
    pub fn delete_min(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let min = self.items.swap_remove(0);
        self.heapify(0);

        self.check_heap();
        Some(min)
    }

    fn check_heap(&self) {
        if cfg!(debug_assertions) {
            assert!(self.items.len() <= self.capacity);
            for i in 1..self.items.len() {
                assert!(Self::parent(i).map_or(true, |p| self.items[p] <= self.items[i]));
            }
        }
    }
}
