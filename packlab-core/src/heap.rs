//! Fixed-capacity binary heap with a caller-supplied comparator.
//!
//! The Huffman tree builder uses this heap in [`HeapMode::Min`] mode as a
//! priority-ordered pool of candidate tree nodes: the two lowest-frequency
//! nodes are repeatedly extracted and merged.
//!
//! # Invariant
//!
//! For every non-root slot `i`, the parent dominates its children under the
//! comparator: in min mode `parent <= child`, in max mode `parent >= child`.
//! Insertion sifts up, extraction moves the last item into the root slot and
//! sifts down. Both are O(log n); peeking at the root is O(1).

use crate::error::{CodecError, Result};
use std::cmp::Ordering;

/// Ordering mode of a [`Heap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapMode {
    /// The root holds the smallest item under the comparator.
    Min,
    /// The root holds the largest item under the comparator.
    Max,
}

/// A fixed-capacity binary heap over opaque items.
///
/// The heap owns the items inserted into it; extraction moves them back out.
#[derive(Debug)]
pub struct Heap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    items: Vec<T>,
    capacity: usize,
    mode: HeapMode,
    compare: F,
}

impl<T, F> Heap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Create a heap with the given capacity, mode and comparator.
    ///
    /// Returns an error if `capacity` is zero.
    pub fn new(capacity: usize, mode: HeapMode, compare: F) -> Result<Self> {
        if capacity == 0 {
            return Err(CodecError::capacity_exceeded(0));
        }
        Ok(Self {
            items: Vec::with_capacity(capacity),
            capacity,
            mode,
            compare,
        })
    }

    /// Number of items currently stored.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if the heap is full.
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Peek at the root item without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// True if the item at `a` must sit above the item at `b`.
    fn dominates(&self, a: &T, b: &T) -> bool {
        match self.mode {
            HeapMode::Min => (self.compare)(a, b) != Ordering::Greater,
            HeapMode::Max => (self.compare)(a, b) != Ordering::Less,
        }
    }

    /// Insert an item, sifting it up to restore the heap invariant.
    ///
    /// Returns [`CodecError::CapacityExceeded`] if the heap is full.
    pub fn insert(&mut self, item: T) -> Result<()> {
        if self.is_full() {
            return Err(CodecError::capacity_exceeded(self.capacity));
        }

        self.items.push(item);
        let mut i = self.items.len() - 1;
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.dominates(&self.items[parent], &self.items[i]) {
                break;
            }
            self.items.swap(parent, i);
            i = parent;
        }
        Ok(())
    }

    /// Remove and return the root item, or `None` if the heap is empty.
    ///
    /// The last item moves into the root slot and sifts down until the
    /// invariant holds again.
    pub fn extract_root(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }

        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let root = self.items.pop();

        let len = self.items.len();
        let mut i = 0;
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut best = i;

            if left < len && !self.dominates(&self.items[best], &self.items[left]) {
                best = left;
            }
            if right < len && !self.dominates(&self.items[best], &self.items[right]) {
                best = right;
            }
            if best == i {
                break;
            }
            self.items.swap(i, best);
            i = best;
        }

        root
    }
}
