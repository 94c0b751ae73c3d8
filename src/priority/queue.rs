// src/priority/queue.rs

//! Array-backed binary heap with a pluggable comparator.

use std::cmp::Ordering;
use std::fmt;

use crate::errors::{DayplanError, Result};

/// Ordering rule for a [`PriorityQueue`].
///
/// `Ordering::Greater` means `a` should leave the queue before `b`.
pub trait Compare<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Binary heap whose top is the element the comparator ranks highest.
///
/// The queue knows nothing about tasks; everything it needs comes from `C`.
pub struct PriorityQueue<T, C> {
    heap: Vec<T>,
    cmp: C,
}

impl<T: fmt::Debug, C> fmt::Debug for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("heap", &self.heap)
            .finish_non_exhaustive()
    }
}

impl<T, C: Compare<T>> PriorityQueue<T, C> {
    pub fn new(cmp: C) -> Self {
        Self {
            heap: Vec::new(),
            cmp,
        }
    }

    /// Build a queue from arbitrary items in O(n).
    pub fn from_vec(items: Vec<T>, cmp: C) -> Self {
        let mut queue = Self { heap: items, cmp };
        queue.heapify();
        queue
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Highest ranked element, if any.
    pub fn peek(&self) -> Option<&T> {
        self.heap.first()
    }

    pub fn push(&mut self, item: T) {
        self.heap.push(item);
        self.sift_up(self.heap.len() - 1);
    }

    /// Remove and return the highest ranked element.
    ///
    /// Fails with [`DayplanError::EmptyContainer`] when there is nothing to
    /// pop.
    pub fn pop(&mut self) -> Result<T> {
        let last = self.heap.len().checked_sub(1).ok_or(DayplanError::EmptyContainer)?;
        self.heap.swap(0, last);
        let top = self.heap.pop().ok_or(DayplanError::EmptyContainer)?;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(top)
    }

    /// Replace the contents with `items` and restore heap order in O(n).
    pub fn rebuild(&mut self, items: impl IntoIterator<Item = T>) {
        self.heap.clear();
        self.heap.extend(items);
        self.heapify();
    }

    /// Take every element out, best first.
    pub fn drain_sorted(&mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.heap.len());
        while let Ok(item) = self.pop() {
            out.push(item);
        }
        out
    }

    /// Move everything out in heap order, leaving the queue empty.
    pub fn take_all(&mut self) -> Vec<T> {
        std::mem::take(&mut self.heap)
    }

    fn heapify(&mut self) {
        let len = self.heap.len();
        for i in (0..len / 2).rev() {
            self.sift_down(i);
        }
    }

    fn ranks_above(&self, a: usize, b: usize) -> bool {
        self.cmp.compare(&self.heap[a], &self.heap[b]) == Ordering::Greater
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.ranks_above(index, parent) {
                self.heap.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut best = index;

            if left < len && self.ranks_above(left, best) {
                best = left;
            }
            if right < len && self.ranks_above(right, best) {
                best = right;
            }
            if best == index {
                break;
            }
            self.heap.swap(index, best);
            index = best;
        }
    }
}
