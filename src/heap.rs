use std::fmt::Display;

use itertools::Itertools;

use crate::errors::HeaplingError;

/// Index of the parent of `i` in the implicit tree.
///
/// The root has no parent; it maps to `0` so the result is always a valid
/// index, but callers must not treat the root as its own parent.
pub fn parent_index(i: usize) -> usize {
    if i == 0 { 0 } else { (i - 1) / 2 }
}

pub fn left_index(i: usize) -> usize {
    2 * i + 1
}

pub fn right_index(i: usize) -> usize {
    2 * i + 2
}

/// A binary max-heap stored as a complete binary tree in a flat vector.
///
/// The children of the element at index `i` live at `2i+1` and `2i+2`,
/// and every element is at least as large as its children, so the
/// maximum is always at index `0`.
#[derive(Debug, Clone)]
pub struct MaxHeap<K: Ord> {
    elements: Vec<K>,
}

impl<K: Ord> MaxHeap<K> {
    pub fn new() -> MaxHeap<K> {
        MaxHeap {
            elements: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> MaxHeap<K> {
        MaxHeap {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Add `value` to the heap. O(log n)
    pub fn insert(&mut self, value: K) {
        self.elements.push(value);
        let n = self.elements.len();
        self.sift_up(n - 1);
    }

    /// Remove and return the largest element, or `None` if the heap is empty. O(log n)
    pub fn extract_max(&mut self) -> Option<K> {
        let n = self.elements.len();
        match n {
            0 => None,
            1 => self.elements.pop(),
            _ => {
                let max = self.elements.swap_remove(0);
                self.sift_down(0);
                Some(max)
            }
        }
    }

    /// As [`MaxHeap::extract_max`], but an empty heap is an error.
    pub fn try_extract_max(&mut self) -> Result<K, HeaplingError> {
        self.extract_max().ok_or(HeaplingError::EmptyHeapExtraction)
    }

    pub fn peek_max(&self) -> Option<&K> {
        self.elements.first()
    }

    pub fn size(&self) -> usize {
        self.elements.len()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// The elements in their internal (array) order.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.elements.iter()
    }

    pub fn as_slice(&self) -> &[K] {
        &self.elements
    }

    /// Check that every element is no larger than its parent.
    pub fn is_valid(&self) -> bool {
        (1..self.elements.len()).all(|i| self.elements[parent_index(i)] >= self.elements[i])
    }

    fn sift_up(&mut self, i: usize) {
        let mut i = i;
        while i > 0 {
            let p = parent_index(i);
            if self.elements[i] > self.elements[p] {
                self.elements.swap(i, p);
                i = p;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, i: usize) {
        let n = self.elements.len();
        let mut i = i;
        loop {
            let l = left_index(i);
            let r = right_index(i);
            if l >= n {
                break;
            }
            let mut c = l;
            if r < n && self.elements[r] > self.elements[l] {
                c = r;
            }
            if self.elements[c] > self.elements[i] {
                self.elements.swap(i, c);
                i = c;
            } else {
                break;
            }
        }
    }
}

impl<K: Ord> Default for MaxHeap<K> {
    fn default() -> Self {
        MaxHeap::new()
    }
}

impl<K: Ord> From<Vec<K>> for MaxHeap<K> {
    fn from(value: Vec<K>) -> Self {
        value.into_iter().collect()
    }
}

impl<K: Ord> FromIterator<K> for MaxHeap<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut heap = MaxHeap::with_capacity(iter.size_hint().0);
        for x in iter {
            heap.insert(x);
        }
        heap
    }
}

impl<K: Ord + Display> Display for MaxHeap<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.elements.iter().join(" "))
    }
}
