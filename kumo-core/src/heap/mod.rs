//! Array-backed binary min-heap.
//!
//! Uses 0-indexed storage with `parent = (i - 1) / 2` and children at
//! `2i + 1`, `2i + 2`. There is no decrease-key; callers that need one push a
//! fresh entry and discard stale ones on extraction.

use crate::error::HeapError;

/// Binary min-heap over totally ordered elements.
///
/// # Examples
/// ```
/// use kumo_core::MinHeap;
///
/// let mut heap: MinHeap<u32> = [5, 3, 8, 1, 9, 2].into_iter().collect();
/// assert_eq!(heap.peek_min()?, &1);
///
/// let mut drained = Vec::new();
/// while !heap.is_empty() {
///     drained.push(heap.remove_min()?);
/// }
/// assert_eq!(drained, [1, 2, 3, 5, 8, 9]);
/// # Ok::<(), kumo_core::HeapError>(())
/// ```
#[derive(Clone, Debug)]
pub struct MinHeap<T> {
    nodes: Vec<T>,
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<T: Ord> MinHeap<T> {
    /// Creates an empty heap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty heap with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of stored elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` when the heap holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds `item` to the heap.
    pub fn insert(&mut self, item: T) {
        self.nodes.push(item);
        self.sift_up(self.nodes.len() - 1);
    }

    /// Returns the minimum element without removing it.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] when the heap holds no elements.
    pub fn peek_min(&self) -> Result<&T, HeapError> {
        self.nodes.first().ok_or(HeapError::Empty)
    }

    /// Removes and returns the minimum element.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] when the heap holds no elements.
    pub fn remove_min(&mut self) -> Result<T, HeapError> {
        if self.nodes.is_empty() {
            return Err(HeapError::Empty);
        }
        let last = self.nodes.len() - 1;
        self.nodes.swap(0, last);
        let min = self.nodes.pop().ok_or(HeapError::Empty)?;
        if !self.nodes.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.nodes[index] >= self.nodes[parent] {
                break;
            }
            self.nodes.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.nodes.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let smallest = if right < len && self.nodes[right] < self.nodes[left] {
                right
            } else {
                left
            };
            if self.nodes[smallest] >= self.nodes[index] {
                break;
            }
            self.nodes.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T: Ord> Extend<T> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}
