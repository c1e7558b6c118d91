//! Binary min-heap used as the priority queue of the graph algorithms.
use std::fmt::{self, Debug};
use thiserror::Error;

/// Growable binary min-heap.
///
/// Elements are ordered by their [`Ord`] implementation and the smallest element
/// is extracted first. There is no decrease-key operation: to lower the priority
/// of an element, insert it again and skip the stale copy when it is extracted.
///
/// # Example
///
/// ```
/// # use routegraph::collections::PriorityQueue;
/// let mut queue = PriorityQueue::new();
/// queue.insert(5);
/// queue.insert(1);
/// queue.insert(3);
///
/// assert_eq!(queue.peek_min(), Ok(&1));
/// assert_eq!(queue.extract_min(), Ok(1));
/// assert_eq!(queue.extract_min(), Ok(3));
/// assert_eq!(queue.extract_min(), Ok(5));
/// assert!(queue.extract_min().is_err());
/// ```
#[derive(Clone)]
pub struct PriorityQueue<T> {
    data: Vec<T>,
}

impl<T: Debug> Debug for PriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("data", &self.data)
            .finish()
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> PriorityQueue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty queue with space for at least `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns whether the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the queue can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Inserts an element.
    ///
    /// Elements comparing equal to ones already in the queue are kept as separate entries.
    pub fn insert(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the smallest element.
    ///
    /// # Errors
    ///
    /// Fails with [`EmptyQueueError`] when the queue is empty.
    pub fn extract_min(&mut self) -> Result<T, EmptyQueueError> {
        self.pop().ok_or(EmptyQueueError)
    }

    /// Returns a reference to the smallest element without removing it.
    ///
    /// # Errors
    ///
    /// Fails with [`EmptyQueueError`] when the queue is empty.
    pub fn peek_min(&self) -> Result<&T, EmptyQueueError> {
        self.peek().ok_or(EmptyQueueError)
    }

    /// Alias of [`PriorityQueue::insert`].
    #[inline]
    pub fn push(&mut self, value: T) {
        self.insert(value);
    }

    /// Removes and returns the smallest element, or `None` if the queue is empty.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.data.len().checked_sub(1)?;
        self.data.swap(0, last);
        let min = self.data.pop();
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        min
    }

    /// Returns the smallest element, or `None` if the queue is empty.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the queue and returns its elements in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(value) = self.pop() {
            sorted.push(value);
        }
        sorted
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[parent] <= self.data[index] {
                break;
            }
            self.data.swap(parent, index);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.data[left] < self.data[smallest] {
                smallest = left;
            }
            if right < len && self.data[right] < self.data[smallest] {
                smallest = right;
            }
            if smallest == index {
                break;
            }

            self.data.swap(index, smallest);
            index = smallest;
        }
    }

    /// Restores the heap order of the whole backing store in linear time.
    fn rebuild(&mut self) {
        for index in (0..self.data.len() / 2).rev() {
            self.sift_down(index);
        }
    }
}

impl<T: Ord> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self {
            data: iter.into_iter().collect(),
        };
        queue.rebuild();
        queue
    }
}

impl<T: Ord> Extend<T> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for value in iter {
            self.insert(value);
        }
    }
}

/// Error returned when extracting from or peeking into an empty [`PriorityQueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the priority queue is empty")]
pub struct EmptyQueueError;

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn is_heap<T: Ord>(queue: &PriorityQueue<T>) -> bool {
        (1..queue.data.len()).all(|i| queue.data[(i - 1) / 2] <= queue.data[i])
    }

    #[test]
    fn empty_queue_signals_errors() {
        let mut queue = PriorityQueue::<u32>::new();

        assert_eq!(queue.extract_min(), Err(EmptyQueueError));
        assert_eq!(queue.peek_min(), Err(EmptyQueueError));
        assert!(queue.pop().is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn grows_past_initial_capacity() {
        let mut queue = PriorityQueue::with_capacity(4);
        for value in (0..1000).rev() {
            queue.insert(value);
        }

        assert_eq!(queue.len(), 1000);
        assert_eq!(queue.peek_min(), Ok(&0));
    }

    #[rstest]
    #[case(vec![3, 1, 2], vec![1, 2, 3])]
    #[case(vec![2, 2, 1, 2], vec![1, 2, 2, 2])]
    #[case(vec![7], vec![7])]
    #[case(vec![], vec![])]
    fn extracts_in_order(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
        let mut queue = PriorityQueue::new();
        queue.extend(input);
        assert_eq!(queue.into_sorted_vec(), expected);
    }

    #[test]
    fn peek_does_not_remove() {
        let mut queue: PriorityQueue<_> = [4, 8, 2].into_iter().collect();

        assert_eq!(queue.peek_min(), Ok(&2));
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.extract_min(), Ok(2));
        assert_eq!(queue.peek_min(), Ok(&4));
    }

    proptest! {
        #[test]
        fn insert_then_extract_is_sorted(values in prop::collection::vec(0u16..64, 0..200)) {
            let mut queue = PriorityQueue::new();
            for &value in &values {
                queue.insert(value);
                prop_assert!(is_heap(&queue));
            }

            let mut extracted = Vec::new();
            while let Ok(value) = queue.extract_min() {
                prop_assert!(is_heap(&queue));
                extracted.push(value);
            }

            let mut expected = values;
            expected.sort_unstable();
            prop_assert_eq!(extracted, expected);
        }

        #[test]
        fn from_iter_builds_a_heap(values in prop::collection::vec(any::<i32>(), 0..200)) {
            let queue: PriorityQueue<_> = values.iter().copied().collect();
            prop_assert!(is_heap(&queue));
            prop_assert_eq!(queue.len(), values.len());
        }
    }
}
