//! Ring module - fixed-capacity FIFO over a stack array
//!
//! Slots are reused through modular index arithmetic; nothing is ever shifted.
//! `head` is the next slot to read, `tail` the next free slot to write. Both
//! stay private so callers only ever see queue order.

use arrayvec::ArrayVec;

/// Fixed-capacity circular buffer holding at most `N` items.
#[derive(Debug, Clone)]
pub struct RingBuffer<T, const N: usize> {
    slots: [Option<T>; N],
    head: usize,
    tail: usize,
    len: usize,
}

impl<T, const N: usize> RingBuffer<T, N> {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Append at the tail.
    ///
    /// When full the item is handed back and the buffer is left untouched.
    pub fn push(&mut self, item: T) -> Result<(), T> {
        if self.is_full() {
            return Err(item);
        }

        self.slots[self.tail] = Some(item);
        self.tail = (self.tail + 1) % N;
        self.len += 1;
        Ok(())
    }

    /// Remove the oldest item
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let item = self.slots[self.head].take();
        self.head = (self.head + 1) % N;
        self.len -= 1;
        item
    }

    /// Oldest item, if any
    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.head].as_ref()
    }

    /// Iterate oldest to newest without consuming anything.
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter {
            ring: self,
            index: self.head,
            remaining: self.len,
        }
    }

    /// Copy the queued items, in order, into a stack-only vector.
    pub fn peek_all(&self) -> ArrayVec<T, N>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Drop every item and rewind both indices
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }
}

impl<T, const N: usize> Default for RingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowing iterator over a [`RingBuffer`], oldest first.
pub struct Iter<'a, T, const N: usize> {
    ring: &'a RingBuffer<T, N>,
    index: usize,
    remaining: usize,
}

impl<'a, T, const N: usize> Iterator for Iter<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let item = self.ring.slots[self.index].as_ref();
        self.index = (self.index + 1) % N;
        self.remaining -= 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, const N: usize> ExactSizeIterator for Iter<'a, T, N> {}

impl<'a, T, const N: usize> IntoIterator for &'a RingBuffer<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
