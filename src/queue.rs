use crate::error::{InvalidCapacity, PushError};
use crate::indexer::{Indexer, Mask, Remainder};
use crate::signed::Signed;
use std::fmt;

pub type MaskedQueue<T> = CircularQueue<T, Mask>;

/// A bounded FIFO queue over a fixed number of slots.
///
/// `head` and `tail` alone cannot tell a full queue from an empty one once the
/// tail has wrapped onto the head, so `count` decides both.
pub struct CircularQueue<T, I = Remainder> {
    buf: Box<[T]>,
    indexer: I,
    head: usize,
    tail: usize,
    count: usize,
}

impl<T: Signed> CircularQueue<T, Remainder> {
    /// Creates an empty queue holding at most `capacity` values.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        Self::try_new(capacity).unwrap_or_else(|err| panic!("{}", err))
    }

    pub fn try_new(capacity: usize) -> Result<Self, InvalidCapacity> {
        let indexer = Remainder::new(capacity).map_err(|err| {
            #[cfg(feature = "tracing")]
            tracing::debug!(%err, capacity, "rejected queue capacity");
            err
        })?;
        Ok(Self::with_indexer(indexer))
    }
}

impl<T: Signed, I: Indexer> CircularQueue<T, I> {
    /// Creates an empty queue sized by `indexer`. Indexers can only be
    /// obtained through their validating `new`, so the capacity is non-zero.
    pub fn with_indexer(indexer: I) -> Self {
        #[cfg(feature = "tracing")]
        tracing::trace!(capacity = indexer.cap(), "created queue");

        let buf = (0..indexer.cap()).map(|_| T::ZERO).collect();
        Self {
            buf,
            indexer,
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    /// Appends `value` at the back. Returns `false` and leaves the queue
    /// untouched when it is full.
    #[must_use]
    pub fn push(&mut self, value: T) -> bool {
        self.try_push(value).is_ok()
    }

    pub fn try_push(&mut self, value: T) -> Result<(), PushError<T>> {
        if self.is_full() {
            return Err(PushError { val: value });
        }

        // the slot may still hold a stale value, it is overwritten as is.
        self.buf[self.tail] = value;
        self.tail = self.index(self.tail + 1);
        self.count += 1;
        Ok(())
    }

    /// Removes the oldest value. Its slot is reset to zero.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let value = std::mem::replace(&mut self.buf[self.head], T::ZERO);
        self.head = self.index(self.head + 1);
        self.count -= 1;
        Some(value)
    }

    pub fn front(&self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            Some(self.buf[self.head])
        }
    }

    /// The most recently pushed value.
    pub fn back(&self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            let idx = self.index(self.tail + self.capacity() - 1);
            Some(self.buf[idx])
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn capacity(&self) -> usize {
        self.indexer.cap()
    }

    /// Zeroes every slot and rewinds to the empty state.
    pub fn clear(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::trace!(capacity = self.capacity(), len = self.count, "clearing queue");

        self.buf.fill(T::ZERO);
        self.head = 0;
        self.tail = 0;
        self.count = 0;
    }

    /// The backing slots in physical order, including those outside the
    /// logical window.
    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    fn index(&self, pos: usize) -> usize {
        self.indexer.index(pos)
    }
}

impl<T, I: Indexer> fmt::Debug for CircularQueue<T, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularQueue")
            .field("capacity", &self.indexer.cap())
            .field("len", &self.count)
            .field("head", &self.head)
            .field("tail", &self.tail)
            .finish()
    }
}
