// BoundedQueue - fixed-capacity FIFO shared by every producer and consumer

use crate::core::QueueError;
use serde::Serialize;
use std::collections::VecDeque;
use std::num::NonZeroUsize;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

/// Point-in-time view of a queue's counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueueStats {
    pub capacity: usize,
    pub len: usize,
    pub high_water_mark: usize,
    pub pushed: u64,
    pub popped: u64,
    pub closed: bool,
}

struct QueueState<T> {
    items: VecDeque<T>,
    closed: bool,
    high_water_mark: usize,
    pushed: u64,
    popped: u64,
}

/// BoundedQueue is a multi-producer, multi-consumer FIFO with a fixed capacity.
///
/// `push` blocks while the queue is full and `pop` blocks while it is empty
/// and still open. Once `close` is called no further pushes are accepted, but
/// items already buffered stay available until consumers drain them; after
/// that every `pop` returns `None`.
pub struct BoundedQueue<T> {
    /// buffered items plus the closed flag, guarded together
    state: Mutex<QueueState<T>>,

    /// maximum number of buffered items
    capacity: usize,

    /// signalled when a slot frees up or the queue closes
    not_full: Condvar,

    /// signalled when an item arrives or the queue closes
    not_empty: Condvar,
}

impl<T> BoundedQueue<T> {
    pub fn new(capacity: NonZeroUsize) -> Self {
        let capacity = capacity.get();
        Self {
            state: Mutex::new(QueueState {
                items: VecDeque::with_capacity(capacity),
                closed: false,
                high_water_mark: 0,
                pushed: 0,
                popped: 0,
            }),
            capacity,
            not_full: Condvar::new(),
            not_empty: Condvar::new(),
        }
    }

    // Nothing panics while the lock is held, so a poisoned guard still
    // protects a consistent state.
    fn lock(&self) -> MutexGuard<'_, QueueState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends `value` at the tail, blocking while the queue is at capacity.
    ///
    /// Fails with `QueueError::Closed` if the queue is closed before or while
    /// the caller waits for a free slot.
    pub fn push(&self, value: T) -> Result<(), QueueError> {
        let mut state = self.lock();
        loop {
            if state.closed {
                return Err(QueueError::Closed);
            }
            if state.items.len() < self.capacity {
                break;
            }
            state = self
                .not_full
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }

        state.items.push_back(value);
        state.pushed += 1;
        state.high_water_mark = state.high_water_mark.max(state.items.len());
        drop(state);

        self.not_empty.notify_one();
        Ok(())
    }

    /// Removes the head item, blocking while the queue is empty and open.
    ///
    /// Returns `None` only once the queue is both closed and empty.
    pub fn pop(&self) -> Option<T> {
        let mut state = self.lock();
        loop {
            if let Some(value) = state.items.pop_front() {
                state.popped += 1;
                drop(state);
                self.not_full.notify_one();
                return Some(value);
            }
            if state.closed {
                return None;
            }
            state = self
                .not_empty
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Non-blocking variant of `pop`
    pub fn try_pop(&self) -> Option<T> {
        let mut state = self.lock();
        let value = state.items.pop_front()?;
        state.popped += 1;
        drop(state);

        self.not_full.notify_one();
        Some(value)
    }

    /// Marks the queue closed and wakes every blocked caller.
    ///
    /// Buffered items are kept for consumers to drain. Closing twice is a
    /// contract violation and returns `QueueError::AlreadyClosed`.
    pub fn close(&self) -> Result<(), QueueError> {
        let mut state = self.lock();
        if state.closed {
            return Err(QueueError::AlreadyClosed);
        }
        state.closed = true;
        drop(state);

        self.not_empty.notify_all();
        self.not_full.notify_all();
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    pub fn len(&self) -> usize {
        self.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn stats(&self) -> QueueStats {
        let state = self.lock();
        QueueStats {
            capacity: self.capacity,
            len: state.items.len(),
            high_water_mark: state.high_water_mark,
            pushed: state.pushed,
            popped: state.popped,
            closed: state.closed,
        }
    }
}
