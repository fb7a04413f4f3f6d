//! One-shot timers over a caller-owned virtual clock. The queue never reads
//! wall-clock time; the owner decides what "now" is and drains due entries.

use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub u64);

#[derive(Debug)]
struct Entry<T> {
    deadline: f64,
    seq: u64, // schedule order, tiebreak for equal deadlines
    payload: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.deadline
            .total_cmp(&other.deadline)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// A timer that fell due: its deadline, identity and payload.
#[derive(Debug)]
pub struct Fired<T> {
    pub deadline: f64,
    pub id: TimerId,
    pub payload: T,
}

/// Ordered one-shot timer queue. Entries fire in `(deadline, schedule order)`
/// order; nothing fires until the owner polls with [`TimerQueue::pop_due`].
#[derive(Debug)]
pub struct TimerQueue<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    next_seq: u64,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn schedule(&mut self, deadline: f64, payload: T) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry {
            deadline,
            seq,
            payload,
        }));
        TimerId(seq)
    }

    pub fn next_deadline(&self) -> Option<f64> {
        self.heap.peek().map(|rev| rev.0.deadline)
    }

    /// Remove and return the earliest entry with `deadline <= now`, if any.
    pub fn pop_due(&mut self, now: f64) -> Option<Fired<T>> {
        if !self.heap.peek().is_some_and(|rev| rev.0.deadline <= now) {
            return None;
        }
        let Reverse(entry) = self.heap.pop()?;
        Some(Fired {
            deadline: entry.deadline,
            id: TimerId(entry.seq),
            payload: entry.payload,
        })
    }

    /// Drop every pending entry.
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
