use std::collections::VecDeque;

use crate::model::Tick;

/// Bounded FIFO history of the most recent ticks for one symbol.
///
/// Pushing past capacity evicts the single oldest tick. Iteration order is
/// arrival order, oldest first.
#[derive(Debug, Clone)]
pub struct TickWindow {
    ticks: VecDeque<Tick>,
    capacity: usize,
}

impl TickWindow {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Window capacity must be greater than 0");
        Self {
            ticks: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, tick: Tick) {
        if self.ticks.len() >= self.capacity {
            self.ticks.pop_front();
        }
        self.ticks.push_back(tick);
    }

    /// Drop all history. Called when the tracked symbol changes so one
    /// instrument's digits never blend into another's.
    pub fn clear(&mut self) {
        self.ticks.clear();
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ticks.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Ticks oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Tick> {
        self.ticks.iter()
    }

    /// Digits only, oldest to newest.
    pub fn digits(&self) -> impl Iterator<Item = u8> + '_ {
        self.ticks.iter().map(|tick| tick.digit)
    }

    pub fn last(&self) -> Option<&Tick> {
        self.ticks.back()
    }

    /// Digit of the most recently pushed tick.
    pub fn last_digit(&self) -> Option<u8> {
        self.ticks.back().map(|tick| tick.digit)
    }

    pub fn to_vec(&self) -> Vec<Tick> {
        self.ticks.iter().copied().collect()
    }
}
