//! Bounded ring of recent generations for stagnation detection

use std::collections::VecDeque;

use crate::io::configuration::{HISTORY_CAPACITY, STAGNATION_LOOKBACK};
use crate::spatial::lattice::Lattice;

/// The last few lattice snapshots, oldest first
#[derive(Debug, Clone)]
pub struct GenerationHistory {
    snapshots: VecDeque<Lattice>,
    capacity: usize,
}

impl Default for GenerationHistory {
    fn default() -> Self {
        Self::new(HISTORY_CAPACITY)
    }
}

impl GenerationHistory {
    /// Create an empty history holding at most `capacity` snapshots (minimum 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            snapshots: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Record a snapshot, evicting the oldest when full
    pub fn push(&mut self, snapshot: Lattice) {
        self.snapshots.push_back(snapshot);
        while self.snapshots.len() > self.capacity {
            self.snapshots.pop_front();
        }
    }

    /// True if `current` equals one of the two most recent snapshots
    ///
    /// Matching the latest snapshot means a fixed point; matching the one
    /// before it means a period-2 oscillator.
    pub fn is_stagnant(&self, current: &Lattice) -> bool {
        self.snapshots
            .iter()
            .rev()
            .take(STAGNATION_LOOKBACK)
            .any(|snapshot| snapshot == current)
    }

    /// Most recently recorded snapshot
    pub fn latest(&self) -> Option<&Lattice> {
        self.snapshots.back()
    }

    /// Number of stored snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether no snapshot has been recorded
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Maximum number of stored snapshots
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop all snapshots
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}
