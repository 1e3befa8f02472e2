//! Fixed-depth record of past generations

use super::grid::Grid;
use crate::error::{LifeError, Result};

/// Ring of exactly `capacity` grids, newest first.
///
/// Age 0 is the most recent completed generation, age `capacity - 1` the
/// oldest one kept. Pushing rotates the ring and reuses the oldest slot, so
/// no grid is ever allocated after construction.
#[derive(Clone, Debug)]
pub struct HistoryBuffer {
    slots: Vec<Grid>,
    // Slot index holding age 0
    head: usize,
}

impl HistoryBuffer {
    /// Fill every slot with a copy of `initial`
    pub fn new(capacity: usize, initial: &Grid) -> Result<Self> {
        if capacity == 0 {
            return Err(LifeError::InvalidConfig("history depth must be non-zero"));
        }
        Ok(Self {
            slots: vec![initial.clone(); capacity],
            head: 0,
        })
    }

    /// Age every entry by one, drop the oldest and store `snapshot` as age 0
    pub fn shift_and_push(&mut self, snapshot: &Grid) -> Result<()> {
        let len = self.slots.len();
        let oldest = (self.head + len - 1) % len;
        self.slots[oldest].copy_from(snapshot)?;
        self.head = oldest;
        Ok(())
    }

    /// Grid `age` generations back, if retained
    pub fn get(&self, age: usize) -> Option<&Grid> {
        (age < self.slots.len()).then(|| &self.slots[(self.head + age) % self.slots.len()])
    }

    /// The generation the live grid was evolved from
    pub fn newest(&self) -> &Grid {
        &self.slots[self.head]
    }

    /// Always equal to the capacity
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Newest to oldest
    pub fn iter(&self) -> impl Iterator<Item = &Grid> + '_ {
        let (older, newer) = self.slots.split_at(self.head);
        newer.iter().chain(older.iter())
    }
}
