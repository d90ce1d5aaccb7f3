//! Selection Tracker
//!
//! Set of currently checked values, independent of display order.

use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    values: HashSet<u32>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `value`. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, value: u32) -> bool {
        if self.values.remove(&value) {
            false
        } else {
            self.values.insert(value);
            true
        }
    }

    pub fn contains(&self, value: u32) -> bool {
        self.values.contains(&value)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
