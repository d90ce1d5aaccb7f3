//! Confirmation Gate
//!
//! Two-state dialog guarding the destructive delete.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfirmGate {
    #[default]
    Closed,
    Open,
}

impl ConfirmGate {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Delete button pressed
    pub fn request(&mut self) {
        *self = Self::Open;
    }

    pub fn cancel(&mut self) {
        *self = Self::Closed;
    }

    /// Close the gate. Returns true if it was open, i.e. the deletion should run.
    pub fn confirm(&mut self) -> bool {
        let was_open = self.is_open();
        *self = Self::Closed;
        was_open
    }
}
