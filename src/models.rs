//! Board Models
//!
//! Small value types shared by the board and its components.

use leptos_toast::ToastLevel;
use serde::Serialize;

/// Outstanding network call state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestStatus {
    #[default]
    Idle,
    Pending,
}

impl RequestStatus {
    pub fn is_pending(self) -> bool {
        self == Self::Pending
    }

    /// Move to Pending. Returns false if a request is already outstanding.
    pub fn begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = Self::Pending;
        true
    }

    pub fn finish(&mut self) {
        *self = Self::Idle;
    }
}

/// Request body for the sum endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SumPayload {
    pub sum: u64,
}

/// User-facing outcome of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    SumSent,
    SumFailed,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::SumSent => "Sum sent successfully!!",
            Notice::SumFailed => "Error sending sum...",
        }
    }

    pub fn level(self) -> ToastLevel {
        match self {
            Notice::SumSent => ToastLevel::Success,
            Notice::SumFailed => ToastLevel::Error,
        }
    }
}
