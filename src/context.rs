//! Board Context
//!
//! Shared config and notifications provided via Leptos Context API.

use leptos::prelude::*;
use leptos_toast::{create_toaster, Toaster};

use crate::commands::HttpTransport;
use crate::config::BoardConfig;

#[derive(Clone, Copy)]
pub struct BoardContext {
    pub config: StoredValue<BoardConfig>,
    pub toaster: Toaster,
}

impl BoardContext {
    pub fn new(config: BoardConfig) -> Self {
        let toaster = create_toaster(config.toast_duration_ms);
        Self {
            config: StoredValue::new(config),
            toaster,
        }
    }

    /// Transport for the configured endpoint
    pub fn transport(&self) -> HttpTransport {
        self.config
            .with_value(|c| HttpTransport::new(c.endpoint.clone(), c.require_ok_status))
    }
}

/// Get the board context
pub fn use_board_context() -> BoardContext {
    use_context::<BoardContext>().expect("BoardContext should be provided")
}
