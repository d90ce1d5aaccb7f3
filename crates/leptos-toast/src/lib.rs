//! Leptos Toast Utilities
//!
//! Transient notifications for Leptos apps.
//! A bounded queue holds the visible toasts; each one is dismissed
//! automatically after a fixed duration or when clicked.

use std::collections::VecDeque;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Toast severity
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastLevel {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastLevel {
    /// CSS modifier class for this level
    pub fn class(self) -> &'static str {
        match self {
            Self::Info => "toast toast-info",
            Self::Success => "toast toast-success",
            Self::Error => "toast toast-error",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Info => "ℹ",
            Self::Success => "✓",
            Self::Error => "✗",
        }
    }
}

/// A single visible toast
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub level: ToastLevel,
    pub message: String,
}

/// Ordered set of visible toasts, oldest first.
#[derive(Clone, Debug)]
pub struct ToastQueue {
    next_id: u32,
    max_visible: usize,
    toasts: VecDeque<Toast>,
}

impl ToastQueue {
    pub fn new(max_visible: usize) -> Self {
        Self {
            next_id: 1,
            max_visible: max_visible.max(1),
            toasts: VecDeque::new(),
        }
    }

    /// Push a toast and return its id. Drops the oldest toast when full.
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.toasts.push_back(Toast { id, level, message: message.into() });
        while self.toasts.len() > self.max_visible {
            self.toasts.pop_front();
        }
        id
    }

    /// Remove a toast by id. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u32) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }
}

/// Toast state handle, cheap to copy into closures
#[derive(Clone, Copy)]
pub struct Toaster {
    pub queue: RwSignal<ToastQueue>,
    duration_ms: u32,
}

/// Default number of toasts shown at once
const MAX_VISIBLE: usize = 3;

pub fn create_toaster(duration_ms: u32) -> Toaster {
    Toaster {
        queue: RwSignal::new(ToastQueue::new(MAX_VISIBLE)),
        duration_ms,
    }
}

impl Toaster {
    /// Show a toast and schedule its dismissal
    pub fn push(&self, level: ToastLevel, message: impl Into<String>) -> Option<u32> {
        let message = message.into();
        log::debug!("[TOAST] {:?}: {}", level, message);
        let id = self.queue.try_update(|q| q.push(level, message))?;

        if self.duration_ms > 0 {
            let queue = self.queue;
            // Queue may be disposed by the time the timer fires
            Timeout::new(self.duration_ms, move || {
                let _ = queue.try_update(|q| q.dismiss(id));
            })
            .forget();
        }
        Some(id)
    }

    pub fn dismiss(&self, id: u32) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }
}

/// Fixed-position stack of active toasts
#[component]
pub fn ToastStack(toaster: Toaster) -> impl IntoView {
    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || toaster.queue.with(|q| q.iter().cloned().collect::<Vec<_>>())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.level.class() on:click=move |_| toaster.dismiss(id)>
                            <span class="toast-icon">{toast.level.icon()}</span>
                            <span class="toast-message">{toast.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
