//! Board Store
//!
//! `BoardState` wrapped in a reactive_stores `Store` for field-level
//! reactivity, plus the helpers components call to mutate it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_toast::Toaster;
use reactive_stores::Store;

use crate::board::BoardState;
use crate::commands::SumTransport;
use crate::config::BoardConfig;
use crate::generator::{generate_numbers, JsRandom};
use crate::selection::SelectionSet;

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

/// Draw a fresh list according to the config
pub fn fresh_numbers(config: &BoardConfig) -> Vec<u32> {
    generate_numbers(config.policy, config.count, config.max_value, &mut JsRandom)
}

// ========================
// Store Helper Functions
// ========================

/// Replace the list with `numbers`, clearing the selection
pub fn store_refresh(store: &BoardStore, selection: StoredValue<SelectionSet>, numbers: Vec<u32>) {
    log::info!("[BOARD] Refreshed: {:?}", numbers);
    selection.update_value(|sel| store.update(|state| state.refresh(numbers, sel)));
}

/// Apply the confirmed delete
pub fn store_confirm_delete(store: &BoardStore, selection: StoredValue<SelectionSet>) {
    let removed = selection
        .try_update_value(|sel| {
            if sel.is_empty() {
                log::debug!("[BOARD] Confirmed with nothing selected");
            }
            store.try_update(|state| state.confirm_delete(sel))
        })
        .flatten()
        .unwrap_or_default();
    log::info!("[BOARD] Deleted {:?}", removed);
}

/// Send the current sum unless a submission is already pending.
/// The outcome is reported through a toast.
pub fn store_submit_sum<T>(store: BoardStore, transport: T, toaster: Toaster)
where
    T: SumTransport + 'static,
{
    let Some(sum) = store.try_update(|state| state.begin_submission()).flatten() else {
        log::debug!("[SUBMIT] Ignored, request already pending");
        return;
    };

    log::info!("[SUBMIT] Sending sum={}", sum);
    spawn_local(async move {
        let result = transport.post_sum(sum).await;
        // Board may have been unmounted while the request was in flight
        if let Some(notice) = store.try_update(|state| state.finish_submission(&result)) {
            toaster.push(notice.level(), notice.message());
        }
    });
}
