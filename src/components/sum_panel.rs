//! Sum Panel Component
//!
//! Current sum and the send button, disabled while a request is pending.

use leptos::prelude::*;

use crate::board::{sum_of, BoardStateStoreFields};
use crate::context::use_board_context;
use crate::store::{store_submit_sum, use_board_store};

#[component]
pub fn SumPanel() -> impl IntoView {
    let ctx = use_board_context();
    let store = use_board_store();

    // Recomputed from the list on every change, never cached
    let sum = move || sum_of(&store.numbers().read());
    let pending = move || store.status().get().is_pending();

    view! {
        <div class="sum-panel">
            <p class="sum-line">
                "Current sum: "
                <strong class="sum-value">{sum}</strong>
            </p>
            <button
                type="button"
                class="btn btn-primary send-btn"
                disabled=pending
                on:click=move |_| store_submit_sum(store, ctx.transport(), ctx.toaster)
            >
                {move || if pending() { "Sending..." } else { "Send to Superchat" }}
            </button>
        </div>
    }
}
