//! Board Actions Component
//!
//! Delete and Refresh buttons under the list.

use leptos::prelude::*;

#[component]
pub fn BoardActions(
    #[prop(into)] on_delete: Callback<()>,
    #[prop(into)] on_refresh: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="board-actions">
            <button
                type="button"
                class="btn btn-danger"
                aria-label="Delete selected numbers"
                on:click=move |_| on_delete.run(())
            >
                "🗑 Delete"
            </button>
            <button
                type="button"
                class="btn btn-dark"
                aria-label="Refresh numbers"
                on:click=move |_| on_refresh.run(())
            >
                "⟳ Refresh"
            </button>
        </div>
    }
}
