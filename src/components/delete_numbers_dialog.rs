//! Delete Numbers Dialog Component
//!
//! Modal confirmation before the selected numbers are removed.
//! Escape and backdrop clicks count as cancel.

use leptos::html::Button;
use leptos::prelude::*;

/// Confirmation modal
///
/// # Arguments
/// * `open` - Whether the dialog is shown
/// * `on_confirm` - Runs the deletion; the caller closes the dialog
/// * `on_cancel` - Closes without deleting
#[component]
pub fn DeleteNumbersDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let cancel_ref = NodeRef::<Button>::new();

    // Cancel is the safe default, give it focus when opened
    Effect::new(move |_| {
        if open.get() {
            if let Some(button) = cancel_ref.get() {
                let _ = button.focus();
            }
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_cancel.run(());
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
                <div
                    class="dialog-panel"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="delete-numbers-title"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <div class="dialog-body">
                        <div class="dialog-icon">"⚠"</div>
                        <div>
                            <h3 id="delete-numbers-title" class="dialog-title">"Delete numbers"</h3>
                            <p class="dialog-text">
                                "Are you sure you want to delete all the selected numbers? This action cannot be undone."
                            </p>
                        </div>
                    </div>
                    <div class="dialog-actions">
                        <button
                            type="button"
                            class="btn btn-danger"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_confirm.run(());
                            }
                        >
                            "Delete"
                        </button>
                        <button
                            type="button"
                            class="btn btn-secondary"
                            node_ref=cancel_ref
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_cancel.run(());
                            }
                        >
                            "Cancel"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
