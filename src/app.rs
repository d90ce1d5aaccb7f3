//! Number Board App
//!
//! Top-level component: owns the board store and the selection, wires the
//! list, the actions, the sum panel and the delete dialog together.

use leptos::prelude::*;
use leptos_toast::ToastStack;
use reactive_stores::Store;

use crate::board::{BoardState, BoardStateStoreFields};
use crate::components::{BoardActions, DeleteNumbersDialog, NumberItem, SumPanel};
use crate::config::BoardConfig;
use crate::context::BoardContext;
use crate::selection::SelectionSet;
use crate::store::{fresh_numbers, store_confirm_delete, store_refresh};

#[component]
pub fn NumberBoard(config: BoardConfig) -> impl IntoView {
    let ctx = BoardContext::new(config);
    provide_context(ctx);

    let initial = ctx.config.with_value(fresh_numbers);
    log::info!("[BOARD] Mounted with {:?}", initial);
    let store = Store::new(BoardState::new(initial));
    provide_context(store);

    // Kept out of the reactive graph so a toggle never re-renders the list
    let selection = StoredValue::new(SelectionSet::new());

    let on_toggle = move |value: u32| {
        if let Some((selected, count)) = selection.try_update_value(|sel| (sel.toggle(value), sel.len())) {
            log::debug!("[BOARD] Toggle {} -> {} ({} selected)", value, selected, count);
        }
    };

    // Row key includes the refresh generation so old checkboxes are never reused
    let rows = move || {
        let generation = store.generation().get();
        store
            .numbers()
            .get()
            .into_iter()
            .enumerate()
            .map(|(index, value)| (generation, index, value))
            .collect::<Vec<_>>()
    };

    let dialog_open = Signal::derive(move || store.gate().get().is_open());

    view! {
        <div class="board-layout">
            <main class="board">
                <h1 class="board-title">"Random Numbers List"</h1>
                <p class="board-hint">
                    "Click on a number's checkbox to select / deselect it."
                    <br />
                    "You can delete all selected numbers or refresh the list."
                </p>

                <div class="divider" />

                <ul class="number-list">
                    <For
                        each=rows
                        key=|row| *row
                        children=move |(_, _, value)| {
                            let checked = selection.with_value(|sel| sel.contains(value));
                            view! {
                                <li class="number-row">
                                    <NumberItem value=value checked=checked on_toggle=on_toggle />
                                </li>
                            }
                        }
                    />
                </ul>

                <BoardActions
                    on_delete=move |_| store.update(BoardState::request_delete)
                    on_refresh=move |_| store_refresh(&store, selection, ctx.config.with_value(fresh_numbers))
                />

                <SumPanel />
            </main>

            <DeleteNumbersDialog
                open=dialog_open
                on_confirm=move |_| store_confirm_delete(&store, selection)
                on_cancel=move |_| store.update(BoardState::cancel_delete)
            />

            <ToastStack toaster=ctx.toaster />
        </div>
    }
}
