//! Number Item Component
//!
//! One row: a checkbox and its value. Reports toggles upward only.

use leptos::prelude::*;

#[component]
pub fn NumberItem(
    value: u32,
    /// Initial checkbox state
    checked: bool,
    #[prop(into)] on_toggle: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="number-item">
            <input
                class="number-checkbox"
                type="checkbox"
                prop:checked=checked
                on:click=move |_| on_toggle.run(value)
            />
            <span class="number-value">{value}</span>
        </div>
    }
}
