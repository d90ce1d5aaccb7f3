//! Number Board Frontend Entry Point

mod models;
mod config;
mod generator;
mod selection;
mod gate;
mod board;
mod commands;
mod context;
mod store;
mod components;
mod app;

use app::NumberBoard;
use config::BoardConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = BoardConfig::default();
    if let Err(e) = console_log::init_with_level(config.log_level) {
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }

    mount_to_body(move || view! { <NumberBoard config=config /> });
}
