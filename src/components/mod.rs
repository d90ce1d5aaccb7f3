//! UI Components
//!
//! Leptos components making up the board.

mod number_item;
mod board_actions;
mod sum_panel;
mod delete_numbers_dialog;

pub use number_item::NumberItem;
pub use board_actions::BoardActions;
pub use sum_panel::SumPanel;
pub use delete_numbers_dialog::DeleteNumbersDialog;
