//! Components for the warranty card form and export panel.

mod button;
mod confirm_dialog;
mod input;
mod side_switch;

pub use button::{Button, ButtonVariant};
pub use confirm_dialog::ConfirmDialog;
pub use input::Input;
pub use side_switch::SideSwitch;
