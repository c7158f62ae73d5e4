//! Confirmation dialog.
//!
//! Modal overlay asking the user to confirm a destructive action.
//! Clicking the overlay or Cancel declines; only the confirm button
//! proceeds.

use dioxus::prelude::*;

use super::{Button, ButtonVariant};

/// Confirmation dialog
///
/// # Example
///
/// ```rust,ignore
/// ConfirmDialog {
///     open: show_reset(),
///     title: "Reset all fields?".to_string(),
///     message: "This clears every field and restores today's date.".to_string(),
///     confirm_label: "Reset".to_string(),
///     on_confirm: move |_| reset_record(),
///     on_cancel: move |_| show_reset.set(false),
/// }
/// ```
#[component]
pub fn ConfirmDialog(
    /// Whether the dialog is visible
    open: bool,
    /// Dialog headline
    title: String,
    /// Explanatory text under the headline
    message: String,
    /// Label for the confirming button
    #[props(default = "Confirm".to_string())]
    confirm_label: String,
    /// Label for the cancel button
    #[props(default = "Cancel".to_string())]
    cancel_label: String,
    /// Called when the user confirms
    on_confirm: EventHandler<()>,
    /// Called when the user cancels or dismisses
    on_cancel: EventHandler<()>,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_cancel.call(()),

            div {
                class: "confirm-dialog",
                onclick: move |e| e.stop_propagation(),

                h2 { class: "dialog-title", "{title}" }
                p { class: "dialog-message", "{message}" }

                div { class: "dialog-actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_cancel.call(()),
                        "{cancel_label}"
                    }
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
