//! Front/back side switch for the preview and export target.

use dentacard_core::CardSide;
use dioxus::prelude::*;

/// Segmented two-way switch selecting the active card side.
#[component]
pub fn SideSwitch(
    /// Currently selected side
    active: CardSide,
    /// Called with the newly selected side
    on_select: EventHandler<CardSide>,
) -> Element {
    rsx! {
        div { class: "side-switch",
            for side in [CardSide::Front, CardSide::Back] {
                button {
                    class: if side == active { "side-tab active" } else { "side-tab" },
                    r#type: "button",
                    onclick: move |_| on_select.call(side),
                    {side_label(side)}
                }
            }
        }
    }
}

fn side_label(side: CardSide) -> &'static str {
    match side {
        CardSide::Front => "Front Side",
        CardSide::Back => "Back Side",
    }
}
