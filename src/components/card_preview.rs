//! Card preview pane.
//!
//! Shows the mounted surface for the selected side at its natural
//! physical size. The inner `card-stage` element is the only region the
//! print stylesheet leaves visible, so what prints is exactly what this
//! pane embeds.

use dioxus::prelude::*;

use dentacard_core::{CardSide, SurfaceStore};

#[component]
pub fn CardPreview(surfaces: Signal<SurfaceStore>, active_side: Signal<CardSide>) -> Element {
    let side = active_side();
    let store = surfaces.read();
    let surface = store.active(side);

    rsx! {
        section { class: "panel preview-panel",
            h2 { class: "panel-title no-print", "Card Preview" }

            div { class: "preview-frame",
                if let Some(surface) = surface {
                    div {
                        class: "card-stage",
                        dangerous_inner_html: "{surface.svg}",
                    }
                } else {
                    p { class: "preview-empty no-print", "Rendering card..." }
                }
            }

            p { class: "preview-caption no-print",
                "Standard ID card size: 85.6mm × 54.0mm"
            }
        }
    }
}
