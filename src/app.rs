//! Root application component.
//!
//! Owns the single [`CardRecord`] signal, the active-side selection and
//! the surface registry. A render effect re-mounts both card surfaces
//! whenever the record changes, so export and print always read the
//! layout the preview is showing.

use std::sync::Arc;

use dioxus::prelude::*;

use dentacard_core::{page_style, render, CardRecord, CardSide, PageSizeMm, Rasterizer, SurfaceStore};

use crate::components::{AppHeader, CardForm, CardPreview, ExportPanel};
use crate::theme::GLOBAL_STYLES;

#[component]
pub fn App() -> Element {
    let record = use_signal(|| CardRecord::new(chrono::Local::now().date_naive()));
    let active_side = use_signal(|| CardSide::Front);
    let mut surfaces = use_signal(SurfaceStore::new);

    // The rasterizer scans system fonts once; share it with the export
    // panel through context.
    use_context_provider(|| Arc::new(Rasterizer::new()));

    // Re-render both card surfaces on every edit.
    use_effect(move || {
        let current = record();
        let mut store = surfaces.write();
        store.mount(render(&current, CardSide::Front));
        store.mount(render(&current, CardSide::Back));
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        style { {page_style(PageSizeMm::card())} }

        div { class: "app-shell",
            AppHeader {}

            div { class: "layout",
                div { class: "side-pane no-print",
                    CardForm { record }
                    ExportPanel { surfaces, active_side }
                }
                CardPreview { surfaces, active_side }
            }
        }
    }
}
