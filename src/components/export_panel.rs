//! Export panel: side selection, native print, JPEG save.
//!
//! Both actions read the surface registry the render effect keeps
//! current, so they always operate on the latest layout for the
//! selected side. Rasterization and the save dialog run on blocking
//! tasks so the UI stays responsive.

use std::sync::Arc;

use dioxus::prelude::*;

use dentacard_core::{
    export_file_name, print_active, CardSide, PageSizeMm, RasterOptions, Rasterizer, SurfaceStore,
    CARD_HEIGHT_MM, CARD_WIDTH_MM,
};
use dentacard_ui::{Button, ButtonVariant, SideSwitch};

use crate::printer::WebviewPrinter;

#[component]
pub fn ExportPanel(surfaces: Signal<SurfaceStore>, mut active_side: Signal<CardSide>) -> Element {
    let rasterizer = use_context::<Arc<Rasterizer>>();
    let mut exporting = use_signal(|| false);
    let mut status = use_signal(|| Option::<String>::None);

    let on_print = move |_| {
        status.set(None);
        let store = surfaces.read();
        match print_active(&store, active_side(), PageSizeMm::card(), &WebviewPrinter) {
            Ok(true) => {}
            // Nothing mounted for this side yet; never print stale or
            // blank content.
            Ok(false) => tracing::debug!("print skipped, no mounted surface"),
            Err(e) => status.set(Some(format!("Print failed: {e}"))),
        }
    };

    let on_export = move |_| {
        if exporting() {
            return;
        }
        let side = active_side();
        let store = surfaces.read().clone();
        let rasterizer = Arc::clone(&rasterizer);

        exporting.set(true);
        status.set(None);

        spawn(async move {
            let rastered = tokio::task::spawn_blocking(move || {
                rasterizer.rasterize_active(
                    &store,
                    side,
                    CARD_WIDTH_MM,
                    CARD_HEIGHT_MM,
                    &RasterOptions::default(),
                )
            })
            .await;

            match rastered {
                Ok(Ok(Some(image))) => {
                    let name = export_file_name(side, chrono::Utc::now().timestamp_millis());
                    // Save dialog is blocking; run it off the UI task.
                    let picked = tokio::task::spawn_blocking(move || {
                        rfd::FileDialog::new()
                            .set_file_name(&name)
                            .add_filter("JPEG image", &["jpeg", "jpg"])
                            .save_file()
                            .map(|path| (path, image))
                    })
                    .await;

                    match picked {
                        Ok(Some((path, image))) => match std::fs::write(&path, &image.jpeg) {
                            Ok(()) => status.set(Some(format!("Saved {}", path.display()))),
                            Err(e) => status.set(Some(format!("Save failed: {e}"))),
                        },
                        Ok(None) => {
                            // User cancelled the dialog.
                        }
                        Err(e) => status.set(Some(format!("File dialog error: {e}"))),
                    }
                }
                Ok(Ok(None)) => tracing::debug!("export skipped, no mounted surface"),
                Ok(Err(e)) => status.set(Some(format!("Export failed: {e}"))),
                Err(e) => status.set(Some(format!("Export task failed: {e}"))),
            }
            exporting.set(false);
        });
    };

    rsx! {
        section { class: "panel export-panel",
            h2 { class: "panel-title", "Export Options" }

            SideSwitch {
                active: active_side(),
                on_select: move |side| active_side.set(side),
            }

            div { class: "export-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: on_print,
                    if active_side() == CardSide::Front { "Print Front" } else { "Print Back" }
                }
                Button {
                    variant: ButtonVariant::Accent,
                    disabled: exporting(),
                    onclick: on_export,
                    if exporting() { "Encoding..." } else { "Save as JPEG" }
                }
            }

            if let Some(message) = status() {
                p { class: "export-status", "{message}" }
            }
        }
    }
}
