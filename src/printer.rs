//! Webview print backend.
//!
//! The desktop shell prints by asking the webview for its native print
//! dialog. Page geometry (exact card size, zero margin, exact colours)
//! comes from the `@page` rule the app injects as a global style;
//! `@media print` rules in the stylesheet scope the printed region to
//! the card stage alone.

use dentacard_core::{CardError, PrintBackend, PrintJob, PRINT_DOCUMENT_TITLE};

/// Prints via the surrounding webview's native dialog.
pub struct WebviewPrinter;

impl PrintBackend for WebviewPrinter {
    fn request_print(&self, job: &PrintJob) -> Result<(), CardError> {
        tracing::info!(side = job.side.as_str(), "opening print dialog");
        // The document title names the spooled job. Fire-and-forget:
        // the dialog is modal on the platform side and reports nothing
        // back we could consume.
        let script = format!("document.title = {PRINT_DOCUMENT_TITLE:?}; window.print();");
        let _ = dioxus::document::eval(&script);
        Ok(())
    }
}
