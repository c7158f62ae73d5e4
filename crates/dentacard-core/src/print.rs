//! Print export: hand the mounted surface to a platform print backend.
//!
//! The platform print path (a webview's native dialog) is an opaque
//! external collaborator. The pipeline only prepares an exact-size page
//! request and refuses to run without a mounted surface; everything
//! else is the backend's business.

use crate::error::CardError;
use crate::geometry::PageSizeMm;
use crate::surface::{CardSide, SurfaceStore};

/// Document title handed to the print spooler.
pub const PRINT_DOCUMENT_TITLE: &str = "WarrantyCard";

/// A prepared print request for one card side.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintJob {
    pub side: CardSide,
    pub page: PageSizeMm,
    /// Page rule for the platform print path: exact physical size, zero
    /// margin, exact colour reproduction.
    pub page_style: String,
}

/// Narrow interface over the platform print dialog.
pub trait PrintBackend {
    fn request_print(&self, job: &PrintJob) -> Result<(), CardError>;
}

/// The `@page` stylesheet for an exact-size, zero-margin page with
/// print-driver colour adjustment disabled.
pub fn page_style(page: PageSizeMm) -> String {
    format!(
        "@page {{ size: {:.1}mm {:.1}mm; margin: 0; }}\n\
         html, body {{ margin: 0; padding: 0; }}\n\
         body {{ -webkit-print-color-adjust: exact; print-color-adjust: exact; }}\n",
        page.width, page.height,
    )
}

/// Print the mounted surface for `side` at exactly `page`.
///
/// Returns `Ok(false)` without touching the backend when no surface is
/// mounted for that side: never print stale or blank content. A page
/// size that differs from the surface's fixed footprint is rejected.
pub fn print_active(
    store: &SurfaceStore,
    side: CardSide,
    page: PageSizeMm,
    backend: &dyn PrintBackend,
) -> Result<bool, CardError> {
    let Some(surface) = store.active(side) else {
        tracing::debug!(side = side.as_str(), "no mounted surface, skipping print");
        return Ok(false);
    };
    if page != surface.size {
        return Err(CardError::PageSizeMismatch {
            requested_width: page.width,
            requested_height: page.height,
            surface_width: surface.size.width,
            surface_height: surface.size.height,
        });
    }

    let job = PrintJob {
        side,
        page,
        page_style: page_style(page),
    };
    backend.request_print(&job)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::surface::RenderSurface;

    #[derive(Default)]
    struct RecordingBackend {
        jobs: RefCell<Vec<PrintJob>>,
    }

    impl PrintBackend for RecordingBackend {
        fn request_print(&self, job: &PrintJob) -> Result<(), CardError> {
            self.jobs.borrow_mut().push(job.clone());
            Ok(())
        }
    }

    fn mounted_store() -> SurfaceStore {
        let mut store = SurfaceStore::new();
        store.mount(RenderSurface {
            side: CardSide::Front,
            size: PageSizeMm::card(),
            svg: "<svg/>".to_string(),
        });
        store
    }

    #[test]
    fn page_style_requests_exact_size_and_colors() {
        let style = page_style(PageSizeMm::card());
        assert!(style.contains("size: 85.6mm 54.0mm"));
        assert!(style.contains("margin: 0"));
        assert!(style.contains("print-color-adjust: exact"));
    }

    #[test]
    fn printing_an_unmounted_side_is_a_silent_no_op() {
        let backend = RecordingBackend::default();
        let printed = print_active(
            &SurfaceStore::new(),
            CardSide::Front,
            PageSizeMm::card(),
            &backend,
        )
        .unwrap();

        assert!(!printed);
        assert!(backend.jobs.borrow().is_empty());
    }

    #[test]
    fn printing_a_mounted_side_hands_the_job_to_the_backend() {
        let backend = RecordingBackend::default();
        let printed =
            print_active(&mounted_store(), CardSide::Front, PageSizeMm::card(), &backend).unwrap();

        assert!(printed);
        let jobs = backend.jobs.borrow();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].side, CardSide::Front);
        assert_eq!(jobs[0].page, PageSizeMm::card());
        assert!(jobs[0].page_style.contains("85.6mm 54.0mm"));
    }

    #[test]
    fn mismatched_page_size_is_rejected() {
        let backend = RecordingBackend::default();
        let err = print_active(
            &mounted_store(),
            CardSide::Front,
            PageSizeMm::new(210.0, 297.0),
            &backend,
        )
        .unwrap_err();

        assert!(matches!(err, CardError::PageSizeMismatch { .. }));
        assert!(backend.jobs.borrow().is_empty());
    }
}
