//! Dental warranty card generator - core library
//!
//! Everything the desktop app and the CLI share: the editable
//! [`CardRecord`], the deterministic card renderer (record -> SVG
//! [`RenderSurface`] at the fixed 85.6mm x 54.0mm ID-card footprint),
//! and the export pipeline that turns a mounted surface into a native
//! print job or a JPEG at exact physical scale.
//!
//! ## Quick start
//!
//! ```ignore
//! use dentacard_core::{
//!     render, CardRecord, CardSide, RasterOptions, Rasterizer, SurfaceStore,
//! };
//!
//! let record = CardRecord::new(chrono::Local::now().date_naive());
//! let mut surfaces = SurfaceStore::new();
//! surfaces.mount(render(&record, CardSide::Front));
//!
//! let rasterizer = Rasterizer::new();
//! let image = rasterizer.rasterize_active(
//!     &surfaces,
//!     CardSide::Front,
//!     dentacard_core::CARD_WIDTH_MM,
//!     dentacard_core::CARD_HEIGHT_MM,
//!     &RasterOptions::default(),
//! )?;
//! ```

pub mod error;
pub mod export;
pub mod format;
pub mod geometry;
pub mod print;
pub mod record;
pub mod render;
pub mod surface;

// Re-exports
pub use error::CardError;
pub use export::{export_file_name, RasterImage, RasterOptions, Rasterizer};
pub use format::{format_date, FIELD_PLACEHOLDER, QUADRANT_PLACEHOLDER};
pub use geometry::{mm_to_css_px, PageSizeMm, CARD_HEIGHT_MM, CARD_WIDTH_MM};
pub use print::{page_style, print_active, PrintBackend, PrintJob, PRINT_DOCUMENT_TITLE};
pub use record::{sanitize_quadrant, update, CardField, CardRecord};
pub use render::render;
pub use surface::{CardSide, RenderSurface, SurfaceStore};
