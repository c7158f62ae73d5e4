//! Error types for the card export pipeline

use thiserror::Error;

/// Main error type for card rendering and export operations
#[derive(Error, Debug)]
pub enum CardError {
    /// Surface markup could not be parsed back into a vector tree
    #[error("SVG parse error: {0}")]
    SvgParse(String),

    /// Pixel buffer allocation or conversion failed
    #[error("Pixmap error: {0}")]
    Pixmap(String),

    /// JPEG encoding failed
    #[error("Encode error: {0}")]
    Encode(#[from] image::ImageError),

    /// Requested page size differs from the card's fixed footprint
    #[error("Page size {requested_width}x{requested_height}mm does not match the {surface_width}x{surface_height}mm card footprint")]
    PageSizeMismatch {
        requested_width: f64,
        requested_height: f64,
        surface_width: f64,
        surface_height: f64,
    },

    /// The platform print backend rejected the job
    #[error("Print request failed: {0}")]
    Print(String),

    /// A side tag was neither "front" nor "back"
    #[error("Unknown card side: {0}")]
    UnknownSide(String),
}
