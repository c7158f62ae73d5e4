//! Dental warranty card generator - UI components
//!
//! Reusable Dioxus components for the clinical form aesthetic: labelled
//! inputs, button variants, the front/back side switch and the
//! confirmation dialog. Styling is class-based; the host app ships the
//! matching stylesheet.

pub mod components;

pub use components::*;
