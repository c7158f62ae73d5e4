//! Visual theme: clinical light palette and the global stylesheet.

mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
