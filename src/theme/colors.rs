//! Color constants for the clinical light palette.

#![allow(dead_code)]

// === BLUES (branding, primary actions) ===
pub const BLUE_DARK: &str = "#1e40af";
pub const BLUE: &str = "#2563eb";
pub const BLUE_SOFT: &str = "#60a5fa";
pub const BLUE_PALE: &str = "#dbeafe";

// === VIOLET (export accent) ===
pub const VIOLET: &str = "#7c3aed";
pub const VIOLET_DARK: &str = "#6d28d9";

// === SURFACES ===
pub const PAGE_BG: &str = "#eef2ff";
pub const PANEL_BG: &str = "#ffffff";
pub const PANEL_BORDER: &str = "#dbeafe";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#1f2937";
pub const TEXT_SECONDARY: &str = "#4b5563";
pub const TEXT_MUTED: &str = "#6b7280";

// === SEMANTIC ===
pub const DANGER: &str = "#dc2626";
pub const DANGER_SOFT: &str = "#fef2f2";
