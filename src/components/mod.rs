//! Application components: header, form panel, export panel, preview.

mod card_form;
mod card_preview;
mod export_panel;
mod header;

pub use card_form::CardForm;
pub use card_preview::CardPreview;
pub use export_panel::ExportPanel;
pub use header::AppHeader;
