//! Card form panel.
//!
//! One labelled input per card field, the four-quadrant tooth-number
//! grid, a completion meter and the guarded reset. Every edit goes
//! through the core's pure `update`, which sanitizes quadrant input;
//! the app's render effect re-mounts the surfaces afterwards.

use dioxus::prelude::*;

use dentacard_core::{format_date, update, CardField, CardRecord};
use dentacard_ui::{Button, ButtonVariant, ConfirmDialog, Input};

const TEXT_FIELDS: [CardField; 5] = [
    CardField::SerialNumber,
    CardField::Doctor,
    CardField::Patient,
    CardField::WorkType,
    CardField::WarrantyPeriod,
];

fn placeholder(field: CardField) -> &'static str {
    match field {
        CardField::Date => "Select date",
        CardField::SerialNumber => "e.g., 2025-001",
        CardField::Doctor => "Doctor's full name",
        CardField::Patient => "Patient's full name",
        CardField::WorkType => "e.g., Crown, Bridge, Implant",
        CardField::WarrantyPeriod => "e.g., 2 years, 5 years",
        _ => "e.g., 11,12",
    }
}

#[component]
pub fn CardForm(mut record: Signal<CardRecord>) -> Element {
    let mut show_reset = use_signal(|| false);

    rsx! {
        section { class: "panel form-panel",
            div { class: "panel-intro",
                h2 { class: "panel-title", "Card Details" }
                p { class: "panel-subtitle", "Fill in the details below to create your warranty card" }
            }

            div { class: "form-grid",
                Input {
                    value: record().date.clone(),
                    oninput: move |value: String| record.set(update(&record(), CardField::Date, &value)),
                    label: CardField::Date.label().to_string(),
                    input_type: "date".to_string(),
                    placeholder: placeholder(CardField::Date).to_string(),
                    hint: format!("Formatted: {}", format_date(&record().date)),
                }
                for field in TEXT_FIELDS {
                    Input {
                        value: record().field(field).to_string(),
                        oninput: move |value: String| record.set(update(&record(), field, &value)),
                        label: field.label().to_string(),
                        placeholder: placeholder(field).to_string(),
                    }
                }
            }

            div { class: "quadrant-section",
                p { class: "quadrant-title", "Tooth Numbers (by quadrant)" }
                div { class: "quadrant-grid",
                    for field in CardField::QUADRANTS {
                        div { class: "quadrant-cell",
                            label { class: "quadrant-label", {field.label()} }
                            input {
                                class: "quadrant-input",
                                r#type: "text",
                                value: "{record().field(field)}",
                                placeholder: "e.g., 11,12",
                                autocomplete: "off",
                                oninput: move |evt| record.set(update(&record(), field, &evt.value())),
                            }
                        }
                    }
                }
                p { class: "quadrant-hint", "Enter tooth numbers separated by commas (e.g., 11,12,13)" }
            }

            div { class: "form-footer",
                Button {
                    variant: ButtonVariant::Danger,
                    onclick: move |_| show_reset.set(true),
                    "Reset All Fields"
                }
            }

            CompletionMeter { record }

            ConfirmDialog {
                open: show_reset(),
                title: "Reset all fields?".to_string(),
                message: "This clears every field and restores today's date.".to_string(),
                confirm_label: "Reset".to_string(),
                on_confirm: move |_| {
                    record.set(CardRecord::new(chrono::Local::now().date_naive()));
                    show_reset.set(false);
                },
                on_cancel: move |_| show_reset.set(false),
            }
        }
    }
}

/// "n of 10 fields completed" plus a progress track.
#[component]
fn CompletionMeter(record: Signal<CardRecord>) -> Element {
    let completed = record().completed_fields();
    let total = CardField::ALL.len();
    let pct = completed * 100 / total;

    rsx! {
        div { class: "completion",
            p { class: "completion-text",
                if completed == 0 {
                    "No fields completed yet"
                } else {
                    "{completed} of {total} fields completed"
                }
            }
            div { class: "completion-track",
                div { class: "completion-fill", style: "width: {pct}%" }
            }
        }
    }
}
