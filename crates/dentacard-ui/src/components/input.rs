//! Labelled text input for the card form.

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Input label text
    #[props(default)]
    pub label: Option<String>,
    /// Hint text below the input (e.g. the formatted-date preview)
    #[props(default)]
    pub hint: Option<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, date, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Optional additional CSS classes for the input element
    #[props(default)]
    pub class: Option<String>,
}

/// Text input field with an optional label above and hint line below.
///
/// # Example
///
/// ```rust,ignore
/// Input {
///     value: record().doctor.clone(),
///     oninput: move |v: String| set_field(CardField::Doctor, v),
///     label: "Doctor".to_string(),
///     placeholder: "Doctor's full name".to_string(),
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let oninput = props.oninput;
    let id = props
        .label
        .as_deref()
        .map(field_id)
        .unwrap_or_else(|| "field".to_string());
    let input_class = match props.class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("field-input {extra}"),
        _ => "field-input".to_string(),
    };
    let placeholder = props.placeholder.clone().unwrap_or_default();

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "field-label",
                    r#for: "{id}",
                    "{label}"
                }
            }
            input {
                id: "{id}",
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: "{placeholder}",
                autocomplete: "off",
                oninput: move |evt| oninput.call(evt.value()),
            }
            if let Some(hint) = &props.hint {
                p { class: "field-hint", "{hint}" }
            }
        }
    }
}

/// Derive a stable element id from the label for label association.
fn field_id(label: &str) -> String {
    let slug: String = label
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    format!("field-{slug}")
}
