//! Application header bar.

use dioxus::prelude::*;

#[component]
pub fn AppHeader() -> Element {
    rsx! {
        header { class: "app-header no-print",
            div { class: "header-badge", ToothIcon {} }
            div { class: "header-titles",
                h1 { class: "header-title", "Dental Warranty Card Generator" }
                p { class: "header-subtitle", "Create professional dental warranty cards" }
            }
        }
    }
}

/// The clinic tooth glyph, outline style.
#[component]
fn ToothIcon() -> Element {
    rsx! {
        svg {
            width: "22",
            height: "22",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M22 10V14C22 17 20 19 17 19H7C4 19 2 17 2 14V10C2 7 4 5 7 5H17C20 5 22 7 22 10Z" }
            path { d: "M7 13C7 13 6.3 13.4 5.5 13.4C4.7 13.4 4 13 4 13" }
            path { d: "M10 10C10 10 9.3 10.4 8.5 10.4C7.7 10.4 7 10 7 10" }
            path { d: "M10 14C10 14 9.3 14.4 8.5 14.4C7.7 14.4 7 14 7 14" }
            path { d: "M17 10C17 10 16.3 10.4 15.5 10.4C14.7 10.4 14 10 14 10" }
            path { d: "M17 14C17 14 16.3 14.4 15.5 14.4C14.7 14.4 14 14 14 14" }
        }
    }
}
