//! Front side: the filled-in warranty form.

use std::fmt::Write;

use super::{
    card_base, svg_open, tooth_icon, xml_escape, BLUE_DARK, BLUE_MID, BLUE_PALE, GRAY_BORDER,
    GRAY_LABEL, GRAY_NOTE, GRAY_RULE, INK,
};
use crate::format::{display_quadrant, display_value, format_date};
use crate::geometry::PageSizeMm;
use crate::record::{CardField, CardRecord};

// Content area to the right of the title stripe.
const CONTENT_LEFT: f64 = 9.2;
const CONTENT_RIGHT: f64 = 83.0;

const NOTE_PRIMARY: &str = "This warranty covers defects in materials and workmanship. \
                            Present this card for any warranty claims.";
const NOTE_SECONDARY: &str = "Terms and conditions apply. Not valid without official stamp.";

pub(crate) fn front_svg(record: &CardRecord, size: PageSizeMm) -> String {
    let mut s = svg_open(size);
    s.push_str(
        "<defs><linearGradient id=\"stripe\" x1=\"0\" y1=\"0\" x2=\"0\" y2=\"1\">\
         <stop offset=\"0\" stop-color=\"#1e40af\"/>\
         <stop offset=\"1\" stop-color=\"#2563eb\"/>\
         </linearGradient></defs>\n",
    );
    s.push_str(&card_base(size));

    // Title stripe down the left edge, text reading bottom-up.
    let _ = write!(
        s,
        "<rect x=\"0.15\" y=\"0.15\" width=\"7\" height=\"{}\" fill=\"url(#stripe)\"/>\n\
         <text transform=\"translate(4.7 {}) rotate(-90)\" text-anchor=\"middle\" \
         fill=\"#ffffff\" font-size=\"2.4\" font-weight=\"600\" letter-spacing=\"0.6\">\
         WARRANTY CARD</text>\n",
        size.height - 0.3,
        size.height / 2.0,
    );

    // Clinic header with the logo top-right.
    let _ = write!(
        s,
        "<text x=\"{x}\" y=\"6.4\" fill=\"{blue}\" font-size=\"4\" font-weight=\"bold\" \
         letter-spacing=\"0.3\">SSDC</text>\n\
         <text x=\"{x}\" y=\"9.2\" fill=\"{blue}\" font-size=\"1.9\">QUALITY FOR BETTER TEETH</text>\n\
         <rect x=\"{x}\" y=\"10.2\" width=\"11\" height=\"0.25\" fill=\"{pale}\"/>\n",
        x = CONTENT_LEFT,
        blue = BLUE_DARK,
        pale = BLUE_PALE,
    );
    s.push_str(&tooth_icon(77.6, 2.4, 4.6, BLUE_MID, None));

    // Labelled rows on dotted fill-in rules. Two columns, then the
    // full-width work-type row and the warranty row.
    field_row(&mut s, CONTENT_LEFT, 44.5, 14.8, "Date:", &format_date(&record.date));
    field_row(&mut s, 47.0, CONTENT_RIGHT, 14.8, "SR.NO:", display_value(&record.serial_number));
    field_row(&mut s, CONTENT_LEFT, 44.5, 19.2, "Doctor:", display_value(&record.doctor));
    field_row(&mut s, 47.0, CONTENT_RIGHT, 19.2, "Patient:", display_value(&record.patient));
    field_row(&mut s, CONTENT_LEFT, CONTENT_RIGHT, 23.6, "Work Type:", display_value(&record.work_type));
    field_row(&mut s, CONTENT_LEFT, 44.5, 28.0, "Warranty:", display_value(&record.warranty_period));

    tooth_grid(&mut s, record);
    notes(&mut s);
    signatures(&mut s);

    s.push_str("</svg>\n");
    s
}

/// One labelled value sitting on a dotted baseline rule.
fn field_row(s: &mut String, x0: f64, x1: f64, baseline: f64, label: &str, value: &str) {
    let value_x = x0 + 12.5;
    let _ = write!(
        s,
        "<text x=\"{x0}\" y=\"{baseline}\" fill=\"{label_color}\" font-size=\"2.4\" \
         font-weight=\"600\">{label}</text>\n\
         <text x=\"{value_x}\" y=\"{baseline}\" fill=\"{ink}\" font-size=\"2.4\">{value}</text>\n\
         <line x1=\"{value_x}\" y1=\"{rule_y}\" x2=\"{x1}\" y2=\"{rule_y}\" stroke=\"{rule}\" \
         stroke-width=\"0.18\" stroke-dasharray=\"0.5 0.7\"/>\n",
        x0 = x0,
        x1 = x1,
        baseline = baseline,
        label = label,
        label_color = GRAY_LABEL,
        value_x = value_x,
        ink = INK,
        value = xml_escape(value),
        rule_y = baseline + 0.9,
        rule = GRAY_RULE,
    );
}

/// The four-quadrant tooth-number grid: a header cell and a value cell
/// per quadrant.
fn tooth_grid(s: &mut String, record: &CardRecord) {
    let grid_left = 21.7;
    let grid_top = 30.4;
    let grid_height = 7.0;
    let header_height = 3.4;
    let column = (CONTENT_RIGHT - grid_left) / 4.0;

    let _ = write!(
        s,
        "<text x=\"{x}\" y=\"{y}\" fill=\"{label}\" font-size=\"2.4\" font-weight=\"600\">Tooth No:</text>\n",
        x = CONTENT_LEFT,
        y = grid_top + 4.4,
        label = GRAY_LABEL,
    );
    let _ = write!(
        s,
        "<rect x=\"{left}\" y=\"{top}\" width=\"{width}\" height=\"{height}\" rx=\"0.4\" \
         fill=\"none\" stroke=\"{border}\" stroke-width=\"0.2\"/>\n\
         <line x1=\"{left}\" y1=\"{mid}\" x2=\"{right}\" y2=\"{mid}\" stroke=\"{border}\" stroke-width=\"0.2\"/>\n",
        left = grid_left,
        top = grid_top,
        width = CONTENT_RIGHT - grid_left,
        height = grid_height,
        border = GRAY_BORDER,
        mid = grid_top + header_height,
        right = CONTENT_RIGHT,
    );

    for (i, quadrant) in CardField::QUADRANTS.iter().enumerate() {
        let x0 = grid_left + column * i as f64;
        if i > 0 {
            let _ = write!(
                s,
                "<line x1=\"{x0}\" y1=\"{top}\" x2=\"{x0}\" y2=\"{bottom}\" stroke=\"{border}\" stroke-width=\"0.2\"/>\n",
                x0 = x0,
                top = grid_top,
                bottom = grid_top + grid_height,
                border = GRAY_BORDER,
            );
        }
        let center = x0 + column / 2.0;
        let _ = write!(
            s,
            "<text x=\"{center}\" y=\"{head_y}\" text-anchor=\"middle\" fill=\"{label}\" \
             font-size=\"1.7\">{name}</text>\n\
             <text x=\"{center}\" y=\"{value_y}\" text-anchor=\"middle\" fill=\"{ink}\" \
             font-size=\"1.9\">{value}</text>\n",
            center = center,
            head_y = grid_top + 2.3,
            label = GRAY_LABEL,
            name = quadrant.label(),
            value_y = grid_top + header_height + 2.5,
            ink = INK,
            value = xml_escape(display_quadrant(record.field(*quadrant))),
        );
    }
}

fn notes(s: &mut String) {
    let center = (CONTENT_LEFT + CONTENT_RIGHT) / 2.0;
    let _ = write!(
        s,
        "<line x1=\"{left}\" y1=\"40.4\" x2=\"{right}\" y2=\"40.4\" stroke=\"{border}\" \
         stroke-width=\"0.18\" stroke-dasharray=\"1 0.8\"/>\n",
        left = CONTENT_LEFT,
        right = CONTENT_RIGHT,
        border = GRAY_BORDER,
    );
    let mut y = 42.5;
    for line in super::wrap_text(NOTE_PRIMARY, 62) {
        let _ = write!(
            s,
            "<text x=\"{center}\" y=\"{y}\" text-anchor=\"middle\" fill=\"{note}\" font-size=\"1.7\">{line}</text>\n",
            center = center,
            y = y,
            note = GRAY_NOTE,
        );
        y += 2.2;
    }
    let _ = write!(
        s,
        "<text x=\"{center}\" y=\"{y}\" text-anchor=\"middle\" fill=\"{faint}\" font-size=\"1.6\">{note}</text>\n",
        center = center,
        y = y + 0.2,
        faint = super::GRAY_FAINT,
        note = NOTE_SECONDARY,
    );
}

fn signatures(s: &mut String) {
    for (x0, x1, anchor_x, label) in [
        (CONTENT_LEFT, CONTENT_LEFT + 20.0, CONTENT_LEFT, "Patient Signature"),
        (CONTENT_RIGHT - 20.0, CONTENT_RIGHT, CONTENT_RIGHT - 20.0, "Doctor Signature"),
    ] {
        let _ = write!(
            s,
            "<line x1=\"{x0}\" y1=\"50.0\" x2=\"{x1}\" y2=\"50.0\" stroke=\"{rule}\" \
             stroke-width=\"0.18\" stroke-dasharray=\"0.5 0.7\"/>\n\
             <text x=\"{anchor_x}\" y=\"52.3\" fill=\"{note}\" font-size=\"1.7\">{label}</text>\n",
            x0 = x0,
            x1 = x1,
            rule = GRAY_RULE,
            anchor_x = anchor_x,
            note = GRAY_NOTE,
            label = label,
        );
    }
}
