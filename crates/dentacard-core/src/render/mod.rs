//! Card renderer: `CardRecord` -> [`RenderSurface`].
//!
//! Each side of the card is rendered as a standalone SVG document whose
//! user units are millimetres (`viewBox="0 0 85.6 54"`), so the markup
//! itself carries the physical footprint. The desktop preview embeds the
//! markup directly; the export pipeline parses it back and rasterizes.
//! Rendering is deterministic and has no side effects.

mod back;
mod front;

pub use back::WARRANTY_TERMS;

use crate::geometry::PageSizeMm;
use crate::record::CardRecord;
use crate::surface::{CardSide, RenderSurface};

// Card palette. Blues for the clinic branding, grays for labels and
// rules, matching the printed card stock the clinic used before.
pub(crate) const BLUE_DARK: &str = "#1e40af";
pub(crate) const BLUE_MID: &str = "#2563eb";
pub(crate) const BLUE_PALE: &str = "#93c5fd";
pub(crate) const GRAY_LABEL: &str = "#374151";
pub(crate) const GRAY_NOTE: &str = "#4b5563";
pub(crate) const GRAY_FAINT: &str = "#6b7280";
pub(crate) const GRAY_RULE: &str = "#9ca3af";
pub(crate) const GRAY_BORDER: &str = "#d1d5db";
pub(crate) const INK: &str = "#111827";

/// Render one side of the card for the given record.
pub fn render(record: &CardRecord, side: CardSide) -> RenderSurface {
    let size = PageSizeMm::card();
    let svg = match side {
        CardSide::Front => front::front_svg(record, size),
        CardSide::Back => back::back_svg(size),
    };
    RenderSurface { side, size, svg }
}

/// Opening tag for a card-sized SVG document. User units are
/// millimetres; the width/height attributes pin the physical size.
pub(crate) fn svg_open(size: PageSizeMm) -> String {
    format!(
        concat!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" ",
            "width=\"{w}mm\" height=\"{h}mm\" viewBox=\"0 0 {w} {h}\" ",
            "font-family=\"Helvetica, Arial, sans-serif\">\n"
        ),
        w = size.width,
        h = size.height,
    )
}

/// Card background: white fill, rounded hairline border, and a faint
/// oversized tooth watermark behind the content.
pub(crate) fn card_base(size: PageSizeMm) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<rect x=\"0.15\" y=\"0.15\" width=\"{}\" height=\"{}\" rx=\"0.8\" \
         fill=\"#ffffff\" stroke=\"{}\" stroke-width=\"0.3\"/>\n",
        size.width - 0.3,
        size.height - 0.3,
        GRAY_BORDER,
    ));
    out.push_str(&tooth_icon(
        (size.width - 30.0) / 2.0,
        (size.height - 30.0) / 2.0,
        30.0,
        BLUE_PALE,
        Some(0.08),
    ));
    out
}

/// The clinic's tooth glyph, drawn at `size` mm into a square box whose
/// top-left corner is at (`x`, `y`).
pub(crate) fn tooth_icon(x: f64, y: f64, size: f64, stroke: &str, opacity: Option<f64>) -> String {
    let scale = size / 24.0;
    let opacity = opacity
        .map(|o| format!(" opacity=\"{o}\""))
        .unwrap_or_default();
    format!(
        concat!(
            "<g transform=\"translate({x} {y}) scale({scale})\" fill=\"none\" ",
            "stroke=\"{stroke}\" stroke-width=\"2\" stroke-linecap=\"round\" ",
            "stroke-linejoin=\"round\"{opacity}>",
            "<path d=\"M22 10V14C22 17 20 19 17 19H7C4 19 2 17 2 14V10C2 7 4 5 7 5H17C20 5 22 7 22 10Z\"/>",
            "<path d=\"M7 13C7 13 6.3 13.4 5.5 13.4C4.7 13.4 4 13 4 13\"/>",
            "<path d=\"M10 10C10 10 9.3 10.4 8.5 10.4C7.7 10.4 7 10 7 10\"/>",
            "<path d=\"M10 14C10 14 9.3 14.4 8.5 14.4C7.7 14.4 7 14 7 14\"/>",
            "<path d=\"M17 10C17 10 16.3 10.4 15.5 10.4C14.7 10.4 14 10 14 10\"/>",
            "<path d=\"M17 14C17 14 16.3 14.4 15.5 14.4C14.7 14.4 14 14 14 14\"/>",
            "</g>\n"
        ),
        x = x,
        y = y,
        scale = scale,
        stroke = stroke,
        opacity = opacity,
    )
}

/// Escape text for use inside SVG markup.
pub(crate) fn xml_escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Greedy word wrap to at most `max_chars` per line. Words longer than
/// the budget get a line of their own rather than being split.
pub(crate) fn wrap_text(raw: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in raw.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record() -> CardRecord {
        CardRecord::new(NaiveDate::from_ymd_opt(2025, 3, 7).unwrap())
    }

    #[test]
    fn surfaces_carry_the_card_footprint() {
        let front = render(&record(), CardSide::Front);
        assert_eq!(front.size, PageSizeMm::card());
        assert!(front.svg.starts_with("<svg "));
        assert!(front.svg.contains("width=\"85.6mm\""));
        assert!(front.svg.contains("height=\"54mm\""));
        assert!(front.svg.contains("viewBox=\"0 0 85.6 54\""));
    }

    #[test]
    fn rendering_is_deterministic() {
        let a = render(&record(), CardSide::Front);
        let b = render(&record(), CardSide::Front);
        assert_eq!(a.svg, b.svg);
    }

    #[test]
    fn front_substitutes_placeholders_for_empty_fields() {
        let surface = render(&CardRecord::default(), CardSide::Front);
        assert!(surface.svg.contains("...................."));
    }

    #[test]
    fn front_escapes_user_text() {
        let mut rec = record();
        rec.patient = "R & D <Verma>".to_string();
        let surface = render(&rec, CardSide::Front);
        assert!(surface.svg.contains("R &amp; D &lt;Verma&gt;"));
        assert!(!surface.svg.contains("<Verma>"));
    }

    #[test]
    fn back_lists_the_warranty_terms() {
        let surface = render(&record(), CardSide::Back);
        for term in WARRANTY_TERMS {
            let head: String = term.split_whitespace().take(4).collect::<Vec<_>>().join(" ");
            assert!(surface.svg.contains(&head), "missing term: {head}");
        }
    }

    #[test]
    fn wrap_respects_the_character_budget() {
        let lines = wrap_text("one two three four five", 9);
        assert_eq!(lines, vec!["one two", "three", "four five"]);

        let lines = wrap_text("supercalifragilistic", 5);
        assert_eq!(lines, vec!["supercalifragilistic"]);

        assert!(wrap_text("", 10).is_empty());
    }

    #[test]
    fn escape_covers_the_xml_special_characters() {
        assert_eq!(xml_escape(r#"a<b>&"c'"#), "a&lt;b&gt;&amp;&quot;c&apos;");
        assert_eq!(xml_escape("plain"), "plain");
    }
}
