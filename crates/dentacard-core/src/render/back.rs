//! Back side: the fixed terms-and-conditions face.

use std::fmt::Write;

use super::{card_base, svg_open, tooth_icon, wrap_text, xml_escape, BLUE_DARK, BLUE_MID, BLUE_PALE};
use crate::geometry::PageSizeMm;

/// The warranty terms printed on the back, in order.
pub const WARRANTY_TERMS: [&str; 6] = [
    "Prosthesis must be inserted by licensed practicing dentist.",
    "Dental prosthesis must be returned with model work & warranty card.",
    "Accidental damage to Crown/Bridge is not covered under warranty.",
    "Repair or replacement of your dental prosthesis at our discretion.",
    "Costs incurred for removal or insertion are not covered.",
    "Repair resulting from accident, neglect, abuse or misuse is excluded.",
];

const MARGIN: f64 = 4.5;

pub(crate) fn back_svg(size: PageSizeMm) -> String {
    let mut s = svg_open(size);
    s.push_str(&card_base(size));

    // Header badges: filled on the left, outlined on the right.
    let _ = write!(
        s,
        "<rect x=\"{m}\" y=\"3\" width=\"26\" height=\"4.4\" rx=\"0.6\" fill=\"{blue}\"/>\n\
         <text x=\"{left_center}\" y=\"5.9\" text-anchor=\"middle\" fill=\"#ffffff\" \
         font-size=\"2.1\" font-weight=\"bold\">WARRANTY CARD</text>\n\
         <rect x=\"{right_x}\" y=\"3\" width=\"26\" height=\"4.4\" rx=\"0.6\" fill=\"none\" \
         stroke=\"{blue}\" stroke-width=\"0.25\"/>\n\
         <text x=\"{right_center}\" y=\"5.9\" text-anchor=\"middle\" fill=\"{blue}\" \
         font-size=\"2\" font-weight=\"bold\">TERMS &amp; CONDITIONS</text>\n",
        m = MARGIN,
        blue = BLUE_DARK,
        left_center = MARGIN + 13.0,
        right_x = size.width - MARGIN - 26.0,
        right_center = size.width - MARGIN - 13.0,
    );

    // Centred clinic branding.
    let center = size.width / 2.0;
    s.push_str(&tooth_icon(center - 13.4, 9.0, 4.4, BLUE_MID, None));
    let _ = write!(
        s,
        "<text x=\"{cx}\" y=\"11.5\" text-anchor=\"middle\" fill=\"{blue}\" font-size=\"2.8\" \
         font-weight=\"bold\">SSDC HAMIRPUR</text>\n\
         <text x=\"{cx}\" y=\"14.1\" text-anchor=\"middle\" fill=\"{blue}\" font-size=\"1.9\">\
         QUALITY FOR BETTER TEETH</text>\n",
        cx = center + 2.0,
        blue = BLUE_DARK,
    );

    // Terms list.
    let _ = write!(
        s,
        "<text x=\"{m}\" y=\"19\" fill=\"{blue}\" font-size=\"2.5\" font-weight=\"bold\">\
         Warranty Terms &amp; Conditions</text>\n\
         <line x1=\"{m}\" y1=\"20.2\" x2=\"{right}\" y2=\"20.2\" stroke=\"#e5e7eb\" stroke-width=\"0.2\"/>\n",
        m = MARGIN,
        blue = BLUE_DARK,
        right = size.width - MARGIN,
    );

    let mut y = 23.4;
    for (i, term) in WARRANTY_TERMS.iter().enumerate() {
        let _ = write!(
            s,
            "<text x=\"{x}\" y=\"{y}\" fill=\"#1f2937\" font-size=\"2\" font-weight=\"600\">{n}.</text>\n",
            x = MARGIN + 1.0,
            y = y,
            n = i + 1,
        );
        for line in wrap_text(term, 72) {
            let _ = write!(
                s,
                "<text x=\"{x}\" y=\"{y}\" fill=\"#1f2937\" font-size=\"2\">{line}</text>\n",
                x = MARGIN + 4.5,
                y = y,
                line = xml_escape(&line),
            );
            y += 2.5;
        }
        y += 0.7;
    }

    corner_ticks(&mut s, size);
    s.push_str("</svg>\n");
    s
}

/// Decorative right-angle ticks in the four corners.
fn corner_ticks(s: &mut String, size: PageSizeMm) {
    let inset = 1.6;
    let arm = 3.0;
    let (w, h) = (size.width, size.height);
    for d in [
        format!("M {x} {y1} L {x} {y0} L {x1} {y0}", x = inset, y1 = inset + arm, y0 = inset, x1 = inset + arm),
        format!("M {x0} {y0} L {x} {y0} L {x} {y1}", x0 = w - inset - arm, y0 = inset, x = w - inset, y1 = inset + arm),
        format!("M {x} {y0} L {x} {y} L {x1} {y}", x = inset, y0 = h - inset - arm, y = h - inset, x1 = inset + arm),
        format!("M {x0} {y} L {x} {y} L {x} {y1}", x0 = w - inset - arm, y = h - inset, x = w - inset, y1 = h - inset - arm),
    ] {
        let _ = write!(
            s,
            "<path d=\"{d}\" fill=\"none\" stroke=\"{pale}\" stroke-width=\"0.45\"/>\n",
            d = d,
            pale = BLUE_PALE,
        );
    }
}
