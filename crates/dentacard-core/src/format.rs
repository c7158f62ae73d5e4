//! Field display formatting.
//!
//! Empty fields never render blank: they fall back to a fixed dotted
//! fill-in-by-hand sequence, so a half-filled card still prints as a
//! usable form.

use chrono::NaiveDate;

/// Placeholder for empty text fields.
pub const FIELD_PLACEHOLDER: &str = "....................";

/// Placeholder for empty tooth-quadrant cells.
pub const QUADRANT_PLACEHOLDER: &str = "...";

/// Format an ISO `YYYY-MM-DD` date as `DD/MM/YYYY`.
///
/// Empty or unparseable input falls back to [`FIELD_PLACEHOLDER`];
/// a bad date is a local display concern, never an error.
pub fn format_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => FIELD_PLACEHOLDER.to_string(),
    }
}

/// A text field's display value: the value itself, or the placeholder.
pub fn display_value(raw: &str) -> &str {
    if raw.is_empty() {
        FIELD_PLACEHOLDER
    } else {
        raw
    }
}

/// A quadrant cell's display value: the value itself, or the short
/// placeholder that fits the grid cell.
pub fn display_quadrant(raw: &str) -> &str {
    if raw.is_empty() {
        QUADRANT_PLACEHOLDER
    } else {
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_iso_date_as_day_month_year() {
        assert_eq!(format_date("2025-03-07"), "07/03/2025");
        assert_eq!(format_date("1999-12-31"), "31/12/1999");
    }

    #[test]
    fn empty_date_falls_back_to_placeholder() {
        assert_eq!(format_date(""), FIELD_PLACEHOLDER);
    }

    #[test]
    fn unparseable_date_falls_back_to_placeholder() {
        assert_eq!(format_date("not-a-date"), FIELD_PLACEHOLDER);
        assert_eq!(format_date("2025-13-40"), FIELD_PLACEHOLDER);
        assert_eq!(format_date("07/03/2025"), FIELD_PLACEHOLDER);
    }

    #[test]
    fn empty_fields_display_the_placeholder() {
        assert_eq!(display_value(""), FIELD_PLACEHOLDER);
        assert_eq!(display_value("Crown"), "Crown");
        assert_eq!(display_quadrant(""), QUADRANT_PLACEHOLDER);
        assert_eq!(display_quadrant("11, 12"), "11, 12");
    }
}
