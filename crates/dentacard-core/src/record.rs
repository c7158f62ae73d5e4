//! The editable warranty-card field set.
//!
//! A [`CardRecord`] is the single mutable piece of data in the app. The
//! form mutates it field by field through [`update`], the renderer reads
//! it, and nothing is ever persisted across sessions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// All fields of a warranty card.
///
/// Every field holds free-form text. `date` carries an ISO calendar date
/// (`YYYY-MM-DD`); the four quadrant fields are constrained to digits,
/// commas and whitespace by [`sanitize_quadrant`] at the editing
/// boundary. Empty fields are substituted with a placeholder glyph
/// sequence at render time, never left blank.
///
/// Serde names match the original wire contract (`serialNumber`,
/// `workType`, ...) so a record can be loaded from JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardRecord {
    pub date: String,
    pub serial_number: String,
    pub doctor: String,
    pub patient: String,
    pub work_type: String,
    pub warranty_period: String,
    pub upper_right: String,
    pub upper_left: String,
    pub lower_right: String,
    pub lower_left: String,
}

impl CardRecord {
    /// A fresh record with `date` set to the given day and every other
    /// field empty. This is also what reset restores.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date: today.format("%Y-%m-%d").to_string(),
            ..Self::default()
        }
    }

    /// Read one field by tag.
    pub fn field(&self, field: CardField) -> &str {
        match field {
            CardField::Date => &self.date,
            CardField::SerialNumber => &self.serial_number,
            CardField::Doctor => &self.doctor,
            CardField::Patient => &self.patient,
            CardField::WorkType => &self.work_type,
            CardField::WarrantyPeriod => &self.warranty_period,
            CardField::UpperRight => &self.upper_right,
            CardField::UpperLeft => &self.upper_left,
            CardField::LowerRight => &self.lower_right,
            CardField::LowerLeft => &self.lower_left,
        }
    }

    /// Number of non-empty fields, used by the form's completion meter.
    pub fn completed_fields(&self) -> usize {
        CardField::ALL
            .iter()
            .filter(|f| !self.field(**f).is_empty())
            .count()
    }
}

/// Field tags for [`CardRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardField {
    Date,
    SerialNumber,
    Doctor,
    Patient,
    WorkType,
    WarrantyPeriod,
    UpperRight,
    UpperLeft,
    LowerRight,
    LowerLeft,
}

impl CardField {
    pub const ALL: [CardField; 10] = [
        CardField::Date,
        CardField::SerialNumber,
        CardField::Doctor,
        CardField::Patient,
        CardField::WorkType,
        CardField::WarrantyPeriod,
        CardField::UpperRight,
        CardField::UpperLeft,
        CardField::LowerRight,
        CardField::LowerLeft,
    ];

    /// The four tooth-quadrant fields, in display order.
    pub const QUADRANTS: [CardField; 4] = [
        CardField::UpperRight,
        CardField::UpperLeft,
        CardField::LowerRight,
        CardField::LowerLeft,
    ];

    /// Human-facing label, as shown on the form and the card.
    pub fn label(&self) -> &'static str {
        match self {
            CardField::Date => "Date",
            CardField::SerialNumber => "SR.NO",
            CardField::Doctor => "Doctor",
            CardField::Patient => "Patient",
            CardField::WorkType => "Work Type",
            CardField::WarrantyPeriod => "Warranty",
            CardField::UpperRight => "Upper Right",
            CardField::UpperLeft => "Upper Left",
            CardField::LowerRight => "Lower Right",
            CardField::LowerLeft => "Lower Left",
        }
    }

    /// Whether this is one of the four tooth-quadrant fields.
    pub fn is_quadrant(&self) -> bool {
        CardField::QUADRANTS.contains(self)
    }
}

/// Strip every character that is not a digit, comma or whitespace.
///
/// Applied to quadrant fields only; tooth numbers are entered as
/// comma-separated FDI notation (`11, 12, 21`).
pub fn sanitize_quadrant(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || c.is_whitespace())
        .collect()
}

/// Pure field update: returns a new record with `field` set to `raw`,
/// sanitized when the field is a quadrant. The caller re-renders.
pub fn update(record: &CardRecord, field: CardField, raw: &str) -> CardRecord {
    let value = if field.is_quadrant() {
        sanitize_quadrant(raw)
    } else {
        raw.to_string()
    };
    let mut next = record.clone();
    match field {
        CardField::Date => next.date = value,
        CardField::SerialNumber => next.serial_number = value,
        CardField::Doctor => next.doctor = value,
        CardField::Patient => next.patient = value,
        CardField::WorkType => next.work_type = value,
        CardField::WarrantyPeriod => next.warranty_period = value,
        CardField::UpperRight => next.upper_right = value,
        CardField::UpperLeft => next.upper_left = value,
        CardField::LowerRight => next.lower_right = value,
        CardField::LowerLeft => next.lower_left = value,
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 7).unwrap()
    }

    #[test]
    fn new_record_defaults_date_to_today() {
        let record = CardRecord::new(day());
        assert_eq!(record.date, "2025-03-07");
        assert_eq!(record.doctor, "");
        assert_eq!(record.upper_left, "");
    }

    #[test]
    fn sanitize_strips_everything_outside_digits_commas_whitespace() {
        assert_eq!(sanitize_quadrant("11, 12a, x13"), "11, 12, 13");
        assert_eq!(sanitize_quadrant("1!8@ #4"), "18 4");
        assert_eq!(sanitize_quadrant(""), "");
    }

    #[test]
    fn update_sanitizes_quadrant_fields_only() {
        let record = CardRecord::new(day());
        let record = update(&record, CardField::UpperRight, "11,x12");
        assert_eq!(record.upper_right, "11,12");

        let record = update(&record, CardField::Doctor, "Dr. A. Sharma");
        assert_eq!(record.doctor, "Dr. A. Sharma");
    }

    #[test]
    fn update_leaves_original_untouched() {
        let record = CardRecord::new(day());
        let updated = update(&record, CardField::Patient, "R. Verma");
        assert_eq!(record.patient, "");
        assert_eq!(updated.patient, "R. Verma");
    }

    #[test]
    fn completion_counts_non_empty_fields() {
        let record = CardRecord::new(day());
        assert_eq!(record.completed_fields(), 1); // date is prefilled

        let record = update(&record, CardField::Patient, "R. Verma");
        let record = update(&record, CardField::LowerLeft, "34");
        assert_eq!(record.completed_fields(), 3);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut record = CardRecord::new(day());
        record = update(&record, CardField::WorkType, "Crown");
        record = update(&record, CardField::Date, "2024-01-01");

        let reset = CardRecord::new(day());
        assert_eq!(reset.date, "2025-03-07");
        assert_eq!(reset.work_type, "");
        assert_ne!(record, reset);
    }

    #[test]
    fn serde_uses_camel_case_wire_names() {
        let record = update(&CardRecord::new(day()), CardField::SerialNumber, "2025-001");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"serialNumber\":\"2025-001\""));
        assert!(json.contains("\"warrantyPeriod\""));
        assert!(json.contains("\"upperRight\""));

        let parsed: CardRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn serde_defaults_missing_fields_to_empty() {
        let parsed: CardRecord = serde_json::from_str(r#"{"patient":"R. Verma"}"#).unwrap();
        assert_eq!(parsed.patient, "R. Verma");
        assert_eq!(parsed.date, "");
        assert_eq!(parsed.lower_right, "");
    }
}
