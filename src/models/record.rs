//! Employee record model
//!
//! A [`Record`] is the typed, validated form of a [`Row`]. It is immutable
//! once built and derives its payout on demand.

use std::borrow::Cow;

use super::{Money, Row};
use crate::error::{PayrollError, PayrollResult};

/// Column holding the department name
pub const DEPARTMENT_FIELD: &str = "department";

/// Column holding hours worked
pub const HOURS_FIELD: &str = "hours_worked";

/// Columns that may hold the hourly rate, in priority order
pub const RATE_FIELDS: [&str; 3] = ["hourly_rate", "rate", "salary"];

/// A single employee's timesheet entry
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    department: String,
    hours_worked: f64,
    hourly_rate: f64,
}

impl Record {
    /// Create a record from already-typed values
    pub fn new(department: impl Into<String>, hours_worked: f64, hourly_rate: f64) -> Self {
        Self {
            department: department.into(),
            hours_worked,
            hourly_rate,
        }
    }

    /// Build a record from a parsed row
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::MissingField`] when `department` or
    /// `hours_worked` is absent, and [`PayrollError::InvalidNumber`] when
    /// hours or the chosen rate column does not parse as a number.
    pub fn from_row(row: &Row) -> PayrollResult<Self> {
        let department = row
            .get(DEPARTMENT_FIELD)
            .ok_or(PayrollError::MissingField {
                field: DEPARTMENT_FIELD,
                line: row.line(),
            })?;

        let hours = row.get(HOURS_FIELD).ok_or(PayrollError::MissingField {
            field: HOURS_FIELD,
            line: row.line(),
        })?;
        let hours_worked = parse_number(row, HOURS_FIELD, hours)?;

        let hourly_rate = Self::resolve_rate(row)?;

        Ok(Self::new(department, hours_worked, hourly_rate))
    }

    /// First present rate column wins; no rate column at all means 0.0
    fn resolve_rate(row: &Row) -> PayrollResult<f64> {
        match RATE_FIELDS
            .iter()
            .find_map(|&field| row.get(field).map(|value| (field, value)))
        {
            Some((field, value)) => parse_number(row, field, value),
            None => Ok(0.0),
        }
    }

    /// Department name
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Hours worked
    pub fn hours_worked(&self) -> f64 {
        self.hours_worked
    }

    /// Hourly rate
    pub fn hourly_rate(&self) -> f64 {
        self.hourly_rate
    }

    /// Hours worked multiplied by the hourly rate
    pub fn payout(&self) -> Money {
        Money::new(self.hours_worked * self.hourly_rate)
    }
}

fn parse_number(row: &Row, field: &str, value: &str) -> PayrollResult<f64> {
    let invalid = || PayrollError::InvalidNumber {
        field: field.to_string(),
        value: value.to_string(),
        line: row.line(),
    };

    strip_digit_separators(value)
        .ok_or_else(invalid)?
        .parse::<f64>()
        .map_err(|_| invalid())
}

/// Remove `_` digit separators such as in `1_000`
///
/// A separator must sit between two ASCII digits; anything else is not a
/// number.
fn strip_digit_separators(value: &str) -> Option<Cow<'_, str>> {
    if !value.contains('_') {
        return Some(Cow::Borrowed(value));
    }

    let bytes = value.as_bytes();
    let is_digit_at = |idx: Option<usize>| {
        idx.and_then(|i| bytes.get(i))
            .is_some_and(u8::is_ascii_digit)
    };

    for (idx, byte) in bytes.iter().enumerate() {
        if *byte == b'_' && !(is_digit_at(idx.checked_sub(1)) && is_digit_at(Some(idx + 1))) {
            return None;
        }
    }

    Some(Cow::Owned(value.replace('_', "")))
}
