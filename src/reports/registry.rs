//! Report kind registry
//!
//! Maps the name given on the command line to the functions that aggregate
//! records and render the result. The table is fixed at compile time.

use crate::config::Settings;
use crate::models::Record;

use super::payout::PayoutReport;

/// A named (aggregate, format) pair
#[derive(Clone, Copy)]
pub struct ReportKind {
    /// Name used to select the report
    pub name: &'static str,
    /// One-line summary for help output
    pub description: &'static str,
    aggregate: fn(&[Record]) -> PayoutReport,
    format: fn(&PayoutReport, &Settings) -> String,
}

impl ReportKind {
    /// Aggregate records and render the report text
    pub fn render(&self, records: &[Record], settings: &Settings) -> String {
        let report = (self.aggregate)(records);
        (self.format)(&report, settings)
    }
}

static REPORT_KINDS: &[ReportKind] = &[ReportKind {
    name: "payout",
    description: "Total and per-department payout",
    aggregate: PayoutReport::generate,
    format: PayoutReport::format_with_settings,
}];

/// Look up a report kind by exact name
pub fn find(name: &str) -> Option<&'static ReportKind> {
    REPORT_KINDS.iter().find(|kind| kind.name == name)
}

/// Names of every registered report kind
pub fn available_kinds() -> impl Iterator<Item = &'static str> {
    REPORT_KINDS.iter().map(|kind| kind.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_payout() {
        let kind = find("payout").unwrap();
        assert_eq!(kind.name, "payout");
    }

    #[test]
    fn test_unknown_kinds() {
        assert!(find("invalid").is_none());
        assert!(find("Payout").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn test_available_kinds() {
        assert_eq!(available_kinds().collect::<Vec<_>>(), vec!["payout"]);
    }

    #[test]
    fn test_render() {
        let kind = find("payout").unwrap();
        let records = vec![Record::new("Ops", 10.0, 2.0)];

        assert_eq!(
            kind.render(&records, &Settings::default()),
            "Total payout: $20.00\n\nDepartment payout:\n- Ops: $20.00"
        );
        assert_eq!(
            kind.render(&[], &Settings::default()),
            "No employee data available"
        );
    }
}
