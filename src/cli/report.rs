//! CLI command for reports
//!
//! Runs a named report over one or more input files and prints it.

use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::error::PayrollResult;
use crate::services::ReportProcessor;

/// Arguments for report generation
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// CSV files with employee data
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Type of report to generate (currently only "payout")
    #[arg(long, value_name = "KIND")]
    pub report: String,
}

/// What the report command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    /// Report text ready to print
    Printed(String),
    /// The requested report kind does not exist
    UnknownKind(String),
}

impl ReportOutcome {
    /// Text to print on standard output
    pub fn message(&self) -> String {
        match self {
            Self::Printed(text) => text.clone(),
            Self::UnknownKind(kind) => format!("Error: Unknown report type '{}'", kind),
        }
    }

    /// Process exit code for this outcome
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Printed(_) => 0,
            Self::UnknownKind(_) => 1,
        }
    }
}

/// Handle the report command
pub fn handle_report_command(settings: Settings, args: ReportArgs) -> PayrollResult<ReportOutcome> {
    let processor = ReportProcessor::new(settings);

    Ok(match processor.process(args.files.as_slice(), &args.report)? {
        Some(text) => ReportOutcome::Printed(text),
        None => ReportOutcome::UnknownKind(args.report),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_unknown_kind_outcome() {
        let args = ReportArgs {
            files: vec![PathBuf::from("staff.csv")],
            report: "invalid".into(),
        };

        let outcome = handle_report_command(Settings::default(), args).unwrap();
        assert_eq!(outcome, ReportOutcome::UnknownKind("invalid".into()));
        assert_eq!(outcome.message(), "Error: Unknown report type 'invalid'");
        assert_eq!(outcome.exit_code(), 1);
    }

    #[test]
    fn test_printed_outcome() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("staff.csv");
        std::fs::write(&path, "department,hours_worked,rate\nOps,2,3\n").unwrap();

        let args = ReportArgs {
            files: vec![path],
            report: "payout".into(),
        };

        let outcome = handle_report_command(Settings::default(), args).unwrap();
        assert_eq!(outcome.exit_code(), 0);
        assert!(outcome.message().starts_with("Total payout: $6.00"));
    }
}
