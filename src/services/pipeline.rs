//! Report pipeline
//!
//! Reads every input source, turns each row into a [`Record`] and hands the
//! combined batch to the selected report. Records from all sources are
//! aggregated together, in source order then row order.

use std::path::Path;

use log::{debug, info};

use crate::config::Settings;
use crate::error::PayrollResult;
use crate::models::Record;
use crate::reports;
use crate::services::TabularReader;

/// Runs a named report over a set of input files
#[derive(Debug, Clone, Default)]
pub struct ReportProcessor {
    settings: Settings,
    reader: TabularReader,
}

impl ReportProcessor {
    /// Create a processor with the given settings
    pub fn new(settings: Settings) -> Self {
        let reader = TabularReader::from_settings(&settings);
        Self { settings, reader }
    }

    /// Settings in use
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Read and validate every record from the given files
    ///
    /// Stops at the first unreadable file or invalid row.
    pub fn load_records<P: AsRef<Path>>(&self, files: &[P]) -> PayrollResult<Vec<Record>> {
        let mut records = Vec::new();

        for file in files {
            let path = file.as_ref();
            let rows = self.reader.read_path(path)?;

            records.reserve(rows.len());
            for row in &rows {
                let record = Record::from_row(row)
                    .map_err(|e| e.in_source(path.display().to_string()))?;
                records.push(record);
            }
        }

        Ok(records)
    }

    /// Produce the named report over all files
    ///
    /// Returns `Ok(None)` when the report kind is not registered; no file is
    /// read in that case.
    pub fn process<P: AsRef<Path>>(&self, files: &[P], kind: &str) -> PayrollResult<Option<String>> {
        let Some(report) = reports::find(kind) else {
            debug!(
                "Unknown report kind '{}' (available: {})",
                kind,
                reports::available_kinds().collect::<Vec<_>>().join(", ")
            );
            return Ok(None);
        };

        let records = self.load_records(files)?;
        info!(
            "Generating '{}' report ({}) from {} records in {} files",
            report.name,
            report.description,
            records.len(),
            files.len()
        );

        Ok(Some(report.render(&records, &self.settings)))
    }
}
