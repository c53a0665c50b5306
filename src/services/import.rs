//! Tabular import service
//!
//! Reads delimited text into [`Row`]s. The first non-blank line supplies the
//! field names; every later non-blank line becomes one row. This is a strict
//! splitter: quotes are ordinary characters and there is no escaping.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Terminator, Trim};
use log::{debug, trace};

use crate::config::Settings;
use crate::error::{PayrollError, PayrollResult};
use crate::models::Row;

/// Label used in errors for sources that have no path
const UNNAMED_SOURCE: &str = "<input>";

/// Reader for header-first delimited text
#[derive(Debug, Clone)]
pub struct TabularReader {
    delimiter: u8,
}

impl Default for TabularReader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl TabularReader {
    /// Create a comma-separated reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader configured from settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new().with_delimiter(settings.delimiter_byte())
    }

    /// Set the delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Read every row from a file
    ///
    /// The file is closed before this returns, whether or not reading
    /// succeeded.
    pub fn read_path(&self, path: &Path) -> PayrollResult<Vec<Row>> {
        let label = path.display().to_string();
        let file = File::open(path).map_err(|e| PayrollError::unreadable(&label, e))?;

        let rows = self.parse(file, &label)?;
        debug!("Read {} rows from {}", rows.len(), label);
        Ok(rows)
    }

    /// Read every row from an arbitrary source
    pub fn read_from<R: Read>(&self, source: R) -> PayrollResult<Vec<Row>> {
        self.parse(source, UNNAMED_SOURCE)
    }

    fn parse<R: Read>(&self, mut source: R, label: &str) -> PayrollResult<Vec<Row>> {
        let mut text = String::new();
        source
            .read_to_string(&mut text)
            .map_err(|e| PayrollError::unreadable(label, e))?;

        // \r\n, \n and a lone \r all end a line
        let text = text.replace("\r\n", "\n").replace('\r', "\n");

        // (line number, content) of every non-blank line
        let lines: Vec<(usize, &str)> = text
            .lines()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line))
            .filter(|(_, line)| !line.trim().is_empty())
            .collect();

        let joined = lines
            .iter()
            .map(|(_, line)| *line)
            .collect::<Vec<_>>()
            .join("\n");

        // Without quoting and blank lines, each line is exactly one record
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .delimiter(self.delimiter)
            .terminator(Terminator::Any(b'\n'))
            .quoting(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(joined.as_bytes());

        let mut records = reader.records();
        let mut line_numbers = lines.iter().map(|(line, _)| *line);

        let headers: Vec<String> = match records.next() {
            Some(header) => header
                .map_err(|e| PayrollError::unreadable(label, e))?
                .iter()
                .map(str::to_string)
                .collect(),
            None => return Ok(Vec::new()),
        };
        line_numbers.next();
        trace!("Columns in {}: {:?}", label, headers);

        let mut rows = Vec::with_capacity(lines.len().saturating_sub(1));
        for (result, line) in records.zip(line_numbers) {
            let record = result.map_err(|e| PayrollError::unreadable(label, e))?;
            if record.len() != headers.len() {
                trace!(
                    "{}:{} has {} values for {} columns",
                    label,
                    line,
                    record.len(),
                    headers.len()
                );
            }
            rows.push(Row::from_pairs(
                line,
                headers.iter().map(String::as_str),
                record.iter(),
            ));
        }

        Ok(rows)
    }
}
