//! Payout Report - employee payout summaries from CSV timesheets
//!
//! This library reads comma-separated employee data, validates each row into
//! a typed record, and renders a payout summary grouped by department.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Optional report settings
//! - `error`: Custom error types
//! - `models`: Rows, employee records, and money
//! - `services`: Tabular reading and the report pipeline
//! - `reports`: Report aggregation, formatting, and the report registry
//! - `cli`: Command handlers used by the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use payout::services::ReportProcessor;
//!
//! let processor = ReportProcessor::default();
//! if let Some(report) = processor.process(&["staff.csv"], "payout")? {
//!     println!("{report}");
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{PayrollError, PayrollResult};
