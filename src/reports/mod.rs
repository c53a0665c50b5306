//! Reports module for the payout reporter
//!
//! Provides the payout summary and the registry that selects a report by
//! name.

pub mod payout;
pub mod registry;

pub use payout::{PayoutReport, NO_DATA_MESSAGE};
pub use registry::{available_kinds, find, ReportKind};
