//! Core data models for the payout reporter
//!
//! Rows are the untyped output of the tabular reader; records are the typed
//! employee entries built from them.

pub mod money;
pub mod record;
pub mod row;

pub use money::Money;
pub use record::{Record, DEPARTMENT_FIELD, HOURS_FIELD, RATE_FIELDS};
pub use row::Row;
