//! Service layer for the payout reporter
//!
//! The service layer reads input sources and drives the report pipeline on
//! top of the models and reports modules.

pub mod import;
pub mod pipeline;

pub use import::TabularReader;
pub use pipeline::ReportProcessor;
