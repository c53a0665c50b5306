//! Configuration module for the payout reporter
//!
//! Provides optional, file-based report settings.

pub mod settings;

pub use settings::Settings;
