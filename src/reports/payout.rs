//! Payout Report
//!
//! Totals employee payouts overall and per department.

use std::collections::HashMap;

use crate::config::Settings;
use crate::models::{Money, Record};

/// Text shown in place of a report when there were no records
pub const NO_DATA_MESSAGE: &str = "No employee data available";

/// Aggregated payouts for a batch of records
#[derive(Debug, Clone, Default)]
pub struct PayoutReport {
    /// Sum of every record's payout
    pub total_payout: Money,
    /// Summed payout per department name
    pub departments: HashMap<String, Money>,
    /// Number of records aggregated
    pub record_count: usize,
}

impl PayoutReport {
    /// Aggregate payouts across records
    pub fn generate(records: &[Record]) -> Self {
        let mut departments: HashMap<String, Money> = HashMap::new();
        let mut total_payout = Money::zero();

        for record in records {
            let payout = record.payout();
            total_payout += payout;
            *departments
                .entry(record.department().to_string())
                .or_default() += payout;
        }

        Self {
            total_payout,
            departments,
            record_count: records.len(),
        }
    }

    /// Check if no records were aggregated
    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }

    /// Departments with their totals, ordered by name
    pub fn sorted_departments(&self) -> Vec<(&str, Money)> {
        let mut rows: Vec<_> = self
            .departments
            .iter()
            .map(|(name, amount)| (name.as_str(), *amount))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(b.0));
        rows
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        self.format_with_symbol("$")
    }

    /// Format the report using the configured currency symbol
    pub fn format_with_settings(&self, settings: &Settings) -> String {
        self.format_with_symbol(&settings.currency_symbol)
    }

    /// Format the report with an explicit currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_empty() {
            return NO_DATA_MESSAGE.to_string();
        }

        let mut lines = vec![
            format!(
                "Total payout: {}",
                self.total_payout.format_with_symbol(symbol)
            ),
            String::new(),
            "Department payout:".to_string(),
        ];

        for (department, amount) in self.sorted_departments() {
            lines.push(format!(
                "- {}: {}",
                department,
                amount.format_with_symbol(symbol)
            ));
        }

        lines.join("\n")
    }
}
