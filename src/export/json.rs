//! JSON Export functionality
//!
//! Writes the allocation summary as a versioned JSON document.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::config::Settings;
use crate::error::PlannerResult;
use crate::reports::AllocationSummary;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Summary export structure shared by the JSON and YAML writers
#[derive(Debug, Clone, Serialize)]
pub struct SummaryExport<'a> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    /// Export timestamp
    pub generated_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: &'static str,

    /// Currency symbol the amounts were entered in
    pub currency_symbol: &'a str,

    /// Amounts are integer cents
    #[serde(flatten)]
    pub summary: &'a AllocationSummary,
}

impl<'a> SummaryExport<'a> {
    pub fn new(
        summary: &'a AllocationSummary,
        settings: &'a Settings,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            generated_at,
            app_version: env!("CARGO_PKG_VERSION"),
            currency_symbol: &settings.currency_symbol,
            summary,
        }
    }
}

/// Write the summary as pretty-printed JSON
pub fn write_json<W: Write>(
    summary: &AllocationSummary,
    settings: &Settings,
    writer: &mut W,
) -> PlannerResult<()> {
    let export = SummaryExport::new(summary, settings, Utc::now());
    serde_json::to_writer_pretty(&mut *writer, &export)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetSession, BudgetWeek, Money};

    fn sample() -> AllocationSummary {
        let mut session = BudgetSession::new(Money::from_dollars(50)).unwrap();
        session.allocate("dairy", Money::from_dollars(55)).unwrap();
        AllocationSummary::from_session(&session, &Settings::default(), BudgetWeek::new(2025, 3))
    }

    #[test]
    fn test_write_json() {
        let summary = sample();
        let mut buffer = Vec::new();
        write_json(&summary, &Settings::default(), &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["currency_symbol"], "$");
        assert_eq!(value["weekly_budget"], "50");
        assert_eq!(value["total_allocated"], "55");
        assert_eq!(value["remaining"], "-5");
        assert_eq!(value["status"]["status"], "over_budget");
        assert_eq!(value["status"]["overage"], "5");
        assert_eq!(value["categories"][0]["name"], "dairy");
        assert_eq!(value["week"]["week"], 3);
        assert!(value.get("imbalance").is_none());
    }
}
