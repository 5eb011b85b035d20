//! YAML Export functionality

use chrono::Utc;
use std::io::Write;

use crate::config::Settings;
use crate::error::PlannerResult;
use crate::export::json::SummaryExport;
use crate::reports::AllocationSummary;

/// Write the summary as YAML with a short comment header
pub fn write_yaml<W: Write>(
    summary: &AllocationSummary,
    settings: &Settings,
    writer: &mut W,
) -> PlannerResult<()> {
    let export = SummaryExport::new(summary, settings, Utc::now());

    writeln!(writer, "# Weekly grocery budget summary for {}", summary.week)?;
    writeln!(writer, "# Generated: {}", export.generated_at)?;
    writeln!(writer, "# Amounts are in cents")?;

    serde_yaml::to_writer(&mut *writer, &export)?;
    Ok(())
}
