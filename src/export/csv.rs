//! CSV Export functionality
//!
//! One row per category followed by the aggregate rows, spreadsheet-friendly.

use std::io::Write;

use crate::error::PlannerResult;
use crate::reports::AllocationSummary;

/// Write the summary as CSV with columns `kind,name,amount,percent_of_budget`
pub fn write_csv<W: Write>(summary: &AllocationSummary, writer: &mut W) -> PlannerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["kind", "name", "amount", "percent_of_budget"])?;

    for line in &summary.categories {
        let amount = format!("{:.2}", line.amount.rounded());
        let pct = format!("{:.1}", line.percent_of_budget);
        csv_writer.write_record(["category", line.name.as_str(), amount.as_str(), pct.as_str()])?;
    }

    let totals = [
        ("weekly_budget", summary.weekly_budget, 100.0),
        ("total_allocated", summary.total_allocated, summary.utilization_pct),
        (
            "remaining",
            summary.remaining,
            summary.remaining.percent_of(summary.weekly_budget),
        ),
    ];
    for (name, amount, pct) in totals {
        let amount = format!("{:.2}", amount.rounded());
        let pct = format!("{:.1}", pct);
        csv_writer.write_record(["total", name, amount.as_str(), pct.as_str()])?;
    }

    csv_writer.flush()?;
    Ok(())
}
