//! Export module
//!
//! Machine-readable renderings of the allocation summary:
//! - JSON: versioned document with amounts in cents
//! - YAML: the same document with a comment header
//! - CSV: one row per category plus totals

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::write_csv;
pub use json::{write_json, SummaryExport, EXPORT_SCHEMA_VERSION};
pub use yaml::write_yaml;

use std::io::Write;

use crate::config::{OutputFormat, Settings};
use crate::error::PlannerResult;
use crate::reports::AllocationSummary;

/// Write the summary in the format chosen in `settings`
pub fn write_summary<W: Write>(
    summary: &AllocationSummary,
    settings: &Settings,
    writer: &mut W,
) -> PlannerResult<()> {
    match settings.output_format {
        OutputFormat::Text => {
            write!(writer, "{}", summary.format_terminal(settings))?;
            writer.flush()?;
            Ok(())
        }
        OutputFormat::Json => write_json(summary, settings, writer),
        OutputFormat::Yaml => write_yaml(summary, settings, writer),
        OutputFormat::Csv => write_csv(summary, writer),
    }
}
