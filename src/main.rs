use std::io;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{ArgAction, Parser};
use tracing::debug;

use grocery_budget::config::{OutputFormat, Settings, SortOrder};
use grocery_budget::export::write_summary;
use grocery_budget::input::ReaderLines;
use grocery_budget::logging::init_logging;
use grocery_budget::models::BudgetWeek;
use grocery_budget::planner::PlannerWizard;
use grocery_budget::reports::AllocationSummary;

#[derive(Parser)]
#[command(
    name = "grocery-budget",
    version,
    about = "Interactive weekly grocery budget planner",
    long_about = "Plan a weekly grocery budget from the terminal. Enter your weekly \
                  budget, allocate it across categories of your choosing, type 'done' \
                  and get a summary of what is allocated and what remains."
)]
struct Cli {
    /// JSON settings file
    #[arg(short, long, env = "GROCERY_BUDGET_CONFIG")]
    config: Option<PathBuf>,

    /// Give up after this many consecutive invalid entries
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    max_attempts: Option<u32>,

    /// Currency symbol shown before amounts
    #[arg(long)]
    currency: Option<String>,

    /// Order of the category breakdown
    #[arg(long, value_enum)]
    sort: Option<SortOrder>,

    /// Report format; prompts move to stderr for non-text formats
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Reject allocations that exceed the remaining budget
    #[arg(long)]
    no_overspend: bool,

    /// Hide the bars next to each category
    #[arg(long)]
    no_bars: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Layer command-line flags over the loaded settings
    fn apply(&self, settings: &mut Settings) {
        if let Some(max_attempts) = self.max_attempts {
            settings.max_attempts = Some(max_attempts);
        }
        if let Some(currency) = &self.currency {
            settings.currency_symbol = currency.clone();
        }
        if let Some(sort) = self.sort {
            settings.sort_order = sort;
        }
        if let Some(format) = self.format {
            settings.output_format = format;
        }
        if self.no_overspend {
            settings.allow_overspend = false;
        }
        if self.no_bars {
            settings.show_bars = false;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut settings = Settings::load_or_default(cli.config.as_deref())?;
    cli.apply(&mut settings);
    settings.validate()?;
    debug!(?settings, "settings resolved");

    let wizard = PlannerWizard::new(&settings);
    let source = ReaderLines::new(io::stdin().lock());

    let result = if settings.output_format.is_structured() {
        let mut prompter = wizard.prompter(source, io::stderr());
        wizard.run(&mut prompter)
    } else {
        let mut prompter = wizard.prompter(source, io::stdout());
        wizard.run(&mut prompter)
    };

    let session = match result {
        Ok(session) => session,
        Err(err) if err.is_end_of_input() => bail!("{}; no report was produced", err),
        Err(err) => return Err(err.into()),
    };

    let summary = AllocationSummary::from_session(&session, &settings, BudgetWeek::current());
    write_summary(&summary, &settings, &mut io::stdout().lock())?;

    Ok(())
}
