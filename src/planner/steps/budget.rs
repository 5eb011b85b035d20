//! Weekly budget step
//!
//! Asks for the weekly grocery budget until a positive amount is entered.

use std::io::Write;

use tracing::info;

use crate::error::PlannerResult;
use crate::input::{LineSource, Prompter};
use crate::models::{EntryError, Money};

/// Weekly budget step
pub struct BudgetStep;

impl BudgetStep {
    /// Run the budget step, returning the validated weekly budget
    pub fn run<S: LineSource, W: Write>(prompter: &mut Prompter<S, W>) -> PlannerResult<Money> {
        let prompt = format!(
            "Enter your weekly grocery budget: {}",
            prompter.currency_symbol()
        );

        let budget = prompter.retry("weekly budget", |p| {
            let line = p.ask(&prompt, "weekly budget")?;
            Ok(parse_budget(&line))
        })?;

        info!(budget = %budget, "weekly budget set");
        Ok(budget)
    }
}

/// Parse and validate one line of budget input
pub fn parse_budget(line: &str) -> Result<Money, EntryError> {
    let amount =
        Money::parse(line).map_err(|_| EntryError::NotANumber(line.trim().to_string()))?;

    if !amount.is_positive() {
        return Err(EntryError::NonPositiveBudget);
    }

    Ok(amount)
}
