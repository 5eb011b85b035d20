//! Planner orchestration
//!
//! Runs the weekly budget step and then the categories step, producing the
//! populated session the report is built from.

use std::io::Write;

use tracing::debug;

use crate::config::Settings;
use crate::error::PlannerResult;
use crate::input::{LineSource, Prompter};
use crate::models::BudgetSession;

use super::steps::{BudgetStep, CategoriesStep};

/// The interactive planning flow
pub struct PlannerWizard<'a> {
    settings: &'a Settings,
}

impl<'a> PlannerWizard<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Build a prompter over `source` and `out` configured from the settings
    pub fn prompter<S: LineSource, W: Write>(&self, source: S, out: W) -> Prompter<S, W> {
        Prompter::new(source, out)
            .with_max_attempts(self.settings.max_attempts)
            .with_currency_symbol(self.settings.currency_symbol.clone())
    }

    /// Run the planning flow
    pub fn run<S: LineSource, W: Write>(
        &self,
        prompter: &mut Prompter<S, W>,
    ) -> PlannerResult<BudgetSession> {
        prompter.say("=== Weekly Grocery Budget Planner ===")?;
        prompter.say("")?;

        let weekly_budget = BudgetStep::run(prompter)?;
        let mut session = BudgetSession::new(weekly_budget)?;

        let entries =
            CategoriesStep::new(self.settings.allow_overspend).run(prompter, &mut session)?;
        debug!(entries, categories = session.len(), "planning finished");

        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ReaderLines;
    use crate::models::Money;
    use std::io::Cursor;

    #[test]
    fn test_full_flow() {
        let settings = Settings::default();
        let wizard = PlannerWizard::new(&settings);
        let mut prompter = wizard.prompter(
            ReaderLines::new(Cursor::new("abc\n100\nproduce\n30\nmeat\n45\ndone\n")),
            Vec::new(),
        );

        let session = wizard.run(&mut prompter).unwrap();
        assert_eq!(session.weekly_budget(), Money::from_dollars(100));
        assert_eq!(session.total_allocated(), Money::from_dollars(75));
        assert_eq!(session.remaining(), Money::from_dollars(25));

        let out = String::from_utf8(prompter.into_writer()).unwrap();
        assert!(out.starts_with("=== Weekly Grocery Budget Planner ==="));
        assert!(out.contains("Type 'done' when finished."));
    }

    #[test]
    fn test_settings_reach_the_prompts() {
        let settings = Settings {
            currency_symbol: "€".into(),
            max_attempts: Some(1),
            ..Settings::default()
        };
        let wizard = PlannerWizard::new(&settings);
        let mut prompter =
            wizard.prompter(ReaderLines::new(Cursor::new("zero\n50\n")), Vec::new());

        let err = wizard.run(&mut prompter).unwrap_err();
        assert!(matches!(
            err,
            crate::error::PlannerError::TooManyAttempts { attempts: 1, .. }
        ));

        let out = String::from_utf8(prompter.into_writer()).unwrap();
        assert!(out.contains("Enter your weekly grocery budget: €"));
    }

    #[test]
    fn test_fractional_input_keeps_full_precision() {
        use crate::models::BudgetWeek;
        use crate::reports::{AllocationSummary, BudgetStatus};

        let settings = Settings::default();
        let wizard = PlannerWizard::new(&settings);
        let run = |input: &str| {
            let mut prompter =
                wizard.prompter(ReaderLines::new(Cursor::new(input.to_string())), Vec::new());
            wizard.run(&mut prompter)
        };
        let summarize = |session: &BudgetSession| {
            AllocationSummary::from_session(session, &settings, BudgetWeek::new(2025, 3))
        };
        let money = |s: &str| Money::parse(s).unwrap();

        let session = run("10\nproduce\n10.001\ndone\n").unwrap();
        assert_eq!(
            summarize(&session).status,
            BudgetStatus::OverBudget { overage: money("0.001") }
        );

        let session = run("40\npantry\n36.001\ndone\n").unwrap();
        assert_eq!(
            summarize(&session).status,
            BudgetStatus::AlmostFull { remaining: money("3.999") }
        );

        let session = run("0.001\ndone\n").unwrap();
        assert_eq!(session.weekly_budget(), money("0.001"));

        let session = run("10\nx\n-0.001\ndone\n").unwrap();
        assert!(session.is_empty());
    }
}
