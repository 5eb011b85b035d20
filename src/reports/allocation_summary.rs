//! Allocation Summary Report
//!
//! Computes the totals of a planning session (allocated, remaining,
//! utilization), classifies the outcome and renders the end-of-session
//! summary. Computation and rendering are separate so each can be checked on
//! its own.

use serde::Serialize;

use crate::config::{Settings, SortOrder};
use crate::display::report::{
    double_separator, format_bar, format_header, format_money, format_percentage, separator,
};
use crate::models::{Allocation, BudgetSession, BudgetWeek, Money};

const REPORT_WIDTH: usize = 60;
const MIN_NAME_WIDTH: usize = 15;
const BAR_WIDTH: usize = 20;

/// A row in the report for a single category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryLine {
    /// Category name
    pub name: String,
    /// Amount allocated
    pub amount: Money,
    /// Share of the weekly budget, 0 when the budget is not positive
    pub percent_of_budget: f64,
}

/// Overall outcome of the plan, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BudgetStatus {
    /// More allocated than the weekly budget
    OverBudget { overage: Money },
    /// Allocations add up to exactly the weekly budget
    FullyAllocated,
    /// Some budget left, but under the almost-full threshold
    AlmostFull { remaining: Money },
    /// At least the threshold share of the budget left
    RoomToAdjust { remaining: Money },
}

impl BudgetStatus {
    /// Classify a plan from its weekly budget and remaining amount
    ///
    /// `threshold_pct` is the share of the budget (in percent) below which a
    /// positive remainder counts as almost full.
    pub fn classify(weekly_budget: Money, remaining: Money, threshold_pct: u32) -> Self {
        if remaining.is_negative() {
            return Self::OverBudget {
                overage: remaining.abs(),
            };
        }
        if remaining.is_zero() {
            return Self::FullyAllocated;
        }

        // remaining < weekly_budget * threshold_pct / 100, compared exactly
        if remaining.times(100) < weekly_budget.times(threshold_pct) {
            Self::AlmostFull { remaining }
        } else {
            Self::RoomToAdjust { remaining }
        }
    }

    /// The advice line shown for this outcome
    pub fn message(&self, symbol: &str) -> String {
        match self {
            Self::OverBudget { overage } => format!(
                "❌ OVER BUDGET! You've allocated {} more than your weekly budget.",
                format_money(*overage, symbol)
            ),
            Self::FullyAllocated => {
                "✅ Perfect planning! Your budget is fully allocated with no waste.".to_string()
            }
            Self::AlmostFull { remaining } => format!(
                "⚠️  Budget almost full. You have {} remaining. Consider adjusting your allocations.",
                format_money(*remaining, symbol)
            ),
            Self::RoomToAdjust { remaining } => format!(
                "✅ Good budget allocation! You have {} remaining for adjustments or additional categories.",
                format_money(*remaining, symbol)
            ),
        }
    }
}

/// Largest and smallest allocations when they are far apart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Imbalance {
    pub largest: String,
    pub largest_amount: Money,
    pub smallest: String,
    pub smallest_amount: Money,
    pub ratio: u32,
}

impl Imbalance {
    /// Detect whether the largest allocation exceeds `ratio` times the smallest
    ///
    /// Needs at least two categories.
    pub fn detect(allocations: &[Allocation], ratio: u32) -> Option<Self> {
        if allocations.len() < 2 {
            return None;
        }

        let largest = allocations.iter().max_by_key(|a| a.amount)?;
        let smallest = allocations.iter().min_by_key(|a| a.amount)?;

        if largest.amount <= smallest.amount.times(ratio) {
            return None;
        }

        Some(Self {
            largest: largest.name.clone(),
            largest_amount: largest.amount,
            smallest: smallest.name.clone(),
            smallest_amount: smallest.amount,
            ratio,
        })
    }

    pub fn message(&self) -> String {
        format!(
            "⚠️  Unbalanced categories: '{}' is more than {}x '{}'. Consider rebalancing.",
            self.largest, self.ratio, self.smallest
        )
    }
}

/// End-of-session summary of a weekly grocery plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationSummary {
    /// The week the plan is for
    pub week: BudgetWeek,
    /// Weekly budget entered at the start
    pub weekly_budget: Money,
    /// Per-category lines, in display order
    pub categories: Vec<CategoryLine>,
    /// Sum of all allocations
    pub total_allocated: Money,
    /// Weekly budget minus total allocated
    pub remaining: Money,
    /// Total allocated as a percentage of the weekly budget
    pub utilization_pct: f64,
    /// Outcome classification
    pub status: BudgetStatus,
    /// Imbalance advisory, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imbalance: Option<Imbalance>,
}

impl AllocationSummary {
    /// Summarize a finished session
    pub fn from_session(session: &BudgetSession, settings: &Settings, week: BudgetWeek) -> Self {
        Self::compute(session.weekly_budget(), session.allocations(), settings, week)
    }

    /// Summarize an explicit budget and allocation list
    pub fn compute(
        weekly_budget: Money,
        allocations: &[Allocation],
        settings: &Settings,
        week: BudgetWeek,
    ) -> Self {
        let total_allocated: Money = allocations.iter().map(|a| a.amount).sum();
        let remaining = weekly_budget - total_allocated;

        let mut categories: Vec<CategoryLine> = allocations
            .iter()
            .map(|a| CategoryLine {
                name: a.name.clone(),
                amount: a.amount,
                percent_of_budget: a.amount.percent_of(weekly_budget),
            })
            .collect();

        if settings.sort_order == SortOrder::Amount {
            // Stable, so equal amounts keep entry order
            categories.sort_by(|a, b| b.amount.cmp(&a.amount));
        }

        Self {
            week,
            weekly_budget,
            categories,
            total_allocated,
            remaining,
            utilization_pct: total_allocated.percent_of(weekly_budget),
            status: BudgetStatus::classify(
                weekly_budget,
                remaining,
                settings.almost_full_threshold_pct,
            ),
            imbalance: Imbalance::detect(allocations, settings.imbalance_ratio),
        }
    }

    pub fn has_categories(&self) -> bool {
        !self.categories.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let symbol = settings.currency_symbol.as_str();
        let mut output = String::new();

        output.push('\n');
        output.push_str(&format_header(
            &format!("=== Budget Summary ({}) ===", self.week),
            REPORT_WIDTH,
        ));
        output.push('\n');
        output.push_str(&format_header(
            &format!(
                "{} to {}",
                self.week.start_date().format("%b %d"),
                self.week.end_date().format("%b %d, %Y")
            ),
            REPORT_WIDTH,
        ));
        output.push('\n');
        output.push_str(&double_separator(REPORT_WIDTH));
        output.push('\n');

        if self.has_categories() {
            let name_width = self
                .categories
                .iter()
                .map(|c| c.name.chars().count())
                .max()
                .unwrap_or(0)
                .max(MIN_NAME_WIDTH);

            for line in &self.categories {
                let mut row = format!(
                    "{:<width$}  {:>12}  {:>6}",
                    line.name,
                    format_money(line.amount, symbol),
                    format_percentage(line.percent_of_budget),
                    width = name_width
                );
                if settings.show_bars {
                    row.push_str("  ");
                    row.push_str(&format_bar(line.percent_of_budget, 100.0, BAR_WIDTH));
                }
                output.push_str(&row);
                output.push('\n');
            }
        } else {
            output.push_str("No categories added.\n");
            if !settings.suggested_categories.is_empty() {
                output.push_str(&format!(
                    "Try adding categories like: {}\n",
                    settings.suggested_categories.join(", ")
                ));
            }
        }

        output.push_str(&separator(REPORT_WIDTH));
        output.push('\n');
        output.push_str(&format!(
            "{:<18}{:>14}\n",
            "Weekly Budget:",
            format_money(self.weekly_budget, symbol)
        ));
        output.push_str(&format!(
            "{:<18}{:>14}\n",
            "Total Allocated:",
            format_money(self.total_allocated, symbol)
        ));
        output.push_str(&format!(
            "{:<18}{:>14}\n",
            "Remaining:",
            format_money(self.remaining, symbol)
        ));
        output.push_str(&format!(
            "{:<18}{:>14}\n",
            "Utilization:",
            format_percentage(self.utilization_pct)
        ));
        output.push('\n');

        output.push_str(&self.status.message(symbol));
        output.push('\n');

        if let Some(imbalance) = &self.imbalance {
            output.push_str(&imbalance.message());
            output.push('\n');
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dollars(d: i64) -> Money {
        Money::from_dollars(d)
    }

    fn week() -> BudgetWeek {
        BudgetWeek::new(2025, 3)
    }

    fn summary(budget: i64, entries: &[(&str, i64)], settings: &Settings) -> AllocationSummary {
        let mut session = BudgetSession::new(dollars(budget)).unwrap();
        for (name, amount) in entries {
            session.allocate(*name, dollars(*amount)).unwrap();
        }
        AllocationSummary::from_session(&session, settings, week())
    }

    #[test]
    fn test_classify_priority() {
        let budget = dollars(40);
        assert_eq!(
            BudgetStatus::classify(budget, dollars(-5), 10),
            BudgetStatus::OverBudget { overage: dollars(5) }
        );
        assert_eq!(
            BudgetStatus::classify(budget, Money::zero(), 10),
            BudgetStatus::FullyAllocated
        );
        assert_eq!(
            BudgetStatus::classify(budget, dollars(3), 10),
            BudgetStatus::AlmostFull { remaining: dollars(3) }
        );
        // Exactly 10% is not "almost full"
        assert_eq!(
            BudgetStatus::classify(budget, dollars(4), 10),
            BudgetStatus::RoomToAdjust { remaining: dollars(4) }
        );
        assert_eq!(
            BudgetStatus::classify(budget, Money::from_cents(399), 10),
            BudgetStatus::AlmostFull {
                remaining: Money::from_cents(399)
            }
        );
    }

    #[test]
    fn test_good_allocation_scenario() {
        let s = summary(100, &[("produce", 30), ("meat", 45)], &Settings::default());
        assert_eq!(s.total_allocated, dollars(75));
        assert_eq!(s.remaining, dollars(25));
        assert_eq!(s.utilization_pct, 75.0);
        assert_eq!(s.status, BudgetStatus::RoomToAdjust { remaining: dollars(25) });

        let text = s.format_terminal(&Settings::default());
        assert!(text.contains("$75.00"));
        assert!(text.contains("$25.00"));
        assert!(text.contains("75.0%"));
        assert!(text.contains("Good budget allocation"));
        assert!(text.contains("30.0%"));
        assert!(text.contains("45.0%"));
    }

    #[test]
    fn test_over_budget_scenario() {
        let s = summary(50, &[("dairy", 55)], &Settings::default());
        assert_eq!(s.remaining, dollars(-5));
        assert_eq!(s.status, BudgetStatus::OverBudget { overage: dollars(5) });

        let text = s.format_terminal(&Settings::default());
        assert!(text.contains("-$5.00"));
        assert!(text.contains("OVER BUDGET! You've allocated $5.00 more"));
        assert!(text.contains("110.0%"));
    }

    #[test]
    fn test_almost_full_scenario() {
        let s = summary(40, &[("pantry", 37)], &Settings::default());
        assert_eq!(s.remaining, dollars(3));
        assert_eq!(s.status, BudgetStatus::AlmostFull { remaining: dollars(3) });
        assert!(s
            .format_terminal(&Settings::default())
            .contains("Budget almost full. You have $3.00 remaining."));
    }

    #[test]
    fn test_fully_allocated() {
        let s = summary(60, &[("produce", 20), ("meat", 40)], &Settings::default());
        assert_eq!(s.status, BudgetStatus::FullyAllocated);
        assert!(s
            .format_terminal(&Settings::default())
            .contains("Perfect planning!"));
    }

    #[test]
    fn test_empty_categories() {
        let s = summary(80, &[], &Settings::default());
        assert!(!s.has_categories());
        assert_eq!(s.utilization_pct, 0.0);
        assert_eq!(s.remaining, dollars(80));

        let text = s.format_terminal(&Settings::default());
        assert!(text.contains("No categories added."));
        assert!(text.contains("Try adding categories like: Produce, Meat, Dairy, Pantry, Snacks"));
        assert!(!text.contains('█'));
    }

    #[test]
    fn test_zero_budget_percentages_guarded() {
        let allocations = vec![Allocation::new("produce", dollars(10)).unwrap()];
        let s = AllocationSummary::compute(Money::zero(), &allocations, &Settings::default(), week());
        assert_eq!(s.categories[0].percent_of_budget, 0.0);
        assert_eq!(s.utilization_pct, 0.0);
    }

    #[test]
    fn test_entry_order_preserved() {
        let s = summary(100, &[("snacks", 5), ("meat", 40), ("dairy", 10)], &Settings::default());
        let names: Vec<_> = s.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["snacks", "meat", "dairy"]);
    }

    #[test]
    fn test_sort_by_amount() {
        let settings = Settings {
            sort_order: SortOrder::Amount,
            ..Settings::default()
        };
        let s = summary(100, &[("snacks", 5), ("meat", 40), ("dairy", 10)], &settings);
        let names: Vec<_> = s.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["meat", "dairy", "snacks"]);
    }

    #[test]
    fn test_imbalance_detection() {
        let s = summary(100, &[("snacks", 10), ("meat", 40)], &Settings::default());
        let imbalance = s.imbalance.as_ref().unwrap();
        assert_eq!(imbalance.largest, "meat");
        assert_eq!(imbalance.smallest, "snacks");
        assert!(s.format_terminal(&Settings::default()).contains("Unbalanced categories"));

        let s = summary(100, &[("snacks", 10), ("meat", 30)], &Settings::default());
        assert!(s.imbalance.is_none());

        let s = summary(100, &[("meat", 90)], &Settings::default());
        assert!(s.imbalance.is_none());
    }

    #[test]
    fn test_report_without_bars_and_custom_symbol() {
        let settings = Settings {
            show_bars: false,
            currency_symbol: "€".into(),
            ..Settings::default()
        };
        let s = summary(100, &[("produce", 30)], &settings);
        let text = s.format_terminal(&settings);
        assert!(!text.contains('█'));
        assert!(text.contains("€30.00"));
        assert!(text.contains("2025-W03"));
        assert!(text.contains("Jan 13 to Jan 19, 2025"));
    }

    #[test]
    fn test_long_names_printed_in_full() {
        let settings = Settings::default();
        let first = "organic heirloom tomatoes and fresh basil";
        let second = "organic heirloom tomatoes and dried oregano";
        let s = summary(100, &[(first, 10), (second, 20), ("milk", 5)], &settings);

        let text = s.format_terminal(&settings);
        assert!(text.contains(first));
        assert!(text.contains(second));
        assert!(!text.contains("..."));

        let amount_column = |name: &str| {
            let row = text.lines().find(|l| l.starts_with(name)).unwrap();
            row.find('$').unwrap()
        };
        assert_eq!(amount_column(first), amount_column("milk"));
    }

    #[test]
    fn test_fractional_amounts_classified_exactly() {
        let settings = Settings::default();
        let parse = |s: &str| Money::parse(s).unwrap();

        let mut session = BudgetSession::new(dollars(10)).unwrap();
        session.allocate("produce", parse("10.001")).unwrap();
        let s = AllocationSummary::from_session(&session, &settings, week());
        assert_eq!(s.total_allocated, parse("10.001"));
        assert_eq!(s.status, BudgetStatus::OverBudget { overage: parse("0.001") });

        let mut session = BudgetSession::new(dollars(40)).unwrap();
        session.allocate("pantry", parse("36.001")).unwrap();
        let s = AllocationSummary::from_session(&session, &settings, week());
        assert_eq!(s.status, BudgetStatus::AlmostFull { remaining: parse("3.999") });
        assert!(s
            .format_terminal(&settings)
            .contains("Budget almost full. You have $4.00 remaining."));
    }

    #[test]
    fn test_imbalance_uses_exact_amounts() {
        let allocations = vec![
            Allocation::new("snacks", Money::parse("10").unwrap()).unwrap(),
            Allocation::new("meat", Money::parse("30.001").unwrap()).unwrap(),
        ];
        assert!(Imbalance::detect(&allocations, 3).is_some());
    }
}
