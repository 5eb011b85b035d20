//! Budget session state
//!
//! Holds the weekly budget and the ordered list of category allocations for
//! a single planning session. Totals are derived on demand, never stored.

use super::category::{Allocation, EntryError};
use super::money::Money;

/// What happened when an allocation was recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationOutcome {
    /// A new category was appended
    Added,
    /// An existing category kept its position and took the new amount
    Replaced { previous: Money },
}

/// All state of one planning session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetSession {
    weekly_budget: Money,
    allocations: Vec<Allocation>,
}

impl BudgetSession {
    /// Start a session with a weekly budget, which must be positive
    pub fn new(weekly_budget: Money) -> Result<Self, EntryError> {
        if !weekly_budget.is_positive() {
            return Err(EntryError::NonPositiveBudget);
        }

        Ok(Self {
            weekly_budget,
            allocations: Vec::new(),
        })
    }

    pub fn weekly_budget(&self) -> Money {
        self.weekly_budget
    }

    /// Allocations in the order their names were first entered
    pub fn allocations(&self) -> &[Allocation] {
        &self.allocations
    }

    pub fn is_empty(&self) -> bool {
        self.allocations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.allocations.len()
    }

    /// Look up a category by exact (case-sensitive) name
    pub fn get(&self, name: &str) -> Option<&Allocation> {
        self.allocations.iter().find(|a| a.name == name)
    }

    /// Record `amount` for `name`, overwriting any previous amount in place
    pub fn allocate(
        &mut self,
        name: impl Into<String>,
        amount: Money,
    ) -> Result<AllocationOutcome, EntryError> {
        let allocation = Allocation::new(name, amount)?;

        if let Some(existing) = self
            .allocations
            .iter_mut()
            .find(|a| a.name == allocation.name)
        {
            let previous = existing.amount;
            existing.amount = allocation.amount;
            return Ok(AllocationOutcome::Replaced { previous });
        }

        self.allocations.push(allocation);
        Ok(AllocationOutcome::Added)
    }

    /// Check that setting `name` to `amount` keeps the total within budget
    pub fn check_fits(&self, name: &str, amount: Money) -> Result<(), EntryError> {
        let current = self.get(name.trim()).map(|a| a.amount).unwrap_or_default();
        let others = self.total_allocated() - current;

        if others + amount > self.weekly_budget {
            return Err(EntryError::ExceedsBudget {
                remaining: self.weekly_budget - others,
            });
        }

        Ok(())
    }

    pub fn total_allocated(&self) -> Money {
        self.allocations.iter().map(|a| a.amount).sum()
    }

    /// Weekly budget minus total allocated; negative when over budget
    pub fn remaining(&self) -> Money {
        self.weekly_budget - self.total_allocated()
    }

    /// Total allocated as a percentage of the weekly budget
    pub fn utilization_pct(&self) -> f64 {
        self.total_allocated().percent_of(self.weekly_budget)
    }
}
