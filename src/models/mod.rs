//! Core data models for the grocery budget planner
//!
//! Amounts, category allocations, the planning week and the session state
//! that ties them together.

pub mod category;
pub mod money;
pub mod period;
pub mod session;

pub use category::{Allocation, EntryError};
pub use money::{Money, MoneyParseError};
pub use period::BudgetWeek;
pub use session::{AllocationOutcome, BudgetSession};
