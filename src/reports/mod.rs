//! Reports module
//!
//! The end-of-session allocation summary.

pub mod allocation_summary;

pub use allocation_summary::{AllocationSummary, BudgetStatus, CategoryLine, Imbalance};
