//! Planner steps
//!
//! Individual steps in the planning flow.

pub mod budget;
pub mod categories;

pub use budget::BudgetStep;
pub use categories::CategoriesStep;
