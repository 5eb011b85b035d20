//! Configuration module for the grocery budget planner
//!
//! Settings are read from an optional JSON file named on the command line
//! (or via `GROCERY_BUDGET_CONFIG`); there is no implicit config location.

pub mod settings;

pub use settings::{OutputFormat, Settings, SortOrder};
