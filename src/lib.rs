//! Grocery Budget - interactive weekly grocery budget planner
//!
//! This library provides the core functionality for the `grocery-budget`
//! command. A session asks for a weekly budget, collects category
//! allocations until the user types `done`, and prints a summary of what was
//! allocated, what remains and how much of the budget is used.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Settings loaded from an optional JSON file
//! - `error`: Custom error types
//! - `models`: Money, allocations, the planning week and session state
//! - `input`: Line sources and the retrying prompter
//! - `planner`: The interactive budget and categories steps
//! - `reports`: Summary arithmetic, classification and terminal rendering
//! - `display`: Formatting helpers
//! - `export`: JSON, YAML and CSV renderings of the summary
//! - `logging`: tracing subscriber setup
//!
//! # Example
//!
//! ```rust
//! use std::io::Cursor;
//! use grocery_budget::config::Settings;
//! use grocery_budget::input::ReaderLines;
//! use grocery_budget::models::BudgetWeek;
//! use grocery_budget::planner::PlannerWizard;
//! use grocery_budget::reports::{AllocationSummary, BudgetStatus};
//!
//! let settings = Settings::default();
//! let wizard = PlannerWizard::new(&settings);
//! let input = Cursor::new("100\nproduce\n30\nmeat\n45\ndone\n");
//! let mut prompter = wizard.prompter(ReaderLines::new(input), Vec::new());
//!
//! let session = wizard.run(&mut prompter)?;
//! let summary = AllocationSummary::from_session(&session, &settings, BudgetWeek::current());
//! assert!(matches!(summary.status, BudgetStatus::RoomToAdjust { .. }));
//! # Ok::<(), grocery_budget::PlannerError>(())
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod input;
pub mod logging;
pub mod models;
pub mod planner;
pub mod reports;

pub use error::{PlannerError, PlannerResult};
