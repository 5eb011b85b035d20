//! Interactive planning flow
//!
//! Walks the user through setting a weekly grocery budget and allocating it
//! across categories.

pub mod steps;
pub mod wizard;

pub use wizard::PlannerWizard;
