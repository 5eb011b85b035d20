//! Interactive input
//!
//! Line-based input acquisition for the planner: a pluggable line source and
//! a prompter that reports bad entries and re-asks, optionally giving up
//! after a number of attempts.

pub mod prompt;
pub mod source;

pub use prompt::Prompter;
pub use source::{LineSource, ReaderLines};
