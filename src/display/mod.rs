//! Display formatting for terminal output

pub mod report;

pub use report::{format_bar, format_money, format_percentage};
