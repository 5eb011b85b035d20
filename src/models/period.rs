//! The ISO week a grocery plan is made for

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ISO-8601 week (e.g. "2025-W03")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BudgetWeek {
    pub year: i32,
    pub week: u32,
}

impl BudgetWeek {
    pub fn new(year: i32, week: u32) -> Self {
        Self { year, week }
    }

    /// The week containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self {
            year: iso.year(),
            week: iso.week(),
        }
    }

    /// The week containing today's local date
    pub fn current() -> Self {
        Self::containing(chrono::Local::now().date_naive())
    }

    /// Monday of this week
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_isoywd_opt(self.year, self.week, Weekday::Mon)
            .unwrap_or(NaiveDate::MIN)
    }

    /// Sunday of this week (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        NaiveDate::from_isoywd_opt(self.year, self.week, Weekday::Sun)
            .unwrap_or_else(|| self.start_date() + Duration::days(6))
    }
}

impl fmt::Display for BudgetWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_containing() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let week = BudgetWeek::containing(date);
        assert_eq!(week, BudgetWeek::new(2025, 3));
        assert_eq!(week.to_string(), "2025-W03");
    }

    #[test]
    fn test_iso_year_boundary() {
        // Dec 30, 2024 falls in ISO week 1 of 2025
        let date = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
        assert_eq!(BudgetWeek::containing(date), BudgetWeek::new(2025, 1));
    }

    #[test]
    fn test_start_and_end() {
        let week = BudgetWeek::new(2025, 3);
        assert_eq!(week.start_date(), NaiveDate::from_ymd_opt(2025, 1, 13).unwrap());
        assert_eq!(week.end_date(), NaiveDate::from_ymd_opt(2025, 1, 19).unwrap());
    }
}
