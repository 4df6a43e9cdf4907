//! Monthly budget model
//!
//! A spending ceiling for one calendar month. The (month, year) pair is the
//! key; the repository keeps at most one budget per pair.

use chrono::Month;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A budget ceiling for a single month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Month number, 1-12
    pub month: u32,
    pub year: i32,
    pub amount: Money,
}

impl Budget {
    pub fn new(month: u32, year: i32, amount: Money) -> Self {
        Self {
            month,
            year,
            amount,
        }
    }

    /// Whether this budget covers the given month and year
    pub fn is_for(&self, month: u32, year: i32) -> bool {
        self.month == month && self.year == year
    }

    /// English name of the budget's month
    pub fn month_name(&self) -> &'static str {
        month_from_number(self.month)
            .map(|m| m.name())
            .unwrap_or("Unknown")
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.month_name(), self.year, self.amount)
    }
}

/// Convert a 1-based month number into a calendar month
pub fn month_from_number(month: u32) -> Option<Month> {
    u8::try_from(month)
        .ok()
        .filter(|m| (1..=12).contains(m))
        .and_then(|m| Month::try_from(m).ok())
}
