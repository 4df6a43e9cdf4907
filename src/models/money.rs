//! Currency amounts
//!
//! Amounts keep the exact number the user typed or the data file holds.
//! Rounding to two decimal places happens only when an amount is printed, so
//! rewriting a collection never alters records the command did not touch.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An amount of money in currency units
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(f64);

/// Error returned when a command-line amount cannot be read
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid amount: {0}")]
pub struct MoneyParseError(String);

impl Money {
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// assert_eq!(Money::new(10.5).to_string(), "$10.50");
    /// ```
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    pub const fn zero() -> Self {
        Self(0.0)
    }

    pub const fn value(&self) -> f64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    /// Read an amount such as `12`, `3.5`, `.75`, `$4.20` or `-2`.
    ///
    /// Non-finite values (`inf`, `NaN`) are rejected.
    pub fn parse(input: &str) -> Result<Self, MoneyParseError> {
        let invalid = || MoneyParseError(input.to_string());

        let trimmed = input.trim();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);
        if rest.starts_with(['+', '-']) {
            return Err(invalid());
        }

        let value: f64 = rest.parse().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(invalid());
        }

        Ok(Self(if negative { -value } else { value }))
    }

    /// `$12.50`, or with whatever symbol the settings name
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.0 < 0.0 { "-" } else { "" };
        format!("{}{}{:.2}", sign, symbol, self.0.abs())
    }

    /// Two decimal places, no symbol (`12.00`)
    pub fn to_decimal_string(&self) -> String {
        format!("{:.2}", self.0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
