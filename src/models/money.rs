//! Fixed-point money amounts
//!
//! Amounts are whole cents in an i64, so totals accumulate exactly and
//! rounding never happens before display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// A currency amount counted in cents
///
/// The single implicit currency has no stored unit; two decimal places of
/// precision are exact by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Construct from a cent count
    ///
    /// ```
    /// use expense_ledger::models::Money;
    /// assert_eq!(Money::from_cents(1250).to_string(), "$12.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Construct from whole dollars plus a cent remainder
    pub const fn from_dollars_cents(dollars: i64, cents: i64) -> Self {
        Self(dollars * 100 + cents)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    /// The full amount as cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole-dollar part, truncated toward zero
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Remaining cents, 0..=99
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Bare two-decimal rendering with no currency symbol, `2.50`
    pub fn plain(&self) -> String {
        if self.is_negative() {
            format!("-{}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            format!("{}.{:02}", self.dollars(), self.cents_part())
        }
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse an amount from user-entered text
    ///
    /// Accepts "10.50", "-10.50", "$10.50", "10" and "10.5". More than two
    /// decimal places is rejected rather than silently truncated.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let raw = s.trim();

        // Sign first, then an optional currency symbol
        let (negative, raw) = match raw.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, raw),
        };
        let raw = raw.strip_prefix('$').unwrap_or(raw);

        let invalid = || MoneyParseError::InvalidFormat(s.trim().to_string());

        let cents = match raw.split_once('.') {
            Some((whole, fraction)) => {
                let dollars = parse_digits(whole).ok_or_else(invalid)?;
                let fraction_cents = parse_fraction(fraction).ok_or_else(invalid)?;
                dollars
                    .checked_mul(100)
                    .and_then(|c| c.checked_add(fraction_cents))
                    .ok_or_else(invalid)?
            }
            None => parse_digits(raw)
                .and_then(|dollars| dollars.checked_mul(100))
                .ok_or_else(invalid)?,
        };

        Ok(Self(if negative { -cents } else { cents }))
    }
}

/// Parse a run of ASCII digits; rejects empty input, signs and separators.
fn parse_digits(s: &str) -> Option<i64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Cents value of the fractional part: "" is 0, "5" is 50, "50" is 50.
fn parse_fraction(s: &str) -> Option<i64> {
    match s.len() {
        0 => Some(0),
        1 => parse_digits(s).map(|d| d * 10),
        2 => parse_digits(s),
        _ => None,
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-${}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            write!(f, "${}.{:02}", self.dollars(), self.cents_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error for text that does not parse as an amount
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
