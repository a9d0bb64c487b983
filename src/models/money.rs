//! Money type for representing currency amounts
//!
//! Internally stores amounts in minor units (i64 cents) to avoid
//! floating-point precision issues. Provides safe arithmetic operations,
//! parsing of user-entered decimal text, and localized formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A monetary amount stored as minor units (hundredths of the currency unit)
///
/// Positive amounts are income, negative amounts are expenses. Using i64
/// minor units keeps ledger arithmetic exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use centavo::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole-unit portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the minor-unit portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive (income)
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative (expense)
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse a money amount from user-entered decimal text
    ///
    /// The value is scaled by 100 and rounded half away from zero to the
    /// nearest minor unit. Accepts `.` or `,` as the decimal separator, an
    /// optional leading `-`, and an optional `R$` or `$` currency symbol.
    ///
    /// Accepted forms: "12.50", "12,50", "-120.00", "R$ 10", "100"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        // Remove currency symbol if present
        let s = s.strip_prefix("R$").unwrap_or(s);
        let s = s.strip_prefix('$').unwrap_or(s);
        let s = s.trim();

        if s.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        // Normalize a comma decimal separator
        let normalized = s.replace(',', ".");

        let (whole, frac) = match normalized.split_once('.') {
            Some((w, f)) => (w, f),
            None => (normalized.as_str(), ""),
        };

        if !whole.chars().all(|c| c.is_ascii_digit())
            || !frac.chars().all(|c| c.is_ascii_digit())
            || (whole.is_empty() && frac.is_empty())
        {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
        };

        // Scale the fraction by 100 and round the third digit half away
        // from zero. Digits beyond the third cannot change the result.
        let mut digits = [0i64; 3];
        for (i, c) in frac.chars().take(3).enumerate() {
            digits[i] = (c as u8 - b'0') as i64;
        }
        let milli = digits[0] * 100 + digits[1] * 10 + digits[2];
        let frac_cents = (milli + 5) / 10;

        let cents = units * 100 + frac_cents;
        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format as a localized currency string
    ///
    /// Produces a grouped currency string: currency symbol,
    /// thousands separators, two decimals, and a leading `-` for negative
    /// amounts (e.g. `-R$ 1.234,56`).
    pub fn format_with(&self, symbol: &str, thousands_sep: char, decimal_sep: char) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let units = self.units().abs().to_string();

        let mut grouped = String::new();
        for (i, c) in units.chars().enumerate() {
            let remaining = units.len() - i;
            if i > 0 && remaining % 3 == 0 {
                grouped.push(thousands_sep);
            }
            grouped.push(c);
        }

        format!(
            "{}{} {}{}{:02}",
            sign,
            symbol,
            grouped,
            decimal_sep,
            self.cents_part()
        )
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
            write!(f, "-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.units(), self.cents_part())
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

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
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
