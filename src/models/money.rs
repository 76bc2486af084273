//! Currency amounts
//!
//! `Money` keeps the decimal value exactly as entered: `0.001` stays `0.001`
//! and `10.999` stays `10.999`. Only display rounds, to two decimals.
//!
//! On disk an amount is a plain JSON number in currency units (`50.25`,
//! `150.0`), so `expenses.json` and `budget.json` stay readable by other tools.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A decimal currency amount
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    /// Create an amount from hundredths of the currency unit
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// The exact decimal value
    pub const fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Add two amounts, `None` when the result is out of range
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Total of `amounts`, `None` when it is out of range
    pub fn checked_sum<I>(amounts: I) -> Option<Self>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Self::zero(), |total, amount| total.checked_add(amount))
    }

    /// Two-decimal text without a currency symbol (`50.25`)
    pub fn to_fixed(&self) -> String {
        format!("{:.2}", self.0.round_dp(2))
    }

    /// Parse user input such as `10`, `10.5`, `$10.50`, `-10` or `1e3`
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let text = s.trim();
        let (negative, rest) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let digits = rest.strip_prefix('$').unwrap_or(rest);

        if digits.is_empty() || digits.starts_with(['-', '+']) {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let value = if digits.contains(['e', 'E']) {
            Decimal::from_scientific(digits)
        } else {
            Decimal::from_str(digits)
        }
        .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

        Ok(Self(if negative { -value } else { value }))
    }

    fn from_float(units: f64) -> Option<Self> {
        if !units.is_finite() {
            return None;
        }
        // `Display` for f64 gives the shortest text that reads back as the same
        // float, so `10.999` comes back as exactly 10.999
        Decimal::from_str(&units.to_string()).ok().map(Self)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.0.round_dp(2);
        if rounded.is_sign_negative() && !rounded.is_zero() {
            write!(f, "-${:.2}", rounded.abs())
        } else {
            write!(f, "${:.2}", rounded.abs())
        }
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Through text, so the float is the one nearest the exact decimal
        let units: f64 = self
            .0
            .to_string()
            .parse()
            .map_err(|_| serde::ser::Error::custom(format!("amount {} out of range", self.0)))?;
        serializer.serialize_f64(units)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let units = f64::deserialize(deserializer)?;
        Self::from_float(units).ok_or_else(|| {
            serde::de::Error::custom(format!("amount {} is not a storable number", units))
        })
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
