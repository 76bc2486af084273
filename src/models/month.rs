//! Budget month representation
//!
//! A `Month` is a calendar month number (1-12) with no year attached. Expenses
//! are attributed to a month and budgets are keyed by month.

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar month number in the range 1-12
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Month(u32);

impl Month {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 12;

    /// Create a month, returning `None` when the number is outside 1-12
    pub fn new(number: i64) -> Option<Self> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&number) {
            Some(Self(number as u32))
        } else {
            None
        }
    }

    /// The calendar month of a timestamp
    pub fn of(timestamp: &NaiveDateTime) -> Self {
        Self(timestamp.month())
    }

    /// Get the month number (1-12)
    pub const fn number(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Month {
    type Error = MonthParseError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value as i64).ok_or(MonthParseError::OutOfRange(value as i64))
    }
}

impl From<Month> for u32 {
    fn from(month: Month) -> Self {
        month.0
    }
}

impl FromStr for Month {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: i64 = s
            .trim()
            .parse()
            .map_err(|_| MonthParseError::NotANumber(s.to_string()))?;
        Self::new(number).ok_or(MonthParseError::OutOfRange(number))
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    NotANumber(String),
    OutOfRange(i64),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::NotANumber(s) => write!(f, "Not a month number: {}", s),
            MonthParseError::OutOfRange(n) => write!(f, "Month out of range (1-12): {}", n),
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_range() {
        assert!(Month::new(0).is_none());
        assert_eq!(Month::new(1).unwrap().number(), 1);
        assert_eq!(Month::new(12).unwrap().number(), 12);
        assert!(Month::new(13).is_none());
        assert!(Month::new(-5).is_none());
    }

    #[test]
    fn test_parse() {
        assert_eq!("5".parse::<Month>().unwrap().number(), 5);
        assert_eq!(" 11 ".parse::<Month>().unwrap().number(), 11);
        assert_eq!(
            "may".parse::<Month>(),
            Err(MonthParseError::NotANumber("may".into()))
        );
        assert_eq!("13".parse::<Month>(), Err(MonthParseError::OutOfRange(13)));
    }

    #[test]
    fn test_of_timestamp() {
        let ts = NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(9, 26, 53)
            .unwrap();
        assert_eq!(Month::of(&ts).number(), 3);
    }

    #[test]
    fn test_serde() {
        let m = Month::new(6).unwrap();
        assert_eq!(serde_json::to_string(&m).unwrap(), "6");
        assert_eq!(serde_json::from_str::<Month>("6").unwrap(), m);
        assert!(serde_json::from_str::<Month>("13").is_err());
    }
}
