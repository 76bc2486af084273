//! Expense model
//!
//! An expense is a described amount with a capture timestamp and an
//! attribution month. The attribution month decides which budget the expense
//! counts against; it is chosen when the expense is created and is independent
//! of the calendar month of `date`.

use chrono::{Local, NaiveDateTime, SubsecRound, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;
use super::month::Month;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Sequential identifier
    pub id: ExpenseId,

    /// What the money was spent on
    pub description: String,

    /// When the expense was created or last updated (local time)
    #[serde(with = "iso_timestamp")]
    pub date: NaiveDateTime,

    /// Amount spent (never negative)
    pub amount: Money,

    /// Budget month this expense is attributed to
    pub month: Month,
}

impl Expense {
    /// Create a new expense stamped with the current local time
    pub fn new(id: ExpenseId, description: impl Into<String>, amount: Money, month: Month) -> Self {
        Self {
            id,
            description: description.into(),
            date: now(),
            amount,
            month,
        }
    }

    /// Replace description and amount, refreshing the timestamp.
    /// The attribution month is left untouched.
    pub fn revise(&mut self, description: impl Into<String>, amount: Money) {
        self.description = description.into();
        self.amount = amount;
        self.date = now();
    }

    /// Calendar month of the timestamp (not the attribution month)
    pub fn calendar_month(&self) -> Month {
        Month::of(&self.date)
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount(self.amount));
        }

        Ok(())
    }
}

/// Current local time at microsecond precision
fn now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(6)
}

/// `YYYY-MM-DDTHH:MM:SS` with a six-digit fraction when it is non-zero
mod iso_timestamp {
    use super::*;
    use serde::{Deserializer, Serializer};

    const SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn format(date: &NaiveDateTime) -> String {
        let micros = date.nanosecond() / 1_000;
        if micros == 0 {
            date.format(SECONDS).to_string()
        } else {
            format!("{}.{:06}", date.format(SECONDS), micros)
        }
    }

    pub fn serialize<S: Serializer>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&text, "%Y-%m-%dT%H:%M:%S%.f")
            .map_err(|e| serde::de::Error::custom(format!("invalid date '{}': {}", text, e)))
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} {}",
            self.id,
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyDescription,
    NegativeAmount(Money),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Expense description cannot be empty"),
            Self::NegativeAmount(amount) => {
                write!(f, "Expense amount cannot be negative: {}", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn june() -> Month {
        Month::new(6).unwrap()
    }

    #[test]
    fn test_new_expense() {
        let expense = Expense::new(ExpenseId::new(1), "Groceries", Money::from_cents(5025), june());
        assert_eq!(expense.id, ExpenseId::new(1));
        assert_eq!(expense.description, "Groceries");
        assert_eq!(expense.amount, Money::from_cents(5025));
        assert_eq!(expense.month, june());
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_revise_keeps_month() {
        let mut expense = Expense::new(ExpenseId::new(1), "Groceries", Money::from_cents(5025), june());
        expense.date = NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        expense.revise("Supermarket", Money::from_cents(5550));

        assert_eq!(expense.description, "Supermarket");
        assert_eq!(expense.amount, Money::from_cents(5550));
        assert_eq!(expense.month, june());
        assert!(expense.date.date() > NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    }

    #[test]
    fn test_validation() {
        let mut expense = Expense::new(ExpenseId::new(1), "", Money::zero(), june());
        assert_eq!(
            expense.validate(),
            Err(ExpenseValidationError::EmptyDescription)
        );

        expense.description = "Gas".into();
        expense.amount = Money::from_cents(-100);
        assert!(matches!(
            expense.validate(),
            Err(ExpenseValidationError::NegativeAmount(_))
        ));
    }

    #[test]
    fn test_json_shape() {
        let mut expense = Expense::new(ExpenseId::new(3), "Gas", Money::from_cents(3000), june());
        expense.date = NaiveDate::from_ymd_opt(2025, 5, 2)
            .unwrap()
            .and_hms_micro_opt(8, 15, 0, 123456)
            .unwrap();

        let value = serde_json::to_value(&expense).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["description"], "Gas");
        assert_eq!(value["date"], "2025-05-02T08:15:00.123456");
        assert_eq!(value["amount"], 30.0);
        assert_eq!(value["month"], 6);
    }

    #[test]
    fn test_reads_existing_file_format() {
        let json = r#"{
            "id": 1,
            "description": "Groceries",
            "date": "2024-05-14T10:21:07.532911",
            "amount": 50.25,
            "month": 5
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.amount, Money::from_cents(5025));
        assert_eq!(expense.month.number(), 5);
        assert_eq!(expense.calendar_month().number(), 5);
    }

    #[test]
    fn test_blank_description_is_still_a_description() {
        let expense = Expense::new(ExpenseId::new(1), "  ", Money::zero(), june());
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_timestamp_has_microsecond_precision() {
        let expense = Expense::new(ExpenseId::new(1), "Gas", Money::from_cents(3000), june());
        assert_eq!(expense.date.nanosecond() % 1_000, 0);

        let value = serde_json::to_value(&expense).unwrap();
        let date = value["date"].as_str().unwrap();
        // YYYY-MM-DDTHH:MM:SS, optionally followed by .ffffff
        assert!(date.len() == 19 || date.len() == 26, "unexpected date {}", date);
    }

    #[test]
    fn test_whole_second_timestamp_has_no_fraction() {
        let mut expense = Expense::new(ExpenseId::new(1), "Gas", Money::from_cents(3000), june());
        expense.date = NaiveDate::from_ymd_opt(2025, 5, 2)
            .unwrap()
            .and_hms_milli_opt(8, 15, 0, 0)
            .unwrap();
        assert_eq!(serde_json::to_value(&expense).unwrap()["date"], "2025-05-02T08:15:00");

        expense.date = NaiveDate::from_ymd_opt(2025, 5, 2)
            .unwrap()
            .and_hms_milli_opt(8, 15, 0, 250)
            .unwrap();
        assert_eq!(
            serde_json::to_value(&expense).unwrap()["date"],
            "2025-05-02T08:15:00.250000"
        );
    }
}
