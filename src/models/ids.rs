//! Expense identifiers
//!
//! Expense IDs are sequential positive integers. A new ID is always one more
//! than the highest ID currently stored, so IDs never collide with a live
//! expense.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a stored expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u64);

impl ExpenseId {
    /// Wrap a raw ID value
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw ID value
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Allocate the ID following the highest of `existing` (1 when empty)
    pub fn next_after<I>(existing: I) -> Self
    where
        I: IntoIterator<Item = ExpenseId>,
    {
        let max = existing.into_iter().map(|id| id.0).max().unwrap_or(0);
        Self(max + 1)
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ExpenseId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for ExpenseId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}
