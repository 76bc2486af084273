//! Monthly budget model
//!
//! Holds at most one spending ceiling per calendar month. Persisted as a JSON
//! object keyed by month number as text (`{"5": 1000.0}`).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::money::Money;
use super::month::Month;

/// Budget amounts keyed by month
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthlyBudgets {
    amounts: BTreeMap<Month, Money>,
}

impl MonthlyBudgets {
    /// Create an empty budget table
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or overwrite) the budget for a month
    pub fn set(&mut self, month: Month, amount: Money) -> Option<Money> {
        self.amounts.insert(month, amount)
    }

    /// The stored budget for a month, if one was set
    pub fn get(&self, month: Month) -> Option<Money> {
        self.amounts.get(&month).copied()
    }

    /// The budget for a month, reading an unset month as zero
    pub fn get_or_zero(&self, month: Month) -> Money {
        self.get(month).unwrap_or_default()
    }

    /// Iterate months that have a budget, in calendar order
    pub fn iter(&self) -> impl Iterator<Item = (Month, Money)> + '_ {
        self.amounts.iter().map(|(m, a)| (*m, *a))
    }

    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }
}
