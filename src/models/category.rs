//! Expense categories and their reimbursement rules
//!
//! The category set is a closed enumeration with an explicit `Other`
//! fallback arm. Each category carries its surcharge rate schedule,
//! overage threshold, meal flag, and display name.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::calendar::is_weekend;
use super::money::Money;

/// Category of an expense entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    /// Dinner meal
    Dinner,
    /// Breakfast meal
    Breakfast,
    /// Hotel or lodging
    Lodging,
    /// Travel and transit
    Transportation,
    /// Office supplies
    Supplies,
    /// Fallback for category values outside the known set
    Other,
}

impl ExpenseCategory {
    /// All named categories, in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Dinner,
            Self::Breakfast,
            Self::Lodging,
            Self::Transportation,
            Self::Supplies,
        ]
    }

    /// Parse a category from its name (case-insensitive)
    ///
    /// Unknown names degrade to [`ExpenseCategory::Other`], which carries
    /// zero surcharge and no overage threshold, rather than failing.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "dinner" => Self::Dinner,
            "breakfast" => Self::Breakfast,
            "lodging" => Self::Lodging,
            "transportation" => Self::Transportation,
            "supplies" => Self::Supplies,
            _ => Self::Other,
        }
    }

    /// Display name used in report lines
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dinner => "Dinner",
            Self::Breakfast => "Breakfast",
            Self::Lodging => "Lodging",
            Self::Transportation => "Transportation",
            Self::Supplies => "Supplies",
            Self::Other => "Other",
        }
    }

    /// Surcharge rate for amounts in this category on `date`
    ///
    /// Meal categories charge a higher rate on Saturdays and Sundays; all
    /// other categories are calendar-independent.
    pub fn surcharge_rate(&self, date: NaiveDate) -> f64 {
        match self {
            Self::Dinner => {
                if is_weekend(date) {
                    0.15
                } else {
                    0.10
                }
            }
            Self::Breakfast => {
                if is_weekend(date) {
                    0.10
                } else {
                    0.05
                }
            }
            Self::Lodging => 0.15,
            Self::Transportation => 0.05,
            Self::Supplies | Self::Other => 0.0,
        }
    }

    /// Surcharge in cents for `amount` in this category on `date`
    pub fn surcharge(&self, amount: Money, date: NaiveDate) -> f64 {
        amount.cents() as f64 * self.surcharge_rate(date)
    }

    /// Spending threshold in cents beyond which an expense is flagged
    pub fn overage_limit(&self) -> Option<i64> {
        match self {
            Self::Dinner => Some(5000),
            Self::Breakfast => Some(1000),
            Self::Lodging | Self::Transportation | Self::Supplies | Self::Other => None,
        }
    }

    /// Whether `amount` exceeds this category's spending threshold
    pub fn is_overage(&self, amount: Money) -> bool {
        self.overage_limit()
            .map_or(false, |limit| amount.cents() > limit)
    }

    /// Whether this category contributes to the meal subtotal
    pub fn is_meal(&self) -> bool {
        matches!(self, Self::Dinner | Self::Breakfast)
    }
}

impl Default for ExpenseCategory {
    fn default() -> Self {
        Self::Other
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
