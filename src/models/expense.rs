//! Expense entry model
//!
//! A single dated expense: category, amount in cents, calendar date.
//! Immutable once constructed; owned by the report it is added to.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ExpenseResult;

use super::calendar::{parse_date, reference_date};
use super::category::ExpenseCategory;
use super::money::Money;

/// A single expense entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    category: ExpenseCategory,
    amount: Money,
    date: NaiveDate,
}

impl Expense {
    /// Create an expense stamped with the fixed reference date
    pub fn new(category: ExpenseCategory, amount: Money) -> Self {
        Self::on_date(category, amount, reference_date())
    }

    /// Create an expense on a specific date
    pub fn on_date(category: ExpenseCategory, amount: Money, date: NaiveDate) -> Self {
        Self {
            category,
            amount,
            date,
        }
    }

    /// Create an expense from raw caller input: integer cents and an
    /// optional `YYYY-MM-DD` date string
    ///
    /// A malformed date string is rejected here, so an expense never
    /// carries an unparseable date. Amounts are accepted as given,
    /// including zero and negative values.
    pub fn from_parts(
        category: ExpenseCategory,
        amount_cents: i64,
        date: Option<&str>,
    ) -> ExpenseResult<Self> {
        let date = match date {
            Some(s) => parse_date(s)?,
            None => reference_date(),
        };
        Ok(Self::on_date(category, Money::from_cents(amount_cents), date))
    }

    /// The expense category
    pub fn category(&self) -> ExpenseCategory {
        self.category
    }

    /// The base amount in cents
    pub fn amount(&self) -> Money {
        self.amount
    }

    /// The calendar date of the expense
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Surcharge in cents under the category's rate schedule for this date
    pub fn surcharge(&self) -> f64 {
        self.category.surcharge(self.amount, self.date)
    }

    /// Base amount plus surcharge, in cents
    pub fn subtotal(&self) -> f64 {
        self.amount.cents() as f64 + self.surcharge()
    }

    /// Whether this expense counts toward the meal subtotal
    pub fn is_meal(&self) -> bool {
        self.category.is_meal()
    }

    /// Whether this expense exceeds its category's spending threshold
    pub fn is_overage(&self) -> bool {
        self.category.is_overage(self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExpenseError;

    #[test]
    fn test_new_uses_reference_date() {
        let expense = Expense::new(ExpenseCategory::Dinner, Money::from_cents(3000));
        assert_eq!(expense.date(), reference_date());
        // reference date is a weekday, so the weekday rate applies
        assert_eq!(expense.surcharge(), 300.0);
        assert_eq!(expense.subtotal(), 3300.0);
    }

    #[test]
    fn test_weekend_subtotal() {
        // 2024-03-16 is a Saturday
        let date = NaiveDate::from_ymd_opt(2024, 3, 16).unwrap();
        let expense = Expense::on_date(ExpenseCategory::Dinner, Money::from_cents(1000), date);
        assert_eq!(expense.surcharge(), 150.0);
        assert_eq!(expense.subtotal(), 1150.0);
    }

    #[test]
    fn test_from_parts_with_date() {
        let expense =
            Expense::from_parts(ExpenseCategory::Breakfast, 1000, Some("2024-03-16")).unwrap();
        assert_eq!(expense.category(), ExpenseCategory::Breakfast);
        assert_eq!(expense.amount(), Money::from_cents(1000));
        assert_eq!(expense.surcharge(), 100.0);
    }

    #[test]
    fn test_from_parts_without_date() {
        let expense = Expense::from_parts(ExpenseCategory::Lodging, 3000, None).unwrap();
        assert_eq!(expense.date(), reference_date());
        assert_eq!(expense.surcharge(), 450.0);
    }

    #[test]
    fn test_from_parts_rejects_malformed_date() {
        let err = Expense::from_parts(ExpenseCategory::Dinner, 3000, Some("16/03/2024"))
            .unwrap_err();
        assert_eq!(err, ExpenseError::InvalidDateFormat("16/03/2024".into()));
    }

    #[test]
    fn test_predicates_delegate_to_category() {
        let dinner = Expense::new(ExpenseCategory::Dinner, Money::from_cents(5001));
        assert!(dinner.is_meal());
        assert!(dinner.is_overage());

        let lodging = Expense::new(ExpenseCategory::Lodging, Money::from_cents(999_999));
        assert!(!lodging.is_meal());
        assert!(!lodging.is_overage());
    }

    #[test]
    fn test_negative_amount_passes_through() {
        let expense = Expense::new(ExpenseCategory::Transportation, Money::from_cents(-1000));
        assert_eq!(expense.surcharge(), -50.0);
        assert_eq!(expense.subtotal(), -1050.0);
        assert!(!expense.is_overage());
    }

    #[test]
    fn test_serialization_round_trip() {
        let expense = Expense::from_parts(ExpenseCategory::Supplies, 250, Some("2024-03-11"))
            .unwrap();
        let json = serde_json::to_string(&expense).unwrap();
        let deserialized: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(expense, deserialized);
    }
}
