//! Expense report aggregate
//!
//! Accumulates expense entries in insertion order and derives totals on
//! demand. Totals are never cached; every report generation recomputes
//! them from the sequence, so repeated generation cannot go stale.

use serde::{Deserialize, Serialize};

use crate::display::ReportPrinter;
use crate::models::Expense;

use super::reporter::ExpenseReporter;

/// Grand and meal totals for a report, in cents
///
/// Both totals are the sum of `amount + surcharge` over the expense
/// sequence; the meal total restricts the sum to meal expenses, so for
/// non-negative amounts it never exceeds the grand total.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReportTotals {
    /// Sum over every expense
    pub grand_total: f64,
    /// Sum restricted to meal expenses
    pub meal_total: f64,
}

/// An ordered collection of expense entries
///
/// Append-only: report lines appear in add order, and no removal or edit
/// operation exists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseReport {
    expenses: Vec<Expense>,
}

impl ExpenseReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an expense to the report
    pub fn add_expense(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// The expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Number of expenses in the report
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether the report has no expenses
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Compute totals over the current sequence
    ///
    /// Summation follows insertion order with double-precision
    /// accumulation, which pins rounding behavior at the two-decimal
    /// display boundary.
    pub fn totals(&self) -> ReportTotals {
        let mut totals = ReportTotals::default();
        for expense in &self.expenses {
            let subtotal = expense.subtotal();
            totals.grand_total += subtotal;
            if expense.is_meal() {
                totals.meal_total += subtotal;
            }
        }
        totals
    }

    /// Render the report through `printer`, one call per logical line
    pub fn generate_report<P: ReportPrinter>(&self, printer: &mut P) {
        ExpenseReporter::new(self).print_report(printer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, Money};

    fn expense(category: ExpenseCategory, cents: i64) -> Expense {
        Expense::new(category, Money::from_cents(cents))
    }

    #[test]
    fn test_empty_report_has_zero_totals() {
        let report = ExpenseReport::new();
        assert!(report.is_empty());
        assert_eq!(report.len(), 0);

        let totals = report.totals();
        assert_eq!(totals.grand_total, 0.0);
        assert_eq!(totals.meal_total, 0.0);
    }

    #[test]
    fn test_totals_for_mixed_report() {
        let mut report = ExpenseReport::new();
        report.add_expense(expense(ExpenseCategory::Dinner, 5000));
        report.add_expense(expense(ExpenseCategory::Breakfast, 2000));
        report.add_expense(expense(ExpenseCategory::Lodging, 3000));

        let totals = report.totals();
        // 5500 + 2100 meal cents, plus 3450 lodging cents
        assert_eq!(totals.meal_total, 7600.0);
        assert_eq!(totals.grand_total, 11050.0);
    }

    #[test]
    fn test_meal_total_never_exceeds_grand_total() {
        let mut report = ExpenseReport::new();
        for (category, cents) in [
            (ExpenseCategory::Dinner, 6000),
            (ExpenseCategory::Breakfast, 1000),
            (ExpenseCategory::Transportation, 800),
            (ExpenseCategory::Supplies, 500),
            (ExpenseCategory::Other, 100),
        ] {
            report.add_expense(expense(category, cents));
            let totals = report.totals();
            assert!(totals.grand_total >= totals.meal_total);
        }
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut report = ExpenseReport::new();
        report.add_expense(expense(ExpenseCategory::Lodging, 1));
        report.add_expense(expense(ExpenseCategory::Dinner, 2));
        report.add_expense(expense(ExpenseCategory::Lodging, 3));

        let amounts: Vec<i64> = report.expenses().iter().map(|e| e.amount().cents()).collect();
        assert_eq!(amounts, vec![1, 2, 3]);
        assert_eq!(report.len(), 3);
    }

    #[test]
    fn test_totals_are_recomputed_each_call() {
        let mut report = ExpenseReport::new();
        report.add_expense(expense(ExpenseCategory::Dinner, 3000));
        assert_eq!(report.totals().grand_total, 3300.0);
        assert_eq!(report.totals().grand_total, 3300.0);

        report.add_expense(expense(ExpenseCategory::Dinner, 3000));
        assert_eq!(report.totals().grand_total, 6600.0);
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut report = ExpenseReport::new();
        report.add_expense(expense(ExpenseCategory::Dinner, 3000));
        report.add_expense(expense(ExpenseCategory::Supplies, 250));

        let json = serde_json::to_string(&report).unwrap();
        let deserialized: ExpenseReport = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.expenses(), report.expenses());
    }
}
