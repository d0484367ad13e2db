//! Report rendering
//!
//! Walks a report's expense sequence and emits the textual report line by
//! line through a printer sink. The reporter performs no I/O of its own.

use crate::display::{format_cents, ReportPrinter};
use crate::models::Expense;

use super::expense_report::ExpenseReport;

/// Width of the separator lines framing the expense listing
const SEPARATOR_WIDTH: usize = 14;

/// Renders an expense report through a printer sink
///
/// The output format is stable, byte for byte:
///
/// ```text
/// Expense Report
/// --------------
/// Dinner\t30.00\t
/// --------------
/// Meal Total: 33.00
/// Total: 33.00
/// ```
#[derive(Debug)]
pub struct ExpenseReporter<'a> {
    report: &'a ExpenseReport,
}

impl<'a> ExpenseReporter<'a> {
    /// Create a reporter over `report`
    pub fn new(report: &'a ExpenseReport) -> Self {
        Self { report }
    }

    /// Emit the full report: header, one line per expense, totals
    pub fn print_report<P: ReportPrinter>(&self, printer: &mut P) {
        self.print_header(printer);
        self.print_expenses(printer);
        self.print_totals(printer);
    }

    fn print_header<P: ReportPrinter>(&self, printer: &mut P) {
        printer.print("Expense Report");
        printer.print(&separator());
    }

    fn print_expenses<P: ReportPrinter>(&self, printer: &mut P) {
        for expense in self.report.expenses() {
            printer.print(&expense_line(expense));
        }
    }

    fn print_totals<P: ReportPrinter>(&self, printer: &mut P) {
        let totals = self.report.totals();
        printer.print(&separator());
        printer.print(&format!("Meal Total: {}", format_cents(totals.meal_total)));
        printer.print(&format!("Total: {}", format_cents(totals.grand_total)));
    }
}

fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// One tab-separated report line: name, amount, overage marker
///
/// The marker column is always present; it is the empty string when the
/// expense is within its category's threshold.
fn expense_line(expense: &Expense) -> String {
    let marker = if expense.is_overage() { "X" } else { "" };
    format!(
        "{}\t{}\t{}",
        expense.category().name(),
        format_cents(expense.amount().cents() as f64),
        marker
    )
}
