//! expense-report - Itemized expense report calculator
//!
//! This library computes and renders an itemized expense report: given a
//! list of dated expense entries of varying categories, it derives
//! per-category surcharges, flags entries that exceed a category-specific
//! spending threshold, and emits a formatted textual report with a meal
//! subtotal and a grand total through a pluggable printer sink.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, calendar rules, expenses)
//! - `reports`: The report aggregate and the line renderer
//! - `display`: Amount formatting and printer sinks
//!
//! # Example
//!
//! ```rust
//! use expense_report::{BufferPrinter, Expense, ExpenseCategory, ExpenseReport, Money};
//!
//! let mut report = ExpenseReport::new();
//! report.add_expense(Expense::new(ExpenseCategory::Dinner, Money::from_cents(3000)));
//!
//! let mut printer = BufferPrinter::new();
//! report.generate_report(&mut printer);
//! assert!(printer.text().starts_with("Expense Report\n"));
//! ```

pub mod display;
pub mod error;
pub mod models;
pub mod reports;

pub use display::{BufferPrinter, ConsolePrinter, ReportPrinter};
pub use error::{ExpenseError, ExpenseResult};
pub use models::{Expense, ExpenseCategory, Money};
pub use reports::{ExpenseReport, ExpenseReporter, ReportTotals};
