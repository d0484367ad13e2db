//! Core data models for the expense report calculator
//!
//! This module contains the expense domain: amounts in cents, the closed
//! category set with its pricing rules, calendar handling, and the expense
//! entry itself.

pub mod calendar;
pub mod category;
pub mod expense;
pub mod money;

pub use calendar::{is_weekend, parse_date, reference_date};
pub use category::ExpenseCategory;
pub use expense::Expense;
pub use money::Money;
