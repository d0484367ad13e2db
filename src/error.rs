//! Custom error types for the expense report calculator
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense report operations
///
/// The calculator itself is total: accumulation and report generation
/// never fail. The only fallible seam is date parsing at expense
/// construction time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpenseError {
    /// A date string could not be parsed as a valid `YYYY-MM-DD` calendar date
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDateFormat(String),
}

/// Result type alias for expense report operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
