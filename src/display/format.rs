//! Numeric formatting for report output
//!
//! Amounts stay in cents until they cross this boundary.

/// Format an amount in cents as major units with exactly two decimals
///
/// `3000.0` renders as `"30.00"`. No thousands separators; `.` is the
/// decimal separator. Negative amounts carry a leading `-`.
pub fn format_cents(cents: f64) -> String {
    format!("{:.2}", cents / 100.0)
}
