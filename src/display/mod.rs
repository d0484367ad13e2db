//! Output formatting and printer sinks
//!
//! Provides the fixed two-decimal amount formatting used by report lines
//! and the printer capability the report engine emits through.

pub mod format;
pub mod printer;

pub use format::format_cents;
pub use printer::{BufferPrinter, ConsolePrinter, ReportPrinter};
