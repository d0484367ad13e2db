//! Printer sinks for report output
//!
//! The report engine emits lines exclusively through the [`ReportPrinter`]
//! capability; where those lines end up is the sink's business.

/// Capability for receiving report lines
///
/// Called once per logical report line. Lines arrive without a trailing
/// newline. Printing is infallible by contract; report generation has no
/// error path.
pub trait ReportPrinter {
    /// Receive a single report line
    fn print(&mut self, line: &str);
}

/// Printer that collects lines into an owned string buffer
///
/// Each line is stored with a trailing newline. This is the seam used by
/// the tests and by embedders that post-process report text.
#[derive(Debug, Clone, Default)]
pub struct BufferPrinter {
    text: String,
}

impl BufferPrinter {
    /// Create an empty buffer printer
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated report text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the printer, yielding the accumulated text
    pub fn into_text(self) -> String {
        self.text
    }
}

impl ReportPrinter for BufferPrinter {
    fn print(&mut self, line: &str) {
        self.text.push_str(line);
        self.text.push('\n');
    }
}

/// Printer that writes each line to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsolePrinter;

impl ReportPrinter for ConsolePrinter {
    fn print(&mut self, line: &str) {
        println!("{}", line);
    }
}
