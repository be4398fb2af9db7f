//! Destinations for `print` output.
//!
//! Programs print to stdout. Tests and embedders capture lines into a
//! buffer instead.

use std::io::{self, Write};

/// Where `print` writes its lines.
#[derive(Debug, Clone, Default)]
pub enum PrintHandler {
    #[default]
    Stdout,
    Buffer(String),
}

impl PrintHandler {
    /// A handler that captures output.
    pub fn buffer() -> Self {
        PrintHandler::Buffer(String::new())
    }

    /// Print a line (with newline).
    pub fn println(&mut self, line: &str) {
        match self {
            PrintHandler::Stdout => write_line(&mut io::stdout().lock(), line),
            PrintHandler::Buffer(buf) => {
                buf.push_str(line);
                buf.push('\n');
            }
        }
    }

    /// Captured output. Empty for stdout.
    pub fn output(&self) -> &str {
        match self {
            PrintHandler::Stdout => "",
            PrintHandler::Buffer(buf) => buf,
        }
    }

    /// Captured output as lines.
    pub fn lines(&self) -> Vec<&str> {
        self.output().lines().collect()
    }

    /// Take captured output, leaving the buffer empty.
    pub fn take_output(&mut self) -> String {
        match self {
            PrintHandler::Stdout => String::new(),
            PrintHandler::Buffer(buf) => std::mem::take(buf),
        }
    }
}

/// Write one line. A closed pipe (`rinha prog.json | head -1`) drops the
/// line; other write errors are logged.
fn write_line(out: &mut impl Write, line: &str) {
    match writeln!(out, "{line}") {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {}
        Err(e) => tracing::warn!(error = %e, "cannot write `print` output"),
    }
}
