//! Error codes for Rinha diagnostics.

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Decode errors (E0100 - E0199)
    MalformedDocument,
    UnknownNodeKind,

    // Eval errors (E0200 - E0299)
    UnboundVariable,
    ArityMismatch,
    TypeMismatch,
    DivisionByZero,
    StackDepthExceeded,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            // Decode
            ErrorCode::MalformedDocument => "E0100",
            ErrorCode::UnknownNodeKind => "E0101",

            // Eval
            ErrorCode::UnboundVariable => "E0200",
            ErrorCode::ArityMismatch => "E0201",
            ErrorCode::TypeMismatch => "E0202",
            ErrorCode::DivisionByZero => "E0203",
            ErrorCode::StackDepthExceeded => "E0204",
        }
    }

    /// Get a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::MalformedDocument => "the document does not have the expected shape",
            ErrorCode::UnknownNodeKind => "unknown node kind",
            ErrorCode::UnboundVariable => "cannot find value in this scope",
            ErrorCode::ArityMismatch => "wrong number of arguments",
            ErrorCode::TypeMismatch => "mismatched types",
            ErrorCode::DivisionByZero => "attempt to divide by zero",
            ErrorCode::StackDepthExceeded => "evaluation nested too deeply",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
