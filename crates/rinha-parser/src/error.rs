//! Decode errors.

use rinha_common::Location;
use rinha_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label};
use thiserror::Error;

/// Errors raised while turning a JSON document into terms.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The document is not JSON, or a node is missing a field or has one of the wrong type.
    #[error("malformed document at `{}`: {message}", display_path(.path))]
    MalformedDocument {
        path: String,
        message: String,
        location: Option<Location>,
    },

    /// The `kind` discriminant names no known term.
    #[error("unknown node kind `{kind}` at `{}`", display_path(.path))]
    UnknownNodeKind {
        kind: String,
        path: String,
        location: Option<Location>,
    },
}

impl DecodeError {
    pub(crate) fn malformed(
        path: &str,
        location: Option<&Location>,
        message: impl Into<String>,
    ) -> Self {
        DecodeError::MalformedDocument {
            path: path.to_string(),
            message: message.into(),
            location: location.cloned(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DecodeError::MalformedDocument { .. } => ErrorCode::MalformedDocument,
            DecodeError::UnknownNodeKind { .. } => ErrorCode::UnknownNodeKind,
        }
    }

    /// JSON pointer of the offending node.
    pub fn path(&self) -> &str {
        match self {
            DecodeError::MalformedDocument { path, .. } | DecodeError::UnknownNodeKind { path, .. } => {
                path
            }
        }
    }

    pub fn location(&self) -> Option<&Location> {
        match self {
            DecodeError::MalformedDocument { location, .. }
            | DecodeError::UnknownNodeKind { location, .. } => location.as_ref(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let location = self.location().filter(|l| !l.filename.is_empty()).cloned();
        let mut diagnostic = Diagnostic::error(DiagnosticKind::Decode, location.clone(), self.to_string())
            .with_code(self.code());
        if let Some(location) = location {
            diagnostic = diagnostic.with_label(Label::new(location, self.code().description()));
        }
        match self {
            DecodeError::UnknownNodeKind { .. } => diagnostic.with_help(
                "expected one of Int, Str, Bool, Var, Function, Call, Let, If, Binary, Tuple, First, Second, Print",
            ),
            DecodeError::MalformedDocument { .. } => diagnostic,
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::malformed("", None, err.to_string())
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() { "/" } else { path }
}
