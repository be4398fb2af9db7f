//! Evaluation errors.

use rinha_common::Location;
use rinha_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label};
use thiserror::Error;

/// Evaluation errors. The first one raised aborts the whole evaluation.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("unbound variable `{name}`")]
    UnboundVariable { name: String, location: Location },

    #[error("wrong number of arguments: expected {expected}, received {received}")]
    ArityMismatch {
        expected: usize,
        received: usize,
        location: Location,
    },

    #[error("type mismatch in {context}: found {found}")]
    TypeMismatch {
        context: String,
        found: String,
        location: Location,
    },

    #[error("division by zero")]
    DivisionByZero { location: Location },

    #[error("maximum evaluation depth of {limit} exceeded")]
    StackDepthExceeded { limit: usize, location: Location },
}

impl EvalError {
    pub(crate) fn type_mismatch(
        context: impl Into<String>,
        found: impl Into<String>,
        location: &Location,
    ) -> Self {
        EvalError::TypeMismatch {
            context: context.into(),
            found: found.into(),
            location: location.clone(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            EvalError::UnboundVariable { .. } => ErrorCode::UnboundVariable,
            EvalError::ArityMismatch { .. } => ErrorCode::ArityMismatch,
            EvalError::TypeMismatch { .. } => ErrorCode::TypeMismatch,
            EvalError::DivisionByZero { .. } => ErrorCode::DivisionByZero,
            EvalError::StackDepthExceeded { .. } => ErrorCode::StackDepthExceeded,
        }
    }

    /// Location of the term that raised the error.
    pub fn location(&self) -> &Location {
        match self {
            EvalError::UnboundVariable { location, .. }
            | EvalError::ArityMismatch { location, .. }
            | EvalError::TypeMismatch { location, .. }
            | EvalError::DivisionByZero { location }
            | EvalError::StackDepthExceeded { location, .. } => location,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let location = self.location().clone();
        let diagnostic = Diagnostic::error(DiagnosticKind::Eval, Some(location.clone()), self.to_string())
            .with_code(self.code())
            .with_label(Label::new(location, self.code().description()));

        match self {
            EvalError::UnboundVariable { .. } => {
                diagnostic.with_help("names are visible after their `let` and inside functions called from there")
            }
            EvalError::StackDepthExceeded { .. } => {
                diagnostic.with_help("raise the limit with `--max-depth`")
            }
            _ => diagnostic,
        }
    }
}
