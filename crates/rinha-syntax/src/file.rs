//! The document root.

use crate::Term;
use rinha_common::Location;

/// A decoded document: `{ "kind": "File", "name", "location", "expression" }`.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    pub name: String,
    pub expression: Term,
    pub location: Location,
}
