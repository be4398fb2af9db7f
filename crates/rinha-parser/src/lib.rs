//! JSON document decoder for Rinha.
//!
//! Programs are not read as source text: an external front end has already
//! parsed them and serialized the tree as JSON. Every node is an object whose
//! `kind` field names the term, for example
//!
//! ```json
//! { "kind": "Binary", "op": "Add",
//!   "lhs": { "kind": "Int", "value": 1 },
//!   "rhs": { "kind": "Var", "text": "x" },
//!   "location": { "start": 0, "end": 5, "filename": "add.rinha" } }
//! ```
//!
//! This crate turns such documents into [`rinha_syntax`] terms and back.

mod decode;
mod encode;
mod error;

pub use decode::{decode_file, decode_term};
pub use encode::{encode_file, encode_term};
pub use error::DecodeError;

use rinha_common::with_stack_size;
use rinha_syntax::SourceFile;
use serde::Deserialize;

/// Stack given to `serde_json` while it builds the document. Its recursion
/// limit is disabled, so a long `let` chain nests as deep as the program does.
const PARSE_STACK_SIZE: usize = 64 * 1024 * 1024;

/// Parse a document from raw bytes.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = bytes.len()))]
pub fn parse(bytes: &[u8]) -> Result<SourceFile, DecodeError> {
    with_stack_size(PARSE_STACK_SIZE, || {
        let document = read_document(bytes)?;
        let file = decode_file(&document)?;
        tracing::debug!(name = %file.name, "decoded document");
        Ok(file)
    })
}

/// Parse a document from a string.
pub fn parse_str(source: &str) -> Result<SourceFile, DecodeError> {
    parse(source.as_bytes())
}

fn read_document(bytes: &[u8]) -> Result<serde_json::Value, DecodeError> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    de.disable_recursion_limit();
    let document = serde_json::Value::deserialize(&mut de)?;
    de.end()?;
    Ok(document)
}
