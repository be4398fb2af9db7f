//! AST definitions for Rinha.
//!
//! Programs arrive already parsed, as a JSON document. This crate defines
//! the tree the decoder builds from that document and the evaluator walks.

mod file;
mod op;
mod term;

pub use file::*;
pub use op::*;
pub use term::*;
