//! Interpreter/evaluator for Rinha.
//!
//! This crate implements a tree-walking interpreter over the terms decoded
//! by `rinha-parser`.

mod config;
mod env;
mod error;
mod eval;
mod ops;
mod print;
pub mod value;

pub use config::EvalConfig;
pub use env::{Binding, Environment};
pub use error::EvalError;
pub use eval::Evaluator;
pub use ops::apply_binary;
pub use print::PrintHandler;
pub use value::Value;
