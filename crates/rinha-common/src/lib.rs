//! Common utilities and data structures for Rinha.
//!
//! This crate provides foundational types used across the interpreter:
//! - `Span`: byte range of a node in the original source
//! - `Location`: a span plus the name of the file it came from
//! - stack helpers for the deeply recursive decoder and evaluator

mod span;
mod stack;

pub use span::{BytePos, Location, Span};
pub use stack::{ensure_sufficient_stack, with_stack_size};
