//! CLI command implementations.

pub mod check;
pub mod dump;
pub mod run;

use rinha_common::with_stack_size;
use rinha_diagnostic::{Diagnostic, emit, emit_plain};
use rinha_eval::EvalConfig;
use rinha_syntax::SourceFile;
use std::fs;
use std::path::{Path, PathBuf};

/// Stack for decoding, evaluating and dropping a document. Long `let`
/// chains make all three recurse as deep as the program is long.
const COMMAND_STACK_SIZE: usize = 256 * 1024 * 1024;

/// Flags shared by every command.
#[derive(Debug, Clone)]
pub struct Options {
    pub verbose: bool,
    pub time: bool,
    pub max_depth: usize,
}

impl Options {
    pub fn eval_config(&self) -> EvalConfig {
        EvalConfig::new().max_depth(self.max_depth)
    }
}

/// Read and decode `file`, then hand the tree to `f` on a large stack.
fn with_document<R>(file: &str, options: &Options, f: impl FnOnce(&SourceFile) -> Result<R, String>) -> Result<R, String> {
    let path = Path::new(file);
    let bytes = fs::read(path).map_err(|e| format!("cannot read file '{}': {}", file, e))?;
    tracing::debug!(file, bytes = bytes.len(), "read document");

    with_stack_size(COMMAND_STACK_SIZE, || {
        let ast = match rinha_parser::parse(&bytes) {
            Ok(ast) => ast,
            Err(e) => {
                report(path, &e.to_diagnostic());
                return Err("decode error".to_string());
            }
        };

        if options.verbose {
            crate::output::info(&format!(
                "decoded '{}' ({} nodes)",
                if ast.name.is_empty() { file } else { ast.name.as_str() },
                ast.expression.node_count()
            ));
        }

        f(&ast)
    })
}

/// Render `diagnostic` to stderr, with source context when the program the
/// document was generated from can be found.
pub(crate) fn report(document: &Path, diagnostic: &Diagnostic) {
    let source = diagnostic
        .filename()
        .and_then(|name| source_candidates(document, name).into_iter().find_map(|p| fs::read_to_string(p).ok()));

    match source {
        Some(source) => {
            if emit(&source, diagnostic).is_err() {
                emit_plain(diagnostic);
            }
        }
        None => emit_plain(diagnostic),
    }
}

/// Where to look for `filename`: next to the document, then as given.
fn source_candidates(document: &Path, filename: &str) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(dir) = document.parent() {
        candidates.push(dir.join(filename));
    }
    candidates.push(PathBuf::from(filename));
    candidates
}
