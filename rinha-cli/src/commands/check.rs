//! The `rinha check` command.

use super::{Options, with_document};
use crate::output;

pub fn run(file: &str, options: &Options) -> Result<(), String> {
    with_document(file, options, |ast| {
        output::success(&format!(
            "'{}' is a well-formed document ({} nodes)",
            file,
            ast.expression.node_count()
        ));
        Ok(())
    })
}
