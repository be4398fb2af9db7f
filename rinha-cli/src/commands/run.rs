//! The `rinha run` command.

use super::{Options, report, with_document};
use rinha_eval::Evaluator;
use std::path::Path;

pub fn run(file: &str, options: &Options) -> Result<(), String> {
    with_document(file, options, |ast| {
        let mut evaluator = Evaluator::with_config(options.eval_config());
        match evaluator.eval_file(ast) {
            // The final value is not printed; only `print` writes to stdout.
            Ok(_) => Ok(()),
            Err(e) => {
                report(Path::new(file), &e.to_diagnostic());
                Err("evaluation error".to_string())
            }
        }
    })
}
