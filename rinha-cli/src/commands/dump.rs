//! The `rinha dump` command: decode a document and print it re-encoded.

use super::{Options, with_document};
use rinha_parser::encode_file;

pub fn run(file: &str, options: &Options) -> Result<(), String> {
    with_document(file, options, |ast| {
        let json = serde_json::to_string_pretty(&encode_file(ast))
            .map_err(|e| format!("cannot encode '{}': {}", file, e))?;
        println!("{json}");
        Ok(())
    })
}
