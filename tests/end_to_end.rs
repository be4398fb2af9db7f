// End-to-end integration tests
//
// Tests the complete pipeline: document file → decode → evaluate → report.

use pretty_assertions::assert_eq;
use rinha_diagnostic::{ErrorCode, render_plain};
use rinha_eval::{EvalError, Evaluator, PrintHandler, Value};
use std::fs;
use tempfile::TempDir;

/// Write `document` to a temp dir, then decode and evaluate it the way
/// `rinha run` does, capturing printed lines.
fn run_document(document: &str) -> Result<(Value, Vec<String>), String> {
    let dir = TempDir::new().map_err(|e| e.to_string())?;
    let path = dir.path().join("source.rinha.json");
    fs::write(&path, document).map_err(|e| e.to_string())?;

    let bytes = fs::read(&path).map_err(|e| e.to_string())?;
    let file = rinha_parser::parse(&bytes).map_err(|e| render_plain(&e.to_diagnostic()))?;

    let mut evaluator = Evaluator::new().with_output(PrintHandler::buffer());
    let value = evaluator
        .eval_file(&file)
        .map_err(|e| render_plain(&e.to_diagnostic()))?;
    let lines = evaluator.output().lines().into_iter().map(String::from).collect();
    Ok((value, lines))
}

/// `print("Hello, world")` as the front end serializes it.
const HELLO: &str = r#"{
  "name": "hello.rinha",
  "expression": {
    "kind": "Print",
    "value": {
      "kind": "Str",
      "value": "Hello, world",
      "location": { "start": 6, "end": 20, "filename": "hello.rinha" }
    },
    "location": { "start": 0, "end": 21, "filename": "hello.rinha" }
  },
  "location": { "start": 0, "end": 21, "filename": "hello.rinha" }
}"#;

/// let sum = fn (n) => { if (n == 0) { 0 } else { n + sum(n - 1) } };
/// print(sum(100))
const SUM: &str = r#"{
  "name": "sum.rinha",
  "kind": "File",
  "expression": {
    "kind": "Let",
    "name": { "text": "sum", "location": { "start": 4, "end": 7, "filename": "sum.rinha" } },
    "value": {
      "kind": "Function",
      "parameters": [{ "text": "n", "location": { "start": 15, "end": 16, "filename": "sum.rinha" } }],
      "value": {
        "kind": "If",
        "condition": {
          "kind": "Binary",
          "op": "Eq",
          "lhs": { "kind": "Var", "text": "n", "location": { "start": 29, "end": 30, "filename": "sum.rinha" } },
          "rhs": { "kind": "Int", "value": 0, "location": { "start": 34, "end": 35, "filename": "sum.rinha" } },
          "location": { "start": 29, "end": 35, "filename": "sum.rinha" }
        },
        "then": { "kind": "Int", "value": 0, "location": { "start": 39, "end": 40, "filename": "sum.rinha" } },
        "otherwise": {
          "kind": "Binary",
          "op": "Add",
          "lhs": { "kind": "Var", "text": "n", "location": { "start": 50, "end": 51, "filename": "sum.rinha" } },
          "rhs": {
            "kind": "Call",
            "callee": { "kind": "Var", "text": "sum", "location": { "start": 54, "end": 57, "filename": "sum.rinha" } },
            "arguments": [{
              "kind": "Binary",
              "op": "Sub",
              "lhs": { "kind": "Var", "text": "n", "location": { "start": 58, "end": 59, "filename": "sum.rinha" } },
              "rhs": { "kind": "Int", "value": 1, "location": { "start": 62, "end": 63, "filename": "sum.rinha" } },
              "location": { "start": 58, "end": 63, "filename": "sum.rinha" }
            }],
            "location": { "start": 54, "end": 64, "filename": "sum.rinha" }
          },
          "location": { "start": 50, "end": 64, "filename": "sum.rinha" }
        },
        "location": { "start": 21, "end": 67, "filename": "sum.rinha" }
      },
      "location": { "start": 10, "end": 69, "filename": "sum.rinha" }
    },
    "next": {
      "kind": "Print",
      "value": {
        "kind": "Call",
        "callee": { "kind": "Var", "text": "sum", "location": { "start": 78, "end": 81, "filename": "sum.rinha" } },
        "arguments": [{ "kind": "Int", "value": 100, "location": { "start": 82, "end": 85, "filename": "sum.rinha" } }],
        "location": { "start": 78, "end": 86, "filename": "sum.rinha" }
      },
      "location": { "start": 72, "end": 87, "filename": "sum.rinha" }
    },
    "location": { "start": 0, "end": 87, "filename": "sum.rinha" }
  },
  "location": { "start": 0, "end": 87, "filename": "sum.rinha" }
}"#;

#[test]
fn test_hello_world() {
    let (value, lines) = run_document(HELLO).unwrap();
    assert_eq!(value, Value::str("Hello, world"));
    assert_eq!(lines, vec!["Hello, world"]);
}

#[test]
fn test_recursive_sum() {
    let (value, lines) = run_document(SUM).unwrap();
    assert_eq!(value, Value::Int(5050));
    assert_eq!(lines, vec!["5050"]);
}

#[test]
fn test_tuple_program() {
    let document = r#"{
      "name": "tuple.rinha",
      "expression": {
        "kind": "Let",
        "name": { "text": "pair" },
        "value": {
          "kind": "Tuple",
          "first": { "kind": "Int", "value": 1 },
          "second": { "kind": "Str", "value": "hello" }
        },
        "next": {
          "kind": "Let",
          "name": { "text": "_" },
          "value": { "kind": "Print", "value": { "kind": "Var", "text": "pair" } },
          "next": { "kind": "Print", "value": { "kind": "Second", "value": { "kind": "Var", "text": "pair" } } }
        }
      }
    }"#;
    let (value, lines) = run_document(document).unwrap();
    assert_eq!(value, Value::str("hello"));
    assert_eq!(lines, vec!["(1,hello)", "hello"]);
}

#[test]
fn test_runtime_error_report() {
    let document = r#"{
      "name": "calc.rinha",
      "expression": {
        "kind": "Binary",
        "op": "Div",
        "lhs": { "kind": "Int", "value": 10, "location": { "start": 6, "end": 8, "filename": "calc.rinha" } },
        "rhs": { "kind": "Int", "value": 0, "location": { "start": 11, "end": 12, "filename": "calc.rinha" } },
        "location": { "start": 6, "end": 12, "filename": "calc.rinha" }
      }
    }"#;
    let report = run_document(document).unwrap_err();
    assert_eq!(report, "error[E0203]: division by zero\n  --> calc.rinha:6..12\n");
}

#[test]
fn test_unbound_variable_report_has_help() {
    let document = r#"{
      "name": "oops.rinha",
      "expression": { "kind": "Var", "text": "oops", "location": { "start": 0, "end": 4, "filename": "oops.rinha" } }
    }"#;
    let report = run_document(document).unwrap_err();
    assert!(report.starts_with("error[E0200]: unbound variable `oops`\n  --> oops.rinha:0..4\n"));
    assert!(report.contains("  = help: "));
}

#[test]
fn test_decode_error_report() {
    let document = r#"{ "name": "bad.rinha", "expression": { "kind": "Loop" } }"#;
    let report = run_document(document).unwrap_err();
    assert!(report.starts_with("error[E0101]: unknown node kind `Loop` at `/expression`\n"));
    assert!(report.contains("expected one of Int, Str, Bool"));
}

#[test]
fn test_invalid_json_report() {
    let report = run_document("{ not json").unwrap_err();
    assert!(report.starts_with("error[E0100]: malformed document at `/`:"));
}

#[test]
fn test_error_codes_match_errors() {
    let err = EvalError::DivisionByZero {
        location: Default::default(),
    };
    assert_eq!(err.code(), ErrorCode::DivisionByZero);
    // Without a filename, there is nowhere to point.
    assert_eq!(err.to_diagnostic().filename(), None);
}

#[test]
fn test_dump_round_trips_document() {
    let file = rinha_parser::parse_str(SUM).unwrap();
    let dumped = serde_json::to_string_pretty(&rinha_parser::encode_file(&file)).unwrap();
    assert_eq!(rinha_parser::parse_str(&dumped).unwrap(), file);

    let original: serde_json::Value = serde_json::from_str(SUM).unwrap();
    let dumped: serde_json::Value = serde_json::from_str(&dumped).unwrap();
    assert_eq!(dumped, original);
}
