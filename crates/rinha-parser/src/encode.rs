//! Term tree → JSON value, the inverse of [`crate::decode_term`].

use rinha_common::{Location, ensure_sufficient_stack};
use rinha_syntax::{Parameter, SourceFile, Term, TermKind};
use serde_json::{Map, Value, json};

/// Encode a whole document.
pub fn encode_file(file: &SourceFile) -> Value {
    json!({
        "kind": "File",
        "name": file.name,
        "expression": encode_term(&file.expression),
        "location": encode_location(&file.location),
    })
}

/// Encode a term in the same shape the decoder reads.
pub fn encode_term(term: &Term) -> Value {
    ensure_sufficient_stack(|| {
        let mut object = Map::new();
        object.insert("kind".into(), Value::from(term.kind.name()));

        match &term.kind {
            TermKind::Int(n) => {
                object.insert("value".into(), Value::from(*n));
            }
            TermKind::Str(s) => {
                object.insert("value".into(), Value::from(s.as_str()));
            }
            TermKind::Bool(b) => {
                object.insert("value".into(), Value::from(*b));
            }
            TermKind::Var(name) => {
                object.insert("text".into(), Value::from(name.as_str()));
            }
            TermKind::Function(function) => {
                let parameters = function.parameters.iter().map(encode_parameter).collect();
                object.insert("parameters".into(), Value::Array(parameters));
                object.insert("value".into(), encode_term(&function.value));
            }
            TermKind::Call { callee, arguments } => {
                object.insert("callee".into(), encode_term(callee));
                let arguments = arguments.iter().map(encode_term).collect();
                object.insert("arguments".into(), Value::Array(arguments));
            }
            TermKind::Let { name, value, next } => {
                object.insert("name".into(), encode_parameter(name));
                object.insert("value".into(), encode_term(value));
                object.insert("next".into(), encode_term(next));
            }
            TermKind::If {
                condition,
                then,
                otherwise,
            } => {
                object.insert("condition".into(), encode_term(condition));
                object.insert("then".into(), encode_term(then));
                object.insert("otherwise".into(), encode_term(otherwise));
            }
            TermKind::Binary { op, lhs, rhs } => {
                object.insert("lhs".into(), encode_term(lhs));
                object.insert("op".into(), Value::from(op.as_str()));
                object.insert("rhs".into(), encode_term(rhs));
            }
            TermKind::Tuple { first, second } => {
                object.insert("first".into(), encode_term(first));
                object.insert("second".into(), encode_term(second));
            }
            TermKind::First(value) | TermKind::Second(value) | TermKind::Print(value) => {
                object.insert("value".into(), encode_term(value));
            }
        }

        object.insert("location".into(), encode_location(&term.location));
        Value::Object(object)
    })
}

fn encode_parameter(parameter: &Parameter) -> Value {
    json!({
        "text": parameter.text,
        "location": encode_location(&parameter.location),
    })
}

fn encode_location(location: &Location) -> Value {
    json!({
        "start": location.start.0,
        "end": location.end.0,
        "filename": &*location.filename,
    })
}
