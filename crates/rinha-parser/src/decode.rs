//! JSON value → term tree.

use crate::DecodeError;
use rinha_common::{Location, ensure_sufficient_stack};
use rinha_syntax::{BinaryOp, Function, Parameter, SourceFile, Term, TermKind};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::rc::Rc;

/// Decode the document root, `{ "kind": "File", "name", "location", "expression" }`.
pub fn decode_file(value: &Value) -> Result<SourceFile, DecodeError> {
    let object = value
        .as_object()
        .ok_or_else(|| DecodeError::malformed("", None, format!("expected a file object, found {}", describe(value))))?;

    match object.get("kind") {
        None | Some(Value::Null) => {}
        Some(Value::String(kind)) if kind == "File" => {}
        Some(other) => {
            return Err(DecodeError::malformed(
                "/kind",
                None,
                format!("expected the file kind `File`, found {}", describe(other)),
            ));
        }
    }

    let node = Node::new(object, "", None);
    let location = node.location()?;
    let name = match object.get("name") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(name)) => name.clone(),
        Some(other) => {
            return Err(DecodeError::malformed(
                "/name",
                Some(&location),
                format!("expected a string, found {}", describe(other)),
            ));
        }
    };
    let expression = node.term("expression")?;

    Ok(SourceFile {
        name,
        expression,
        location,
    })
}

/// Decode a single term from its JSON object.
///
/// Decoding is structural only: a `Call` whose callee is a literal decodes
/// fine and is rejected (or not) by the evaluator.
pub fn decode_term(value: &Value) -> Result<Term, DecodeError> {
    decode_term_at(value, "")
}

fn decode_term_at(value: &Value, path: &str) -> Result<Term, DecodeError> {
    ensure_sufficient_stack(|| {
        let object = value.as_object().ok_or_else(|| {
            DecodeError::malformed(path, None, format!("expected a term object, found {}", describe(value)))
        })?;

        let kind = match object.get("kind") {
            Some(Value::String(kind)) => kind.as_str(),
            Some(other) => {
                return Err(DecodeError::malformed(
                    path,
                    None,
                    format!("`kind` must be a string, found {}", describe(other)),
                ));
            }
            None => return Err(DecodeError::malformed(path, None, "missing field `kind`")),
        };

        let location = Node::new(object, path, None).location()?;
        let node = Node::new(object, path, Some(&location));

        let kind = match kind {
            "Int" => TermKind::Int(node.int("value")?),
            "Str" => TermKind::Str(node.string("value")?.to_string()),
            "Bool" => TermKind::Bool(node.bool("value")?),
            "Var" => TermKind::Var(node.string("text")?.to_string()),
            "Function" => TermKind::Function(Rc::new(Function {
                parameters: node.parameters("parameters")?,
                value: node.term("value")?,
            })),
            "Call" => TermKind::Call {
                callee: Box::new(node.term("callee")?),
                arguments: node.terms("arguments")?,
            },
            "Let" => TermKind::Let {
                name: node.parameter("name")?,
                value: Box::new(node.term("value")?),
                next: Box::new(node.term("next")?),
            },
            "If" => TermKind::If {
                condition: Box::new(node.term("condition")?),
                then: Box::new(node.term("then")?),
                otherwise: Box::new(node.term("otherwise")?),
            },
            "Binary" => TermKind::Binary {
                op: node.op("op")?,
                lhs: Box::new(node.term("lhs")?),
                rhs: Box::new(node.term("rhs")?),
            },
            "Tuple" => TermKind::Tuple {
                first: Box::new(node.term("first")?),
                second: Box::new(node.term("second")?),
            },
            "First" => TermKind::First(Box::new(node.term("value")?)),
            "Second" => TermKind::Second(Box::new(node.term("value")?)),
            "Print" => TermKind::Print(Box::new(node.term("value")?)),
            other => {
                return Err(DecodeError::UnknownNodeKind {
                    kind: other.to_string(),
                    path: path.to_string(),
                    location: Some(location),
                });
            }
        };

        Ok(Term::new(kind, location))
    })
}

/// Field accessors for one JSON object, reporting errors against its path.
struct Node<'a> {
    object: &'a Map<String, Value>,
    path: &'a str,
    location: Option<&'a Location>,
}

impl<'a> Node<'a> {
    fn new(object: &'a Map<String, Value>, path: &'a str, location: Option<&'a Location>) -> Self {
        Self {
            object,
            path,
            location,
        }
    }

    fn child_path(&self, field: &str) -> String {
        format!("{}/{}", self.path, field)
    }

    fn mistyped(&self, field: &str, expected: &str, found: &Value) -> DecodeError {
        DecodeError::malformed(
            &self.child_path(field),
            self.location,
            format!("expected {expected}, found {}", describe(found)),
        )
    }

    fn field(&self, field: &str) -> Result<&'a Value, DecodeError> {
        self.object.get(field).ok_or_else(|| {
            DecodeError::malformed(self.path, self.location, format!("missing field `{field}`"))
        })
    }

    /// `location` is diagnostic only, so a node without one gets the default.
    fn location(&self) -> Result<Location, DecodeError> {
        let value = match self.object.get("location") {
            None | Some(Value::Null) => return Ok(Location::default()),
            Some(value) => value,
        };
        let location = Location::deserialize(value)
            .map_err(|err| DecodeError::malformed(&self.child_path("location"), None, err.to_string()))?;
        if location.start > location.end {
            return Err(DecodeError::malformed(
                &self.child_path("location"),
                None,
                format!("`start` ({}) is after `end` ({})", location.start.0, location.end.0),
            ));
        }
        Ok(location)
    }

    fn int(&self, field: &str) -> Result<i64, DecodeError> {
        let value = self.field(field)?;
        value
            .as_i64()
            .ok_or_else(|| self.mistyped(field, "a 64-bit integer", value))
    }

    fn string(&self, field: &str) -> Result<&'a str, DecodeError> {
        let value = self.field(field)?;
        value
            .as_str()
            .ok_or_else(|| self.mistyped(field, "a string", value))
    }

    fn bool(&self, field: &str) -> Result<bool, DecodeError> {
        let value = self.field(field)?;
        value
            .as_bool()
            .ok_or_else(|| self.mistyped(field, "a boolean", value))
    }

    fn op(&self, field: &str) -> Result<BinaryOp, DecodeError> {
        let name = self.string(field)?;
        name.parse().map_err(|_| {
            DecodeError::malformed(
                &self.child_path(field),
                self.location,
                format!("unknown binary operator `{name}`"),
            )
        })
    }

    fn term(&self, field: &str) -> Result<Term, DecodeError> {
        let value = self.field(field)?;
        decode_term_at(value, &self.child_path(field))
    }

    fn terms(&self, field: &str) -> Result<Vec<Term>, DecodeError> {
        let value = self.field(field)?;
        let items = value
            .as_array()
            .ok_or_else(|| self.mistyped(field, "an array of terms", value))?;
        let path = self.child_path(field);
        items
            .iter()
            .enumerate()
            .map(|(i, item)| decode_term_at(item, &format!("{path}/{i}")))
            .collect()
    }

    fn parameter(&self, field: &str) -> Result<Parameter, DecodeError> {
        let value = self.field(field)?;
        decode_parameter(value, &self.child_path(field))
    }

    fn parameters(&self, field: &str) -> Result<Vec<Parameter>, DecodeError> {
        let value = self.field(field)?;
        let items = value
            .as_array()
            .ok_or_else(|| self.mistyped(field, "an array of parameters", value))?;
        let path = self.child_path(field);
        items
            .iter()
            .enumerate()
            .map(|(i, item)| decode_parameter(item, &format!("{path}/{i}")))
            .collect()
    }
}

fn decode_parameter(value: &Value, path: &str) -> Result<Parameter, DecodeError> {
    let object = value.as_object().ok_or_else(|| {
        DecodeError::malformed(path, None, format!("expected a parameter object, found {}", describe(value)))
    })?;
    let location = Node::new(object, path, None).location()?;
    let node = Node::new(object, path, Some(&location));
    let text = node.string("text")?.to_string();
    Ok(Parameter { text, location })
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "an integer",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
