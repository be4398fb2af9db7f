//! Binary operator semantics.
//!
//! One table keyed by operator and operand kinds. Both operands are already
//! evaluated when they get here, including for `And`/`Or`.

use crate::{EvalError, Value};
use rinha_common::Location;
use rinha_syntax::BinaryOp;
use std::rc::Rc;

/// Apply `op` to two evaluated operands.
///
/// Integer arithmetic wraps on overflow. `Div` and `Rem` truncate toward
/// zero, so `a / b * b + a % b == a` whenever `b != 0`.
pub fn apply_binary(op: BinaryOp, left: Value, right: Value, location: &Location) -> Result<Value, EvalError> {
    let value = match (op, &left, &right) {
        (BinaryOp::Add, Value::Int(a), Value::Int(b)) => Value::Int(a.wrapping_add(*b)),
        (BinaryOp::Add, Value::Str(a), Value::Str(b)) => Value::Str(concat(a, b)),
        (BinaryOp::Add, Value::Int(a), Value::Str(b)) => Value::Str(concat(&a.to_string(), b)),
        (BinaryOp::Add, Value::Str(a), Value::Int(b)) => Value::Str(concat(a, &b.to_string())),

        (BinaryOp::Sub, Value::Int(a), Value::Int(b)) => Value::Int(a.wrapping_sub(*b)),
        (BinaryOp::Mul, Value::Int(a), Value::Int(b)) => Value::Int(a.wrapping_mul(*b)),
        (BinaryOp::Div | BinaryOp::Rem, Value::Int(_), Value::Int(0)) => {
            return Err(EvalError::DivisionByZero {
                location: location.clone(),
            });
        }
        (BinaryOp::Div, Value::Int(a), Value::Int(b)) => Value::Int(a.wrapping_div(*b)),
        (BinaryOp::Rem, Value::Int(a), Value::Int(b)) => Value::Int(a.wrapping_rem(*b)),

        (BinaryOp::Eq | BinaryOp::Neq, _, _) => match primitive_eq(&left, &right) {
            Some(equal) => Value::Bool(if op == BinaryOp::Eq { equal } else { !equal }),
            None => return Err(mismatch(op, &left, &right, location)),
        },

        (BinaryOp::Lt, Value::Int(a), Value::Int(b)) => Value::Bool(a < b),
        (BinaryOp::Gt, Value::Int(a), Value::Int(b)) => Value::Bool(a > b),
        (BinaryOp::Lte, Value::Int(a), Value::Int(b)) => Value::Bool(a <= b),
        (BinaryOp::Gte, Value::Int(a), Value::Int(b)) => Value::Bool(a >= b),

        (BinaryOp::And, Value::Bool(a), Value::Bool(b)) => Value::Bool(*a && *b),
        (BinaryOp::Or, Value::Bool(a), Value::Bool(b)) => Value::Bool(*a || *b),

        _ => return Err(mismatch(op, &left, &right, location)),
    };
    Ok(value)
}

/// Equality between two values of the same primitive kind; `None` otherwise.
fn primitive_eq(left: &Value, right: &Value) -> Option<bool> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Some(a == b),
        (Value::Str(a), Value::Str(b)) => Some(a == b),
        (Value::Bool(a), Value::Bool(b)) => Some(a == b),
        _ => None,
    }
}

fn concat(a: &str, b: &str) -> Rc<str> {
    let mut s = String::with_capacity(a.len() + b.len());
    s.push_str(a);
    s.push_str(b);
    Rc::from(s)
}

fn mismatch(op: BinaryOp, left: &Value, right: &Value, location: &Location) -> EvalError {
    EvalError::type_mismatch(
        format!("operator `{}` ({})", op, op.symbol()),
        format!("{} and {}", left.type_name(), right.type_name()),
        location,
    )
}
