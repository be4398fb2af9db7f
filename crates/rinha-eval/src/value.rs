//! Runtime values.

use rinha_syntax::Function;
use std::fmt;
use std::rc::Rc;

/// A fully reduced runtime value.
#[derive(Clone)]
pub enum Value {
    /// Integer value
    Int(i64),
    /// String value
    Str(Rc<str>),
    /// Boolean value
    Bool(bool),
    /// Pair of values
    Tuple(Rc<(Value, Value)>),
    /// Unevaluated function; its body only runs through a call
    Function(Rc<Function>),
}

impl Value {
    pub fn tuple(first: Value, second: Value) -> Self {
        Value::Tuple(Rc::new((first, second)))
    }

    pub fn str(s: impl AsRef<str>) -> Self {
        Value::Str(Rc::from(s.as_ref()))
    }

    /// Name of this value's kind, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "Int",
            Value::Str(_) => "Str",
            Value::Bool(_) => "Bool",
            Value::Tuple(_) => "Tuple",
            Value::Function(_) => "Function",
        }
    }

    /// Try to get as integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get as string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Tuple(pair) => write!(f, "({:?}, {:?})", pair.0, pair.1),
            Value::Function(function) => write!(f, "<function/{}>", function.arity()),
        }
    }
}

/// The form `print` writes.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Tuple(pair) => write!(f, "({},{})", pair.0, pair.1),
            Value::Function(_) => f.write_str("<#closure>"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) => a == b,
            // Functions are never equal
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_print_format() {
        assert_eq!(Value::Int(-3).to_string(), "-3");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::str("hi there").to_string(), "hi there");
        let nested = Value::tuple(Value::Int(1), Value::tuple(Value::str("a"), Value::Bool(true)));
        assert_eq!(nested.to_string(), "(1,(a,true))");
    }

    #[test]
    fn test_debug_quotes_strings() {
        assert_eq!(format!("{:?}", Value::tuple(Value::str("a"), Value::Int(2))), "(\"a\", 2)");
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(
            Value::tuple(Value::Int(1), Value::str("x")),
            Value::tuple(Value::Int(1), Value::str("x"))
        );
        assert_ne!(Value::Int(1), Value::Bool(true));
    }
}
