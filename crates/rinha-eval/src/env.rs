//! Evaluation environment.

use crate::Value;
use rinha_syntax::Function;
use std::collections::HashMap;
use std::rc::Rc;

/// What a name is bound to.
#[derive(Debug, Clone)]
pub enum Binding {
    /// A function literal bound by `let`, kept unevaluated so it can be called.
    Function(Rc<Function>),
    /// An already reduced value.
    Value(Value),
}

/// An environment for variable bindings.
///
/// There is no parent chain: `let` extends an environment in place and a
/// call copies the caller's whole environment before adding parameters.
/// Free variables in a function body therefore resolve against whatever
/// the caller has in scope at the call.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    bindings: HashMap<String, Binding>,
}

impl Environment {
    /// Create a new empty environment.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up a variable.
    pub fn lookup(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    /// Bind `name` in this environment, shadowing any earlier binding of it.
    pub fn bind_in_place(&mut self, name: impl Into<String>, binding: Binding) -> &mut Self {
        self.bindings.insert(name.into(), binding);
        self
    }

    /// Copy this environment and add `bindings` to the copy.
    ///
    /// The copy shares no mutable state with `self`.
    pub fn fork_with_bindings<I>(&self, bindings: I) -> Environment
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        let mut forked = self.clone();
        for (name, value) in bindings {
            forked.bindings.insert(name, Binding::Value(value));
        }
        forked
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of(env: &Environment, name: &str) -> Option<Value> {
        match env.lookup(name) {
            Some(Binding::Value(value)) => Some(value.clone()),
            _ => None,
        }
    }

    #[test]
    fn test_bind_shadows() {
        let mut env = Environment::empty();
        env.bind_in_place("x", Binding::Value(Value::Int(1)))
            .bind_in_place("x", Binding::Value(Value::Int(2)));
        assert_eq!(value_of(&env, "x"), Some(Value::Int(2)));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn test_fork_leaves_source_untouched() {
        let mut env = Environment::empty();
        env.bind_in_place("x", Binding::Value(Value::Int(1)));

        let mut forked = env.fork_with_bindings([
            ("x".to_string(), Value::Int(10)),
            ("y".to_string(), Value::Int(20)),
        ]);
        forked.bind_in_place("z", Binding::Value(Value::Int(30)));

        assert_eq!(value_of(&forked, "x"), Some(Value::Int(10)));
        assert_eq!(value_of(&forked, "y"), Some(Value::Int(20)));
        assert_eq!(value_of(&env, "x"), Some(Value::Int(1)));
        assert!(!env.contains("y"));
        assert!(!env.contains("z"));
    }

    #[test]
    fn test_lookup_missing() {
        assert!(Environment::empty().lookup("nope").is_none());
        assert!(Environment::empty().is_empty());
    }
}
