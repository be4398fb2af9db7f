//! Term evaluation.

use crate::{Binding, EvalConfig, EvalError, Environment, PrintHandler, Value, apply_binary};
use rinha_common::{Location, ensure_sufficient_stack};
use rinha_syntax::{Function, SourceFile, Term, TermKind};
use std::rc::Rc;

/// The tree-walking evaluator.
pub struct Evaluator {
    config: EvalConfig,
    /// Destination of `print`
    output: PrintHandler,
    /// Number of `evaluate` frames currently active
    depth: usize,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Create an evaluator that prints to stdout.
    pub fn new() -> Self {
        Self::with_config(EvalConfig::default())
    }

    pub fn with_config(config: EvalConfig) -> Self {
        Self {
            config,
            output: PrintHandler::default(),
            depth: 0,
        }
    }

    /// Send `print` output to `output` instead of stdout.
    pub fn with_output(mut self, output: PrintHandler) -> Self {
        self.output = output;
        self
    }

    pub fn output(&self) -> &PrintHandler {
        &self.output
    }

    /// Evaluate a document's expression in a fresh, empty environment.
    #[tracing::instrument(level = "debug", skip_all, fields(file = %file.name))]
    pub fn eval_file(&mut self, file: &SourceFile) -> Result<Value, EvalError> {
        let mut env = Environment::empty();
        self.depth = 0;
        let value = self.evaluate(&file.expression, &mut env)?;
        tracing::debug!(result = ?value, "evaluation finished");
        Ok(value)
    }

    /// Evaluate `term` in `env`.
    ///
    /// `env` is extended in place by any `let` reached without crossing a
    /// call boundary.
    pub fn evaluate(&mut self, term: &Term, env: &mut Environment) -> Result<Value, EvalError> {
        if self.depth >= self.config.max_depth {
            return Err(EvalError::StackDepthExceeded {
                limit: self.config.max_depth,
                location: term.location.clone(),
            });
        }
        self.depth += 1;
        let result = ensure_sufficient_stack(|| self.eval_term(term, env));
        self.depth -= 1;
        result
    }

    fn eval_term(&mut self, term: &Term, env: &mut Environment) -> Result<Value, EvalError> {
        match &term.kind {
            TermKind::Int(n) => Ok(Value::Int(*n)),
            TermKind::Str(s) => Ok(Value::str(s)),
            TermKind::Bool(b) => Ok(Value::Bool(*b)),

            TermKind::Var(name) => self.eval_var(name, &term.location, env),

            // Outside a call, a function literal runs its body in place.
            TermKind::Function(function) => self.evaluate(&function.value, env),

            TermKind::Call { callee, arguments } => self.eval_call(callee, arguments, &term.location, env),

            TermKind::Let { name, value, next } => {
                let binding = match &value.kind {
                    TermKind::Function(function) => Binding::Function(Rc::clone(function)),
                    _ => Binding::Value(self.evaluate(value, env)?),
                };
                tracing::trace!(name = %name.text, "let");
                env.bind_in_place(name.text.clone(), binding);
                self.evaluate(next, env)
            }

            TermKind::If {
                condition,
                then,
                otherwise,
            } => match self.evaluate(condition, env)? {
                Value::Bool(true) => self.evaluate(then, env),
                Value::Bool(false) => self.evaluate(otherwise, env),
                other => Err(EvalError::type_mismatch(
                    "`if` condition (expected Bool)",
                    other.type_name(),
                    &condition.location,
                )),
            },

            TermKind::Binary { op, lhs, rhs } => {
                // No short-circuit: `And`/`Or` evaluate both sides too.
                let left = self.evaluate(lhs, env)?;
                let right = self.evaluate(rhs, env)?;
                apply_binary(*op, left, right, &term.location)
            }

            TermKind::Tuple { first, second } => {
                let first = self.evaluate(first, env)?;
                let second = self.evaluate(second, env)?;
                Ok(Value::tuple(first, second))
            }

            TermKind::First(value) => self.eval_projection("first", value, env).map(|pair| pair.0.clone()),
            TermKind::Second(value) => self.eval_projection("second", value, env).map(|pair| pair.1.clone()),

            TermKind::Print(value) => {
                let value = self.evaluate(value, env)?;
                self.output.println(&value.to_string());
                Ok(value)
            }
        }
    }

    fn eval_var(&mut self, name: &str, location: &Location, env: &mut Environment) -> Result<Value, EvalError> {
        let binding = env.lookup(name).cloned().ok_or_else(|| EvalError::UnboundVariable {
            name: name.to_string(),
            location: location.clone(),
        })?;
        match binding {
            Binding::Value(value) => Ok(value),
            // A function named outside a call position is forced: its body
            // runs against the current environment.
            Binding::Function(function) => self.evaluate(&function.value, env),
        }
    }

    fn eval_call(
        &mut self,
        callee: &Term,
        arguments: &[Term],
        location: &Location,
        env: &mut Environment,
    ) -> Result<Value, EvalError> {
        let (name, function) = match &callee.kind {
            TermKind::Var(name) => match env.lookup(name) {
                Some(Binding::Function(function)) => (name.as_str(), Rc::clone(function)),
                Some(Binding::Value(value)) => {
                    return Err(EvalError::type_mismatch(
                        format!("call of `{name}` (expected Function)"),
                        value.type_name(),
                        &callee.location,
                    ));
                }
                None => {
                    return Err(EvalError::UnboundVariable {
                        name: name.clone(),
                        location: callee.location.clone(),
                    });
                }
            },
            TermKind::Function(function) => ("<anonymous>", Rc::clone(function)),
            // Any other callee is not invoked; it is handed back unevaluated.
            _ => {
                return Ok(Value::Function(Rc::new(Function {
                    parameters: Vec::new(),
                    value: callee.clone(),
                })));
            }
        };

        if function.arity() != arguments.len() {
            return Err(EvalError::ArityMismatch {
                expected: function.arity(),
                received: arguments.len(),
                location: location.clone(),
            });
        }

        let mut values = Vec::with_capacity(arguments.len());
        for argument in arguments {
            values.push(self.evaluate(argument, env)?);
        }

        tracing::trace!(function = name, arity = function.arity(), depth = self.depth, "call");

        let parameters = function.parameters.iter().map(|parameter| parameter.text.clone());
        let mut callee_env = env.fork_with_bindings(parameters.zip(values));
        self.evaluate(&function.value, &mut callee_env)
    }

    /// Evaluate the operand of `first`/`second` down to its pair.
    fn eval_projection(
        &mut self,
        which: &str,
        operand: &Term,
        env: &mut Environment,
    ) -> Result<Rc<(Value, Value)>, EvalError> {
        // Only a tuple literal or a variable may be projected; anything else
        // is rejected before it is evaluated.
        if !matches!(operand.kind, TermKind::Tuple { .. } | TermKind::Var(_)) {
            return Err(EvalError::type_mismatch(
                format!("`{which}` (expected a Tuple or Var term)"),
                format!("{} term", operand.kind.name()),
                &operand.location,
            ));
        }

        match self.evaluate(operand, env)? {
            Value::Tuple(pair) => Ok(pair),
            other => Err(EvalError::type_mismatch(
                format!("`{which}` (expected Tuple)"),
                other.type_name(),
                &operand.location,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rinha_syntax::{BinaryOp, Parameter};

    fn term(kind: TermKind) -> Term {
        Term::new(kind, Location::default())
    }

    fn int(n: i64) -> Term {
        term(TermKind::Int(n))
    }

    fn var(name: &str) -> Term {
        term(TermKind::Var(name.to_string()))
    }

    fn let_in(name: &str, value: Term, next: Term) -> Term {
        term(TermKind::Let {
            name: Parameter::new(name, Location::default()),
            value: Box::new(value),
            next: Box::new(next),
        })
    }

    fn function(params: &[&str], body: Term) -> Term {
        term(TermKind::Function(Rc::new(Function {
            parameters: params.iter().map(|p| Parameter::new(*p, Location::default())).collect(),
            value: body,
        })))
    }

    fn call(callee: Term, arguments: Vec<Term>) -> Term {
        term(TermKind::Call {
            callee: Box::new(callee),
            arguments,
        })
    }

    fn binary(op: BinaryOp, lhs: Term, rhs: Term) -> Term {
        term(TermKind::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }

    fn eval(term: &Term) -> Result<Value, EvalError> {
        let mut evaluator = Evaluator::new().with_output(PrintHandler::buffer());
        evaluator.evaluate(term, &mut Environment::empty())
    }

    #[test]
    fn test_let_extends_environment_in_place() {
        let mut evaluator = Evaluator::new().with_output(PrintHandler::buffer());
        let mut env = Environment::empty();
        let program = let_in("x", int(1), let_in("y", int(2), var("x")));
        assert_eq!(evaluator.evaluate(&program, &mut env).unwrap(), Value::Int(1));
        assert!(env.contains("x"));
        assert!(env.contains("y"));
    }

    #[test]
    fn test_call_does_not_leak_into_caller() {
        let mut evaluator = Evaluator::new().with_output(PrintHandler::buffer());
        let mut env = Environment::empty();
        // let f = fn (a) => let inner = a; inner; f(1)
        let program = let_in(
            "f",
            function(&["a"], let_in("inner", var("a"), var("inner"))),
            call(var("f"), vec![int(1)]),
        );
        assert_eq!(evaluator.evaluate(&program, &mut env).unwrap(), Value::Int(1));
        assert!(env.contains("f"));
        assert!(!env.contains("a"));
        assert!(!env.contains("inner"));
    }

    #[test]
    fn test_free_variables_resolve_at_the_call_site() {
        // let f = fn () => y; let y = 5; f()
        let program = let_in("f", function(&[], var("y")), let_in("y", int(5), call(var("f"), vec![])));
        assert_eq!(eval(&program).unwrap(), Value::Int(5));
    }

    #[test]
    fn test_function_literal_callee_is_invoked() {
        let program = call(function(&["n"], binary(BinaryOp::Mul, var("n"), int(2))), vec![int(21)]);
        assert_eq!(eval(&program).unwrap(), Value::Int(42));
    }

    #[test]
    fn test_other_callee_is_returned_unevaluated() {
        let inner = call(var("missing"), vec![]);
        let program = call(inner.clone(), vec![int(1)]);
        match eval(&program).unwrap() {
            Value::Function(function) => {
                assert_eq!(function.value, inner);
                assert_eq!(function.arity(), 0);
            }
            other => panic!("expected an unevaluated callee, got {:?}", other),
        }
    }

    #[test]
    fn test_calling_a_value_is_a_type_mismatch() {
        let program = let_in("x", int(1), call(var("x"), vec![]));
        assert!(matches!(eval(&program), Err(EvalError::TypeMismatch { .. })));
    }

    #[test]
    fn test_depth_limit() {
        // let loop = fn (n) => loop(n); loop(0)
        let program = let_in(
            "loop",
            function(&["n"], call(var("loop"), vec![var("n")])),
            call(var("loop"), vec![int(0)]),
        );
        let mut evaluator = Evaluator::with_config(EvalConfig::new().max_depth(500)).with_output(PrintHandler::buffer());
        let err = evaluator.eval_file(&SourceFile {
            name: "loop.rinha".to_string(),
            expression: program,
            location: Location::default(),
        });
        assert!(matches!(err, Err(EvalError::StackDepthExceeded { limit: 500, .. })));
    }

    #[test]
    fn test_depth_resets_after_error() {
        let mut evaluator = Evaluator::with_config(EvalConfig::new().max_depth(3)).with_output(PrintHandler::buffer());
        let deep = binary(BinaryOp::Add, binary(BinaryOp::Add, binary(BinaryOp::Add, int(1), int(1)), int(1)), int(1));
        assert!(evaluator.evaluate(&deep, &mut Environment::empty()).is_err());
        let shallow = binary(BinaryOp::Add, int(1), int(1));
        assert_eq!(evaluator.evaluate(&shallow, &mut Environment::empty()).unwrap(), Value::Int(2));
    }
}
