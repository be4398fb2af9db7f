//! Term AST nodes.

use crate::BinaryOp;
use rinha_common::Location;
use std::rc::Rc;

/// A node of the program tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub kind: TermKind,
    pub location: Location,
}

impl Term {
    pub fn new(kind: TermKind, location: Location) -> Self {
        Self { kind, location }
    }

    /// Direct subterms, in document order.
    pub fn children(&self) -> Vec<&Term> {
        match &self.kind {
            TermKind::Int(_) | TermKind::Str(_) | TermKind::Bool(_) | TermKind::Var(_) => vec![],
            TermKind::Function(function) => vec![&function.value],
            TermKind::Call { callee, arguments } => {
                let mut children = Vec::with_capacity(arguments.len() + 1);
                children.push(&**callee);
                children.extend(arguments);
                children
            }
            TermKind::Let { value, next, .. } => vec![&**value, &**next],
            TermKind::If {
                condition,
                then,
                otherwise,
            } => vec![&**condition, &**then, &**otherwise],
            TermKind::Binary { lhs, rhs, .. } => vec![&**lhs, &**rhs],
            TermKind::Tuple { first, second } => vec![&**first, &**second],
            TermKind::First(value) | TermKind::Second(value) | TermKind::Print(value) => {
                vec![&**value]
            }
        }
    }

    /// Number of nodes in this tree, counted without recursion.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(term) = pending.pop() {
            count += 1;
            pending.extend(term.children());
        }
        count
    }
}

/// Term kind. Each variant corresponds to one `kind` discriminant of the document.
#[derive(Debug, Clone, PartialEq)]
pub enum TermKind {
    /// Integer literal
    Int(i64),
    /// String literal
    Str(String),
    /// Boolean literal
    Bool(bool),

    /// Variable reference
    Var(String),

    /// Function literal `fn (a, b) => body`
    Function(Rc<Function>),

    /// Call `f(x, y)`
    Call { callee: Box<Term>, arguments: Vec<Term> },

    /// `let name = value; next`
    Let {
        name: Parameter,
        value: Box<Term>,
        next: Box<Term>,
    },

    /// `if (condition) { then } else { otherwise }`
    If {
        condition: Box<Term>,
        then: Box<Term>,
        otherwise: Box<Term>,
    },

    /// Binary operation `lhs op rhs`
    Binary {
        op: BinaryOp,
        lhs: Box<Term>,
        rhs: Box<Term>,
    },

    /// Pair `(first, second)`
    Tuple { first: Box<Term>, second: Box<Term> },

    /// `first(value)`
    First(Box<Term>),

    /// `second(value)`
    Second(Box<Term>),

    /// `print(value)`
    Print(Box<Term>),
}

impl TermKind {
    /// The discriminant string used for this kind in documents.
    pub fn name(&self) -> &'static str {
        match self {
            TermKind::Int(_) => "Int",
            TermKind::Str(_) => "Str",
            TermKind::Bool(_) => "Bool",
            TermKind::Var(_) => "Var",
            TermKind::Function(_) => "Function",
            TermKind::Call { .. } => "Call",
            TermKind::Let { .. } => "Let",
            TermKind::If { .. } => "If",
            TermKind::Binary { .. } => "Binary",
            TermKind::Tuple { .. } => "Tuple",
            TermKind::First(_) => "First",
            TermKind::Second(_) => "Second",
            TermKind::Print(_) => "Print",
        }
    }
}

/// A function literal. Shared behind an `Rc` so that environments can hold
/// the unevaluated function without copying its body.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub parameters: Vec<Parameter>,
    pub value: Term,
}

impl Function {
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

/// A named binder: a function parameter or the name of a `let`.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub text: String,
    pub location: Location,
}

impl Parameter {
    pub fn new(text: impl Into<String>, location: Location) -> Self {
        Self {
            text: text.into(),
            location,
        }
    }
}
