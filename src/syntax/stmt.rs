//! Statements used in generated accessor and initializer bodies

use super::expr::Expr;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A statement
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stmt {
    /// An expression statement; the last one in a branch is the branch value
    Expr(Expr),
    /// `return` or `return expr`
    Return(Option<Expr>),
    /// `guard conditions else { ... }`
    Guard {
        /// Conditions, all of which must hold
        conditions: Vec<Condition>,
        /// Body run when a condition fails; must exit the scope
        else_body: Vec<Stmt>,
    },
    /// `if conditions { ... } else { ... }`
    If {
        /// Conditions, all of which must hold
        conditions: Vec<Condition>,
        /// Body run when the conditions hold
        then_body: Vec<Stmt>,
        /// Optional else branch
        else_body: Option<Vec<Stmt>>,
    },
    /// `target = value`
    Assign {
        /// Assigned place
        target: Expr,
        /// Assigned value
        value: Expr,
    },
}

/// A condition in an `if` or `guard`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    /// `case .name = subject` or `case let .name(a, b) = subject`
    Case(CasePattern),
    /// `let name = value`, holds when `value` is not `nil`
    OptionalBinding {
        /// Bound name
        name: String,
        /// Unwrapped value
        value: Expr,
    },
}

/// A single-case pattern match against a subject
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CasePattern {
    /// The matched case
    pub case_name: String,
    /// Names bound to the associated values, positionally; empty binds nothing
    pub bindings: Vec<String>,
    /// The matched expression
    pub subject: Expr,
}

impl CasePattern {
    /// Match a case without binding associated values
    pub fn new(case_name: impl Into<String>, subject: Expr) -> Self {
        Self {
            case_name: case_name.into(),
            bindings: Vec::new(),
            subject,
        }
    }

    /// Bind associated values to `bindings`
    pub fn binding(mut self, bindings: Vec<String>) -> Self {
        self.bindings = bindings;
        self
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Case(pattern) => write!(f, "{}", pattern),
            Condition::OptionalBinding { name, value } => write!(f, "let {} = {}", name, value),
        }
    }
}

impl fmt::Display for CasePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bindings.is_empty() {
            write!(f, "case .{} = {}", self.case_name, self.subject)
        } else {
            write!(
                f,
                "case let .{}({}) = {}",
                self.case_name,
                self.bindings.join(", "),
                self.subject
            )
        }
    }
}
