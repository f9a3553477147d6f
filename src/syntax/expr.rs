//! Expression syntax
//!
//! Covers the expression shapes that matter to the engine: literals and the
//! syntactic forms type inference looks at in property initializers, plus
//! the handful of forms the generated accessor bodies are built from.
//! Anything else the host can hand over as [`Expr::Raw`] text.

use super::types::{write_separated, TypeSyntax};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An expression
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expr {
    /// A string literal; holds the source text between the quotes
    StringLiteral(String),
    /// An integer literal in source spelling (`3`, `0x10`, `1_000`)
    IntegerLiteral(String),
    /// A floating-point literal in source spelling
    FloatLiteral(String),
    /// `true` / `false`
    BooleanLiteral(bool),
    /// `nil`
    Nil,
    /// A reference to a declaration (`value`, `self`, `Date`)
    DeclRef(String),
    /// `(a, label: b)`; zero elements is `()`
    Tuple(Vec<LabeledExpr>),
    /// `base.name`, or `.name` when the base is implicit
    MemberAccess {
        /// The base expression; `None` for implicit member access
        base: Option<Box<Expr>>,
        /// The accessed member (an identifier or a tuple index)
        name: String,
    },
    /// `base?`
    OptionalChain(Box<Expr>),
    /// `callee(args...)`
    Call {
        /// The called expression
        callee: Box<Expr>,
        /// Arguments in order
        arguments: Vec<LabeledExpr>,
    },
    /// `[a, b, c]`
    ArrayLiteral(Vec<Expr>),
    /// `[k: v, ...]`
    DictionaryLiteral(Vec<(Expr, Expr)>),
    /// `Base<Args...>` in expression position
    GenericSpecialization {
        /// The specialized expression
        base: Box<Expr>,
        /// Generic arguments
        arguments: Vec<TypeSyntax>,
    },
    /// `lhs op rhs`
    Infix {
        /// Left operand
        lhs: Box<Expr>,
        /// Operator spelling
        operator: String,
        /// Right operand
        rhs: Box<Expr>,
    },
    /// `expr as T`, `expr as? T`, `expr as! T`
    Cast {
        /// The cast expression
        expr: Box<Expr>,
        /// Cast flavor
        kind: CastKind,
        /// Target type
        ty: TypeSyntax,
    },
    /// Opaque expression text
    Raw(String),
}

/// The flavor of a cast expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CastKind {
    /// `as`
    Plain,
    /// `as?`
    Conditional,
    /// `as!`
    Forced,
}

/// An expression with an optional label, used in tuples and argument lists
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabeledExpr {
    /// The label, `None` for positional
    pub label: Option<String>,
    /// The expression
    pub expr: Expr,
}

impl LabeledExpr {
    /// A positional element
    pub fn unlabeled(expr: Expr) -> Self {
        Self { label: None, expr }
    }

    /// A labeled element
    pub fn labeled(label: impl Into<String>, expr: Expr) -> Self {
        Self {
            label: Some(label.into()),
            expr,
        }
    }
}

impl Expr {
    /// `self`
    pub fn self_ref() -> Self {
        Expr::DeclRef("self".to_string())
    }

    /// A declaration reference
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::DeclRef(name.into())
    }

    /// A string literal
    pub fn string(text: impl Into<String>) -> Self {
        Expr::StringLiteral(text.into())
    }

    /// An integer literal
    pub fn int(value: i64) -> Self {
        Expr::IntegerLiteral(value.to_string())
    }

    /// A float literal from its source spelling
    pub fn float(text: impl Into<String>) -> Self {
        Expr::FloatLiteral(text.into())
    }

    /// `base.name`
    pub fn member(base: Expr, name: impl Into<String>) -> Self {
        Expr::MemberAccess {
            base: Some(Box::new(base)),
            name: name.into(),
        }
    }

    /// `.name`
    pub fn implicit_member(name: impl Into<String>) -> Self {
        Expr::MemberAccess {
            base: None,
            name: name.into(),
        }
    }

    /// `callee(arguments...)`
    pub fn call(callee: Expr, arguments: Vec<LabeledExpr>) -> Self {
        Expr::Call {
            callee: Box::new(callee),
            arguments,
        }
    }

    /// `lhs op rhs`
    pub fn infix(lhs: Expr, operator: impl Into<String>, rhs: Expr) -> Self {
        Expr::Infix {
            lhs: Box::new(lhs),
            operator: operator.into(),
            rhs: Box::new(rhs),
        }
    }

    /// `()`
    pub fn unit() -> Self {
        Expr::Tuple(Vec::new())
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::StringLiteral(text) => write!(f, "\"{}\"", text),
            Expr::IntegerLiteral(text) | Expr::FloatLiteral(text) => write!(f, "{}", text),
            Expr::BooleanLiteral(b) => write!(f, "{}", b),
            Expr::Nil => write!(f, "nil"),
            Expr::DeclRef(name) => write!(f, "{}", name),
            Expr::Tuple(elements) => {
                write!(f, "(")?;
                write_separated(f, elements)?;
                write!(f, ")")
            }
            Expr::MemberAccess { base, name } => match base {
                Some(base) => write!(f, "{}.{}", base, name),
                None => write!(f, ".{}", name),
            },
            Expr::OptionalChain(base) => write!(f, "{}?", base),
            Expr::Call { callee, arguments } => {
                write!(f, "{}(", callee)?;
                write_separated(f, arguments)?;
                write!(f, ")")
            }
            Expr::ArrayLiteral(elements) => {
                write!(f, "[")?;
                write_separated(f, elements)?;
                write!(f, "]")
            }
            Expr::DictionaryLiteral(pairs) => {
                if pairs.is_empty() {
                    return write!(f, "[:]");
                }
                write!(f, "[")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "]")
            }
            Expr::GenericSpecialization { base, arguments } => {
                write!(f, "{}<", base)?;
                write_separated(f, arguments)?;
                write!(f, ">")
            }
            Expr::Infix { lhs, operator, rhs } => write!(f, "{} {} {}", lhs, operator, rhs),
            Expr::Cast { expr, kind, ty } => {
                let keyword = match kind {
                    CastKind::Plain => "as",
                    CastKind::Conditional => "as?",
                    CastKind::Forced => "as!",
                };
                write!(f, "{} {} {}", expr, keyword, ty)
            }
            Expr::Raw(text) => write!(f, "{}", text),
        }
    }
}

impl fmt::Display for LabeledExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{}: {}", label, self.expr),
            None => write!(f, "{}", self.expr),
        }
    }
}
