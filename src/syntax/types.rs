//! Type syntax
//!
//! Types appear in three places: case parameters, property annotations and
//! the signatures of generated members. The tree keeps the shape the host
//! parser saw, including redundant parentheses (a one-element [`TypeSyntax::Tuple`]),
//! so that normalization is an explicit step rather than a parser side effect.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A type in the host language
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeSyntax {
    /// A named type, optionally specialized: `Int`, `Array<Int>`
    Identifier {
        /// The type name
        name: String,
        /// Generic arguments, empty when unspecialized
        generic_args: Vec<TypeSyntax>,
    },
    /// `T?`
    Optional(Box<TypeSyntax>),
    /// `[T]`
    Array(Box<TypeSyntax>),
    /// `[K: V]`
    Dictionary {
        /// Key type
        key: Box<TypeSyntax>,
        /// Value type
        value: Box<TypeSyntax>,
    },
    /// `(A, b: B)`; a single unlabeled element is a parenthesized type
    Tuple(Vec<TupleTypeElement>),
    /// `(A, B) async throws -> R`
    Function(FunctionType),
    /// A type carrying attributes, e.g. `@escaping () -> Void`
    Attributed {
        /// Attribute names without the leading `@`
        attributes: Vec<String>,
        /// The attributed type
        base: Box<TypeSyntax>,
    },
    /// Opaque type text the engine does not model
    Raw(String),
}

/// One element of a tuple type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TupleTypeElement {
    /// Element label, `None` for positional elements
    pub label: Option<String>,
    /// Element type
    pub ty: TypeSyntax,
}

/// A function (closure) type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionType {
    /// Parameter types
    pub parameters: Vec<TupleTypeElement>,
    /// Whether the function is `async`
    pub is_async: bool,
    /// Whether the function `throws`
    pub throws: bool,
    /// Return type
    pub return_type: Box<TypeSyntax>,
}

impl TypeSyntax {
    /// A plain named type
    pub fn named(name: impl Into<String>) -> Self {
        TypeSyntax::Identifier {
            name: name.into(),
            generic_args: Vec::new(),
        }
    }

    /// A specialized generic type, `Name<Args...>`
    pub fn generic(name: impl Into<String>, args: Vec<TypeSyntax>) -> Self {
        TypeSyntax::Identifier {
            name: name.into(),
            generic_args: args,
        }
    }

    /// The unit type, spelled `Void`
    pub fn void() -> Self {
        Self::named("Void")
    }

    /// `Bool`
    pub fn bool() -> Self {
        Self::named("Bool")
    }

    /// Wrap in an optional
    pub fn optional(self) -> Self {
        TypeSyntax::Optional(Box::new(self))
    }

    /// `[self]`
    pub fn array_of(self) -> Self {
        TypeSyntax::Array(Box::new(self))
    }

    /// `[key: value]`
    pub fn dictionary(key: TypeSyntax, value: TypeSyntax) -> Self {
        TypeSyntax::Dictionary {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Wrap in a single pair of parentheses
    pub fn parenthesized(self) -> Self {
        TypeSyntax::Tuple(vec![TupleTypeElement::unlabeled(self)])
    }

    /// A function type without effects
    pub fn function(parameters: Vec<TypeSyntax>, return_type: TypeSyntax) -> Self {
        TypeSyntax::Function(FunctionType {
            parameters: parameters.into_iter().map(TupleTypeElement::unlabeled).collect(),
            is_async: false,
            throws: false,
            return_type: Box::new(return_type),
        })
    }

    /// Attach an attribute such as `escaping`
    pub fn attributed(self, attribute: impl Into<String>) -> Self {
        TypeSyntax::Attributed {
            attributes: vec![attribute.into()],
            base: Box::new(self),
        }
    }

    /// The simple name of a non-generic identifier type
    pub fn as_simple_name(&self) -> Option<&str> {
        match self {
            TypeSyntax::Identifier { name, generic_args } if generic_args.is_empty() => Some(name),
            _ => None,
        }
    }

    /// Check whether this is the named type `name`
    pub fn is_named(&self, name: &str) -> bool {
        self.as_simple_name() == Some(name)
    }

    fn needs_parens_before_suffix(&self) -> bool {
        matches!(self, TypeSyntax::Function(_) | TypeSyntax::Attributed { .. })
    }
}

impl TupleTypeElement {
    /// A positional element
    pub fn unlabeled(ty: TypeSyntax) -> Self {
        Self { label: None, ty }
    }

    /// A labeled element
    pub fn labeled(label: impl Into<String>, ty: TypeSyntax) -> Self {
        Self {
            label: Some(label.into()),
            ty,
        }
    }
}

impl fmt::Display for TypeSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSyntax::Identifier { name, generic_args } => {
                write!(f, "{}", name)?;
                if !generic_args.is_empty() {
                    write!(f, "<")?;
                    write_separated(f, generic_args)?;
                    write!(f, ">")?;
                }
                Ok(())
            }
            TypeSyntax::Optional(wrapped) => {
                if wrapped.needs_parens_before_suffix() {
                    write!(f, "({})?", wrapped)
                } else {
                    write!(f, "{}?", wrapped)
                }
            }
            TypeSyntax::Array(element) => write!(f, "[{}]", element),
            TypeSyntax::Dictionary { key, value } => write!(f, "[{}: {}]", key, value),
            TypeSyntax::Tuple(elements) => {
                write!(f, "(")?;
                write_separated(f, elements)?;
                write!(f, ")")
            }
            TypeSyntax::Function(function) => write!(f, "{}", function),
            TypeSyntax::Attributed { attributes, base } => {
                for attribute in attributes {
                    write!(f, "@{} ", attribute)?;
                }
                write!(f, "{}", base)
            }
            TypeSyntax::Raw(text) => write!(f, "{}", text),
        }
    }
}

impl fmt::Display for TupleTypeElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{}: {}", label, self.ty),
            None => write!(f, "{}", self.ty),
        }
    }
}

impl fmt::Display for FunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        write_separated(f, &self.parameters)?;
        write!(f, ")")?;
        if self.is_async {
            write!(f, " async")?;
        }
        if self.throws {
            write!(f, " throws")?;
        }
        write!(f, " -> {}", self.return_type)
    }
}

pub(crate) fn write_separated<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}
