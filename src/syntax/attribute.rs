//! Attributes and markers
//!
//! An [`Attribute`] is what the host parser saw written on a declaration.
//! A [`MarkerName`] is the closed set of attributes this engine understands;
//! an attribute is a marker when its written name resolves to one of them.

use super::expr::Expr;
use super::ident::resolve_attribute_name;
use crate::engine::error::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The argument label selecting the visibility of generated members
pub const VISIBILITY_ARGUMENT: &str = "visibility";

/// An attribute written on a declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attribute {
    /// The written name, e.g. `@Prism` or `Prism`
    pub name: String,
    /// Arguments in source order
    #[serde(default)]
    pub arguments: Vec<MarkerArgument>,
    /// Where the attribute was written, when the host knows
    #[serde(default)]
    pub span: Option<Span>,
}

/// One keyed (or positional) attribute argument
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkerArgument {
    /// The label, `None` for positional
    pub label: Option<String>,
    /// The argument value
    pub value: Expr,
}

/// Markers the engine recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkerName {
    /// Prism accessors and predicates for every case of an enum
    Prism,
    /// Prism accessors and predicates for one case group
    PrismCase,
    /// Opt a case group out of [`MarkerName::Prism`]
    NoPrism,
    /// Memberwise initializer for a struct
    MemberwiseInit,
    /// Opt a property out of [`MarkerName::MemberwiseInit`]
    NoMemberwiseInit,
}

/// Explicit access level for generated members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    /// `private`
    Private,
    /// `fileprivate`
    FilePrivate,
    /// `internal`
    Internal,
    /// `public`
    Public,
}

impl MarkerName {
    /// All known markers
    pub const ALL: [MarkerName; 5] = [
        MarkerName::Prism,
        MarkerName::PrismCase,
        MarkerName::NoPrism,
        MarkerName::MemberwiseInit,
        MarkerName::NoMemberwiseInit,
    ];

    /// The identifier the marker is written with
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerName::Prism => "Prism",
            MarkerName::PrismCase => "PrismCase",
            MarkerName::NoPrism => "NoPrism",
            MarkerName::MemberwiseInit => "MemberwiseInit",
            MarkerName::NoMemberwiseInit => "NoMemberwiseInit",
        }
    }

    /// Look up a marker by its bare identifier
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|marker| marker.as_str() == identifier)
    }
}

impl fmt::Display for MarkerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.as_str())
    }
}

impl Visibility {
    /// Parse a visibility keyword; `default` and unknown words give `None`
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "private" => Some(Visibility::Private),
            "fileprivate" => Some(Visibility::FilePrivate),
            "internal" => Some(Visibility::Internal),
            "public" => Some(Visibility::Public),
            _ => None,
        }
    }

    /// The modifier keyword
    pub fn keyword(&self) -> &'static str {
        match self {
            Visibility::Private => "private",
            Visibility::FilePrivate => "fileprivate",
            Visibility::Internal => "internal",
            Visibility::Public => "public",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

impl Attribute {
    /// An attribute with no arguments
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
            span: None,
        }
    }

    /// The attribute for a known marker
    pub fn marker(marker: MarkerName) -> Self {
        Self::new(marker.as_str())
    }

    /// Add `visibility: .<keyword>`
    pub fn with_visibility(self, visibility: Visibility) -> Self {
        self.with_argument(
            VISIBILITY_ARGUMENT,
            Expr::implicit_member(visibility.keyword()),
        )
    }

    /// Add a labeled argument
    pub fn with_argument(mut self, label: impl Into<String>, value: Expr) -> Self {
        self.arguments.push(MarkerArgument {
            label: Some(label.into()),
            value,
        });
        self
    }

    /// Record where the attribute was written
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// The marker this attribute names, if any
    pub fn resolve(&self) -> Option<MarkerName> {
        resolve_attribute_name(&self.name).and_then(|name| MarkerName::from_identifier(&name))
    }

    /// Check whether this attribute is the given marker
    pub fn is(&self, marker: MarkerName) -> bool {
        self.resolve() == Some(marker)
    }

    /// The requested visibility of generated members
    ///
    /// Reads the first argument labeled `visibility` whose value is a member
    /// access (`.public`, `Visibility.public`); the member name must be one
    /// of the four access levels, anything else means no explicit modifier.
    pub fn visibility(&self) -> Option<Visibility> {
        let argument = self
            .arguments
            .iter()
            .find(|argument| argument.label.as_deref() == Some(VISIBILITY_ARGUMENT))?;
        match &argument.value {
            Expr::MemberAccess { name, .. } => Visibility::from_keyword(name),
            _ => None,
        }
    }
}

/// Check whether any attribute in `attributes` is one of `markers`
pub fn has_marker(attributes: &[Attribute], markers: &[MarkerName]) -> bool {
    attributes
        .iter()
        .filter_map(Attribute::resolve)
        .any(|marker| markers.contains(&marker))
}
