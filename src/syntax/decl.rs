//! Input declaration nodes
//!
//! These are produced once by the host parser and only ever read by the
//! engine. Each declaration category is a closed variant of [`Decl`], so the
//! rules dispatch with an exhaustive `match` instead of downcasting.

use super::attribute::{has_marker, Attribute, MarkerName};
use super::expr::Expr;
use super::types::TypeSyntax;
use serde::{Deserialize, Serialize};

/// A declaration a marker can be attached to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decl {
    /// `enum Name { ... }`
    Enum(EnumDecl),
    /// `case a, b(Int)` inside an enum
    EnumCase(CaseGroup),
    /// `struct Name { ... }`
    Struct(StructDecl),
    /// `let a: T` / `var a = 1` inside a type
    Variable(PropertyDecl),
    /// Any other declaration (class, function, typealias, ...)
    Other(OtherDecl),
}

/// An enumeration declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnumDecl {
    /// The enum name
    pub name: String,
    /// Attributes on the enum itself
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    /// Members in source order; only [`Decl::EnumCase`] entries are cases
    pub members: Vec<Decl>,
}

/// One `case` line: one or more elements sharing attributes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaseGroup {
    /// Attributes written before `case`
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    /// The case elements, in order
    pub elements: Vec<CaseElement>,
}

/// A single enum case
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaseElement {
    /// The case name
    pub name: String,
    /// Associated values; `None` when the case has no parameter clause
    #[serde(default)]
    pub parameters: Option<Vec<Parameter>>,
}

/// An associated value of a case
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parameter {
    /// The label; `None` for positional values
    pub label: Option<String>,
    /// The declared type
    pub ty: TypeSyntax,
}

/// A structure declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StructDecl {
    /// The struct name
    pub name: String,
    /// Attributes on the struct itself
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    /// Members in source order; only [`Decl::Variable`] entries are properties
    pub members: Vec<Decl>,
}

/// `let` or `var`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mutability {
    /// `let`
    Constant,
    /// `var`
    Variable,
}

/// A property declaration, possibly binding several names: `let a, b: String`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyDecl {
    /// Attributes on the declaration
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    /// `let` or `var`
    pub mutability: Mutability,
    /// The comma-separated bindings, in order
    pub bindings: Vec<Binding>,
}

/// One binding of a property declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Binding {
    /// What is bound
    pub pattern: BindingPattern,
    /// The type annotation, if written
    #[serde(default)]
    pub ty: Option<TypeSyntax>,
    /// The initializer expression, if written
    #[serde(default)]
    pub initializer: Option<Expr>,
    /// The accessor block, if any
    #[serde(default)]
    pub accessor: AccessorKind,
}

/// The pattern of a binding
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BindingPattern {
    /// A simple name
    Identifier(String),
    /// Anything else (tuple destructuring, wildcard), kept as text
    Other(String),
}

/// The accessor block attached to a binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AccessorKind {
    /// No accessor block: stored property
    #[default]
    None,
    /// `{ expr }` or `{ get { ... } }`: computed, read-only
    ComputedGet,
    /// `{ get { ... } set { ... } }`: computed, read-write
    ComputedGetSet,
    /// `{ willSet { ... } didSet { ... } }`: stored with observers
    Observers,
}

/// A declaration the engine does not generate for
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OtherDecl {
    /// The introducing keyword (`class`, `func`, ...)
    pub keyword: String,
    /// The declared name
    pub name: String,
}

impl Decl {
    /// The introducing keyword, for messages
    pub fn keyword(&self) -> &str {
        match self {
            Decl::Enum(_) => "enum",
            Decl::EnumCase(_) => "case",
            Decl::Struct(_) => "struct",
            Decl::Variable(property) => match property.mutability {
                Mutability::Constant => "let",
                Mutability::Variable => "var",
            },
            Decl::Other(other) => &other.keyword,
        }
    }
}

impl EnumDecl {
    /// The case groups, in source order
    pub fn case_groups(&self) -> impl Iterator<Item = &CaseGroup> {
        self.members.iter().filter_map(|member| match member {
            Decl::EnumCase(group) => Some(group),
            _ => None,
        })
    }
}

impl StructDecl {
    /// The property declarations, in source order
    pub fn properties(&self) -> impl Iterator<Item = &PropertyDecl> {
        self.members.iter().filter_map(|member| match member {
            Decl::Variable(property) => Some(property),
            _ => None,
        })
    }
}

impl CaseGroup {
    /// Check whether the group carries any of `markers`
    pub fn has_marker(&self, markers: &[MarkerName]) -> bool {
        has_marker(&self.attributes, markers)
    }
}

impl CaseElement {
    /// The associated values, empty when there are none
    pub fn parameters(&self) -> &[Parameter] {
        self.parameters.as_deref().unwrap_or(&[])
    }
}

impl PropertyDecl {
    /// Check whether the declaration carries any of `markers`
    pub fn has_marker(&self, markers: &[MarkerName]) -> bool {
        has_marker(&self.attributes, markers)
    }
}

impl BindingPattern {
    /// The bound name, when the pattern is a simple identifier
    pub fn identifier(&self) -> Option<&str> {
        match self {
            BindingPattern::Identifier(name) => Some(name),
            BindingPattern::Other(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_groups_skip_other_members() {
        let decl = EnumDecl {
            name: "Color".to_string(),
            attributes: vec![],
            members: vec![
                Decl::EnumCase(CaseGroup {
                    attributes: vec![],
                    elements: vec![CaseElement {
                        name: "red".to_string(),
                        parameters: None,
                    }],
                }),
                Decl::Other(OtherDecl {
                    keyword: "func".to_string(),
                    name: "mix".to_string(),
                }),
            ],
        };
        assert_eq!(decl.case_groups().count(), 1);
    }

    #[test]
    fn test_empty_parameter_clause_is_empty_slice() {
        let element = CaseElement {
            name: "red".to_string(),
            parameters: Some(vec![]),
        };
        assert!(element.parameters().is_empty());
    }

    #[test]
    fn test_keyword() {
        let property = Decl::Variable(PropertyDecl {
            attributes: vec![],
            mutability: Mutability::Constant,
            bindings: vec![],
        });
        assert_eq!(property.keyword(), "let");
    }

    #[test]
    fn test_deserialize_from_json() {
        let json = r#"{
            "EnumCase": {
                "elements": [
                    { "name": "red", "parameters": [ { "label": "brightness", "ty": { "Identifier": { "name": "Double", "generic_args": [] } } } ] }
                ]
            }
        }"#;
        let decl: Decl = serde_json::from_str(json).unwrap();
        match decl {
            Decl::EnumCase(group) => {
                assert!(group.attributes.is_empty());
                assert_eq!(group.elements[0].parameters().len(), 1);
            }
            other => panic!("expected a case group, got {:?}", other),
        }
    }
}
