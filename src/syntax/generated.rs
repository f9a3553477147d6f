//! Output declaration nodes
//!
//! Everything here is freshly built by the engine; nothing aliases the input
//! tree.

use super::attribute::Visibility;
use super::expr::Expr;
use super::stmt::Stmt;
use super::types::TypeSyntax;
use serde::{Deserialize, Serialize};

/// A declaration produced by an expansion
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeneratedDecl {
    /// A member spliced into the annotated type (or next to the annotated case)
    Member(Member),
    /// A separate extension of the annotated type
    Extension(ExtensionDecl),
}

/// A generated member
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Member {
    /// A computed property
    Property(ComputedProperty),
    /// An initializer
    Initializer(InitializerDecl),
}

/// `var name: Type { ... }`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComputedProperty {
    /// Explicit access modifier
    pub visibility: Option<Visibility>,
    /// Property name
    pub name: String,
    /// Property type
    pub ty: TypeSyntax,
    /// The accessor bodies
    pub accessors: AccessorBody,
}

/// The accessors of a computed property
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessorBody {
    /// A bare getter body
    Getter(Vec<Stmt>),
    /// Explicit `get` and `set` blocks; the setter sees `newValue`
    GetSet {
        /// Getter body
        get: Vec<Stmt>,
        /// Setter body
        set: Vec<Stmt>,
    },
}

/// `init(a: A, b: B = b0) { self.a = a ... }`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InitializerDecl {
    /// Explicit access modifier
    pub visibility: Option<Visibility>,
    /// Parameters in order
    pub parameters: Vec<FunctionParameter>,
    /// Body statements
    pub body: Vec<Stmt>,
}

/// A function parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionParameter {
    /// Parameter name (also its argument label)
    pub name: String,
    /// Parameter type
    pub ty: TypeSyntax,
    /// Default value
    pub default_value: Option<Expr>,
}

/// `extension Type { members }`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExtensionDecl {
    /// The extended type
    pub extended_type: TypeSyntax,
    /// Members in order
    pub members: Vec<Member>,
}

impl Member {
    /// The member's name (`init` for initializers)
    pub fn name(&self) -> &str {
        match self {
            Member::Property(property) => &property.name,
            Member::Initializer(_) => "init",
        }
    }

    /// The member's explicit access modifier
    pub fn visibility(&self) -> Option<Visibility> {
        match self {
            Member::Property(property) => property.visibility,
            Member::Initializer(init) => init.visibility,
        }
    }

    /// The member as a computed property
    pub fn as_property(&self) -> Option<&ComputedProperty> {
        match self {
            Member::Property(property) => Some(property),
            Member::Initializer(_) => None,
        }
    }

    /// The member as an initializer
    pub fn as_initializer(&self) -> Option<&InitializerDecl> {
        match self {
            Member::Initializer(init) => Some(init),
            Member::Property(_) => None,
        }
    }
}

impl ComputedProperty {
    /// Check whether the property can be assigned
    pub fn is_settable(&self) -> bool {
        matches!(self.accessors, AccessorBody::GetSet { .. })
    }

    /// The getter body
    pub fn getter(&self) -> &[Stmt] {
        match &self.accessors {
            AccessorBody::Getter(body) => body,
            AccessorBody::GetSet { get, .. } => get,
        }
    }

    /// The setter body, if any
    pub fn setter(&self) -> Option<&[Stmt]> {
        match &self.accessors {
            AccessorBody::Getter(_) => None,
            AccessorBody::GetSet { set, .. } => Some(set),
        }
    }
}

impl GeneratedDecl {
    /// Members of this declaration: itself, or the extension's members
    pub fn members(&self) -> &[Member] {
        match self {
            GeneratedDecl::Member(member) => std::slice::from_ref(member),
            GeneratedDecl::Extension(extension) => &extension.members,
        }
    }
}

/// Flatten expansion output into its members, in order
pub fn all_members(decls: &[GeneratedDecl]) -> Vec<&Member> {
    decls.iter().flat_map(GeneratedDecl::members).collect()
}
