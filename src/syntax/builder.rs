//! Fluent construction of declaration trees
//!
//! Hosts normally hand the engine trees they parsed; these builders are for
//! everyone else (tests, benches, hosts assembling trees by hand).
//!
//! ```
//! use prismatic::syntax::builder::*;
//! use prismatic::syntax::Binding;
//!
//! let color = EnumBuilder::new("Color")
//!     .case("red")
//!     .case_with("custom", vec![labeled("hex", ty("String"))])
//!     .build();
//! assert_eq!(color.case_groups().count(), 2);
//!
//! let card = StructBuilder::new("Card")
//!     .property(PropertyBuilder::constant().bind(Binding::named("suit").typed(ty("String"))))
//!     .build();
//! assert_eq!(card.properties().count(), 1);
//! ```

use super::attribute::{Attribute, MarkerName};
use super::decl::{
    AccessorKind, Binding, BindingPattern, CaseElement, CaseGroup, Decl, EnumDecl, Mutability,
    OtherDecl, Parameter, PropertyDecl, StructDecl,
};
use super::expr::Expr;
use super::types::TypeSyntax;

/// A plain named type
pub fn ty(name: &str) -> TypeSyntax {
    TypeSyntax::named(name)
}

/// A positional associated value
pub fn positional(ty: TypeSyntax) -> Parameter {
    Parameter { label: None, ty }
}

/// A labeled associated value
pub fn labeled(label: &str, ty: TypeSyntax) -> Parameter {
    Parameter {
        label: Some(label.to_string()),
        ty,
    }
}

/// A case element without associated values
pub fn element(name: &str) -> CaseElement {
    CaseElement {
        name: name.to_string(),
        parameters: None,
    }
}

/// A case element with associated values
pub fn element_with(name: &str, parameters: Vec<Parameter>) -> CaseElement {
    CaseElement {
        name: name.to_string(),
        parameters: Some(parameters),
    }
}

/// A declaration the engine does not generate for
pub fn other(keyword: &str, name: &str) -> Decl {
    Decl::Other(OtherDecl {
        keyword: keyword.to_string(),
        name: name.to_string(),
    })
}

/// Builder for enum declarations
pub struct EnumBuilder {
    name: String,
    attributes: Vec<Attribute>,
    members: Vec<Decl>,
}

impl EnumBuilder {
    /// Start an enum
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attributes: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Attach an attribute to the enum
    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Add `case name`
    pub fn case(self, name: &str) -> Self {
        self.group(CaseBuilder::new().element(element(name)))
    }

    /// Add `case name(parameters...)`
    pub fn case_with(self, name: &str, parameters: Vec<Parameter>) -> Self {
        self.group(CaseBuilder::new().element(element_with(name, parameters)))
    }

    /// Add a case group
    pub fn group(mut self, group: CaseBuilder) -> Self {
        self.members.push(Decl::EnumCase(group.build()));
        self
    }

    /// Add any other member
    pub fn member(mut self, member: Decl) -> Self {
        self.members.push(member);
        self
    }

    /// Finish the enum
    pub fn build(self) -> EnumDecl {
        EnumDecl {
            name: self.name,
            attributes: self.attributes,
            members: self.members,
        }
    }

    /// Finish as a [`Decl`]
    pub fn into_decl(self) -> Decl {
        Decl::Enum(self.build())
    }
}

/// Builder for one `case` line
pub struct CaseBuilder {
    attributes: Vec<Attribute>,
    elements: Vec<CaseElement>,
}

impl CaseBuilder {
    /// Start an empty case group
    pub fn new() -> Self {
        Self {
            attributes: Vec::new(),
            elements: Vec::new(),
        }
    }

    /// Attach a known marker
    pub fn marker(self, marker: MarkerName) -> Self {
        self.attribute(Attribute::marker(marker))
    }

    /// Attach an attribute
    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Add an element
    pub fn element(mut self, element: CaseElement) -> Self {
        self.elements.push(element);
        self
    }

    /// Finish the group
    pub fn build(self) -> CaseGroup {
        CaseGroup {
            attributes: self.attributes,
            elements: self.elements,
        }
    }

    /// Finish as a [`Decl`]
    pub fn into_decl(self) -> Decl {
        Decl::EnumCase(self.build())
    }
}

impl Default for CaseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for struct declarations
pub struct StructBuilder {
    name: String,
    attributes: Vec<Attribute>,
    members: Vec<Decl>,
}

impl StructBuilder {
    /// Start a struct
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attributes: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Attach an attribute to the struct
    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Add a property declaration
    pub fn property(mut self, property: PropertyBuilder) -> Self {
        self.members.push(Decl::Variable(property.build()));
        self
    }

    /// Add `let name: ty`
    pub fn constant(self, name: &str, ty: TypeSyntax) -> Self {
        self.property(PropertyBuilder::constant().bind(Binding::named(name).typed(ty)))
    }

    /// Add `var name: ty`
    pub fn variable(self, name: &str, ty: TypeSyntax) -> Self {
        self.property(PropertyBuilder::variable().bind(Binding::named(name).typed(ty)))
    }

    /// Add any other member
    pub fn member(mut self, member: Decl) -> Self {
        self.members.push(member);
        self
    }

    /// Finish the struct
    pub fn build(self) -> StructDecl {
        StructDecl {
            name: self.name,
            attributes: self.attributes,
            members: self.members,
        }
    }

    /// Finish as a [`Decl`]
    pub fn into_decl(self) -> Decl {
        Decl::Struct(self.build())
    }
}

/// Builder for property declarations
pub struct PropertyBuilder {
    attributes: Vec<Attribute>,
    mutability: Mutability,
    bindings: Vec<Binding>,
}

impl PropertyBuilder {
    /// Start a `let` declaration
    pub fn constant() -> Self {
        Self::with_mutability(Mutability::Constant)
    }

    /// Start a `var` declaration
    pub fn variable() -> Self {
        Self::with_mutability(Mutability::Variable)
    }

    fn with_mutability(mutability: Mutability) -> Self {
        Self {
            attributes: Vec::new(),
            mutability,
            bindings: Vec::new(),
        }
    }

    /// Attach a known marker
    pub fn marker(mut self, marker: MarkerName) -> Self {
        self.attributes.push(Attribute::marker(marker));
        self
    }

    /// Attach an attribute
    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Add a binding
    pub fn bind(mut self, binding: Binding) -> Self {
        self.bindings.push(binding);
        self
    }

    /// Finish the declaration
    pub fn build(self) -> PropertyDecl {
        PropertyDecl {
            attributes: self.attributes,
            mutability: self.mutability,
            bindings: self.bindings,
        }
    }

    /// Finish as a [`Decl`]
    pub fn into_decl(self) -> Decl {
        Decl::Variable(self.build())
    }
}

impl Binding {
    /// A binding of a simple name with nothing else written
    pub fn named(name: &str) -> Self {
        Self::with_pattern(BindingPattern::Identifier(name.to_string()))
    }

    /// A binding with a non-identifier pattern such as `(a, b)`
    pub fn pattern(text: &str) -> Self {
        Self::with_pattern(BindingPattern::Other(text.to_string()))
    }

    fn with_pattern(pattern: BindingPattern) -> Self {
        Self {
            pattern,
            ty: None,
            initializer: None,
            accessor: AccessorKind::None,
        }
    }

    /// Add a type annotation
    pub fn typed(mut self, ty: TypeSyntax) -> Self {
        self.ty = Some(ty);
        self
    }

    /// Add an initializer expression
    pub fn initialized(mut self, value: Expr) -> Self {
        self.initializer = Some(value);
        self
    }

    /// Add an accessor block
    pub fn accessor(mut self, accessor: AccessorKind) -> Self {
        self.accessor = accessor;
        self
    }
}
