//! Memberwise initializers
//!
//! [`MemberwiseInitRule`] synthesizes `init(...)` for a struct from its
//! stored properties. [`NoMemberwiseInitRule`] marks a property to leave out
//! and generates nothing itself.
//!
//! # Property selection
//!
//! Bindings of each declaration are scanned last to first so that
//! `var a, b: Int` gives both `a` and `b` the trailing annotation. Per binding:
//!
//! - `let` with an initializer is already set, skip
//! - `var` with a computed getter (with or without setter) is not stored, skip
//! - otherwise the type is the declared annotation, else the inferred
//!   initializer type
//! - a non-identifier pattern carries its type on and is skipped
//! - with no type at all the binding is skipped
//!
//! A `var` initializer becomes the parameter's default value.

use super::error::ExpandError;
use super::infer::{infer_initializer, normalize_declared};
use super::registry::{log_debug, AttachmentKind, Invocation, MacroRule};
use crate::syntax::attribute::{MarkerName, Visibility};
use crate::syntax::decl::{AccessorKind, Decl, Mutability, PropertyDecl, StructDecl};
use crate::syntax::expr::Expr;
use crate::syntax::generated::{ExtensionDecl, FunctionParameter, GeneratedDecl, InitializerDecl, Member};
use crate::syntax::stmt::Stmt;
use crate::syntax::types::TypeSyntax;

/// A stored property that becomes an initializer parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredProperty {
    /// Property name
    pub name: String,
    /// Parameter type
    pub ty: TypeSyntax,
    /// Default value, from a `var` initializer
    pub default_value: Option<Expr>,
}

/// Stored properties of a struct that the initializer must set, in order
pub fn stored_properties(decl: &StructDecl) -> Vec<StoredProperty> {
    decl.properties()
        .filter(|property| {
            let excluded = property.has_marker(&[MarkerName::NoMemberwiseInit]);
            if excluded {
                log_debug!("{}: property excluded from memberwise init", decl.name);
            }
            !excluded
        })
        .flat_map(classify)
        .collect()
}

/// Stored properties introduced by one declaration, in binding order
pub fn classify(property: &PropertyDecl) -> Vec<StoredProperty> {
    let mut stored = Vec::new();
    let mut last_known_type: Option<TypeSyntax> = None;

    for binding in property.bindings.iter().rev() {
        let is_constant = property.mutability == Mutability::Constant;
        if is_constant && binding.initializer.is_some() {
            continue;
        }
        if !is_constant
            && matches!(
                binding.accessor,
                AccessorKind::ComputedGet | AccessorKind::ComputedGetSet
            )
        {
            continue;
        }

        let new_type = binding
            .ty
            .as_ref()
            .map(normalize_declared)
            .or_else(|| binding.initializer.as_ref().and_then(infer_initializer));

        let Some(name) = binding.pattern.identifier() else {
            last_known_type = new_type.or(last_known_type);
            continue;
        };

        let Some(ty) = new_type.or_else(|| last_known_type.clone()) else {
            log_debug!("no type for property {}, skipping", name);
            continue;
        };

        last_known_type = Some(ty.clone());
        stored.push(StoredProperty {
            name: name.to_string(),
            ty,
            default_value: binding.initializer.clone(),
        });
    }

    stored.reverse();
    stored
}

/// `init(a: A, ...) { self.a = a ... }`
pub fn initializer(properties: &[StoredProperty], visibility: Option<Visibility>) -> Member {
    let parameters = properties
        .iter()
        .map(|property| FunctionParameter {
            name: property.name.clone(),
            ty: property.ty.clone(),
            default_value: property.default_value.clone(),
        })
        .collect();
    let body = properties
        .iter()
        .map(|property| Stmt::Assign {
            target: Expr::member(Expr::self_ref(), property.name.clone()),
            value: Expr::ident(property.name.clone()),
        })
        .collect();

    Member::Initializer(InitializerDecl {
        visibility,
        parameters,
        body,
    })
}

/// `@MemberwiseInit`
pub struct MemberwiseInitRule;

impl MacroRule for MemberwiseInitRule {
    fn marker(&self) -> MarkerName {
        MarkerName::MemberwiseInit
    }

    fn attachment_kinds(&self) -> &'static [AttachmentKind] {
        &[AttachmentKind::Member, AttachmentKind::Extension]
    }

    fn expand(
        &self,
        invocation: &Invocation<'_>,
        declaration: &Decl,
    ) -> Result<Vec<GeneratedDecl>, ExpandError> {
        let Decl::Struct(decl) = declaration else {
            return Err(ExpandError::NotAStruct);
        };

        let properties = stored_properties(decl);
        log_debug!("{}: {} initializer parameter(s)", decl.name, properties.len());
        let init = initializer(&properties, invocation.attribute.visibility());

        Ok(vec![match invocation.kind {
            AttachmentKind::Extension => GeneratedDecl::Extension(ExtensionDecl {
                extended_type: extended_type(decl),
                members: vec![init],
            }),
            _ => GeneratedDecl::Member(init),
        }])
    }
}

fn extended_type(decl: &StructDecl) -> TypeSyntax {
    TypeSyntax::named(decl.name.clone())
}

/// `@NoMemberwiseInit`
pub struct NoMemberwiseInitRule;

impl MacroRule for NoMemberwiseInitRule {
    fn marker(&self) -> MarkerName {
        MarkerName::NoMemberwiseInit
    }

    fn attachment_kinds(&self) -> &'static [AttachmentKind] {
        &[AttachmentKind::Peer]
    }

    fn expand(
        &self,
        _invocation: &Invocation<'_>,
        declaration: &Decl,
    ) -> Result<Vec<GeneratedDecl>, ExpandError> {
        match declaration {
            Decl::Variable(_) => Ok(Vec::new()),
            _ => Err(ExpandError::NotAVariableDeclaration),
        }
    }
}
