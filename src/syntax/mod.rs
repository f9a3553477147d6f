//! Syntax tree model
//!
//! # Module Organization
//!
//! ## Input nodes
//! - [`decl`] - Declarations handed over by the host parser
//! - [`attribute`] - Attributes, markers and visibility
//!
//! ## Shared nodes
//! - [`types`] - Type syntax
//! - [`expr`] - Expression syntax
//! - [`stmt`] - Statements of generated bodies
//!
//! ## Output nodes
//! - [`generated`] - Declarations produced by the engine
//!
//! ## Utilities
//! - [`builder`] - Fluent tree construction
//! - [`printer`] - Source rendering
//! - [`ident`] - Identifier validation and casing

pub mod attribute;
pub mod builder;
pub mod decl;
pub mod expr;
pub mod generated;
pub mod ident;
pub mod printer;
pub mod stmt;
pub mod types;

pub use attribute::{Attribute, MarkerArgument, MarkerName, Visibility};
pub use decl::{
    AccessorKind, Binding, BindingPattern, CaseElement, CaseGroup, Decl, EnumDecl, Mutability,
    OtherDecl, Parameter, PropertyDecl, StructDecl,
};
pub use expr::{CastKind, Expr, LabeledExpr};
pub use generated::{
    AccessorBody, ComputedProperty, ExtensionDecl, FunctionParameter, GeneratedDecl,
    InitializerDecl, Member,
};
pub use printer::SourcePrinter;
pub use stmt::{CasePattern, Condition, Stmt};
pub use types::{FunctionType, TupleTypeElement, TypeSyntax};
