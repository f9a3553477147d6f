//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from
//! prismatic. Importing this module with a wildcard import brings them into
//! scope:
//!
//! ```
//! use prismatic::prelude::*;
//! ```
//!
//! # Re-exported Items
//!
//! ## Syntax Trees
//! - [`Decl`] - Input declaration
//! - [`Attribute`] - Attribute written on a declaration
//! - [`MarkerName`] - Recognized markers
//! - [`Visibility`] - Access modifiers
//! - [`TypeSyntax`] / [`Expr`] - Type and expression syntax
//! - [`GeneratedDecl`] / [`Member`] - Generated declarations
//!
//! ## Builders
//! - [`EnumBuilder`], [`CaseBuilder`], [`StructBuilder`], [`PropertyBuilder`]
//! - [`ty()`], [`labeled()`], [`positional()`], [`element()`], [`element_with()`]
//!
//! ## Expansion
//! - [`expand()`] - Expand with the built-in rules
//! - [`MacroRegistry`] - Registry of rules
//! - [`AttachmentKind`] - Where generated declarations go
//! - [`ExpandError`] / [`Diagnostic`] - Failures
//!
//! ## Output
//! - [`SourcePrinter`] - Render generated declarations

// ============================================================================
// Syntax Trees
// ============================================================================

pub use crate::syntax::{
    Attribute, Binding, Decl, Expr, GeneratedDecl, MarkerName, Member, TypeSyntax, Visibility,
};

// ============================================================================
// Builders
// ============================================================================

pub use crate::syntax::builder::{
    element, element_with, labeled, positional, ty, CaseBuilder, EnumBuilder, PropertyBuilder,
    StructBuilder,
};

// ============================================================================
// Expansion
// ============================================================================

pub use crate::engine::{expand, AttachmentKind, Diagnostic, ExpandError, MacroRegistry};

// ============================================================================
// Output
// ============================================================================

pub use crate::syntax::SourcePrinter;
