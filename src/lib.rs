//! Prismatic - Syntax-Tree Code Generators for Enum Prisms and Memberwise Initializers
//!
//! Given an annotated declaration tree handed over by a host compiler, the
//! engine synthesizes new declarations:
//! - Case prisms: one optional, read-write property per enum case exposing
//!   its associated values
//! - Case predicates: one `is<Case>` boolean property per enum case
//! - Memberwise initializers for structs, with inferred parameter types and
//!   default values
//! - Source rendering of generated declarations
//! - A serde/JSON request boundary and batch expansion for hosts
//! - An interpreter for checking generated accessors without a compiler
//!
//! ## Quick Start
//!
//! ```rust
//! use prismatic::prelude::*;
//!
//! let color = EnumBuilder::new("Color")
//!     .case("red")
//!     .case_with("custom", vec![labeled("hex", ty("String"))])
//!     .into_decl();
//!
//! let generated = expand(
//!     &Attribute::marker(MarkerName::Prism).with_visibility(Visibility::Public),
//!     AttachmentKind::Member,
//!     &color,
//! )
//! .unwrap();
//!
//! let source = SourcePrinter::new().print(&generated);
//! assert!(source.contains("public var custom: String? {"));
//! assert!(source.contains("public var isRed: Bool {"));
//! ```
//!
//! ## Declarations from JSON
//!
//! ```rust
//! use prismatic::engine::host::{expand_request, ExpansionRequest, ExpansionResponse};
//!
//! let request: ExpansionRequest = serde_json::from_str(r#"{
//!     "marker": { "name": "@MemberwiseInit" },
//!     "kind": "Member",
//!     "declaration": { "Struct": {
//!         "name": "Card",
//!         "members": [
//!             { "Variable": {
//!                 "mutability": "Constant",
//!                 "bindings": [ {
//!                     "pattern": { "Identifier": "id" },
//!                     "ty": { "Identifier": { "name": "String", "generic_args": [] } }
//!                 } ]
//!             } }
//!         ]
//!     } }
//! }"#).unwrap();
//!
//! match expand_request(&request) {
//!     ExpansionResponse::Expanded { source, .. } => {
//!         assert_eq!(source, "init(id: String) {\n    self.id = id\n}");
//!     }
//!     ExpansionResponse::Failed { diagnostic } => panic!("{}", diagnostic),
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `logging` - Enable debug logging using the `log` crate
//! - `parallel` - Expand batches on the rayon thread pool

// Lint configuration for production quality
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all)]
#![allow(clippy::new_without_default)]
#![allow(clippy::module_inception)]

// Prelude module for convenient imports
pub mod prelude;

pub mod engine;
pub mod eval;
pub mod syntax;

/// Re-export commonly used types for convenience
pub use engine::{
    expand, expand_batch, expand_json, AttachmentKind, Diagnostic, ExpandError, MacroRegistry,
    MacroRule, Span,
};
pub use syntax::{Attribute, Decl, GeneratedDecl, MarkerName, SourcePrinter, Visibility};
