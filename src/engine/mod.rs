//! Transformation engine
//!
//! Every entry point is a pure function of an immutable declaration tree:
//! it returns freshly built declarations or one [`ExpandError`], never
//! partial output, and keeps no state between calls.
//!
//! # Module Organization
//!
//! ## Dispatch
//! - [`registry`] - Marker rules and the default registry
//! - [`error`] - Expansion errors and diagnostics
//!
//! ## Rules
//! - [`prism`] - `@Prism`, `@PrismCase`, `@NoPrism`
//! - [`memberwise`] - `@MemberwiseInit`, `@NoMemberwiseInit`
//!
//! ## Generators
//! - [`accessor`] - Prism and predicate members for one case
//! - [`infer`] - Initializer type inference
//!
//! ## Hosting
//! - [`batch`] - Many expansions at once
//! - [`host`] - Serde request/response boundary

// ============================================================================
// Module Declarations
// ============================================================================

pub mod accessor;
pub mod batch;
pub mod error;
pub mod host;
pub mod infer;
pub mod memberwise;
pub mod prism;
pub mod registry;

// ============================================================================
// Re-exports
// ============================================================================

pub use batch::{expand_batch, expand_batch_with, BatchResult};
pub use error::{Diagnostic, ErrorSeverity, ExpandError, Span};
pub use host::{expand_json, expand_json_batch, expand_request, ExpansionRequest, ExpansionResponse};
pub use memberwise::{MemberwiseInitRule, NoMemberwiseInitRule};
pub use prism::{NoPrismRule, PrismCaseRule, PrismRule};
pub use registry::{expand, AttachmentKind, Invocation, MacroRegistry, MacroRule};
