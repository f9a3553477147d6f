//! Host boundary
//!
//! A host transport delivers one annotated declaration per request and
//! expects either the generated declarations or a diagnostic back. Both
//! directions are plain serde types, so JSON works out of the box:
//!
//! ```
//! use prismatic::engine::host::expand_json;
//!
//! let request = r#"{
//!     "marker": { "name": "Prism" },
//!     "kind": "Member",
//!     "declaration": { "Enum": {
//!         "name": "Color",
//!         "members": [
//!             { "EnumCase": { "elements": [ { "name": "red" } ] } }
//!         ]
//!     } }
//! }"#;
//!
//! let response = expand_json(request).unwrap();
//! assert!(response.contains("isRed"));
//! ```

use super::batch::expand_batch_with;
use super::error::{Diagnostic, ExpandError};
use super::registry::{default_registry, AttachmentKind, MacroRegistry};
use crate::syntax::attribute::Attribute;
use crate::syntax::decl::Decl;
use crate::syntax::generated::GeneratedDecl;
use crate::syntax::printer::SourcePrinter;
use serde::{Deserialize, Serialize};

/// One marker occurrence to expand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionRequest {
    /// The attribute as written at the attachment site
    pub marker: Attribute,
    /// What kind of declarations to generate
    pub kind: AttachmentKind,
    /// The annotated declaration
    pub declaration: Decl,
}

impl ExpansionRequest {
    /// Create a request
    pub fn new(marker: Attribute, kind: AttachmentKind, declaration: Decl) -> Self {
        Self {
            marker,
            kind,
            declaration,
        }
    }

    /// Expand against `registry`
    pub fn expand_with(&self, registry: &MacroRegistry) -> Result<Vec<GeneratedDecl>, ExpandError> {
        registry.expand(&self.marker, self.kind, &self.declaration)
    }
}

/// The answer to an [`ExpansionRequest`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpansionResponse {
    /// The expansion succeeded
    Expanded {
        /// Generated declarations, in order
        declarations: Vec<GeneratedDecl>,
        /// The same declarations rendered as source
        source: String,
    },
    /// The expansion failed; nothing was generated
    Failed {
        /// What to show at the attachment site
        diagnostic: Diagnostic,
    },
}

impl ExpansionResponse {
    /// Build the response for an expansion result
    pub fn from_result(
        request: &ExpansionRequest,
        result: Result<Vec<GeneratedDecl>, ExpandError>,
    ) -> Self {
        match result {
            Ok(declarations) => {
                let source = SourcePrinter::new().print(&declarations);
                ExpansionResponse::Expanded {
                    declarations,
                    source,
                }
            }
            Err(error) => ExpansionResponse::Failed {
                diagnostic: diagnostic_for(request, &error),
            },
        }
    }

    /// Check whether the expansion succeeded
    pub fn is_expanded(&self) -> bool {
        matches!(self, ExpansionResponse::Expanded { .. })
    }
}

fn diagnostic_for(request: &ExpansionRequest, error: &ExpandError) -> Diagnostic {
    let diagnostic = Diagnostic::from_error(error, request.marker.span);
    match error {
        ExpandError::UnknownMarker(_) => diagnostic,
        _ => {
            let marker = match request.marker.resolve() {
                Some(marker) => marker.to_string(),
                None => request.marker.name.clone(),
            };
            let keyword = request.declaration.keyword();
            diagnostic.with_note(format!(
                "{} was attached to {} {}",
                marker,
                article(keyword),
                keyword
            ))
        }
    }
}

fn article(word: &str) -> &'static str {
    match word.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

/// Expand one request with the built-in rules
pub fn expand_request(request: &ExpansionRequest) -> ExpansionResponse {
    ExpansionResponse::from_result(request, request.expand_with(default_registry()))
}

/// Expand one JSON-encoded [`ExpansionRequest`] into a JSON-encoded
/// [`ExpansionResponse`]
///
/// Only malformed JSON is an `Err`; expansion failures come back as
/// [`ExpansionResponse::Failed`].
pub fn expand_json(input: &str) -> Result<String, serde_json::Error> {
    let request: ExpansionRequest = serde_json::from_str(input)?;
    serde_json::to_string(&expand_request(&request))
}

/// Expand a JSON array of requests into a JSON array of responses, in order
pub fn expand_json_batch(input: &str) -> Result<String, serde_json::Error> {
    let requests: Vec<ExpansionRequest> = serde_json::from_str(input)?;
    let responses: Vec<ExpansionResponse> = requests
        .iter()
        .zip(expand_batch_with(default_registry(), &requests))
        .map(|(request, result)| ExpansionResponse::from_result(request, result))
        .collect();
    serde_json::to_string(&responses)
}
