//! Batch expansion
//!
//! Expansions share no state, so many of them can run at once. With the
//! `parallel` feature the batch is spread over the rayon thread pool;
//! without it the same functions run sequentially.
//!
//! ```toml
//! [dependencies]
//! prismatic = { version = "0.1", features = ["parallel"] }
//! ```
//!
//! Results are always in request order.

use super::error::ExpandError;
use super::host::ExpansionRequest;
use super::registry::{default_registry, MacroRegistry};
use crate::syntax::generated::GeneratedDecl;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Result of one expansion in a batch
pub type BatchResult = Result<Vec<GeneratedDecl>, ExpandError>;

/// Expand every request with the built-in rules
pub fn expand_batch(requests: &[ExpansionRequest]) -> Vec<BatchResult> {
    expand_batch_with(default_registry(), requests)
}

/// Expand every request against `registry` in parallel
#[cfg(feature = "rayon")]
pub fn expand_batch_with(registry: &MacroRegistry, requests: &[ExpansionRequest]) -> Vec<BatchResult> {
    requests
        .par_iter()
        .map(|request| request.expand_with(registry))
        .collect()
}

/// Expand every request against `registry` sequentially
///
/// This is used when the `parallel` feature is not enabled.
#[cfg(not(feature = "rayon"))]
pub fn expand_batch_with(registry: &MacroRegistry, requests: &[ExpansionRequest]) -> Vec<BatchResult> {
    requests
        .iter()
        .map(|request| request.expand_with(registry))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::registry::AttachmentKind;
    use crate::syntax::attribute::{Attribute, MarkerName};
    use crate::syntax::builder::{ty, EnumBuilder, StructBuilder};

    #[test]
    fn test_batch_preserves_order() {
        let requests: Vec<ExpansionRequest> = (0..16)
            .map(|i| {
                ExpansionRequest::new(
                    Attribute::marker(MarkerName::Prism),
                    AttachmentKind::Member,
                    EnumBuilder::new("Numbered").case(&format!("case{}", i)).into_decl(),
                )
            })
            .collect();

        let results = expand_batch(&requests);
        assert_eq!(results.len(), 16);
        for (i, result) in results.iter().enumerate() {
            let generated = result.as_ref().unwrap();
            let GeneratedDecl::Member(member) = &generated[0] else {
                panic!("expected a member");
            };
            assert_eq!(member.name(), format!("case{}", i));
        }
    }

    #[test]
    fn test_batch_with_failures() {
        let requests = vec![
            ExpansionRequest::new(
                Attribute::marker(MarkerName::MemberwiseInit),
                AttachmentKind::Member,
                StructBuilder::new("Card").constant("id", ty("String")).into_decl(),
            ),
            ExpansionRequest::new(
                Attribute::marker(MarkerName::MemberwiseInit),
                AttachmentKind::Member,
                EnumBuilder::new("Color").into_decl(),
            ),
        ];

        let results = expand_batch(&requests);
        assert!(results[0].is_ok());
        assert_eq!(results[1], Err(ExpandError::NotAStruct));
    }
}
