//! Marker dispatch
//!
//! A [`MacroRule`] turns one annotated declaration into generated
//! declarations. The [`MacroRegistry`] maps resolved marker names to rules;
//! [`expand`] runs an invocation against the default registry.
//!
//! # Example
//!
//! ```
//! use prismatic::engine::registry::{expand, AttachmentKind};
//! use prismatic::syntax::{Attribute, MarkerName};
//! use prismatic::syntax::builder::EnumBuilder;
//!
//! let color = EnumBuilder::new("Color").case("red").into_decl();
//! let generated = expand(
//!     &Attribute::marker(MarkerName::Prism),
//!     AttachmentKind::Member,
//!     &color,
//! )
//! .unwrap();
//! assert_eq!(generated.len(), 2);
//! ```

use super::error::ExpandError;
use super::memberwise::{MemberwiseInitRule, NoMemberwiseInitRule};
use super::prism::{NoPrismRule, PrismCaseRule, PrismRule};
use crate::syntax::attribute::{Attribute, MarkerName};
use crate::syntax::decl::Decl;
use crate::syntax::generated::GeneratedDecl;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Logging macros - no-op when logging feature is disabled
#[cfg(not(feature = "logging"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

/// Logging macros - use log crate when logging feature is enabled
#[cfg(feature = "logging")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

pub(crate) use log_debug;

/// Where generated declarations go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttachmentKind {
    /// Members spliced into the annotated type
    Member,
    /// A separate extension of the annotated type
    Extension,
    /// Declarations next to the annotated declaration
    Peer,
}

impl fmt::Display for AttachmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttachmentKind::Member => write!(f, "member"),
            AttachmentKind::Extension => write!(f, "extension"),
            AttachmentKind::Peer => write!(f, "peer"),
        }
    }
}

/// One marker occurrence being expanded
#[derive(Debug, Clone, Copy)]
pub struct Invocation<'a> {
    /// The attribute as written
    pub attribute: &'a Attribute,
    /// The resolved marker
    pub marker: MarkerName,
    /// What kind of declarations the host asked for
    pub kind: AttachmentKind,
}

/// A code-generation rule for one marker
///
/// Rules are stateless; one call consumes a read-only declaration and
/// returns fully built output or an error, never both.
pub trait MacroRule: Send + Sync {
    /// The marker this rule handles
    fn marker(&self) -> MarkerName;

    /// The attachment kinds this rule can produce
    fn attachment_kinds(&self) -> &'static [AttachmentKind];

    /// Expand one annotated declaration
    fn expand(
        &self,
        invocation: &Invocation<'_>,
        declaration: &Decl,
    ) -> Result<Vec<GeneratedDecl>, ExpandError>;
}

/// Registry of rules keyed by marker
pub struct MacroRegistry {
    rules: HashMap<MarkerName, Box<dyn MacroRule>>,
}

impl MacroRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// A registry holding the five built-in rules
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(PrismRule));
        registry.register(Box::new(PrismCaseRule));
        registry.register(Box::new(NoPrismRule));
        registry.register(Box::new(MemberwiseInitRule));
        registry.register(Box::new(NoMemberwiseInitRule));
        registry
    }

    /// Register a rule
    ///
    /// # Returns
    ///
    /// `true` if the rule was registered, `false` if a rule for that marker
    /// already exists.
    pub fn register(&mut self, rule: Box<dyn MacroRule>) -> bool {
        let marker = rule.marker();
        if self.rules.contains_key(&marker) {
            return false;
        }
        self.rules.insert(marker, rule);
        true
    }

    /// Check if a rule exists for a marker
    pub fn contains(&self, marker: MarkerName) -> bool {
        self.rules.contains_key(&marker)
    }

    /// Get the number of registered rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Expand `declaration` for the marker written as `attribute`
    pub fn expand(
        &self,
        attribute: &Attribute,
        kind: AttachmentKind,
        declaration: &Decl,
    ) -> Result<Vec<GeneratedDecl>, ExpandError> {
        let marker = attribute
            .resolve()
            .ok_or_else(|| ExpandError::UnknownMarker(attribute.name.clone()))?;
        let rule = self
            .rules
            .get(&marker)
            .ok_or_else(|| ExpandError::UnknownMarker(attribute.name.clone()))?;
        if !rule.attachment_kinds().contains(&kind) {
            return Err(ExpandError::UnsupportedAttachment { marker, kind });
        }

        log_debug!(
            "expanding {} as {} on {} declaration",
            marker,
            kind,
            declaration.keyword()
        );

        let invocation = Invocation {
            attribute,
            marker,
            kind,
        };
        let generated = rule.expand(&invocation, declaration)?;

        log_debug!("{} generated {} declaration(s)", marker, generated.len());
        Ok(generated)
    }
}

impl Default for MacroRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// The shared registry of built-in rules
pub(crate) fn default_registry() -> &'static MacroRegistry {
    static REGISTRY: OnceLock<MacroRegistry> = OnceLock::new();
    REGISTRY.get_or_init(MacroRegistry::with_defaults)
}

/// Expand one marker occurrence with the built-in rules
pub fn expand(
    attribute: &Attribute,
    kind: AttachmentKind,
    declaration: &Decl,
) -> Result<Vec<GeneratedDecl>, ExpandError> {
    default_registry().expand(attribute, kind, declaration)
}
