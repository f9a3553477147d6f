//! Expansion errors and diagnostics
//!
//! Every failure is a validation error about where a marker was attached.
//! The engine never produces partial output: an expansion either returns all
//! of its declarations or one [`ExpandError`], which the host surfaces as a
//! [`Diagnostic`] at the attachment site.
//!
//! # Example Output
//!
//! ```text
//! error at line 1, column 1: This macro has to be attached to an Enum declaration
//! `- note: @Prism was attached to a struct
//! ```

use super::registry::AttachmentKind;
use crate::syntax::attribute::MarkerName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Source position range (byte offsets, 1-based lines and columns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset
    pub start: usize,
    /// End byte offset
    pub end: usize,
    /// Start line (1-based)
    pub start_line: usize,
    /// Start column (1-based)
    pub start_column: usize,
    /// End line (1-based)
    pub end_line: usize,
    /// End column (1-based)
    pub end_column: usize,
}

impl Span {
    /// Create a new span at a single position
    pub fn at(offset: usize, line: usize, column: usize) -> Self {
        Self {
            start: offset,
            end: offset,
            start_line: line,
            start_column: column,
            end_line: line,
            end_column: column,
        }
    }

    /// Create a span covering a range
    pub fn range(start: Span, end: Span) -> Self {
        Self {
            start: start.start,
            end: end.end,
            start_line: start.start_line,
            start_column: start.start_column,
            end_line: end.end_line,
            end_column: end.end_column,
        }
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::at(0, 1, 1)
    }
}

/// Why an expansion failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpandError {
    /// `@Prism` attached to something other than an enum
    NotAnEnum,
    /// `@PrismCase` or `@NoPrism` attached to something other than a case
    NotAnEnumCase,
    /// `@MemberwiseInit` attached to something other than a struct
    NotAStruct,
    /// `@NoMemberwiseInit` attached to something other than a property
    NotAVariableDeclaration,
    /// The attribute does not name a known marker
    UnknownMarker(String),
    /// The marker cannot generate declarations of this kind
    UnsupportedAttachment {
        /// The invoked marker
        marker: MarkerName,
        /// The requested attachment kind
        kind: AttachmentKind,
    },
}

impl fmt::Display for ExpandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpandError::NotAnEnum => {
                write!(f, "This macro has to be attached to an Enum declaration")
            }
            ExpandError::NotAnEnumCase => write!(f, "This macro has to be attached to an Enum Case"),
            ExpandError::NotAStruct => {
                write!(f, "This macro has to be attached to a Struct declaration")
            }
            ExpandError::NotAVariableDeclaration => {
                write!(f, "This macro has to be attached to a variable declaration")
            }
            ExpandError::UnknownMarker(name) => write!(f, "Unknown macro: {}", name),
            ExpandError::UnsupportedAttachment { marker, kind } => {
                write!(f, "{} does not provide {} declarations", marker, kind)
            }
        }
    }
}

impl std::error::Error for ExpandError {}

/// Error severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    /// Just a note
    Note,
    /// Warning
    Warning,
    /// Error
    Error,
}

/// A diagnostic for the host to show at the attachment site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The message
    pub message: String,
    /// Where the marker was attached
    pub span: Span,
    /// Severity
    pub severity: ErrorSeverity,
    /// Extra context lines
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create an error diagnostic at a position
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            severity: ErrorSeverity::Error,
            notes: Vec::new(),
        }
    }

    /// Build the diagnostic for a failed expansion
    pub fn from_error(error: &ExpandError, span: Option<Span>) -> Self {
        Self::error(error.to_string(), span.unwrap_or_default())
    }

    /// Add a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Set severity
    pub fn with_severity(mut self, severity: ErrorSeverity) -> Self {
        self.severity = severity;
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            ErrorSeverity::Note => "note",
            ErrorSeverity::Warning => "warning",
            ErrorSeverity::Error => "error",
        };
        write!(
            f,
            "{} at line {}, column {}: {}",
            level, self.span.start_line, self.span.start_column, self.message
        )?;
        for note in &self.notes {
            write!(f, "\n`- note: {}", note)?;
        }
        Ok(())
    }
}
