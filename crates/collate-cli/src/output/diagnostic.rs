//! Miette diagnostic wrapper for malformed expression JSON.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for expression syntax that is not valid
/// JSON.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid expression: {message}")]
#[diagnostic(code(collate::json))]
pub struct ExprDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl ExprDiagnostic {
    /// Create a diagnostic from a JSON syntax error in `content`.
    pub fn from_json_error(content: &str, err: &serde_json::Error) -> Self {
        let offset = byte_offset(content, err.line(), err.column());
        ExprDiagnostic {
            src: NamedSource::new("<expr>", content.to_string()),
            span: (offset, 1).into(),
            message: err.to_string(),
            help: Some(r#"expressions are JSON, e.g. ["collator", {"case-sensitive": true}]"#.into()),
        }
    }
}

/// Convert a 1-based line:column to a byte offset, clamped to the content.
fn byte_offset(content: &str, line: usize, column: usize) -> usize {
    let offset = content
        .lines()
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum::<usize>()
        + column.saturating_sub(1);

    // Clamp offset to content length to avoid miette panic on out-of-bounds
    offset.min(content.len())
}
