//! Parse error types.

use thiserror::Error;

/// An error reported while parsing expression syntax.
///
/// `key` locates the offending node as a path of argument indices from the
/// root, e.g. `[1][3]`. It is empty for the root itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}{message}", location(.key))]
pub struct ParseError {
    pub key: String,
    pub message: String,
}

impl ParseError {
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }
}

fn location(key: &str) -> String {
    if key.is_empty() {
        String::new()
    } else {
        format!("{key}: ")
    }
}
