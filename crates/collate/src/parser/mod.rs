//! Parsing of style-expression syntax.
//!
//! Raw syntax is JSON: literals are scalars and calls are arrays whose first
//! element names the operator, e.g. `["collator", {"case-sensitive": true}]`.
//! Parsing produces an [`Expression`](crate::expression::Expression) tree
//! that is type-checked against the type the caller expects.

mod context;
mod error;
pub mod syntax;

pub use context::ParsingContext;
pub use error::ParseError;

use serde_json::Value as Json;

use crate::expression::Expression;
use crate::types::Type;

/// Parse raw syntax into an expression tree.
///
/// `expected` constrains the root's type; pass `None` to accept any type.
///
/// # Example
///
/// ```
/// use collate::{Type, parse_expression};
/// use serde_json::json;
///
/// let expr = parse_expression(&json!(["collator", {"case-sensitive": true}]), None).unwrap();
/// assert_eq!(expr.result_type(), Type::Collator);
///
/// let err = parse_expression(&json!(["collator"]), None).unwrap_err();
/// assert_eq!(err.message, "Expected exactly one argument.");
/// ```
pub fn parse_expression(value: &Json, expected: Option<Type>) -> Result<Expression, ParseError> {
    ParsingContext::new(expected).parse_root(value)
}
