//! Parsing context tracking the expected type, key path and reported errors.

use std::mem;

use serde_json::Value as Json;

use super::ParseError;
use super::syntax::kind_name;
use crate::expression::{
    Assertion, CollatorExpression, Comparison, Expression, Get, Literal, ResolvedLocale,
};
use crate::types::{Type, Value};

/// State carried through recursive parsing.
///
/// The context tracks:
/// - The type the node being parsed is expected to have
/// - The key path from the root to that node, for error locations
/// - Every error reported so far (the error sink)
#[derive(Debug, Default)]
pub struct ParsingContext {
    /// Argument indices from the root to the current node.
    path: Vec<usize>,
    /// Type the current node must produce, if constrained.
    expected: Option<Type>,
    /// Errors reported through [`ParsingContext::error`].
    errors: Vec<ParseError>,
}

impl ParsingContext {
    /// Create a root context expecting `expected` (or any type).
    pub fn new(expected: Option<Type>) -> Self {
        Self {
            path: Vec::new(),
            expected,
            errors: Vec::new(),
        }
    }

    /// Type the current node must produce, if constrained.
    pub fn expected(&self) -> Option<Type> {
        self.expected
    }

    /// Key path of the current node, e.g. `[1][3]`.
    pub fn key(&self) -> String {
        self.path.iter().map(|index| format!("[{index}]")).collect()
    }

    /// Report an error at the current key.
    ///
    /// The error is recorded in the sink and returned so callers can abort
    /// with `Err(ctx.error(..))`.
    pub fn error(&mut self, message: impl Into<String>) -> ParseError {
        let error = ParseError::new(self.key(), message);
        self.errors.push(error.clone());
        error
    }

    /// Report an error at argument `index` of the current node.
    pub fn error_at(&mut self, index: usize, message: impl Into<String>) -> ParseError {
        self.path.push(index);
        let error = self.error(message);
        self.path.pop();
        error
    }

    /// Errors reported so far.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Drain all reported errors.
    pub fn take_errors(&mut self) -> Vec<ParseError> {
        mem::take(&mut self.errors)
    }

    /// Parse the root node of a syntax tree.
    pub fn parse_root(&mut self, value: &Json) -> Result<Expression, ParseError> {
        self.parse_value(value)
    }

    /// Parse argument `index` of the current node as a child expression.
    ///
    /// The child is checked against `expected`; the current expected type and
    /// key are restored afterwards whether or not parsing succeeded.
    pub fn parse(
        &mut self,
        value: &Json,
        index: usize,
        expected: Option<Type>,
    ) -> Result<Expression, ParseError> {
        self.path.push(index);
        let outer = mem::replace(&mut self.expected, expected);
        let result = self.parse_value(value);
        self.expected = outer;
        self.path.pop();
        result
    }

    fn parse_value(&mut self, value: &Json) -> Result<Expression, ParseError> {
        let parsed = match value {
            Json::Array(items) => self.parse_call(value, items)?,
            Json::Object(_) => {
                return Err(self.error(r#"Bare objects invalid. Use ["literal", {...}] instead."#));
            }
            scalar => Expression::Literal(Literal::new(Value::from_json(scalar))),
        };
        self.annotate(parsed)
    }

    fn parse_call(&mut self, value: &Json, items: &[Json]) -> Result<Expression, ParseError> {
        let Some(head) = items.first() else {
            return Err(self.error(
                r#"Expected an array with at least one element. If you wanted a literal array, use ["literal", []]."#,
            ));
        };
        let Some(operator) = head.as_str() else {
            return Err(self.error(format!(
                r#"Expression name must be a string, but found {} instead. If you wanted a literal array, use ["literal", [...]]."#,
                kind_name(head)
            )));
        };

        match operator {
            "literal" => Literal::parse(value, self),
            "get" => Get::parse(value, self),
            "boolean" | "string" | "number" | "object" => Assertion::parse(value, self),
            "==" | "!=" | "<" | "<=" | ">" | ">=" => Comparison::parse(value, self),
            "collator" => CollatorExpression::parse(value, self),
            "resolved-locale" => ResolvedLocale::parse(value, self),
            unknown => Err(self.error_at(
                0,
                format!(
                    r#"Unknown expression "{unknown}". If you wanted a literal array, use ["literal", [...]]."#
                ),
            )),
        }
    }

    /// Check a parsed node against the expected type.
    ///
    /// A `value`-typed node is wrapped in a runtime assertion when the
    /// expected type can be asserted; any other mismatch is an error.
    fn annotate(&mut self, expression: Expression) -> Result<Expression, ParseError> {
        let Some(expected) = self.expected else {
            return Ok(expression);
        };
        let actual = expression.result_type();
        if expected == Type::Value || actual == expected {
            return Ok(expression);
        }
        if actual == Type::Value && Assertion::can_assert(expected) {
            return Ok(Expression::Assertion(Assertion::new(
                expected,
                vec![expression],
            )));
        }
        Err(self.error(format!("Expected {expected} but found {actual} instead.")))
    }
}
