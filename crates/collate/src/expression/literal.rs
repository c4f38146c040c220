//! Literal values.

use serde_json::{Value as Json, json};

use super::Expression;
use crate::parser::syntax::{array_length, array_member};
use crate::parser::{ParseError, ParsingContext};
use crate::types::{Type, Value};

/// A constant value: a bare scalar, or `["literal", value]` for arrays and
/// objects.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    value: Value,
}

impl Literal {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn result_type(&self) -> Type {
        self.value.type_of()
    }

    /// Parse `["literal", value]`.
    pub fn parse(value: &Json, ctx: &mut ParsingContext) -> Result<Expression, ParseError> {
        let length = array_length(value).unwrap_or_default();
        let Some(literal) = array_member(value, 1).filter(|_| length == 2) else {
            return Err(ctx.error(format!(
                "'literal' expression requires exactly one argument, but found {} instead.",
                length.saturating_sub(1)
            )));
        };
        Ok(Expression::Literal(Literal::new(Value::from_json(literal))))
    }

    /// Scalars serialize as themselves; arrays and objects are wrapped in
    /// `["literal", ...]` so they are not read back as calls.
    pub fn serialize(&self) -> Json {
        match &self.value {
            Value::Array(_) | Value::Object(_) => json!(["literal", self.value.serialize()]),
            scalar => scalar.serialize(),
        }
    }
}
