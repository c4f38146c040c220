//! Runtime type assertions.

use serde_json::Value as Json;

use super::Expression;
use crate::interpreter::{EvalError, EvaluationContext};
use crate::parser::{ParseError, ParsingContext};
use crate::types::{Type, Value};

/// `["boolean" | "string" | "number" | "object", input, ...fallbacks]`
///
/// Yields the first input whose runtime type matches. The parser also
/// inserts assertions around `value`-typed children where a concrete type
/// is expected.
#[derive(Debug, Clone, PartialEq)]
pub struct Assertion {
    asserted: Type,
    inputs: Vec<Expression>,
}

impl Assertion {
    pub fn new(asserted: Type, inputs: Vec<Expression>) -> Self {
        Self { asserted, inputs }
    }

    /// Whether values can be checked against `ty` at runtime.
    pub fn can_assert(ty: Type) -> bool {
        matches!(
            ty,
            Type::Boolean | Type::String | Type::Number | Type::Object
        )
    }

    pub fn result_type(&self) -> Type {
        self.asserted
    }

    pub fn parse(value: &Json, ctx: &mut ParsingContext) -> Result<Expression, ParseError> {
        let Some(items) = value.as_array().filter(|items| items.len() >= 2) else {
            return Err(ctx.error("Expected at least one argument."));
        };
        let asserted = match items[0].as_str() {
            Some("boolean") => Type::Boolean,
            Some("string") => Type::String,
            Some("number") => Type::Number,
            Some("object") => Type::Object,
            _ => return Err(ctx.error("Unknown assertion type.")),
        };

        let inputs = items
            .iter()
            .enumerate()
            .skip(1)
            .map(|(index, item)| ctx.parse(item, index, Some(Type::Value)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Expression::Assertion(Assertion::new(asserted, inputs)))
    }

    pub fn evaluate(&self, ctx: &EvaluationContext<'_>) -> Result<Value, EvalError> {
        let mut found = Type::Null;
        for input in &self.inputs {
            let value = input.evaluate(ctx)?;
            if value.type_of() == self.asserted {
                return Ok(value);
            }
            found = value.type_of();
        }
        Err(EvalError::TypeMismatch {
            expected: self.asserted,
            found,
        })
    }

    pub fn each_child(&self, visit: &mut dyn FnMut(&Expression)) {
        for input in &self.inputs {
            visit(input);
        }
    }

    pub fn serialize(&self) -> Json {
        let mut serialized = vec![Json::String(self.asserted.to_string())];
        serialized.extend(self.inputs.iter().map(Expression::serialize));
        Json::Array(serialized)
    }
}
