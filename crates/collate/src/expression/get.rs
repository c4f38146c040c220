//! Feature property lookup.

use serde_json::{Value as Json, json};

use super::Expression;
use crate::interpreter::EvaluationContext;
use crate::parser::syntax::{array_length, array_member};
use crate::parser::{ParseError, ParsingContext};
use crate::types::Value;

/// `["get", name]`: the named feature property, or `null` when absent.
#[derive(Debug, Clone, PartialEq)]
pub struct Get {
    name: String,
}

impl Get {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parse(value: &Json, ctx: &mut ParsingContext) -> Result<Expression, ParseError> {
        if array_length(value) != Some(2) {
            return Err(ctx.error("Expected exactly one argument."));
        }
        let Some(name) = array_member(value, 1).and_then(Json::as_str) else {
            return Err(ctx.error("Expected a string property name."));
        };
        Ok(Expression::Get(Get::new(name)))
    }

    pub fn evaluate(&self, ctx: &EvaluationContext<'_>) -> Value {
        ctx.get_property(&self.name).cloned().unwrap_or(Value::Null)
    }

    pub fn serialize(&self) -> Json {
        json!(["get", self.name])
    }
}
