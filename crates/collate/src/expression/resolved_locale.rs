//! The `resolved-locale` expression.

use serde_json::{Value as Json, json};

use super::{Expression, expect_collator};
use crate::interpreter::{EvalError, EvaluationContext};
use crate::parser::syntax::{array_length, array_member};
use crate::parser::{ParseError, ParsingContext};
use crate::types::{Type, Value};

/// `["resolved-locale", collator]`: the locale the collator settled on.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocale {
    collator: Box<Expression>,
}

impl ResolvedLocale {
    pub fn new(collator: Expression) -> Self {
        Self {
            collator: Box::new(collator),
        }
    }

    pub fn parse(value: &Json, ctx: &mut ParsingContext) -> Result<Expression, ParseError> {
        let Some(collator) = array_member(value, 1).filter(|_| array_length(value) == Some(2))
        else {
            return Err(ctx.error("Expected exactly one argument."));
        };
        let collator = ctx.parse(collator, 1, Some(Type::Collator))?;
        Ok(Expression::ResolvedLocale(ResolvedLocale::new(collator)))
    }

    pub fn evaluate(&self, ctx: &EvaluationContext<'_>) -> Result<Value, EvalError> {
        let collator = expect_collator("resolved-locale", self.collator.evaluate(ctx)?)?;
        Ok(Value::String(collator.resolved_locale().to_string()))
    }

    pub fn each_child(&self, visit: &mut dyn FnMut(&Expression)) {
        visit(&*self.collator);
    }

    pub fn serialize(&self) -> Json {
        json!(["resolved-locale", self.collator.serialize()])
    }
}
