//! Expression tree nodes.
//!
//! [`Expression`] is a closed set of node kinds. Each kind owns its children
//! exclusively and implements the same operations: static result type,
//! evaluation, child enumeration, serialization back to syntax, and
//! structural equality. Nodes of different kinds are never equal.

mod assertion;
mod collator;
mod comparison;
mod get;
mod literal;
mod resolved_locale;

pub use assertion::Assertion;
pub use collator::CollatorExpression;
pub use comparison::{Comparison, ComparisonOperator};
pub use get::Get;
pub use literal::Literal;
pub use resolved_locale::ResolvedLocale;

use serde_json::{Value as Json, json};

use crate::collator::Collator;
use crate::interpreter::{EvalError, EvaluationContext};
use crate::types::{Type, Value};

/// A parsed style expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(Literal),
    Get(Get),
    Assertion(Assertion),
    Comparison(Comparison),
    Collator(CollatorExpression),
    ResolvedLocale(ResolvedLocale),
}

impl Expression {
    /// Static type of the values this expression produces.
    pub fn result_type(&self) -> Type {
        match self {
            Expression::Literal(node) => node.result_type(),
            Expression::Get(_) => Type::Value,
            Expression::Assertion(node) => node.result_type(),
            Expression::Comparison(_) => Type::Boolean,
            Expression::Collator(_) => Type::Collator,
            Expression::ResolvedLocale(_) => Type::String,
        }
    }

    /// Evaluate against a context. The first failing child aborts evaluation
    /// and its error is returned unchanged.
    pub fn evaluate(&self, ctx: &EvaluationContext<'_>) -> Result<Value, EvalError> {
        match self {
            Expression::Literal(node) => Ok(node.value().clone()),
            Expression::Get(node) => Ok(node.evaluate(ctx)),
            Expression::Assertion(node) => node.evaluate(ctx),
            Expression::Comparison(node) => node.evaluate(ctx),
            Expression::Collator(node) => node.evaluate(ctx).map(Value::Collator),
            Expression::ResolvedLocale(node) => node.evaluate(ctx),
        }
    }

    /// Visit each direct child in order.
    pub fn each_child(&self, visit: &mut dyn FnMut(&Expression)) {
        match self {
            Expression::Literal(_) | Expression::Get(_) => {}
            Expression::Assertion(node) => node.each_child(visit),
            Expression::Comparison(node) => node.each_child(visit),
            Expression::Collator(node) => node.each_child(visit),
            Expression::ResolvedLocale(node) => node.each_child(visit),
        }
    }

    /// Serialize back to expression syntax.
    pub fn serialize(&self) -> Json {
        match self {
            Expression::Literal(node) => node.serialize(),
            Expression::Get(node) => node.serialize(),
            Expression::Assertion(node) => node.serialize(),
            Expression::Comparison(node) => node.serialize(),
            Expression::Collator(node) => json!(["collator", node.serialize()]),
            Expression::ResolvedLocale(node) => node.serialize(),
        }
    }

    /// Whether the result is independent of feature properties.
    pub fn is_feature_constant(&self) -> bool {
        if matches!(self, Expression::Get(_)) {
            return false;
        }
        let mut constant = true;
        self.each_child(&mut |child| {
            constant = constant && child.is_feature_constant();
        });
        constant
    }
}

/// Narrow an evaluated child to a boolean.
pub(crate) fn expect_bool(context: &'static str, value: &Value) -> Result<bool, EvalError> {
    value.as_bool().ok_or(EvalError::UnexpectedType {
        context,
        expected: Type::Boolean,
        found: value.type_of(),
    })
}

/// Narrow an evaluated child to a string.
pub(crate) fn expect_string(context: &'static str, value: Value) -> Result<String, EvalError> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(EvalError::UnexpectedType {
            context,
            expected: Type::String,
            found: other.type_of(),
        }),
    }
}

/// Narrow an evaluated child to a collator.
pub(crate) fn expect_collator(context: &'static str, value: Value) -> Result<Collator, EvalError> {
    match value {
        Value::Collator(collator) => Ok(collator),
        other => Err(EvalError::UnexpectedType {
            context,
            expected: Type::Collator,
            found: other.type_of(),
        }),
    }
}
