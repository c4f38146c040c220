//! Comparison operators, optionally driven by a collator.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result as FmtResult};

use serde_json::Value as Json;

use super::{Expression, expect_collator};
use crate::interpreter::{EvalError, EvaluationContext};
use crate::parser::{ParseError, ParsingContext};
use crate::types::{Type, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    Equal,
    NotEqual,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
}

impl ComparisonOperator {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "==" => Some(ComparisonOperator::Equal),
            "!=" => Some(ComparisonOperator::NotEqual),
            "<" => Some(ComparisonOperator::Less),
            "<=" => Some(ComparisonOperator::LessOrEqual),
            ">" => Some(ComparisonOperator::Greater),
            ">=" => Some(ComparisonOperator::GreaterOrEqual),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ComparisonOperator::Equal => "==",
            ComparisonOperator::NotEqual => "!=",
            ComparisonOperator::Less => "<",
            ComparisonOperator::LessOrEqual => "<=",
            ComparisonOperator::Greater => ">",
            ComparisonOperator::GreaterOrEqual => ">=",
        }
    }

    /// Whether this operator orders its operands rather than testing equality.
    pub fn is_ordering(self) -> bool {
        !matches!(
            self,
            ComparisonOperator::Equal | ComparisonOperator::NotEqual
        )
    }

    /// Whether a three-way result satisfies this operator.
    pub fn accepts(self, ordering: Ordering) -> bool {
        match self {
            ComparisonOperator::Equal => ordering == Ordering::Equal,
            ComparisonOperator::NotEqual => ordering != Ordering::Equal,
            ComparisonOperator::Less => ordering == Ordering::Less,
            ComparisonOperator::LessOrEqual => ordering != Ordering::Greater,
            ComparisonOperator::Greater => ordering == Ordering::Greater,
            ComparisonOperator::GreaterOrEqual => ordering != Ordering::Less,
        }
    }

    fn supports(self, ty: Type) -> bool {
        match ty {
            Type::String | Type::Number | Type::Value => true,
            Type::Boolean | Type::Null => !self.is_ordering(),
            Type::Object | Type::Array | Type::Collator => false,
        }
    }
}

impl Display for ComparisonOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// `[op, lhs, rhs]` or `[op, lhs, rhs, collator]`.
///
/// With a collator both operands must be strings and are ordered with
/// [`Collator::compare`](crate::Collator::compare). Without one, strings
/// compare codepoint-wise and numbers numerically; equality operators also
/// accept booleans and null.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    operator: ComparisonOperator,
    lhs: Box<Expression>,
    rhs: Box<Expression>,
    collator: Option<Box<Expression>>,
}

impl Comparison {
    pub fn new(
        operator: ComparisonOperator,
        lhs: Expression,
        rhs: Expression,
        collator: Option<Expression>,
    ) -> Self {
        Self {
            operator,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            collator: collator.map(Box::new),
        }
    }

    pub fn operator(&self) -> ComparisonOperator {
        self.operator
    }

    pub fn parse(value: &Json, ctx: &mut ParsingContext) -> Result<Expression, ParseError> {
        let Some(items) = value.as_array().filter(|items| matches!(items.len(), 3 | 4)) else {
            return Err(ctx.error("Expected two or three arguments."));
        };
        let Some(operator) = items[0].as_str().and_then(ComparisonOperator::from_name) else {
            return Err(ctx.error_at(0, "Unknown comparison operator."));
        };

        let lhs = ctx.parse(&items[1], 1, Some(Type::Value))?;
        let lhs_type = lhs.result_type();
        if !operator.supports(lhs_type) {
            return Err(ctx.error_at(
                1,
                format!("\"{operator}\" comparisons are not supported for type '{lhs_type}'."),
            ));
        }

        let rhs = ctx.parse(&items[2], 2, Some(Type::Value))?;
        let rhs_type = rhs.result_type();
        if !operator.supports(rhs_type) {
            return Err(ctx.error_at(
                2,
                format!("\"{operator}\" comparisons are not supported for type '{rhs_type}'."),
            ));
        }

        if lhs_type != rhs_type && lhs_type != Type::Value && rhs_type != Type::Value {
            return Err(ctx.error(format!(
                "Cannot compare types '{lhs_type}' and '{rhs_type}'."
            )));
        }

        let collator = match items.get(3) {
            Some(collator) => {
                let string_like = |ty: Type| matches!(ty, Type::String | Type::Value);
                if !string_like(lhs_type) || !string_like(rhs_type) {
                    return Err(ctx.error("Cannot use collator to compare non-string types."));
                }
                Some(ctx.parse(collator, 3, Some(Type::Collator))?)
            }
            None => None,
        };

        Ok(Expression::Comparison(Comparison::new(
            operator, lhs, rhs, collator,
        )))
    }

    pub fn evaluate(&self, ctx: &EvaluationContext<'_>) -> Result<Value, EvalError> {
        let lhs = self.lhs.evaluate(ctx)?;
        let rhs = self.rhs.evaluate(ctx)?;

        if let Some(collator) = self.collator.as_deref() {
            let collator = expect_collator("comparison", collator.evaluate(ctx)?)?;
            let (Value::String(l), Value::String(r)) = (&lhs, &rhs) else {
                return Err(self.incomparable(&lhs, &rhs));
            };
            return Ok(Value::Boolean(self.operator.accepts(collator.compare(l, r))));
        }

        if !self.operator.is_ordering() {
            let equal = lhs == rhs;
            return Ok(Value::Boolean(
                (self.operator == ComparisonOperator::Equal) == equal,
            ));
        }

        let ordering = match (&lhs, &rhs) {
            (Value::String(l), Value::String(r)) => Some(l.cmp(r)),
            (Value::Number(l), Value::Number(r)) => l.partial_cmp(r),
            _ => return Err(self.incomparable(&lhs, &rhs)),
        };
        Ok(Value::Boolean(
            ordering.is_some_and(|ordering| self.operator.accepts(ordering)),
        ))
    }

    fn incomparable(&self, lhs: &Value, rhs: &Value) -> EvalError {
        EvalError::IncomparableArguments {
            operator: self.operator.to_string(),
            lhs: lhs.type_of(),
            rhs: rhs.type_of(),
        }
    }

    pub fn each_child(&self, visit: &mut dyn FnMut(&Expression)) {
        visit(&*self.lhs);
        visit(&*self.rhs);
        if let Some(collator) = self.collator.as_deref() {
            visit(collator);
        }
    }

    pub fn serialize(&self) -> Json {
        let mut serialized = vec![
            Json::String(self.operator.to_string()),
            self.lhs.serialize(),
            self.rhs.serialize(),
        ];
        if let Some(collator) = self.collator.as_deref() {
            serialized.push(collator.serialize());
        }
        Json::Array(serialized)
    }
}
