//! The `collator` expression.

use serde_json::{Map, Value as Json};

use super::{Expression, Literal, expect_bool, expect_string};
use crate::collator::{Collator, CollatorOptions};
use crate::interpreter::{EvalError, EvaluationContext};
use crate::parser::syntax::{array_length, array_member, is_object, object_member};
use crate::parser::{ParseError, ParsingContext};
use crate::types::{Type, Value};

/// `["collator", {"case-sensitive": .., "diacritic-sensitive": .., "locale": ..}]`
///
/// Each option is itself an expression evaluated at runtime. Missing
/// sensitivity options default to literal `false`; a missing `locale` means
/// the default locale.
#[derive(Debug, Clone, PartialEq)]
pub struct CollatorExpression {
    case_sensitive: Box<Expression>,
    diacritic_sensitive: Box<Expression>,
    locale: Option<Box<Expression>>,
}

impl CollatorExpression {
    pub fn new(
        case_sensitive: Expression,
        diacritic_sensitive: Expression,
        locale: Option<Expression>,
    ) -> Self {
        Self {
            case_sensitive: Box::new(case_sensitive),
            diacritic_sensitive: Box::new(diacritic_sensitive),
            locale: locale.map(Box::new),
        }
    }

    pub fn case_sensitive(&self) -> &Expression {
        &self.case_sensitive
    }

    pub fn diacritic_sensitive(&self) -> &Expression {
        &self.diacritic_sensitive
    }

    pub fn locale(&self) -> Option<&Expression> {
        self.locale.as_deref()
    }

    /// Parse `["collator", options]`.
    ///
    /// Fails when there is not exactly one argument, when the argument is
    /// not an object, or when any present option fails to parse as its
    /// expected type. No partial node is produced.
    pub fn parse(value: &Json, ctx: &mut ParsingContext) -> Result<Expression, ParseError> {
        if array_length(value) != Some(2) {
            return Err(ctx.error("Expected exactly one argument."));
        }
        let Some(options) = array_member(value, 1).filter(|options| is_object(options)) else {
            return Err(ctx.error("Collator options argument must be an object."));
        };

        let case_sensitive = match object_member(options, "case-sensitive") {
            Some(option) => ctx.parse(option, 1, Some(Type::Boolean))?,
            None => Expression::Literal(Literal::new(Value::Boolean(false))),
        };
        let diacritic_sensitive = match object_member(options, "diacritic-sensitive") {
            Some(option) => ctx.parse(option, 1, Some(Type::Boolean))?,
            None => Expression::Literal(Literal::new(Value::Boolean(false))),
        };
        let locale = object_member(options, "locale")
            .map(|option| ctx.parse(option, 1, Some(Type::String)))
            .transpose()?;

        Ok(Expression::Collator(CollatorExpression::new(
            case_sensitive,
            diacritic_sensitive,
            locale,
        )))
    }

    /// Evaluate the options and build a collator.
    ///
    /// Children are evaluated case-sensitive, diacritic-sensitive, then
    /// locale; the first failure is returned as is.
    pub fn evaluate(&self, ctx: &EvaluationContext<'_>) -> Result<Collator, EvalError> {
        let case_sensitive = expect_bool("collator", &self.case_sensitive.evaluate(ctx)?)?;
        let diacritic_sensitive =
            expect_bool("collator", &self.diacritic_sensitive.evaluate(ctx)?)?;
        let locale = match &self.locale {
            Some(locale) => Some(expect_string("collator", locale.evaluate(ctx)?)?),
            None => None,
        };

        Ok(Collator::new(
            CollatorOptions::builder()
                .case_sensitive(case_sensitive)
                .diacritic_sensitive(diacritic_sensitive)
                .maybe_locale(locale)
                .build(),
        ))
    }

    pub fn each_child(&self, visit: &mut dyn FnMut(&Expression)) {
        visit(&*self.case_sensitive);
        visit(&*self.diacritic_sensitive);
        if let Some(locale) = self.locale.as_deref() {
            visit(locale);
        }
    }

    /// Serialize the options as a mapping of option name to child syntax.
    pub fn serialize(&self) -> Json {
        let mut options = Map::new();
        options.insert("case-sensitive".to_string(), self.case_sensitive.serialize());
        options.insert(
            "diacritic-sensitive".to_string(),
            self.diacritic_sensitive.serialize(),
        );
        if let Some(locale) = &self.locale {
            options.insert("locale".to_string(), locale.serialize());
        }
        Json::Object(options)
    }
}
