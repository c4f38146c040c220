//! Integration tests for comparison and `resolved-locale` expressions.

use std::collections::HashMap;

use collate::expression::ComparisonOperator;
use collate::{EvalError, EvaluationContext, Expression, Type, Value, parse_expression};
use serde_json::{Value as Json, json};

fn parse(syntax: Json) -> Expression {
    parse_expression(&syntax, None).unwrap()
}

fn eval_with(syntax: Json, properties: &HashMap<String, Value>) -> Result<Value, EvalError> {
    parse(syntax).evaluate(&EvaluationContext::new(properties))
}

fn eval(syntax: Json) -> Result<Value, EvalError> {
    eval_with(syntax, &HashMap::new())
}

// =============================================================================
// Operators
// =============================================================================

#[test]
fn operator_names_round_trip() {
    for name in ["==", "!=", "<", "<=", ">", ">="] {
        let operator = ComparisonOperator::from_name(name).unwrap();
        assert_eq!(operator.as_str(), name);
        assert_eq!(operator.to_string(), name);
    }
    assert_eq!(ComparisonOperator::from_name("<>"), None);
}

#[test]
fn only_equality_operators_are_not_ordering() {
    assert!(!ComparisonOperator::Equal.is_ordering());
    assert!(!ComparisonOperator::NotEqual.is_ordering());
    assert!(ComparisonOperator::Less.is_ordering());
    assert!(ComparisonOperator::GreaterOrEqual.is_ordering());
}

// =============================================================================
// Without a Collator
// =============================================================================

#[test]
fn strings_compare_by_codepoint() {
    assert_eq!(eval(json!(["<", "a", "b"])).unwrap(), Value::Boolean(true));
    assert_eq!(eval(json!(["<", "a", "B"])).unwrap(), Value::Boolean(false));
    assert_eq!(eval(json!(["==", "a", "A"])).unwrap(), Value::Boolean(false));
}

#[test]
fn numbers_compare_numerically() {
    assert_eq!(eval(json!([">", 10, 9])).unwrap(), Value::Boolean(true));
    assert_eq!(eval(json!(["<=", 2, 2])).unwrap(), Value::Boolean(true));
    assert_eq!(eval(json!(["!=", 1, 1.5])).unwrap(), Value::Boolean(true));
}

#[test]
fn equality_accepts_booleans_and_null() {
    assert_eq!(eval(json!(["==", true, true])).unwrap(), Value::Boolean(true));
    assert_eq!(eval(json!(["!=", null, null])).unwrap(), Value::Boolean(false));
}

#[test]
fn equality_across_runtime_types_is_false() {
    let properties = HashMap::from([("n".to_string(), Value::from(1))]);
    assert_eq!(
        eval_with(json!(["==", ["get", "n"], "1"]), &properties).unwrap(),
        Value::Boolean(false)
    );
}

#[test]
fn ordering_mismatched_runtime_types_fails() {
    let properties = HashMap::from([("n".to_string(), Value::from(1))]);
    let err = eval_with(json!(["<", ["get", "n"], "1"]), &properties).unwrap_err();
    assert_eq!(
        err,
        EvalError::IncomparableArguments {
            operator: "<".to_string(),
            lhs: Type::Number,
            rhs: Type::String,
        }
    );
    assert_eq!(
        err.to_string(),
        "Expected arguments for \"<\" to be (string, string) or (number, number), but found (number, string) instead."
    );
}

// =============================================================================
// With a Collator
// =============================================================================

#[test]
fn collated_equality_of_identical_strings() {
    assert_eq!(
        eval(json!(["==", "Zürich", "Zürich", ["collator", {}]])).unwrap(),
        Value::Boolean(true)
    );
}

#[test]
fn collated_comparison_rejects_non_strings_at_runtime() {
    let properties = HashMap::from([("n".to_string(), Value::from(3))]);
    let err = eval_with(
        json!(["==", ["get", "n"], "3", ["collator", {}]]),
        &properties,
    )
    .unwrap_err();
    assert!(matches!(err, EvalError::IncomparableArguments { .. }));
}

#[test]
fn collator_errors_surface_through_comparison() {
    let err = eval(json!([
        "==",
        "a",
        "b",
        ["collator", {"case-sensitive": ["get", "cs"]}]
    ]))
    .unwrap_err();
    assert_eq!(
        err,
        EvalError::TypeMismatch {
            expected: Type::Boolean,
            found: Type::Null,
        }
    );
}

#[test]
fn comparison_children_include_collator() {
    let expr = parse(json!(["<", "a", "b", ["collator", {}]]));
    let mut kinds = Vec::new();
    expr.each_child(&mut |child| kinds.push(child.result_type()));
    assert_eq!(kinds, vec![Type::String, Type::String, Type::Collator]);
}

#[test]
fn comparison_serializes_with_collator() {
    let expr = parse(json!(["<", ["get", "name"], "b", ["collator", {"locale": "de"}]]));
    assert_eq!(
        expr.serialize(),
        json!([
            "<",
            ["get", "name"],
            "b",
            ["collator", {"case-sensitive": false, "diacritic-sensitive": false, "locale": "de"}]
        ])
    );
}

#[cfg(feature = "icu")]
mod icu {
    use super::*;

    #[test]
    fn primary_collator_ignores_case_and_accents() {
        assert_eq!(
            eval(json!(["==", "café", "CAFE", ["collator", {}]])).unwrap(),
            Value::Boolean(true)
        );
    }

    #[test]
    fn case_sensitive_collator_distinguishes_case() {
        assert_eq!(
            eval(json!(["==", "a", "A", ["collator", {"case-sensitive": true}]])).unwrap(),
            Value::Boolean(false)
        );
        assert_eq!(
            eval(json!(["==", "a", "á", ["collator", {"case-sensitive": true}]])).unwrap(),
            Value::Boolean(true)
        );
    }

    #[test]
    fn collated_ordering_follows_locale() {
        assert_eq!(
            eval(json!(["<", "ä", "z", ["collator", {"locale": "de"}]])).unwrap(),
            Value::Boolean(true)
        );
        assert_eq!(
            eval(json!(["<", "ä", "z", ["collator", {"locale": "sv"}]])).unwrap(),
            Value::Boolean(false)
        );
    }

    #[test]
    fn resolved_locale_reports_negotiated_tag() {
        assert_eq!(
            eval(json!(["resolved-locale", ["collator", {"locale": "EN_us"}]])).unwrap(),
            Value::from("en-US")
        );
    }
}

// =============================================================================
// Parse Errors
// =============================================================================

#[test]
fn comparison_requires_two_or_three_arguments() {
    let err = parse_expression(&json!(["==", "a"]), None).unwrap_err();
    assert_eq!(err.message, "Expected two or three arguments.");
}

#[test]
fn ordering_rejects_booleans() {
    let err = parse_expression(&json!(["<", true, false]), None).unwrap_err();
    assert_eq!(err.key, "[1]");
    assert_eq!(
        err.message,
        "\"<\" comparisons are not supported for type 'boolean'."
    );
}

#[test]
fn comparison_rejects_mismatched_static_types() {
    let err = parse_expression(&json!(["==", "a", 1]), None).unwrap_err();
    assert_eq!(err.key, "");
    assert_eq!(err.message, "Cannot compare types 'string' and 'number'.");
}

#[test]
fn collator_requires_string_operands() {
    let err = parse_expression(&json!(["<", 1, 2, ["collator", {}]]), None).unwrap_err();
    assert_eq!(
        err.message,
        "Cannot use collator to compare non-string types."
    );
}

#[test]
fn comparison_collator_argument_must_be_collator() {
    let err = parse_expression(&json!(["==", "a", "b", "de"]), None).unwrap_err();
    assert_eq!(err.key, "[3]");
    assert_eq!(err.message, "Expected collator but found string instead.");
}

// =============================================================================
// resolved-locale
// =============================================================================

#[test]
fn resolved_locale_has_string_type() {
    let expr = parse(json!(["resolved-locale", ["collator", {}]]));
    assert_eq!(expr.result_type(), Type::String);
    assert_eq!(expr.serialize(), json!([
        "resolved-locale",
        ["collator", {"case-sensitive": false, "diacritic-sensitive": false}]
    ]));
}

#[test]
fn resolved_locale_requires_collator_argument() {
    let err = parse_expression(&json!(["resolved-locale", "en"]), None).unwrap_err();
    assert_eq!(err.key, "[1]");
    assert_eq!(err.message, "Expected collator but found string instead.");

    let err = parse_expression(&json!(["resolved-locale"]), None).unwrap_err();
    assert_eq!(err.message, "Expected exactly one argument.");
}
