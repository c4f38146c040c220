//! Integration tests for the expression parser and the simple node kinds.

use std::collections::HashMap;

use collate::{EvalError, EvaluationContext, ParsingContext, Type, Value, parse_expression};
use serde_json::json;

// =============================================================================
// Call Syntax
// =============================================================================

#[test]
fn scalars_parse_as_literals() {
    for (syntax, ty) in [
        (json!(null), Type::Null),
        (json!(true), Type::Boolean),
        (json!(1.5), Type::Number),
        (json!("text"), Type::String),
    ] {
        let expr = parse_expression(&syntax, None).unwrap();
        assert_eq!(expr.result_type(), ty);
        assert_eq!(expr.serialize(), syntax);
    }
}

#[test]
fn bare_objects_are_rejected() {
    let err = parse_expression(&json!({"a": 1}), None).unwrap_err();
    assert_eq!(
        err.message,
        r#"Bare objects invalid. Use ["literal", {...}] instead."#
    );
}

#[test]
fn empty_array_is_rejected() {
    let err = parse_expression(&json!([]), None).unwrap_err();
    assert!(err.message.starts_with("Expected an array with at least one element."));
}

#[test]
fn non_string_expression_name_is_rejected() {
    let err = parse_expression(&json!([1, 2]), None).unwrap_err();
    assert!(
        err.message
            .starts_with("Expression name must be a string, but found number instead.")
    );
}

#[test]
fn unknown_expression_is_reported_at_name() {
    let err = parse_expression(&json!(["concat", "a", "b"]), None).unwrap_err();
    assert_eq!(err.key, "[0]");
    assert!(err.message.starts_with(r#"Unknown expression "concat"."#));
}

#[test]
fn root_expected_type_is_checked() {
    let err = parse_expression(&json!("text"), Some(Type::Boolean)).unwrap_err();
    assert_eq!(err.key, "");
    assert_eq!(err.message, "Expected boolean but found string instead.");

    let expr = parse_expression(&json!(["get", "flag"]), Some(Type::Boolean)).unwrap();
    assert_eq!(expr.result_type(), Type::Boolean);
    assert_eq!(expr.serialize(), json!(["boolean", ["get", "flag"]]));
}

#[test]
fn collator_typed_values_are_not_asserted() {
    let err = parse_expression(&json!(["get", "c"]), Some(Type::Collator)).unwrap_err();
    assert_eq!(err.message, "Expected collator but found value instead.");
}

#[test]
fn context_key_restores_after_child() {
    let mut ctx = ParsingContext::new(None);
    assert_eq!(ctx.key(), "");
    ctx.parse(&json!(["get", "a"]), 2, Some(Type::String)).unwrap();
    assert_eq!(ctx.key(), "");
    assert_eq!(ctx.expected(), None);
    assert!(ctx.errors().is_empty());
}

#[test]
fn context_collects_and_drains_errors() {
    let mut ctx = ParsingContext::new(None);
    let first = ctx.error("first");
    let second = ctx.error_at(4, "second");
    assert_eq!(first.to_string(), "first");
    assert_eq!(second.to_string(), "[4]: second");
    assert_eq!(ctx.take_errors(), vec![first, second]);
    assert!(ctx.errors().is_empty());
}

// =============================================================================
// literal
// =============================================================================

#[test]
fn literal_wraps_arrays_and_objects() {
    let expr = parse_expression(&json!(["literal", {"b": [1, 2]}]), None).unwrap();
    assert_eq!(expr.result_type(), Type::Object);
    assert_eq!(expr.serialize(), json!(["literal", {"b": [1, 2]}]));
}

#[test]
fn literal_requires_one_argument() {
    let err = parse_expression(&json!(["literal", 1, 2]), None).unwrap_err();
    assert_eq!(
        err.message,
        "'literal' expression requires exactly one argument, but found 2 instead."
    );
}

#[test]
fn literal_is_feature_constant() {
    assert!(parse_expression(&json!(3), None).unwrap().is_feature_constant());
}

// =============================================================================
// get
// =============================================================================

#[test]
fn get_reads_property_or_null() {
    let expr = parse_expression(&json!(["get", "name"]), None).unwrap();
    let properties = HashMap::from([("name".to_string(), Value::from("Bern"))]);
    assert_eq!(
        expr.evaluate(&EvaluationContext::new(&properties)).unwrap(),
        Value::from("Bern")
    );
    assert_eq!(
        expr.evaluate(&EvaluationContext::new(&HashMap::new())).unwrap(),
        Value::Null
    );
    assert!(!expr.is_feature_constant());
}

#[test]
fn get_requires_string_name() {
    let err = parse_expression(&json!(["get", 3]), None).unwrap_err();
    assert_eq!(err.message, "Expected a string property name.");
    let err = parse_expression(&json!(["get"]), None).unwrap_err();
    assert_eq!(err.message, "Expected exactly one argument.");
}

// =============================================================================
// Assertions
// =============================================================================

#[test]
fn assertion_returns_first_matching_input() {
    let expr = parse_expression(&json!(["string", ["get", "a"], ["get", "b"], "fallback"]), None)
        .unwrap();
    let properties = HashMap::from([
        ("a".to_string(), Value::from(1)),
        ("b".to_string(), Value::from("second")),
    ]);
    assert_eq!(
        expr.evaluate(&EvaluationContext::new(&properties)).unwrap(),
        Value::from("second")
    );
}

#[test]
fn assertion_reports_last_mismatch() {
    let expr = parse_expression(&json!(["number", ["get", "a"]]), None).unwrap();
    let properties = HashMap::from([("a".to_string(), Value::from("x"))]);
    let err = expr
        .evaluate(&EvaluationContext::new(&properties))
        .unwrap_err();
    assert_eq!(
        err,
        EvalError::TypeMismatch {
            expected: Type::Number,
            found: Type::String,
        }
    );
    assert_eq!(
        err.to_string(),
        "Expected value to be of type number, but found string instead."
    );
}

#[test]
fn assertion_requires_an_input() {
    let err = parse_expression(&json!(["boolean"]), None).unwrap_err();
    assert_eq!(err.message, "Expected at least one argument.");
}

// =============================================================================
// Values
// =============================================================================

#[test]
fn values_serialize_integral_numbers_as_integers() {
    assert_eq!(Value::from(2.0).serialize(), json!(2));
    assert_eq!(Value::from(2.5).serialize(), json!(2.5));
    assert_eq!(Value::from(f64::NAN).serialize(), json!(null));
}

#[test]
fn values_display_strings_bare() {
    assert_eq!(Value::from("plain").to_string(), "plain");
    assert_eq!(Value::from(true).to_string(), "true");
    assert_eq!(Value::Null.to_string(), "null");
}
