//! Locale-aware string collation for style expressions.
//!
//! The crate has two layers:
//! - [`Collator`]: an immutable comparison policy (case sensitivity,
//!   diacritic sensitivity, locale) backed by a native collation engine.
//! - [`Expression`]: a small expression tree whose `collator` node builds a
//!   [`Collator`] at evaluation time for comparison operators to use.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use collate::{EvaluationContext, Value, parse_expression};
//! use serde_json::json;
//!
//! let expr = parse_expression(
//!     &json!(["==", "Straße", ["get", "name"], ["collator", {"case-sensitive": false}]]),
//!     None,
//! )
//! .unwrap();
//!
//! let properties = HashMap::from([("name".to_string(), Value::from("Straße"))]);
//! let ctx = EvaluationContext::new(&properties);
//! assert_eq!(expr.evaluate(&ctx).unwrap(), Value::Boolean(true));
//! ```

pub mod collator;
pub mod expression;
pub mod interpreter;
pub mod parser;
pub mod types;

pub use collator::{
    CollationBackend, Collator, CollatorOptions, DefaultBackend, NoopBackend, Strength,
    default_locale, negotiate_locale,
};
#[cfg(feature = "icu")]
pub use collator::IcuBackend;
pub use expression::{CollatorExpression, Expression};
pub use interpreter::{EvalError, EvaluationContext};
pub use parser::{ParseError, ParsingContext, parse_expression};
pub use types::{Type, Value};
