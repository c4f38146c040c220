//! Expression evaluation support.
//!
//! Expressions evaluate against an [`EvaluationContext`] that exposes the
//! properties of the feature being styled. Failures are [`EvalError`]s and
//! propagate unchanged through parent nodes.

mod context;
mod error;

pub use context::EvaluationContext;
pub use error::EvalError;
