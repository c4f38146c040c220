//! Error types for expression evaluation.

use thiserror::Error;

use crate::types::Type;

/// An error that occurred while evaluating an expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// A runtime assertion found a value of the wrong type.
    #[error("Expected value to be of type {expected}, but found {found} instead.")]
    TypeMismatch { expected: Type, found: Type },

    /// Comparison operands whose runtime types cannot be compared.
    #[error(
        "Expected arguments for \"{operator}\" to be (string, string) or (number, number), but found ({lhs}, {rhs}) instead."
    )]
    IncomparableArguments {
        operator: String,
        lhs: Type,
        rhs: Type,
    },

    /// A child produced a value its parent's static type forbids.
    #[error("{context} produced {found} where {expected} was required")]
    UnexpectedType {
        context: &'static str,
        expected: Type,
        found: Type,
    },
}
