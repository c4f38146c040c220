//! Evaluation context carrying the inputs expressions read.

use std::collections::HashMap;

use crate::types::Value;

/// State visible to expressions during evaluation.
///
/// Holds the properties of the feature being evaluated. `get` expressions
/// read from it; every other node only passes it down to its children.
pub struct EvaluationContext<'a> {
    /// Feature properties available to `get`.
    properties: &'a HashMap<String, Value>,
}

impl<'a> EvaluationContext<'a> {
    /// Create a context over a feature's properties.
    pub fn new(properties: &'a HashMap<String, Value>) -> Self {
        Self { properties }
    }

    /// Get a property value.
    pub fn get_property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }
}
