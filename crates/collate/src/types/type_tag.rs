use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Static type tag of an expression or a runtime value.
///
/// `Value` is the top type: an expression typed `value` may produce any
/// runtime value and is checked when it is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Type {
    Null,
    Number,
    String,
    Boolean,
    Object,
    Array,
    Value,
    Collator,
}

impl Type {
    pub fn as_str(self) -> &'static str {
        match self {
            Type::Null => "null",
            Type::Number => "number",
            Type::String => "string",
            Type::Boolean => "boolean",
            Type::Object => "object",
            Type::Array => "array",
            Type::Value => "value",
            Type::Collator => "collator",
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
