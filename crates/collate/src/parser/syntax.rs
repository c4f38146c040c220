//! Accessors over raw JSON syntax.

use serde_json::Value as Json;

/// Number of elements when `value` is an array.
pub fn array_length(value: &Json) -> Option<usize> {
    value.as_array().map(Vec::len)
}

/// Element `index` of an array.
pub fn array_member(value: &Json, index: usize) -> Option<&Json> {
    value.as_array().and_then(|items| items.get(index))
}

pub fn is_object(value: &Json) -> bool {
    value.is_object()
}

/// Named member of an object.
pub fn object_member<'a>(value: &'a Json, name: &str) -> Option<&'a Json> {
    value.as_object().and_then(|members| members.get(name))
}

/// Lower-case JSON type name used in parse messages.
pub fn kind_name(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}
