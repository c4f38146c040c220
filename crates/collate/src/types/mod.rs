mod type_tag;
mod value;

pub use type_tag::Type;
pub use value::Value;
