use crate::model::PropertyValue;
use serde_json::{Value, json};

/// Renders the observed value of a checked property for a diagnostic's
/// `data` payload. Tokens keep the opaque rendering the host uses for
/// unresolvable intrinsics.
pub fn observed_value(value: Option<&PropertyValue>) -> Value {
    match value {
        None => Value::Null,
        Some(PropertyValue::Bool(b)) => json!(b),
        Some(PropertyValue::Str(s)) => json!(s),
        Some(PropertyValue::Token(t)) => json!(format!("${{Token[{t}]}}")),
    }
}
