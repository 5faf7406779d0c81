//! Parameter encoding to the canonical wire form.

use serde_json::Value;
use std::collections::BTreeMap;

/// Caller-facing parameter mapping. Key-ordered.
pub type Params = serde_json::Map<String, Value>;

/// Encoded parameter mapping as signed and transmitted.
pub type WireParams = BTreeMap<String, String>;

/// Encode one parameter value into its wire text.
///
/// Strings pass through verbatim; arrays and objects serialize to compact
/// JSON text with keys in ascending order; numbers, booleans and null use
/// their JSON text form. Encoding happens exactly once, before signing, so
/// the signed representation matches the transmitted one byte for byte.
pub fn encode_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Encode every entry of a parameter mapping.
pub fn encode_params(params: &Params) -> WireParams {
    params
        .iter()
        .map(|(key, value)| (key.clone(), encode_value(value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_passes_through_unquoted() {
        assert_eq!(encode_value(&json!("friends.get")), "friends.get");
        assert_eq!(encode_value(&json!("жук")), "жук");
    }

    #[test]
    fn test_scalars_use_json_text() {
        assert_eq!(encode_value(&json!(42)), "42");
        assert_eq!(encode_value(&json!(true)), "true");
        assert_eq!(encode_value(&json!(null)), "null");
    }

    #[test]
    fn test_structured_values_compact_and_key_ordered() {
        assert_eq!(encode_value(&json!([1, 2, 3])), "[1,2,3]");
        // Insertion order does not leak into the wire text.
        assert_eq!(encode_value(&json!({"b": 2, "a": 1})), r#"{"a":1,"b":2}"#);
    }

    #[test]
    fn test_encoding_is_stable() {
        let value = json!({"ids": [3, 1], "name": "жук"});
        let first = encode_value(&value);
        let second = encode_value(&value);
        assert_eq!(first, second);

        // An already-encoded string survives another pass unchanged.
        let encoded = Value::String(first.clone());
        assert_eq!(encode_value(&encoded), first);
    }

    #[test]
    fn test_encode_params_applies_to_every_entry() {
        let mut params = Params::new();
        params.insert("uid".into(), json!(42));
        params.insert("ids".into(), json!([1, 2]));
        params.insert("name".into(), json!("ada"));

        let wire = encode_params(&params);
        assert_eq!(wire.get("uid").unwrap(), "42");
        assert_eq!(wire.get("ids").unwrap(), "[1,2]");
        assert_eq!(wire.get("name").unwrap(), "ada");
    }
}
