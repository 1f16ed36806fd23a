//! Query string encoding for JSON query parameters.
//!
//! The Admin API reads structured parameters such as `criteria` from the
//! query string in bracket notation:
//!
//! ```text
//! {"criteria": {"limit": 5, "ids": ["a", "b"]}}
//!   -> criteria[limit]=5&criteria[ids][0]=a&criteria[ids][1]=b
//! ```
//!
//! Booleans are sent as `1`/`0`. `null` values and empty objects or arrays
//! produce no pair at all.

use serde_json::{Map, Value};

/// Flattens a JSON object into ordered `(key, value)` query pairs.
///
/// Percent-encoding is left to the transport.
#[must_use]
pub fn encode_query(query: &Map<String, Value>) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in query {
        flatten_into(key.clone(), value, &mut pairs);
    }
    pairs
}

fn flatten_into(prefix: String, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(flag) => pairs.push((prefix, if *flag { "1" } else { "0" }.to_string())),
        Value::Number(number) => pairs.push((prefix, number.to_string())),
        Value::String(text) => pairs.push((prefix, text.clone())),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten_into(format!("{prefix}[{index}]"), item, pairs);
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                flatten_into(format!("{prefix}[{key}]"), item, pairs);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn encode(value: Value) -> Vec<(String, String)> {
        encode_query(value.as_object().unwrap())
    }

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn test_flat_parameters_keep_order() {
        assert_eq!(
            encode(json!({"limit": 10, "page": 2, "term": "shirt"})),
            vec![pair("limit", "10"), pair("page", "2"), pair("term", "shirt")]
        );
    }

    #[test]
    fn test_nested_criteria_use_bracket_notation() {
        let pairs = encode(json!({
            "criteria": {
                "limit": 5,
                "filter": [{"type": "equals", "field": "active", "value": true}]
            }
        }));

        assert_eq!(
            pairs,
            vec![
                pair("criteria[limit]", "5"),
                pair("criteria[filter][0][type]", "equals"),
                pair("criteria[filter][0][field]", "active"),
                pair("criteria[filter][0][value]", "1"),
            ]
        );
    }

    #[test]
    fn test_null_and_empty_containers_are_omitted() {
        assert!(encode(json!({"criteria": {}})).is_empty());
        assert!(encode(json!({"criteria": []})).is_empty());
        assert!(encode(json!({"term": null})).is_empty());
    }

    #[test]
    fn test_booleans_and_floats() {
        assert_eq!(
            encode(json!({"active": false, "price": 19.99})),
            vec![pair("active", "0"), pair("price", "19.99")]
        );
    }
}
