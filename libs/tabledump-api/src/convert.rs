//! Conversions from parsed documents into [`Value`] trees.
//!
//! Object key order follows the source document.

use crate::object::Object;
use crate::value::Value;

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            // Every JSON number is a double once parsed.
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            serde_json::Value::Object(map) => Value::Object(map.into_iter().collect::<Object>()),
        }
    }
}

impl From<toml::Value> for Value {
    fn from(v: toml::Value) -> Self {
        match v {
            toml::Value::String(s) => Value::String(s),
            toml::Value::Integer(i) => Value::Number(i as f64),
            toml::Value::Float(f) => Value::Number(f),
            toml::Value::Boolean(b) => Value::Bool(b),
            toml::Value::Datetime(dt) => Value::String(dt.to_string()),
            toml::Value::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            toml::Value::Table(table) => Value::Object(table.into_iter().collect::<Object>()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_keeps_document_order() {
        let json: serde_json::Value = serde_json::from_str(r#"{"z": 1, "a": [true, null], "m": {"k": "v"}}"#).unwrap();
        let value = Value::from(json);
        let obj = value.as_object().unwrap();
        assert_eq!(obj.keys(), vec!["z", "a", "m"]);
        assert_eq!(obj.get("z"), Some(&Value::Number(1.0)));
        assert_eq!(obj.get("a"), Some(&Value::array([Value::Bool(true), Value::Null])));
        assert_eq!(obj.get("m"), Some(&Value::object([("k", "v")])));
    }

    #[test]
    fn json_duplicate_keys_last_wins() {
        let json: serde_json::Value = serde_json::from_str(r#"{"a": 1, "b": 2, "a": 3}"#).unwrap();
        let value = Value::from(json);
        let obj = value.as_object().unwrap();
        assert_eq!(obj.keys(), vec!["a", "b"]);
        assert_eq!(obj.get("a"), Some(&Value::Number(3.0)));
    }

    #[test]
    fn toml_tables_and_datetimes() {
        let doc: toml::Value = toml::from_str(
            "name = \"x\"\ncount = 3\nwhen = 1979-05-27T07:32:00Z\n[inner]\nratio = 0.5\n",
        )
        .unwrap();
        let value = Value::from(doc);
        let obj = value.as_object().unwrap();
        assert_eq!(obj.keys(), vec!["name", "count", "when", "inner"]);
        assert_eq!(obj.get("count"), Some(&Value::Number(3.0)));
        assert_eq!(obj.get("when"), Some(&Value::from("1979-05-27T07:32:00Z")));
        assert_eq!(obj.get("inner"), Some(&Value::object([("ratio", 0.5)])));
    }
}
