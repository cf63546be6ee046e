use crate::object::Object;

/// Dynamic value of unknown shape, as handed to the renderer.
///
/// Strategy by type:
/// - Scalars (Undefined, Null, Bool, Number, BigInt, String, Symbol): printed
///   as text with string-coercion rules, see [`Value::to_text`]
/// - Array, Object: recursive, rendered as nested tables
/// - Function: representable so it can be rejected by the renderer
///
/// Values own their children, so a tree can never refer back to itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    /// Double-precision number, including `NaN` and the infinities.
    Number(f64),
    /// Arbitrary-size integer kept apart from `Number`.
    BigInt(i128),
    String(String),
    /// Unique symbol with an optional description.
    Symbol(Option<String>),

    Array(Vec<Value>),
    Object(Object),

    /// Callable with an optional name. Not renderable.
    Function(Option<String>),
}

impl Value {
    pub fn array<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::Array(items.into_iter().map(Into::into).collect())
    }

    pub fn object<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Object(entries.into_iter().collect())
    }

    /// Runtime type tag, as reported by a `typeof` check.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null | Value::Array(_) | Value::Object(_) => "object",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::BigInt(_) => "bigint",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Function(_) => "function",
        }
    }

    /// String-coercion text for scalar values.
    ///
    /// Returns `None` for arrays, objects and functions.
    pub fn to_text(&self) -> Option<String> {
        let text = match self {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => number_to_text(*n),
            Value::BigInt(n) => n.to_string(),
            Value::String(s) => s.clone(),
            Value::Symbol(desc) => format!("Symbol({})", desc.as_deref().unwrap_or("")),
            Value::Array(_) | Value::Object(_) | Value::Function(_) => return None,
        };
        Some(text)
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }
}

/// Number-to-string conversion of a double.
///
/// Shortest round-trip digits; exponent notation (`1e+21`, `1e-7`) outside
/// `[1e-6, 1e21)`; both zeros print `0`.
pub fn number_to_text(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let abs = n.abs();
    if abs >= 1e21 || abs < 1e-6 {
        let s = format!("{n:e}");
        return match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => s,
        };
    }
    format!("{n}")
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Object> for Value {
    fn from(obj: Object) -> Self {
        Value::Object(obj)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_text_matches_coercion() {
        assert_eq!(number_to_text(1.0), "1");
        assert_eq!(number_to_text(-42.0), "-42");
        assert_eq!(number_to_text(1.5), "1.5");
        assert_eq!(number_to_text(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(number_to_text(-0.0), "0");
        assert_eq!(number_to_text(1e20), "100000000000000000000");
        assert_eq!(number_to_text(1e21), "1e+21");
        assert_eq!(number_to_text(1.5e300), "1.5e+300");
        assert_eq!(number_to_text(0.000001), "0.000001");
        assert_eq!(number_to_text(1e-7), "1e-7");
        assert_eq!(number_to_text(f64::NAN), "NaN");
        assert_eq!(number_to_text(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn scalar_text() {
        assert_eq!(Value::Undefined.to_text().as_deref(), Some("undefined"));
        assert_eq!(Value::Null.to_text().as_deref(), Some("null"));
        assert_eq!(Value::Bool(false).to_text().as_deref(), Some("false"));
        assert_eq!(
            Value::BigInt(123_456_789_012_345_678_901_234).to_text().as_deref(),
            Some("123456789012345678901234")
        );
        assert_eq!(Value::Symbol(Some("id".into())).to_text().as_deref(), Some("Symbol(id)"));
        assert_eq!(Value::Symbol(None).to_text().as_deref(), Some("Symbol()"));
        assert_eq!(Value::array([1, 2]).to_text(), None);
        assert_eq!(Value::Function(None).to_text(), None);
    }

    #[test]
    fn type_names() {
        assert_eq!(Value::Null.type_name(), "object");
        assert_eq!(Value::array(Vec::<Value>::new()).type_name(), "object");
        assert_eq!(Value::Function(Some("f".into())).type_name(), "function");
        assert_eq!(Value::BigInt(1).type_name(), "bigint");
    }
}
