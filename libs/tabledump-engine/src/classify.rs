use std::borrow::Cow;
use std::collections::HashSet;

use tabledump_api::{Object, Value};

use crate::error::RenderError;

/// Layout chosen for a single value.
#[derive(Debug, Clone, PartialEq)]
pub enum Classified<'a> {
    /// Rendered as plain text.
    Scalar(String),
    /// One `key | value` row per field.
    Keyed(&'a Object),
    /// One row per element; `columns` empty means single-cell rows.
    RowSet {
        rows: &'a [Value],
        columns: Vec<Cow<'a, str>>,
    },
}

/// Classify a value.
///
/// Precedence: scalars (null included) first, then arrays, then objects.
/// Functions are rejected with [`RenderError::UnsupportedType`].
pub fn classify(value: &Value) -> Result<Classified<'_>, RenderError> {
    let classified = match value {
        Value::Undefined
        | Value::Null
        | Value::Bool(_)
        | Value::Number(_)
        | Value::BigInt(_)
        | Value::String(_)
        | Value::Symbol(_) => Classified::Scalar(value.to_text().unwrap_or_default()),
        Value::Array(rows) => Classified::RowSet {
            rows,
            columns: column_keys(rows),
        },
        Value::Object(obj) => Classified::Keyed(obj),
        Value::Function(_) => {
            return Err(RenderError::UnsupportedType {
                type_name: value.type_name(),
                path: "$".to_string(),
            });
        }
    };
    tracing::trace!(type_name = value.type_name(), layout = classified.layout_name(), "classified");
    Ok(classified)
}

/// Union of the own keys of all rows, in first-seen order.
///
/// Objects contribute their field names, arrays their indices (`"0"`, `"1"`,
/// ...). Scalar rows contribute nothing.
pub fn column_keys(rows: &[Value]) -> Vec<Cow<'_, str>> {
    let mut seen: HashSet<Cow<'_, str>> = HashSet::new();
    let mut keys = Vec::new();
    for row in rows {
        let own: Vec<Cow<'_, str>> = match row {
            Value::Object(obj) => obj.keys().into_iter().map(Cow::Borrowed).collect(),
            Value::Array(items) => (0..items.len()).map(|i| Cow::Owned(i.to_string())).collect(),
            _ => continue,
        };
        for key in own {
            if seen.insert(key.clone()) {
                keys.push(key);
            }
        }
    }
    keys
}

/// Element of an array row under column `key`, if `key` is one of its indices.
pub(crate) fn array_cell<'a>(items: &'a [Value], key: &str) -> Option<(usize, &'a Value)> {
    let idx: usize = key.parse().ok()?;
    if idx.to_string() != key {
        return None;
    }
    items.get(idx).map(|v| (idx, v))
}

impl Classified<'_> {
    pub fn layout_name(&self) -> &'static str {
        match self {
            Classified::Scalar(_) => "scalar",
            Classified::Keyed(_) => "keyed",
            Classified::RowSet { columns, .. } if columns.is_empty() => "rows",
            Classified::RowSet { .. } => "columns",
        }
    }
}
