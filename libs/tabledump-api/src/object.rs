use crate::value::Value;

/// Keyed mapping with insertion-ordered entries.
///
/// Keys are unique: setting an existing key replaces its value in place, so
/// the first position is kept and the last value wins. This is what a document
/// parser with duplicate keys produces.
///
/// Use [`Object::entries`] for the order in which fields are displayed:
/// array-index keys first (ascending), then all other keys in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    entries: Vec<(String, Value)>,
}

impl Object {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| k == &key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Entries in enumeration order: array-index keys ascending, then the
    /// remaining keys in insertion order.
    pub fn entries(&self) -> Vec<(&str, &Value)> {
        let mut indexed: Vec<(u32, &str, &Value)> = Vec::new();
        let mut named: Vec<(&str, &Value)> = Vec::with_capacity(self.entries.len());
        for (k, v) in &self.entries {
            match array_index(k) {
                Some(idx) => indexed.push((idx, k.as_str(), v)),
                None => named.push((k.as_str(), v)),
            }
        }
        if indexed.is_empty() {
            return named;
        }
        indexed.sort_by_key(|(idx, _, _)| *idx);
        indexed
            .into_iter()
            .map(|(_, k, v)| (k, v))
            .chain(named)
            .collect()
    }

    /// Keys in enumeration order.
    pub fn keys(&self) -> Vec<&str> {
        self.entries().into_iter().map(|(k, _)| k).collect()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut obj = Object::new();
        for (k, v) in iter {
            obj.set(k, v);
        }
        obj
    }
}

/// Canonical array index: `"0"` or a decimal without leading zeros, below 2^32 - 1.
fn array_index(key: &str) -> Option<u32> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if key.len() > 1 && key.starts_with('0') {
        return None;
    }
    match key.parse::<u32>() {
        Ok(idx) if idx < u32::MAX => Some(idx),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_in_place() {
        let mut obj = Object::new();
        obj.set("a", 1);
        obj.set("b", 2);
        obj.set("a", 3);
        assert_eq!(obj.len(), 2);
        assert_eq!(obj.keys(), vec!["a", "b"]);
        assert_eq!(obj.get("a"), Some(&Value::Number(3.0)));
    }

    #[test]
    fn index_keys_enumerate_first() {
        let obj: Object = [("b", 1), ("10", 2), ("a", 3), ("2", 4), ("01", 5)]
            .into_iter()
            .collect();
        assert_eq!(obj.keys(), vec!["2", "10", "b", "a", "01"]);
    }

    #[test]
    fn max_u32_is_not_an_index() {
        assert_eq!(array_index("4294967295"), None);
        assert_eq!(array_index("4294967294"), Some(4_294_967_294));
        assert_eq!(array_index("-1"), None);
        assert_eq!(array_index(""), None);
    }
}
