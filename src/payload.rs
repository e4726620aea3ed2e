//! Named arguments: ordered name -> value mapping where a name may be present without a value.

use serde_json::{Map, Value};

/// Ordered named arguments. `None` marks an argument that was named but never supplied.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NamedArgs {
    entries: Vec<(String, Option<Value>)>,
}

impl NamedArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zip argument names with positional values. Extra values are ignored, missing ones are `None`.
    pub fn from_positional<S: AsRef<str>>(names: &[S], values: &[Value]) -> Self {
        let mut args = NamedArgs::new();
        for (i, name) in names.iter().enumerate() {
            args.insert(name.as_ref(), values.get(i).cloned());
        }
        args
    }

    /// Insert or replace. Replacing keeps the original position.
    pub fn insert(&mut self, name: impl Into<String>, value: Option<Value>) {
        let name = name.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder form of `insert` with a present value.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, Some(value.into()));
        self
    }

    /// `Some(None)` when the name is present but undefined.
    pub fn get(&self, name: &str) -> Option<Option<&Value>> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Value>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Query-string pairs. Undefined and null entries are skipped, arrays repeat the key,
    /// objects are sent as JSON text.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (name, value) in self.iter() {
            match value {
                None | Some(Value::Null) => {}
                Some(Value::Array(items)) => {
                    for item in items.iter().filter(|v| !v.is_null()) {
                        pairs.push((name.to_string(), query_value(item)));
                    }
                }
                Some(v) => pairs.push((name.to_string(), query_value(v))),
            }
        }
        pairs
    }

    /// JSON object body. Undefined entries are omitted, nulls are kept.
    pub fn to_json_body(&self) -> Value {
        let mut obj = Map::new();
        for (name, value) in self.iter() {
            if let Some(v) = value {
                obj.insert(name.to_string(), v.clone());
            }
        }
        Value::Object(obj)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for NamedArgs {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut args = NamedArgs::new();
        for (k, v) in iter {
            args.insert(k, Some(v));
        }
        args
    }
}

fn query_value(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Object(_) => v.to_string(),
        other => render_value(other),
    }
}

/// Text form of a value when spliced into a URL path.
pub fn render_value(v: &Value) -> String {
    match v {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(render_value).collect::<Vec<_>>().join(","),
        Value::Object(_) => v.to_string(),
    }
}
