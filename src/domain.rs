//! Core configuration types

use serde_json::{Map, Value};
use std::fmt;
use std::path::{Path, PathBuf};

/// Names with this prefix are host artifacts, never part of the logical configuration.
pub const RESERVED_PREFIX: &str = "__";

/// A single configuration value.
pub type ConfigValue = Value;

pub fn is_reserved(name: &str) -> bool {
    name.starts_with(RESERVED_PREFIX)
}

/// Legacy truthiness: null, `false`, zero, and empty strings/sequences/mappings are falsy.
pub fn is_truthy(value: &ConfigValue) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i != 0
            } else if let Some(u) = n.as_u64() {
                u != 0
            } else {
                n.as_f64().is_some_and(|f| f != 0.0)
            }
        }
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Scalar,
    Sequence,
    Mapping,
}

impl ValueKind {
    pub fn of(value: &ConfigValue) -> Self {
        match value {
            Value::Array(_) => ValueKind::Sequence,
            Value::Object(_) => ValueKind::Mapping,
            _ => ValueKind::Scalar,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ValueKind::Scalar => "scalar",
            ValueKind::Sequence => "sequence",
            ValueKind::Mapping => "mapping",
        };
        f.write_str(label)
    }
}

/// The named values produced by loading one configuration source.
///
/// Entries keep document order. Reserved (`__`-prefixed) entries can be stored
/// alongside the configuration but are hidden from every view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigEnvironment {
    name: String,
    source: Option<PathBuf>,
    entries: Map<String, ConfigValue>,
}

impl ConfigEnvironment {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), source: None, entries: Map::new() }
    }

    pub fn from_entries<I, K>(name: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, ConfigValue)>,
        K: Into<String>,
    {
        let mut env = Self::new(name);
        for (key, value) in entries {
            env.entries.insert(key.into(), value);
        }
        env
    }

    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Look up a configuration entry. Reserved names always resolve to `None`.
    pub fn get(&self, name: &str) -> Option<&ConfigValue> {
        if is_reserved(name) {
            return None;
        }
        self.entries.get(name)
    }

    /// Look up a host artifact such as `__file__`.
    pub fn get_raw(&self, name: &str) -> Option<&ConfigValue> {
        self.entries.get(name)
    }

    /// Set an entry, returning the previous value. Reserved names are stored as
    /// artifacts and stay invisible to views.
    pub fn insert(&mut self, name: impl Into<String>, value: ConfigValue) -> Option<ConfigValue> {
        self.entries.insert(name.into(), value)
    }

    pub fn remove(&mut self, name: &str) -> Option<ConfigValue> {
        self.entries.shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.entries.iter().filter(|(k, _)| !is_reserved(k)).map(|(k, v)| (k.as_str(), v))
    }

    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|(k, _)| k).collect()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The non-reserved entries as a single JSON object.
    pub fn to_value(&self) -> ConfigValue {
        let map: Map<String, ConfigValue> =
            self.iter().map(|(k, v)| (k.to_string(), v.clone())).collect();
        Value::Object(map)
    }
}
