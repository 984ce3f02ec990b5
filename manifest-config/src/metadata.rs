//! Platform metadata source.
//!
//! A read-only bundle of typed values keyed by namespaced strings. Typed
//! accessors treat a value of the wrong type as absent, so every lookup
//! either yields a usable value or falls back to the caller's default.

use commons::prelude_errors::*;
use std::collections::HashMap;
use std::convert::TryFrom;
use std::io::Read;
use std::iter::FromIterator;
use std::{fs, io, path};

/// A single metadata value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MetadataValue {
    /// String value.
    String(String),
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i32),
}

impl MetadataValue {
    fn type_name(&self) -> &'static str {
        match self {
            MetadataValue::String(_) => "string",
            MetadataValue::Bool(_) => "boolean",
            MetadataValue::Int(_) => "integer",
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        MetadataValue::String(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        MetadataValue::String(value)
    }
}

impl From<bool> for MetadataValue {
    fn from(value: bool) -> Self {
        MetadataValue::Bool(value)
    }
}

impl From<i32> for MetadataValue {
    fn from(value: i32) -> Self {
        MetadataValue::Int(value)
    }
}

/// Key/value metadata, as supplied by the host platform.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetadataSource {
    values: HashMap<String, MetadataValue>,
}

impl MetadataSource {
    /// Create an empty metadata source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any previous one for the same key.
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<MetadataValue>,
    {
        self.values.insert(key.into(), value.into());
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no key is present.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether `key` is present, whatever the type of its value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Raw value for `key`.
    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.values.get(key)
    }

    /// String value for `key`; an empty string is a valid value.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.typed(key, "string", |value| match value {
            MetadataValue::String(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// String value for `key`, or `default` if absent.
    pub fn get_string_or(&self, key: &str, default: &str) -> String {
        self.get_string(key).unwrap_or(default).to_string()
    }

    /// Boolean value for `key`.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.typed(key, "boolean", |value| match value {
            MetadataValue::Bool(b) => Some(*b),
            _ => None,
        })
    }

    /// Boolean value for `key`, or `default` if absent.
    pub fn get_bool_or(&self, key: &str, default: bool) -> bool {
        self.get_bool(key).unwrap_or(default)
    }

    /// Integer value for `key`.
    pub fn get_int(&self, key: &str) -> Option<i32> {
        self.typed(key, "integer", |value| match value {
            MetadataValue::Int(i) => Some(*i),
            _ => None,
        })
    }

    /// Integer value for `key`, or `default` if absent.
    pub fn get_int_or(&self, key: &str, default: i32) -> i32 {
        self.get_int(key).unwrap_or(default)
    }

    fn typed<'a, T, F>(&'a self, key: &str, expected: &str, extract: F) -> Option<T>
    where
        F: FnOnce(&'a MetadataValue) -> Option<T>,
    {
        let value = self.values.get(key)?;
        let typed = extract(value);
        if typed.is_none() {
            warn!(
                "metadata key '{}' expected {} but found {}, using default",
                key,
                expected,
                value.type_name()
            );
        }
        typed
    }

    /// Parse metadata from a TOML document.
    ///
    /// Nested tables are flattened into dotted keys, so
    /// `[com.example] KEY = 1` and `"com.example.KEY" = 1` are equivalent.
    pub fn from_toml_str(content: &str) -> Fallible<Self> {
        let table: toml::Table = toml::from_str(content).context("failed to parse TOML metadata")?;

        let mut source = Self::new();
        source.flatten_table(None, table);
        Ok(source)
    }

    /// Parse metadata from a TOML file.
    pub fn read_filepath<P>(path: P) -> Fallible<Self>
    where
        P: AsRef<path::Path>,
    {
        let file = fs::File::open(&path)
            .context(format!("failed to open metadata path {:?}", path.as_ref()))?;
        let mut bufrd = io::BufReader::new(file);

        let mut content = vec![];
        bufrd.read_to_end(&mut content)?;
        let content = std::str::from_utf8(&content).context(format!(
            "metadata file {} is not valid UTF-8",
            path.as_ref().display()
        ))?;

        let source = Self::from_toml_str(content).context(format!(
            "failed to read metadata file {}",
            path.as_ref().display()
        ))?;
        debug!(
            "read {} metadata entries from {}",
            source.len(),
            path.as_ref().display()
        );

        Ok(source)
    }

    fn flatten_table(&mut self, prefix: Option<&str>, table: toml::Table) {
        for (name, value) in table {
            let key = match prefix {
                Some(prefix) => format!("{}.{}", prefix, name),
                None => name,
            };

            match value {
                toml::Value::Table(nested) => self.flatten_table(Some(&key), nested),
                toml::Value::String(s) => self.insert(key, s),
                toml::Value::Boolean(b) => self.insert(key, b),
                toml::Value::Integer(i) => match i32::try_from(i) {
                    Ok(i) => self.insert(key, i),
                    Err(_) => warn!("skipping metadata key '{}': {} is out of range", key, i),
                },
                other => warn!(
                    "skipping metadata key '{}': unsupported {} value",
                    key,
                    other.type_str()
                ),
            }
        }
    }
}

impl<K, V> FromIterator<(K, V)> for MetadataSource
where
    K: Into<String>,
    V: Into<MetadataValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut source = Self::new();
        for (key, value) in iter {
            source.insert(key, value);
        }
        source
    }
}
