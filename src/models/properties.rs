//! Open property bag attached to every component.
//!
//! Property values arrive from several sources (inspector forms, imported
//! documents, defaults) and are loosely typed: a column count may be `3` or
//! `"3"`, a list may be `"Home,About"` or `["Home", "About"]`. The accessors
//! here read leniently and return `None` for anything unusable, so renderers
//! can always fall back to their defaults instead of failing.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// String-keyed property map of a component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties(Map<String, Value>);

/// One entry of a record list (FAQ item, team member, pricing plan, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record(BTreeMap<String, String>);

impl Record {
    /// Returns a non-blank field value.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    /// Returns a field value or the given fallback.
    pub fn field_or<'a>(&'a self, name: &str, fallback: &'a str) -> &'a str {
        self.field(name).unwrap_or(fallback)
    }

    fn is_blank(&self) -> bool {
        self.0.values().all(|v| v.trim().is_empty())
    }
}

impl Properties {
    /// Creates an empty property bag.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Returns the raw value for a key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Sets a property, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Removes a property.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Number of properties set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no property is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Returns the underlying JSON map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Merges a partial update into this bag.
    ///
    /// Keys in `patch` overwrite existing ones; a `null` value removes the key
    /// so the renderer default applies again.
    pub fn merge(&mut self, patch: Map<String, Value>) {
        for (key, value) in patch {
            if value.is_null() {
                self.0.remove(&key);
            } else {
                self.0.insert(key, value);
            }
        }
    }

    /// Reads a text property. Blank strings count as unset; numbers are
    /// rendered as text.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Reads an integer property from a number or a numeric string.
    ///
    /// Fractional values are truncated. Anything non-numeric yields `None`.
    pub fn int(&self, key: &str) -> Option<i64> {
        match self.0.get(key)? {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(float_to_int)),
            Value::String(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(float_to_int))
            }
            _ => None,
        }
    }

    /// Reads an integer property and rejects values outside `range`.
    pub fn int_in(&self, key: &str, range: RangeInclusive<i64>) -> Option<i64> {
        self.int(key).filter(|v| range.contains(v))
    }

    /// Reads a boolean property. Accepts JSON booleans, numbers and the
    /// usual textual spellings.
    pub fn flag(&self, key: &str) -> Option<bool> {
        match self.0.get(key)? {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => n.as_f64().map(|v| v != 0.0),
            Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Some(true),
                "false" | "no" | "off" | "0" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    /// Reads a list property from a comma-delimited string or an array.
    ///
    /// Blank entries are dropped; an empty result counts as unset.
    pub fn list(&self, key: &str) -> Option<Vec<String>> {
        let items: Vec<String> = match self.0.get(key)? {
            Value::String(s) => s.split(',').map(|item| item.trim().to_string()).collect(),
            Value::Array(values) => values.iter().filter_map(scalar_text).collect(),
            _ => return None,
        };
        let items: Vec<String> = items.into_iter().filter(|i| !i.is_empty()).collect();
        (!items.is_empty()).then_some(items)
    }

    /// Reads a list of sub-records.
    ///
    /// Accepted shapes:
    /// - an array of objects (`[{"question": "..", "answer": ".."}]`)
    /// - an array of strings with `|`-separated fields, in `fields` order
    /// - a single string with one record per line (or per `;`)
    ///
    /// Records whose fields are all blank are dropped; an empty result counts
    /// as unset.
    pub fn records(&self, key: &str, fields: &[&str]) -> Option<Vec<Record>> {
        let records: Vec<Record> = match self.0.get(key)? {
            Value::Array(values) => values
                .iter()
                .filter_map(|value| match value {
                    Value::Object(obj) => Some(record_from_object(obj, fields)),
                    Value::String(s) => Some(record_from_line(s, fields)),
                    _ => None,
                })
                .collect(),
            Value::String(s) => s
                .split(['\n', ';'])
                .map(|line| record_from_line(line, fields))
                .collect(),
            _ => return None,
        };
        let records: Vec<Record> = records.into_iter().filter(|r| !r.is_blank()).collect();
        (!records.is_empty()).then_some(records)
    }
}

impl From<Map<String, Value>> for Properties {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Properties> for Value {
    fn from(props: Properties) -> Self {
        Value::Object(props.0)
    }
}

#[allow(clippy::cast_precision_loss)]
fn float_to_int(v: f64) -> Option<i64> {
    (v.is_finite() && v.abs() < i64::MAX as f64).then(|| v.trunc() as i64)
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn record_from_object(obj: &Map<String, Value>, fields: &[&str]) -> Record {
    let mut record = BTreeMap::new();
    for field in fields {
        let text = match obj.get(*field) {
            Some(Value::Array(values)) => Some(
                values
                    .iter()
                    .filter_map(scalar_text)
                    .collect::<Vec<_>>()
                    .join(","),
            ),
            Some(value) => scalar_text(value),
            None => None,
        };
        if let Some(text) = text {
            record.insert((*field).to_string(), text);
        }
    }
    Record(record)
}

fn record_from_line(line: &str, fields: &[&str]) -> Record {
    let record = fields
        .iter()
        .zip(line.split('|'))
        .map(|(field, value)| ((*field).to_string(), value.trim().to_string()))
        .collect();
    Record(record)
}
