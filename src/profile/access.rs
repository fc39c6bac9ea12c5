//! Safe nested lookups into a profile payload
//!
//! Every stat getter goes through [`Accessor`]: walk a fixed key path from
//! the member entry, convert the leaf, and fall back to a default with a
//! logged diagnostic when anything along the way is missing or malformed.

use serde_json::{Map, Value};
use thiserror::Error;

/// Why a lookup fell back to its default. Never leaves this crate's getters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Lookup {
    #[error("key '{key}' is missing")]
    Missing { key: String },
    #[error("value at '{key}' has an unexpected type")]
    Malformed { key: String },
}

/// Conversion from a JSON leaf into a stat type
pub trait StatValue: Sized {
    fn from_value(value: &Value) -> Option<Self>;
}

impl StatValue for u64 {
    /// Accepts unsigned integers, non-negative floats (truncated) and numeric strings.
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_u64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && *f >= 0.0)
                    .map(|f| f as u64)
            }),
            Value::String(s) => {
                let s = s.trim();
                s.parse::<u64>().ok().or_else(|| {
                    s.parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite() && *f >= 0.0)
                        .map(|f| f as u64)
                })
            }
            _ => None,
        }
    }
}

impl StatValue for i64 {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64)),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl StatValue for f64 {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl StatValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl StatValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

/// Read-only view rooted at `profile.members.<member_id>`
#[derive(Debug, Clone, Copy)]
pub struct Accessor<'a> {
    raw: &'a Value,
    member_id: &'a str,
}

impl<'a> Accessor<'a> {
    pub fn new(raw: &'a Value, member_id: &'a str) -> Self {
        Self { raw, member_id }
    }

    /// The member's own object inside the payload
    pub fn member(&self) -> Result<&'a Map<String, Value>, Lookup> {
        let members = walk(self.raw, &["profile", "members"])?;
        let members = members.as_object().ok_or_else(|| Lookup::Malformed { key: "members".into() })?;

        // Member keys are undashed uuids; tolerate a dashed id.
        let member = members.get(self.member_id).or_else(|| {
            members
                .iter()
                .find(|(key, _)| same_uuid(key, self.member_id))
                .map(|(_, value)| value)
        });

        member
            .ok_or_else(|| Lookup::Missing { key: self.member_id.to_string() })?
            .as_object()
            .ok_or_else(|| Lookup::Malformed { key: self.member_id.to_string() })
    }

    /// Value at `path` below the member entry
    pub fn path(&self, path: &[&str]) -> Result<&'a Value, Lookup> {
        let mut current = self.member()?;
        let Some((last, parents)) = path.split_last() else {
            return Err(Lookup::Missing { key: String::new() });
        };
        for key in parents {
            current = current
                .get(*key)
                .ok_or_else(|| Lookup::Missing { key: key.to_string() })?
                .as_object()
                .ok_or_else(|| Lookup::Malformed { key: key.to_string() })?;
        }
        current.get(*last).ok_or_else(|| Lookup::Missing { key: last.to_string() })
    }

    /// Typed value at `path`
    pub fn stat<T: StatValue>(&self, path: &[&str]) -> Result<T, Lookup> {
        let value = self.path(path)?;
        T::from_value(value).ok_or_else(|| Lookup::Malformed {
            key: path.last().copied().unwrap_or_default().to_string(),
        })
    }

    /// Typed value at `path`, or `default` with a warning naming `label`
    pub fn stat_or<T: StatValue>(&self, path: &[&str], label: &str, default: T) -> T {
        match self.stat(path) {
            Ok(value) => value,
            Err(miss) => {
                log::warn!("{} not found ({}): {}", label, path.join("."), miss);
                default
            }
        }
    }

    /// Object at `path`
    pub fn object(&self, path: &[&str]) -> Result<&'a Map<String, Value>, Lookup> {
        let value = self.path(path)?;
        value.as_object().ok_or_else(|| Lookup::Malformed {
            key: path.last().copied().unwrap_or_default().to_string(),
        })
    }

    /// Object at `path`, or `None` with a warning naming `label`
    pub fn object_or_warn(&self, path: &[&str], label: &str) -> Option<&'a Map<String, Value>> {
        match self.object(path) {
            Ok(map) => Some(map),
            Err(miss) => {
                log::warn!("{} not found ({}): {}", label, path.join("."), miss);
                None
            }
        }
    }
}

fn walk<'v>(root: &'v Value, path: &[&str]) -> Result<&'v Value, Lookup> {
    path.iter().try_fold(root, |current, key| {
        let object = current.as_object().ok_or_else(|| Lookup::Malformed { key: key.to_string() })?;
        object.get(*key).ok_or_else(|| Lookup::Missing { key: key.to_string() })
    })
}

fn same_uuid(a: &str, b: &str) -> bool {
    let strip = |s: &str| s.chars().filter(|c| *c != '-').flat_map(char::to_lowercase).collect::<String>();
    strip(a) == strip(b)
}
