// entry.rs — Policy paths, values and entries.
//
// A policy path names one Windows-style Group Policy setting, e.g.
// `Software\Policies\Microsoft\Windows\RemovableStorageDevices\Deny_All`.
// Paths are compared byte-for-byte: no case folding, no separator rewriting.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Hierarchical, backslash-delimited key of a single policy setting.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolicyPath(String);

impl PolicyPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PolicyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PolicyPath {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PolicyPath {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Scalar data stored for a policy setting.
///
/// Uses an untagged representation so snapshot lines carry plain JSON
/// scalars (`1`, `true`, `"text"`). The string variant holds a `Cow` so
/// default values can be declared in `const` mapping tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PolicyValue {
    Bool(bool),
    Int(i64),
    Str(Cow<'static, str>),
}

impl PolicyValue {
    pub fn str(value: impl Into<String>) -> Self {
        PolicyValue::Str(Cow::Owned(value.into()))
    }
}

impl fmt::Display for PolicyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyValue::Bool(v) => write!(f, "{}", v),
            PolicyValue::Int(v) => write!(f, "{}", v),
            PolicyValue::Str(v) => f.write_str(v),
        }
    }
}

impl From<i64> for PolicyValue {
    fn from(value: i64) -> Self {
        PolicyValue::Int(value)
    }
}

impl From<i32> for PolicyValue {
    fn from(value: i32) -> Self {
        PolicyValue::Int(i64::from(value))
    }
}

impl From<bool> for PolicyValue {
    fn from(value: bool) -> Self {
        PolicyValue::Bool(value)
    }
}

impl From<&str> for PolicyValue {
    fn from(value: &str) -> Self {
        PolicyValue::str(value)
    }
}

/// A stored value for one policy path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyEntry {
    pub path: PolicyPath,
    pub data: PolicyValue,
}

impl PolicyEntry {
    pub fn new(path: impl Into<PolicyPath>, data: impl Into<PolicyValue>) -> Self {
        Self {
            path: path.into(),
            data: data.into(),
        }
    }
}
