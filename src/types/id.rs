use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque Graph object identifier (label, persona, creative, PSID, ...).
///
/// The Graph API hands out ids as numbers or strings depending on the endpoint.
/// The variant is kept so payloads carry the id in the form the caller used.
/// Only presence is ever checked: `0` and blank strings count as missing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GraphId {
    Numeric(u64),
    Text(String),
}

impl GraphId {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Numeric(n) => *n == 0,
            Self::Text(s) => s.trim().is_empty(),
        }
    }

    /// JSON form of the id, for request payloads.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Numeric(n) => serde_json::Value::from(*n),
            Self::Text(s) => serde_json::Value::String(s.clone()),
        }
    }

    /// The id as a single URL path segment.
    pub(crate) fn path_segment(&self) -> String {
        match self {
            Self::Numeric(n) => n.to_string(),
            Self::Text(s) => urlencoding::encode(s.trim()).into_owned(),
        }
    }
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for GraphId {
    fn from(value: u64) -> Self {
        Self::Numeric(value)
    }
}

impl From<&str> for GraphId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for GraphId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for GraphId {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<&GraphId> for GraphId {
    fn from(value: &GraphId) -> Self {
        value.clone()
    }
}
