//! Parameter flattening and value types shared by endpoints.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Flatten a serializable parameter struct into `(name, value)` pairs.
///
/// `null` fields and empty lists are dropped, scalars are stringified and
/// lists are joined with commas, which is how the Etsy API reads list
/// parameters in query strings and form bodies. A list item that itself
/// contains a comma cannot be represented and is rejected.
pub(crate) fn to_pairs<P: Serialize + ?Sized>(params: &P) -> Result<Vec<(String, String)>> {
    match serde_json::to_value(params)? {
        Value::Null => Ok(Vec::new()),
        Value::Object(map) => {
            let mut pairs = Vec::with_capacity(map.len());
            for (name, value) in map {
                if let Some(value) = flatten_value(&name, value)? {
                    pairs.push((name, value));
                }
            }
            Ok(pairs)
        }
        other => Err(Error::invalid_input(format!(
            "parameters must serialize to a map, got `{other}`"
        ))),
    }
}

fn flatten_value(name: &str, value: Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::Array(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::Null => {}
                    Value::Array(_) | Value::Object(_) => {
                        return Err(Error::invalid_input(format!(
                            "parameter `{name}` contains a nested value"
                        )));
                    }
                    Value::String(s) if s.contains(',') => {
                        return Err(Error::invalid_input(format!(
                            "parameter `{name}` has an item containing a comma: `{s}`"
                        )));
                    }
                    scalar => parts.extend(scalar_to_string(scalar)),
                }
            }
            if parts.is_empty() {
                return Ok(None);
            }
            Ok(Some(parts.join(",")))
        }
        Value::Object(_) => Err(Error::invalid_input(format!(
            "parameter `{name}` is an object; use a JSON body instead"
        ))),
        scalar => Ok(scalar_to_string(scalar)),
    }
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// Paging parameters accepted by most collection endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Maximum number of results to return (1-100, API default 25).
    pub limit: Option<u32>,
    /// Number of results to skip.
    pub offset: Option<u32>,
}

impl Page {
    /// Create a page with both bounds set.
    pub fn new(limit: u32, offset: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
        }
    }
}

/// Ascending or descending sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Ascending,
    Desc,
    Descending,
    Up,
    Down,
}
