//! Query-string encoding for list options.
//!
//! Options are any `Serialize` struct. Fields are flattened into a single
//! query string: a nested object (the pagination sub-mapping) contributes its
//! own fields at the top level. Null, empty, zero and `false` values are
//! omitted, so options holding only defaults encode to nothing.
//!
//! Parameters are emitted in key order, which keeps the output
//! deterministic.
//!
//! # Example
//!
//! ```rust
//! use dnsimple::rest::{encode_options, ListOptions};
//!
//! let options = ListOptions::new().page(2).per_page(30);
//! let path = encode_options("/v2/1010/domains", Some(&options)).unwrap();
//! assert_eq!(path, "/v2/1010/domains?page=2&per_page=30");
//!
//! let path = encode_options("/v2/1010/domains", Some(&ListOptions::default())).unwrap();
//! assert_eq!(path, "/v2/1010/domains");
//! ```

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::rest::errors::ValidationError;

/// Pagination and sorting options shared by every list operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListOptions {
    /// The page to return (1-based).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Number of entries per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    /// Sort order, e.g. `"expiration:asc"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl ListOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Sets the sort order.
    #[must_use]
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }
}

/// Flattens `options` into sorted query pairs.
///
/// # Errors
///
/// Returns [`ValidationError::UnencodableOption`] if `options` does not
/// serialize to an object, or a field holds a value with no query-string form
/// (an object nested more than one level, or an array of objects), or the
/// same key is set both at the top level and inside a nested group.
pub fn query_pairs<O: Serialize + ?Sized>(
    options: &O,
) -> Result<BTreeMap<String, String>, ValidationError> {
    let value = serde_json::to_value(options).map_err(|e| ValidationError::UnencodableOption {
        option: e.to_string(),
    })?;

    let mut query = BTreeMap::new();

    match value {
        Value::Null => {}
        Value::Object(map) => {
            for (key, val) in map {
                match val {
                    // The pagination sub-mapping and any other one-level group.
                    Value::Object(nested) => {
                        for (nested_key, nested_val) in nested {
                            insert_scalar(&mut query, nested_key, &nested_val)?;
                        }
                    }
                    other => insert_scalar(&mut query, key, &other)?,
                }
            }
        }
        _ => {
            return Err(ValidationError::UnencodableOption {
                option: "options".to_string(),
            })
        }
    }

    Ok(query)
}

/// Appends the encoded `options` to `path`.
///
/// Uses `&` if `path` already carries a query string.
///
/// # Errors
///
/// Returns [`ValidationError::UnencodableOption`] as [`query_pairs`] does.
pub fn encode_options<O: Serialize + ?Sized>(
    path: &str,
    options: Option<&O>,
) -> Result<String, ValidationError> {
    let Some(options) = options else {
        return Ok(path.to_string());
    };

    let pairs = query_pairs(options)?;
    if pairs.is_empty() {
        return Ok(path.to_string());
    }

    let query = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    let separator = if path.contains('?') { '&' } else { '?' };
    Ok(format!("{path}{separator}{query}"))
}

fn insert_scalar(
    query: &mut BTreeMap<String, String>,
    key: String,
    value: &Value,
) -> Result<(), ValidationError> {
    match value {
        Value::Null | Value::Bool(false) => {}
        Value::Bool(true) => insert_unique(query, key, "true".to_string())?,
        Value::String(s) => {
            if !s.is_empty() {
                insert_unique(query, key, s.clone())?;
            }
        }
        Value::Number(n) => {
            if !is_zero(n) {
                insert_unique(query, key, n.to_string())?;
            }
        }
        Value::Array(arr) => {
            let mut values = Vec::with_capacity(arr.len());
            for item in arr {
                match item {
                    Value::String(s) => values.push(s.clone()),
                    Value::Number(n) => values.push(n.to_string()),
                    Value::Bool(b) => values.push(b.to_string()),
                    Value::Null => {}
                    _ => return Err(ValidationError::UnencodableOption { option: key }),
                }
            }
            if !values.is_empty() {
                insert_unique(query, key, values.join(","))?;
            }
        }
        Value::Object(_) => return Err(ValidationError::UnencodableOption { option: key }),
    }
    Ok(())
}

// A key set both at the top level and inside a nested group has no single
// query-string value.
fn insert_unique(
    query: &mut BTreeMap<String, String>,
    key: String,
    value: String,
) -> Result<(), ValidationError> {
    if query.contains_key(&key) {
        return Err(ValidationError::UnencodableOption { option: key });
    }
    query.insert(key, value);
    Ok(())
}

fn is_zero(n: &serde_json::Number) -> bool {
    n.as_i64() == Some(0) || n.as_u64() == Some(0) || n.as_f64() == Some(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Filtered {
        #[serde(skip_serializing_if = "Option::is_none")]
        name_like: Option<String>,
        registrant_id: i64,
        #[serde(flatten)]
        list: ListOptions,
    }

    #[test]
    fn test_default_options_encode_to_nothing() {
        let path = encode_options("/v2/1010/domains", Some(&ListOptions::default())).unwrap();
        assert_eq!(path, "/v2/1010/domains");

        let none: Option<&ListOptions> = None;
        assert_eq!(encode_options("/v2/x", none).unwrap(), "/v2/x");
    }

    #[test]
    fn test_filters_and_pagination_are_flattened() {
        let options = Filtered {
            name_like: Some("example".to_string()),
            registrant_id: 0,
            list: ListOptions::new().page(2),
        };

        let path = encode_options("/v2/1010/domains", Some(&options)).unwrap();
        assert_eq!(path, "/v2/1010/domains?name_like=example&page=2");
    }

    #[test]
    fn test_nested_pagination_mapping_is_flattened() {
        let options = json!({
            "name_like": "ex",
            "pagination": {"page": 3, "per_page": 10}
        });

        let pairs = query_pairs(&options).unwrap();
        assert_eq!(pairs.get("page").map(String::as_str), Some("3"));
        assert_eq!(pairs.get("per_page").map(String::as_str), Some("10"));
        assert!(!pairs.contains_key("pagination"));
    }

    #[test]
    fn test_nested_key_colliding_with_top_level_is_rejected() {
        let options = json!({
            "page": 1,
            "pagination": {"page": 3}
        });

        assert_eq!(
            query_pairs(&options).unwrap_err(),
            ValidationError::UnencodableOption {
                option: "page".to_string()
            }
        );

        // A default value on one side is omitted, so nothing collides.
        let options = json!({
            "page": 0,
            "pagination": {"page": 3}
        });
        assert_eq!(
            query_pairs(&options).unwrap().get("page").map(String::as_str),
            Some("3")
        );
    }

    #[test]
    fn test_zero_false_and_empty_values_are_omitted() {
        let options = json!({
            "a": 0,
            "b": false,
            "c": "",
            "d": null,
            "e": [],
            "f": 0.0,
            "g": true
        });

        let pairs = query_pairs(&options).unwrap();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs.get("g").map(String::as_str), Some("true"));
    }

    #[test]
    fn test_arrays_join_with_commas() {
        let pairs = query_pairs(&json!({"ids": [1, 2, 3]})).unwrap();
        assert_eq!(pairs.get("ids").map(String::as_str), Some("1,2,3"));
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let options = ListOptions::new().sort("name:asc,id:desc");
        let path = encode_options("/v2/1/templates", Some(&options)).unwrap();
        assert_eq!(path, "/v2/1/templates?sort=name%3Aasc%2Cid%3Adesc");
    }

    #[test]
    fn test_existing_query_is_extended() {
        let path = encode_options("/v2/x?a=1", Some(&ListOptions::new().page(4))).unwrap();
        assert_eq!(path, "/v2/x?a=1&page=4");
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let options = ListOptions::new().sort("id").per_page(5).page(1);
        let first = encode_options("/p", Some(&options)).unwrap();
        assert_eq!(first, "/p?page=1&per_page=5&sort=id");
        assert_eq!(encode_options("/p", Some(&options)).unwrap(), first);
    }

    #[test]
    fn test_unencodable_values_fail() {
        assert_eq!(
            query_pairs(&json!({"a": {"b": {"c": 1}}})).unwrap_err(),
            ValidationError::UnencodableOption {
                option: "b".to_string()
            }
        );
        assert!(matches!(
            query_pairs(&json!({"a": [{"b": 1}]})),
            Err(ValidationError::UnencodableOption { option }) if option == "a"
        ));
        assert!(query_pairs(&json!("scalar")).is_err());
    }
}
