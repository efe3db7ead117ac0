//! Appwrite list queries.
//!
//! Each query travels as a JSON object in a repeated `queries[]` URL parameter,
//! e.g. `{"method":"equal","attribute":"category","values":["Vehicles"]}`.

use serde::Serialize;
use serde_json::Value;

/// Most documents returned by one list call.
pub const LIST_LIMIT: u32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Query {
    method: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    attribute: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    values: Vec<Value>,
}

impl Query {
    fn new(method: &'static str, attribute: Option<&str>, values: Vec<Value>) -> Self {
        Self {
            method,
            attribute: attribute.map(str::to_string),
            values,
        }
    }

    pub fn equal(attribute: &str, value: impl Into<Value>) -> Self {
        Self::new("equal", Some(attribute), vec![value.into()])
    }

    /// Inclusive range.
    pub fn between(attribute: &str, low: impl Into<Value>, high: impl Into<Value>) -> Self {
        Self::new("between", Some(attribute), vec![low.into(), high.into()])
    }

    /// Full-text search; the attribute needs a full-text index.
    pub fn search(attribute: &str, text: &str) -> Self {
        Self::new("search", Some(attribute), vec![Value::from(text)])
    }

    pub fn order_desc(attribute: &str) -> Self {
        Self::new("orderDesc", Some(attribute), Vec::new())
    }

    pub fn limit(limit: u32) -> Self {
        Self::new("limit", None, vec![Value::from(limit)])
    }

    pub fn to_param(&self) -> String {
        // Serializing a struct of strings and JSON values cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// URL parameters for `queries`.
pub(crate) fn query_params(queries: &[Query]) -> Vec<(&'static str, String)> {
    queries
        .iter()
        .map(|query| ("queries[]", query.to_param()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_query_json() {
        assert_eq!(
            Query::equal("category", "Vehicles").to_param(),
            r#"{"method":"equal","attribute":"category","values":["Vehicles"]}"#
        );
    }

    #[test]
    fn test_between_query_json() {
        assert_eq!(
            Query::between("price", 100u64, 500u64).to_param(),
            r#"{"method":"between","attribute":"price","values":[100,500]}"#
        );
    }

    #[test]
    fn test_limit_and_order_json() {
        assert_eq!(Query::limit(25).to_param(), r#"{"method":"limit","values":[25]}"#);
        assert_eq!(
            Query::order_desc("$createdAt").to_param(),
            r#"{"method":"orderDesc","attribute":"$createdAt"}"#
        );
    }

    #[test]
    fn test_query_params_repeat_key() {
        let params = query_params(&[Query::search("product_name", "lap"), Query::limit(5)]);
        assert_eq!(params.len(), 2);
        assert!(params.iter().all(|(key, _)| *key == "queries[]"));
    }
}
