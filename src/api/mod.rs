//! Endpoint wrappers.
//!
//! Every function here is pure parameter shaping: it turns typed arguments
//! into an [`ApiRequest`] and never touches the network. The dispatcher in
//! `services::http_client` sends them.

pub mod account;
pub mod analytics;
pub mod feedback;
pub mod fulfillment;
pub mod inventory;
pub mod marketing;
pub mod message;
pub mod metadata;
pub mod negotiation;
pub mod notification;

use reqwest::Method;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Raw path segments; percent-encoding happens when the URL is built.
    pub segments: Vec<String>,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub headers: Vec<(String, String)>,
}

impl ApiRequest {
    /// `path` is split on `/`; use [`ApiRequest::segment`] for caller-supplied ids.
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            segments: path
                .split('/')
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string())
                .collect(),
            query: Vec::new(),
            body: None,
            headers: Vec::new(),
        }
    }

    pub fn get(path: &str) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: &str) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: &str) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: &str) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Appends one path segment verbatim, so `/` inside an id cannot change the route.
    pub fn segment(mut self, value: impl Into<String>) -> Self {
        self.segments.push(value.into());
        self
    }

    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn query_opt<T: ToString>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn header_opt(mut self, name: &str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.headers.push((name.to_string(), value.to_string()));
        }
        self
    }

    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::ApiRequest;
    use reqwest::Method;

    #[test]
    fn optional_query_values_are_omitted() {
        let req = ApiRequest::get("/sell/fulfillment/v1/order")
            .query_opt("filter", None::<String>)
            .query_opt("limit", Some(5));
        assert_eq!(req.query, vec![("limit".to_string(), "5".to_string())]);
        assert_eq!(req.query_value("filter"), None);
    }

    #[test]
    fn path_keeps_dynamic_segments_whole() {
        let req = ApiRequest::new(Method::GET, "/sell/inventory/v1/inventory_item/").segment("a/b");
        assert_eq!(req.segments.last().map(String::as_str), Some("a/b"));
        assert_eq!(req.path(), "/sell/inventory/v1/inventory_item/a/b");
    }
}
