use indexmap::IndexMap;
use serde::Serialize;

pub mod schema;
pub mod value;

pub use schema::{ComponentTable, SchemaNode, SchemaType};
pub use value::MockValue;

/// A parsed OpenAPI document, reduced to what mock generation needs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// `None` when the document has no `paths` section
    pub paths: Option<IndexMap<String, PathItem>>,
    pub components: Option<ComponentTable>,
}

/// Operations declared under one path, keyed by lowercase HTTP method.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathItem {
    pub operations: IndexMap<String, Operation>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Operation {
    /// Keyed by status code string ("200", "404", "default")
    pub responses: IndexMap<String, Response>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
    /// Keyed by media type ("application/json")
    pub content: IndexMap<String, MediaType>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaType {
    pub schema: Option<SchemaNode>,
}

/// One generated response body for a (path, method, status, media type) tuple.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MockResult {
    pub endpoint: String,
    #[serde(rename = "request_method")]
    pub method: String,
    pub status_code: String,
    pub media_type: String,
    #[serde(rename = "mock_value")]
    pub value: MockValue,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mock_result_wire_format() {
        let result = MockResult {
            endpoint: "/items".to_string(),
            method: "get".to_string(),
            status_code: "200".to_string(),
            media_type: "application/json".to_string(),
            value: MockValue::Bool(false),
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({
                "endpoint": "/items",
                "request_method": "get",
                "status_code": "200",
                "media_type": "application/json",
                "mock_value": false
            })
        );
    }
}
