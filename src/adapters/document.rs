//! Loading OpenAPI documents from YAML or JSON.
//!
//! Conversion is lenient: nodes of the wrong shape are skipped or become an
//! empty [`SchemaNode`], so a single malformed schema never prevents mocks for
//! the rest of the document.

use crate::domain::{
    ComponentTable, Document, MediaType, Operation, PathItem, Response, SchemaNode, SchemaType,
};
use axum::http::StatusCode;
use indexmap::IndexMap;
use serde_yaml::{Mapping, Value};
use std::path::Path;
use thiserror::Error;

/// Path item keys that hold operations.
pub const HTTP_METHODS: &[&str] = &[
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to read document '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse document: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Document root is not a mapping")]
    NotAMapping,
}

impl DocumentError {
    /// Convert to HTTP status code for API responses
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                StatusCode::NOT_FOUND
            }
            Self::Parse(_) | Self::NotAMapping => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub struct DocumentLoader;

impl DocumentLoader {
    /// Parse YAML or JSON text.
    pub fn parse(text: &str) -> Result<Document, DocumentError> {
        let root: Value = serde_yaml::from_str(text)?;
        Self::from_value(&root)
    }

    pub fn load(path: &Path) -> Result<Document, DocumentError> {
        let text = std::fs::read_to_string(path).map_err(|source| DocumentError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&text)
    }

    pub async fn load_async(path: &Path) -> Result<Document, DocumentError> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| DocumentError::Read {
                path: path.display().to_string(),
                source,
            })?;
        Self::parse(&text)
    }

    pub fn from_value(root: &Value) -> Result<Document, DocumentError> {
        if !root.is_mapping() {
            return Err(DocumentError::NotAMapping);
        }

        let paths = root
            .get("paths")
            .and_then(Value::as_mapping)
            .map(|paths| {
                paths
                    .iter()
                    .filter_map(|(path, item)| Some((key_string(path)?, parse_path_item(item))))
                    .collect()
            });

        let components = root
            .get("components")
            .and_then(Value::as_mapping)
            .map(|components| ComponentTable {
                schemas: components
                    .get("schemas")
                    .and_then(Value::as_mapping)
                    .map(parse_schema_map),
            });

        Ok(Document { paths, components })
    }
}

fn parse_path_item(value: &Value) -> PathItem {
    let mut operations = IndexMap::new();

    if let Some(item) = value.as_mapping() {
        for (key, operation) in item {
            let Some(method) = key.as_str() else {
                continue;
            };
            if HTTP_METHODS.contains(&method) {
                operations.insert(method.to_string(), parse_operation(operation));
            }
        }
    }

    PathItem { operations }
}

fn parse_operation(value: &Value) -> Operation {
    let responses = value
        .get("responses")
        .and_then(Value::as_mapping)
        .map(|responses| {
            responses
                .iter()
                .filter_map(|(status, response)| Some((key_string(status)?, parse_response(response))))
                .collect()
        })
        .unwrap_or_default();

    Operation { responses }
}

fn parse_response(value: &Value) -> Response {
    let content = value
        .get("content")
        .and_then(Value::as_mapping)
        .map(|content| {
            content
                .iter()
                .filter_map(|(media_type, entry)| {
                    let schema = entry.get("schema").filter(|s| s.is_mapping()).map(parse_schema);
                    Some((key_string(media_type)?, MediaType { schema }))
                })
                .collect()
        })
        .unwrap_or_default();

    Response { content }
}

fn parse_schema_map(map: &Mapping) -> IndexMap<String, SchemaNode> {
    map.iter()
        .filter_map(|(name, schema)| Some((key_string(name)?, parse_schema(schema))))
        .collect()
}

/// Convert one schema object. Anything that is not a mapping becomes an empty
/// node, which generates `null`.
pub fn parse_schema(value: &Value) -> SchemaNode {
    if !value.is_mapping() {
        return SchemaNode::default();
    }

    SchemaNode {
        schema_type: value.get("type").and_then(parse_type),
        reference: value.get("$ref").and_then(Value::as_str).map(str::to_string),
        enum_values: value
            .get("enum")
            .and_then(Value::as_sequence)
            .map(|values| values.iter().filter_map(scalar_string).collect())
            .unwrap_or_default(),
        format: value.get("format").and_then(Value::as_str).map(str::to_string),
        items: value
            .get("items")
            .filter(|items| items.is_mapping())
            .map(|items| Box::new(parse_schema(items))),
        properties: value
            .get("properties")
            .and_then(Value::as_mapping)
            .map(parse_schema_map),
        min_items: value.get("minItems").and_then(Value::as_u64),
        max_items: value.get("maxItems").and_then(Value::as_u64),
    }
}

/// `type: string`, or the first non-null entry of `type: [string, "null"]`.
fn parse_type(value: &Value) -> Option<SchemaType> {
    match value {
        Value::String(name) => name.parse().ok(),
        Value::Sequence(names) => names
            .iter()
            .filter_map(Value::as_str)
            .find(|name| *name != "null")
            .and_then(|name| name.parse().ok()),
        _ => None,
    }
}

/// Mapping keys as strings; YAML allows `200:` to be a number.
fn key_string(key: &Value) -> Option<String> {
    scalar_string(key)
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
