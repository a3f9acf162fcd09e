use indexmap::IndexMap;
use std::str::FromStr;

/// Declared `type` of a schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaType {
    String,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
}

impl FromStr for SchemaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(Self::String),
            "integer" => Ok(Self::Integer),
            "number" => Ok(Self::Number),
            "boolean" => Ok(Self::Boolean),
            "array" => Ok(Self::Array),
            "object" => Ok(Self::Object),
            other => Err(format!("Unknown schema type: {}", other)),
        }
    }
}

/// A JSON-Schema-like node taken from a response or from `components.schemas`.
///
/// Only the keywords that drive value generation are kept. Everything else in
/// the source document (`description`, `minimum`, `allOf`, ...) is dropped
/// while loading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaNode {
    pub schema_type: Option<SchemaType>,
    /// Raw `$ref` pointer, e.g. `#/components/schemas/Pet`
    pub reference: Option<String>,
    pub enum_values: Vec<String>,
    pub format: Option<String>,
    pub items: Option<Box<SchemaNode>>,
    pub properties: Option<IndexMap<String, SchemaNode>>,
    pub min_items: Option<u64>,
    pub max_items: Option<u64>,
}

impl SchemaNode {
    pub fn of_type(schema_type: SchemaType) -> Self {
        Self {
            schema_type: Some(schema_type),
            ..Default::default()
        }
    }

    pub fn reference(pointer: impl Into<String>) -> Self {
        Self {
            reference: Some(pointer.into()),
            ..Default::default()
        }
    }

    pub fn has_format(&self, format: &str) -> bool {
        self.format.as_deref() == Some(format)
    }
}

/// Reusable schemas from the document's `components` section.
///
/// `schemas` is `None` when the section has no `schemas` mapping at all, which
/// the resolver reports differently from a missing name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentTable {
    pub schemas: Option<IndexMap<String, SchemaNode>>,
}

impl ComponentTable {
    pub fn with_schemas(schemas: IndexMap<String, SchemaNode>) -> Self {
        Self {
            schemas: Some(schemas),
        }
    }
}
