use crate::domain::{ComponentTable, SchemaNode};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Document has no components section (resolving '{0}')")]
    MissingComponents(String),

    #[error("Components section has no schemas (resolving '{0}')")]
    MissingSchemas(String),

    #[error("Schema '{name}' not found in components (resolving '{reference}')")]
    NotFound { name: String, reference: String },
}

/// Last `/`-separated segment of a `$ref` pointer.
///
/// `#/components/schemas/Pet` and `Pet` both name `Pet`; the prefix is never
/// checked.
pub fn ref_name(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}

/// Looks up `$ref` targets in a document's component table.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceResolver<'doc> {
    components: Option<&'doc ComponentTable>,
}

impl<'doc> ReferenceResolver<'doc> {
    pub fn new(components: Option<&'doc ComponentTable>) -> Self {
        Self { components }
    }

    pub fn resolve(&self, reference: &str) -> Result<&'doc SchemaNode, ResolveError> {
        let components = self
            .components
            .ok_or_else(|| ResolveError::MissingComponents(reference.to_string()))?;
        let schemas = components
            .schemas
            .as_ref()
            .ok_or_else(|| ResolveError::MissingSchemas(reference.to_string()))?;

        let name = ref_name(reference);
        schemas.get(name).ok_or_else(|| ResolveError::NotFound {
            name: name.to_string(),
            reference: reference.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SchemaType;
    use indexmap::IndexMap;

    fn table() -> ComponentTable {
        let mut schemas = IndexMap::new();
        schemas.insert("Pet".to_string(), SchemaNode::of_type(SchemaType::Object));
        schemas.insert("Tag".to_string(), SchemaNode::of_type(SchemaType::String));
        ComponentTable::with_schemas(schemas)
    }

    #[test]
    fn test_ref_name() {
        assert_eq!(ref_name("#/components/schemas/Pet"), "Pet");
        assert_eq!(ref_name("Pet"), "Pet");
        assert_eq!(ref_name("#/definitions/"), "");
    }

    #[test]
    fn test_resolve_by_last_segment() {
        let table = table();
        let resolver = ReferenceResolver::new(Some(&table));

        let pet = resolver.resolve("#/components/schemas/Pet").unwrap();
        assert_eq!(pet.schema_type, Some(SchemaType::Object));

        // any prefix is accepted
        let tag = resolver.resolve("#/definitions/Tag").unwrap();
        assert_eq!(tag.schema_type, Some(SchemaType::String));
    }

    #[test]
    fn test_resolve_unknown_name() {
        let table = table();
        let resolver = ReferenceResolver::new(Some(&table));

        let err = resolver.resolve("#/components/schemas/Owner").unwrap_err();
        assert_eq!(
            err,
            ResolveError::NotFound {
                name: "Owner".to_string(),
                reference: "#/components/schemas/Owner".to_string(),
            }
        );
    }

    #[test]
    fn test_resolve_without_components() {
        let resolver = ReferenceResolver::new(None);
        assert!(matches!(
            resolver.resolve("#/components/schemas/Pet"),
            Err(ResolveError::MissingComponents(_))
        ));

        let empty = ComponentTable::default();
        let resolver = ReferenceResolver::new(Some(&empty));
        assert!(matches!(
            resolver.resolve("#/components/schemas/Pet"),
            Err(ResolveError::MissingSchemas(_))
        ));
    }
}
