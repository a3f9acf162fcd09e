use crate::adapters::random::RandomSource;
use crate::adapters::reference_resolver::ReferenceResolver;
use crate::adapters::value_generator::{ResolutionState, ValueGenerator};
use crate::config::ReferenceScope;
use crate::domain::{Document, MockResult};
use tracing::{debug, info};

/// Walks every path, method, status code and media type of a document and
/// generates one mock per response schema.
pub struct MockGenerator {
    scope: ReferenceScope,
}

impl MockGenerator {
    pub fn new(scope: ReferenceScope) -> Self {
        Self { scope }
    }

    pub fn generate_all(&self, document: &Document, random: &mut dyn RandomSource) -> Vec<MockResult> {
        let Some(paths) = &document.paths else {
            info!("Document has no paths, nothing to mock");
            return Vec::new();
        };

        let resolver = ReferenceResolver::new(document.components.as_ref());
        let mut generator = ValueGenerator::new(resolver, random);
        let mut document_state = ResolutionState::new();
        let mut mocks = Vec::new();

        for (endpoint, item) in paths {
            for (method, operation) in &item.operations {
                for (status_code, response) in &operation.responses {
                    for (media_type, content) in &response.content {
                        let Some(schema) = &content.schema else {
                            debug!("No schema for {} {} {} {}", method, endpoint, status_code, media_type);
                            continue;
                        };

                        let value = match self.scope {
                            ReferenceScope::Document => generator.generate(schema, &mut document_state),
                            ReferenceScope::Response => generator.generate_standalone(schema),
                        };

                        mocks.push(MockResult {
                            endpoint: endpoint.clone(),
                            method: method.clone(),
                            status_code: status_code.clone(),
                            media_type: media_type.clone(),
                            value,
                        });
                    }
                }
            }
        }

        info!("Generated {} mocks across {} paths", mocks.len(), paths.len());
        mocks
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new(ReferenceScope::default())
    }
}
