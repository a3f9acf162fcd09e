use oasmock::adapters::document::DocumentLoader;
use oasmock::adapters::mock_generator::MockGenerator;
use oasmock::adapters::mock_handler::MocksResponse;
use oasmock::adapters::random::EntropySource;
use oasmock::config::ReferenceScope;
use oasmock::domain::Document;
use std::path::PathBuf;

fn petstore() -> Document {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/petstore.yaml");
    DocumentLoader::load(&path).unwrap()
}

#[test]
fn test_petstore_mocks() {
    let document = petstore();
    let mocks = MockGenerator::default().generate_all(&document, &mut EntropySource::new());

    let tuples: Vec<String> = mocks
        .iter()
        .map(|m| format!("{} {} {} {}", m.method, m.endpoint, m.status_code, m.media_type))
        .collect();
    assert_eq!(
        tuples,
        vec![
            "get /pets 200 application/json",
            "get /pets default application/json",
            "get /pets/{petId} 200 application/json",
            "get /pets/{petId} 200 application/xml",
            "get /pets/{petId} 404 application/json",
        ]
    );

    let pets = mocks[0].value.as_array().unwrap();
    assert!((1..=100).contains(&pets.len()));

    let pet = pets[0].as_object().unwrap();
    let keys: Vec<&str> = pet.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec!["id", "name", "status", "born", "weight", "vaccinated", "owner"]
    );
    assert!(["available", "pending", "sold"].contains(&pet["status"].as_str().unwrap()));
    assert!(pet["born"].as_str().unwrap().ends_with('Z'));

    // Pet -> Owner -> Pet is cut at the second Pet
    let owner = pet["owner"].as_object().unwrap();
    let owner_pets = owner["pets"].as_array().unwrap();
    assert!((1..=2).contains(&owner_pets.len()));
    assert!(owner_pets.iter().all(|p| p.is_null()));

    let error = mocks[1].value.as_object().unwrap();
    assert!(error["code"].as_i64().is_some());

    // undeclared component
    assert!(mocks[4].value.is_null());
}

#[test]
fn test_document_scope_reuses_component_values() {
    let document = petstore();
    let mocks = MockGenerator::new(ReferenceScope::Document)
        .generate_all(&document, &mut EntropySource::new());

    // every Pet reference after the first expansion is the cached value
    let pets = mocks[0].value.as_array().unwrap();
    assert!(pets.iter().all(|p| p == &pets[0]));
    assert_eq!(mocks[2].value, pets[0]);
    assert_eq!(mocks[3].value, pets[0]);
}

#[test]
fn test_serialized_output_shape() {
    let document = petstore();
    let mocks = MockGenerator::default().generate_all(&document, &mut EntropySource::new());
    let body = serde_json::to_value(MocksResponse { mocks }).unwrap();

    let first = &body["mocks"][0];
    assert_eq!(first["endpoint"], "/pets");
    assert_eq!(first["request_method"], "get");
    assert_eq!(first["status_code"], "200");
    assert_eq!(first["media_type"], "application/json");
    assert!(first["mock_value"].is_array());
    assert!(body["mocks"][4]["mock_value"].is_null());
}

#[test]
fn test_parallel_passes_share_the_document() {
    let document = petstore();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    MockGenerator::default()
                        .generate_all(&document, &mut EntropySource::new())
                        .len()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 5);
        }
    });
}
