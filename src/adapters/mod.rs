pub mod document;
pub mod health_handler;
pub mod mock_generator;
pub mod mock_handler;
pub mod random;
pub mod reference_resolver;
pub mod value_generator;
