// attest-core/src/domain/expectation/mod.rs

pub mod configuration;
pub mod recall_rule;
pub mod result;

// Re-exports
pub use configuration::ExpectationConfiguration;
pub use recall_rule::{ExampleCase, ExampleSet, ExpectRecallGreaterOrEqualThan, LibraryMetadata};
pub use result::{ValidationDetails, ValidationResult};
