// attest-core/src/domain/mod.rs

pub mod batch;
pub mod error;
pub mod expectation;
pub mod metrics;

// Convenience re-exports to simplify imports elsewhere
pub use batch::{Batch, CellValue};
pub use error::DomainError;
