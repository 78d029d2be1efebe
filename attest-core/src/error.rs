// attest-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AttestError {
    // --- DOMAIN ERRORS (Metric semantics, configuration, registry) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (IO, Parsing, Engine) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    // --- GENERIC / APPLICATIVE ERRORS ---
    #[error("Internal Error: {0}")]
    InternalError(String),
}

// Manual implementation to avoid duplicate enum variant but keep ergonomics
impl From<std::io::Error> for AttestError {
    fn from(err: std::io::Error) -> Self {
        AttestError::Infrastructure(InfrastructureError::Io(err))
    }
}
