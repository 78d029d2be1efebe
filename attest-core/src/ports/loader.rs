// attest-core/src/ports/loader.rs

// This file defines what the application needs, without knowing how it's
// done: something that can turn a dataset on disk into an in-memory batch.

use std::path::Path;

use async_trait::async_trait;

use crate::domain::batch::Batch;
use crate::error::AttestError;

#[async_trait]
pub trait BatchLoader: Send + Sync {
    /// Materializes the dataset at `path` as an in-memory batch.
    async fn load(&self, path: &Path) -> Result<Batch, AttestError>;

    fn engine_name(&self) -> &str;
}
