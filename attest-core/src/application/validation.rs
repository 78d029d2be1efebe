// attest-core/src/application/validation.rs

use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::batch::Batch;
use crate::domain::expectation::result::ValidationDetails;
use crate::domain::expectation::{ExpectRecallGreaterOrEqualThan, ExpectationConfiguration};
use crate::domain::metrics::{EngineKind, MetricRegistry};
use crate::error::AttestError;
use crate::ports::loader::BatchLoader;

/// Outcome of running one expectation against one batch.
///
/// `success` is the rule's reported verdict; `observed_outcome` is the raw
/// boolean computed by the condition metric. The two can disagree (the rule's
/// result combination is a stub); both are surfaced so callers see it.
#[derive(Debug, Clone, Serialize)]
pub struct ExpectationValidationResult {
    pub expectation: &'static str,
    pub engine: EngineKind,
    pub success: bool,
    pub observed_outcome: bool,
    pub result: ValidationDetails,
}

/// Runs the recall expectation against a batch on the given engine.
pub fn run_expectation(
    registry: &MetricRegistry,
    engine: EngineKind,
    batch: &Batch,
    configuration: &ExpectationConfiguration,
) -> Result<ExpectationValidationResult, AttestError> {
    let compute = registry.resolve(ExpectRecallGreaterOrEqualThan::MAP_METRIC, engine)?;

    let observed_outcome = compute(
        batch,
        &configuration.domain_kwargs(),
        &configuration.value_keys,
    )?;

    let mut metrics = HashMap::new();
    metrics.insert(
        ExpectRecallGreaterOrEqualThan::MAP_METRIC.to_string(),
        observed_outcome,
    );

    let validation =
        ExpectRecallGreaterOrEqualThan.validate(configuration, &metrics, None, engine);

    if validation.success != observed_outcome {
        warn!(
            expectation = ExpectRecallGreaterOrEqualThan::NAME,
            observed_outcome,
            reported = validation.success,
            "rule verdict differs from the computed metric outcome"
        );
    }

    Ok(ExpectationValidationResult {
        expectation: ExpectRecallGreaterOrEqualThan::NAME,
        engine,
        success: validation.success,
        observed_outcome,
        result: validation.result,
    })
}

/// Result of running a check file's expectations over one dataset.
#[derive(Debug, Serialize)]
pub struct CheckRunResult {
    pub dataset: String,
    pub engine_name: String,
    pub results: Vec<ExpectationValidationResult>,
}

impl CheckRunResult {
    pub fn all_succeeded(&self) -> bool {
        self.results.iter().all(|r| r.success)
    }
}

/// Materializes a dataset through the loader port and runs every configured
/// expectation against it on the in-memory engine.
pub async fn run_check(
    loader: &dyn BatchLoader,
    registry: &MetricRegistry,
    dataset: &Path,
    configurations: &[ExpectationConfiguration],
) -> Result<CheckRunResult, AttestError> {
    debug!(dataset = %dataset.display(), loader = loader.engine_name(), "loading batch");
    let batch = loader.load(dataset).await?;

    let mut results = Vec::with_capacity(configurations.len());
    for configuration in configurations {
        results.push(run_expectation(
            registry,
            EngineKind::InMemory,
            &batch,
            configuration,
        )?);
    }

    Ok(CheckRunResult {
        dataset: dataset.display().to_string(),
        engine_name: loader.engine_name().to_string(),
        results,
    })
}
