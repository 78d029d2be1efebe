// attest-core/src/domain/metrics/registry.rs

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::batch::Batch;
use crate::domain::error::DomainError;
use crate::domain::metrics::ColumnPairKwargs;
use crate::domain::metrics::recall::{RecallGreaterOrEqualThan, RecallValueKeys};

/// Execution-engine identifier.
///
/// Dispatch is an explicit lookup keyed by this identifier; engines without a
/// registered computation resolve to an error instead of falling back.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum EngineKind {
    InMemory,
    Sql,
    Distributed,
}

impl EngineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InMemory => "in_memory",
            Self::Sql => "sql",
            Self::Distributed => "distributed",
        }
    }
}

impl std::fmt::Display for EngineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A per-engine condition-metric computation over a column-pair domain.
pub type MetricFn =
    fn(&Batch, &ColumnPairKwargs, &RecallValueKeys) -> Result<bool, DomainError>;

/// Condition-metric lookup table: (metric name, engine) -> computation.
#[derive(Default)]
pub struct MetricRegistry {
    metrics: HashMap<(String, EngineKind), MetricFn>,
}

impl MetricRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in metric. The recall metric only carries an
    /// in-memory implementation.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(
            RecallGreaterOrEqualThan::CONDITION_METRIC_NAME,
            EngineKind::InMemory,
            RecallGreaterOrEqualThan::compute,
        );
        registry
    }

    pub fn register(&mut self, metric: &str, engine: EngineKind, compute: MetricFn) {
        self.metrics.insert((metric.to_string(), engine), compute);
    }

    pub fn resolve(&self, metric: &str, engine: EngineKind) -> Result<MetricFn, DomainError> {
        self.metrics
            .get(&(metric.to_string(), engine))
            .copied()
            .ok_or_else(|| DomainError::MetricNotRegistered {
                metric: metric.to_string(),
                engine: engine.to_string(),
            })
    }

    pub fn supports(&self, metric: &str, engine: EngineKind) -> bool {
        self.resolve(metric, engine).is_ok()
    }
}
