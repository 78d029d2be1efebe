// attest-core/src/domain/metrics/mod.rs

pub mod datetime;
pub mod nulls;
pub mod recall;
pub mod registry;

// Re-exports
pub use nulls::{IgnoreRowIf, filter_pair_nulls};
pub use recall::{RecallGreaterOrEqualThan, RecallValueKeys, macro_recall};
pub use registry::{EngineKind, MetricFn, MetricRegistry};

use serde::Serialize;

/// Domain kwargs of a column-pair condition metric: which columns the metric
/// is computed over, and the threshold carried with the domain.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnPairKwargs {
    pub column_a: String,
    pub column_b: String,
    pub threshold: f64,
}
