// attest-core/src/domain/expectation/configuration.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::error::DomainError;
use crate::domain::metrics::{ColumnPairKwargs, RecallValueKeys};

/// Kwargs of the recall expectation.
///
/// Wire names (`column_A`, `column_B`, ...) match the expectation's external
/// interface. Validation happens at construction / load time, never inside
/// the metric computation.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct ExpectationConfiguration {
    #[serde(rename = "column_A")]
    #[validate(length(min = 1, message = "column_A cannot be empty"))]
    pub column_a: String,

    #[serde(rename = "column_B")]
    #[validate(length(min = 1, message = "column_B cannot be empty"))]
    pub column_b: String,

    #[validate(range(min = 0.0, max = 1.0, message = "threshold must be within [0, 1]"))]
    pub threshold: f64,

    #[serde(flatten)]
    pub value_keys: RecallValueKeys,
}

impl ExpectationConfiguration {
    pub fn new(
        column_a: impl Into<String>,
        column_b: impl Into<String>,
        threshold: f64,
        value_keys: RecallValueKeys,
    ) -> Result<Self, DomainError> {
        Self {
            column_a: column_a.into(),
            column_b: column_b.into(),
            threshold,
            value_keys,
        }
        .validated()
    }

    /// Runs construction-time validation, e.g. after deserialization.
    pub fn validated(self) -> Result<Self, DomainError> {
        self.validate()
            .map_err(|e| DomainError::InvalidConfiguration(e.to_string()))?;
        Ok(self)
    }

    /// Domain kwargs handed to the condition metric.
    pub fn domain_kwargs(&self) -> ColumnPairKwargs {
        ColumnPairKwargs {
            column_a: self.column_a.clone(),
            column_b: self.column_b.clone(),
            threshold: self.threshold,
        }
    }
}
