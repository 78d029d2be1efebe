// attest-core/src/domain/metrics/recall.rs

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::batch::{Batch, CellValue};
use crate::domain::error::DomainError;
use crate::domain::metrics::nulls::{IgnoreRowIf, filter_pair_nulls};
use crate::domain::metrics::{ColumnPairKwargs, datetime};

/// Value keys of the recall condition metric.
///
/// Defaults are fixed here, at construction time, not substituted inside the
/// computation. `ignore_row_if` defaults to `both_values_are_missing`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default)]
#[serde(default)]
pub struct RecallValueKeys {
    pub ignore_row_if: IgnoreRowIf,
    pub or_equal: bool,
    pub parse_strings_as_datetimes: bool,
    pub allow_cross_type_comparisons: bool,
}

/// Macro-averaged recall, scikit-learn compatible.
///
/// The label set is the union of labels observed in truth and predictions.
/// A label with no ground-truth occurrences has undefined recall and
/// contributes 0.0 to the unweighted mean.
pub fn macro_recall(truth: &[CellValue], predicted: &[CellValue]) -> Result<f64, DomainError> {
    if truth.len() != predicted.len() {
        return Err(DomainError::LengthMismatch {
            left: truth.len(),
            right: predicted.len(),
        });
    }
    if truth.is_empty() {
        return Err(DomainError::EmptyColumnPair);
    }
    for (row, cell) in truth.iter().chain(predicted.iter()).enumerate() {
        if cell.is_null() {
            return Err(DomainError::NullLabel {
                row: row % truth.len(),
            });
        }
    }

    let mut labels: Vec<&CellValue> = Vec::new();
    let mut seen: HashSet<&CellValue> = HashSet::new();
    for cell in truth.iter().chain(predicted.iter()) {
        if seen.insert(cell) {
            labels.push(cell);
        }
    }

    let mut total = 0.0;
    for label in &labels {
        let mut true_positives = 0usize;
        let mut false_negatives = 0usize;
        for (t, p) in truth.iter().zip(predicted.iter()) {
            if &t == label {
                if t == p {
                    true_positives += 1;
                } else {
                    false_negatives += 1;
                }
            }
        }
        let support = true_positives + false_negatives;
        if support > 0 {
            total += true_positives as f64 / support as f64;
        }
        // support == 0: label only appears in predictions, recall is 0.0
    }

    Ok(total / labels.len() as f64)
}

/// Condition metric backing the recall expectation.
///
/// Column A is treated as ground-truth labels and column B as predicted
/// labels; the outcome is the comparison of the macro recall score against
/// the domain threshold.
pub struct RecallGreaterOrEqualThan;

impl RecallGreaterOrEqualThan {
    pub const CONDITION_METRIC_NAME: &'static str = "column_values.recall_greater_or_equal_than";

    pub const CONDITION_VALUE_KEYS: [&'static str; 4] = [
        "ignore_row_if",
        "or_equal",
        "parse_strings_as_datetimes",
        "allow_cross_type_comparisons",
    ];

    pub const DOMAIN_KEYS: [&'static str; 5] =
        ["batch_id", "table", "column_A", "column_B", "threshold"];

    /// One-shot metric computation over an in-memory batch.
    pub fn compute(
        batch: &Batch,
        domain: &ColumnPairKwargs,
        keys: &RecallValueKeys,
    ) -> Result<bool, DomainError> {
        let (column_a, column_b) = batch.column_pair(&domain.column_a, &domain.column_b)?;
        let (column_a, column_b) = filter_pair_nulls(column_a, column_b, keys.ignore_row_if);

        if keys.allow_cross_type_comparisons {
            return Err(DomainError::CrossTypeComparison);
        }

        let (column_a, column_b) = if keys.parse_strings_as_datetimes {
            (
                datetime::parse_column_as_datetimes(&column_a)?,
                datetime::parse_column_as_datetimes(&column_b)?,
            )
        } else {
            (column_a, column_b)
        };

        let score = macro_recall(&column_a, &column_b)?;
        debug!(
            score,
            threshold = domain.threshold,
            policy = keys.ignore_row_if.as_str(),
            "recall metric computed"
        );

        if keys.or_equal {
            Ok(score == domain.threshold)
        } else {
            Ok(score >= domain.threshold)
        }
    }
}
