// attest-core/src/domain/expectation/recall_rule.rs

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::batch::CellValue;
use crate::domain::expectation::configuration::ExpectationConfiguration;
use crate::domain::expectation::result::ValidationResult;
use crate::domain::metrics::recall::{RecallGreaterOrEqualThan, RecallValueKeys};
use crate::domain::metrics::registry::EngineKind;

/// Gallery metadata of a rule.
#[derive(Debug, Clone, Serialize)]
pub struct LibraryMetadata {
    pub maturity: &'static str,
    pub tags: Vec<&'static str>,
    pub package: &'static str,
}

/// A canned dataset with the cases exercised against it.
#[derive(Debug, Clone)]
pub struct ExampleSet {
    pub data: Vec<(String, Vec<CellValue>)>,
    pub cases: Vec<ExampleCase>,
}

/// One declared fixture case. `expected_success` is data: it is reproduced
/// exactly as declared, never recomputed.
#[derive(Debug, Clone)]
pub struct ExampleCase {
    pub title: &'static str,
    pub configuration: ExpectationConfiguration,
    pub expected_success: bool,
    pub include_in_gallery: bool,
    pub only_for: Vec<EngineKind>,
}

/// Checks that the macro recall between two columns meets a threshold.
///
/// Recall is a common statistic for classification quality; column A carries
/// the ground-truth labels and column B the predicted labels.
pub struct ExpectRecallGreaterOrEqualThan;

impl ExpectRecallGreaterOrEqualThan {
    pub const NAME: &'static str = "expect_recall_greater_or_equal_than";

    /// Condition metric backing this rule.
    pub const MAP_METRIC: &'static str = RecallGreaterOrEqualThan::CONDITION_METRIC_NAME;

    /// Parameters that influence the rule's outcome; used to key caching and
    /// equality of rule configurations.
    pub const SUCCESS_KEYS: [&'static str; 4] =
        ["column_A", "column_B", "threshold", "ignore_row_if"];

    /// No parameter carries a framework-enforced default; the metric applies
    /// its own internal default for `ignore_row_if`.
    pub fn default_kwarg_values() -> BTreeMap<&'static str, Value> {
        BTreeMap::new()
    }

    pub fn library_metadata() -> LibraryMetadata {
        LibraryMetadata {
            maturity: "experimental",
            tags: vec!["experimental", "classification"],
            package: "attest_expectations",
        }
    }

    /// Declared example fixtures, doubling as the rule's acceptance tests.
    pub fn examples() -> Vec<ExampleSet> {
        let ints = |values: &[i64]| values.iter().map(|v| CellValue::Int(*v)).collect();
        let case = |title, threshold, expected_success| ExampleCase {
            title,
            configuration: ExpectationConfiguration {
                column_a: "a".into(),
                column_b: "b".into(),
                threshold,
                value_keys: RecallValueKeys::default(),
            },
            expected_success,
            include_in_gallery: true,
            only_for: vec![EngineKind::InMemory],
        };

        vec![ExampleSet {
            data: vec![
                ("a".into(), ints(&[0, 1, 2, 0, 1, 2])),
                ("b".into(), ints(&[0, 2, 1, 0, 0, 1])),
            ],
            cases: vec![
                case("positive_test", 0.3, true),
                case("negative_test", 0.1, false),
            ],
        }]
    }

    /// Combines computed metrics into the rule's result.
    ///
    /// Currently a stub: it reports success unconditionally with a fixed
    /// detail payload and ignores the computed metric outcome. The mismatch
    /// with the metric is a known, deliberately preserved behavior; see
    /// DESIGN.md.
    pub fn validate(
        &self,
        _configuration: &ExpectationConfiguration,
        _metrics: &HashMap<String, bool>,
        _runtime_configuration: Option<&Value>,
        _engine: EngineKind,
    ) -> ValidationResult {
        ValidationResult::with_details(true, json!({ "note": "no additional details" }))
    }
}
