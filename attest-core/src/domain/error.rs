// attest-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Column '{0}' not found in batch")]
    #[diagnostic(
        code(attest::domain::column_not_found),
        help("Check the column_A / column_B kwargs against the batch schema.")
    )]
    ColumnNotFound(String),

    #[error("Column length mismatch: {left} vs {right} rows")]
    #[diagnostic(code(attest::domain::shape))]
    LengthMismatch { left: usize, right: usize },

    #[error("Cross-type comparisons are not supported")]
    #[diagnostic(
        code(attest::domain::cross_type),
        help("Remove 'allow_cross_type_comparisons' from the expectation kwargs.")
    )]
    CrossTypeComparison,

    #[error("Cannot parse '{value}' as a datetime (row {row})")]
    #[diagnostic(
        code(attest::domain::datetime_parse),
        help("Every value must be an ISO-8601 or common date/datetime string.")
    )]
    DatetimeParse { value: String, row: usize },

    #[error("Null label at row {row}; rows with nulls must be filtered before scoring")]
    #[diagnostic(code(attest::domain::null_label))]
    NullLabel { row: usize },

    #[error("Cannot score an empty column pair")]
    #[diagnostic(
        code(attest::domain::empty_pair),
        help("The null policy removed every row pair, or the batch is empty.")
    )]
    EmptyColumnPair,

    #[error("No implementation of metric '{metric}' registered for engine '{engine}'")]
    #[diagnostic(
        code(attest::domain::metric_not_registered),
        help("Only the in-memory engine carries this metric.")
    )]
    MetricNotRegistered { metric: String, engine: String },

    #[error("Invalid expectation configuration: {0}")]
    #[diagnostic(code(attest::domain::configuration))]
    InvalidConfiguration(String),
}
