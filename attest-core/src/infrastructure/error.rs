// attest-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum EngineError {
    #[error("DataFusion Engine Error: {0}")]
    #[diagnostic(
        code(attest::infra::engine::datafusion),
        help("An error occurred inside the tabular engine.")
    )]
    DataFusion(#[from] datafusion::error::DataFusionError),

    #[error("Unsupported column type '{data_type}' for column '{column}'")]
    #[diagnostic(
        code(attest::infra::engine::column_type),
        help("Only integer, float, boolean, string, date and timestamp columns can be loaded.")
    )]
    UnsupportedColumnType { column: String, data_type: String },
}

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- ENGINE (Abstracted) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Engine(#[from] EngineError),

    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(attest::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(attest::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Check file not found at '{0}'")]
    #[diagnostic(code(attest::infra::check_file_missing))]
    CheckFileNotFound(String),
}

// Manual implementation for shortcuts (e.g. `?` operator on datafusion calls)
impl From<datafusion::error::DataFusionError> for InfrastructureError {
    fn from(err: datafusion::error::DataFusionError) -> Self {
        InfrastructureError::Engine(EngineError::DataFusion(err))
    }
}
