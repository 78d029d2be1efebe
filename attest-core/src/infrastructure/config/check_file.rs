// attest-core/src/infrastructure/config/check_file.rs

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::expectation::ExpectationConfiguration;
use crate::error::AttestError;
use crate::infrastructure::error::InfrastructureError;

/// A YAML check file: one dataset, a list of expectations to run against it.
///
/// ```yaml
/// dataset: data/predictions.csv
/// expectations:
///   - column_A: label
///     column_B: prediction
///     threshold: 0.3
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckFile {
    pub dataset: PathBuf,
    pub expectations: Vec<ExpectationConfiguration>,
}

/// Loads and validates a check file. Every expectation configuration goes
/// through construction-time validation before anything runs.
pub fn load_check_file(path: &Path) -> Result<CheckFile, AttestError> {
    if !path.exists() {
        return Err(InfrastructureError::CheckFileNotFound(path.display().to_string()).into());
    }

    let content = fs::read_to_string(path)?;
    let file: CheckFile = serde_yaml::from_str(&content).map_err(InfrastructureError::from)?;

    let expectations = file
        .expectations
        .into_iter()
        .map(|c| c.validated())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CheckFile {
        dataset: file.dataset,
        expectations,
    })
}
