// attest-core/src/domain/expectation/result.rs

use serde::Serialize;
use serde_json::Value;

/// Structured result a rule hands back to its caller.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ValidationResult {
    pub success: bool,
    pub result: ValidationDetails,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ValidationDetails {
    pub details: Value,
}

impl ValidationResult {
    pub fn with_details(success: bool, details: Value) -> Self {
        Self {
            success,
            result: ValidationDetails { details },
        }
    }
}
