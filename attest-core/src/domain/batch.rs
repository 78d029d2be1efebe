// attest-core/src/domain/batch.rs

use std::hash::{Hash, Hasher};

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::error::DomainError;

/// A single cell of a tabular batch.
///
/// Label identity (equality / hashing) is defined per variant; values of
/// different variants are never equal. Floats compare by bit pattern so they
/// can act as hashable class labels.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
    Timestamp(NaiveDateTime),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Null => "Null",
            CellValue::Int(_) => "Int",
            CellValue::Float(_) => "Float",
            CellValue::Text(_) => "Text",
            CellValue::Timestamp(_) => "Timestamp",
        }
    }
}

impl PartialEq for CellValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CellValue::Null, CellValue::Null) => true,
            (CellValue::Int(a), CellValue::Int(b)) => a == b,
            (CellValue::Float(a), CellValue::Float(b)) => a.to_bits() == b.to_bits(),
            (CellValue::Text(a), CellValue::Text(b)) => a == b,
            (CellValue::Timestamp(a), CellValue::Timestamp(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for CellValue {}

impl Hash for CellValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        match self {
            CellValue::Null => {}
            CellValue::Int(v) => v.hash(state),
            CellValue::Float(v) => v.to_bits().hash(state),
            CellValue::Text(v) => v.hash(state),
            CellValue::Timestamp(v) => v.hash(state),
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Null => write!(f, "NULL"),
            CellValue::Int(v) => write!(f, "{}", v),
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::Text(v) => write!(f, "{}", v),
            CellValue::Timestamp(v) => write!(f, "{}", v),
        }
    }
}

/// An in-memory tabular batch: named, equal-length columns.
///
/// Batches are call-scoped. They are materialized by an adapter (or built
/// from fixture data), consumed read-only by a metric, and dropped.
#[derive(Debug, Clone)]
pub struct Batch {
    columns: Vec<(String, Vec<CellValue>)>,
}

impl Batch {
    /// Builds a batch, enforcing column-length agreement up front.
    pub fn from_columns(columns: Vec<(String, Vec<CellValue>)>) -> Result<Self, DomainError> {
        if let Some((_, first)) = columns.first() {
            let expected = first.len();
            for (_, cells) in &columns {
                if cells.len() != expected {
                    return Err(DomainError::LengthMismatch {
                        left: expected,
                        right: cells.len(),
                    });
                }
            }
        }
        Ok(Self { columns })
    }

    pub fn num_rows(&self) -> usize {
        self.columns.first().map(|(_, c)| c.len()).unwrap_or(0)
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn column(&self, name: &str) -> Result<&[CellValue], DomainError> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, cells)| cells.as_slice())
            .ok_or_else(|| DomainError::ColumnNotFound(name.to_string()))
    }

    /// Resolves the two columns of a column-pair domain.
    pub fn column_pair(
        &self,
        column_a: &str,
        column_b: &str,
    ) -> Result<(&[CellValue], &[CellValue]), DomainError> {
        Ok((self.column(column_a)?, self.column(column_b)?))
    }

    /// Dominant value type of a column (first non-null cell), for display.
    pub fn column_type(&self, name: &str) -> Result<&'static str, DomainError> {
        let cells = self.column(name)?;
        Ok(cells
            .iter()
            .find(|c| !c.is_null())
            .map(|c| c.type_name())
            .unwrap_or("Null"))
    }
}
