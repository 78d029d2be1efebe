// attest-core/src/infrastructure/adapters/datafusion.rs

use std::path::Path;

use async_trait::async_trait;
use chrono::DateTime;
use datafusion::prelude::*;

// Hexagonal Imports
use crate::domain::batch::{Batch, CellValue};
use crate::error::AttestError;
use crate::infrastructure::error::{EngineError, InfrastructureError};
use crate::ports::loader::BatchLoader;

use datafusion::arrow::array::{
    Array, ArrayRef, BooleanArray, Date32Array, Float32Array, Float64Array, Int32Array,
    Int64Array, LargeStringArray, StringArray, StringViewArray, TimestampMicrosecondArray,
    TimestampNanosecondArray,
};

/// Materializes CSV datasets as in-memory batches through a DataFusion
/// session.
pub struct DataFusionLoader {
    ctx: SessionContext,
}

impl DataFusionLoader {
    pub fn new() -> Self {
        Self {
            ctx: SessionContext::new(),
        }
    }
}

impl Default for DataFusionLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BatchLoader for DataFusionLoader {
    async fn load(&self, path: &Path) -> Result<Batch, AttestError> {
        let path_str = path.to_str().ok_or_else(|| {
            AttestError::InternalError(format!("Invalid dataset path: {:?}", path))
        })?;

        let df = self
            .ctx
            .read_csv(path_str, CsvReadOptions::default())
            .await
            .map_err(InfrastructureError::from)?;

        let field_names: Vec<String> = df
            .schema()
            .fields()
            .iter()
            .map(|f| f.name().clone())
            .collect();

        let record_batches = df.collect().await.map_err(InfrastructureError::from)?;

        let mut columns: Vec<(String, Vec<CellValue>)> = field_names
            .into_iter()
            .map(|name| (name, Vec::new()))
            .collect();

        for record_batch in &record_batches {
            for (i, (name, cells)) in columns.iter_mut().enumerate() {
                let array = record_batch.column(i);
                cells.extend(cells_from_array(name, array)?);
            }
        }

        Ok(Batch::from_columns(columns)?)
    }

    fn engine_name(&self) -> &str {
        "datafusion"
    }
}

/// Down-converts one Arrow array into dynamically-typed cells.
fn cells_from_array(column: &str, array: &ArrayRef) -> Result<Vec<CellValue>, AttestError> {
    let mut cells = Vec::with_capacity(array.len());

    macro_rules! collect {
        ($arr:expr, $to_cell:expr) => {{
            let arr = $arr;
            for i in 0..arr.len() {
                if arr.is_null(i) {
                    cells.push(CellValue::Null);
                } else {
                    cells.push($to_cell(arr, i));
                }
            }
            return Ok(cells);
        }};
    }

    let any = array.as_any();

    if let Some(arr) = any.downcast_ref::<Int64Array>() {
        collect!(arr, |a: &Int64Array, i| CellValue::Int(a.value(i)));
    }
    if let Some(arr) = any.downcast_ref::<Int32Array>() {
        collect!(arr, |a: &Int32Array, i| CellValue::Int(a.value(i) as i64));
    }
    if let Some(arr) = any.downcast_ref::<Float64Array>() {
        collect!(arr, |a: &Float64Array, i| CellValue::Float(a.value(i)));
    }
    if let Some(arr) = any.downcast_ref::<Float32Array>() {
        collect!(arr, |a: &Float32Array, i| CellValue::Float(
            a.value(i) as f64
        ));
    }
    if let Some(arr) = any.downcast_ref::<StringArray>() {
        collect!(arr, |a: &StringArray, i| CellValue::Text(
            a.value(i).to_string()
        ));
    }
    if let Some(arr) = any.downcast_ref::<LargeStringArray>() {
        collect!(arr, |a: &LargeStringArray, i| CellValue::Text(
            a.value(i).to_string()
        ));
    }
    if let Some(arr) = any.downcast_ref::<StringViewArray>() {
        collect!(arr, |a: &StringViewArray, i| CellValue::Text(
            a.value(i).to_string()
        ));
    }
    if let Some(arr) = any.downcast_ref::<BooleanArray>() {
        collect!(arr, |a: &BooleanArray, i| CellValue::Int(
            a.value(i) as i64
        ));
    }
    if let Some(arr) = any.downcast_ref::<Date32Array>() {
        // Date32: days since the Unix epoch, promoted to midnight.
        collect!(arr, |a: &Date32Array, i| {
            match DateTime::from_timestamp(a.value(i) as i64 * 86_400, 0) {
                Some(dt) => CellValue::Timestamp(dt.naive_utc()),
                None => CellValue::Null,
            }
        });
    }
    if let Some(arr) = any.downcast_ref::<TimestampMicrosecondArray>() {
        collect!(arr, |a: &TimestampMicrosecondArray, i| {
            match DateTime::from_timestamp_micros(a.value(i)) {
                Some(dt) => CellValue::Timestamp(dt.naive_utc()),
                None => CellValue::Null,
            }
        });
    }
    if let Some(arr) = any.downcast_ref::<TimestampNanosecondArray>() {
        collect!(arr, |a: &TimestampNanosecondArray, i| CellValue::Timestamp(
            DateTime::from_timestamp_nanos(a.value(i)).naive_utc()
        ));
    }

    Err(AttestError::Infrastructure(InfrastructureError::Engine(
        EngineError::UnsupportedColumnType {
            column: column.to_string(),
            data_type: format!("{:?}", array.data_type()),
        },
    )))
}
