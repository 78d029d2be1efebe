// attest-core/src/domain/metrics/datetime.rs

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::domain::batch::CellValue;
use crate::domain::error::DomainError;

// Layouts tried in order after RFC 3339. Dates are promoted to midnight.
const DATETIME_LAYOUTS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];
const DATE_LAYOUTS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parses one datetime string. Offset-carrying inputs are normalized to UTC.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    for layout in DATETIME_LAYOUTS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, layout) {
            return Some(dt);
        }
    }
    for layout in DATE_LAYOUTS {
        if let Ok(d) = NaiveDate::parse_from_str(value, layout) {
            return Some(d.and_hms_opt(0, 0, 0)?);
        }
    }
    None
}

/// Element-wise datetime coercion of a column.
///
/// Text cells are parsed; timestamps pass through; nulls pass through (the
/// null policy runs before this transform). Any other cell, or any
/// unparseable text, is a propagated error — values are never skipped or
/// nulled out.
pub fn parse_column_as_datetimes(column: &[CellValue]) -> Result<Vec<CellValue>, DomainError> {
    column
        .iter()
        .enumerate()
        .map(|(row, cell)| match cell {
            CellValue::Text(s) => parse_datetime(s)
                .map(CellValue::Timestamp)
                .ok_or_else(|| DomainError::DatetimeParse {
                    value: s.clone(),
                    row,
                }),
            CellValue::Timestamp(ts) => Ok(CellValue::Timestamp(*ts)),
            CellValue::Null => Ok(CellValue::Null),
            other => Err(DomainError::DatetimeParse {
                value: other.to_string(),
                row,
            }),
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_common_layouts() {
        for input in [
            "2024-03-01T12:30:00Z",
            "2024-03-01 12:30:00",
            "2024-03-01T12:30:00.250",
            "2024-03-01",
            "2024/03/01",
            "03/01/2024",
        ] {
            assert!(parse_datetime(input).is_some(), "failed on {input}");
        }
    }

    #[test]
    fn test_rfc3339_offset_normalized_to_utc() {
        let dt = parse_datetime("2024-03-01T12:00:00+02:00").unwrap();
        assert_eq!(dt.format("%H").to_string(), "10");
    }

    #[test]
    fn test_column_coercion_keeps_order() {
        let col = vec![
            CellValue::Text("2024-01-02".into()),
            CellValue::Null,
            CellValue::Text("2024-01-03T00:00:00Z".into()),
        ];
        let parsed = parse_column_as_datetimes(&col).unwrap();
        assert!(matches!(parsed[0], CellValue::Timestamp(_)));
        assert!(parsed[1].is_null());
        assert!(matches!(parsed[2], CellValue::Timestamp(_)));
    }

    #[test]
    fn test_unparseable_value_propagates() {
        let col = vec![
            CellValue::Text("2024-01-02".into()),
            CellValue::Text("not a date".into()),
        ];
        let res = parse_column_as_datetimes(&col);
        assert!(matches!(
            res,
            Err(DomainError::DatetimeParse { row: 1, .. })
        ));
    }

    #[test]
    fn test_non_text_cell_is_a_parse_error() {
        let res = parse_column_as_datetimes(&[CellValue::Int(42)]);
        assert!(matches!(res, Err(DomainError::DatetimeParse { row: 0, .. })));
    }
}
