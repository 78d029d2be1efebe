// attest-core/src/domain/metrics/nulls.rs

use serde::{Deserialize, Serialize};

use crate::domain::batch::CellValue;

/// Null-handling policy for column-pair metrics.
///
/// Filtering always removes whole row pairs, never independent elements, so
/// the two filtered columns stay pairwise aligned.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreRowIf {
    BothValuesAreMissing,
    EitherValueIsMissing,
    Never,
}

impl Default for IgnoreRowIf {
    fn default() -> Self {
        Self::BothValuesAreMissing
    }
}

impl IgnoreRowIf {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BothValuesAreMissing => "both_values_are_missing",
            Self::EitherValueIsMissing => "either_value_is_missing",
            Self::Never => "never",
        }
    }

    fn drops(&self, a: &CellValue, b: &CellValue) -> bool {
        match self {
            Self::BothValuesAreMissing => a.is_null() && b.is_null(),
            Self::EitherValueIsMissing => a.is_null() || b.is_null(),
            Self::Never => false,
        }
    }
}

/// Applies the null policy to a column pair, keeping row pairs aligned.
pub fn filter_pair_nulls(
    column_a: &[CellValue],
    column_b: &[CellValue],
    ignore_row_if: IgnoreRowIf,
) -> (Vec<CellValue>, Vec<CellValue>) {
    let mut kept_a = Vec::with_capacity(column_a.len());
    let mut kept_b = Vec::with_capacity(column_b.len());

    for (a, b) in column_a.iter().zip(column_b.iter()) {
        if !ignore_row_if.drops(a, b) {
            kept_a.push(a.clone());
            kept_b.push(b.clone());
        }
    }

    (kept_a, kept_b)
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    fn pair() -> (Vec<CellValue>, Vec<CellValue>) {
        (
            vec![
                CellValue::Int(1),
                CellValue::Null,
                CellValue::Int(3),
                CellValue::Null,
            ],
            vec![
                CellValue::Int(1),
                CellValue::Null,
                CellValue::Null,
                CellValue::Int(4),
            ],
        )
    }

    #[test]
    fn test_both_values_are_missing_drops_only_double_nulls() {
        let (a, b) = pair();
        let (fa, fb) = filter_pair_nulls(&a, &b, IgnoreRowIf::BothValuesAreMissing);
        assert_eq!(fa.len(), 3);
        assert_eq!(fb.len(), 3);
        // Row 2 (Int(3), Null) and row 3 (Null, Int(4)) survive.
        assert_eq!(fa[1], CellValue::Int(3));
        assert_eq!(fb[2], CellValue::Int(4));
    }

    #[test]
    fn test_either_value_is_missing_drops_any_null() {
        let (a, b) = pair();
        let (fa, fb) = filter_pair_nulls(&a, &b, IgnoreRowIf::EitherValueIsMissing);
        assert_eq!(fa, vec![CellValue::Int(1)]);
        assert_eq!(fb, vec![CellValue::Int(1)]);
    }

    #[test]
    fn test_never_keeps_everything() {
        let (a, b) = pair();
        let (fa, fb) = filter_pair_nulls(&a, &b, IgnoreRowIf::Never);
        assert_eq!(fa.len(), 4);
        assert_eq!(fb.len(), 4);
    }

    #[test]
    fn test_filtering_preserves_pairwise_alignment() {
        let a = vec![CellValue::Int(10), CellValue::Null, CellValue::Int(30)];
        let b = vec![CellValue::Int(11), CellValue::Null, CellValue::Int(31)];
        let (fa, fb) = filter_pair_nulls(&a, &b, IgnoreRowIf::BothValuesAreMissing);
        for (x, y) in fa.iter().zip(fb.iter()) {
            // Each surviving truth element keeps its original partner.
            let (CellValue::Int(x), CellValue::Int(y)) = (x, y) else {
                panic!("unexpected variant");
            };
            assert_eq!(x + 1, *y);
        }
    }

    #[test]
    fn test_policy_wire_names() {
        let parsed: IgnoreRowIf =
            serde_yaml::from_str("either_value_is_missing").expect("valid policy name");
        assert_eq!(parsed, IgnoreRowIf::EitherValueIsMissing);
        assert_eq!(IgnoreRowIf::default(), IgnoreRowIf::BothValuesAreMissing);
    }
}
