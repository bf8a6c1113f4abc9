//! Filtering DataFrame columns by nullity.

use crate::data::DataFrame;

use super::error::{NullityError, NullityResult};
use super::options::{ascending_order, FilterMode};

/// Filter a DataFrame's columns by their nullity.
///
/// `filter` is `"top"`, `"bottom"` or `None`; `None` (or an empty string)
/// returns the table unchanged. `p` is a completeness cut-off in `[0, 1]` and
/// `n` a maximum column count; zero disables either. Both may be given, in
/// which case the ratio cut-off runs first and the count cap applies to what
/// survives it: `nullity_filter(df, Some("top"), 0.75, 5)` keeps at most five
/// columns that are each at least 75% complete.
///
/// # Errors
/// Returns `InvalidArgument` for an unknown `filter` value or a `p` outside `[0, 1]`.
pub fn nullity_filter(
    df: &DataFrame,
    filter: Option<&str>,
    p: f64,
    n: usize,
) -> NullityResult<DataFrame> {
    match filter {
        None | Some("") => Ok(df.clone()),
        Some(mode) => filter_by_nullity(df, mode.parse()?, p, n),
    }
}

/// Keep the most (`Top`) or least (`Bottom`) complete columns.
///
/// Surviving columns keep their original relative order; rows are never
/// removed. With no rows the completeness ratio is undefined and a non-zero
/// `p` keeps no column.
///
/// # Errors
/// Returns `InvalidArgument` if `p` is outside `[0, 1]`.
pub fn filter_by_nullity(
    df: &DataFrame,
    mode: FilterMode,
    p: f64,
    n: usize,
) -> NullityResult<DataFrame> {
    if !(0.0..=1.0).contains(&p) {
        return Err(NullityError::invalid(
            "p",
            format!("completeness ratio must be between 0 and 1, got {p}"),
        ));
    }

    let mut filtered = df.clone();

    if p != 0.0 {
        let num_rows = filtered.num_rows() as f64;
        let keep: Vec<usize> = filtered
            .column_counts()
            .into_iter()
            .enumerate()
            .filter(|&(_, count)| {
                let ratio = count as f64 / num_rows;
                match mode {
                    FilterMode::Top => ratio >= p,
                    FilterMode::Bottom => ratio <= p,
                }
            })
            .map(|(idx, _)| idx)
            .collect();
        filtered = filtered.take_columns(&keep)?;
    }

    if n != 0 {
        let ranking = ascending_order(&filtered.column_counts());
        let mut keep = match mode {
            FilterMode::Top => ranking[ranking.len().saturating_sub(n)..].to_vec(),
            FilterMode::Bottom => ranking[..n.min(ranking.len())].to_vec(),
        };
        keep.sort_unstable();
        filtered = filtered.take_columns(&keep)?;
    }

    tracing::debug!(
        %mode,
        p,
        n,
        before = df.num_columns(),
        after = filtered.num_columns(),
        "filtered columns by nullity"
    );
    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Series;

    /// Four rows; A and D complete, B half, C one value.
    fn scenario() -> DataFrame {
        DataFrame::from_series(vec![
            Series::from_ints("A", vec![1, 2, 3, 4]),
            Series::from_optional_ints("B", vec![Some(1), None, Some(3), None]),
            Series::from_optional_ints("C", vec![None, None, None, Some(4)]),
            Series::from_ints("D", vec![5, 6, 7, 8]),
        ])
        .unwrap()
    }

    #[test]
    fn test_no_mode_is_identity() {
        let df = scenario();
        assert_eq!(nullity_filter(&df, None, 0.5, 2).unwrap(), df);
        assert_eq!(nullity_filter(&df, Some(""), 0.5, 2).unwrap(), df);
    }

    #[test]
    fn test_top_ratio() {
        let filtered = nullity_filter(&scenario(), Some("top"), 0.5, 0).unwrap();
        assert_eq!(filtered.columns(), vec!["A", "B", "D"]);
        assert_eq!(filtered.num_rows(), 4);
    }

    #[test]
    fn test_bottom_ratio() {
        let filtered = nullity_filter(&scenario(), Some("bottom"), 0.5, 0).unwrap();
        assert_eq!(filtered.columns(), vec!["B", "C"]);
    }

    #[test]
    fn test_top_count_keeps_original_order() {
        let filtered = nullity_filter(&scenario(), Some("top"), 0.0, 2).unwrap();
        assert_eq!(filtered.columns(), vec!["A", "D"]);
    }

    #[test]
    fn test_bottom_count() {
        let filtered = nullity_filter(&scenario(), Some("bottom"), 0.0, 2).unwrap();
        assert_eq!(filtered.columns(), vec!["B", "C"]);
    }

    #[test]
    fn test_top_count_tie_drops_earlier_column() {
        // ranking is [C, B, A, D]; the last three are B, A, D
        let filtered = nullity_filter(&scenario(), Some("top"), 0.0, 3).unwrap();
        assert_eq!(filtered.columns(), vec!["A", "B", "D"]);

        // only one of the tied complete columns fits: the later one wins
        let filtered = nullity_filter(&scenario(), Some("top"), 0.0, 1).unwrap();
        assert_eq!(filtered.columns(), vec!["D"]);
    }

    #[test]
    fn test_count_larger_than_width() {
        let filtered = nullity_filter(&scenario(), Some("bottom"), 0.0, 10).unwrap();
        assert_eq!(filtered.columns(), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_ratio_then_count() {
        // ratio keeps A, B, D; the cap of 2 then keeps the complete pair
        let filtered = nullity_filter(&scenario(), Some("top"), 0.5, 2).unwrap();
        assert_eq!(filtered.columns(), vec!["A", "D"]);

        // only C is at most 25% complete, so the cap has nothing to trim
        let filtered = nullity_filter(&scenario(), Some("bottom"), 0.25, 3).unwrap();
        assert_eq!(filtered.columns(), vec!["C"]);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let err = nullity_filter(&scenario(), Some("middle"), 0.0, 0).unwrap_err();
        assert!(matches!(
            err,
            NullityError::InvalidArgument {
                parameter: "filter",
                ..
            }
        ));
    }

    #[test]
    fn test_ratio_out_of_range() {
        for p in [-0.1, 1.5, f64::NAN] {
            let err = filter_by_nullity(&scenario(), FilterMode::Top, p, 0).unwrap_err();
            assert!(matches!(
                err,
                NullityError::InvalidArgument { parameter: "p", .. }
            ));
        }
    }

    #[test]
    fn test_zero_rows_ratio_keeps_nothing() {
        let df = scenario().take_rows(&[]).unwrap();
        let filtered = filter_by_nullity(&df, FilterMode::Top, 0.5, 0).unwrap();
        assert_eq!(filtered.num_columns(), 0);

        let filtered = filter_by_nullity(&df, FilterMode::Top, 0.0, 2).unwrap();
        assert_eq!(filtered.num_columns(), 2);
    }
}
