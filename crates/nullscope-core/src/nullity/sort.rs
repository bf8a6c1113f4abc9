//! Sorting a DataFrame by nullity.

use crate::data::DataFrame;

use super::error::NullityResult;
use super::options::{ascending_order, Axis, SortDirection};

/// Sort a DataFrame by its nullity.
///
/// `sort` is `"ascending"`, `"descending"` or `None`; `None` returns the
/// table unchanged without looking at `axis`. `axis` is `"index"` or
/// `"columns"` (`"rows"` is a deprecated alias for `"index"`).
///
/// # Errors
/// Returns `InvalidArgument` for an unknown `sort` or `axis` value.
pub fn nullity_sort(df: &DataFrame, sort: Option<&str>, axis: &str) -> NullityResult<DataFrame> {
    let Some(sort) = sort else {
        return Ok(df.clone());
    };

    let direction: SortDirection = sort.parse()?;
    let axis: Axis = axis.parse()?;
    sort_by_nullity(df, direction, axis)
}

/// Reorder rows or columns by their count of non-null values.
///
/// With `Axis::Columns` the columns are permuted by their non-null counts and
/// the rows stay put; with `Axis::Index` the rows are permuted by their
/// non-null counts and the columns stay put.
///
/// Descending order is the exact reverse of the stable ascending order, so
/// entries with equal counts come out in reverse of their original order.
///
/// # Errors
/// Returns error if the underlying take fails.
pub fn sort_by_nullity(
    df: &DataFrame,
    direction: SortDirection,
    axis: Axis,
) -> NullityResult<DataFrame> {
    let counts = axis.non_null_counts(df);
    let mut order = ascending_order(&counts);
    if direction == SortDirection::Descending {
        order.reverse();
    }

    let sorted = match axis {
        Axis::Columns => df.take_columns(&order)?,
        Axis::Index => df.take_rows(&order)?,
    };

    tracing::debug!(
        %direction,
        %axis,
        entries = axis.len(df),
        "sorted table by nullity"
    );
    Ok(sorted)
}
