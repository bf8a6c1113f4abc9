//! Axis, sort direction and filter mode arguments.

use std::fmt;
use std::str::FromStr;

use crate::data::DataFrame;

use super::error::NullityError;

/// Tracing target used for deprecation notices
pub const DEPRECATION_TARGET: &str = "nullscope::deprecation";

/// A table dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// The row dimension
    Index,
    /// The column dimension
    #[default]
    Columns,
}

impl Axis {
    /// Non-null counts for every entry along this axis, in current order.
    ///
    /// `Columns` yields one count per column (counted down its rows);
    /// `Index` yields one count per row (counted across the columns).
    #[must_use]
    pub fn non_null_counts(self, df: &DataFrame) -> Vec<usize> {
        match self {
            Axis::Columns => df.column_counts(),
            Axis::Index => df.row_counts(),
        }
    }

    /// Number of entries along this axis
    #[must_use]
    pub fn len(self, df: &DataFrame) -> usize {
        match self {
            Axis::Columns => df.num_columns(),
            Axis::Index => df.num_rows(),
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Axis::Index => "index",
            Axis::Columns => "columns",
        }
    }
}

/// Parses `"index"` or `"columns"`.
///
/// `"rows"` is still accepted as an alias for `"index"`; it logs a deprecation
/// warning on the `nullscope::deprecation` target every time it is parsed.
impl FromStr for Axis {
    type Err = NullityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "index" => Ok(Axis::Index),
            "columns" => Ok(Axis::Columns),
            "rows" => {
                tracing::warn!(
                    target: DEPRECATION_TARGET,
                    "Using axis=\"rows\" is deprecated and will be removed in a future release. Use axis=\"index\" instead."
                );
                Ok(Axis::Index)
            }
            other => Err(NullityError::invalid(
                "axis",
                format!("expected \"index\" or \"columns\", got \"{other}\""),
            )),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order in which entries are arranged by completeness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Least complete first
    Ascending,
    /// Most complete first
    Descending,
}

impl FromStr for SortDirection {
    type Err = NullityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascending" => Ok(SortDirection::Ascending),
            "descending" => Ok(SortDirection::Descending),
            other => Err(NullityError::invalid(
                "sort",
                format!("expected \"ascending\" or \"descending\", got \"{other}\""),
            )),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("ascending"),
            SortDirection::Descending => f.write_str("descending"),
        }
    }
}

/// Which end of the completeness ranking a filter keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterMode {
    /// Keep the most complete columns
    Top,
    /// Keep the least complete columns
    Bottom,
}

impl FromStr for FilterMode {
    type Err = NullityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(FilterMode::Top),
            "bottom" => Ok(FilterMode::Bottom),
            other => Err(NullityError::invalid(
                "filter",
                format!("expected \"top\" or \"bottom\", got \"{other}\""),
            )),
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterMode::Top => f.write_str("top"),
            FilterMode::Bottom => f.write_str("bottom"),
        }
    }
}

/// Stable ascending ranking of positions by count.
///
/// Equal counts keep their original relative order.
pub(crate) fn ascending_order(counts: &[usize]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..counts.len()).collect();
    order.sort_by_key(|&i| counts[i]);
    order
}
