//! Nullscope Core - nullity shaping for Arrow-backed tables
//!
//! This crate provides the data-shaping layer behind missing-value
//! visualisations:
//! - Data: Arrow-backed DataFrame and Series
//! - Sort: reorder rows or columns by completeness
//! - Filter: keep the most or least complete columns
//! - Profile: per-column and per-row nullity summaries
//! - Correlation: nullity correlation between columns
//! - Config: TOML/JSON description of a filter + sort pass

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Data module - Arrow-backed tables
pub mod data;

/// Nullity module - sorting, filtering and profiling by missing values
pub mod nullity;

pub use data::{DataError, DataFrame, DataResult, Series, Value};
pub use nullity::{
    filter_by_nullity, nullity_correlation, nullity_filter, nullity_sort, profile_nullity,
    sort_by_nullity, Axis, ColumnNullity, FilterConfig, FilterMode, NullityConfig, NullityError,
    NullityProfile, NullityResult, SortConfig, SortDirection,
};
