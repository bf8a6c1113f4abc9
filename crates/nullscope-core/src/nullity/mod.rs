//! Nullity operations over DataFrames
//!
//! Everything here works from non-null counts along one axis of a table:
//! - `sort`: reorder rows or columns by completeness
//! - `filter`: keep the most or least complete columns
//! - `profile`: summarise missing values per column and per row
//! - `correlation`: how the missingness of columns co-varies
//! - `config`: a serialisable filter + sort pass

mod config;
mod correlation;
mod error;
mod filter;
mod options;
mod profile;
mod sort;

pub use config::{FilterConfig, NullityConfig, SortConfig};
pub use correlation::{nullity_correlation, LABEL_COLUMN};
pub use error::{NullityError, NullityResult};
pub use filter::{filter_by_nullity, nullity_filter};
pub use options::{Axis, FilterMode, SortDirection, DEPRECATION_TARGET};
pub use profile::{profile_nullity, ColumnNullity, NullityProfile};
pub use sort::{nullity_sort, sort_by_nullity};
