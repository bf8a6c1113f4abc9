//! Data operations module for Nullscope
//!
//! This module provides:
//! - DataFrame: Apache Arrow-backed columnar data structure
//! - Series: Single column representation
//! - Value: Cell view used when reading individual entries
//! - Parallel threshold used by whole-table scans

mod dataframe;
mod error;
mod parallel;
mod series;
mod value;

pub use dataframe::DataFrame;
pub use error::{DataError, DataResult};
pub use parallel::{parallel_threshold, set_parallel_threshold};
pub use series::Series;
pub use value::Value;
