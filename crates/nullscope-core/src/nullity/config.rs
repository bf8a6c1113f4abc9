//! Serialisable description of a filter + sort pass.
//!
//! ```toml
//! [filter]
//! mode = "top"
//! p = 0.75
//! n = 5
//!
//! [sort]
//! direction = "descending"
//! axis = "columns"
//! ```

use serde::{Deserialize, Serialize};

use crate::data::DataFrame;

use super::error::{NullityError, NullityResult};
use super::filter::nullity_filter;
use super::sort::nullity_sort;

/// A filter pass followed by a sort pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NullityConfig {
    /// Column filter settings.
    #[serde(default)]
    pub filter: FilterConfig,

    /// Sort settings.
    #[serde(default)]
    pub sort: SortConfig,
}

/// Arguments of `nullity_filter`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
    /// `"top"`, `"bottom"`, or unset to skip filtering.
    #[serde(default)]
    pub mode: Option<String>,

    /// Completeness cut-off; 0 disables it.
    #[serde(default)]
    pub p: f64,

    /// Maximum number of columns; 0 disables it.
    #[serde(default)]
    pub n: usize,
}

/// Arguments of `nullity_sort`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SortConfig {
    /// `"ascending"`, `"descending"`, or unset to skip sorting.
    #[serde(default)]
    pub direction: Option<String>,

    /// `"index"` or `"columns"`.
    #[serde(default = "default_axis")]
    pub axis: String,
}

fn default_axis() -> String {
    "columns".to_string()
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            direction: None,
            axis: default_axis(),
        }
    }
}

impl NullityConfig {
    /// Parse a config from TOML.
    pub fn from_toml_str(content: &str) -> NullityResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a config from JSON.
    pub fn from_json_str(content: &str) -> NullityResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Serialise the config as TOML.
    pub fn to_toml_string(&self) -> NullityResult<String> {
        toml::to_string(self).map_err(|e| NullityError::Config(e.to_string()))
    }

    /// Whether applying this config leaves a table untouched.
    pub fn is_noop(&self) -> bool {
        matches!(self.filter.mode.as_deref(), None | Some("")) && self.sort.direction.is_none()
    }

    /// Filter, then sort, a DataFrame.
    ///
    /// # Errors
    /// Returns `InvalidArgument` for any unknown mode, direction or axis, or
    /// an out-of-range ratio.
    pub fn apply(&self, df: &DataFrame) -> NullityResult<DataFrame> {
        let filtered = nullity_filter(df, self.filter.mode.as_deref(), self.filter.p, self.filter.n)?;
        nullity_sort(&filtered, self.sort.direction.as_deref(), &self.sort.axis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Series;

    fn sample() -> DataFrame {
        DataFrame::from_series(vec![
            Series::from_ints("A", vec![1, 2, 3, 4]),
            Series::from_optional_ints("B", vec![Some(1), None, Some(3), None]),
            Series::from_optional_ints("C", vec![None, None, None, Some(4)]),
            Series::from_optional_ints("D", vec![Some(5), Some(6), Some(7), None]),
        ])
        .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = NullityConfig::from_toml_str("").unwrap();
        assert_eq!(config, NullityConfig::default());
        assert_eq!(config.sort.axis, "columns");
        assert!(config.is_noop());
        assert_eq!(config.apply(&sample()).unwrap(), sample());
    }

    #[test]
    fn test_toml_filter_then_sort() {
        let config = NullityConfig::from_toml_str(
            r#"
            [filter]
            mode = "top"
            p = 0.5

            [sort]
            direction = "ascending"
            "#,
        )
        .unwrap();
        assert!(!config.is_noop());

        let result = config.apply(&sample()).unwrap();
        assert_eq!(result.columns(), vec!["B", "D", "A"]);
    }

    #[test]
    fn test_json_config() {
        let config = NullityConfig::from_json_str(
            r#"{"filter": {"mode": "bottom", "n": 2}, "sort": {"direction": "descending", "axis": "index"}}"#,
        )
        .unwrap();
        assert_eq!(config.filter.n, 2);
        assert_eq!(config.sort.axis, "index");

        let result = config.apply(&sample()).unwrap();
        assert_eq!(result.columns(), vec!["B", "C"]);
        assert_eq!(result.row_counts(), vec![1, 1, 1, 0]);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = NullityConfig::from_toml_str("[filter]\nthreshold = 0.5\n").unwrap_err();
        assert!(matches!(err, NullityError::Config(_)));
    }

    #[test]
    fn test_invalid_values_surface_on_apply() {
        let config = NullityConfig::from_toml_str("[sort]\ndirection = \"up\"\n").unwrap();
        assert!(matches!(
            config.apply(&sample()),
            Err(NullityError::InvalidArgument { parameter: "sort", .. })
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = NullityConfig::default();
        config.filter.mode = Some("top".to_string());
        config.filter.n = 3;
        let text = config.to_toml_string().unwrap();
        assert_eq!(NullityConfig::from_toml_str(&text).unwrap(), config);
    }
}
