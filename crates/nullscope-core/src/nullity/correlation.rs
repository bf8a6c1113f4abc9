//! Nullity correlation between columns.

use crate::data::{DataError, DataFrame, Series};

use super::error::NullityResult;

/// Name of the leading column that labels each row of the matrix
pub const LABEL_COLUMN: &str = "column";

/// Correlation matrix of the columns' null indicators.
///
/// Each column is turned into a 0/1 "is missing" indicator. Columns whose
/// indicator is constant (entirely present or entirely missing) carry no
/// information and are left out. The result has a leading [`LABEL_COLUMN`]
/// column followed by one Float64 column of Pearson coefficients per
/// remaining column: values near 1 mean two columns tend to be missing
/// together, values near -1 that one is present when the other is missing.
///
/// # Errors
/// Returns error if a column cannot be read, or if a correlated column is
/// itself named [`LABEL_COLUMN`].
pub fn nullity_correlation(df: &DataFrame) -> NullityResult<DataFrame> {
    let mut indicators: Vec<(String, Vec<f64>)> = Vec::new();
    for series in df.iter_columns() {
        let series = series?;
        let null_count = series.null_count();
        if null_count == 0 || null_count == series.len() {
            continue;
        }
        indicators.push((series.name().to_string(), centered(series.null_indicator())));
    }

    if indicators.iter().any(|(name, _)| name == LABEL_COLUMN) {
        return Err(DataError::InvalidOperation(format!(
            "column name '{LABEL_COLUMN}' is reserved for the correlation labels"
        ))
        .into());
    }

    let names: Vec<&str> = indicators.iter().map(|(name, _)| name.as_str()).collect();
    let mut result_columns = vec![Series::from_strings(LABEL_COLUMN, names)];

    for (name, left) in &indicators {
        let coefficients: Vec<f64> = indicators
            .iter()
            .map(|(_, right)| pearson(left, right))
            .collect();
        result_columns.push(Series::from_floats(name.as_str(), coefficients));
    }

    tracing::debug!(
        columns = df.num_columns(),
        correlated = indicators.len(),
        "computed nullity correlation"
    );
    Ok(DataFrame::from_series(result_columns)?)
}

/// Subtract the mean from every value
fn centered(mut values: Vec<f64>) -> Vec<f64> {
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    for value in &mut values {
        *value -= mean;
    }
    values
}

/// Pearson correlation of two already-centred vectors with non-zero variance
fn pearson(left: &[f64], right: &[f64]) -> f64 {
    let mut cross = 0.0;
    let mut left_sq = 0.0;
    let mut right_sq = 0.0;
    for (l, r) in left.iter().zip(right) {
        cross += l * r;
        left_sq += l * l;
        right_sq += r * r;
    }
    cross / (left_sq * right_sq).sqrt()
}
