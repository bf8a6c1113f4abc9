//! Nullity profiling for DataFrames.

use serde::{Deserialize, Serialize};

use crate::data::DataFrame;

use super::options::ascending_order;

/// Missing-value summary of a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnNullity {
    /// Column name.
    pub name: String,
    /// Number of present values.
    pub non_null: usize,
    /// Number of missing values.
    pub null: usize,
    /// Fraction of rows with a value (0.0 when there are no rows).
    pub completeness: f64,
}

/// Profile of missing values in a DataFrame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NullityProfile {
    /// Number of rows.
    pub num_rows: usize,
    /// Number of columns.
    pub num_columns: usize,
    /// Total number of cells (rows × columns).
    pub total_cells: usize,
    /// Number of missing cells.
    pub null_cells: usize,
    /// Fraction of cells with a value (1.0 for a table without cells).
    pub completeness: f64,
    /// Per-column summary, in column order.
    pub columns: Vec<ColumnNullity>,
    /// Non-null count of every row, in row order.
    pub row_counts: Vec<usize>,
}

impl NullityProfile {
    /// Columns without any missing value.
    pub fn complete_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.null == 0)
            .map(|c| c.name.as_str())
            .collect()
    }

    /// Columns without any present value.
    pub fn empty_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.non_null == 0)
            .map(|c| c.name.as_str())
            .collect()
    }

    /// The `k` most complete columns, most complete first.
    ///
    /// Ties are ordered the same way a descending nullity sort orders them.
    pub fn most_complete(&self, k: usize) -> Vec<&str> {
        let counts: Vec<usize> = self.columns.iter().map(|c| c.non_null).collect();
        ascending_order(&counts)
            .into_iter()
            .rev()
            .take(k)
            .map(|idx| self.columns[idx].name.as_str())
            .collect()
    }

    /// Whether any cell is missing.
    pub fn has_nulls(&self) -> bool {
        self.null_cells > 0
    }
}

impl std::fmt::Display for NullityProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Nullity Profile")?;
        writeln!(f, "  Rows:          {}", self.num_rows)?;
        writeln!(f, "  Columns:       {}", self.num_columns)?;
        writeln!(f, "  Missing cells: {} of {}", self.null_cells, self.total_cells)?;
        writeln!(f, "  Completeness:  {:.2}%", self.completeness * 100.0)?;
        for column in &self.columns {
            writeln!(
                f,
                "    {:<16} {:>8} missing  {:>7.2}%",
                column.name,
                column.null,
                column.completeness * 100.0
            )?;
        }
        Ok(())
    }
}

/// Profile the missing values of a DataFrame.
pub fn profile_nullity(df: &DataFrame) -> NullityProfile {
    let num_rows = df.num_rows();
    let num_columns = df.num_columns();
    let total_cells = num_rows * num_columns;

    let columns: Vec<ColumnNullity> = df
        .columns()
        .into_iter()
        .zip(df.column_counts())
        .map(|(name, non_null)| ColumnNullity {
            name,
            non_null,
            null: num_rows - non_null,
            completeness: ratio(non_null, num_rows, 0.0),
        })
        .collect();

    let present: usize = columns.iter().map(|c| c.non_null).sum();

    NullityProfile {
        num_rows,
        num_columns,
        total_cells,
        null_cells: total_cells - present,
        completeness: ratio(present, total_cells, 1.0),
        columns,
        row_counts: df.row_counts(),
    }
}

fn ratio(part: usize, whole: usize, if_empty: f64) -> f64 {
    if whole == 0 {
        if_empty
    } else {
        part as f64 / whole as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Series;

    fn sample() -> DataFrame {
        DataFrame::from_series(vec![
            Series::from_ints("id", vec![1, 2, 3, 4]),
            Series::from_optional_floats("score", vec![Some(1.0), None, None, Some(2.0)]),
            Series::from_optional_strings("note", vec![None, None, None, None]),
            Series::from_ints("year", vec![2020, 2021, 2022, 2023]),
        ])
        .unwrap()
    }

    #[test]
    fn test_profile_counts() {
        let profile = profile_nullity(&sample());
        assert_eq!(profile.num_rows, 4);
        assert_eq!(profile.num_columns, 4);
        assert_eq!(profile.total_cells, 16);
        assert_eq!(profile.null_cells, 6);
        assert!((profile.completeness - 0.625).abs() < 1e-12);
        assert_eq!(profile.row_counts, vec![3, 2, 2, 3]);

        let score = &profile.columns[1];
        assert_eq!(score.name, "score");
        assert_eq!(score.non_null, 2);
        assert_eq!(score.null, 2);
        assert!((score.completeness - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_complete_and_empty_columns() {
        let profile = profile_nullity(&sample());
        assert_eq!(profile.complete_columns(), vec!["id", "year"]);
        assert_eq!(profile.empty_columns(), vec!["note"]);
        assert!(profile.has_nulls());
    }

    #[test]
    fn test_most_complete_follows_descending_sort() {
        let profile = profile_nullity(&sample());
        assert_eq!(profile.most_complete(3), vec!["year", "id", "score"]);
        assert!(profile.most_complete(0).is_empty());
    }

    #[test]
    fn test_profile_without_rows() {
        let df = sample().take_rows(&[]).unwrap();
        let profile = profile_nullity(&df);
        assert_eq!(profile.total_cells, 0);
        assert!((profile.completeness - 1.0).abs() < 1e-12);
        assert!(profile.columns.iter().all(|c| c.completeness == 0.0));
        assert!(!profile.has_nulls());
    }

    #[test]
    fn test_display() {
        let text = profile_nullity(&sample()).to_string();
        assert!(text.starts_with("Nullity Profile"));
        assert!(text.contains("Missing cells: 6 of 16"));
        assert!(text.contains("62.50%"));
    }
}
