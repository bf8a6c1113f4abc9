//! DataFrame: A columnar data structure backed by Apache Arrow

use std::fmt;
use std::sync::Arc;

use arrow::array::{Array, ArrayRef, RecordBatch, RecordBatchOptions, UInt32Array};
use arrow::compute::take;
use arrow::datatypes::{Field, Schema, SchemaRef};

use super::error::{DataError, DataResult};
use super::parallel::should_parallelize;
use super::series::Series;

/// A DataFrame is a two-dimensional, column-oriented data structure
/// backed by Apache Arrow.
///
/// Rows are addressed by position, columns by position or name. Any cell may
/// be null, which is what the nullity operations count.
#[derive(Clone)]
pub struct DataFrame {
    /// The Arrow schema (column names and types)
    schema: SchemaRef,
    /// The data as Arrow RecordBatches
    batches: Vec<RecordBatch>,
}

impl DataFrame {
    /// Create an empty DataFrame with a schema
    #[must_use]
    pub fn empty(schema: SchemaRef) -> Self {
        Self {
            schema,
            batches: Vec::new(),
        }
    }

    /// Create a DataFrame from a single RecordBatch
    #[must_use]
    pub fn from_batch(batch: RecordBatch) -> Self {
        let schema = batch.schema();
        Self {
            schema,
            batches: vec![batch],
        }
    }

    /// Create a DataFrame from multiple RecordBatches
    ///
    /// # Errors
    /// Returns error if batches have incompatible schemas
    pub fn from_batches(schema: SchemaRef, batches: Vec<RecordBatch>) -> DataResult<Self> {
        for (i, batch) in batches.iter().enumerate() {
            if batch.schema() != schema {
                return Err(DataError::SchemaMismatch(format!(
                    "batch {i} has incompatible schema"
                )));
            }
        }
        Ok(Self { schema, batches })
    }

    /// Create a DataFrame from a vector of Series
    ///
    /// # Errors
    /// Returns error if series have different lengths
    pub fn from_series(columns: Vec<Series>) -> DataResult<Self> {
        if columns.is_empty() {
            let schema = Arc::new(Schema::empty());
            return Ok(Self::empty(schema));
        }

        // Check all columns have the same length
        let len = columns[0].len();
        for col in &columns {
            if col.len() != len {
                return Err(DataError::SchemaMismatch(format!(
                    "column '{}' has {} rows, expected {}",
                    col.name(),
                    col.len(),
                    len
                )));
            }
        }

        let fields: Vec<Field> = columns
            .iter()
            .map(|s| Field::new(s.name(), s.data_type().clone(), true))
            .collect();

        let schema = Arc::new(Schema::new(fields));

        let arrays: Vec<ArrayRef> = columns.iter().map(|s| s.array().clone()).collect();

        let batch = RecordBatch::try_new(schema.clone(), arrays)?;

        Ok(Self {
            schema,
            batches: vec![batch],
        })
    }

    /// Get the schema
    #[must_use]
    pub fn schema(&self) -> &SchemaRef {
        &self.schema
    }

    /// Get column names
    #[must_use]
    pub fn columns(&self) -> Vec<String> {
        self.schema
            .fields()
            .iter()
            .map(|f| f.name().clone())
            .collect()
    }

    /// Get the number of columns
    #[must_use]
    pub fn num_columns(&self) -> usize {
        self.schema.fields().len()
    }

    /// Get the number of rows
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.batches.iter().map(RecordBatch::num_rows).sum()
    }

    /// Check if the DataFrame has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.num_rows() == 0
    }

    /// Get the underlying RecordBatches
    #[must_use]
    pub fn batches(&self) -> &[RecordBatch] {
        &self.batches
    }

    /// Get a column by name as a Series
    ///
    /// # Errors
    /// Returns error if column not found
    pub fn column(&self, name: &str) -> DataResult<Series> {
        let idx = self
            .schema
            .index_of(name)
            .map_err(|_| DataError::ColumnNotFound(name.to_string()))?;
        self.column_by_index(idx)
    }

    /// Get a column by index as a Series
    ///
    /// # Errors
    /// Returns error if index is out of bounds
    pub fn column_by_index(&self, index: usize) -> DataResult<Series> {
        if index >= self.num_columns() {
            return Err(DataError::InvalidColumnIndex(index));
        }

        let field = self.schema.field(index);
        let name = field.name().clone();

        if self.batches.is_empty() {
            let array = arrow::array::new_empty_array(field.data_type());
            return Ok(Series::new(name, array));
        }

        if self.batches.len() == 1 {
            let array = self.batches[0].column(index).clone();
            return Ok(Series::new(name, array));
        }

        // Multiple batches - need to concatenate
        let arrays: Vec<&dyn Array> = self
            .batches
            .iter()
            .map(|b| b.column(index).as_ref())
            .collect();
        let concatenated = arrow::compute::concat(&arrays)?;
        Ok(Series::new(name, concatenated))
    }

    /// Iterate over columns, returning each column as a Series
    pub fn iter_columns(&self) -> impl Iterator<Item = DataResult<Series>> + '_ {
        (0..self.num_columns()).map(move |i| self.column_by_index(i))
    }

    /// Get the first n rows
    ///
    /// # Errors
    /// Returns error if slicing fails
    pub fn head(&self, n: usize) -> DataResult<Self> {
        let take_rows = n.min(self.num_rows());

        if take_rows == 0 {
            return Ok(Self::empty(self.schema.clone()));
        }

        let mut remaining = take_rows;
        let mut new_batches = Vec::new();

        for batch in &self.batches {
            if remaining == 0 {
                break;
            }

            let batch_rows = batch.num_rows();
            if batch_rows <= remaining {
                new_batches.push(batch.clone());
                remaining -= batch_rows;
            } else {
                new_batches.push(batch.slice(0, remaining));
                remaining = 0;
            }
        }

        Ok(Self {
            schema: self.schema.clone(),
            batches: new_batches,
        })
    }

    /// Build a DataFrame from the columns at the given positions, in that order
    ///
    /// Column arrays are shared, not copied. The row count is preserved even
    /// when no column is selected.
    ///
    /// # Errors
    /// Returns error if any position is out of bounds
    pub fn take_columns(&self, positions: &[usize]) -> DataResult<Self> {
        let num_columns = self.num_columns();
        if let Some(&bad) = positions.iter().find(|&&p| p >= num_columns) {
            return Err(DataError::InvalidColumnIndex(bad));
        }

        let schema = Arc::new(self.schema.project(positions)?);
        let batches = self
            .batches
            .iter()
            .map(|batch| batch.project(positions))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { schema, batches })
    }

    /// Build a DataFrame from the rows at the given positions, in that order
    ///
    /// # Errors
    /// Returns error if any position is out of bounds
    pub fn take_rows(&self, positions: &[usize]) -> DataResult<Self> {
        let num_rows = self.num_rows();
        if let Some(&bad) = positions.iter().find(|&&p| p >= num_rows) {
            return Err(DataError::OutOfBounds {
                index: bad,
                length: num_rows,
            });
        }

        if positions.is_empty() {
            return Ok(Self::empty(self.schema.clone()));
        }

        let indices = positions
            .iter()
            .map(|&p| {
                u32::try_from(p).map_err(|_| DataError::OutOfBounds {
                    index: p,
                    length: u32::MAX as usize,
                })
            })
            .collect::<DataResult<Vec<u32>>>()?;
        let indices = UInt32Array::from(indices);

        let mut arrays = Vec::with_capacity(self.num_columns());
        for series in self.iter_columns() {
            arrays.push(take(series?.array(), &indices, None)?);
        }

        let options = RecordBatchOptions::new().with_row_count(Some(positions.len()));
        let batch = RecordBatch::try_new_with_options(self.schema.clone(), arrays, &options)?;
        Ok(Self::from_batch(batch))
    }

    /// Count non-null cells in each column, in column order
    #[must_use]
    pub fn column_counts(&self) -> Vec<usize> {
        (0..self.num_columns())
            .map(|idx| {
                self.batches
                    .iter()
                    .map(|batch| {
                        let array = batch.column(idx);
                        array.len() - array.logical_null_count()
                    })
                    .sum()
            })
            .collect()
    }

    /// Count non-null cells in each row, in row order
    ///
    /// Runs in parallel across columns once the table exceeds the global
    /// parallel threshold.
    #[must_use]
    pub fn row_counts(&self) -> Vec<usize> {
        if should_parallelize(self.num_rows() * self.num_columns()) {
            self.row_counts_parallel()
        } else {
            self.row_counts_sequential()
        }
    }

    fn row_counts_sequential(&self) -> Vec<usize> {
        let mut counts = vec![0usize; self.num_rows()];
        let mut offset = 0;
        for batch in &self.batches {
            for column in batch.columns() {
                accumulate_valid(column, &mut counts[offset..offset + batch.num_rows()]);
            }
            offset += batch.num_rows();
        }
        counts
    }

    fn row_counts_parallel(&self) -> Vec<usize> {
        use rayon::prelude::*;

        let num_rows = self.num_rows();
        let mut offsets = Vec::with_capacity(self.batches.len());
        let mut offset = 0;
        for batch in &self.batches {
            offsets.push(offset);
            offset += batch.num_rows();
        }

        let columns: Vec<(usize, &ArrayRef)> = self
            .batches
            .iter()
            .zip(offsets)
            .flat_map(|(batch, start)| batch.columns().iter().map(move |col| (start, col)))
            .collect();

        columns
            .into_par_iter()
            .fold(
                || vec![0usize; num_rows],
                |mut acc, (start, column)| {
                    accumulate_valid(column, &mut acc[start..start + column.len()]);
                    acc
                },
            )
            .reduce(
                || vec![0usize; num_rows],
                |mut left, right| {
                    for (l, r) in left.iter_mut().zip(right) {
                        *l += r;
                    }
                    left
                },
            )
    }

    /// Pretty print the DataFrame for display
    #[must_use]
    pub fn to_pretty_string(&self, max_rows: usize) -> String {
        use arrow::util::pretty::pretty_format_batches;

        if self.batches.is_empty() {
            return format!("Empty DataFrame with columns: {:?}", self.columns());
        }

        let display_df = match self.head(max_rows) {
            Ok(df) => df,
            Err(_) => return "Error formatting DataFrame".to_string(),
        };

        match pretty_format_batches(&display_df.batches) {
            Ok(table) => {
                let total = self.num_rows();
                if total > max_rows {
                    format!("{table}\n... showing {max_rows} of {total} rows")
                } else {
                    table.to_string()
                }
            }
            Err(e) => format!("Error formatting: {e}"),
        }
    }
}

/// Add one to every slot of `counts` whose cell in `column` is present
fn accumulate_valid(column: &ArrayRef, counts: &mut [usize]) {
    match column.logical_nulls() {
        Some(nulls) => {
            for (slot, valid) in counts.iter_mut().zip(nulls.iter()) {
                *slot += usize::from(valid);
            }
        }
        None => {
            for slot in counts.iter_mut() {
                *slot += 1;
            }
        }
    }
}

impl PartialEq for DataFrame {
    fn eq(&self, other: &Self) -> bool {
        if self.schema != other.schema || self.num_rows() != other.num_rows() {
            return false;
        }
        (0..self.num_columns()).all(|idx| {
            match (self.column_by_index(idx), other.column_by_index(idx)) {
                (Ok(left), Ok(right)) => left == right,
                _ => false,
            }
        })
    }
}

impl fmt::Debug for DataFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataFrame")
            .field("columns", &self.columns())
            .field("rows", &self.num_rows())
            .field("batches", &self.batches.len())
            .finish()
    }
}

impl fmt::Display for DataFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_pretty_string(20))
    }
}
