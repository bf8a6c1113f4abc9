//! Series: A single column of data backed by Arrow arrays

use std::fmt;
use std::sync::Arc;

use arrow::array::{
    Array, ArrayRef, AsArray, BooleanArray, Float64Array, Int64Array, StringArray,
};
use arrow::datatypes::{DataType, Float64Type, Int32Type, Int64Type};

use super::error::{DataError, DataResult};
use super::value::Value;

/// A single column of homogeneous data backed by an Arrow array
#[derive(Clone)]
pub struct Series {
    /// Column name
    name: String,
    /// The underlying Arrow array (reference-counted for zero-copy)
    array: ArrayRef,
}

impl Series {
    /// Create a new Series from an Arrow array
    #[must_use]
    pub fn new(name: impl Into<String>, array: ArrayRef) -> Self {
        Self {
            name: name.into(),
            array,
        }
    }

    /// Create a Series from a vector of integers
    #[must_use]
    pub fn from_ints(name: impl Into<String>, values: Vec<i64>) -> Self {
        let array = Arc::new(Int64Array::from(values)) as ArrayRef;
        Self::new(name, array)
    }

    /// Create a Series from a vector of floats
    #[must_use]
    pub fn from_floats(name: impl Into<String>, values: Vec<f64>) -> Self {
        let array = Arc::new(Float64Array::from(values)) as ArrayRef;
        Self::new(name, array)
    }

    /// Create a Series from a vector of booleans
    #[must_use]
    pub fn from_bools(name: impl Into<String>, values: Vec<bool>) -> Self {
        let array = Arc::new(BooleanArray::from(values)) as ArrayRef;
        Self::new(name, array)
    }

    /// Create a Series from a vector of strings
    #[must_use]
    pub fn from_strings(name: impl Into<String>, values: Vec<&str>) -> Self {
        let array = Arc::new(StringArray::from(values)) as ArrayRef;
        Self::new(name, array)
    }

    /// Create a Series from a vector of optional integers
    #[must_use]
    pub fn from_optional_ints(name: impl Into<String>, values: Vec<Option<i64>>) -> Self {
        let array = Arc::new(Int64Array::from(values)) as ArrayRef;
        Self::new(name, array)
    }

    /// Create a Series from a vector of optional floats
    #[must_use]
    pub fn from_optional_floats(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        let array = Arc::new(Float64Array::from(values)) as ArrayRef;
        Self::new(name, array)
    }

    /// Create a Series from a vector of optional strings
    #[must_use]
    pub fn from_optional_strings(name: impl Into<String>, values: Vec<Option<&str>>) -> Self {
        let array = Arc::new(StringArray::from(values)) as ArrayRef;
        Self::new(name, array)
    }

    /// Get the column name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of elements
    #[must_use]
    pub fn len(&self) -> usize {
        self.array.len()
    }

    /// Check if the series is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Get the Arrow data type
    #[must_use]
    pub fn data_type(&self) -> &DataType {
        self.array.data_type()
    }

    /// Get the underlying Arrow array
    #[must_use]
    pub fn array(&self) -> &ArrayRef {
        &self.array
    }

    /// Get the number of null values
    ///
    /// Uses logical nulls so that `Null`-typed and dictionary columns count correctly.
    #[must_use]
    pub fn null_count(&self) -> usize {
        self.array.logical_null_count()
    }

    /// Count non-null values
    #[must_use]
    pub fn count(&self) -> usize {
        self.len() - self.null_count()
    }

    /// Check if a value at index is null
    #[must_use]
    pub fn is_null(&self, index: usize) -> bool {
        self.array
            .logical_nulls()
            .is_some_and(|nulls| nulls.is_null(index))
    }

    /// Null indicator for every entry: 1.0 where missing, 0.0 where present
    #[must_use]
    pub fn null_indicator(&self) -> Vec<f64> {
        match self.array.logical_nulls() {
            Some(nulls) => nulls
                .iter()
                .map(|valid| if valid { 0.0 } else { 1.0 })
                .collect(),
            None => vec![0.0; self.len()],
        }
    }

    /// Get a value at the given index
    ///
    /// # Errors
    /// Returns error if index is out of bounds or the type is unsupported
    pub fn get(&self, index: usize) -> DataResult<Value> {
        if index >= self.len() {
            return Err(DataError::OutOfBounds {
                index,
                length: self.len(),
            });
        }

        if self.is_null(index) {
            return Ok(Value::Null);
        }

        match self.array.data_type() {
            DataType::Int64 => Ok(Value::Int(
                self.array.as_primitive::<Int64Type>().value(index),
            )),
            DataType::Int32 => Ok(Value::Int(i64::from(
                self.array.as_primitive::<Int32Type>().value(index),
            ))),
            DataType::Float64 => Ok(Value::Float(
                self.array.as_primitive::<Float64Type>().value(index),
            )),
            DataType::Boolean => Ok(Value::Bool(self.array.as_boolean().value(index))),
            DataType::Utf8 => Ok(Value::string(
                self.array.as_string::<i32>().value(index),
            )),
            other => Err(DataError::InvalidOperation(format!(
                "cannot get value of type {other:?}"
            ))),
        }
    }

    /// Convert to a vector of Values
    ///
    /// # Errors
    /// Returns error if conversion fails
    pub fn to_values(&self) -> DataResult<Vec<Value>> {
        (0..self.len()).map(|i| self.get(i)).collect()
    }
}

impl fmt::Debug for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Series")
            .field("name", &self.name)
            .field("dtype", self.data_type())
            .field("len", &self.len())
            .field("nulls", &self.null_count())
            .finish()
    }
}

impl PartialEq for Series {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.array.as_ref() == other.array.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_with_nulls() {
        let series = Series::from_optional_ints("a", vec![Some(1), None, Some(3), None]);
        assert_eq!(series.len(), 4);
        assert_eq!(series.null_count(), 2);
        assert_eq!(series.count(), 2);
        assert!(series.is_null(1));
        assert!(!series.is_null(2));
    }

    #[test]
    fn test_get_values() {
        let series = Series::from_optional_strings("s", vec![Some("x"), None]);
        assert_eq!(series.get(0).unwrap(), Value::string("x"));
        assert_eq!(series.get(1).unwrap(), Value::Null);
        assert!(matches!(
            series.get(2),
            Err(DataError::OutOfBounds { index: 2, length: 2 })
        ));
    }

    #[test]
    fn test_null_indicator() {
        let series = Series::from_optional_floats("f", vec![None, Some(1.0), None]);
        assert_eq!(series.null_indicator(), vec![1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_equality_includes_name() {
        let a = Series::from_ints("a", vec![1, 2]);
        let b = Series::from_ints("a", vec![1, 2]);
        let c = Series::from_ints("b", vec![1, 2]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
