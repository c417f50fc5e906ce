//! `rlike::data_frame::column::Column` defines the column type enumeration
//! and methods for matching types and dispatching actions on column data.
//!
//! Column methods generally all entail `match` statements to dispatch
//! column operations to the correct typed action. These create little
//! overhead since they are only called once per column per operation.

// modules
mod deserialize;
pub mod get;
mod query;

// dependencies
use std::fmt::{Display, Formatter};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use super::error::{DataFrameError, Result};

/* -----------------------------------------------------------------------------
Column data type enumeration, i.e., all row values for a column as Vec<Option<T>>
----------------------------------------------------------------------------- */
/// The `Column` enum defines the column type enumeration and methods for matching types.
#[derive(Clone, Debug, PartialEq)]
pub enum Column {
    RInteger(Vec<Option<i32>>),
    RNumeric(Vec<Option<f64>>),
    RLogical(Vec<Option<bool>>),
    RString(Vec<Option<String>>),
}

/// The `ColType` enum names the type of a Column without carrying its data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColType {
    Integer,
    Numeric,
    Logical,
    String,
}
impl ColType {
    /// Return the Rust primitive name of a column type, as shown in DataFrame headers.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColType::Integer => "i32",
            ColType::Numeric => "f64",
            ColType::Logical => "bool",
            ColType::String  => "String",
        }
    }
}
impl Display for ColType {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/* -----------------------------------------------------------------------------
implement column
----------------------------------------------------------------------------- */
impl Column {
    /* -----------------------------------------------------------------------------
    column constructors
    ----------------------------------------------------------------------------- */
    /// Create an empty Column of a specific type with capacity for `capacity` rows.
    pub fn with_capacity(col_type: ColType, capacity: usize) -> Self {
        match col_type {
            ColType::Integer => Column::RInteger(Vec::with_capacity(capacity)),
            ColType::Numeric => Column::RNumeric(Vec::with_capacity(capacity)),
            ColType::Logical => Column::RLogical(Vec::with_capacity(capacity)),
            ColType::String  => Column::RString(Vec::with_capacity(capacity)),
        }
    }
    /// Create a Column of a specific type filled with `n_row` NA values.
    pub fn na(col_type: ColType, n_row: usize) -> Self {
        match col_type {
            ColType::Integer => Column::RInteger(vec![None; n_row]),
            ColType::Numeric => Column::RNumeric(vec![None; n_row]),
            ColType::Logical => Column::RLogical(vec![None; n_row]),
            ColType::String  => Column::RString(vec![None; n_row]),
        }
    }
    /* -----------------------------------------------------------------------------
    column metadata
    ----------------------------------------------------------------------------- */
    /// Return the type of a Column.
    pub fn col_type(&self) -> ColType {
        match self {
            Column::RInteger(_) => ColType::Integer,
            Column::RNumeric(_) => ColType::Numeric,
            Column::RLogical(_) => ColType::Logical,
            Column::RString(_)  => ColType::String,
        }
    }
    /// Return the number of rows in a Column.
    pub fn len(&self) -> usize {
        match self {
            Column::RInteger(v) => v.len(),
            Column::RNumeric(v) => v.len(),
            Column::RLogical(v) => v.len(),
            Column::RString(v)  => v.len(),
        }
    }
    /// Determine whether a Column has zero rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Determine whether a specific cell of a Column is NA.
    pub fn is_na(&self, row_i: usize) -> bool {
        match self {
            Column::RInteger(v) => v[row_i].is_none(),
            Column::RNumeric(v) => v[row_i].is_none(),
            Column::RLogical(v) => v[row_i].is_none(),
            Column::RString(v)  => v[row_i].is_none(),
        }
    }
    /* -----------------------------------------------------------------------------
    column length and capacity management
    ----------------------------------------------------------------------------- */
    /// Reserve capacity for at least additional more rows to be inserted in a Column.
    pub fn reserve(&mut self, additional: usize) {
        match self {
            Column::RInteger(v) => v.reserve(additional),
            Column::RNumeric(v) => v.reserve(additional),
            Column::RLogical(v) => v.reserve(additional),
            Column::RString(v)  => v.reserve(additional),
        }
    }
    /// Add bulk row data to a Column, e.g., when appending rows.
    pub fn extend(&mut self, other: &Column) -> Result<()> {
        match (self, other) {
            (Column::RInteger(data), Column::RInteger(other_data)) => data.par_extend(other_data.par_iter().cloned()),
            (Column::RNumeric(data), Column::RNumeric(other_data)) => data.par_extend(other_data.par_iter().cloned()),
            (Column::RLogical(data), Column::RLogical(other_data)) => data.par_extend(other_data.par_iter().cloned()),
            (Column::RString(data),  Column::RString(other_data))  => data.par_extend(other_data.par_iter().cloned()),
            (data, other_data) => return Err(DataFrameError::TypeMismatch {
                col_name: "extend".to_string(),
                expected: data.col_type(),
                found:    other_data.col_type(),
                caller:   "extend"
            }),
        }
        Ok(())
    }
    /// Extend a column by recycling its existing single Option<T> value, or None if currently empty.
    pub fn recycle(&mut self, new_len: usize) -> Result<()> {
        let n_row_in = self.len();
        if n_row_in > 1 {
            return Err(DataFrameError::RowCountMismatch { n_row_df: new_len, n_row_new: n_row_in, caller: "recycle" });
        }
        let is_na = n_row_in == 0;
        match self {
            Column::RInteger(v) => v.resize(new_len, if is_na { None } else { v[0] }),
            Column::RNumeric(v) => v.resize(new_len, if is_na { None } else { v[0] }),
            Column::RLogical(v) => v.resize(new_len, if is_na { None } else { v[0] }),
            Column::RString(v)  => v.resize(new_len, if is_na { None } else { v[0].clone() }),
        }
        Ok(())
    }
    /* -----------------------------------------------------------------------------
    column and row schema integrity checks
    ----------------------------------------------------------------------------- */
    /// Check that the number of incoming rows matches the number of data rows.
    pub fn check_n_row_equality(n_row_df: usize, n_row_new: usize, caller: &'static str) -> Result<()> {
        if n_row_df != n_row_new {
            Err(DataFrameError::RowCountMismatch { n_row_df, n_row_new, caller })
        } else {
            Ok(())
        }
    }
    /// Ensure that a requested row is within the column row length.
    pub fn check_i_bound(n_row: usize, row_i: usize, caller: &'static str) -> Result<()> {
        if row_i >= n_row {
            Err(DataFrameError::RowOutOfBounds { row_i, caller })
        } else {
            Ok(())
        }
    }
}
