//! The `rlike::data_frame::query` module manages DataFrame row maps and row keys
//! by maintaining a metadata record of current and pending query operations.
//! Joins use one Query per DataFrame to order its rows and calculate row keys.

// dependencies
use rayon::prelude::*;
use crate::rlike::data_frame::DataFrame;
use crate::rlike::data_frame::key::{RowKey, NA_FLAG};
use crate::rlike::data_frame::error::Result;

/* -----------------------------------------------------------------------------
Query status metadata, one instance per DataFrame instance; holds the current
sort state, i.e., the result of previous query operation(s).
----------------------------------------------------------------------------- */
/// QueryStatus is a metadata record of the current sort state of a DataFrame instance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryStatus {
    pub sort_cols:  Vec<String>,
    pub is_sorted:  bool,
}
impl QueryStatus {
    /// Create a new QueryStatus instance.
    pub fn new() -> Self {
        Self::default()
    }
    /// Reset the query status to the default state when row order or sort columns are changed.
    pub fn reset(&mut self) {
        self.sort_cols.clear();
        self.is_sorted = false;
    }
    /// Record that a DataFrame's rows are sorted by the specified columns.
    pub fn set_sorted(&mut self, col_names: Vec<String>) {
        self.is_sorted = !col_names.is_empty();
        self.sort_cols = col_names;
    }
    /// Determine if a DataFrame is currently sorted by the specified columns.
    pub fn is_sorted_by(&self, col_names: &[String]) -> bool {
        self.is_sorted &&
        self.sort_cols.starts_with(col_names)
    }
    /// Check if a DataFrame's sort columns include any of a list of columns.
    /// If so, reset the status to the default state.
    ///
    /// Input column names are typically those whose values just changed and that
    /// therefore may invalidate the current sort status.
    pub fn reset_if_changed(&mut self, col_names: &[String]) {
        if self.sort_cols.iter().any(|x| col_names.contains(x)) {
            self.reset();
        }
        // otherwise, df remains sorted as before despite changes to other columns
    }
}

/* -----------------------------------------------------------------------------
Query metadata, one instance per pending DataFrame query.
----------------------------------------------------------------------------- */
/// Query is a metadata record of the pending row order and row keys of a DataFrame instance.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub key_cols:   Vec<String>,
    pub sorts_match: bool, // true if the DataFrame is already sorted by key_cols
    pub i_map:      Vec<usize>, // source row indices in query row order
    pub row_keys:   Vec<RowKey>, // indexed by source row, not by i_map position
}
impl Query {
    /* -----------------------------------------------------------------------------
    Query constructors
    ----------------------------------------------------------------------------- */
    /// Create a new Query instance.
    pub fn new() -> Self {
        Self::default()
    }
    /* -----------------------------------------------------------------------------
    Query calculations during query execution
    ----------------------------------------------------------------------------- */
    /// Set the key columns of a query, noting whether the DataFrame is already sorted by them.
    pub fn set_key_cols(&mut self, df: &DataFrame, key_cols: Vec<String>) -> Result<()> {
        for col_name in &key_cols {
            df.get_column(col_name, "set_key_cols")?;
        }
        self.sorts_match = df.status.is_sorted_by(&key_cols);
        self.key_cols = key_cols;
        Ok(())
    }
    /// Set the query row map to all DataFrame rows in their current order.
    pub fn set_i_map(&mut self, df: &DataFrame) {
        self.i_map = (0..df.n_row()).collect();
    }
    /// Calculate the RowKey of every DataFrame row from the query key columns.
    pub fn set_row_keys(&mut self, df: &DataFrame) -> Result<()> {
        let cols = self.key_cols.iter()
            .map(|col_name| df.get_column(col_name, "set_row_keys"))
            .collect::<Result<Vec<_>>>()?;
        let n_bytes = 10 * cols.len(); // a guess, strings may be longer
        self.row_keys = (0..df.n_row()).into_par_iter().map(|row_i| {
            let mut row_key = RowKey::with_capacity(n_bytes);
            for col in &cols {
                let start = row_key.as_bytes().len();
                col.pack_cell(row_i, row_key.buf());
                if row_key.as_bytes()[start] == NA_FLAG {
                    row_key.set_na();
                }
            }
            row_key
        }).collect();
        Ok(())
    }
    /// Sort the query row map by row keys, keeping the existing order of rows with equal
    /// keys. Nothing to do if the DataFrame is already sorted by the key columns.
    pub fn sort_i_map(&mut self) {
        if self.sorts_match {
            return;
        }
        let row_keys = &self.row_keys;
        self.i_map.par_sort_by(|a, b| row_keys[*a].cmp(&row_keys[*b]));
    }
    /// Return the RowKey of the row at query position `i`.
    pub fn key_at(&self, i: usize) -> &RowKey {
        &self.row_keys[self.i_map[i]]
    }
}
