//! `rlike::DataFrame` offers a columnar data structure stored
//! as HashMaps of named columns, where data are stored as one vector per column.
//! Different columns can have different enumerated RLike data types. Thus, columns
//! take the form `HashMap<String, Column>`, where a Column is `Vec<RL>`, e.g.,
//! `Vec<Option<i32>>`, etc.
//!
//! DataFrames are merged by key columns using `Join`, the `df_join!()` family of
//! macros, or the dplyr-named methods `inner_join()`, `left_join()`, `right_join()`,
//! `full_join()`, `semi_join()`, and `anti_join()`.
//!
//! # Quick Start - get a new DataFrame up and running
//! ```rust
//! use rmerge::data_frame::prelude::*;
//!
//! // fill a DataFrame as it is created
//! let df1 = df_new!(
//!     id = vec![1_i32, 2].to_rl(),     // to_rl() converts Vec<T> to Vec<RL>, i.e., Vec<Option<T>>
//!     v  = vec!["x", "y"].to_rl(),
//! ).unwrap();
//! let df2 = df_new!(
//!     id = vec![2_i32, 3].to_rl(),
//!     w  = vec![Some("z".to_string()), None], // None equates to NA/missing values
//! ).unwrap();
//!
//! // merge them
//! let df3 = df_join!(&df1, &df2, left(id ~ *;)).unwrap();
//! assert_eq!(df3.n_row(), 2);
//! let df4 = df1.anti_join(&df2, &["id"]).unwrap();
//! assert_eq!(df4.n_row(), 1);
//! ```

// modules
pub mod column;
pub mod error;
pub mod macros;
pub mod display;
pub mod query;
pub mod key;
pub mod join;
pub mod prelude;
pub mod io;
pub mod rows;

// dependencies
use std::collections::HashMap;
use column::{Column, ColType, get::ColVec};
use query::QueryStatus;
pub use error::{DataFrameError, Result};

/* -----------------------------------------------------------------------------
DataFrame structure definition; metadata and a set of named Column instances.
----------------------------------------------------------------------------- */
/// A DataFrame is a columnar data structure stored as a HashMap of named Columns.
#[derive(Clone, Debug)]
pub struct DataFrame {
    n_row:         usize,
    columns:       HashMap<String, Column>,
    col_names:     Vec<String>,
    pub status:    QueryStatus,
    pub print_max_rows:      usize,
    pub print_max_col_width: usize,
}
impl Default for DataFrame {
    fn default() -> Self {
        Self::new()
    }
}
/// DataFrames are equal when they have the same columns, in the same order,
/// holding the same values. Sort status and print settings are not compared.
impl PartialEq for DataFrame {
    fn eq(&self, other: &Self) -> bool {
        self.n_row == other.n_row &&
        self.col_names == other.col_names &&
        self.col_names.iter().all(|col_name| self.columns[col_name] == other.columns[col_name])
    }
}
impl DataFrame {
    /* -----------------------------------------------------------------------------
    DataFrame constructors
    ----------------------------------------------------------------------------- */
    /// Create a new, empty DataFrame, to which you subsequently add Columns.
    pub fn new() -> Self {
        Self {
            n_row:      0,
            columns:    HashMap::new(),
            col_names:  Vec::new(),
            status:     QueryStatus::new(),
            print_max_rows:      20,
            print_max_col_width: 25,
        }
    }
    /// Create a new, empty data frame with the same schema as an existing one.
    pub fn from_schema(df_src: &DataFrame) -> Self {
        let mut df_dst = DataFrame::new();
        df_src.col_names.iter().for_each(|col_name| {
            let col_type = df_src.columns[col_name].col_type();
            df_dst.add_col_col(col_name, Column::with_capacity(col_type, 0));
        });
        df_dst
    }
    /// Create a new data frame from one or more rows of an existing DataFrame,
    /// i.e., take a potentially non-contiguous, reordered set of rows by copying
    /// values from cells. Will panic if any row index is out of bounds.
    pub fn from_rows(&self, row_i: &[usize]) -> Self {
        let mut df_dst = DataFrame::new();
        self.col_names.iter().for_each(|col_name| {
            df_dst.add_col_col(col_name, self.columns[col_name].take_rows(row_i));
        });
        df_dst.n_row = if self.col_names.is_empty() { 0 } else { row_i.len() };
        df_dst
    }
    /// Reserve capacity for at least additional more rows to be inserted in a DataFrame.
    pub fn reserve(&mut self, additional: usize) {
        for col in self.columns.values_mut() {
            col.reserve(additional);
        }
    }
    /* -----------------------------------------------------------------------------
    DataFrame metadata getters
    ----------------------------------------------------------------------------- */
    /// Get the number of rows in a DataFrame.
    pub fn n_row(&self) -> usize { self.n_row }
    /// Get the number of columns in a DataFrame.
    pub fn n_col(&self) -> usize { self.col_names.len() }
    /// Get the names of the columns in a DataFrame, in column creation order.
    pub fn col_names(&self) -> &Vec<String> { &self.col_names }
    /// Determine if a DataFrame is empty, i.e., has no rows and no columns.
    pub fn is_empty(&self) -> bool { self.n_row == 0 && self.col_names.is_empty() }
    /// Determine if a DataFrame has a column schema with at least one data row.
    pub fn has_rows(&self) -> bool { self.n_row > 0 }
    /// Determine if a DataFrame has a column with the specified name.
    pub fn has_col(&self, col_name: &str) -> bool { self.columns.contains_key(col_name) }
    /// Get the type of a named column.
    pub fn col_type(&self, col_name: &str) -> Result<ColType> {
        Ok(self.get_column(col_name, "col_type")?.col_type())
    }
    /* -----------------------------------------------------------------------------
    DataFrame column management
    ----------------------------------------------------------------------------- */
    /// Add a new Column to a DataFrame.
    ///
    /// Columns are passed in as Vec<RL>, i.e., Vec<Option<T>>, to be owned by the DataFrame.
    ///
    /// If any existing columns or the new column have zero or one rows, they are recycled
    /// to the length of the other column(s) using None or the single Option<T> value, respectively.
    /// Otherwise, the number of rows in the new column must match the number of rows in the
    /// DataFrame, unless it is currently empty.
    ///
    /// All new columns must be named differently than any existing columns to prevent collisions.
    pub fn add_col<T: Clone>(&mut self, col_name: &str, col_data: Vec<Option<T>>) -> Result<&mut Self>
    where Vec<Option<T>>: ColVec {
        self.add_column(col_name, col_data.to_col())
    }
    /// Add a new, pre-assembled Column to a DataFrame, with the same recycling rules as `add_col`.
    pub fn add_column(&mut self, col_name: &str, mut col: Column) -> Result<&mut Self> {
        if self.columns.contains_key(col_name) {
            return Err(DataFrameError::DuplicateColumn { col_name: col_name.to_string(), caller: "add_col" });
        }
        let n_row_col = col.len();
        if self.col_names.is_empty() { // incoming column is the first column
            self.n_row = n_row_col;
        } else if self.n_row == 0 && n_row_col > 0 || // adding to a DataFrame with columns but no rows, recycle None as needed
                  self.n_row == 1 && n_row_col > 1 {  // adding to a DataFrame with one row, recycle df column Option<T> as needed
            for col in self.columns.values_mut() {
                col.recycle(n_row_col)?;
            }
            self.n_row = n_row_col;
        } else if n_row_col == 0 && self.n_row > 0 || // adding empty column to a DataFrame with row data, recycle None
                  n_row_col == 1 && self.n_row > 1 {  // adding single-row column to a DataFrame with multiple rows, recycle incoming Option<T>
            col.recycle(self.n_row)?;
        } else { // both DataFrame and incoming column have multiple rows, which must match exactly (multiples recycling not supported)
            Column::check_n_row_equality(self.n_row, n_row_col, "add_col")?;
        }
        Ok(self.add_col_col(col_name, col))
    }
    /// Add an all-NA column of the specified type to a DataFrame, with capacity reserved
    /// for additional rows, replacing any existing column of the same name.
    /// Used by `df_new!()` to build DataFrame schemas.
    pub fn add_empty_col(&mut self, col_name: &str, col_type: ColType, capacity: usize) -> &mut Self {
        let mut col = Column::na(col_type, self.n_row);
        col.reserve(capacity);
        if self.columns.insert(col_name.to_string(), col).is_none() {
            self.col_names.push(col_name.to_string());
        }
        self.status.reset_if_changed(&[col_name.to_string()]);
        self
    }
    // internal function to add a column from a pre-assembled, pre-checked Column
    fn add_col_col(&mut self, col_name: &str, col: Column) -> &mut Self {
        self.columns.insert(col_name.to_string(), col);
        self.col_names.push(col_name.to_string()); // keep track of column creation order
        self
    }
    /// Like DataFrame::add_col, but replace an existing column if it exists without error or warning.
    pub fn replace_or_add_col<T: Clone>(&mut self, col_name: &str, col_data: Vec<Option<T>>) -> Result<&mut Self>
    where Vec<Option<T>>: ColVec {
        if self.columns.contains_key(col_name) {
            let mut col = col_data.to_col();
            if self.n_col() == 1 {
                self.n_row = col.len();
            } else if col.len() != self.n_row {
                col.recycle(self.n_row)?;
            }
            self.status.reset_if_changed(&[col_name.to_string()]);
            self.columns.insert(col_name.to_string(), col); // thus, retain column order
            Ok(self)
        } else {
            self.add_col(col_name, col_data)
        }
    }
    /// Remove a Column from a DataFrame based on the column name.
    pub fn drop_col(&mut self, col_name: &str) -> Result<&mut Self> {
        if self.columns.remove(col_name).is_some() {
            self.status.reset_if_changed(&[col_name.to_string()]);
            self.col_names.retain(|name| name != col_name);
            if self.col_names.is_empty() {
                self.n_row = 0;
            }
            Ok(self)
        } else {
            Err(DataFrameError::ColumnNotFound { col_name: col_name.to_string(), caller: "drop_col" })
        }
    }
    /// Keep only the columns in a DataFrame that are listed in argument `retain_col_names`,
    /// in the order they are listed.
    pub fn retain_cols(&mut self, retain_col_names: &[&str]) -> Result<&mut Self> {
        for col_name in retain_col_names {
            if !self.columns.contains_key(*col_name) {
                return Err(DataFrameError::ColumnNotFound { col_name: col_name.to_string(), caller: "retain_cols" });
            }
        }
        let dropped: Vec<String> = self.col_names.iter()
            .filter(|col_name| !retain_col_names.contains(&col_name.as_str()))
            .cloned()
            .collect();
        for col_name in &dropped {
            self.columns.remove(col_name);
        }
        self.status.reset_if_changed(&dropped);
        self.col_names = retain_col_names.iter().map(|x| x.to_string()).collect();
        Ok(self)
    }
    /// Rename a Column, e.g., to give key columns the same name in two DataFrames before joining.
    pub fn rename_col(&mut self, col_name: &str, new_name: &str) -> Result<&mut Self> {
        if self.columns.contains_key(new_name) {
            return Err(DataFrameError::DuplicateColumn { col_name: new_name.to_string(), caller: "rename_col" });
        }
        let col = self.columns.remove(col_name).ok_or_else(|| {
            DataFrameError::ColumnNotFound { col_name: col_name.to_string(), caller: "rename_col" }
        })?;
        self.columns.insert(new_name.to_string(), col);
        for name in self.col_names.iter_mut().chain(self.status.sort_cols.iter_mut()) {
            if name.as_str() == col_name { *name = new_name.to_string(); }
        }
        Ok(self)
    }
    /* -----------------------------------------------------------------------------
    DataFrame column-level getters
    ----------------------------------------------------------------------------- */
    // Ensure that a named Column exists in a DataFrame, and if so, return it.
    pub(crate) fn get_column<'a>(&'a self, col_name: &str, caller: &'static str) -> Result<&'a Column> {
        self.columns.get(col_name).ok_or_else(|| {
            DataFrameError::ColumnNotFound { col_name: col_name.to_string(), caller }
        })
    }
    /// Return a reference to the Vec<Option<T>> held in a DataFrame Column by column name.
    pub fn get_ref<'a, T>(&'a self, col_name: &str) -> Result<&'a Vec<Option<T>>>
    where Vec<Option<T>>: ColVec {
        self.get_column(col_name, "get_ref")?.get_ref(col_name)
    }
    /// Return a column by column name as values copied into Vec<Option<T>>.
    pub fn get<T: Clone>(&self, col_name: &str) -> Result<Vec<Option<T>>>
    where Vec<Option<T>>: ColVec {
        Ok(self.get_ref(col_name)?.to_vec())
    }
    /// Return a mutable reference to the Vec<Option<T>> held in a DataFrame Column by column name.
    /// Any sort status on the column is cleared since the caller may change its values.
    pub fn get_ref_mut<'a, T>(&'a mut self, col_name: &str) -> Result<&'a mut Vec<Option<T>>>
    where Vec<Option<T>>: ColVec {
        self.status.reset_if_changed(&[col_name.to_string()]);
        match self.columns.get_mut(col_name) {
            Some(col) => col.get_ref_mut(col_name),
            None => Err(DataFrameError::ColumnNotFound { col_name: col_name.to_string(), caller: "get_ref_mut" })
        }
    }
    /* -----------------------------------------------------------------------------
    DataFrame cell-level getters
    ----------------------------------------------------------------------------- */
    /// Return the String representation of a specific DataFrame cell by column name and integer row index.
    pub fn cell_string(&self, col_name: &str, row_i: usize) -> Result<String> {
        Column::check_i_bound(self.n_row, row_i, "cell_string")?;
        Ok(self.get_column(col_name, "cell_string")?.cell_string(row_i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rlike::types::ToRLVec;

    fn df_abc() -> DataFrame {
        let mut df = DataFrame::new();
        df.add_col("a", vec![1_i32, 2, 3].to_rl()).unwrap();
        df.add_col("b", vec!["x", "y", "z"].to_rl()).unwrap();
        df
    }

    #[test]
    fn add_col_recycles_single_values() {
        let mut df = df_abc();
        df.add_col("c", vec![Some(true)]).unwrap();
        assert_eq!(df.get_ref::<bool>("c").unwrap(), &vec![Some(true); 3]);
        df.add_col::<f64>("d", vec![]).unwrap();
        assert_eq!(df.get_ref::<f64>("d").unwrap(), &vec![None; 3]);
        assert_eq!(df.n_col(), 4);
    }

    #[test]
    fn add_col_rejects_bad_lengths_and_names() {
        let mut df = df_abc();
        assert!(matches!(
            df.add_col("c", vec![1_i32, 2].to_rl()),
            Err(DataFrameError::RowCountMismatch { n_row_df: 3, n_row_new: 2, .. })
        ));
        assert!(matches!(
            df.add_col("a", vec![1_i32, 2, 3].to_rl()),
            Err(DataFrameError::DuplicateColumn { .. })
        ));
    }

    #[test]
    fn from_rows_reorders_and_repeats() {
        let df = df_abc().from_rows(&[2, 0, 2]);
        assert_eq!(df.n_row(), 3);
        assert_eq!(df.get_ref::<i32>("a").unwrap(), &vec![Some(3), Some(1), Some(3)]);
        assert_eq!(df.cell_string("b", 1).unwrap(), "x");
    }

    #[test]
    fn column_management_keeps_order() {
        let mut df = df_abc();
        df.add_col("c", vec![0.5_f64; 3].to_rl()).unwrap();
        df.replace_or_add_col("a", vec![Some(9_i32)]).unwrap();
        assert_eq!(df.col_names(), &vec!["a", "b", "c"]);
        assert_eq!(df.get_ref::<i32>("a").unwrap(), &vec![Some(9); 3]);
        df.rename_col("b", "bb").unwrap();
        df.retain_cols(&["c", "bb"]).unwrap();
        assert_eq!(df.col_names(), &vec!["c", "bb"]);
        assert!(df.drop_col("a").is_err());
        assert!(!df.has_col("a"));
        assert_eq!(df.col_type("bb").unwrap(), ColType::String);
    }

    #[test]
    fn equality_compares_values_not_status() {
        let mut df1 = df_abc();
        let df2 = df_abc();
        df1.status.set_sorted(vec!["a".to_string()]);
        assert_eq!(df1, df2);
        df1.get_ref_mut::<i32>("a").unwrap()[0] = None;
        assert_ne!(df1, df2);
        assert!(!df1.status.is_sorted);
    }
}
