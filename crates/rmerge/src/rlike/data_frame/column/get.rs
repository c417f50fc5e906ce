//! Implement general column getters and setters.
//!
//! Typed access goes through trait `ColVec`, implemented for each supported
//! `Vec<Option<T>>`, so that callers can request column data by primitive type,
//! e.g., `df.get_ref::<i32>("col1")`, with the column type checked on every call.

// dependencies
use super::{Column, ColType};
use crate::rlike::data_frame::error::{DataFrameError, Result};
use crate::rlike::types::{RLike, NA_STRING};

/* -----------------------------------------------------------------------------
dispatch methods that apply to Vec<Option<T>>, i.e., an entire Column
----------------------------------------------------------------------------- */
/// Trait `ColVec` supports Column get operations that apply to Vec<Option<T>>,
/// i.e., that get or set data of entire columns.
pub trait ColVec: Sized {
    /// The column type that holds this Vec<Option<T>>.
    const COL_TYPE: ColType;

    /// Convert a Vec<Option<T>> to a Column of matching type.
    fn to_col(self) -> Column;

    /// Get a reference to the Vec<Option<T>> data in a DataFrame Column.
    fn get_ref<'a>(col: &'a Column, col_name: &str) -> Result<&'a Self>;

    /// Get a mutable reference to the Vec<Option<T>> data in a DataFrame Column.
    fn get_ref_mut<'a>(col: &'a mut Column, col_name: &str) -> Result<&'a mut Self>;
}
// -----------------------------------------------------------------------------
// implement ColVec for all column types
macro_rules! impl_col_vec {
    ($($prim_type:ty, $col_type:ident, $type_name:ident),+) => {
        $(
            impl ColVec for Vec<Option<$prim_type>> {
                const COL_TYPE: ColType = ColType::$type_name;
                fn to_col(self) -> Column {
                    Column::$col_type(self)
                }
                fn get_ref<'a>(col: &'a Column, col_name: &str) -> Result<&'a Self> {
                    match col {
                        Column::$col_type(v) => Ok(v),
                        _ => Err(type_mismatch(col, col_name, ColType::$type_name, "get_ref"))
                    }
                }
                fn get_ref_mut<'a>(col: &'a mut Column, col_name: &str) -> Result<&'a mut Self> {
                    match col {
                        Column::$col_type(v) => Ok(v),
                        _ => Err(type_mismatch(col, col_name, ColType::$type_name, "get_ref_mut"))
                    }
                }
            }
        )+
    };
}
impl_col_vec!{
    i32,    RInteger, Integer,
    f64,    RNumeric, Numeric,
    bool,   RLogical, Logical,
    String, RString,  String
}
fn type_mismatch(col: &Column, col_name: &str, expected: ColType, caller: &'static str) -> DataFrameError {
    DataFrameError::TypeMismatch {
        col_name: col_name.to_string(),
        expected,
        found: col.col_type(),
        caller
    }
}

// -----------------------------------------------------------------------------
// implement Column for ColVec methods
// to_col is called directly on Vec<Option<T>> since Column doesn't exist yet
impl Column {
    /// Get a reference to the Vec<Option<T>> data in a DataFrame Column.
    pub fn get_ref<'a, T>(&'a self, col_name: &str) -> Result<&'a Vec<Option<T>>>
    where Vec<Option<T>>: ColVec {
        <Vec<Option<T>>>::get_ref(self, col_name)
    }
    /// Get a mutable reference to the Vec<Option<T>> data in a DataFrame Column.
    pub fn get_ref_mut<'a, T>(&'a mut self, col_name: &str) -> Result<&'a mut Vec<Option<T>>>
    where Vec<Option<T>>: ColVec {
        <Vec<Option<T>>>::get_ref_mut(self, col_name)
    }

    /// Return the string representation of a specific cell in a Column.
    pub fn cell_string(&self, row_i: usize) -> String {
        // unlike other get methods, cell_string() is not generic over T
        match self {
            Column::RInteger(v) => RLike::to_string(&v[row_i]),
            Column::RNumeric(v) => RLike::to_string(&v[row_i]),
            Column::RLogical(v) => RLike::to_string(&v[row_i]),
            Column::RString(v)  => match &v[row_i] {
                Some(s) => s.clone(),
                None => NA_STRING.to_string(),
            },
        }
    }
}
