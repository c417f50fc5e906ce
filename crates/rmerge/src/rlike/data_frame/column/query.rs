//! Implement column support for join and query actions, i.e., gathering
//! rows into new columns and packing key cells.

// dependencies
use rayon::prelude::*;
use super::Column;
use crate::rlike::data_frame::key::CellKeyValue;
use crate::rlike::data_frame::error::{DataFrameError, Result};

/* -----------------------------------------------------------------------------
private helpers applied the same to all types
----------------------------------------------------------------------------- */
// copy rows from a source column in the order of the requested indices, with None as NA
fn take_opt<T: Clone + Send + Sync>(v_src: &[Option<T>], row_i: &[Option<usize>]) -> Vec<Option<T>> {
    row_i.par_iter().map(|i| match i {
        Some(i) => v_src[*i].clone(),
        None => None
    }).collect()
}
// copy rows from one of two source columns, using the first when its index is present
fn take_coalesce<T: Clone + Send + Sync>(
    v_a: &[Option<T>], v_b: &[Option<T>],
    row_i: &[(Option<usize>, Option<usize>)]
) -> Vec<Option<T>> {
    row_i.par_iter().map(|(i_a, i_b)| match (i_a, i_b) {
        (Some(i), _)    => v_a[*i].clone(),
        (None, Some(i)) => v_b[*i].clone(),
        (None, None)    => None
    }).collect()
}

/* -----------------------------------------------------------------------------
implement column
----------------------------------------------------------------------------- */
impl Column {
    /* =============================================================================
    Copy data from one column to another
    ============================================================================= */
    /// Copy specified rows of a column into a new column. The output is (re)ordered
    /// according the order that input row indices are encountered in argument `row_i`.
    /// Will panic if any row index is out of bounds.
    pub fn take_rows(&self, row_i: &[usize]) -> Column {
        match self {
            Column::RInteger(v) => Column::RInteger(row_i.par_iter().map(|i| v[*i]).collect()),
            Column::RNumeric(v) => Column::RNumeric(row_i.par_iter().map(|i| v[*i]).collect()),
            Column::RLogical(v) => Column::RLogical(row_i.par_iter().map(|i| v[*i]).collect()),
            Column::RString(v)  => Column::RString(row_i.par_iter().map(|i| v[*i].clone()).collect()),
        }
    }
    /// Copy specified rows of a column into a new column, where a `None` row index
    /// yields an NA cell, e.g., for the unmatched side of an outer join row.
    pub fn take_opt_rows(&self, row_i: &[Option<usize>]) -> Column {
        match self {
            Column::RInteger(v) => Column::RInteger(take_opt(v, row_i)),
            Column::RNumeric(v) => Column::RNumeric(take_opt(v, row_i)),
            Column::RLogical(v) => Column::RLogical(take_opt(v, row_i)),
            Column::RString(v)  => Column::RString(take_opt(v, row_i)),
        }
    }
    /// Copy rows into a new column from either of two same-typed columns. Each output
    /// row takes its value from `self` when the first index is present, otherwise from
    /// `other`, e.g., to fill a key column from whichever join side holds the row.
    pub fn take_coalesce_rows(&self, other: &Column, row_i: &[(Option<usize>, Option<usize>)]) -> Result<Column> {
        Ok(match (self, other) {
            (Column::RInteger(a), Column::RInteger(b)) => Column::RInteger(take_coalesce(a, b, row_i)),
            (Column::RNumeric(a), Column::RNumeric(b)) => Column::RNumeric(take_coalesce(a, b, row_i)),
            (Column::RLogical(a), Column::RLogical(b)) => Column::RLogical(take_coalesce(a, b, row_i)),
            (Column::RString(a),  Column::RString(b))  => Column::RString(take_coalesce(a, b, row_i)),
            _ => return Err(DataFrameError::TypeMismatch {
                col_name: "key".to_string(),
                expected: self.col_type(),
                found:    other.col_type(),
                caller:   "take_coalesce_rows"
            })
        })
    }
    /* =============================================================================
    Handle cell and row keys
    ============================================================================= */
    /// Append the packed CellKey of one cell to a row key buffer.
    pub fn pack_cell(&self, row_i: usize, buf: &mut Vec<u8>) {
        match self {
            Column::RInteger(v) => v[row_i].pack(buf),
            Column::RNumeric(v) => v[row_i].pack(buf),
            Column::RLogical(v) => v[row_i].pack(buf),
            Column::RString(v)  => v[row_i].pack(buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_opt_rows_fills_na() {
        let col = Column::RString(vec![Some("a".to_string()), Some("b".to_string())]);
        let out = col.take_opt_rows(&[Some(1), None, Some(0), Some(1)]);
        assert_eq!(out, Column::RString(vec![
            Some("b".to_string()), None, Some("a".to_string()), Some("b".to_string())
        ]));
    }

    #[test]
    fn take_coalesce_rows_prefers_first_column() {
        let a = Column::RInteger(vec![Some(1), Some(2)]);
        let b = Column::RInteger(vec![Some(10), Some(20), Some(30)]);
        let out = a.take_coalesce_rows(&b, &[(Some(1), Some(0)), (None, Some(2)), (None, None)]).unwrap();
        assert_eq!(out, Column::RInteger(vec![Some(2), Some(30), None]));
        assert!(a.take_coalesce_rows(&Column::RNumeric(vec![]), &[]).is_err());
    }
}
