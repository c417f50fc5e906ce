//! The 'new' macro helps to create (and fill) a new DataFrame.

/* -----------------------------------------------------------------------------
DataFrame `new` constructor macro
----------------------------------------------------------------------------- */
/// Create a new DataFrame with Columns of different Vec<RL>, i.e.,
/// Vec<Option<T>> data types.
///
/// All Columns must have the same number of rows, or have zero or one rows which
/// are recycled to the longest column length using NA or actual values, respectively.
///
/// The first supported argument format is a variadic list of `col_name = Vec<Option<T>>`
/// expressions, where data types are inferred from the provided value vectors. It
/// returns `Result<DataFrame>` since column lengths are checked as columns are added.
///
/// Alternatively, provide column names and data types in format `col_name:data_type`
/// to create a new DataFrame with zero rows, i.e., a DataFrame schema, e.g., to
/// fill with `df_read!()`. Schemas cannot fail and are returned as a bare DataFrame.
///
/// Note that `df_new!()` uses commas, not semicolons, to separate its arguments.
///
/// # Examples:
///
/// ```
/// use rmerge::data_frame::prelude::*;
///
/// // fill a DataFrame as it is created
/// let df = df_new!(
///     col1 = vec![1_i32, 2, 3].to_rl(),        // to_rl() converts Vec<T> to Vec<RL>, i.e., Vec<Option<T>>
///     col2 = vec![Some(1.0), None, Some(3.0)], // None equates to NA/missing values
///     col3 = vec![Some(true)],                 // single row value repeated to longest column length
/// ).unwrap();
/// assert_eq!(df.n_row(), 3);
///
/// // create a new DataFrame schema with zero rows and a caller-defined capacity
/// let df = df_new!(
///     capacity = 1000,
///     col1:i32,
///     col2:String,
/// );
/// assert_eq!(df.n_col(), 2);
///
/// // create a new, empty DataFrame
/// let df = df_new!();
/// assert!(df.is_empty());
/// ```
#[macro_export]
macro_rules! df_new {

    // fill a new DataFrame as it is created from expressions that resolve to Vec<Option<T>
    // types are inferred from input data
    ($($col_name:ident = $col_data:expr),+ $(,)?) => {
        (|| -> $crate::data_frame::Result<$crate::DataFrame> {
            let mut df = $crate::DataFrame::new();
            $( df.add_col(stringify!($col_name), $col_data)?; )+
            Ok(df)
        })()
    };

    // create a new, empty DataFrame (i.e., a schema) with specified column names and data types
    (capacity = $capacity:literal, $($col_name:ident:$data_type:ty),+ $(,)?) => {
        {
            let mut df = $crate::DataFrame::new();
            $({
                let col_type = <Vec<Option<$data_type>> as $crate::data_frame::column::get::ColVec>::COL_TYPE;
                df.add_empty_col(stringify!($col_name), col_type, $capacity as usize);
            })+
            df
        }
    };

    // when not specified by caller, use a default capacity of 10K rows
    ($($col_name:ident:$data_type:ty),+ $(,)?) => {
        $crate::df_new!(capacity = 10000, $($col_name:$data_type),+)
    };

    // empty DataFrame creation (no rows, no columns)
    () => {
        $crate::DataFrame::new()
    };
}
