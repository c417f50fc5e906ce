// The 'join' macros join or merge two or more DataFrames together by
// row-wise comparison of key Column(s).

// __join_key_pair expands one key term to a (left, right) key column name pair
#[doc(hidden)]
#[macro_export]
macro_rules! __join_key_pair {
    ($key_col:ident) => {
        (stringify!($key_col).to_string(), stringify!($key_col).to_string())
    };
    ($key_col:ident = $right_col:ident) => {
        (stringify!($key_col).to_string(), stringify!($right_col).to_string())
    };
}

// __df_join2 parses the join statement syntax and calls Join::execute_join()
// each join syntax pattern results in key column pairs and, optionally, select columns
#[doc(hidden)]
#[macro_export]
macro_rules! __df_join2 {
    // only key columns specified
    (
        $dfs:expr, $join:expr,
        $($key_col:ident $(= $right_col:ident)? $(+)*)+ ~ *;
    ) => {
        {
            $join.by_pairs(vec![$( $crate::__join_key_pair!($key_col $(= $right_col)?), )+]);
            $join.execute_join(&$dfs)
        }
    };
    // key and select columns specified
    (
        $dfs:expr, $join:expr,
        $($key_col:ident $(= $right_col:ident)? $(+)*)+ ~ $($select_col:ident $(+)*)+;
    ) => {
        {
            $join.by_pairs(vec![$( $crate::__join_key_pair!($key_col $(= $right_col)?), )+]);
            $join.select(&[$( stringify!($select_col), )+]);
            $join.execute_join(&$dfs)
        }
    };
}

// __df_join1 munches df_join! arguments to extract additional dfs, sort(), and join type actions
#[doc(hidden)]
#[macro_export]
macro_rules! __df_join1 {
    // set the join type, dispatch to __df_join2 for column parsing
    (@type $dfs:expr, $join:expr, $join_type:ident, $($join_tokens:tt)+) => {
        {
            $join.set_join_type($crate::JoinType::$join_type);
            $crate::__df_join2!($dfs, $join, $($join_tokens)+)
        }
    };
    // trigger join sorting
    ($dfs:expr, $join:expr, sort(), $($tail:tt)+) => {
        {
            $join.sorted(true);
            $crate::__df_join1!($dfs, $join, $($tail)+)
        }
    };
    // process join types
    ($dfs:expr, $join:expr, inner($($join_tokens:tt)+) $(,)?) => {
        $crate::__df_join1!(@type $dfs, $join, Inner, $($join_tokens)+)
    };
    ($dfs:expr, $join:expr, left($($join_tokens:tt)+) $(,)?) => {
        $crate::__df_join1!(@type $dfs, $join, Left, $($join_tokens)+)
    };
    ($dfs:expr, $join:expr, right($($join_tokens:tt)+) $(,)?) => {
        $crate::__df_join1!(@type $dfs, $join, Right, $($join_tokens)+)
    };
    ($dfs:expr, $join:expr, full($($join_tokens:tt)+) $(,)?) => {
        $crate::__df_join1!(@type $dfs, $join, Full, $($join_tokens)+)
    };
    ($dfs:expr, $join:expr, semi($($join_tokens:tt)+) $(,)?) => {
        $crate::__df_join1!(@type $dfs, $join, Semi, $($join_tokens)+)
    };
    ($dfs:expr, $join:expr, anti($($join_tokens:tt)+) $(,)?) => {
        $crate::__df_join1!(@type $dfs, $join, Anti, $($join_tokens)+)
    };
    // add an additional DataFrame to the join
    ($dfs:expr, $join:expr, $dfn:expr, $($tail:tt)+) => {
        {
            let dfn: &$crate::DataFrame = $dfn; // evaluate any DataFrame expressions
            $dfs.push(dfn);
            $crate::__df_join1!($dfs, $join, $($tail)+)
        }
    };
}

/// Execute a DataFrame join, i.e., a query that merges two or more DataFrames,
/// returning `Result<DataFrame>`.
///
/// DataFrame joins result in the Cartesian expansion of matching rows, e.g.,
/// if two rows in df1 match three rows in df2 on the key columns, the output DataFrame
/// will have six rows, one for each match.
///
/// Two join algorithms are supported, hash and sorted merge joins, which are chosen
/// by the `sort()` action. When `sort()` is omitted, `df_join!()` returns the results
/// in the row order of the left DataFrame using a hash join algorithm, followed by any
/// unmatched right rows for right and full joins. When an empty `sort()` is included,
/// `df_join!()` returns rows sorted by the key columns using a merge join.
///
/// The type of join is specified as the name of the last macro argument, one of
/// `inner()`, `left()`, `right()`, `full()`, `semi()`, or `anti()`. Each join type is
/// specified using a semicolon-terminated formula statement syntax:
/// `key_col [+ key_col ...] ~ select_col [+ select_col ...];`,
/// where key columns must be present in all DataFrames. Select columns that are missing
/// from a DataFrame are ignored for that DataFrame.
///
/// An alternative statement syntax replaces select columns with a wildcard, i.e.,
/// `key_col [+ key_col ...] ~ *;`, to return all columns from all DataFrames.
/// Non-key columns present in both DataFrames are suffixed with `.x` and `.y`.
///
/// Key columns named differently in the right DataFrame are written as
/// `left_name = right_name`; the output keeps the left name.
///
/// Key columns that contain NA values are used in the join operation, where
/// NA is considered equal to NA. Use `Join::na_matches()` to change this.
///
/// ## Examples
/// ```
/// use rmerge::data_frame::prelude::*;
///
/// let df1 = df_new!(id = vec![1_i32, 2].to_rl(), v = vec!["x", "y"].to_rl()).unwrap();
/// let df2 = df_new!(key = vec![2_i32, 3].to_rl(), w = vec!["z", "q"].to_rl()).unwrap();
/// let df3 = df_new!(id = vec![2_i32].to_rl(), n = vec![1.5_f64].to_rl()).unwrap();
///
/// let df = df_join!(&df1, &df2, inner(id = key ~ *;)).unwrap();
/// assert_eq!(df.col_names(), &vec!["id", "v", "w"]);
///
/// let df = df_join!(&df1, &df2, sort(), full(id = key ~ w;)).unwrap();
/// assert_eq!(df.n_row(), 3);
///
/// // fold join multiple DataFrames, first joining df1 and df3, then joining the result to df3 again
/// let df = df_join!(&df1, &df3, &df3, left(id ~ *;)).unwrap();
/// assert_eq!(df.col_names(), &vec!["id", "v", "n.x", "n.y"]);
/// ```
#[macro_export]
macro_rules! df_join {
    ($df1:expr, $df2:expr, $($tail:tt)+) => {
        {
            let df1: &$crate::DataFrame = $df1; // evaluate any DataFrame expressions
            let df2: &$crate::DataFrame = $df2;
            let mut dfs: Vec<&$crate::DataFrame> = vec![df1, df2];
            let mut join = $crate::Join::new(); // the object that performs the join
            $crate::__df_join1!(dfs, join, $($tail)+)
        }
    };
}
/* -----------------------------------------------------------------------------
DataFrame synonyms for join macros
----------------------------------------------------------------------------- */
/// The `df_inner!(&df1, &df2, ...)` macro is a convenience synonym for
/// `df_join!(&df1, &df2, inner(...))`.  See `df_join!()` for details on
/// syntax and usage.
#[macro_export]
macro_rules! df_inner {
    ($df1:expr, $df2:expr, $($tail:tt)+) => {
        $crate::df_join!($df1, $df2, inner($($tail)+))
    };
}
/// The `df_left!(&df1, &df2, ...)` macro is a convenience synonym for
/// `df_join!(&df1, &df2, left(...))`.
#[macro_export]
macro_rules! df_left {
    ($df1:expr, $df2:expr, $($tail:tt)+) => {
        $crate::df_join!($df1, $df2, left($($tail)+))
    };
}
/// The `df_right!(&df1, &df2, ...)` macro is a convenience synonym for
/// `df_join!(&df1, &df2, right(...))`.
#[macro_export]
macro_rules! df_right {
    ($df1:expr, $df2:expr, $($tail:tt)+) => {
        $crate::df_join!($df1, $df2, right($($tail)+))
    };
}
/// The `df_full!(&df1, &df2, ...)` macro is a convenience synonym for
/// `df_join!(&df1, &df2, sort(), full(...))`, i.e., full joins are returned sorted by key.
#[macro_export]
macro_rules! df_full {
    ($df1:expr, $df2:expr, $($tail:tt)+) => {
        $crate::df_join!($df1, $df2, sort(), full($($tail)+))
    };
}
/// The `df_semi!(&df1, &df2, ...)` macro is a convenience synonym for
/// `df_join!(&df1, &df2, semi(...))`.
#[macro_export]
macro_rules! df_semi {
    ($df1:expr, $df2:expr, $($tail:tt)+) => {
        $crate::df_join!($df1, $df2, semi($($tail)+))
    };
}
/// The `df_anti!(&df1, &df2, ...)` macro is a convenience synonym for
/// `df_join!(&df1, &df2, anti(...))`.
#[macro_export]
macro_rules! df_anti {
    ($df1:expr, $df2:expr, $($tail:tt)+) => {
        $crate::df_join!($df1, $df2, anti($($tail)+))
    };
}
