//! The `rlike::data_frame::join` module supports DataFrame join operations
//! by declaring a metadata object to help with passing of join config metadata.
//!
//! Joins follow the dplyr vocabulary: inner, left, right, full, semi, and anti.

// modules
pub mod sorted;
pub mod unsorted;

// dependencies
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use super::DataFrame;
use crate::rlike::data_frame::column::Column;
use crate::rlike::data_frame::query::Query;
use crate::rlike::data_frame::error::{DataFrameError, Result};

/// Enumeration of supported join types. JoinType::Pending is an initial undefined state.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum JoinType {
    #[default]
    Pending,
    Inner,
    Left,
    Right,
    Full,
    Semi,
    Anti,
}
impl JoinType {
    /// Return the lowercase dplyr name of a join type.
    pub fn as_str(&self) -> &'static str {
        match self {
            JoinType::Pending => "pending",
            JoinType::Inner   => "inner",
            JoinType::Left    => "left",
            JoinType::Right   => "right",
            JoinType::Full    => "full",
            JoinType::Semi    => "semi",
            JoinType::Anti    => "anti",
        }
    }
    /// Filtering joins return a subset of the left rows and only the left columns.
    pub fn is_filtering(&self) -> bool {
        matches!(self, JoinType::Semi | JoinType::Anti)
    }
}
impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
impl FromStr for JoinType {
    type Err = DataFrameError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "inner"          => Ok(JoinType::Inner),
            "left"           => Ok(JoinType::Left),
            "right"          => Ok(JoinType::Right),
            "full" | "outer" => Ok(JoinType::Full),
            "semi"           => Ok(JoinType::Semi),
            "anti"           => Ok(JoinType::Anti),
            _ => Err(DataFrameError::JoinConfig(format!("unknown join type '{s}'")))
        }
    }
}

/// Whether NA key values match other NA key values, as dplyr's `na_matches` argument.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum NaMatches {
    #[default]
    Na,
    Never,
}
impl FromStr for NaMatches {
    type Err = DataFrameError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "na"    => Ok(NaMatches::Na),
            "never" => Ok(NaMatches::Never),
            _ => Err(DataFrameError::JoinConfig(format!("unknown na_matches value '{s}', expected na or never")))
        }
    }
}

// the source of one output column of a join
#[derive(Debug, Clone, PartialEq)]
enum OutCol {
    Key(String, String), // left and right key column names
    Left(String),
    Right(String),
}

/// The Join struct simplified code by carrying join metadata in a single object.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub sorted:         bool,
    pub join_type:      JoinType,
    pub all_left:       bool,
    pub all_right:      bool,
    pub by:             Vec<(String, String)>,
    pub select_cols:    Option<Vec<String>>,
    pub suffix:         (String, String),
    pub na_matches:     NaMatches,
}
impl Default for Join {
    fn default() -> Self {
        Self::new()
    }
}

impl Join {

    /* -----------------------------------------------------------------------------
    Join constructors and setters
    ----------------------------------------------------------------------------- */

    /// Create a new Join object with a pending join type and dplyr defaults.
    pub fn new() -> Self {
        Self {
            sorted:         false,
            join_type:      JoinType::Pending,
            all_left:       false,
            all_right:      false,
            by:             Vec::new(),
            select_cols:    None,
            suffix:         (".x".to_string(), ".y".to_string()),
            na_matches:     NaMatches::Na,
        }
    }

    /// Set the join type of the Join object.
    pub fn set_join_type(&mut self, join_type: JoinType) -> &mut Self {
        self.join_type = join_type;
        self.all_left  = join_type == JoinType::Full || join_type == JoinType::Left;
        self.all_right = join_type == JoinType::Full || join_type == JoinType::Right;
        self
    }

    /// Join by key columns that have the same names in both DataFrames.
    pub fn by(&mut self, key_cols: &[&str]) -> &mut Self {
        self.by = key_cols.iter().map(|k| (k.to_string(), k.to_string())).collect();
        self
    }

    /// Join by (left name, right name) key column pairs.
    pub fn by_pairs(&mut self, by: Vec<(String, String)>) -> &mut Self {
        self.by = by;
        self
    }

    /// Parse key columns from a comma-delimited string, where `a=b` joins
    /// left column `a` to right column `b`, e.g., `id,state=name`.
    pub fn parse_by(by: &str) -> Result<Vec<(String, String)>> {
        let pairs = by.split(',').map(|key| {
            let (l, r) = key.split_once('=').unwrap_or((key, key));
            let (l, r) = (l.trim(), r.trim());
            if l.is_empty() || r.is_empty() {
                Err(DataFrameError::JoinConfig(format!("malformed key column '{key}' in '{by}'")))
            } else {
                Ok((l.to_string(), r.to_string()))
            }
        }).collect::<Result<Vec<_>>>()?;
        Ok(pairs)
    }

    /// Restrict the non-key output columns to those named; key columns are always kept.
    pub fn select(&mut self, cols: &[&str]) -> &mut Self {
        self.select_cols = Some(cols.iter().map(|c| c.to_string()).collect());
        self
    }

    /// Set the suffixes appended to non-key columns present in both DataFrames.
    pub fn suffix(&mut self, x: &str, y: &str) -> &mut Self {
        self.suffix = (x.to_string(), y.to_string());
        self
    }

    /// Use the sort-merge join algorithm, yielding output sorted by the key columns.
    pub fn sorted(&mut self, sorted: bool) -> &mut Self {
        self.sorted = sorted;
        self
    }

    /// Set whether NA keys match each other.
    pub fn na_matches(&mut self, na_matches: NaMatches) -> &mut Self {
        self.na_matches = na_matches;
        self
    }

    /* -----------------------------------------------------------------------------
    Join consistency checks
    ----------------------------------------------------------------------------- */

    /// Perform configuration and column consistency checks on a pair of DataFrames.
    pub fn check_config(&self, df_l: &DataFrame, df_r: &DataFrame) -> Result<()> {
        if self.join_type == JoinType::Pending {
            return Err(DataFrameError::JoinConfig("join type has not been set".to_string()));
        }
        if self.by.is_empty() {
            return Err(DataFrameError::JoinConfig("at least one key column is required".to_string()));
        }
        for (i, (l, r)) in self.by.iter().enumerate() {
            if self.by[..i].iter().any(|(pl, pr)| pl == l || pr == r) {
                return Err(DataFrameError::JoinConfig(format!("key column '{l}' is listed more than once")));
            }
            let col_l = df_l.get_column(l, "join")?;
            let col_r = df_r.get_column(r, "join")?;
            let (left_type, right_type) = (col_l.col_type(), col_r.col_type());
            if left_type != right_type && !is_na_logical(col_l) && !is_na_logical(col_r) {
                return Err(DataFrameError::KeyTypeMismatch {
                    left: l.clone(), left_type, right: r.clone(), right_type
                });
            }
        }
        Ok(())
    }

    // a NA-containing key can only find a partner when NA matches NA
    pub(super) fn key_can_match(&self, has_na: bool) -> bool {
        self.na_matches == NaMatches::Na || !has_na
    }

    fn left_keys(&self) -> Vec<String> {
        self.by.iter().map(|(l, _)| l.clone()).collect()
    }
    fn right_keys(&self) -> Vec<String> {
        self.by.iter().map(|(_, r)| r.clone()).collect()
    }
    fn is_selected(&self, col_name: &str) -> bool {
        match &self.select_cols {
            Some(cols) => cols.iter().any(|c| c == col_name),
            None => true,
        }
    }

    // plan the names and sources of the output columns of a mutating join
    fn plan_columns(&self, df_l: &DataFrame, df_r: &DataFrame) -> Result<Vec<(String, OutCol)>> {
        let keys_l = self.left_keys();
        let keys_r = self.right_keys();
        let non_key_l: Vec<&String> = df_l.col_names().iter()
            .filter(|c| !keys_l.contains(c) && self.is_selected(c))
            .collect();
        let non_key_r: Vec<&String> = df_r.col_names().iter()
            .filter(|c| !keys_r.contains(c) && self.is_selected(c))
            .collect();
        let mut plan = Vec::with_capacity(df_l.n_col() + non_key_r.len());
        for col_name in df_l.col_names() {
            if let Some((l, r)) = self.by.iter().find(|(l, _)| l == col_name) {
                plan.push((col_name.clone(), OutCol::Key(l.clone(), r.clone())));
            } else if non_key_l.contains(&col_name) {
                let out_name = if non_key_r.contains(&col_name) {
                    format!("{col_name}{}", self.suffix.0)
                } else {
                    col_name.clone()
                };
                plan.push((out_name, OutCol::Left(col_name.clone())));
            }
        }
        for col_name in non_key_r {
            let out_name = if non_key_l.contains(&col_name) || keys_l.contains(col_name) {
                format!("{col_name}{}", self.suffix.1)
            } else {
                col_name.clone()
            };
            plan.push((out_name, OutCol::Right(col_name.clone())));
        }
        for (i, (out_name, _)) in plan.iter().enumerate() {
            if plan[..i].iter().any(|(prev, _)| prev == out_name) {
                return Err(DataFrameError::AmbiguousColumn(out_name.clone()));
            }
        }
        Ok(plan)
    }

    /* -----------------------------------------------------------------------------
    Shared join execution
    ----------------------------------------------------------------------------- */
    /// Merge two or more DataFrames by row keys. Joins of more than two DataFrames
    /// proceed left to right, joining the running result to the next DataFrame.
    /// Typically called via macro `df_join!()`.
    pub fn execute_join(&self, dfs: &[&DataFrame]) -> Result<DataFrame> {
        if dfs.len() < 2 {
            return Err(DataFrameError::JoinConfig("join requires at least two DataFrames".to_string()));
        }
        let df_j = self.join_two_dfs(dfs[0], dfs[1])?;
        dfs[2..].iter().try_fold(df_j, |df_l, df_r| self.join_two_dfs(&df_l, df_r))
    }

    // join two DataFrames; called as many times as needed by execute_join()
    fn join_two_dfs(&self, df_l: &DataFrame, df_r: &DataFrame) -> Result<DataFrame> {
        self.check_config(df_l, df_r)?;
        let cast_l = self.cast_na_keys(df_l, df_r, true)?;
        let cast_r = self.cast_na_keys(df_r, df_l, false)?;
        let df_l: &DataFrame = &cast_l;
        let df_r: &DataFrame = &cast_r;

        // calculate row keys and (if needed) sorted row maps of the left and right DataFrames
        let mut qry_l = Query::new();
        let mut qry_r = Query::new();
        qry_l.set_key_cols(df_l, self.left_keys())?;
        qry_r.set_key_cols(df_r, self.right_keys())?;
        qry_l.set_i_map(df_l);
        qry_r.set_i_map(df_r);
        qry_l.set_row_keys(df_l)?;
        qry_r.set_row_keys(df_r)?;
        if self.sorted {
            qry_l.sort_i_map();
            if !self.join_type.is_filtering() {
                qry_r.sort_i_map();
            }
        }

        // filtering joins keep a subset of left rows as is
        let mut df_j = if self.join_type.is_filtering() {
            let rows_l = self.execute_join_filtering(&qry_l, &qry_r);
            df_l.from_rows(&rows_l)
        } else {
            let pairs = if self.sorted {
                self.execute_join_sorted(&qry_l, &qry_r)
            } else {
                self.execute_join_unsorted(&qry_l, &qry_r)
            };
            self.assemble(df_l, df_r, &pairs)?
        };

        // a sorted join result can be the pre-sorted left DataFrame of a subsequent sorted join
        if self.sorted {
            df_j.status.set_sorted(self.left_keys());
        }
        Ok(df_j)
    }

    // an all-NA logical key column, e.g., an empty CSV column, takes the type of its partner key
    fn cast_na_keys<'a>(&self, df: &'a DataFrame, other: &DataFrame, is_left: bool) -> Result<Cow<'a, DataFrame>> {
        let mut df_cast = Cow::Borrowed(df);
        for (l, r) in &self.by {
            let (key, other_key) = if is_left { (l, r) } else { (r, l) };
            let col = df.get_column(key, "join")?;
            let other_type = other.get_column(other_key, "join")?.col_type();
            if col.col_type() != other_type && is_na_logical(col) {
                df_cast.to_mut().add_empty_col(key, other_type, 0);
            }
        }
        Ok(df_cast)
    }

    // gather the output columns of a mutating join from its matched row index pairs
    fn assemble(
        &self,
        df_l: &DataFrame, df_r: &DataFrame,
        pairs: &[(Option<usize>, Option<usize>)]
    ) -> Result<DataFrame> {
        let plan = self.plan_columns(df_l, df_r)?;
        let rows_l: Vec<Option<usize>> = pairs.iter().map(|(l, _)| *l).collect();
        let rows_r: Vec<Option<usize>> = pairs.iter().map(|(_, r)| *r).collect();
        let mut df_j = DataFrame::new();
        for (out_name, src) in plan {
            let col = match src {
                OutCol::Key(l, r) => df_l.get_column(&l, "join")?
                    .take_coalesce_rows(df_r.get_column(&r, "join")?, pairs)?,
                OutCol::Left(l)   => df_l.get_column(&l, "join")?.take_opt_rows(&rows_l),
                OutCol::Right(r)  => df_r.get_column(&r, "join")?.take_opt_rows(&rows_r),
            };
            df_j.add_column(&out_name, col)?;
        }
        Ok(df_j)
    }
}

// true for a logical column with no values, which can stand in for a key of any type
fn is_na_logical(col: &Column) -> bool {
    matches!(col, Column::RLogical(v) if v.iter().all(Option::is_none))
}

/* -----------------------------------------------------------------------------
dplyr-named join methods on DataFrame, for joins by same-named key columns
----------------------------------------------------------------------------- */
macro_rules! impl_join_method {
    ($($method:ident => $join_type:ident),+ $(,)?) => {
        impl DataFrame { $(
            #[doc = concat!("Perform a `", stringify!($join_type), "` join of `self` to `other` by same-named key columns.")]
            pub fn $method(&self, other: &DataFrame, by: &[&str]) -> Result<DataFrame> {
                Join::new()
                    .set_join_type(JoinType::$join_type)
                    .by(by)
                    .execute_join(&[self, other])
            }
        )+ }
    };
}
impl_join_method!(
    inner_join => Inner,
    left_join  => Left,
    right_join => Right,
    full_join  => Full,
    semi_join  => Semi,
    anti_join  => Anti,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rlike::data_frame::column::ColType;
    use crate::rlike::types::ToRLVec;

    fn df_a() -> DataFrame {
        let mut df = DataFrame::new();
        df.add_col("id", vec![1_i32, 2].to_rl()).unwrap();
        df.add_col("v", vec!["x", "y"].to_rl()).unwrap();
        df
    }
    fn df_b() -> DataFrame {
        let mut df = DataFrame::new();
        df.add_col("id", vec![2_i32, 3].to_rl()).unwrap();
        df.add_col("w", vec!["z", "q"].to_rl()).unwrap();
        df
    }
    fn strs(x: &[Option<&str>]) -> Vec<Option<String>> {
        x.iter().map(|s| s.map(|s| s.to_string())).collect()
    }

    #[test]
    fn basic_example_joins() {
        let (a, b) = (df_a(), df_b());
        let inner = a.inner_join(&b, &["id"]).unwrap();
        assert_eq!(inner.col_names(), &vec!["id", "v", "w"]);
        assert_eq!(inner.get_ref::<i32>("id").unwrap(), &vec![Some(2)]);
        assert_eq!(inner.get::<String>("w").unwrap(), strs(&[Some("z")]));

        let left = a.left_join(&b, &["id"]).unwrap();
        assert_eq!(left.get_ref::<i32>("id").unwrap(), &vec![Some(1), Some(2)]);
        assert_eq!(left.get::<String>("w").unwrap(), strs(&[None, Some("z")]));

        let anti = a.anti_join(&b, &["id"]).unwrap();
        assert_eq!(anti.col_names(), a.col_names());
        assert_eq!(anti.get::<String>("v").unwrap(), strs(&[Some("x")]));
    }

    #[test]
    fn right_and_full_joins_append_unmatched_right_rows() {
        let (a, b) = (df_a(), df_b());
        let right = a.right_join(&b, &["id"]).unwrap();
        assert_eq!(right.get_ref::<i32>("id").unwrap(), &vec![Some(2), Some(3)]);
        assert_eq!(right.get::<String>("v").unwrap(), strs(&[Some("y"), None]));

        let full = a.full_join(&b, &["id"]).unwrap();
        assert_eq!(full.get_ref::<i32>("id").unwrap(), &vec![Some(1), Some(2), Some(3)]);
        assert_eq!(full.get::<String>("v").unwrap(), strs(&[Some("x"), Some("y"), None]));
        assert_eq!(full.get::<String>("w").unwrap(), strs(&[None, Some("z"), Some("q")]));
    }

    #[test]
    fn duplicate_keys_multiply() {
        let mut a = DataFrame::new();
        a.add_col("k", vec!["a", "a", "b"].to_rl()).unwrap();
        a.add_col("i", vec![1_i32, 2, 3].to_rl()).unwrap();
        let mut b = DataFrame::new();
        b.add_col("k", vec!["a", "a", "a", "c"].to_rl()).unwrap();
        b.add_col("j", vec![10_i32, 20, 30, 40].to_rl()).unwrap();
        for sorted in [false, true] {
            let df = Join::new().set_join_type(JoinType::Inner).by(&["k"]).sorted(sorted)
                .execute_join(&[&a, &b]).unwrap();
            assert_eq!(df.n_row(), 6);
            assert_eq!(df.get_ref::<i32>("i").unwrap(), &vec![Some(1), Some(1), Some(1), Some(2), Some(2), Some(2)]);
            assert_eq!(df.get_ref::<i32>("j").unwrap()[..3], [Some(10), Some(20), Some(30)]);
        }
        assert_eq!(a.semi_join(&b, &["k"]).unwrap().n_row(), 2);
        assert_eq!(a.anti_join(&b, &["k"]).unwrap().n_row(), 1);
    }

    #[test]
    fn na_keys_match_unless_never() {
        let mut a = DataFrame::new();
        a.add_col("id", vec![None, Some(1_i32)]).unwrap();
        let mut b = DataFrame::new();
        b.add_col("id", vec![None, Some(1_i32)]).unwrap();
        b.add_col("w", vec![Some(true), Some(false)]).unwrap();
        assert_eq!(a.inner_join(&b, &["id"]).unwrap().n_row(), 2);
        for sorted in [false, true] {
            let mut join = Join::new();
            join.set_join_type(JoinType::Full).by(&["id"]).sorted(sorted).na_matches(NaMatches::Never);
            let df = join.execute_join(&[&a, &b]).unwrap();
            assert_eq!(df.n_row(), 3);
            assert_eq!(df.get_ref::<i32>("id").unwrap().iter().filter(|x| x.is_none()).count(), 2);
            join.set_join_type(JoinType::Anti);
            assert_eq!(join.execute_join(&[&a, &b]).unwrap().get_ref::<i32>("id").unwrap(), &vec![None]);
        }
    }

    #[test]
    fn shared_non_key_columns_get_suffixes() {
        let mut a = df_a();
        a.add_col("w", vec![1.5_f64, 2.5].to_rl()).unwrap();
        let df = a.full_join(&df_b(), &["id"]).unwrap();
        assert_eq!(df.col_names(), &vec!["id", "v", "w.x", "w.y"]);
        assert_eq!(df.col_type("w.x").unwrap(), ColType::Numeric);

        let df = Join::new().set_join_type(JoinType::Left).by(&["id"]).suffix("_l", "_r")
            .execute_join(&[&a, &df_b()]).unwrap();
        assert_eq!(df.col_names(), &vec!["id", "v", "w_l", "w_r"]);

        a.add_col("w.x", vec![0_i32, 0].to_rl()).unwrap();
        assert!(matches!(a.left_join(&df_b(), &["id"]), Err(DataFrameError::AmbiguousColumn(_))));
    }

    #[test]
    fn differently_named_keys_and_select() {
        let mut b = DataFrame::new();
        b.add_col("key", vec![2_i32, 1].to_rl()).unwrap();
        b.add_col("w", vec!["z", "q"].to_rl()).unwrap();
        b.add_col("u", vec![true, false].to_rl()).unwrap();
        let df = Join::new()
            .set_join_type(JoinType::Inner)
            .by_pairs(Join::parse_by("id = key").unwrap())
            .select(&["u"])
            .execute_join(&[&df_a(), &b]).unwrap();
        assert_eq!(df.col_names(), &vec!["id", "u"]);
        assert_eq!(df.get_ref::<bool>("u").unwrap(), &vec![Some(false), Some(true)]);
    }

    #[test]
    fn sorted_join_orders_by_key_and_records_status() {
        let mut a = DataFrame::new();
        a.add_col("id", vec![3_i32, 1, 2].to_rl()).unwrap();
        let mut b = DataFrame::new();
        b.add_col("id", vec![4_i32, 2, 1].to_rl()).unwrap();
        b.add_col("w", vec![40_i32, 20, 10].to_rl()).unwrap();
        let df = Join::new().set_join_type(JoinType::Full).by(&["id"]).sorted(true)
            .execute_join(&[&a, &b]).unwrap();
        assert_eq!(df.get_ref::<i32>("id").unwrap(), &vec![Some(1), Some(2), Some(3), Some(4)]);
        assert_eq!(df.get_ref::<i32>("w").unwrap(), &vec![Some(10), Some(20), None, Some(40)]);
        assert!(df.status.is_sorted_by(&["id".to_string()]));
    }

    #[test]
    fn joins_fold_over_many_dataframes() {
        let mut c = DataFrame::new();
        c.add_col("id", vec![2_i32].to_rl()).unwrap();
        c.add_col("n", vec![7.0_f64].to_rl()).unwrap();
        let (a, b) = (df_a(), df_b());
        let df = Join::new().set_join_type(JoinType::Left).by(&["id"])
            .execute_join(&[&a, &b, &c]).unwrap();
        assert_eq!(df.col_names(), &vec!["id", "v", "w", "n"]);
        assert_eq!(df.get_ref::<f64>("n").unwrap(), &vec![None, Some(7.0)]);
    }

    #[test]
    fn bad_configs_are_errors() {
        let (a, b) = (df_a(), df_b());
        assert!(Join::new().by(&["id"]).execute_join(&[&a, &b]).is_err());
        assert!(a.inner_join(&b, &[]).is_err());
        assert!(matches!(a.inner_join(&b, &["v"]), Err(DataFrameError::ColumnNotFound { .. })));
        assert!(Join::new().set_join_type(JoinType::Inner).by(&["id"]).execute_join(&[&a]).is_err());
        let mut c = DataFrame::new();
        c.add_col("id", vec![2.0_f64].to_rl()).unwrap();
        assert!(matches!(a.inner_join(&c, &["id"]), Err(DataFrameError::KeyTypeMismatch { .. })));
        assert!(Join::parse_by("id,").is_err());
        assert_eq!("Outer".parse::<JoinType>().unwrap(), JoinType::Full);
        assert!("cross".parse::<JoinType>().is_err());
    }

    #[test]
    fn all_na_logical_keys_take_the_partner_key_type() {
        let mut a = DataFrame::new();
        a.add_col::<bool>("id", vec![None, None]).unwrap();
        a.add_col("v", vec!["x", "y"].to_rl()).unwrap();
        for sorted in [false, true] {
            let df = Join::new().set_join_type(JoinType::Full).by(&["id"]).sorted(sorted)
                .execute_join(&[&a, &df_b()]).unwrap();
            assert_eq!(df.col_type("id").unwrap(), ColType::Integer);
            assert_eq!(df.n_row(), 4);
            let df = Join::new().set_join_type(JoinType::Right).by(&["id"]).sorted(sorted)
                .execute_join(&[&df_b(), &a]).unwrap();
            assert_eq!(df.col_type("id").unwrap(), ColType::Integer);
            assert_eq!(df.get_ref::<i32>("id").unwrap(), &vec![None, None]);
        }
        a.get_ref_mut::<bool>("id").unwrap()[0] = Some(true);
        assert!(matches!(a.inner_join(&df_b(), &["id"]), Err(DataFrameError::KeyTypeMismatch { .. })));
    }
}
