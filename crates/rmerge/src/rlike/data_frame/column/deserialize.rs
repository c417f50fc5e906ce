// column deserialization to support reading from CSV files

// dependencies
use std::str::FromStr;
use super::{Column, ColType};
use crate::rlike::data_frame::error::{DataFrameError, Result};
use crate::rlike::types::NA_STRING;

/* -----------------------------------------------------------------------------
NA handling
----------------------------------------------------------------------------- */
// all column types interpret "NA" and empty fields as NA/None
fn is_na_str(str: &str) -> bool {
    str == NA_STRING || str.is_empty()
}

/* -----------------------------------------------------------------------------
private trait with a default deserialization method
----------------------------------------------------------------------------- */
trait Deserialize: Sized {
    fn parse_one(str: &str) -> Option<Self>;
    fn parse(v: &mut Vec<Option<Self>>, col_name: &str, col_type: ColType, strs: &[&str]) -> Result<()> {
        v.reserve(strs.len());
        for str in strs {
            if is_na_str(str) {
                v.push(None);
            } else {
                match Self::parse_one(str) {
                    Some(x) => v.push(Some(x)),
                    None => return Err(DataFrameError::Parse {
                        col_name: col_name.to_string(),
                        col_type,
                        value: str.to_string()
                    })
                }
            }
        }
        Ok(())
    }
}

// implement the default method for most types
macro_rules! impl_deserialize { (
    $($t:ty),+) => { $(impl Deserialize for $t {
        fn parse_one(str: &str) -> Option<Self> { <$t>::from_str(str).ok() }
    })+ };
}
impl_deserialize!(i32, f64, String);

// implement customized logic for bool deserialization to support various character formats
impl Deserialize for bool {
    fn parse_one(str: &str) -> Option<Self> {
        match str.to_uppercase().as_str() {
            "T"     => Some(true), // thus supports: t, f, T, F, true, false, TRUE, FALSE
            "F"     => Some(false),
            "TRUE"  => Some(true),
            "FALSE" => Some(false),
            _ => None
        }
    }
}

/* -----------------------------------------------------------------------------
// implement deserialization on Column with matching to column type
----------------------------------------------------------------------------- */
impl Column {
    /// Deserialize a buffered chunk of incoming string references and extend them onto a Column.
    pub fn deserialize(&mut self, col_name: &str, strs: &[&str]) -> Result<()> {
        let col_type = self.col_type();
        match self {
            Column::RInteger(v) => <i32    as Deserialize>::parse(v, col_name, col_type, strs),
            Column::RNumeric(v) => <f64    as Deserialize>::parse(v, col_name, col_type, strs),
            Column::RLogical(v) => <bool   as Deserialize>::parse(v, col_name, col_type, strs),
            Column::RString(v)  => <String as Deserialize>::parse(v, col_name, col_type, strs),
        }
    }

    /// Infer the narrowest column type that can hold every non-NA string in `strs`,
    /// in order of preference i32, f64, bool, String. A column with only NA values is
    /// inferred as RLogical, as in R.
    pub fn infer_type(strs: &[&str]) -> ColType {
        let values = || strs.iter().filter(|str| !is_na_str(str));
        if values().all(|str| <i32 as Deserialize>::parse_one(str).is_some()) {
            if values().next().is_none() { ColType::Logical } else { ColType::Integer }
        } else if values().all(|str| <f64 as Deserialize>::parse_one(str).is_some()) {
            ColType::Numeric
        } else if values().all(|str| <bool as Deserialize>::parse_one(str).is_some()) {
            ColType::Logical
        } else {
            ColType::String
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infer_type_prefers_narrow_types() {
        assert_eq!(Column::infer_type(&["1", "NA", "-3"]), ColType::Integer);
        assert_eq!(Column::infer_type(&["1", "2.5", ""]), ColType::Numeric);
        assert_eq!(Column::infer_type(&["T", "false"]), ColType::Logical);
        assert_eq!(Column::infer_type(&["1", "x"]), ColType::String);
        assert_eq!(Column::infer_type(&["NA", ""]), ColType::Logical);
        assert_eq!(Column::infer_type(&["3000000000"]), ColType::Numeric);
    }

    #[test]
    fn deserialize_reads_na_and_values() {
        let mut col = Column::with_capacity(ColType::Logical, 3);
        col.deserialize("flag", &["t", "NA", "FALSE"]).unwrap();
        assert_eq!(col, Column::RLogical(vec![Some(true), None, Some(false)]));
    }

    #[test]
    fn deserialize_reports_bad_values() {
        let mut col = Column::with_capacity(ColType::Integer, 1);
        let err = col.deserialize("n", &["abc"]).unwrap_err();
        assert_eq!(err.to_string(), "DataFrame::read error: failed to parse i32 from string 'abc' in column n.");
    }
}
