//! Exchange DataFrames as JSON, either as an array of row objects that map column
//! names to cell values, or as a table that also carries the column schema.

// dependencies
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use crate::rlike::data_frame::DataFrame;
use crate::rlike::data_frame::column::{Column, ColType};
use crate::rlike::data_frame::error::{DataFrameError, Result};

/// One named, typed column of a JsonTable schema.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JsonColumn {
    pub name:     String,
    #[serde(rename = "type")]
    pub col_type: ColType,
}

/// A DataFrame as a JSON table, i.e., its column schema plus one JSON object per row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JsonTable {
    pub columns: Vec<JsonColumn>,
    pub rows:    Vec<Value>,
}

/* -----------------------------------------------------------------------------
cell conversion helpers
----------------------------------------------------------------------------- */
fn cell_value(col: &Column, row_i: usize) -> Value {
    match col {
        Column::RInteger(v) => v[row_i].map_or(Value::Null, Value::from),
        Column::RNumeric(v) => v[row_i].and_then(Number::from_f64).map_or(Value::Null, Value::Number),
        Column::RLogical(v) => v[row_i].map_or(Value::Null, Value::Bool),
        Column::RString(v)  => v[row_i].as_ref().map_or(Value::Null, |s| Value::String(s.clone())),
    }
}

// the narrowest column type that holds a JSON value, None for null
fn value_type(value: &Value) -> Option<ColType> {
    match value {
        Value::Null      => None,
        Value::Bool(_)   => Some(ColType::Logical),
        Value::String(_) => Some(ColType::String),
        Value::Number(n) => match n.as_i64() {
            Some(x) if i32::try_from(x).is_ok() => Some(ColType::Integer),
            _ => Some(ColType::Numeric),
        },
        Value::Array(_) | Value::Object(_) => Some(ColType::String), // rejected by push_value
    }
}

// append one JSON value to a column, failing on values the column type cannot hold
fn push_value(col: &mut Column, col_name: &str, value: &Value) -> Result<()> {
    let col_type = col.col_type();
    let err = || DataFrameError::Schema(
        format!("column {col_name} of type {col_type} cannot hold JSON value {value}")
    );
    match (col, value) {
        (Column::RInteger(v), Value::Null) => v.push(None),
        (Column::RNumeric(v), Value::Null) => v.push(None),
        (Column::RLogical(v), Value::Null) => v.push(None),
        (Column::RString(v),  Value::Null) => v.push(None),
        (Column::RInteger(v), Value::Number(n)) => {
            let x = n.as_i64().and_then(|x| i32::try_from(x).ok()).ok_or_else(err)?;
            v.push(Some(x));
        },
        (Column::RNumeric(v), Value::Number(n)) => v.push(Some(n.as_f64().ok_or_else(err)?)),
        (Column::RLogical(v), Value::Bool(b))   => v.push(Some(*b)),
        (Column::RString(v),  Value::String(s)) => v.push(Some(s.clone())),
        _ => return Err(err()),
    }
    Ok(())
}

impl DataFrame {

    /// Return one JSON object per row, mapping column names to values, with NA as `null`.
    /// Non-finite numbers also become `null` since JSON cannot represent them.
    pub fn to_json_rows(&self) -> Vec<Value> {
        (0..self.n_row).map(|row_i| {
            let row: Map<String, Value> = self.col_names.iter().map(|col_name| {
                (col_name.clone(), cell_value(&self.columns[col_name], row_i))
            }).collect();
            Value::Object(row)
        }).collect()
    }

    /// Create a new DataFrame from JSON row objects, inferring column types from the values.
    ///
    /// Columns appear in the order their names are first encountered. Integral numbers that
    /// fit in i32 yield RInteger columns, promoted to RNumeric if any value in the column
    /// does not. A column with only `null` values is RLogical, as in R. Keys missing
    /// from a row are NA in that row.
    pub fn from_json_rows(rows: &[Value]) -> Result<DataFrame> {
        let objects = rows.iter().map(|row| row.as_object().ok_or_else(|| {
            DataFrameError::Schema(format!("JSON row is not an object: {row}"))
        })).collect::<Result<Vec<&Map<String, Value>>>>()?;

        // establish column names in order of first appearance and infer their types
        let mut columns: Vec<JsonColumn> = Vec::new();
        let mut types: Vec<Option<ColType>> = Vec::new();
        for object in &objects {
            for (col_name, value) in object.iter() {
                let j = match columns.iter().position(|c| &c.name == col_name) {
                    Some(j) => j,
                    None => {
                        columns.push(JsonColumn { name: col_name.clone(), col_type: ColType::Logical });
                        types.push(None);
                        columns.len() - 1
                    }
                };
                types[j] = match (types[j], value_type(value)) {
                    (t, None) => t,
                    (None, t) => t,
                    (Some(a), Some(b)) if a == b => Some(a),
                    (Some(ColType::Integer), Some(ColType::Numeric)) |
                    (Some(ColType::Numeric), Some(ColType::Integer)) => Some(ColType::Numeric),
                    (Some(a), Some(b)) => return Err(DataFrameError::Schema(
                        format!("column {col_name} mixes JSON values of types {a} and {b}")
                    )),
                };
            }
        }
        for (column, col_type) in columns.iter_mut().zip(types) {
            column.col_type = col_type.unwrap_or(ColType::Logical);
        }
        Self::fill_from_json(&columns, &objects)
    }

    /// Return the DataFrame as a JsonTable that carries its column schema.
    pub fn to_json_table(&self) -> JsonTable {
        JsonTable {
            columns: self.col_names.iter().map(|col_name| JsonColumn {
                name:     col_name.clone(),
                col_type: self.columns[col_name].col_type(),
            }).collect(),
            rows: self.to_json_rows(),
        }
    }

    /// Create a new DataFrame from a JsonTable, using its declared column types.
    pub fn from_json_table(table: &JsonTable) -> Result<DataFrame> {
        let objects = table.rows.iter().map(|row| row.as_object().ok_or_else(|| {
            DataFrameError::Schema(format!("JSON row is not an object: {row}"))
        })).collect::<Result<Vec<&Map<String, Value>>>>()?;
        Self::fill_from_json(&table.columns, &objects)
    }

    // fill typed columns from JSON row objects
    fn fill_from_json(columns: &[JsonColumn], objects: &[&Map<String, Value>]) -> Result<DataFrame> {
        let mut df = DataFrame::new();
        for column in columns {
            let mut col = Column::with_capacity(column.col_type, objects.len());
            for object in objects {
                push_value(&mut col, &column.name, object.get(&column.name).unwrap_or(&Value::Null))?;
            }
            df.add_column(&column.name, col)?;
        }
        Ok(df)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use super::*;
    use crate::rlike::types::ToRLVec;

    #[test]
    fn json_rows_show_na_as_null() {
        let mut df = DataFrame::new();
        df.add_col("id", vec![1_i32, 2].to_rl()).unwrap();
        df.add_col("w", vec![None, Some("z".to_string())]).unwrap();
        assert_eq!(df.to_json_rows(), vec![
            json!({"id": 1, "w": null}),
            json!({"id": 2, "w": "z"}),
        ]);
    }

    #[test]
    fn from_json_rows_infers_types_in_first_appearance_order() {
        let rows = vec![
            json!({"id": 1, "x": null}),
            json!({"id": 2, "x": 2.5, "ok": true, "s": "a"}),
            json!({"id": 3, "x": 4}),
        ];
        let df = DataFrame::from_json_rows(&rows).unwrap();
        assert_eq!(df.n_row(), 3);
        assert_eq!(df.col_type("id").unwrap(), ColType::Integer);
        assert_eq!(df.get_ref::<f64>("x").unwrap(), &vec![None, Some(2.5), Some(4.0)]);
        assert_eq!(df.get_ref::<bool>("ok").unwrap(), &vec![None, Some(true), None]);
        assert_eq!(df.col_type("s").unwrap(), ColType::String);
        assert_eq!(df.to_json_rows()[1]["x"], json!(2.5));
    }

    #[test]
    fn from_json_rows_rejects_mixed_and_nested_values() {
        assert!(DataFrame::from_json_rows(&[json!({"a": 1}), json!({"a": "b"})]).is_err());
        assert!(DataFrame::from_json_rows(&[json!({"a": [1, 2]})]).is_err());
        assert!(DataFrame::from_json_rows(&[json!([1, 2])]).is_err());
    }

    #[test]
    fn json_table_keeps_types_of_empty_columns() {
        let mut df = DataFrame::new();
        df.add_empty_col("id", ColType::Integer, 0);
        df.add_empty_col("v", ColType::String, 0);
        let text = serde_json::to_string(&df.to_json_table()).unwrap();
        assert_eq!(text, r#"{"columns":[{"name":"id","type":"integer"},{"name":"v","type":"string"}],"rows":[]}"#);
        let table: JsonTable = serde_json::from_str(&text).unwrap();
        let df2 = DataFrame::from_json_table(&table).unwrap();
        assert_eq!(df2, df);
        assert_eq!(df2.col_type("v").unwrap(), ColType::String);
    }
}
