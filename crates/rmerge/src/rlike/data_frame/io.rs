//! DataFrame bulk data read/write from file or STDIN.

// dependencies
use std::collections::HashMap;
use std::io::{Read, Write};
use csv::{StringRecord, ReaderBuilder, WriterBuilder, Trim};
use rayon::prelude::*;
use crate::rlike::data_frame::DataFrame;
use crate::rlike::data_frame::column::Column;
use crate::rlike::data_frame::error::{DataFrameError, Result};

impl DataFrame {

    /* -----------------------------------------------------------------------------
    Row-major (CSV) read and write
    ----------------------------------------------------------------------------- */
    /// Fill or extend a data frame from a reader applied to a row-major
    /// (CSV) input file or stream.
    ///
    /// The DataFrame must already carry a schema, e.g., from `df_new!()`. With a header,
    /// schema columns are located by name, so the input may carry extra columns in any
    /// order; without a header, input columns are taken in schema order. Records are
    /// parsed in chunks of `capacity` rows, in parallel by column.
    pub fn read<R: Read>(
        &mut self,
        reader:   R,
        header:   bool,
        sep:      u8,
        capacity: usize
    ) -> Result<&mut Self> {

        // accept multiple types of readers from df_read! macro
        let mut rdr = ReaderBuilder::new()
            .has_headers(header)
            .delimiter(sep)
            .trim(Trim::All)
            .from_reader(reader);

        // establish the input field index of each schema column
        let col_js: HashMap<String, usize> = if header {
            let headers = rdr.headers()?.clone();
            self.col_names.iter().map(|col_name| {
                headers.iter().position(|h| h == col_name)
                    .map(|j| (col_name.clone(), j))
                    .ok_or_else(|| DataFrameError::ColumnNotFound { col_name: col_name.clone(), caller: "read" })
            }).collect::<Result<_>>()?
        } else {
            self.col_names.iter().enumerate().map(|(j, col_name)| (col_name.clone(), j)).collect()
        };

        // pre-allocate a buffer of StringRecords to hold the input data
        let capacity = capacity.max(1);
        let mut records: Vec<StringRecord> = (0..capacity).map(|_| StringRecord::new()).collect();

        // read records from the input stream and process them in buffered chunks
        let mut load_i: usize = 0;
        while rdr.read_record(&mut records[load_i])? {
            load_i += 1;
            if load_i == capacity {
                self.process_read_records(&records[0..load_i], &col_js)?;
                load_i = 0;
            }
        }

        // finish the last buffer chunk as needed
        if load_i > 0 {
            self.process_read_records(&records[0..load_i], &col_js)?;
        }
        self.status.reset();
        Ok(self)
    }
    // Fill or extend a data frame from one buffer of StringRecord, in parallel by column.
    fn process_read_records(&mut self, records: &[StringRecord], col_js: &HashMap<String, usize>) -> Result<()> {
        self.columns.par_iter_mut().try_for_each(|(col_name, col)| {
            let j = col_js[col_name];
            let str_refs = records.iter().map(|record| {
                record.get(j).ok_or_else(|| DataFrameError::Schema(
                    format!("column {col_name} not found in input stream.")
                ))
            }).collect::<Result<Vec<&str>>>()?;
            col.deserialize(col_name, &str_refs)
        })?;
        self.n_row += records.len();
        Ok(())
    }

    /// Create a new DataFrame from a reader applied to a headed row-major (CSV) input
    /// file or stream, inferring each column's type from its values. Types are tried in
    /// order i32, f64, bool, and String; `NA` and empty fields are NA.
    pub fn read_inferred<R: Read>(reader: R, sep: u8) -> Result<DataFrame> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .delimiter(sep)
            .trim(Trim::All)
            .from_reader(reader);
        let headers = rdr.headers()?.clone();
        let records = rdr.records().collect::<std::result::Result<Vec<StringRecord>, _>>()?;

        // parse all columns in parallel
        let cols = (0..headers.len()).into_par_iter().map(|j| {
            let col_name = &headers[j];
            let str_refs: Vec<&str> = records.iter().map(|record| record.get(j).unwrap_or("")).collect();
            let mut col = Column::with_capacity(Column::infer_type(&str_refs), str_refs.len());
            col.deserialize(col_name, &str_refs)?;
            Ok(col)
        }).collect::<Result<Vec<Column>>>()?;

        // assemble the DataFrame in input column order
        let mut df = DataFrame::new();
        for (col_name, col) in headers.iter().zip(cols) {
            df.add_column(col_name, col)?;
        }
        Ok(df)
    }

    /// Write a DataFrame to a writer as a row-major (CSV) output file or stream,
    /// with NA values written as `NA`.
    pub fn write<W: Write>(
        &self,
        writer: W,
        header: bool,
        sep:    u8
    ) -> Result<()> {
        let mut wtr = WriterBuilder::new()
            .has_headers(false) // false since we write the header ourselves below
            .delimiter(sep)
            .from_writer(writer);

        // write header
        if header {
            wtr.write_record(&self.col_names)?;
        }

        // write rows
        let cols: Vec<&Column> = self.col_names.iter().map(|col_name| &self.columns[col_name]).collect();
        for i in 0..self.n_row {
            wtr.write_record(cols.iter().map(|col| col.cell_string(i)))?;
        }
        wtr.flush()?;
        Ok(())
    }
}
