//! The 'io' macros support reading and writing DataFrame data to and from
//! the file system or STDIN/STDOUT.

/* -----------------------------------------------------------------------------
DataFrame `read` macro to fill or extend a data frame
----------------------------------------------------------------------------- */
/// Read CSV data into a DataFrame from a file or standard input, returning `Result<()>`.
///
/// The target DataFrame can be an empty DataFrame schema or a DataFrame with
/// existing data to which new data will be appended. In either case, the data
/// being read must conform to the schema of the target DataFrame. Files whose
/// names end in `.gz` or `.bgz` are decompressed.
///
/// Defaults are a header line, comma separators, and chunks of 10K records.
///
/// # Examples
/// ```no_run
/// use rmerge::data_frame::prelude::*;
///
/// // Establish a DataFrame schema
/// let mut df = df_new!(col1:i32, col2:f64, col3:bool);
///
/// // Read from a gzipped file
/// df_read!(&mut df, file = "data.csv.gz").unwrap();
///
/// // Read from a headerless, tab-delimited file
/// df_read!(&mut df, file = "data.tsv", header = false, sep = b'\t', capacity = 10000).unwrap();
///
/// // Read from stdin
/// df_read!(&mut df).unwrap();
/// ```
#[macro_export]
macro_rules! df_read {
    ($df:expr, file = $path:expr, header = $header:expr, sep = $sep:expr, capacity = $capacity:expr) => {
        (|| -> $crate::data_frame::Result<()> {
            let file = $crate::InputFile::open($path)?;
            $df.read(file.into_reader(), $header, $sep, $capacity)?;
            Ok(())
        })()
    };
    ($df:expr, file = $path:expr) => {
        $crate::df_read!($df, file = $path, header = true, sep = b',', capacity = 10000)
    };
    ($df:expr, header = $header:expr, sep = $sep:expr, capacity = $capacity:expr) => {
        $crate::df_read!($df, file = "-", header = $header, sep = $sep, capacity = $capacity)
    };
    ($df:expr) => {
        $crate::df_read!($df, file = "-", header = true, sep = b',', capacity = 10000)
    };
}

/* -----------------------------------------------------------------------------
DataFrame `write` macro to write a data frame
----------------------------------------------------------------------------- */
/// Write a DataFrame as CSV to a file or standard output, returning `Result<()>`.
/// Files whose names end in `.gz` or `.bgz` are compressed.
///
/// Defaults are a header line and comma separators.
///
/// # Examples
/// ```no_run
/// use rmerge::data_frame::prelude::*;
///
/// let df = df_new!(col1 = vec![1_i32, 2].to_rl()).unwrap();
/// df_write!(&df, file = "data.csv.gz").unwrap();
/// df_write!(&df, file = "data.tsv", header = false, sep = b'\t').unwrap();
/// df_write!(&df).unwrap(); // to stdout
/// ```
#[macro_export]
macro_rules! df_write {
    ($df:expr, file = $path:expr, header = $header:expr, sep = $sep:expr) => {
        (|| -> $crate::data_frame::Result<()> {
            let mut file = $crate::OutputFile::open($path)?;
            file.write_df($df, $header, $sep)?;
            file.close()?;
            Ok(())
        })()
    };
    ($df:expr, file = $path:expr) => {
        $crate::df_write!($df, file = $path, header = true, sep = b',')
    };
    ($df:expr, header = $header:expr, sep = $sep:expr) => {
        $crate::df_write!($df, file = "-", header = $header, sep = $sep)
    };
    ($df:expr) => {
        $crate::df_write!($df, file = "-", header = true, sep = b',')
    };
}
