//! Wrappers to help open and read/write DataFrames from/to input/output files
//! identified by file paths.
//!
//! A path of `-` is STDIN or STDOUT, and a `.gz` or `.bgz` suffix selects
//! gzip (de)compression.

// dependencies
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use flate2::{Compression, read::MultiGzDecoder, write::GzEncoder};
use serde_json::Value;
use crate::rlike::data_frame::{DataFrame, Result};
use crate::rlike::data_frame::rows::JsonTable;

/// The path that refers to STDIN or STDOUT.
pub const STDIO_PATH: &str = "-";

fn is_gz(filepath: &str) -> bool {
    filepath.ends_with(".gz") || filepath.ends_with(".bgz")
}
// add the file path to an I/O error message
fn path_error(filepath: &str, action: &str, e: io::Error) -> io::Error {
    io::Error::new(e.kind(), format!("could not {action} {filepath}: {e}"))
}

/// An InputFile supports reading DataFrames from CSV or JSON files.
pub struct InputFile {
    pub filepath: String,
    reader:       BufReader<Box<dyn Read>>,
}
impl InputFile {
    /* ------------------------------------------------------------------
    reader opening
    ------------------------------------------------------------------ */
    /// Open a reader for an input file, or STDIN for `-`.
    pub fn open(filepath: &str) -> io::Result<Self> {
        let reader: Box<dyn Read> = if filepath == STDIO_PATH {
            Box::new(io::stdin())
        } else {
            let file = File::open(filepath).map_err(|e| path_error(filepath, "open", e))?;
            if is_gz(filepath) {
                Box::new(MultiGzDecoder::new(file))
            } else {
                Box::new(file)
            }
        };
        Ok(Self {
            filepath: filepath.to_string(),
            reader:   BufReader::new(reader),
        })
    }
    /// Consume the InputFile and return its (decompressing) buffered reader.
    pub fn into_reader(self) -> BufReader<Box<dyn Read>> {
        self.reader
    }
    /* ------------------------------------------------------------------
    reading DataFrames
    ------------------------------------------------------------------ */
    /// Read a headed CSV file into a new DataFrame with inferred column types.
    pub fn read_df(self, sep: u8) -> Result<DataFrame> {
        DataFrame::read_inferred(self.reader, sep)
    }
    /// Read a JSON file into a new DataFrame, either from an array of row objects
    /// or from a JsonTable object that carries the column schema.
    pub fn read_json(self) -> Result<DataFrame> {
        let value: Value = serde_json::from_reader(self.reader)?;
        match value {
            Value::Array(rows) => DataFrame::from_json_rows(&rows),
            table => DataFrame::from_json_table(&serde_json::from_value::<JsonTable>(table)?),
        }
    }
}

// the destination of an OutputFile, kept typed so that close() can finish gzip streams
enum OutputStream {
    Stdout(io::Stdout),
    Plain(File),
    Gz(GzEncoder<File>),
}
impl Write for OutputStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputStream::Stdout(w) => w.write(buf),
            OutputStream::Plain(w)  => w.write(buf),
            OutputStream::Gz(w)     => w.write(buf),
        }
    }
    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputStream::Stdout(w) => w.flush(),
            OutputStream::Plain(w)  => w.flush(),
            OutputStream::Gz(w)     => w.flush(),
        }
    }
}

/// An OutputFile supports writing DataFrames as CSV or JSON.
pub struct OutputFile {
    pub filepath: String,
    writer:       BufWriter<OutputStream>,
}
impl OutputFile {
    /* ------------------------------------------------------------------
    writer opening
    ------------------------------------------------------------------ */
    /// Open a writer for an output file, or STDOUT for `-`.
    pub fn open(filepath: &str) -> io::Result<Self> {
        let writer = if filepath == STDIO_PATH {
            OutputStream::Stdout(io::stdout())
        } else {
            let file = File::create(filepath).map_err(|e| path_error(filepath, "create", e))?;
            if is_gz(filepath) {
                OutputStream::Gz(GzEncoder::new(file, Compression::default()))
            } else {
                OutputStream::Plain(file)
            }
        };
        Ok(Self {
            filepath: filepath.to_string(),
            writer:   BufWriter::new(writer),
        })
    }
    /* ------------------------------------------------------------------
    writing DataFrames
    ------------------------------------------------------------------ */
    /// Write a DataFrame as CSV with the specified separator.
    pub fn write_df(&mut self, df: &DataFrame, header: bool, sep: u8) -> Result<()> {
        df.write(&mut self.writer, header, sep)
    }
    /// Write a DataFrame as a pretty-printed JsonTable.
    pub fn write_json(&mut self, df: &DataFrame) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &df.to_json_table())?;
        writeln!(self.writer)?;
        Ok(())
    }
    /// Flush the writer to ensure all data is written and close the file,
    /// writing the trailer of compressed output. Errors at any step are returned.
    pub fn close(self) -> io::Result<()> {
        let stream = self.writer.into_inner().map_err(|e| e.into_error())?;
        match stream {
            OutputStream::Gz(gz) => gz.finish().map(|_| ()),
            mut stream => stream.flush(),
        }
    }
}
