//! The `merge` tool joins two or more tables named on the command line,
//! configured by environment variables, and writes the merged table.
//!
//! Input tables are CSV (or JSON for `.json` paths), optionally gzipped, and
//! input paths may be glob patterns, expanded in sorted order.
//!
//! Key columns must have the same inferred type in every table, except that a
//! key column with only `NA` or empty values joins a key column of any type.

// dependencies
use std::error::Error;
use std::str::FromStr;
use crate::config_key_constants;
use crate::rlike::data_frame::DataFrame;
use crate::rlike::data_frame::join::{Join, JoinType, NaMatches};
use crate::workflow::{Config, Counters, Workflow, COUNTER_SEPARATOR};
use crate::workflow::file::{InputFile, OutputFile, STDIO_PATH};

// constants
config_key_constants!{
    // from environment variables
    RMERGE_BY
    RMERGE_SEP
    RMERGE_SORT
    RMERGE_NA_MATCHES
    RMERGE_SUFFIX_X
    RMERGE_SUFFIX_Y
    RMERGE_OUTPUT
    RMERGE_FORMAT
    // counter keys
    N_TABLES
    N_ROWS_IN
    N_ROWS_OUT
}
const TOOL: &str = "rmerge";

/// The format of the merged output table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Json,
}
impl FromStr for OutputFormat {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv"  => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("{RMERGE_FORMAT} must be csv or json, not '{s}'")),
        }
    }
}

/// Parse a field separator, where `tab` and `\t` name the tab character.
pub fn parse_sep(sep: &str) -> Result<u8, String> {
    match sep {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ if sep.len() == 1 => Ok(sep.as_bytes()[0]),
        _ => Err(format!("{RMERGE_SEP} must be a single character or 'tab', not '{sep}'")),
    }
}

/// Expand input paths that are glob patterns into sorted lists of matching files.
/// Paths without glob characters, including `-` for STDIN, are kept as is.
pub fn expand_inputs(patterns: &[String]) -> Result<Vec<String>, Box<dyn Error>> {
    let mut inputs = Vec::new();
    for pattern in patterns {
        if !pattern.contains(['*', '?', '[']) {
            inputs.push(pattern.clone());
            continue;
        }
        let mut paths = glob::glob(pattern)?
            .map(|path| path.map(|p| p.to_string_lossy().to_string()))
            .collect::<Result<Vec<String>, _>>()?;
        if paths.is_empty() {
            Err(format!("no files match input pattern {pattern}"))?
        }
        paths.sort();
        inputs.extend(paths);
    }
    Ok(inputs)
}

/// Read one input table, as JSON for `.json` paths, otherwise as CSV.
pub fn read_table(path: &str, sep: u8) -> Result<DataFrame, Box<dyn Error>> {
    let file = InputFile::open(path)?;
    let df = if path.ends_with(".json") || path.ends_with(".json.gz") {
        file.read_json()?
    } else {
        file.read_df(sep)?
    };
    Ok(df)
}

/// Merge carries the configuration of one run of the merge tool.
#[derive(Debug, Clone)]
pub struct Merge {
    pub join:   Join,
    pub sep:    u8,
    pub format: OutputFormat,
    pub output: String,
}
impl Merge {
    /* ---------------------------------------------------------------------------
    initialize
    ---------------------------------------------------------------------------- */
    /// Initialize a new Merge from environment variables.
    pub fn new(w: &mut Workflow, join_type: JoinType) -> Result<Self, Box<dyn Error>> {
        w.cfg.set_string_env(&[RMERGE_BY])?;
        w.cfg.set_string_env_or(RMERGE_SEP,        ",".to_string())?;
        w.cfg.set_u8_env_or(RMERGE_SORT,           0)?;
        w.cfg.set_string_env_or(RMERGE_NA_MATCHES, "na".to_string())?;
        w.cfg.set_string_env_or(RMERGE_SUFFIX_X,   ".x".to_string())?;
        w.cfg.set_string_env_or(RMERGE_SUFFIX_Y,   ".y".to_string())?;
        w.cfg.set_string_env_or(RMERGE_OUTPUT,     STDIO_PATH.to_string())?;
        w.cfg.set_string_env_or(RMERGE_FORMAT,     "csv".to_string())?;
        Self::from_config(&w.cfg, join_type)
    }
    /// Initialize a new Merge from configuration values that have already been set.
    pub fn from_config(cfg: &Config, join_type: JoinType) -> Result<Self, Box<dyn Error>> {
        let mut join = Join::new();
        join.set_join_type(join_type)
            .by_pairs(Join::parse_by(&cfg.get_string(RMERGE_BY)?)?)
            .sorted(cfg.get_u8(RMERGE_SORT)? == 1)
            .na_matches(NaMatches::from_str(&cfg.get_string(RMERGE_NA_MATCHES)?)?)
            .suffix(&cfg.get_string(RMERGE_SUFFIX_X)?, &cfg.get_string(RMERGE_SUFFIX_Y)?);
        Ok(Self {
            join,
            sep:    parse_sep(&cfg.get_string(RMERGE_SEP)?)?,
            format: cfg.get_string(RMERGE_FORMAT)?.parse()?,
            output: cfg.get_string(RMERGE_OUTPUT)?,
        })
    }
    /* ---------------------------------------------------------------------------
    run
    ---------------------------------------------------------------------------- */
    /// Read all input tables and merge them in the order listed.
    pub fn run(&self, w: &mut Workflow, inputs: &[String]) -> Result<DataFrame, Box<dyn Error>> {
        if inputs.len() < 2 {
            Err(format!("{TOOL} {}: at least two input tables are required", self.join.join_type))?
        }
        let mut dfs = Vec::with_capacity(inputs.len());
        for path in inputs {
            w.log.print(&format!("reading {path}"));
            let df = read_table(path, self.sep)?;
            w.ctrs.increment(N_TABLES);
            w.ctrs.add_to(N_ROWS_IN, df.n_row());
            dfs.push(df);
        }
        w.log.print(&format!("executing {} join", self.join.join_type));
        let df_refs: Vec<&DataFrame> = dfs.iter().collect();
        let df_j = self.join.execute_join(&df_refs)?;
        w.ctrs.add_to(N_ROWS_OUT, df_j.n_row());
        Ok(df_j)
    }
    /// Write the merged table to the configured output.
    pub fn write(&self, df: &DataFrame) -> Result<(), Box<dyn Error>> {
        let mut out = OutputFile::open(&self.output)?;
        match self.format {
            OutputFormat::Csv  => out.write_df(df, true, self.sep)?,
            OutputFormat::Json => out.write_json(df)?,
        }
        out.close()?;
        Ok(())
    }
}

/// Create the Workflow of the merge tool, with its counters.
pub fn workflow(join_type: JoinType) -> Workflow {
    let ctrs = Counters::new(TOOL, &[
        (N_TABLES,   "input tables read"),
        (N_ROWS_IN,  "input rows, all tables"),
        (COUNTER_SEPARATOR, ""),
        (N_ROWS_OUT, "output rows"),
    ]);
    Workflow::new(&format!("{TOOL} {join_type}"), Config::new(), ctrs)
}

/// Run the merge tool for one join type on the input paths in `args`.
pub fn stream(join_type: JoinType, args: Vec<String>) -> Result<(), Box<dyn Error>> {
    let mut w = workflow(join_type);
    w.log.initializing();
    let merge = Merge::new(&mut w, join_type)?;
    let inputs = expand_inputs(&args)?;
    let df_j = merge.run(&mut w, &inputs)?;
    merge.write(&df_j)?;
    w.ctrs.print_all();
    w.log.done();
    Ok(())
}
