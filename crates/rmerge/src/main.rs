//! Command-line tools for merging tables with dplyr-style joins.
//!
//! Usage: `rmerge <join_type> <table> <table> [<table> ...]`, where join_type is one of
//! inner, left, right, full (or outer), semi, or anti. Options are passed as
//! environment variables, e.g., `RMERGE_BY=id,state=name`; see `rmerge::tools::merge`.

// dependencies
use std::env;
use std::error::Error;
use std::str::FromStr;
use rmerge::JoinType;
use rmerge::tools;

// constants
const TOOLS_NAME: &str = "rmerge";

// load and process data
fn main() -> Result<(), Box<dyn Error>> {

    // read command line arguments
    let mut args: Vec<String> = env::args().skip(1).collect(); // drop executable name
    if args.is_empty() { // check for something to do, i.e., a tool to run
        eprintln!("{TOOLS_NAME}: missing tool or command");
        Err(format!("usage: {TOOLS_NAME} <inner|left|right|full|semi|anti> <table> <table> [<table> ...]"))?
    }
    let tool = args.remove(0);

    // dispatch to tool or command
    match tool.as_str() {

        /*--------------------------------------------------------------
        table merges, one tool per join type
        ------------------------------------------------------------- */
        // mutating joins add columns from the right tables to the left table
        "inner" | "left" | "right" | "full" | "outer" |
        // filtering joins keep or drop left rows based on key matches
        "semi" | "anti" => tools::merge::stream(JoinType::from_str(&tool)?, args),

        /*--------------------------------------------------------------
        unrecognized tool
        ------------------------------------------------------------- */
        _ => Err(format!("{TOOLS_NAME}: unknown tool or command: {tool}"))?
    }
}
