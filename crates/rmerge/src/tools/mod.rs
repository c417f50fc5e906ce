//! Command-line tools exposed by the `rmerge` binary.

pub mod merge;
