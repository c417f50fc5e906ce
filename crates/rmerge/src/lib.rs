// modules
pub mod workflow; // tool configuration from environment variables, logging, counters, files
pub mod rlike;    // R-like data frames and dplyr-style merges
pub mod tools;    // command-line tools run by the rmerge binary

// re-exports
pub use workflow::file::{InputFile, OutputFile};
pub use rlike::data_frame;
pub use rlike::data_frame::{DataFrame, DataFrameError};
pub use rlike::data_frame::join::{Join, JoinType, NaMatches};
