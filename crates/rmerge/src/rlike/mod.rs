//! `rlike` is a Rust module with a DataFrame and other data types that  
//! combine expressive Rust-like statements with R-like data objects.
//! 
//! The primary structure of interest in `rlike` is its `DataFrame`, a 
//! column-oriented data type for table-based data manipulations, and the
//! `Join` type that merges DataFrames the way `dplyr` merges R data frames.

pub mod types;
pub mod data_frame;
