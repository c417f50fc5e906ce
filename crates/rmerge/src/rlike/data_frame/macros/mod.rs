// construct and fill DataFrames
pub mod new;
pub mod io;
pub mod display;

// merge DataFrames
pub mod join;
