// modules
mod config;
mod counters;
mod log;
pub mod file;

// exports
pub use config::{Config, ConfigError};
pub use counters::{Counters, COUNTER_SEPARATOR};
pub use log::Log;

/// The Workflow structure organizes the common components of a data processing workflow,
/// including configuration parameters, logging, and counters.
///
/// It is a convenience wrapper to facilitate passing these common components to functions
/// in a single variable.
///
/// By convention, Workflow objects are named `w`, and elements are accessed as
/// `w.cfg`, `w.log`, and `w.ctrs`.
pub struct Workflow {
    pub cfg:  Config,
    pub ctrs: Counters,
    pub log:  Log,
}
impl Workflow {
    /// Create a new Workflow instance with specified tool name, configuration,
    /// and counters.
    pub fn new(tool: &str, cfg: Config, ctrs: Counters) -> Self {
        Self {
            cfg,
            ctrs,
            log: Log::new(tool),
        }
    }
}
