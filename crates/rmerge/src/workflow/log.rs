//! The Log structure helps print structured log messages to STDERR.

// dependencies
use chrono::Local;

/// The Log structure helps print structured log messages to STDERR,
/// as `tool: message (timestamp)` with an RFC 3339 local timestamp.
///
/// By convention, Log objects are named `log`.
pub struct Log {
    tool: String,
}
impl Log {

    /// Create a new Log instance for a given tool.
    ///
    /// By convention, Log objects are named `log`.
    pub fn new(tool: &str) -> Self {
        Self {
            tool: tool.to_string(),
        }
    }

    // assemble one log line
    fn line(&self, msg: &str) -> String {
        format!("{}: {} ({})", self.tool, msg, Local::now().to_rfc3339())
    }

    /// Print a time-stamped message to STDERR for logging purposes.
    pub fn print(&self, msg: &str) {
        eprintln!("{}", self.line(msg));
    }

    /// Print a time-stamped 'initializing' message to STDERR for logging purposes.
    /// Includes a preceding newline for spacing clarity.
    pub fn initializing(&self) {
        eprintln!("\n{}", self.line("initializing"));
    }

    /// Print a time-stamped 'done' message to STDERR at the end of a tool's work.
    pub fn done(&self) {
        eprintln!("{}", self.line("done"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_lines_carry_tool_and_timestamp() {
        let line = Log::new("rmerge inner").line("reading input");
        assert!(line.starts_with("rmerge inner: reading input ("));
        let stamp = line.trim_end_matches(')').rsplit('(').next().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok());
    }
}
