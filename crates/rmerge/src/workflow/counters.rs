//! The Counters structure stores count values that can be passed to
//! data processing functions as a single variable.
//!
// dependencies
use std::collections::HashMap;
use num_format::{Locale, ToFormattedString};

// define a constant to print a separator line when printing counters
pub const COUNTER_SEPARATOR: &str = "------------------------------------------------------------";

/// The Counters struct stores keyed usize count values in a HashMap,
/// e.g., tallies of tables read and rows merged.
///
/// By convention, Counters objects are named `ctrs`.
pub struct Counters {
    tool:         String,
    keys:         Vec<String>,
    descriptions: HashMap<String, String>,
    counts:       HashMap<String, usize>,
}
impl Counters {
    /// Create a new Counters instance with specified counter keys initialized to zero.
    ///
    /// Pass requested counters as a slice of tuples of form `&[(&str, &str)]`,
    /// where the first element of each tuple is the counter key and the second
    /// element is the counter description.
    ///
    /// Pass (COUNTER_SEPARATOR, "") to insert a separator line
    /// between groups of related counters.
    ///
    /// By convention, Counters objects are named `ctrs`.
    pub fn new(tool: &str, counters: &[(&str, &str)]) -> Self {
        let mut ctrs = Counters {
            tool:         tool.to_string(),
            keys:         Vec::new(),
            descriptions: HashMap::new(),
            counts:       HashMap::new(),
        };
        ctrs.add_counters(counters);
        ctrs
    }
    /// Add one or more counters to the Counters instance.
    pub fn add_counters(&mut self, counters: &[(&str, &str)]) -> &mut Self {
        for (key, description) in counters {
            if *key == COUNTER_SEPARATOR {
                let n_separators = self.keys.iter().filter(|k| k.starts_with(COUNTER_SEPARATOR)).count();
                self.keys.push(format!("{COUNTER_SEPARATOR}{n_separators}"));
            } else {
                self.keys.push(key.to_string());
                self.descriptions.insert(key.to_string(), description.to_string());
                self.counts.insert(key.to_string(), 0);
            }
        }
        self
    }
    /* ------------------------------------------------------------------
    counter methods
    ------------------------------------------------------------------ */
    /// Increment the count for the specified counter key by one.
    pub fn increment(&mut self, key: &str) {
        self.add_to(key, 1);
    }
    /// Increment the count for the specified counter key an arbitrary amount.
    /// Keys not declared up front are added, with the key as description.
    pub fn add_to(&mut self, key: &str, value: usize) {
        if !self.counts.contains_key(key) {
            self.add_counters(&[(key, key)]);
        }
        *self.counts.entry(key.to_string()).or_insert(0) += value;
    }
    /// Get the current count for a counter key, zero if the key is unknown.
    pub fn get(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }
    /* ------------------------------------------------------------------
    count reporting
    ------------------------------------------------------------------ */
    /// Return one report line per counter, in the order they were initialized,
    /// as tab-delimited tool, formatted count, key, and description.
    pub fn lines(&self) -> Vec<String> {
        self.keys.iter().map(|key| {
            match (self.counts.get(key), self.descriptions.get(key)) {
                (Some(count), Some(description)) => format!("{}\t{}\t{}\t{}",
                    self.tool,
                    count.to_formatted_string(&Locale::en),
                    key,
                    description
                ),
                _ => COUNTER_SEPARATOR.to_string(),
            }
        }).collect()
    }
    /// Print the value of all counters with their descriptions
    /// to STDERR in the order they were initialized.
    pub fn print_all(&self) {
        for line in self.lines() {
            eprintln!("{line}");
        }
    }
}
