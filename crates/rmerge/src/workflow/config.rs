//! The Config structure stores configuration values in hash maps
//! that can be easily passed to data processing functions as a single variable.

// dependencies
use std::collections::HashMap;
use std::env;
use std::str::FromStr;
use paste::paste;
use thiserror::Error;

/// Macro to define one or more environment variable key constants as `const KEY: &str = "KEY";`.
/// Doing so at the top of a binary or library module is optional but improves code
/// readability and helps avoid typos in string literals used as keys to access
/// configuration values, since calls can now take the form `cfg.get_u8(KEY)`, etc.
/// Variable keys set in this way must be all uppercase to follow Rust's naming conventions.
/// Provide keys as either space-separated or comma-separated lists.
#[macro_export]
macro_rules! config_key_constants {
    ($($key:ident)+) => { // support space-separated keys
        $(
            const $key: &str = stringify!($key);
        )+
    };
    ($($key:ident),+ $(,)?) => { // support comma-separated keys
        $(
            const $key: &str = stringify!($key);
        )+
    };
}

/// Errors returned when configuration values are missing or malformed.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("environment variable {0} is not set.")]
    NotSet(String),

    #[error("environment variable {key} string value '{value}' could not be parsed as {data_type}.")]
    Parse { key: String, value: String, data_type: &'static str },

    #[error("config key {key} not found in {data_type} value map.")]
    KeyNotFound { key: String, data_type: &'static str },
}

/// The Config struct gathers configuration values from environment variables
/// and can store derived configuration values in hash maps organized by data type.
/// Supported data types include u8 (e.g., boolean 0|1 flags), usize, bool, and String.
#[derive(Debug, Default)]
pub struct Config {
    pub u8:     HashMap<String, u8>, // including integer 0|1 boolean flags
    pub usize:  HashMap<String, usize>,
    pub bool:   HashMap<String, bool>,
    pub string: HashMap<String, String>,
}

// generate the setters and getters of one data type
macro_rules! impl_config_type {
    ($($field:ident: $data_type:ty),+ $(,)?) => { paste! { $(
        /// Set required configuration values from environment variables.
        /// Fail if any of the specified keys are not set or cannot be parsed.
        pub fn [<set_ $field _env>](&mut self, keys: &[&str]) -> Result<(), ConfigError> {
            for &key in keys {
                let value_str = Self::get_env_string(key).ok_or_else(|| ConfigError::NotSet(key.to_string()))?;
                let value: $data_type = Self::parse_env_string(key, &value_str, stringify!($data_type))?;
                self.$field.insert(key.to_string(), value);
            }
            Ok(())
        }
        /// Set an optional configuration value from an environment variable,
        /// using a default when the variable is not set.
        pub fn [<set_ $field _env_or>](&mut self, key: &str, default: $data_type) -> Result<(), ConfigError> {
            let value = match Self::get_env_string(key) {
                Some(value_str) => Self::parse_env_string(key, &value_str, stringify!($data_type))?,
                None => default,
            };
            self.$field.insert(key.to_string(), value);
            Ok(())
        }
        /// Set a (derived) configuration value directly.
        /// Any existing value is overridden and returned as an Option.
        pub fn [<set_ $field>](&mut self, key: &str, value: $data_type) -> Option<$data_type> {
            self.$field.insert(key.to_string(), value)
        }
        /// Get a configuration value by key.
        pub fn [<get_ $field>](&self, key: &str) -> Result<$data_type, ConfigError> {
            self.$field.get(key).cloned().ok_or_else(|| ConfigError::KeyNotFound {
                key: key.to_string(),
                data_type: stringify!($data_type),
            })
        }
    )+ } };
}

impl Config {
    /// Create a new empty Config instance.
    pub fn new() -> Self {
        Self::default()
    }
    impl_config_type!(u8: u8, usize: usize, bool: bool, string: String);
    /* ------------------------------------------------------------------
    environment variable helpers
    ------------------------------------------------------------------ */
    // get the initial string representation of an environment variable, if set
    fn get_env_string(key: &str) -> Option<String> {
        env::var_os(key).map(|value| value.to_string_lossy().to_string())
    }
    // parse an environment variable string into the desired data type
    fn parse_env_string<T: FromStr>(key: &str, value: &str, data_type: &'static str) -> Result<T, ConfigError> {
        value.parse::<T>().map_err(|_| ConfigError::Parse {
            key: key.to_string(),
            value: value.to_string(),
            data_type,
        })
    }
}
