use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;

use crate::constants::DEFAULT_CURRENT_USER_ID;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    /// JSON file the state snapshot is mirrored to.
    pub data_file: PathBuf,
    pub log_level: String,
    pub current_user_id: String,
}

impl Default for Config {
    fn default() -> Self {
        Config::from_lookup(|_| None)
    }
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset or malformed values fall
    /// back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            port: lookup("PORT").and_then(|v| v.parse().ok()).unwrap_or(3000),
            data_file: lookup("DATA_FILE")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("expense-splitter-state.json")),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            current_user_id: lookup("CURRENT_USER_ID")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_CURRENT_USER_ID.to_string()),
        }
    }
}

// Global static accessible everywhere
pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
