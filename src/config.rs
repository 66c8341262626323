use std::path::PathBuf;

use crate::models::Period;

#[derive(Debug, Clone)]
pub struct Config {
    // Storage
    pub journal_path: PathBuf,

    // Reporting
    pub period: Period,

    // Logging
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = |key: &str, default: &str| -> String {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };

        Config {
            journal_path: PathBuf::from(env("JOURNAL_PATH", "data/journal.json")),
            period: Period::from_str_loose(&env("ROLLUP_PERIOD", "week")).unwrap_or(Period::Week),
            log_level: env("LOG_LEVEL", "info"),
        }
    }
}
