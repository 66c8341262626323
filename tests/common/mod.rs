use chrono::NaiveDate;
use std::path::PathBuf;

use discipline_journal::{DayLog, Trade};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// A scratch directory unique to this process and test.
pub fn scratch_dir(test: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "discipline_journal_{}_{}",
        std::process::id(),
        test
    ));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

/// A day with one trade whose gap is `planned - actual`.
pub fn single_trade_day(d: NaiveDate, actual: f64, planned: f64, rules: &[&str]) -> DayLog {
    DayLog::new(d, vec![Trade::new("AAPL", actual, planned).violating(rules)])
}
