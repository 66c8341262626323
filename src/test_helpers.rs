use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::models::{DayLog, DaySummary, Rule, Trade};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// The three-trade reference day: AAPL broke setup-01, TSLA broke risk-02.
pub fn worked_example_day() -> DayLog {
    DayLog::new(
        date(2024, 12, 2),
        vec![
            Trade::new("AAPL", -150.0, 120.0).violating(&["setup-01"]),
            Trade::new("MSFT", 320.0, 320.0),
            Trade::new("TSLA", -75.0, 0.0).violating(&["risk-02"]),
        ],
    )
    .with_notes("Example day")
}

pub fn sample_rules() -> Vec<Rule> {
    vec![
        Rule::new("setup-01", "A+ setups only", "Only take the planned setup", Some("entry")),
        Rule::new("risk-02", "Respect the stop", "Exit at the planned stop", Some("risk")),
    ]
}

pub fn empty_summary(d: NaiveDate) -> DaySummary {
    summary_with_gap(d, 0.0)
}

/// A summary with the given gap and no trades behind it.
pub fn summary_with_gap(d: NaiveDate, gap: f64) -> DaySummary {
    DaySummary {
        date: d,
        actual_total: 0.0,
        perfect_total: gap,
        discipline_gap: gap,
        rule_impacts: BTreeMap::new(),
        trades: Vec::new(),
        notes: None,
    }
}
