use std::collections::BTreeMap;

use crate::models::{DayLog, DaySummary};

/// Compares actual trades against a perfect rule-following baseline.
pub struct DayComparer;

impl DayComparer {
    /// Builds the day's summary. Never fails; an empty day yields zeros.
    pub fn summarize(day: &DayLog) -> DaySummary {
        let actual_total: f64 = day.trades.iter().map(|t| t.actual_pnl).sum();
        let perfect_total: f64 = day.trades.iter().map(|t| t.planned_pnl).sum();
        let discipline_gap = perfect_total - actual_total;

        let mut rule_impacts: BTreeMap<String, f64> = BTreeMap::new();
        for trade in &day.trades {
            let delta = trade.delta();
            // Full delta to every violated rule, not split between them.
            for rule_id in &trade.violated_rules {
                *rule_impacts.entry(rule_id.clone()).or_insert(0.0) += delta;
            }
        }

        DaySummary {
            date: day.date,
            actual_total,
            perfect_total,
            discipline_gap,
            rule_impacts,
            trades: day.trades.clone(),
            notes: day.notes.clone(),
        }
    }
}

pub fn summarize(day: &DayLog) -> DaySummary {
    DayComparer::summarize(day)
}
