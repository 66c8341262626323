pub mod codec;
pub mod store;

pub use store::{read_rules_file, read_trades_file, FileStore, JournalStore, MemoryStore};

use chrono::NaiveDate;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info};

use crate::analysis::{DayComparer, Rollup, RollupMap};
use crate::error::{JournalError, Result};
use crate::models::{DayLog, DaySummary, Period, Rule, Trade};

/// The rule book plus at most one summary per trading date.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    rules: BTreeMap<String, Rule>,
    days: BTreeMap<NaiveDate, DaySummary>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    // Rules

    /// Replaces the whole rule book. An empty list is refused.
    pub fn set_rules<I>(&mut self, rules: I) -> Result<()>
    where
        I: IntoIterator<Item = Rule>,
    {
        let rules: BTreeMap<String, Rule> =
            rules.into_iter().map(|r| (r.id.clone(), r)).collect();
        if rules.is_empty() {
            return Err(JournalError::EmptyInput(
                "rule list is empty; add at least one rule".to_string(),
            ));
        }
        info!("Rule book set with {} rule(s)", rules.len());
        self.rules = rules;
        Ok(())
    }

    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.values()
    }

    pub fn rule(&self, id: &str) -> Option<&Rule> {
        self.rules.get(id)
    }

    /// Violated rule ids that have no entry in the rule book.
    pub fn unknown_rule_ids(&self) -> BTreeSet<String> {
        self.days
            .values()
            .flat_map(|d| d.trades.iter())
            .flat_map(|t| t.violated_rules.iter())
            .filter(|id| !self.rules.contains_key(id.as_str()))
            .cloned()
            .collect()
    }

    // Days

    /// Summarizes the day and stores it, replacing any entry for that date.
    pub fn add_day(&mut self, day: DayLog) -> &DaySummary {
        let summary = DayComparer::summarize(&day);
        self.insert_summary(summary)
    }

    /// Like `add_day`, but a day without trades is rejected.
    pub fn log_day(
        &mut self,
        date: NaiveDate,
        trades: Vec<Trade>,
        notes: Option<String>,
    ) -> Result<&DaySummary> {
        if trades.is_empty() {
            return Err(JournalError::EmptyInput(format!(
                "no trades provided for {}",
                date
            )));
        }
        let day = DayLog { date, trades, notes };
        Ok(self.add_day(day))
    }

    /// Stores a precomputed summary. Last write wins per date.
    pub fn insert_summary(&mut self, summary: DaySummary) -> &DaySummary {
        match self.days.entry(summary.date) {
            Entry::Occupied(mut e) => {
                debug!(
                    "Replacing {} (gap {:+.2} -> {:+.2})",
                    summary.date,
                    e.get().discipline_gap,
                    summary.discipline_gap
                );
                e.insert(summary);
                e.into_mut()
            }
            Entry::Vacant(e) => {
                debug!("Adding {} (gap {:+.2})", summary.date, summary.discipline_gap);
                e.insert(summary)
            }
        }
    }

    pub fn find_day(&self, date: NaiveDate) -> Option<&DaySummary> {
        self.days.get(&date)
    }

    pub fn days(&self) -> impl Iterator<Item = &DaySummary> {
        self.days.values()
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    // Queries

    pub fn rollup(&self, period: Period) -> RollupMap {
        Rollup::new(self.days.values()).by_period(period)
    }

    pub fn rollup_named(&self, period: &str) -> Result<RollupMap> {
        let period: Period = period.parse()?;
        Ok(self.rollup(period))
    }
}
