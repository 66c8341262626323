//! JSON layout of the persisted journal, rule files and trade files.
//!
//! Stored days carry their derived totals. When all four are present they are
//! loaded as-is; otherwise the day is summarized again from its trades.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::analysis::DayComparer;
use crate::error::{JournalError, Result};
use crate::journal::Journal;
use crate::models::{parse_date, DayLog, DaySummary, Rule, Trade};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JournalDocument {
    #[serde(default)]
    pub rules: Vec<Rule>,
    #[serde(default)]
    pub days: Vec<StoredDay>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredDay {
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_total: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perfect_total: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discipline_gap: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_impacts: Option<BTreeMap<String, f64>>,
    #[serde(default)]
    pub trades: Vec<Trade>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RulesFile {
    #[serde(default)]
    rules: Vec<Rule>,
}

#[derive(Debug, Deserialize)]
struct TradesFile {
    #[serde(default)]
    trades: Vec<Trade>,
}

impl StoredDay {
    pub fn from_summary(summary: &DaySummary) -> Self {
        Self {
            date: summary.day_key(),
            actual_total: Some(summary.actual_total),
            perfect_total: Some(summary.perfect_total),
            discipline_gap: Some(summary.discipline_gap),
            rule_impacts: Some(summary.rule_impacts.clone()),
            trades: summary.trades.clone(),
            notes: summary.notes.clone(),
        }
    }

    pub fn into_summary(self) -> Result<DaySummary> {
        let date = parse_date(&self.date)?;
        for trade in &self.trades {
            trade.validate()?;
        }

        match (
            self.actual_total,
            self.perfect_total,
            self.discipline_gap,
            self.rule_impacts,
        ) {
            (Some(actual_total), Some(perfect_total), Some(discipline_gap), Some(rule_impacts)) => {
                Ok(DaySummary {
                    date,
                    actual_total,
                    perfect_total,
                    discipline_gap,
                    rule_impacts,
                    trades: self.trades,
                    notes: self.notes,
                })
            }
            (actual, perfect, gap, impacts) => {
                if actual.is_some() || perfect.is_some() || gap.is_some() || impacts.is_some() {
                    warn!("{} has partial derived fields, recomputing from trades", date);
                } else {
                    debug!("{} has no derived fields, summarizing", date);
                }
                let day = DayLog {
                    date,
                    trades: self.trades,
                    notes: self.notes,
                };
                Ok(DayComparer::summarize(&day))
            }
        }
    }
}

impl JournalDocument {
    pub fn from_journal(journal: &Journal) -> Self {
        Self {
            rules: journal.rules.values().cloned().collect(),
            days: journal.days.values().map(StoredDay::from_summary).collect(),
        }
    }

    pub fn into_journal(self) -> Result<Journal> {
        let mut journal = Journal::new();
        for rule in self.rules {
            validate_rule(&rule)?;
            journal.rules.insert(rule.id.clone(), rule);
        }
        for day in self.days {
            journal.insert_summary(day.into_summary()?);
        }
        Ok(journal)
    }
}

fn validate_rule(rule: &Rule) -> Result<()> {
    if rule.id.trim().is_empty() {
        return Err(JournalError::InvalidArgument(format!(
            "rule '{}' has an empty id",
            rule.name
        )));
    }
    Ok(())
}

pub fn decode_journal(content: &str) -> Result<Journal> {
    let doc: JournalDocument = serde_json::from_str(content)?;
    doc.into_journal()
}

pub fn encode_journal(journal: &Journal) -> Result<String> {
    let doc = JournalDocument::from_journal(journal);
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Parses a `{ "rules": [...] }` document.
pub fn parse_rules(content: &str) -> Result<Vec<Rule>> {
    let file: RulesFile = serde_json::from_str(content)?;
    for rule in &file.rules {
        validate_rule(rule)?;
    }
    Ok(file.rules)
}

/// Parses a `{ "trades": [...] }` document.
pub fn parse_trades(content: &str) -> Result<Vec<Trade>> {
    let file: TradesFile = serde_json::from_str(content)?;
    for trade in &file.trades {
        trade.validate()?;
    }
    Ok(file.trades)
}
