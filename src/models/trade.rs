use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{JournalError, Result};

/// A single trade with its actual and plan-aligned P&L.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub symbol: String,
    pub actual_pnl: f64,
    pub planned_pnl: f64,
    #[serde(default)]
    pub violated_rules: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Trade {
    pub fn new(symbol: &str, actual_pnl: f64, planned_pnl: f64) -> Self {
        Self {
            symbol: symbol.to_string(),
            actual_pnl,
            planned_pnl,
            violated_rules: Vec::new(),
            notes: None,
        }
    }

    pub fn violating(mut self, rules: &[&str]) -> Self {
        self.violated_rules = rules.iter().map(|r| r.to_string()).collect();
        self
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }

    /// What following the plan would have changed: planned minus actual.
    pub fn delta(&self) -> f64 {
        self.planned_pnl - self.actual_pnl
    }

    /// Checks the fields serde cannot: a non-empty symbol and finite P&L.
    pub fn validate(&self) -> Result<()> {
        if self.symbol.trim().is_empty() {
            return Err(JournalError::InvalidArgument(
                "trade symbol must not be empty".to_string(),
            ));
        }
        if !self.actual_pnl.is_finite() || !self.planned_pnl.is_finite() {
            return Err(JournalError::InvalidArgument(format!(
                "trade {} has non-finite P&L (actual={}, planned={})",
                self.symbol, self.actual_pnl, self.planned_pnl
            )));
        }
        Ok(())
    }
}

/// Input record for one trading day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayLog {
    pub date: NaiveDate,
    pub trades: Vec<Trade>,
    pub notes: Option<String>,
}

impl DayLog {
    pub fn new(date: NaiveDate, trades: Vec<Trade>) -> Self {
        Self {
            date,
            trades,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }
}

/// Parses a `YYYY-MM-DD` trading date.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| {
        JournalError::InvalidArgument(format!("invalid date '{}' (expected YYYY-MM-DD): {}", raw, e))
    })
}
