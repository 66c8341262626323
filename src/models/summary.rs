use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Period, Trade};

/// A day's trades compared against the perfect rule-following baseline.
///
/// `rule_impacts` is additive: a trade that breaks two rules contributes its
/// full delta to both, so the impacts do not sum to `discipline_gap`.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub actual_total: f64,
    pub perfect_total: f64,
    pub discipline_gap: f64,
    pub rule_impacts: BTreeMap<String, f64>,
    pub trades: Vec<Trade>,
    pub notes: Option<String>,
}

/// The derived figures of a summary without its trades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryOverview {
    pub date: NaiveDate,
    pub actual_total: f64,
    pub perfect_total: f64,
    pub discipline_gap: f64,
    pub rule_impacts: BTreeMap<String, f64>,
}

impl DaySummary {
    pub fn day_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// ISO-8601 week key. Late December can land in week 1 of the next ISO
    /// year and early January in the last week of the previous one.
    pub fn iso_week_key(&self) -> String {
        let week = self.date.iso_week();
        format!("{:04}-W{:02}", week.year(), week.week())
    }

    pub fn month_key(&self) -> String {
        format!("{:04}-{:02}", self.date.year(), self.date.month())
    }

    pub fn year_key(&self) -> String {
        format!("{:04}", self.date.year())
    }

    pub fn period_key(&self, period: Period) -> String {
        match period {
            Period::Day => self.day_key(),
            Period::Week => self.iso_week_key(),
            Period::Month => self.month_key(),
            Period::Year => self.year_key(),
        }
    }

    pub fn overview(&self) -> SummaryOverview {
        SummaryOverview {
            date: self.date,
            actual_total: self.actual_total,
            perfect_total: self.perfect_total,
            discipline_gap: self.discipline_gap,
            rule_impacts: self.rule_impacts.clone(),
        }
    }
}
