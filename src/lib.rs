pub mod analysis;
pub mod config;
pub mod error;
pub mod journal;
pub mod models;
#[cfg(test)]
pub mod test_helpers;

pub use analysis::{rollup, summarize, DayComparer, Rollup, RollupMap};
pub use error::{JournalError, Result};
pub use journal::{FileStore, Journal, JournalStore, MemoryStore};
pub use models::{DayLog, DaySummary, Period, Rule, SummaryOverview, Trade};
