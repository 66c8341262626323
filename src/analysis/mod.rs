pub mod rollup;
pub mod summarizer;

pub use rollup::{rollup, Rollup, RollupMap};
pub use summarizer::{summarize, DayComparer};
