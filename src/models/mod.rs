pub mod period;
pub mod rule;
pub mod summary;
pub mod trade;

pub use period::Period;
pub use rule::Rule;
pub use summary::{DaySummary, SummaryOverview};
pub use trade::{parse_date, DayLog, Trade};
