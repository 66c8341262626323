use std::collections::BTreeMap;

use crate::error::Result;
use crate::models::{DaySummary, Period};

/// Group key to summed discipline gap, ordered by key.
pub type RollupMap = BTreeMap<String, f64>;

/// Aggregates discipline gaps over day, ISO week, month or year.
pub struct Rollup<'a> {
    days: Vec<&'a DaySummary>,
}

impl<'a> Rollup<'a> {
    pub fn new<I>(days: I) -> Self
    where
        I: IntoIterator<Item = &'a DaySummary>,
    {
        Self {
            days: days.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Sums rather than overwrites, so duplicate dates still add up.
    pub fn by_day(&self) -> RollupMap {
        self.group_by(DaySummary::day_key)
    }

    pub fn by_week(&self) -> RollupMap {
        self.group_by(DaySummary::iso_week_key)
    }

    pub fn by_month(&self) -> RollupMap {
        self.group_by(DaySummary::month_key)
    }

    pub fn by_year(&self) -> RollupMap {
        self.group_by(DaySummary::year_key)
    }

    pub fn by_period(&self, period: Period) -> RollupMap {
        match period {
            Period::Day => self.by_day(),
            Period::Week => self.by_week(),
            Period::Month => self.by_month(),
            Period::Year => self.by_year(),
        }
    }

    fn group_by<F>(&self, key: F) -> RollupMap
    where
        F: Fn(&DaySummary) -> String,
    {
        let mut out = RollupMap::new();
        for day in self.days.iter().copied() {
            *out.entry(key(day)).or_insert(0.0) += day.discipline_gap;
        }
        out
    }
}

/// Rolls up `days` by a granularity name (`day`, `week`, `month` or `year`).
pub fn rollup<'a, I>(days: I, granularity: &str) -> Result<RollupMap>
where
    I: IntoIterator<Item = &'a DaySummary>,
{
    let period: Period = granularity.parse()?;
    Ok(Rollup::new(days).by_period(period))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::summarize;
    use crate::models::{DayLog, Trade};
    use crate::test_helpers::{approx, date, summary_with_gap};

    fn two_days() -> Vec<DaySummary> {
        vec![
            summarize(&DayLog::new(
                date(2024, 12, 2),
                vec![Trade::new("AAPL", 10.0, 20.0).violating(&["a"])],
            )),
            summarize(&DayLog::new(
                date(2024, 12, 3),
                vec![Trade::new("MSFT", 5.0, 8.0).violating(&["b"])],
            )),
        ]
    }

    #[test]
    fn groups_worked_example_by_every_period() {
        let days = two_days();
        let roll = Rollup::new(&days);

        let by_day = roll.by_day();
        assert_eq!(by_day.len(), 2);
        assert!(approx(by_day["2024-12-02"], 10.0));
        assert!(approx(by_day["2024-12-03"], 3.0));

        assert!(approx(roll.by_week()["2024-W49"], 13.0));
        assert!(approx(roll.by_month()["2024-12"], 13.0));
        assert!(approx(roll.by_year()["2024"], 13.0));
    }

    #[test]
    fn empty_input_gives_empty_maps() {
        let roll = Rollup::new(std::iter::empty());
        assert!(roll.is_empty());
        for p in Period::ALL {
            assert!(roll.by_period(p).is_empty());
        }
    }

    #[test]
    fn duplicate_dates_are_summed() {
        let days = vec![
            summary_with_gap(date(2024, 3, 4), 2.5),
            summary_with_gap(date(2024, 3, 4), 1.5),
        ];
        let by_day = Rollup::new(&days).by_day();
        assert_eq!(by_day.len(), 1);
        assert!(approx(by_day["2024-03-04"], 4.0));
    }

    #[test]
    fn result_is_order_independent() {
        let days = vec![
            summary_with_gap(date(2024, 12, 30), 4.0),
            summary_with_gap(date(2024, 12, 2), 1.0),
            summary_with_gap(date(2025, 1, 2), -2.0),
            summary_with_gap(date(2024, 6, 15), 8.0),
        ];
        let mut reversed = days.clone();
        reversed.reverse();
        let mut rotated = days.clone();
        rotated.rotate_left(2);

        for p in Period::ALL {
            let base = Rollup::new(&days).by_period(p);
            assert_eq!(base, Rollup::new(&reversed).by_period(p));
            assert_eq!(base, Rollup::new(&rotated).by_period(p));
        }
    }

    #[test]
    fn week_follows_iso_year_across_boundary() {
        let days = vec![
            summary_with_gap(date(2024, 12, 30), 4.0),
            summary_with_gap(date(2025, 1, 2), -2.0),
        ];
        let roll = Rollup::new(&days);
        let by_week = roll.by_week();
        assert_eq!(by_week.len(), 1);
        assert!(approx(by_week["2025-W01"], 2.0));

        let by_year = roll.by_year();
        assert!(approx(by_year["2024"], 4.0));
        assert!(approx(by_year["2025"], -2.0));
    }

    #[test]
    fn named_granularity_dispatches() {
        let days = two_days();
        let weekly = rollup(&days, "week").unwrap();
        assert!(approx(weekly["2024-W49"], 13.0));
    }

    #[test]
    fn unknown_granularity_is_invalid_argument() {
        let days = two_days();
        let err = rollup(&days, "fortnight").unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
