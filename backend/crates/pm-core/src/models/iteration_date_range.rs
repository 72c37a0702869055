use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::Serialize;

/// Inclusive range of UTC calendar days covered by an iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IterationDateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl IterationDateRange {
    /// An end before the start collapses the range to the start day.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        self.start.date_naive()
    }

    pub fn last_day(&self) -> NaiveDate {
        self.end.date_naive()
    }

    /// Every day from first to last, ascending, no gaps
    pub fn days(&self) -> Vec<NaiveDate> {
        self.first_days(usize::MAX)
    }

    /// The first `limit` days of the range, ascending
    pub fn first_days(&self, limit: usize) -> Vec<NaiveDate> {
        let last_day = self.last_day();
        self.first_day()
            .iter_days()
            .take_while(|day| *day <= last_day)
            .take(limit)
            .collect()
    }

    pub fn day_count(&self) -> usize {
        (self.last_day() - self.first_day()).num_days() as usize + 1
    }

    /// Midnight UTC at the start of the first day
    pub fn window_start(&self) -> DateTime<Utc> {
        self.first_day().and_time(chrono::NaiveTime::MIN).and_utc()
    }

    /// Midnight UTC one day after the last day
    pub fn window_end(&self) -> DateTime<Utc> {
        self.last_day()
            .checked_add_days(Days::new(1))
            .unwrap_or(self.last_day())
            .and_time(chrono::NaiveTime::MIN)
            .and_utc()
    }
}
