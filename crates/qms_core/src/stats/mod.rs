//! Aggregation helpers behind every area's statistics.
//!
//! # Responsibility
//! - Count, group and sum records on demand.
//! - Provide the shared overdue, due-soon and rate rules.
//!
//! # Invariants
//! - Aggregates scan the full store, never the filtered view.
//! - Overdue means due strictly before now with a non-terminal status.
//! - Rates are rounded percentages and 0 for an empty denominator.

use crate::model::common::Vocabulary;
use crate::repo::record_store::{Entry, Record};
use chrono::{Days, NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Inputs shared by statistics computations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsContext {
    pub now: NaiveDateTime,
    pub today: NaiveDate,
    /// Width of the "due soon" window in days.
    pub review_window_days: u32,
}

impl StatsContext {
    pub fn new(now: NaiveDateTime, review_window_days: u32) -> Self {
        Self {
            now,
            today: now.date(),
            review_window_days,
        }
    }

    /// Last date counted as "due soon".
    pub fn window_end(&self) -> NaiveDate {
        self.today
            .checked_add_days(Days::new(u64::from(self.review_window_days)))
            .unwrap_or(NaiveDate::MAX)
    }

    /// `date` falls on or before the end of the review window.
    ///
    /// Dates already past count as well.
    pub fn due_within_window(&self, date: NaiveDate) -> bool {
        date <= self.window_end()
    }
}

/// Count of records per vocabulary value, in vocabulary order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tally<T> {
    counts: Vec<(T, usize)>,
}

impl<T: Vocabulary> Tally<T> {
    pub fn get(&self, value: T) -> usize {
        self.counts
            .iter()
            .find(|(candidate, _)| *candidate == value)
            .map_or(0, |(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (T, usize)> + '_ {
        self.counts.iter().copied()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }
}

/// Number of records satisfying `predicate`.
pub fn count_where<R: Record>(entries: &[Entry<R>], predicate: impl Fn(&R) -> bool) -> usize {
    entries
        .iter()
        .filter(|entry| predicate(entry.record()))
        .count()
}

/// Groups records by a vocabulary-valued field.
pub fn count_by<R, T>(entries: &[Entry<R>], key: impl Fn(&R) -> T) -> Tally<T>
where
    R: Record,
    T: Vocabulary,
{
    let counts = T::ALL
        .iter()
        .map(|value| {
            let count = count_where(entries, |record| key(record) == *value);
            (*value, count)
        })
        .collect();
    Tally { counts }
}

/// Records due strictly before `now` whose status is not terminal.
pub fn overdue_count<R: Record>(entries: &[Entry<R>], now: NaiveDateTime) -> usize {
    count_where(entries, |record| record.is_overdue(now))
}

/// Sum of a numeric field over every record.
pub fn sum_by<R: Record>(entries: &[Entry<R>], value: impl Fn(&R) -> f64) -> f64 {
    entries.iter().map(|entry| value(entry.record())).sum()
}

/// `part / total` as a rounded percentage; 0 when `total` is 0.
pub fn percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let ratio = part as f64 / total as f64 * 100.0;
    ratio.round().clamp(0.0, f64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::{percentage, StatsContext};
    use chrono::NaiveDate;

    #[test]
    fn percentage_rounds_and_handles_empty_total() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(5, 5), 100);
    }

    #[test]
    fn review_window_includes_past_and_boundary_dates() {
        let now = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let ctx = StatsContext::new(now, 30);
        assert_eq!(ctx.today, now.date());
        assert!(ctx.due_within_window(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()));
        assert!(ctx.due_within_window(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()));
        assert!(!ctx.due_within_window(NaiveDate::from_ymd_opt(2024, 7, 2).unwrap()));
    }
}
