//! Training records area: filter and statistics.

use crate::form::training::TrainingForm;
use crate::model::training::{
    TrainingCategory, TrainingMethod, TrainingRecord, TrainingStatus, TrainingType,
};
use crate::navigation::FeatureArea;
use crate::repo::record_store::Entry;
use crate::search::{selector_matches, text_matches, RecordFilter};
use crate::seed;
use crate::service::session::{Feature, FeatureSession};
use crate::stats::{count_where, sum_by, StatsContext};
use chrono::Datelike;
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub struct Training;

pub type TrainingSession = FeatureSession<Training>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingFilter {
    /// Matches employee name, training title and training number.
    pub search: String,
    /// Exact employee id.
    pub employee_id: Option<String>,
    pub training_type: Option<TrainingType>,
    pub category: Option<TrainingCategory>,
    pub status: Option<TrainingStatus>,
    pub method: Option<TrainingMethod>,
}

impl RecordFilter<TrainingRecord> for TrainingFilter {
    fn matches(&self, record: &TrainingRecord) -> bool {
        let employee = match self.employee_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => record.employee_id == id,
            _ => true,
        };

        text_matches(
            &self.search,
            &[
                &record.employee_name,
                &record.training_title,
                &record.training_number,
            ],
        ) && employee
            && selector_matches(self.training_type, record.training_type)
            && selector_matches(self.category, record.category)
            && selector_matches(self.status, record.status)
            && selector_matches(self.method, record.method)
    }

    fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self
                .employee_id
                .as_deref()
                .map_or(true, |id| id.trim().is_empty())
            && self.training_type.is_none()
            && self.category.is_none()
            && self.status.is_none()
            && self.method.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingStats {
    pub total: usize,
    /// Certificates expiring on or before the end of the review window,
    /// lapsed ones included.
    pub expiring: usize,
    /// Mean score of completed, scored records; 0 when there are none.
    pub average_score: u32,
    pub total_cost: f64,
    pub completed_this_month: usize,
}

/// Rounded mean score over completed records that carry a score.
pub fn average_score(entries: &[Entry<TrainingRecord>]) -> u32 {
    let scores: Vec<u32> = entries
        .iter()
        .map(Entry::record)
        .filter(|r| r.status == TrainingStatus::Completed)
        .filter_map(|r| r.score)
        .collect();
    if scores.is_empty() {
        return 0;
    }
    let total: u64 = scores.iter().map(|s| u64::from(*s)).sum();
    (total as f64 / scores.len() as f64).round() as u32
}

impl Feature for Training {
    type Record = TrainingRecord;
    type Form = TrainingForm;
    type Filter = TrainingFilter;
    type Stats = TrainingStats;

    const AREA: FeatureArea = FeatureArea::Training;

    fn statistics(entries: &[Entry<TrainingRecord>], ctx: &StatsContext) -> TrainingStats {
        let today = ctx.today;
        TrainingStats {
            total: entries.len(),
            expiring: count_where(entries, |r| {
                r.expiration_date
                    .is_some_and(|date| ctx.due_within_window(date))
            }),
            average_score: average_score(entries),
            total_cost: sum_by(entries, |r| r.cost),
            completed_this_month: count_where(entries, |r| {
                r.status == TrainingStatus::Completed
                    && r.training_date.year() == today.year()
                    && r.training_date.month() == today.month()
            }),
        }
    }

    fn seed() -> Vec<Entry<TrainingRecord>> {
        seed::documents::training_entries()
    }
}

impl FeatureSession<Training> {
    /// Every record of one employee, most recent first.
    pub fn records_for_employee(&self, employee_id: &str) -> Vec<&Entry<TrainingRecord>> {
        self.all()
            .iter()
            .filter(|entry| entry.record().employee_id == employee_id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::average_score;
    use crate::model::common::RecordId;
    use crate::model::training::TrainingStatus;
    use crate::repo::record_store::Entry;
    use crate::seed;
    use chrono::NaiveDate;

    #[test]
    fn average_ignores_unscored_and_open_records() {
        let mut entries = seed::documents::training_entries();
        let first = entries[0].record().clone();
        let mut open = first.clone();
        open.status = TrainingStatus::Scheduled;
        open.score = Some(10);
        let mut unscored = first;
        unscored.status = TrainingStatus::Completed;
        unscored.score = None;
        let created = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
        entries.push(Entry::new(RecordId::new_v4(), created, open));
        entries.push(Entry::new(RecordId::new_v4(), created, unscored));

        let seeded_only = average_score(&seed::documents::training_entries());
        assert_eq!(average_score(&entries), seeded_only);
    }

    #[test]
    fn average_of_nothing_is_zero() {
        assert_eq!(average_score(&[]), 0);
    }
}
