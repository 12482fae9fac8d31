//! Procedure library area: filter, statistics and access tracking.
//!
//! Viewing and downloading a procedure both count toward its download total.

use crate::form::procedure::ProcedureForm;
use crate::model::common::RecordId;
use crate::model::procedure::{
    Difficulty, ProcedureCategory, ProcedureRecord, ProcedureStatus, ProcedureType, Usage,
};
use crate::navigation::FeatureArea;
use crate::repo::record_store::Entry;
use crate::search::{selector_matches, text_matches, RecordFilter};
use crate::seed;
use crate::service::session::{Feature, FeatureSession};
use crate::stats::{count_where, StatsContext};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub struct Procedure;

pub type ProcedureSession = FeatureSession<Procedure>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcedureFilter {
    /// Matches title, number, description and any tag.
    pub search: String,
    pub category: Option<ProcedureCategory>,
    pub kind: Option<ProcedureType>,
    pub status: Option<ProcedureStatus>,
    pub difficulty: Option<Difficulty>,
    pub usage: Option<Usage>,
}

impl RecordFilter<ProcedureRecord> for ProcedureFilter {
    fn matches(&self, record: &ProcedureRecord) -> bool {
        let mut fields: Vec<&str> = vec![
            &record.title,
            &record.procedure_number,
            &record.description,
        ];
        fields.extend(record.tags.iter().map(String::as_str));

        text_matches(&self.search, &fields)
            && selector_matches(self.category, record.category)
            && selector_matches(self.kind, record.kind)
            && selector_matches(self.status, record.status)
            && selector_matches(self.difficulty, record.difficulty)
            && selector_matches(self.usage, record.usage)
    }

    fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.category.is_none()
            && self.kind.is_none()
            && self.status.is_none()
            && self.difficulty.is_none()
            && self.usage.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcedureStats {
    pub total: usize,
    pub training_required: usize,
    /// Next review on or before the end of the review window.
    pub review_due: usize,
    pub total_downloads: u64,
}

/// Whole days from `today` until `review`; negative once past.
pub fn days_until_review(review: NaiveDate, today: NaiveDate) -> i64 {
    (review - today).num_days()
}

impl Feature for Procedure {
    type Record = ProcedureRecord;
    type Form = ProcedureForm;
    type Filter = ProcedureFilter;
    type Stats = ProcedureStats;

    const AREA: FeatureArea = FeatureArea::Procedures;

    fn statistics(entries: &[Entry<ProcedureRecord>], ctx: &StatsContext) -> ProcedureStats {
        ProcedureStats {
            total: entries.len(),
            training_required: count_where(entries, |r| r.training_required),
            review_due: count_where(entries, |r| ctx.due_within_window(r.next_review_date)),
            total_downloads: entries
                .iter()
                .map(|e| u64::from(e.record().download_count))
                .sum(),
        }
    }

    fn seed() -> Vec<Entry<ProcedureRecord>> {
        seed::documents::procedure_entries()
    }
}

impl FeatureSession<Procedure> {
    pub fn record_view(&mut self, id: RecordId) -> Option<u32> {
        self.bump_downloads(id, "view")
    }

    pub fn record_download(&mut self, id: RecordId) -> Option<u32> {
        self.bump_downloads(id, "download")
    }

    fn bump_downloads(&mut self, id: RecordId, action: &'static str) -> Option<u32> {
        let mut count = None;
        self.act(id, action, |record| {
            record.download_count = record.download_count.saturating_add(1);
            count = Some(record.download_count);
        });
        count
    }
}
