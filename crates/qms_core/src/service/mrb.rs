//! MRB area: filter, statistics and board actions.
//!
//! # Invariants
//! - Approve sets `Approved` plus approved-by/date; reject sets `Rejected`
//!   plus reviewed-by/date. Disposition is left to the board's form edit.
//! - Comments get ids one above the record's current maximum.

use crate::form::mrb::MrbForm;
use crate::model::common::RecordId;
use crate::model::mrb::{CommentType, MrbDisposition, MrbRecord, MrbStatus};
use crate::navigation::FeatureArea;
use crate::repo::record_store::Entry;
use crate::search::{selector_matches, text_matches, RecordFilter};
use crate::seed;
use crate::service::session::{Feature, FeatureSession};
use crate::stats::{count_where, overdue_count, sum_by, StatsContext};
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub struct Mrb;

pub type MrbSession = FeatureSession<Mrb>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MrbFilter {
    /// Matches number, title and part number.
    pub search: String,
    pub status: Option<MrbStatus>,
    pub disposition: Option<MrbDisposition>,
}

impl RecordFilter<MrbRecord> for MrbFilter {
    fn matches(&self, record: &MrbRecord) -> bool {
        text_matches(
            &self.search,
            &[&record.mrb_number, &record.title, &record.part_number],
        ) && selector_matches(self.status, record.status)
            && selector_matches(self.disposition, record.disposition)
    }

    fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.status.is_none() && self.disposition.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MrbStats {
    pub total: usize,
    pub submitted: usize,
    pub under_review: usize,
    pub board_review: usize,
    pub approved: usize,
    pub overdue: usize,
    pub total_estimated_cost: f64,
}

impl Feature for Mrb {
    type Record = MrbRecord;
    type Form = MrbForm;
    type Filter = MrbFilter;
    type Stats = MrbStats;

    const AREA: FeatureArea = FeatureArea::Mrb;

    fn statistics(entries: &[Entry<MrbRecord>], ctx: &StatsContext) -> MrbStats {
        MrbStats {
            total: entries.len(),
            submitted: count_where(entries, |r| r.status == MrbStatus::Submitted),
            under_review: count_where(entries, |r| r.status == MrbStatus::UnderReview),
            board_review: count_where(entries, |r| r.status == MrbStatus::BoardReview),
            approved: count_where(entries, |r| r.status == MrbStatus::Approved),
            overdue: overdue_count(entries, ctx.now),
            total_estimated_cost: sum_by(entries, |r| r.estimated_cost),
        }
    }

    fn seed() -> Vec<Entry<MrbRecord>> {
        seed::quality::mrb_entries()
    }
}

impl FeatureSession<Mrb> {
    pub fn approve(&mut self, id: RecordId) -> bool {
        let today = self.today();
        let user = self.acting_user().to_string();
        self.act(id, "approve", |record| {
            record.status = MrbStatus::Approved;
            record.approved_by = Some(user);
            record.approved_date = Some(today);
        })
    }

    pub fn reject(&mut self, id: RecordId) -> bool {
        let today = self.today();
        let user = self.acting_user().to_string();
        self.act(id, "reject", |record| {
            record.status = MrbStatus::Rejected;
            record.reviewed_by = Some(user);
            record.reviewed_date = Some(today);
        })
    }

    /// Appends a comment by the acting user; returns its id.
    ///
    /// Blank comments are ignored.
    pub fn add_comment(&mut self, id: RecordId, text: &str, kind: CommentType) -> Option<u32> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let now = self.now();
        let user = self.acting_user().to_string();
        let mut comment_id = None;
        self.act(id, "add_comment", |record| {
            comment_id = Some(record.push_comment(user, now, text.to_string(), kind));
        });
        comment_id
    }
}
