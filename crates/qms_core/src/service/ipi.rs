//! In-process inspection area: filter, statistics and review actions.
//!
//! # Invariants
//! - First-pass yield is accepted over inspected quantity across every
//!   record, as a rounded percentage.
//! - Only approve stamps the reviewer; reject and hold change status and
//!   disposition alone.

use crate::form::ipi::IpiForm;
use crate::model::common::RecordId;
use crate::model::ipi::{IpiDisposition, IpiRecord, IpiStatus};
use crate::navigation::FeatureArea;
use crate::repo::record_store::Entry;
use crate::search::{label_matches, selector_matches, text_matches, RecordFilter};
use crate::seed;
use crate::service::session::{Feature, FeatureSession};
use crate::stats::{count_by, StatsContext, Tally};
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub struct Ipi;

pub type IpiSession = FeatureSession<Ipi>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IpiFilter {
    /// Matches inspection number, work order and part number.
    pub search: String,
    pub status: Option<IpiStatus>,
    pub work_center: Option<String>,
}

impl RecordFilter<IpiRecord> for IpiFilter {
    fn matches(&self, record: &IpiRecord) -> bool {
        text_matches(
            &self.search,
            &[
                &record.inspection_number,
                &record.work_order,
                &record.part_number,
            ],
        ) && selector_matches(self.status, record.status)
            && label_matches(&self.work_center, &record.work_center)
    }

    fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.status.is_none()
            && self
                .work_center
                .as_deref()
                .map_or(true, |wc| wc.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IpiStats {
    pub total: usize,
    pub by_status: Tally<IpiStatus>,
    pub total_defects: u64,
    pub first_pass_yield: u32,
}

impl IpiStats {
    pub fn in_progress(&self) -> usize {
        self.by_status.get(IpiStatus::InProgress)
    }

    pub fn hold(&self) -> usize {
        self.by_status.get(IpiStatus::Hold)
    }

    pub fn approved(&self) -> usize {
        self.by_status.get(IpiStatus::Approved)
    }

    pub fn rejected(&self) -> usize {
        self.by_status.get(IpiStatus::Rejected)
    }

    pub fn rework(&self) -> usize {
        self.by_status.get(IpiStatus::ReworkRequired)
    }
}

/// Accepted over inspected quantity as a rounded percentage.
pub fn first_pass_yield(entries: &[Entry<IpiRecord>]) -> u32 {
    let inspected: u64 = entries
        .iter()
        .map(|e| u64::from(e.record().inspected_quantity))
        .sum();
    let accepted: u64 = entries
        .iter()
        .map(|e| u64::from(e.record().accepted_quantity))
        .sum();
    if inspected == 0 {
        return 0;
    }
    (accepted as f64 / inspected as f64 * 100.0).round() as u32
}

impl Feature for Ipi {
    type Record = IpiRecord;
    type Form = IpiForm;
    type Filter = IpiFilter;
    type Stats = IpiStats;

    const AREA: FeatureArea = FeatureArea::InProcessInspection;

    fn statistics(entries: &[Entry<IpiRecord>], _ctx: &StatsContext) -> IpiStats {
        IpiStats {
            total: entries.len(),
            by_status: count_by(entries, |r| r.status),
            total_defects: entries.iter().map(|e| e.record().defect_quantity()).sum(),
            first_pass_yield: first_pass_yield(entries),
        }
    }

    fn seed() -> Vec<Entry<IpiRecord>> {
        seed::inspection::ipi_entries()
    }
}

impl FeatureSession<Ipi> {
    pub fn approve(&mut self, id: RecordId) -> bool {
        let today = self.today();
        let user = self.acting_user().to_string();
        self.act(id, "approve", |record| {
            record.status = IpiStatus::Approved;
            record.disposition = IpiDisposition::Accept;
            record.reviewed_by = Some(user);
            record.reviewed_date = Some(today);
        })
    }

    pub fn reject(&mut self, id: RecordId) -> bool {
        self.act(id, "reject", |record| {
            record.status = IpiStatus::Rejected;
            record.disposition = IpiDisposition::Reject;
        })
    }

    pub fn hold(&mut self, id: RecordId) -> bool {
        self.act(id, "hold", |record| {
            record.status = IpiStatus::Hold;
            record.disposition = IpiDisposition::Hold;
        })
    }
}
