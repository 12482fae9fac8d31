//! CAPA area: filter, statistics and session binding.

use crate::form::capa::CapaForm;
use crate::model::capa::{CapaRecord, CapaStatus};
use crate::navigation::FeatureArea;
use crate::repo::record_store::Entry;
use crate::search::{selector_matches, text_matches, RecordFilter};
use crate::seed;
use crate::service::session::{Feature, FeatureSession};
use crate::stats::{count_where, overdue_count, StatsContext};
use serde::Serialize;

/// CAPA feature binding.
#[derive(Debug, Clone, Copy)]
pub struct Capa;

pub type CapaSession = FeatureSession<Capa>;

/// Status selector plus search over number, title and assignee.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CapaFilter {
    pub search: String,
    pub status: Option<CapaStatus>,
}

impl RecordFilter<CapaRecord> for CapaFilter {
    fn matches(&self, record: &CapaRecord) -> bool {
        text_matches(
            &self.search,
            &[&record.capa_number, &record.title, &record.assigned_to],
        ) && selector_matches(self.status, record.status)
    }

    fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.status.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapaStats {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub closed: usize,
    pub overdue: usize,
}

impl Feature for Capa {
    type Record = CapaRecord;
    type Form = CapaForm;
    type Filter = CapaFilter;
    type Stats = CapaStats;

    const AREA: FeatureArea = FeatureArea::Capa;

    fn statistics(entries: &[Entry<CapaRecord>], ctx: &StatsContext) -> CapaStats {
        CapaStats {
            total: entries.len(),
            open: count_where(entries, |r| r.status == CapaStatus::Open),
            in_progress: count_where(entries, |r| r.status == CapaStatus::InProgress),
            closed: count_where(entries, |r| r.status == CapaStatus::Closed),
            overdue: overdue_count(entries, ctx.now),
        }
    }

    fn seed() -> Vec<Entry<CapaRecord>> {
        seed::quality::capa_entries()
    }
}
