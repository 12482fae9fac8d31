//! NCR area: filter, statistics and the close action.

use crate::form::ncr::NcrForm;
use crate::model::common::{RecordId, Severity};
use crate::model::ncr::{NcrCategory, NcrRecord, NcrStatus};
use crate::navigation::FeatureArea;
use crate::repo::record_store::Entry;
use crate::search::{label_matches, selector_matches, text_matches, RecordFilter};
use crate::seed;
use crate::service::session::{Feature, FeatureSession};
use crate::stats::{count_by, count_where, overdue_count, sum_by, StatsContext, Tally};
use crate::workflow::WorkflowStatus;
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub struct Ncr;

pub type NcrSession = FeatureSession<Ncr>;

/// Search over number, title and description; category, severity,
/// status and department selectors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NcrFilter {
    pub search: String,
    pub category: Option<NcrCategory>,
    pub severity: Option<Severity>,
    pub status: Option<NcrStatus>,
    pub department: Option<String>,
}

impl RecordFilter<NcrRecord> for NcrFilter {
    fn matches(&self, record: &NcrRecord) -> bool {
        text_matches(
            &self.search,
            &[&record.ncr_number, &record.title, &record.description],
        ) && selector_matches(self.category, record.category)
            && selector_matches(self.severity, record.severity)
            && selector_matches(self.status, record.status)
            && label_matches(&self.department, &record.department)
    }

    fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.category.is_none()
            && self.severity.is_none()
            && self.status.is_none()
            && self
                .department
                .as_deref()
                .map_or(true, |d| d.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NcrStats {
    pub total: usize,
    /// Records whose status is not terminal.
    pub active: usize,
    pub overdue: usize,
    /// Sum of recorded costs; records without a cost count as 0.
    pub total_cost: f64,
    pub by_status: Tally<NcrStatus>,
    pub by_severity: Tally<Severity>,
}

impl Feature for Ncr {
    type Record = NcrRecord;
    type Form = NcrForm;
    type Filter = NcrFilter;
    type Stats = NcrStats;

    const AREA: FeatureArea = FeatureArea::Ncr;

    fn statistics(entries: &[Entry<NcrRecord>], ctx: &StatsContext) -> NcrStats {
        NcrStats {
            total: entries.len(),
            active: count_where(entries, |r| !r.status.is_terminal()),
            overdue: overdue_count(entries, ctx.now),
            total_cost: sum_by(entries, |r| r.cost.unwrap_or(0.0)),
            by_status: count_by(entries, |r| r.status),
            by_severity: count_by(entries, |r| r.severity),
        }
    }

    fn seed() -> Vec<Entry<NcrRecord>> {
        seed::quality::ncr_entries()
    }
}

impl FeatureSession<Ncr> {
    /// Closes the NCR and stamps today as its actual close date.
    pub fn close(&mut self, id: RecordId) -> bool {
        let today = self.today();
        self.act(id, "close", |record| {
            record.status = NcrStatus::Closed;
            record.actual_close_date = Some(today);
        })
    }
}
