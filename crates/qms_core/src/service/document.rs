//! Document control area: filter, statistics and access tracking.

use crate::form::document::DocumentForm;
use crate::model::common::RecordId;
use crate::model::document::{DocumentRecord, DocumentStatus, DocumentType};
use crate::navigation::FeatureArea;
use crate::repo::record_store::Entry;
use crate::search::{label_matches, selector_matches, text_matches, RecordFilter};
use crate::seed;
use crate::service::session::{Feature, FeatureSession};
use crate::stats::{count_by, count_where, StatsContext, Tally};
use log::info;
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub struct Document;

pub type DocumentSession = FeatureSession<Document>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentFilter {
    /// Matches title and document number.
    pub search: String,
    pub kind: Option<DocumentType>,
    pub status: Option<DocumentStatus>,
    pub department: Option<String>,
}

impl RecordFilter<DocumentRecord> for DocumentFilter {
    fn matches(&self, record: &DocumentRecord) -> bool {
        text_matches(&self.search, &[&record.title, &record.document_number])
            && selector_matches(self.kind, record.kind)
            && selector_matches(self.status, record.status)
            && label_matches(&self.department, &record.department)
    }

    fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.kind.is_none()
            && self.status.is_none()
            && self
                .department
                .as_deref()
                .map_or(true, |d| d.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentStats {
    pub total: usize,
    pub by_status: Tally<DocumentStatus>,
    /// Review date on or before the end of the review window.
    pub review_due_soon: usize,
}

impl Feature for Document {
    type Record = DocumentRecord;
    type Form = DocumentForm;
    type Filter = DocumentFilter;
    type Stats = DocumentStats;

    const AREA: FeatureArea = FeatureArea::DocumentControl;

    fn statistics(entries: &[Entry<DocumentRecord>], ctx: &StatsContext) -> DocumentStats {
        DocumentStats {
            total: entries.len(),
            by_status: count_by(entries, |r| r.status),
            review_due_soon: count_where(entries, |r| ctx.due_within_window(r.review_date)),
        }
    }

    fn seed() -> Vec<Entry<DocumentRecord>> {
        seed::documents::document_entries()
    }
}

impl FeatureSession<Document> {
    /// Logs that the document was opened; `false` when it does not exist.
    pub fn record_view(&mut self, id: RecordId) -> bool {
        let found = self.get(id).is_some();
        info!(
            "event=document_viewed module=service area=document id={} found={}",
            id, found
        );
        found
    }

    /// Counts a download and returns the new total.
    pub fn record_download(&mut self, id: RecordId) -> Option<u32> {
        let mut count = None;
        self.act(id, "download", |record| {
            record.download_count = record.download_count.saturating_add(1);
            count = Some(record.download_count);
        });
        count
    }
}
