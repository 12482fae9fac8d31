//! Demonstration records each area can start with.
//!
//! # Invariants
//! - Every seed entry gets a fresh id; business numbers are unique per area.
//! - Entries are listed most recent first, like a live store.

pub mod admin;
pub mod documents;
pub mod inspection;
pub mod quality;

use crate::model::common::RecordId;
use crate::repo::record_store::Entry;
use chrono::{NaiveDate, NaiveDateTime};

pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

pub(crate) fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .expect("valid seed time")
}

pub(crate) fn entry<R>(created_on: NaiveDate, record: R) -> Entry<R> {
    Entry::new(RecordId::new_v4(), created_on, record)
}

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}
