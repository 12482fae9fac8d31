//! Conjunctive record filtering.
//!
//! # Responsibility
//! - Define the filter contract every area's criteria implement.
//! - Provide the shared text and selector predicates.
//!
//! # Invariants
//! - Text search is a trimmed, case-insensitive substring match.
//! - An empty or unset criterion matches every record.
//! - Filtering never reorders: results keep the store's natural order.

use crate::repo::record_store::{Entry, Record};

/// Search criteria for one record type.
pub trait RecordFilter<R: Record> {
    /// Whether `record` satisfies every set criterion.
    fn matches(&self, record: &R) -> bool;

    /// Whether no criterion is set.
    fn is_empty(&self) -> bool;
}

/// Case-insensitive substring match of `term` against any of `fields`.
///
/// A blank term matches everything.
pub fn text_matches(term: &str, fields: &[&str]) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Equality on an optional categorical selector.
pub fn selector_matches<T: PartialEq>(selected: Option<T>, actual: T) -> bool {
    match selected {
        Some(wanted) => wanted == actual,
        None => true,
    }
}

/// Equality on an optional free-text selector such as a department name.
///
/// Blank selections match everything; comparison ignores ASCII case.
pub fn label_matches(selected: &Option<String>, actual: &str) -> bool {
    match selected.as_deref().map(str::trim) {
        Some(wanted) if !wanted.is_empty() => wanted.eq_ignore_ascii_case(actual.trim()),
        _ => true,
    }
}

/// Entries of `entries` accepted by `filter`, in their original order.
pub fn apply_filters<'a, R, F>(entries: &'a [Entry<R>], filter: &F) -> Vec<&'a Entry<R>>
where
    R: Record,
    F: RecordFilter<R>,
{
    if filter.is_empty() {
        return entries.iter().collect();
    }
    entries
        .iter()
        .filter(|entry| filter.matches(entry.record()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{label_matches, selector_matches, text_matches};
    use crate::model::common::Priority;

    #[test]
    fn text_match_ignores_case_and_padding() {
        assert!(text_matches("  CAPA-2024 ", &["capa-2024-001", "Supplier audit"]));
        assert!(text_matches("audit", &["CAPA-2024-001", "Supplier AUDIT findings"]));
        assert!(!text_matches("torque", &["CAPA-2024-001", "Supplier audit"]));
        assert!(text_matches("", &[]));
    }

    #[test]
    fn unset_selectors_match_everything() {
        assert!(selector_matches(None, Priority::High));
        assert!(selector_matches(Some(Priority::High), Priority::High));
        assert!(!selector_matches(Some(Priority::Low), Priority::High));
        assert!(label_matches(&Some("  ".to_string()), "Quality"));
        assert!(label_matches(&Some("quality".to_string()), "Quality"));
        assert!(!label_matches(&Some("Finance".to_string()), "Quality"));
    }
}
