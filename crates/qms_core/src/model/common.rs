//! Shared identity and vocabulary primitives.
//!
//! # Responsibility
//! - Define the stable record identifier used by every store.
//! - Provide the closed-vocabulary contract behind every categorical field.
//!
//! # Invariants
//! - A vocabulary label is unique within its enum.
//! - `Vocabulary::ALL` lists variants in display order.

use uuid::Uuid;

/// Stable identifier for every stored record.
///
/// Assigned by the store at insert time and never reused.
pub type RecordId = Uuid;

/// Closed set of values for one categorical field.
pub trait Vocabulary: Copy + Eq + std::fmt::Debug + 'static {
    /// Every value, in display order.
    const ALL: &'static [Self];

    /// Human-facing label, e.g. `"In Progress"`.
    fn label(self) -> &'static str;

    /// Resolves a display label back to its value.
    fn from_label(label: &str) -> Option<Self> {
        let wanted = label.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|value| value.label().eq_ignore_ascii_case(wanted))
    }
}

/// Declares a closed-vocabulary enum with serde support and display labels.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::model::common::Vocabulary for $name {
            const ALL: &'static [Self] = &[ $( Self::$variant ),+ ];

            fn label(self) -> &'static str {
                match self {
                    $( Self::$variant => $label ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::model::common::Vocabulary::label(*self))
            }
        }
    };
}

pub(crate) use vocabulary;

vocabulary! {
    /// Four-level urgency shared by CAPA, MRB and FAI records.
    pub enum Priority {
        Low => "Low",
        Medium => "Medium",
        High => "High",
        Critical => "Critical",
    }
}

vocabulary! {
    /// Impact grading for non-conformances and defects.
    pub enum Severity {
        Critical => "Critical",
        Major => "Major",
        Minor => "Minor",
    }
}

vocabulary! {
    /// Outcome of a single inspection check.
    pub enum CheckResult {
        Pass => "Pass",
        Fail => "Fail",
        NotApplicable => "N/A",
    }
}

#[cfg(test)]
mod tests {
    use super::{CheckResult, Priority, Vocabulary};

    #[test]
    fn from_label_is_case_insensitive_and_trims() {
        assert_eq!(Priority::from_label(" high "), Some(Priority::High));
        assert_eq!(CheckResult::from_label("n/a"), Some(CheckResult::NotApplicable));
        assert_eq!(Priority::from_label("urgent"), None);
    }

    #[test]
    fn vocabulary_serializes_as_snake_case() {
        let json = serde_json::to_value(CheckResult::NotApplicable).unwrap();
        assert_eq!(json, "not_applicable");
        assert_eq!(Priority::Critical.to_string(), "Critical");
    }
}
