//! Status lifecycle contracts.
//!
//! # Responsibility
//! - Classify statuses as terminal or active for aggregates.
//! - Hold the per-status successor tables used by strict workflows.
//!
//! # Invariants
//! - Terminal statuses exclude a record from overdue and active counts.
//! - `TransitionPolicy::Permissive` accepts every change; it is the default.
//! - Keeping the same status is always permitted.

use crate::model::common::Vocabulary;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a record.
pub trait WorkflowStatus: Vocabulary {
    /// Whether the status ends the record's active life.
    fn is_terminal(self) -> bool;

    /// Statuses reachable in one step under a strict workflow.
    fn successors(self) -> &'static [Self];

    /// Whether `next` is listed as a successor of `self`.
    fn can_transition_to(self, next: Self) -> bool {
        self == next || self.successors().contains(&next)
    }
}

/// How edit-mode status changes are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPolicy {
    /// Any status may be replaced by any other.
    #[default]
    Permissive,
    /// Only transitions listed in `WorkflowStatus::successors` are allowed.
    Strict,
}

impl TransitionPolicy {
    /// Returns whether moving from `from` to `to` is allowed.
    pub fn permits<S: WorkflowStatus>(self, from: S, to: S) -> bool {
        match self {
            Self::Permissive => true,
            Self::Strict => from.can_transition_to(to),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TransitionPolicy;
    use crate::model::capa::CapaStatus;

    #[test]
    fn permissive_policy_accepts_reopening_closed_record() {
        assert!(TransitionPolicy::Permissive.permits(CapaStatus::Closed, CapaStatus::Open));
    }

    #[test]
    fn strict_policy_follows_successor_table() {
        let strict = TransitionPolicy::Strict;
        assert!(strict.permits(CapaStatus::Open, CapaStatus::InProgress));
        assert!(strict.permits(CapaStatus::Closed, CapaStatus::Closed));
        assert!(!strict.permits(CapaStatus::Closed, CapaStatus::Open));
        assert!(!strict.permits(CapaStatus::Open, CapaStatus::Closed));
    }
}
