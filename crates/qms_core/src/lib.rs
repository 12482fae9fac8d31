//! Core domain logic for the quality management record system.
//! This crate is the single source of truth for record, workflow and
//! statistics invariants; presentation layers only call into it.

pub mod clock;
pub mod config;
pub mod form;
pub mod logging;
pub mod model;
pub mod navigation;
pub mod repo;
pub mod search;
pub mod seed;
pub mod service;
pub mod stats;
pub mod workflow;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, LoggingConfig, QmsConfig, WorkflowConfig};
pub use form::{
    FieldError, FieldErrors, FieldRule, FormController, FormMode, FormModel, SubmitOutcome,
};
pub use logging::{default_log_level, init_from_config, init_logging, logging_status, LoggingError};
pub use model::common::{RecordId, Vocabulary};
pub use navigation::FeatureArea;
pub use repo::record_store::{Entry, Record, RecordStore};
pub use search::RecordFilter;
pub use service::{Feature, FeatureSession};
pub use stats::{StatsContext, Tally};
pub use workflow::{TransitionPolicy, WorkflowStatus};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
