//! Feature-area use cases.
//!
//! # Responsibility
//! - Bind each area's record, form, filter and statistics types into a
//!   [`session::Feature`].
//! - Expose the per-area status actions (approve, reject, hold, ship, ...).
//!
//! # Invariants
//! - Status actions on unknown ids are no-ops reported as `false`.
//! - Actions stamp the configured acting user and the clock's date.

pub mod admin;
pub mod capa;
pub mod document;
pub mod fai;
pub mod final_inspection;
pub mod incoming;
pub mod ipi;
pub mod mrb;
pub mod ncr;
pub mod procedure;
pub mod session;
pub mod training;

pub use session::{Feature, FeatureSession};
