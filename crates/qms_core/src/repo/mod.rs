//! Record storage for feature sessions.
//!
//! # Responsibility
//! - Hold each area's records in memory, owned by exactly one session.
//! - Keep identity assignment out of form and service code.
//!
//! # Invariants
//! - No persistence: stores live and die with their session.
//! - Missing ids never surface as errors.

pub mod record_store;
