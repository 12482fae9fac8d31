//! Domain records for every feature area.
//!
//! # Responsibility
//! - Define one root record type per area plus its nested line types.
//! - Tie each status vocabulary to its lifecycle rules.
//!
//! # Invariants
//! - Records carry no identity; the store envelope owns id and creation date.
//! - Categorical fields always hold a value from their closed vocabulary.

pub mod capa;
pub mod common;
pub mod document;
pub mod fai;
pub mod final_inspection;
pub mod incoming;
pub mod ipi;
pub mod mrb;
pub mod ncr;
pub mod procedure;
pub mod training;
pub mod user;
