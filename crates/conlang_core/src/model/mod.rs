//! Value types shared by every store.
//!
//! # Responsibility
//! - Define phonemes, affixes, rules and environments as plain values.
//! - Tag every value with a `Kind` so collections can gate admission.
//!
//! # Invariants
//! - Values own their data; stores never hold references into callers.

pub mod affix;
pub mod kind;
pub mod phoneme;
pub mod rule;
