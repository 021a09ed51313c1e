//! In-memory stores for one language session.
//!
//! # Responsibility
//! - Own the collections behind inventories, affixes, rules and words.
//! - Expose strict `try_*` operations and lenient twins that log and return
//!   an absent value on failure.
//!
//! # Invariants
//! - Stores never reference each other; callers thread data between them.
//! - No store is internally synchronized.

pub mod affix_store;
pub mod dictionary;
pub mod rule_store;
pub mod snapshot;
pub mod typed_set;
