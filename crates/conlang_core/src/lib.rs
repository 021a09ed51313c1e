//! Core word-building toolkit for constructed languages.
//! Phoneme inventories, affix indexes, sound-change rules and dictionaries.

pub mod error;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use error::{LexiconError, LexiconResult};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig};
pub use model::affix::{Affix, AffixField, AffixPatch};
pub use model::kind::{Item, Kind, Tagged};
pub use model::phoneme::{Phoneme, PhonemeRecord};
pub use model::rule::{Environment, Rule, Slot};
pub use service::language::{Language, SoundChange, Unchanged};
pub use store::affix_store::{
    is_affix_form, is_prefix_form, is_suffix_form, AffixIndex, AffixSlot, AffixStore,
};
pub use store::dictionary::{Dictionary, Entry, EntryField, EntryPatch};
pub use store::rule_store::{RuleId, RuleIndex, RuleStore};
pub use store::snapshot::Snapshot;
pub use store::typed_set::TypedSet;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
