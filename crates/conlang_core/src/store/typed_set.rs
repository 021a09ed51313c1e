//! Kind-gated value set.
//!
//! # Responsibility
//! - Hold values by identity, admitting only accepted kinds.
//! - Offer atomic replace and snapshot-on-clear.
//!
//! # Invariants
//! - Empty `accepted` list admits every kind.
//! - Every stored value passed `is_valid` when it was inserted.
//! - Failed `add`/`update` calls leave the set unchanged.

use crate::error::{recover, LexiconError, LexiconResult};
use crate::model::kind::{Kind, Tagged};
use crate::store::snapshot::Snapshot;
use log::debug;
use std::collections::BTreeSet;

const DEFAULT_LABEL: &str = "TypedSet";

/// Set of values constrained to a declared list of kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedSet<T: Tagged + Ord + Clone> {
    label: &'static str,
    accepted: Vec<Kind>,
    values: BTreeSet<T>,
}

impl<T: Tagged + Ord + Clone> Default for TypedSet<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: Tagged + Ord + Clone> TypedSet<T> {
    /// Creates a set accepting the given kinds (all kinds when empty).
    pub fn new(accepted: impl IntoIterator<Item = Kind>) -> Self {
        Self::labelled(DEFAULT_LABEL, accepted)
    }

    /// Like `new`, with a component label used in diagnostics.
    pub fn labelled(label: &'static str, accepted: impl IntoIterator<Item = Kind>) -> Self {
        Self {
            label,
            accepted: accepted.into_iter().collect(),
            values: BTreeSet::new(),
        }
    }

    pub fn accepted_kinds(&self) -> &[Kind] {
        &self.accepted
    }

    pub fn is_valid(&self, value: &T) -> bool {
        self.accepted.is_empty() || self.accepted.contains(&value.kind())
    }

    pub fn has(&self, value: &T) -> bool {
        self.values.contains(value)
    }

    /// Read-only view of the current contents.
    pub fn get(&self) -> &BTreeSet<T> {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Inserts `value` and returns it.
    ///
    /// # Errors
    /// - `InvalidKind` when `value` is not of an accepted kind.
    pub fn try_add(&mut self, value: T) -> LexiconResult<T> {
        self.check_kind(&value)?;
        self.values.insert(value.clone());
        debug!("{} add ok kind={}", self.label, value.kind());
        Ok(value)
    }

    pub fn add(&mut self, value: T) -> Option<T> {
        let label = self.label;
        recover(label, "add", self.try_add(value))
    }

    /// Replaces `old` with `new` in one step.
    ///
    /// # Errors
    /// - `UnknownKey` when `old` is not stored.
    /// - `InvalidKind` when `new` is not of an accepted kind.
    pub fn try_update(&mut self, old: &T, new: T) -> LexiconResult<T> {
        if !self.values.contains(old) {
            return Err(LexiconError::UnknownKey(format!("{} value", old.kind())));
        }
        self.check_kind(&new)?;
        self.values.remove(old);
        self.values.insert(new.clone());
        Ok(new)
    }

    pub fn update(&mut self, old: &T, new: T) -> Option<T> {
        let label = self.label;
        recover(label, "update", self.try_update(old, new))
    }

    /// Removes `value`. Returns whether it was present.
    pub fn remove(&mut self, value: &T) -> bool {
        self.values.remove(value)
    }

    /// Empties the set and returns what it held.
    pub fn clear(&mut self) -> Snapshot<BTreeSet<T>> {
        Snapshot::new(std::mem::take(&mut self.values))
    }

    fn check_kind(&self, value: &T) -> LexiconResult<()> {
        if self.is_valid(value) {
            return Ok(());
        }
        Err(LexiconError::InvalidKind {
            expected: self.accepted.clone(),
            found: value.kind(),
        })
    }
}
