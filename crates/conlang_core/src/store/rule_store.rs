//! Sound-change rule store.
//!
//! # Responsibility
//! - Keep rule values under synthetic identifiers.
//! - Gate admission on the `Rule` kind for untyped inputs.
//!
//! # Invariants
//! - Identifiers are UUID v4 values and are never reissued within one store,
//!   even after `remove` or `clear`.
//! - `update` keeps the identifier of the replaced rule.

use crate::error::{recover, LexiconError, LexiconResult};
use crate::model::kind::{Item, Kind, Tagged};
use crate::model::rule::Rule;
use crate::store::snapshot::Snapshot;
use log::debug;
use std::collections::{BTreeMap, BTreeSet};
use uuid::Uuid;

const COMPONENT: &str = "Rules";

/// Stable identifier minted for each stored rule.
pub type RuleId = Uuid;

/// Rules keyed by identifier.
pub type RuleIndex = BTreeMap<RuleId, Rule>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleStore {
    rules: RuleIndex,
    /// Every id this store has minted. Survives `remove` and `clear` so an id
    /// held by a caller never comes to name a different rule.
    issued: BTreeSet<RuleId>,
}

impl RuleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether `value` carries the `Rule` kind.
    pub fn is_rule(value: &Item) -> bool {
        value.kind() == Kind::Rule
    }

    /// Stores a typed rule and returns its new identifier.
    pub fn insert(&mut self, rule: Rule) -> RuleId {
        let id = self.mint_id();
        debug!("{COMPONENT} add ok id={id}");
        self.rules.insert(id, rule);
        id
    }

    /// # Errors
    /// - `InvalidKind` when `value` is not a rule.
    pub fn try_add(&mut self, value: Item) -> LexiconResult<RuleId> {
        let rule = expect_rule(value)?;
        Ok(self.insert(rule))
    }

    pub fn add(&mut self, value: Item) -> Option<RuleId> {
        recover(COMPONENT, "add", self.try_add(value))
    }

    pub fn has(&self, id: RuleId) -> bool {
        self.rules.contains_key(&id)
    }

    /// # Errors
    /// - `UnknownKey` when `id` is not stored.
    pub fn try_get(&self, id: RuleId) -> LexiconResult<&Rule> {
        self.rules
            .get(&id)
            .ok_or_else(|| LexiconError::UnknownKey(format!("rule {id}")))
    }

    pub fn get(&self, id: RuleId) -> Option<&Rule> {
        recover(COMPONENT, "get", self.try_get(id))
    }

    /// The whole index.
    pub fn all(&self) -> &RuleIndex {
        &self.rules
    }

    pub fn ids(&self) -> Vec<RuleId> {
        self.rules.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Replaces the rule stored at `id`, keeping the identifier.
    ///
    /// # Errors
    /// - `UnknownKey` when `id` is not stored.
    /// - `InvalidKind` when `value` is not a rule.
    pub fn try_update(&mut self, id: RuleId, value: Item) -> LexiconResult<RuleId> {
        let rule = expect_rule(value)?;
        let slot = self
            .rules
            .get_mut(&id)
            .ok_or_else(|| LexiconError::UnknownKey(format!("rule {id}")))?;
        *slot = rule;
        debug!("{COMPONENT} update ok id={id}");
        Ok(id)
    }

    pub fn update(&mut self, id: RuleId, value: Item) -> Option<RuleId> {
        recover(COMPONENT, "update", self.try_update(id, value))
    }

    /// Removes the rule at `id`. Returns whether it was present.
    pub fn remove(&mut self, id: RuleId) -> bool {
        self.rules.remove(&id).is_some()
    }

    /// Empties the store and returns the previous index.
    pub fn clear(&mut self) -> Snapshot<RuleIndex> {
        Snapshot::new(std::mem::take(&mut self.rules))
    }

    /// One readable sentence per stored rule, in identifier order.
    pub fn describe(&self) -> Vec<String> {
        self.rules.values().map(Rule::describe).collect()
    }

    fn mint_id(&mut self) -> RuleId {
        loop {
            let id = Uuid::new_v4();
            if self.issued.insert(id) {
                return id;
            }
        }
    }
}

fn expect_rule(value: Item) -> LexiconResult<Rule> {
    match value {
        Item::Rule(rule) => Ok(rule),
        other => Err(LexiconError::InvalidKind {
            expected: vec![Kind::Rule],
            found: other.kind(),
        }),
    }
}
