//! Grammatical affix index.
//!
//! # Responsibility
//! - File affix forms under `(category, grammeme)` keys.
//! - Split forms into prefix and suffix sets by separator placement.
//!
//! # Invariants
//! - A key exists only once a form has been filed under it.
//! - `un-` (trailing separator) is a prefix form, `-ed` (leading separator) a
//!   suffix form. `-x-` satisfies both tests and lives in both sets.
//! - A bare separator is not an affix form.

use crate::error::{recover, LexiconError, LexiconResult};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

const COMPONENT: &str = "Affixes";

/// Character marking where an affix attaches to its stem.
pub const SEPARATOR: char = '-';

/// Forms filed under one `(category, grammeme)` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffixSlot {
    pub prefixes: BTreeSet<String>,
    pub suffixes: BTreeSet<String>,
}

/// `category -> grammeme -> slot`.
pub type AffixIndex = BTreeMap<String, BTreeMap<String, AffixSlot>>;

/// Returns whether `form` has a separator at one end and some material.
pub fn is_affix_form(form: &str) -> bool {
    (form.starts_with(SEPARATOR) || form.ends_with(SEPARATOR))
        && !form.trim_matches(SEPARATOR).is_empty()
}

/// Prefix forms attach before the stem: `un-`.
pub fn is_prefix_form(form: &str) -> bool {
    is_affix_form(form) && form.ends_with(SEPARATOR)
}

/// Suffix forms attach after the stem: `-ed`.
///
/// The separator marks the side facing the stem, so a leading `-` means
/// suffix.
pub fn is_suffix_form(form: &str) -> bool {
    is_affix_form(form) && form.starts_with(SEPARATOR)
}

/// Two-level index from grammatical features to affix forms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AffixStore {
    index: AffixIndex,
}

impl AffixStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files `form` under `(category, grammeme)` and returns the full index.
    ///
    /// # Errors
    /// - `InvalidArgument` when `category` or `grammeme` is blank.
    /// - `MalformedAffix` when `form` is not an affix form.
    pub fn try_add(
        &mut self,
        category: &str,
        grammeme: &str,
        form: &str,
    ) -> LexiconResult<&AffixIndex> {
        if category.trim().is_empty() || grammeme.trim().is_empty() {
            return Err(LexiconError::InvalidArgument(format!(
                "blank grammatical feature `{category}:{grammeme}`"
            )));
        }
        if !is_affix_form(form) {
            return Err(LexiconError::MalformedAffix(form.to_string()));
        }

        let slot = self
            .index
            .entry(category.to_string())
            .or_default()
            .entry(grammeme.to_string())
            .or_default();
        if is_prefix_form(form) {
            slot.prefixes.insert(form.to_string());
        }
        if is_suffix_form(form) {
            slot.suffixes.insert(form.to_string());
        }
        debug!("{COMPONENT} add ok feature={category}:{grammeme} form={form}");

        Ok(&self.index)
    }

    pub fn add(&mut self, category: &str, grammeme: &str, form: &str) -> Option<&AffixIndex> {
        recover(COMPONENT, "add", self.try_add(category, grammeme, form))
    }

    /// # Errors
    /// - `UnknownKey` when no form was filed under `(category, grammeme)`.
    pub fn try_get(&self, category: &str, grammeme: &str) -> LexiconResult<&AffixSlot> {
        self.index
            .get(category)
            .and_then(|grammemes| grammemes.get(grammeme))
            .ok_or_else(|| {
                LexiconError::UnknownKey(format!("grammatical feature {category}:{grammeme}"))
            })
    }

    pub fn get(&self, category: &str, grammeme: &str) -> Option<&AffixSlot> {
        recover(COMPONENT, "get", self.try_get(category, grammeme))
    }

    pub fn index(&self) -> &AffixIndex {
        &self.index
    }

    pub fn categories(&self) -> Vec<&str> {
        self.index.keys().map(String::as_str).collect()
    }

    /// Grammemes filed under `category`; empty for unknown categories.
    pub fn grammemes(&self, category: &str) -> Vec<&str> {
        self.index
            .get(category)
            .map(|grammemes| grammemes.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Every form produced by attaching one filed affix to `stem`.
    ///
    /// Separators are stripped. Results are sorted and unique.
    pub fn try_affix_to(
        &self,
        stem: &str,
        category: &str,
        grammeme: &str,
    ) -> LexiconResult<Vec<String>> {
        let slot = self.try_get(category, grammeme)?;
        let mut forms = BTreeSet::new();
        for prefix in &slot.prefixes {
            forms.insert(format!("{}{stem}", prefix.trim_matches(SEPARATOR)));
        }
        for suffix in &slot.suffixes {
            forms.insert(format!("{stem}{}", suffix.trim_matches(SEPARATOR)));
        }
        Ok(forms.into_iter().collect())
    }

    pub fn affix_to(&self, stem: &str, category: &str, grammeme: &str) -> Option<Vec<String>> {
        recover(
            COMPONENT,
            "affix_to",
            self.try_affix_to(stem, category, grammeme),
        )
    }
}
