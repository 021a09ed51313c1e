//! Affix domain model.
//!
//! # Responsibility
//! - Hold one bound morpheme with its grammatical placement.
//! - Support partial updates that keep unnamed fields.
//!
//! # Invariants
//! - All four fields are always present (possibly empty).
//! - `set` only touches fields present in the patch; an empty string is a
//!   real value, not a "keep" marker. Use `clear_field` to empty a field.

use crate::model::kind::{Kind, Tagged};
use serde::{Deserialize, Serialize};

/// One bound morpheme: prefix/suffix material plus category and grammeme.
///
/// The value is its own full record: it holds no hidden state, and `set` and
/// `clear_field` hand back the whole updated affix.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Affix {
    prefix: String,
    suffix: String,
    /// Grammatical dimension, e.g. `tense`.
    category: String,
    /// Value within `category`, e.g. `past`.
    grammeme: String,
}

/// Named affix field, used by `Affix::clear_field`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffixField {
    Prefix,
    Suffix,
    Category,
    Grammeme,
}

/// Partial affix update. Absent fields keep their previous value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AffixPatch {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub category: Option<String>,
    pub grammeme: Option<String>,
}

impl AffixPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prefix(mut self, value: impl Into<String>) -> Self {
        self.prefix = Some(value.into());
        self
    }

    pub fn suffix(mut self, value: impl Into<String>) -> Self {
        self.suffix = Some(value.into());
        self
    }

    pub fn category(mut self, value: impl Into<String>) -> Self {
        self.category = Some(value.into());
        self
    }

    pub fn grammeme(mut self, value: impl Into<String>) -> Self {
        self.grammeme = Some(value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.prefix.is_none()
            && self.suffix.is_none()
            && self.category.is_none()
            && self.grammeme.is_none()
    }
}

impl Affix {
    pub fn new(
        prefix: impl Into<String>,
        suffix: impl Into<String>,
        category: impl Into<String>,
        grammeme: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
            category: category.into(),
            grammeme: grammeme.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn grammeme(&self) -> &str {
        &self.grammeme
    }

    /// `(prefix, suffix)` pair.
    pub fn circumfix(&self) -> (&str, &str) {
        (&self.prefix, &self.suffix)
    }

    /// `(category, grammeme)` pair.
    pub fn grammar(&self) -> (&str, &str) {
        (&self.category, &self.grammeme)
    }

    /// Applies a partial update and returns the resulting record.
    pub fn set(&mut self, patch: AffixPatch) -> &Self {
        if let Some(prefix) = patch.prefix {
            self.prefix = prefix;
        }
        if let Some(suffix) = patch.suffix {
            self.suffix = suffix;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(grammeme) = patch.grammeme {
            self.grammeme = grammeme;
        }
        self
    }

    pub fn clear_field(&mut self, field: AffixField) -> &Self {
        match field {
            AffixField::Prefix => self.prefix.clear(),
            AffixField::Suffix => self.suffix.clear(),
            AffixField::Category => self.category.clear(),
            AffixField::Grammeme => self.grammeme.clear(),
        }
        self
    }
}

impl Tagged for Affix {
    fn kind(&self) -> Kind {
        Kind::Affix
    }
}
