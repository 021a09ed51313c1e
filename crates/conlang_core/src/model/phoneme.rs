//! Phoneme domain model.
//!
//! # Responsibility
//! - Hold one phonemic unit and the graphemes that spell it.
//! - Carry a selection weight for word generators.
//!
//! # Invariants
//! - `symbol` is non-empty and never changes after construction.
//! - `letters` holds no duplicates; order is not meaningful.

use crate::error::{LexiconError, LexiconResult};
use crate::model::kind::{Kind, Tagged};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Full readable record of a phoneme, also its wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhonemeRecord {
    pub symbol: String,
    /// Sorted, without duplicates.
    pub letters: Vec<String>,
    pub weight: u32,
}

/// One phoneme of a language inventory.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "PhonemeRecord", into = "PhonemeRecord")]
pub struct Phoneme {
    /// Canonical phonetic identifier, usually an IPA symbol.
    symbol: String,
    letters: BTreeSet<String>,
    /// Generator bias. Zero means "no preference".
    weight: u32,
}

impl Phoneme {
    /// Creates a phoneme from its symbol, initial letters and weight.
    ///
    /// # Errors
    /// - Returns `InvalidArgument` when `symbol` is blank.
    pub fn new<I, S>(symbol: impl Into<String>, letters: I, weight: u32) -> LexiconResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let symbol = symbol.into();
        if symbol.trim().is_empty() {
            return Err(LexiconError::InvalidArgument(
                "phoneme symbol must not be blank".to_string(),
            ));
        }
        Ok(Self {
            symbol,
            letters: letters.into_iter().map(Into::into).collect(),
            weight,
        })
    }

    /// Creates a phoneme with no letters and weight 0.
    pub fn bare(symbol: impl Into<String>) -> LexiconResult<Self> {
        Self::new(symbol, Vec::<String>::new(), 0)
    }

    /// Symbol, letters and weight in one value.
    pub fn record(&self) -> PhonemeRecord {
        PhonemeRecord {
            symbol: self.symbol.clone(),
            letters: self.letters(),
            weight: self.weight,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Letters realizing this phoneme, sorted.
    pub fn letters(&self) -> Vec<String> {
        self.letters.iter().cloned().collect()
    }

    pub fn has_letter(&self, letter: &str) -> bool {
        self.letters.contains(letter)
    }

    /// Smallest letter in sort order, used as the default spelling.
    pub fn primary_letter(&self) -> Option<&str> {
        self.letters.iter().next().map(String::as_str)
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn add_letter(&mut self, letter: impl Into<String>) {
        self.letters.insert(letter.into());
    }

    pub fn add_letters<I, S>(&mut self, letters: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.letters.extend(letters.into_iter().map(Into::into));
    }

    pub fn set_weight(&mut self, weight: u32) {
        self.weight = weight;
    }

    /// Removes one letter. Returns whether it was present.
    pub fn remove_letter(&mut self, letter: &str) -> bool {
        self.letters.remove(letter)
    }

    /// Swaps `letter` for `new_letter`.
    ///
    /// `new_letter` is added even when `letter` was absent. Returns whether
    /// `letter` was present.
    pub fn replace_letter(&mut self, letter: &str, new_letter: impl Into<String>) -> bool {
        let removed = self.remove_letter(letter);
        self.add_letter(new_letter);
        removed
    }

    /// Replaces the whole letter set.
    pub fn replace_letters<I, S>(&mut self, letters: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.letters = letters.into_iter().map(Into::into).collect();
    }
}

impl TryFrom<PhonemeRecord> for Phoneme {
    type Error = LexiconError;

    fn try_from(record: PhonemeRecord) -> Result<Self, Self::Error> {
        Self::new(record.symbol, record.letters, record.weight)
    }
}

impl From<Phoneme> for PhonemeRecord {
    fn from(value: Phoneme) -> Self {
        value.record()
    }
}

impl Tagged for Phoneme {
    fn kind(&self) -> Kind {
        Kind::Phoneme
    }
}

#[cfg(test)]
mod tests {
    use super::Phoneme;
    use crate::error::LexiconError;

    #[test]
    fn new_rejects_blank_symbol() {
        let err = Phoneme::new("  ", ["a"], 1).expect_err("blank symbol must fail");
        assert!(matches!(err, LexiconError::InvalidArgument(_)));
    }

    #[test]
    fn duplicate_letters_collapse() {
        let mut phoneme = Phoneme::new("a", ["a", "a"], 0).unwrap();
        phoneme.add_letters(["á", "a"]);
        assert_eq!(phoneme.letters(), vec!["a".to_string(), "á".to_string()]);
    }

    #[test]
    fn replace_letter_adds_even_when_old_is_missing() {
        let mut phoneme = Phoneme::new("k", ["k"], 0).unwrap();
        assert!(!phoneme.replace_letter("q", "c"));
        assert_eq!(phoneme.letters(), vec!["c".to_string(), "k".to_string()]);
    }

    #[test]
    fn record_lists_every_field() {
        let phoneme = Phoneme::new("θ", ["th", "þ"], 4).unwrap();
        let record = phoneme.record();
        assert_eq!(record.symbol, "θ");
        assert_eq!(record.letters, vec!["th".to_string(), "þ".to_string()]);
        assert_eq!(record.weight, 4);
        assert!(phoneme.has_letter("þ"));
        assert!(!phoneme.has_letter("t"));
    }

    #[test]
    fn primary_letter_is_smallest() {
        let phoneme = Phoneme::new("ʃ", ["sh", "sch"], 0).unwrap();
        assert_eq!(phoneme.primary_letter(), Some("sch"));
        assert_eq!(Phoneme::bare("ʔ").unwrap().primary_letter(), None);
    }
}
