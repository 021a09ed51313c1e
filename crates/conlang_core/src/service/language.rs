//! Language session service.
//!
//! # Responsibility
//! - Own one inventory, affix store, rule store and dictionary per language.
//! - Spell underlying forms through the phoneme inventory.
//! - Record words by running an external sound-change engine.
//!
//! # Invariants
//! - The inventory admits only phonemes, one per symbol.
//! - The service never interprets rules; it hands them to a `SoundChange`.

use crate::error::{recover, LexiconError, LexiconResult};
use crate::model::kind::{Item, Kind};
use crate::model::phoneme::Phoneme;
use crate::model::rule::Rule;
use crate::store::affix_store::{AffixIndex, AffixStore};
use crate::store::dictionary::{Dictionary, Entry};
use crate::store::rule_store::{RuleId, RuleStore};
use crate::store::typed_set::TypedSet;
use log::info;

const COMPONENT: &str = "Language";
const INVENTORY: &str = "Inventory";

/// Engine that turns an underlying form into a surface form.
pub trait SoundChange {
    fn apply(&self, underlying: &str, rules: &RuleStore) -> String;
}

/// Engine that leaves every form as it is.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unchanged;

impl SoundChange for Unchanged {
    fn apply(&self, underlying: &str, _rules: &RuleStore) -> String {
        underlying.to_string()
    }
}

/// One constructed language and its stores.
#[derive(Debug, Clone)]
pub struct Language {
    name: String,
    display_name: String,
    inventory: TypedSet<Item>,
    affixes: AffixStore,
    rules: RuleStore,
    dictionary: Dictionary,
}

impl Language {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        let name = name.into();
        info!("event=language_open module=language status=ok name={name}");
        Self {
            name,
            display_name: display_name.into(),
            inventory: TypedSet::labelled(INVENTORY, [Kind::Phoneme]),
            affixes: AffixStore::new(),
            rules: RuleStore::new(),
            dictionary: Dictionary::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Adds a phoneme to the inventory.
    ///
    /// # Errors
    /// - `InvalidArgument` when a phoneme with the same symbol exists.
    pub fn try_add_phoneme(&mut self, phoneme: Phoneme) -> LexiconResult<Phoneme> {
        if self.phoneme(phoneme.symbol()).is_some() {
            return Err(LexiconError::InvalidArgument(format!(
                "phoneme `{}` already in inventory",
                phoneme.symbol()
            )));
        }
        self.inventory.try_add(Item::Phoneme(phoneme.clone()))?;
        Ok(phoneme)
    }

    pub fn add_phoneme(&mut self, phoneme: Phoneme) -> Option<Phoneme> {
        recover(COMPONENT, "add_phoneme", self.try_add_phoneme(phoneme))
    }

    pub fn phoneme(&self, symbol: &str) -> Option<&Phoneme> {
        self.phonemes().find(|phoneme| phoneme.symbol() == symbol)
    }

    pub fn phonemes(&self) -> impl Iterator<Item = &Phoneme> {
        self.inventory.iter().filter_map(Item::as_phoneme)
    }

    pub fn inventory(&self) -> &TypedSet<Item> {
        &self.inventory
    }

    /// Edits the phoneme with `symbol` and swaps it in atomically.
    ///
    /// # Errors
    /// - `UnknownKey` when no phoneme has `symbol`.
    pub fn try_update_phoneme(
        &mut self,
        symbol: &str,
        edit: impl FnOnce(&mut Phoneme),
    ) -> LexiconResult<Phoneme> {
        let current = self
            .phoneme(symbol)
            .cloned()
            .ok_or_else(|| LexiconError::UnknownKey(format!("phoneme {symbol}")))?;
        let mut edited = current.clone();
        edit(&mut edited);
        self.inventory
            .try_update(&Item::Phoneme(current), Item::Phoneme(edited.clone()))?;
        Ok(edited)
    }

    pub fn update_phoneme(
        &mut self,
        symbol: &str,
        edit: impl FnOnce(&mut Phoneme),
    ) -> Option<Phoneme> {
        recover(
            COMPONENT,
            "update_phoneme",
            self.try_update_phoneme(symbol, edit),
        )
    }

    /// Removes the phoneme with `symbol`. Returns whether one was present.
    pub fn remove_phoneme(&mut self, symbol: &str) -> bool {
        match self.phoneme(symbol).cloned() {
            Some(phoneme) => self.inventory.remove(&Item::Phoneme(phoneme)),
            None => false,
        }
    }

    /// Spells a sequence of phoneme symbols with each phoneme's primary letter.
    ///
    /// # Errors
    /// - `UnknownKey` when a symbol is not in the inventory.
    /// - `InvalidArgument` when a phoneme has no letters.
    pub fn try_spell(&self, symbols: &[&str]) -> LexiconResult<String> {
        let mut spelling = String::new();
        for symbol in symbols {
            let phoneme = self
                .phoneme(symbol)
                .ok_or_else(|| LexiconError::UnknownKey(format!("phoneme {symbol}")))?;
            let letter = phoneme.primary_letter().ok_or_else(|| {
                LexiconError::InvalidArgument(format!("phoneme `{symbol}` has no letters"))
            })?;
            spelling.push_str(letter);
        }
        Ok(spelling)
    }

    pub fn spell(&self, symbols: &[&str]) -> Option<String> {
        recover(COMPONENT, "spell", self.try_spell(symbols))
    }

    pub fn add_affix(&mut self, category: &str, grammeme: &str, form: &str) -> Option<&AffixIndex> {
        self.affixes.add(category, grammeme, form)
    }

    pub fn add_rule(&mut self, rule: Rule) -> RuleId {
        self.rules.insert(rule)
    }

    pub fn affixes(&self) -> &AffixStore {
        &self.affixes
    }

    pub fn affixes_mut(&mut self) -> &mut AffixStore {
        &mut self.affixes
    }

    pub fn rules(&self) -> &RuleStore {
        &self.rules
    }

    pub fn rules_mut(&mut self) -> &mut RuleStore {
        &mut self.rules
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn dictionary_mut(&mut self) -> &mut Dictionary {
        &mut self.dictionary
    }

    /// Runs `engine` over `underlying` and files both forms under `spelling`.
    pub fn try_record_word(
        &mut self,
        spelling: &str,
        underlying: &str,
        definition: &str,
        engine: &impl SoundChange,
    ) -> LexiconResult<&Entry> {
        let surface = engine.apply(underlying, &self.rules);
        self.dictionary
            .try_add(spelling, underlying, definition, &surface)
    }

    pub fn record_word(
        &mut self,
        spelling: &str,
        underlying: &str,
        definition: &str,
        engine: &impl SoundChange,
    ) -> Option<&Entry> {
        recover(
            COMPONENT,
            "record_word",
            self.try_record_word(spelling, underlying, definition, engine),
        )
    }

    /// Re-derives the surface form of a stored word with the current rules.
    pub fn try_resound(&mut self, headword: &str, engine: &impl SoundChange) -> LexiconResult<&Entry> {
        let underlying = self.dictionary.try_lookup(headword)?.sound.clone();
        let surface = engine.apply(&underlying, &self.rules);
        self.dictionary
            .try_change_sound(headword, &underlying, &surface)
    }

    pub fn resound(&mut self, headword: &str, engine: &impl SoundChange) -> Option<&Entry> {
        recover(COMPONENT, "resound", self.try_resound(headword, engine))
    }
}
