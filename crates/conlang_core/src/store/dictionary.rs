//! Headword dictionary.
//!
//! # Responsibility
//! - Record spelling, definition, underlying sound and surface sound per word.
//! - Support partial edits and explicit sound replacement.
//!
//! # Invariants
//! - One entry per spelling; `add` overwrites (homographs are not modelled).
//! - The map key always equals the entry's `spelling`, which is non-empty.
//! - `change_sound` stores what it is given; it never applies rules.

use crate::error::{recover, LexiconError, LexiconResult};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const COMPONENT: &str = "Dictionary";

/// One dictionary record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub spelling: String,
    pub definition: String,
    /// Underlying phonemic form.
    pub sound: String,
    /// Surface form after sound changes.
    pub change: String,
}

/// Editable entry field, used by `Dictionary::clear_field`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Definition,
    Sound,
    Change,
}

/// Partial entry update. Absent fields keep their previous value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryPatch {
    pub definition: Option<String>,
    pub sound: Option<String>,
    pub change: Option<String>,
}

impl EntryPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn definition(mut self, value: impl Into<String>) -> Self {
        self.definition = Some(value.into());
        self
    }

    pub fn sound(mut self, value: impl Into<String>) -> Self {
        self.sound = Some(value.into());
        self
    }

    pub fn change(mut self, value: impl Into<String>) -> Self {
        self.change = Some(value.into());
        self
    }

    fn apply_to(self, entry: &mut Entry) {
        if let Some(definition) = self.definition {
            entry.definition = definition;
        }
        if let Some(sound) = self.sound {
            entry.sound = sound;
        }
        if let Some(change) = self.change {
            entry.change = change;
        }
    }
}

/// Spelling-keyed word store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: BTreeMap<String, Entry>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_word(&self, spelling: &str) -> bool {
        self.entries.contains_key(spelling)
    }

    /// Stores a new entry under `spelling`, replacing any previous one.
    ///
    /// # Errors
    /// - `InvalidArgument` when `spelling` is empty.
    pub fn try_add(
        &mut self,
        spelling: &str,
        sound: &str,
        definition: &str,
        sound_change: &str,
    ) -> LexiconResult<&Entry> {
        if spelling.is_empty() {
            return Err(LexiconError::InvalidArgument(
                "spelling must not be empty".to_string(),
            ));
        }
        let entry = Entry {
            spelling: spelling.to_string(),
            definition: definition.to_string(),
            sound: sound.to_string(),
            change: sound_change.to_string(),
        };
        if self.entries.insert(spelling.to_string(), entry).is_some() {
            debug!("{COMPONENT} add replaced headword={spelling}");
        }
        self.try_lookup(spelling)
    }

    pub fn add(
        &mut self,
        spelling: &str,
        sound: &str,
        definition: &str,
        sound_change: &str,
    ) -> Option<&Entry> {
        recover(
            COMPONENT,
            "add",
            self.try_add(spelling, sound, definition, sound_change),
        )
    }

    /// Applies `patch` to the entry under `spelling`.
    ///
    /// # Errors
    /// - `UnknownKey` when `spelling` has no entry.
    pub fn try_update(&mut self, spelling: &str, patch: EntryPatch) -> LexiconResult<&Entry> {
        let entry = self.entry_mut(spelling)?;
        patch.apply_to(entry);
        Ok(&*entry)
    }

    pub fn update(&mut self, spelling: &str, patch: EntryPatch) -> Option<&Entry> {
        recover(COMPONENT, "update", self.try_update(spelling, patch))
    }

    /// Empties one field of the entry under `spelling`.
    pub fn try_clear_field(&mut self, spelling: &str, field: EntryField) -> LexiconResult<&Entry> {
        let entry = self.entry_mut(spelling)?;
        match field {
            EntryField::Definition => entry.definition.clear(),
            EntryField::Sound => entry.sound.clear(),
            EntryField::Change => entry.change.clear(),
        }
        Ok(&*entry)
    }

    pub fn clear_field(&mut self, spelling: &str, field: EntryField) -> Option<&Entry> {
        recover(COMPONENT, "clear_field", self.try_clear_field(spelling, field))
    }

    /// # Errors
    /// - `UnknownKey` when `headword` has no entry.
    pub fn try_lookup(&self, headword: &str) -> LexiconResult<&Entry> {
        self.entries
            .get(headword)
            .ok_or_else(|| unknown_headword(headword))
    }

    pub fn lookup(&self, headword: &str) -> Option<&Entry> {
        recover(COMPONENT, "lookup", self.try_lookup(headword))
    }

    pub fn define(&self, headword: &str) -> Option<&str> {
        recover(COMPONENT, "define", self.try_lookup(headword))
            .map(|entry| entry.definition.as_str())
    }

    pub fn try_redefine(&mut self, headword: &str, definition: &str) -> LexiconResult<&Entry> {
        let entry = self.entry_mut(headword)?;
        entry.definition = definition.to_string();
        Ok(&*entry)
    }

    pub fn redefine(&mut self, headword: &str, definition: &str) -> Option<&Entry> {
        recover(COMPONENT, "redefine", self.try_redefine(headword, definition))
    }

    /// Replaces both the underlying and the surface sound.
    pub fn try_change_sound(
        &mut self,
        headword: &str,
        sound: &str,
        sound_change: &str,
    ) -> LexiconResult<&Entry> {
        let entry = self.entry_mut(headword)?;
        entry.sound = sound.to_string();
        entry.change = sound_change.to_string();
        Ok(&*entry)
    }

    pub fn change_sound(
        &mut self,
        headword: &str,
        sound: &str,
        sound_change: &str,
    ) -> Option<&Entry> {
        recover(
            COMPONENT,
            "change_sound",
            self.try_change_sound(headword, sound, sound_change),
        )
    }

    /// Moves the entry under `headword` to `new_spelling`.
    ///
    /// An entry already filed under `new_spelling` is replaced.
    ///
    /// # Errors
    /// - `UnknownKey` when `headword` has no entry.
    /// - `InvalidArgument` when `new_spelling` is empty.
    pub fn try_respell(&mut self, headword: &str, new_spelling: &str) -> LexiconResult<&Entry> {
        if new_spelling.is_empty() {
            return Err(LexiconError::InvalidArgument(
                "spelling must not be empty".to_string(),
            ));
        }
        let mut entry = self
            .entries
            .remove(headword)
            .ok_or_else(|| unknown_headword(headword))?;
        entry.spelling = new_spelling.to_string();
        self.entries.insert(new_spelling.to_string(), entry);
        debug!("{COMPONENT} respell ok from={headword} to={new_spelling}");
        self.try_lookup(new_spelling)
    }

    pub fn respell(&mut self, headword: &str, new_spelling: &str) -> Option<&Entry> {
        recover(COMPONENT, "respell", self.try_respell(headword, new_spelling))
    }

    /// Drops the entry under `headword` and returns it.
    pub fn remove(&mut self, headword: &str) -> Option<Entry> {
        let removed = self
            .entries
            .remove(headword)
            .ok_or_else(|| unknown_headword(headword));
        recover(COMPONENT, "remove", removed)
    }

    /// Headwords in sort order.
    pub fn headwords(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_mut(&mut self, headword: &str) -> LexiconResult<&mut Entry> {
        self.entries
            .get_mut(headword)
            .ok_or_else(|| unknown_headword(headword))
    }
}

fn unknown_headword(headword: &str) -> LexiconError {
    LexiconError::UnknownKey(format!("headword {headword}"))
}
