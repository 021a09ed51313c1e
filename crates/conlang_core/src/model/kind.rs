//! Value kinds used to gate store admission.
//!
//! # Responsibility
//! - Give every storable value a stable, human-readable kind tag.
//! - Provide `Item`, the tagged sum type mixed collections hold.
//!
//! # Invariants
//! - Tags are compared by variant, never by runtime type name.
//! - `Kind::as_str` values are stable across releases.

use crate::model::affix::Affix;
use crate::model::phoneme::Phoneme;
use crate::model::rule::{Environment, Rule};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Closed set of value kinds known to the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Phoneme,
    Affix,
    Rule,
    Environment,
    /// Plain string payloads.
    Text,
}

impl Kind {
    /// Stable tag string for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Phoneme => "Phoneme",
            Self::Affix => "Affix",
            Self::Rule => "Rule",
            Self::Environment => "Environment",
            Self::Text => "Text",
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-tag oracle for values stored in typed collections.
pub trait Tagged {
    fn kind(&self) -> Kind;
}

/// One value of any known kind.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Item {
    Phoneme(Phoneme),
    Affix(Affix),
    Rule(Rule),
    Environment(Environment),
    Text(String),
}

impl Item {
    pub fn as_phoneme(&self) -> Option<&Phoneme> {
        match self {
            Self::Phoneme(phoneme) => Some(phoneme),
            _ => None,
        }
    }

    pub fn as_rule(&self) -> Option<&Rule> {
        match self {
            Self::Rule(rule) => Some(rule),
            _ => None,
        }
    }
}

impl Tagged for Item {
    fn kind(&self) -> Kind {
        match self {
            Self::Phoneme(_) => Kind::Phoneme,
            Self::Affix(_) => Kind::Affix,
            Self::Rule(_) => Kind::Rule,
            Self::Environment(_) => Kind::Environment,
            Self::Text(_) => Kind::Text,
        }
    }
}

impl From<Phoneme> for Item {
    fn from(value: Phoneme) -> Self {
        Self::Phoneme(value)
    }
}

impl From<Affix> for Item {
    fn from(value: Affix) -> Self {
        Self::Affix(value)
    }
}

impl From<Rule> for Item {
    fn from(value: Rule) -> Self {
        Self::Rule(value)
    }
}

impl From<Environment> for Item {
    fn from(value: Environment) -> Self {
        Self::Environment(value)
    }
}

impl From<String> for Item {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Item {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}
