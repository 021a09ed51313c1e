//! Sound-change rule values.
//!
//! # Responsibility
//! - Describe one sound change: a source phoneme, its target, and the
//!   environment that conditions it.
//! - Render rules as readable sentences for inventories and summaries.
//!
//! # Invariants
//! - An environment has exactly one focus slot.
//! - Feature bundles are non-empty and hold no blank feature names.
//! - Rule source and target symbols are non-empty.
//!
//! Applying rules to words is the job of an external engine; see
//! `service::language::SoundChange`.

use crate::error::{LexiconError, LexiconResult};
use crate::model::kind::{Kind, Tagged};
use serde::{Deserialize, Serialize};

const CONSONANT: &str = "consonant";
const VOWEL: &str = "vowel";

/// One position of an environment.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// Position of the changing sound (`_`).
    Focus,
    /// Word boundary (`#`).
    Boundary,
    /// A sound carrying all listed features.
    Features(Vec<String>),
}

impl Slot {
    pub fn features<I, S>(features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Features(features.into_iter().map(Into::into).collect())
    }

    fn phrase(&self) -> String {
        match self {
            Self::Focus => String::new(),
            Self::Boundary => "a word break".to_string(),
            Self::Features(features) => {
                let starts_with_vowel = features
                    .first()
                    .and_then(|feature| feature.chars().next())
                    .is_some_and(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'));
                let article = if starts_with_vowel { "an" } else { "a" };
                format!("{article} {}", features.join(" "))
            }
        }
    }
}

/// Conditioning context for a sound change, e.g. `V_V`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Slot>", into = "Vec<Slot>")]
pub struct Environment {
    slots: Vec<Slot>,
}

impl Environment {
    /// Builds an environment from explicit slots.
    ///
    /// # Errors
    /// - `InvalidArgument` unless exactly one slot is `Slot::Focus`.
    /// - `InvalidArgument` for empty feature bundles or blank feature names.
    pub fn new(slots: Vec<Slot>) -> LexiconResult<Self> {
        let focus_count = slots.iter().filter(|slot| **slot == Slot::Focus).count();
        if focus_count != 1 {
            return Err(LexiconError::InvalidArgument(format!(
                "environment needs exactly one focus slot, found {focus_count}"
            )));
        }
        for slot in &slots {
            if let Slot::Features(features) = slot {
                if features.is_empty() || features.iter().any(|f| f.trim().is_empty()) {
                    return Err(LexiconError::InvalidArgument(
                        "environment feature bundle must list non-blank features".to_string(),
                    ));
                }
            }
        }
        Ok(Self { slots })
    }

    /// Parses shorthand such as `#_V` or `V_C`.
    ///
    /// `C` and `V` stand for consonant and vowel bundles, `_` for the focus and
    /// `#` for a word boundary.
    pub fn parse(shorthand: &str) -> LexiconResult<Self> {
        let slots = shorthand
            .chars()
            .map(|symbol| match symbol {
                'C' => Ok(Slot::features([CONSONANT])),
                'V' => Ok(Slot::features([VOWEL])),
                '_' => Ok(Slot::Focus),
                '#' => Ok(Slot::Boundary),
                other => Err(LexiconError::InvalidArgument(format!(
                    "unknown environment symbol `{other}` in `{shorthand}`"
                ))),
            })
            .collect::<LexiconResult<Vec<_>>>()?;
        Self::new(slots)
    }

    /// Environment that places no condition on the sound.
    pub fn anywhere() -> Self {
        Self {
            slots: vec![Slot::Focus],
        }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    fn focus_index(&self) -> usize {
        self.slots
            .iter()
            .position(|slot| *slot == Slot::Focus)
            .unwrap_or(0)
    }

    /// Readable phrase, e.g. `when the sound is between a vowel and a vowel`.
    pub fn describe(&self) -> String {
        let focus = self.focus_index();
        let side = |slots: &[Slot]| {
            slots
                .iter()
                .map(Slot::phrase)
                .collect::<Vec<_>>()
                .join(", ")
        };
        let before = side(&self.slots[..focus]);
        let after = side(&self.slots[focus + 1..]);

        match (before.is_empty(), after.is_empty()) {
            (true, true) => "in any environment".to_string(),
            (true, false) => format!("when the sound is before {after}"),
            (false, true) => format!("when the sound is after {before}"),
            (false, false) => format!("when the sound is between {before} and {after}"),
        }
    }
}

impl TryFrom<Vec<Slot>> for Environment {
    type Error = LexiconError;

    fn try_from(slots: Vec<Slot>) -> Result<Self, Self::Error> {
        Self::new(slots)
    }
}

impl From<Environment> for Vec<Slot> {
    fn from(value: Environment) -> Self {
        value.slots
    }
}

impl Tagged for Environment {
    fn kind(&self) -> Kind {
        Kind::Environment
    }
}

/// Wire shape of a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct RuleRecord {
    source: String,
    target: String,
    environment: Environment,
}

/// A sound change: `source` becomes `target` in `environment`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RuleRecord", into = "RuleRecord")]
pub struct Rule {
    source: String,
    target: String,
    environment: Environment,
}

impl Rule {
    /// # Errors
    /// - `InvalidArgument` when `source` or `target` is blank.
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        environment: Environment,
    ) -> LexiconResult<Self> {
        let source = source.into();
        let target = target.into();
        if source.trim().is_empty() || target.trim().is_empty() {
            return Err(LexiconError::InvalidArgument(
                "rule source and target must not be blank".to_string(),
            ));
        }
        Ok(Self {
            source,
            target,
            environment,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Readable sentence, e.g. `Change p to b when the sound is after a vowel.`
    pub fn describe(&self) -> String {
        format!(
            "Change {} to {} {}.",
            self.source,
            self.target,
            self.environment.describe()
        )
    }
}

impl TryFrom<RuleRecord> for Rule {
    type Error = LexiconError;

    fn try_from(record: RuleRecord) -> Result<Self, Self::Error> {
        Self::new(record.source, record.target, record.environment)
    }
}

impl From<Rule> for RuleRecord {
    fn from(value: Rule) -> Self {
        Self {
            source: value.source,
            target: value.target,
            environment: value.environment,
        }
    }
}

impl Tagged for Rule {
    fn kind(&self) -> Kind {
        Kind::Rule
    }
}
