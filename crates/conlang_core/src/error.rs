//! Error taxonomy and local recovery policy for core stores.
//!
//! # Responsibility
//! - Name the failure classes shared by every store.
//! - Turn a strict `try_*` result into the lenient "diagnostic + absent" form.
//!
//! # Invariants
//! - A failed operation leaves store state untouched.
//! - Recovery emits exactly one `warn` line per failure.

use crate::model::kind::Kind;
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type LexiconResult<T> = Result<T, LexiconError>;

/// Failure classes for store and value operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconError {
    /// A value's kind is not accepted by the target collection.
    InvalidKind { expected: Vec<Kind>, found: Kind },
    /// A lookup or update targeted an absent key.
    UnknownKey(String),
    /// An argument is blank or structurally unusable.
    InvalidArgument(String),
    /// An affix form carries no separator at either end.
    MalformedAffix(String),
}

impl Display for LexiconError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidKind { expected, found } => {
                let expected = expected
                    .iter()
                    .map(|kind| kind.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "invalid kind `{found}`; expected one of [{expected}]")
            }
            Self::UnknownKey(key) => write!(f, "unknown key {key}"),
            Self::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
            Self::MalformedAffix(form) => write!(f, "invalid affix `{form}`"),
        }
    }
}

impl Error for LexiconError {}

/// Converts a strict result into its lenient form.
///
/// On failure logs `"{component} {operation} failed - {err}"` and returns `None`.
pub(crate) fn recover<T>(component: &str, operation: &str, result: LexiconResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("{component} {operation} failed - {err}");
            None
        }
    }
}
