//! Language-level use cases.
//!
//! # Responsibility
//! - Compose the stores into the word-building pipeline.
//! - Keep the sound-change engine behind a trait seam.

pub mod language;
