//! Pre-clear contents handed back by `clear` operations.

/// Owned copy of a store's contents as they were right before a `clear`.
///
/// The caller decides how long it lives; dropping it releases the data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<T> {
    contents: T,
}

impl<T> Snapshot<T> {
    pub(crate) fn new(contents: T) -> Self {
        Self { contents }
    }

    /// Reads the captured contents.
    pub fn read(&self) -> &T {
        &self.contents
    }

    pub fn into_inner(self) -> T {
        self.contents
    }
}
