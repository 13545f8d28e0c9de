//! Utility for string interning.

use elsa::FrozenIndexSet;

/// Collects symbol names.
pub(crate) struct StringInterner {
    set: FrozenIndexSet<String>,
}

impl StringInterner {
    /// Creates a new `StringInterner`.
    pub(crate) fn new() -> Self {
        StringInterner {
            set: FrozenIndexSet::new(),
        }
    }

    /// Retrieves the index of an interned name, or inserts a new entry
    /// if it does not exist.
    pub(crate) fn get_or_intern<T>(&self, value: T) -> usize
    where
        T: AsRef<str>,
    {
        self.set.insert_full(value.as_ref().to_string()).0
    }

    pub(crate) fn resolve(&self, index: usize) -> Option<&str> {
        self.set.get_index(index)
    }
}
