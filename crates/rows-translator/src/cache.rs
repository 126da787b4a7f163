//! Memoized token translations.

use indexmap::IndexMap;
use rows_core::Vocabulary;
use tracing::trace;

use crate::{Translation, Translator};

/// Default number of distinct tokens remembered.
pub const DEFAULT_CAPACITY: usize = 64;

/// A bounded cache of token translations.
///
/// Arrangements repeat a handful of tokens across many children, so a small
/// cache covers most lookups. When full, the oldest entry is evicted. A
/// capacity of zero disables caching.
///
/// Entries are only valid for the vocabulary they were translated with. The
/// cache remembers that vocabulary and starts over when a translator with a
/// different one uses it.
#[derive(Debug, Clone)]
pub struct TranslationCache {
    entries: IndexMap<String, Translation>,
    vocabulary: Option<Vocabulary>,
    capacity: usize,
}

impl TranslationCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
            vocabulary: None,
            capacity,
        }
    }

    /// Get a cached translation.
    pub fn get(&self, token: &str) -> Option<&Translation> {
        self.entries.get(token)
    }

    /// Get the translation of `token`, computing and remembering it on a miss.
    pub fn get_or_translate(&mut self, token: &str, translator: &Translator) -> Translation {
        if self.capacity == 0 {
            return translator.translate(token);
        }

        if self.vocabulary.as_ref() != Some(translator.vocabulary()) {
            if !self.entries.is_empty() {
                trace!(dropped = self.entries.len(), "vocabulary changed, cache reset");
            }
            self.entries.clear();
            self.vocabulary = Some(translator.vocabulary().clone());
        }

        if let Some(hit) = self.entries.get(token) {
            return hit.clone();
        }

        let translation = translator.translate(token);
        if self.entries.len() >= self.capacity {
            if let Some((evicted, _)) = self.entries.shift_remove_index(0) {
                trace!(token = %evicted, "evicted cached translation");
            }
        }
        self.entries.insert(token.to_string(), translation.clone());
        translation
    }

    /// Check if a token is cached.
    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    /// The vocabulary the cached entries were translated with.
    pub fn vocabulary(&self) -> Option<&Vocabulary> {
        self.vocabulary.as_ref()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.vocabulary = None;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TranslationCache {
    fn default() -> Self {
        Self::new()
    }
}
