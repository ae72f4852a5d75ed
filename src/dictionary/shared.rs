//! Shared dictionary handle.
//!
//! Wraps a [`Dictionary`] in an `Arc<RwLock<_>>` so one writer can reload or
//! unload while any number of threads query. Reloads build the new trie
//! before taking the write lock, so readers only wait for the swap.

use super::Dictionary;
use crate::data_structures::lanai_trie::TrieStats;
use crate::error::DictionaryResult;
use parking_lot::{RwLock, RwLockReadGuard};
use std::path::Path;
use std::sync::Arc;

/// Cloneable, thread-safe handle to a [`Dictionary`].
#[derive(Debug, Clone, Default)]
pub struct SharedDictionary {
    inner: Arc<RwLock<Dictionary>>,
}

impl SharedDictionary {
    /// Publishes `dictionary` to readers.
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            inner: Arc::new(RwLock::new(dictionary)),
        }
    }

    /// Loads the word list at `path` and swaps it in.
    ///
    /// On failure the current dictionary is unloaded, matching
    /// [`Dictionary::load`].
    pub fn load<P: AsRef<Path>>(&self, path: P) -> DictionaryResult<u32> {
        let config = self.inner.read().config().clone();
        let mut fresh = Dictionary::with_config(config);

        match fresh.load(path) {
            Ok(word_count) => {
                let mut previous = std::mem::replace(&mut *self.inner.write(), fresh);
                previous.unload();
                Ok(word_count)
            }
            Err(err) => {
                self.inner.write().unload();
                Err(err)
            }
        }
    }

    /// See [`Dictionary::check`].
    pub fn check(&self, word: &str) -> bool {
        self.inner.read().check(word)
    }

    /// See [`Dictionary::size`].
    pub fn size(&self) -> u32 {
        self.inner.read().size()
    }

    /// See [`Dictionary::stats`].
    pub fn stats(&self) -> Option<TrieStats> {
        self.inner.read().stats()
    }

    /// See [`Dictionary::unload`].
    pub fn unload(&self) -> bool {
        self.inner.write().unload()
    }

    /// Holds a read lock for a batch of queries.
    pub fn read(&self) -> RwLockReadGuard<'_, Dictionary> {
        self.inner.read()
    }
}
