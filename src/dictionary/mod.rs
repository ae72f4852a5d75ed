//! Dictionary engine.
//!
//! A [`Dictionary`] owns an optional [`LanaiTrie`] and the number of words
//! inserted by the last successful load. It is an explicit handle: any
//! number of independent dictionaries can coexist.
//!
//! Lifecycle:
//! * [`Dictionary::load`] builds a fresh trie from a word list and publishes
//!   it only if every token was accepted.
//! * [`Dictionary::check`] and [`Dictionary::size`] are read-only and answer
//!   `false` / `0` while nothing is loaded.
//! * [`Dictionary::unload`] tears the trie down and releases its memory.
//!
//! Loading and unloading take `&mut self`, so a dictionary shared by
//! reference can only be queried. See [`SharedDictionary`] for reloading
//! while other threads read.

mod shared;
pub mod tokenizer;

use crate::config::{DictionaryConfig, InvalidWordPolicy};
use crate::data_structures::lanai_trie::{LanaiTrie, LanaiTrieError, TrieStats};
use crate::error::{DictionaryError, DictionaryResult};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

pub use shared::SharedDictionary;
pub use tokenizer::{Token, WordTokens};

/// In-memory word-membership index backed by a [`LanaiTrie`].
#[derive(Debug, Default)]
pub struct Dictionary {
    trie: Option<LanaiTrie>,
    word_count: u32,
    config: DictionaryConfig,
}

impl Dictionary {
    /// Creates an unloaded dictionary with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an unloaded dictionary with the given configuration.
    pub fn with_config(config: DictionaryConfig) -> Self {
        Self {
            trie: None,
            word_count: 0,
            config,
        }
    }

    /// Returns the configuration used for loading.
    pub fn config(&self) -> &DictionaryConfig {
        &self.config
    }

    /// Loads the word list at `path`, replacing anything loaded before.
    ///
    /// # Returns
    ///
    /// * `Ok(u32)` - The number of words inserted, duplicates included.
    /// * `Err(DictionaryError)` - If the source could not be opened or read,
    ///   or a word was rejected. The dictionary is left unloaded.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> DictionaryResult<u32> {
        let path = path.as_ref();
        self.unload();

        let file = File::open(path).map_err(|source| DictionaryError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        self.load_from_reader(BufReader::new(file), &path.display().to_string())
    }

    /// Loads a word list from any buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - Source of whitespace-delimited words.
    /// * `source_name` - Name used in diagnostics.
    pub fn load_from_reader<R: BufRead>(
        &mut self,
        reader: R,
        source_name: &str,
    ) -> DictionaryResult<u32> {
        self.unload();

        debug!(source = source_name, "loading word list");
        let (trie, word_count) = self.build(reader, source_name)?;

        info!(
            source = source_name,
            words = word_count,
            nodes = trie.node_count(),
            "dictionary loaded"
        );
        self.trie = Some(trie);
        self.word_count = word_count;
        Ok(word_count)
    }

    fn build<R: BufRead>(&self, reader: R, source_name: &str) -> DictionaryResult<(LanaiTrie, u32)> {
        let mut trie = LanaiTrie::with_config(self.config.trie_config())?;
        let mut word_count: u32 = 0;
        let mut skipped: usize = 0;

        for token in WordTokens::new(reader) {
            let token = token.map_err(|source| DictionaryError::Read {
                source_name: source_name.to_string(),
                source,
            })?;

            match trie.insert(&token.text) {
                Ok(_) => {
                    word_count = word_count.checked_add(1).ok_or_else(|| {
                        DictionaryError::WordCountOverflow {
                            source_name: source_name.to_string(),
                        }
                    })?;
                }
                Err(
                    err @ (LanaiTrieError::MalformedSymbol { .. }
                    | LanaiTrieError::WordTooLong { .. }),
                ) => match self.config.invalid_words {
                    InvalidWordPolicy::Reject => {
                        return Err(DictionaryError::InvalidWord {
                            source_name: source_name.to_string(),
                            line: token.line,
                            source: err,
                        });
                    }
                    InvalidWordPolicy::Skip => {
                        warn!(source = source_name, line = token.line, error = %err, "skipping word");
                        skipped += 1;
                    }
                },
                Err(err) => return Err(err.into()),
            }
        }

        if skipped > 0 {
            warn!(source = source_name, skipped, "word list contained invalid words");
        }
        Ok((trie, word_count))
    }

    /// Returns `true` if `word` was loaded, ignoring letter case.
    ///
    /// Words with characters outside `a`-`z`, `A`-`Z` and `'` are never
    /// present. Always `false` while unloaded.
    pub fn check(&self, word: &str) -> bool {
        self.trie.as_ref().is_some_and(|trie| trie.contains(word))
    }

    /// Returns the number of words inserted by the last successful load.
    pub fn size(&self) -> u32 {
        self.word_count
    }

    /// Returns `true` while a word list is loaded.
    pub fn is_loaded(&self) -> bool {
        self.trie.is_some()
    }

    /// Returns structural statistics of the loaded trie.
    pub fn stats(&self) -> Option<TrieStats> {
        self.trie.as_ref().map(LanaiTrie::stats)
    }

    /// Releases all memory held by the loaded trie.
    ///
    /// # Returns
    ///
    /// `true` if a trie was released, `false` if nothing was loaded.
    pub fn unload(&mut self) -> bool {
        let Some(mut trie) = self.trie.take() else {
            return false;
        };

        let released = trie.teardown();
        info!(words = self.word_count, nodes = released, "dictionary unloaded");
        self.word_count = 0;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn loaded(words: &str) -> Dictionary {
        let mut dictionary = Dictionary::new();
        dictionary
            .load_from_reader(Cursor::new(words), "inline")
            .unwrap();
        dictionary
    }

    #[test]
    fn test_load_and_check() {
        let dictionary = loaded("cat\ncats\ndog");

        assert!(dictionary.is_loaded());
        assert_eq!(dictionary.size(), 3);
        assert!(dictionary.check("cat"));
        assert!(dictionary.check("Cat"));
        assert!(!dictionary.check("ca"));
        assert!(!dictionary.check("catsup"));
    }

    #[test]
    fn test_size_is_not_destructive() {
        let dictionary = loaded("a\na\na");

        assert_eq!(dictionary.size(), 3);
        assert_eq!(dictionary.size(), 3);
        assert_eq!(dictionary.stats().unwrap().terminal_nodes, 1);
    }

    #[test]
    fn test_unloaded_defaults() {
        let mut dictionary = Dictionary::new();

        assert!(!dictionary.is_loaded());
        assert_eq!(dictionary.size(), 0);
        assert!(!dictionary.check("anything"));
        assert!(dictionary.stats().is_none());
        assert!(!dictionary.unload());
    }

    #[test]
    fn test_unload_releases_and_resets() {
        let mut dictionary = loaded("cat dog");

        assert!(dictionary.unload());
        assert!(!dictionary.is_loaded());
        assert_eq!(dictionary.size(), 0);
        assert!(!dictionary.check("cat"));
        assert!(!dictionary.unload());
    }

    #[test]
    fn test_reject_policy_aborts_load() {
        let mut dictionary = loaded("old");
        let err = dictionary
            .load_from_reader(Cursor::new("good\nbad!\nworse"), "inline")
            .unwrap_err();

        match err {
            DictionaryError::InvalidWord { line, source, .. } => {
                assert_eq!(line, 2);
                assert!(matches!(source, LanaiTrieError::MalformedSymbol { symbol: '!', .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!dictionary.is_loaded());
        assert_eq!(dictionary.size(), 0);
        assert!(!dictionary.check("good"));
        assert!(!dictionary.check("old"));
    }

    #[test]
    fn test_skip_policy_drops_invalid_words() {
        let config = DictionaryConfig {
            max_word_length: 5,
            invalid_words: InvalidWordPolicy::Skip,
            ..Default::default()
        };
        let mut dictionary = Dictionary::with_config(config);
        let count = dictionary
            .load_from_reader(Cursor::new("good bad! toolong fine"), "inline")
            .unwrap();

        assert_eq!(count, 2);
        assert!(dictionary.check("good"));
        assert!(dictionary.check("fine"));
        assert!(!dictionary.check("toolong"));
    }

    #[test]
    fn test_node_limit_aborts_even_when_skipping() {
        let config = DictionaryConfig {
            max_nodes: Some(3),
            invalid_words: InvalidWordPolicy::Skip,
            ..Default::default()
        };
        let mut dictionary = Dictionary::with_config(config);
        let err = dictionary
            .load_from_reader(Cursor::new("ab abc"), "inline")
            .unwrap_err();

        assert!(matches!(
            err,
            DictionaryError::Trie(LanaiTrieError::NodeLimitExceeded { limit: 3 })
        ));
        assert!(!dictionary.is_loaded());
    }

    #[test]
    fn test_latin1_word_is_an_invalid_word() {
        let latin1: &[u8] = b"apple\ncaf\xe9\nzebra\n";

        let mut dictionary = Dictionary::new();
        match dictionary.load_from_reader(latin1, "latin1").unwrap_err() {
            DictionaryError::InvalidWord { line, source, .. } => {
                assert_eq!(line, 2);
                assert!(matches!(
                    source,
                    LanaiTrieError::MalformedSymbol { symbol: '\u{FFFD}', position: 3, .. }
                ));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!dictionary.is_loaded());

        let mut dictionary = Dictionary::with_config(DictionaryConfig {
            invalid_words: InvalidWordPolicy::Skip,
            ..Default::default()
        });
        assert_eq!(dictionary.load_from_reader(latin1, "latin1").unwrap(), 2);
        assert!(dictionary.check("apple"));
        assert!(dictionary.check("zebra"));
        assert!(!dictionary.check("caf"));
    }

    #[test]
    fn test_non_breaking_space_does_not_split_words() {
        let mut dictionary = Dictionary::new();
        let err = dictionary
            .load_from_reader(Cursor::new("caf\u{a0}e"), "inline")
            .unwrap_err();

        assert!(matches!(
            err,
            DictionaryError::InvalidWord {
                line: 1,
                source: LanaiTrieError::MalformedSymbol { symbol: '\u{a0}', .. },
                ..
            }
        ));
        assert!(!dictionary.check("caf"));
        assert!(!dictionary.check("e"));
    }

    #[test]
    fn test_missing_source() {
        let mut dictionary = loaded("cat");
        let err = dictionary.load("/nonexistent/mauka/words").unwrap_err();

        assert!(matches!(err, DictionaryError::SourceUnavailable { .. }));
        assert!(err.to_string().contains("/nonexistent/mauka/words"));
        assert!(!dictionary.is_loaded());
        assert_eq!(dictionary.size(), 0);
        assert!(!dictionary.check("cat"));
    }
}
