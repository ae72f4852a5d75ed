//! Dictionary configuration module.
//!
//! This module defines where the word list lives and how strictly it is
//! loaded.

use super::{ConfigResult, Validate};
use crate::data_structures::lanai_trie::{LanaiTrieConfig, DEFAULT_MAX_WORD_LENGTH};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Largest accepted `max_word_length`.
pub const MAX_WORD_LENGTH_LIMIT: usize = 255;

/// What to do with a word-list token the trie rejects.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvalidWordPolicy {
    /// Abort the load
    #[default]
    Reject,
    /// Log a warning and drop the token without counting it
    Skip,
}

/// Dictionary configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DictionaryConfig {
    /// Default word list to load
    pub path: PathBuf,

    /// Maximum number of symbols per word
    pub max_word_length: usize,

    /// Optional cap on trie nodes, root included
    pub max_nodes: Option<usize>,

    /// Handling of tokens outside the alphabet or over the length limit
    pub invalid_words: InvalidWordPolicy,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("dictionaries/large"),
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
            max_nodes: None,
            invalid_words: InvalidWordPolicy::Reject,
        }
    }
}

impl DictionaryConfig {
    /// Returns the trie settings derived from this configuration.
    pub fn trie_config(&self) -> LanaiTrieConfig {
        LanaiTrieConfig {
            max_word_length: self.max_word_length,
            max_nodes: self.max_nodes,
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "dictionary path must not be empty".to_string(),
            ));
        }

        if !(1..=MAX_WORD_LENGTH_LIMIT).contains(&self.max_word_length) {
            return Err(ConfigError::ValueOutOfRange {
                key: "dictionary.max_word_length".to_string(),
                message: format!("must be between 1 and {MAX_WORD_LENGTH_LIMIT}"),
            });
        }

        // The root always occupies one node.
        if self.max_nodes == Some(0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "dictionary.max_nodes".to_string(),
                message: "must be at least 1 when set".to_string(),
            });
        }

        Ok(())
    }
}
