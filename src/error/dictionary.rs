//! Dictionary error module.
//!
//! This module defines error types that may occur while loading a word list
//! into a dictionary. Every one of them aborts the load and leaves the
//! dictionary unloaded.

use crate::data_structures::lanai_trie::LanaiTrieError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during dictionary operations.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// Error when the word-list source cannot be opened.
    #[error("Could not open word list {}: {source}", .path.display())]
    SourceUnavailable {
        /// Path of the unreadable source
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Error when reading tokens from an opened source fails.
    #[error("Failed to read word list {source_name}: {source}")]
    Read {
        /// Name of the source being read
        source_name: String,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Error when a token is rejected by the trie under the `reject` policy.
    #[error("Invalid word in {source_name} at line {line}: {source}")]
    InvalidWord {
        /// Name of the source being read
        source_name: String,
        /// 1-based line of the token
        line: usize,
        /// The trie's reason for rejecting it
        source: LanaiTrieError,
    },

    /// Error when the word list holds more words than the counter can represent.
    #[error("Word list {source_name} has more than {} words", u32::MAX)]
    WordCountOverflow {
        /// Name of the source being read
        source_name: String,
    },

    /// Fatal trie errors such as allocation failure.
    #[error("Trie error: {0}")]
    Trie(#[from] LanaiTrieError),
}

/// Result type for dictionary operations.
pub type DictionaryResult<T> = Result<T, DictionaryError>;
