// Copyright (c) 2025 Mauka Lexicon Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Lanai word trie.
//!
//! Every error is raised before the trie is mutated, so a failed insertion
//! never leaves a partially extended path behind.

/// Errors that can occur in Lanai Trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum LanaiTrieError {
    /// Error when an empty word is inserted.
    #[error("Empty word not allowed")]
    EmptyWord,

    /// Error when a word has more symbols than the trie accepts.
    #[error("Word '{word}' exceeds maximum length of {max_length}")]
    WordTooLong {
        /// The rejected word.
        word: String,
        /// The maximum allowed length.
        max_length: usize,
    },

    /// Error when a word contains a character outside the 27-symbol alphabet.
    #[error("Word '{word}' contains unsupported symbol {symbol:?} at position {position}")]
    MalformedSymbol {
        /// The rejected word.
        word: String,
        /// The offending character.
        symbol: char,
        /// Byte offset of the offending character.
        position: usize,
    },

    /// Error when node storage cannot be reserved.
    #[error("Failed to allocate {requested} trie node(s)")]
    AllocationFailure {
        /// Number of nodes the insertion needed.
        requested: usize,
    },

    /// Error when an insertion would grow the trie past its configured node cap.
    #[error("Trie node limit of {limit} exceeded")]
    NodeLimitExceeded {
        /// The configured maximum node count.
        limit: usize,
    },

    /// Error when the trie is used for insertion after teardown.
    #[error("Trie has been torn down")]
    TornDown,
}
