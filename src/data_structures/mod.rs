//! Data structures for Mauka Lexicon.
//!
//! This module contains the storage structures behind the dictionary.
//! Implementations avoid unsafe code and keep their own error types.

pub mod lanai_trie;

// Re-export common data structures
pub use lanai_trie::{LanaiTrie, LanaiTrieConfig, LanaiTrieError, LanaiTrieResult, TrieStats};
