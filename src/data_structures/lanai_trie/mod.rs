// Copyright (c) 2025 Mauka Lexicon Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lanai Word Trie Implementation
//!
//! A prefix tree specialised for dictionary words over a fixed 27-symbol
//! alphabet (`a`-`z` case-insensitively, plus the apostrophe). It answers
//! whole-word membership queries in time proportional to the word length.
//!
//! Nodes are stored in an arena and address their children by index, so
//! node storage can be reserved fallibly and teardown never recurses.
//!
//! # Example
//!
//! ```
//! use mauka_lexicon_lib::data_structures::lanai_trie::LanaiTrie;
//!
//! let mut trie = LanaiTrie::new().unwrap();
//! trie.insert("don't").unwrap();
//!
//! assert!(trie.contains("DON'T"));
//! assert!(!trie.contains("dont"));
//! ```

mod error;
mod node;
pub mod symbol;

use serde::Serialize;

pub use error::LanaiTrieError;
pub use node::{NodeId, TrieNode};
use symbol::{first_invalid, slot_for};

/// Result type for Lanai Trie operations
pub type LanaiTrieResult<T> = Result<T, LanaiTrieError>;

/// Arena index of the root node.
const ROOT: usize = 0;

/// Longest word accepted by default.
pub const DEFAULT_MAX_WORD_LENGTH: usize = 45;

/// Configuration options for the Lanai Trie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanaiTrieConfig {
    /// Maximum number of symbols in an inserted word (bounds the trie depth)
    pub max_word_length: usize,

    /// Optional cap on the total number of nodes, root included
    pub max_nodes: Option<usize>,
}

impl Default for LanaiTrieConfig {
    fn default() -> Self {
        Self {
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
            max_nodes: None,
        }
    }
}

/// Structural statistics for a trie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TrieStats {
    /// Number of live nodes, root included
    pub nodes: usize,
    /// Number of terminal nodes, i.e. distinct stored words
    pub terminal_nodes: usize,
    /// Length of the longest stored path
    pub max_depth: usize,
    /// Approximate heap footprint of the node arena in bytes
    pub approx_bytes: usize,
}

/// Lanai Trie: whole-word membership index over the 27-symbol alphabet.
///
/// Key features:
/// * Case-insensitive lookup with no allocation
/// * Structurally idempotent insertion
/// * Insertions either fully succeed or leave the trie untouched
/// * Iterative post-order teardown
#[derive(Debug)]
pub struct LanaiTrie {
    /// Node arena; index 0 is the root. Empty once torn down.
    nodes: Vec<TrieNode>,

    /// Configuration options
    config: LanaiTrieConfig,
}

impl LanaiTrie {
    /// Creates a new empty `LanaiTrie` with default configuration.
    ///
    /// # Returns
    ///
    /// * `Ok(LanaiTrie)` - A trie holding only the root node.
    /// * `Err(LanaiTrieError)` - If the root node could not be allocated.
    pub fn new() -> LanaiTrieResult<Self> {
        Self::with_config(LanaiTrieConfig::default())
    }

    /// Creates a new empty `LanaiTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: LanaiTrieConfig) -> LanaiTrieResult<Self> {
        let mut trie = Self {
            nodes: Vec::new(),
            config,
        };
        trie.reserve_nodes(1)?;
        trie.nodes.push(TrieNode::new());
        Ok(trie)
    }

    /// Inserts a word into the trie.
    ///
    /// # Arguments
    ///
    /// * `word` - A non-empty word over the 27-symbol alphabet.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - The number of nodes created (0 if the path already existed).
    /// * `Err(LanaiTrieError)` - If the word was rejected or storage could not be
    ///   reserved. The trie is unchanged in that case.
    pub fn insert(&mut self, word: &str) -> LanaiTrieResult<usize> {
        if self.is_torn_down() {
            return Err(LanaiTrieError::TornDown);
        }
        if word.is_empty() {
            return Err(LanaiTrieError::EmptyWord);
        }

        let slots = match word.bytes().map(slot_for).collect::<Option<Vec<usize>>>() {
            Some(slots) => slots,
            None => {
                let (position, symbol) = first_invalid(word).unwrap_or((0, '\u{FFFD}'));
                return Err(LanaiTrieError::MalformedSymbol {
                    word: word.to_string(),
                    symbol,
                    position,
                });
            }
        };

        if slots.len() > self.config.max_word_length {
            return Err(LanaiTrieError::WordTooLong {
                word: word.to_string(),
                max_length: self.config.max_word_length,
            });
        }

        // Follow the existing path as far as it goes.
        let mut node = ROOT;
        let mut depth = 0;
        while let Some(child) = slots.get(depth).and_then(|&slot| self.nodes[node].child(slot)) {
            node = child.index();
            depth += 1;
        }

        let missing = slots.len() - depth;
        self.reserve_nodes(missing)?;

        for &slot in &slots[depth..] {
            let id = NodeId::from_index(self.nodes.len())
                .ok_or(LanaiTrieError::AllocationFailure { requested: missing })?;
            self.nodes.push(TrieNode::new());
            self.nodes[node].children[slot] = Some(id);
            node = id.index();
        }

        self.nodes[node].is_terminal = true;
        Ok(missing)
    }

    /// Checks whether a word is stored in the trie.
    ///
    /// Letters match case-insensitively. A word containing any symbol outside
    /// the alphabet, the empty word, and any query on a torn-down trie yield
    /// `false`.
    pub fn contains(&self, word: &str) -> bool {
        let Some(mut node) = self.nodes.get(ROOT) else {
            return false;
        };

        for byte in word.bytes() {
            let Some(slot) = slot_for(byte) else {
                return false;
            };
            match node.child(slot) {
                Some(child) => node = &self.nodes[child.index()],
                None => return false,
            }
        }

        node.is_terminal
    }

    /// Returns the number of live nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the trie stores no words.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Returns `true` once [`teardown`](Self::teardown) has run.
    pub fn is_torn_down(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Computes structural statistics with an iterative walk from the root.
    pub fn stats(&self) -> TrieStats {
        if self.is_torn_down() {
            return TrieStats::default();
        }

        let mut stats = TrieStats {
            approx_bytes: self.nodes.capacity() * std::mem::size_of::<TrieNode>(),
            ..TrieStats::default()
        };
        let mut stack = vec![(ROOT, 0usize)];

        while let Some((index, depth)) = stack.pop() {
            let node = &self.nodes[index];
            stats.nodes += 1;
            if node.is_terminal {
                stats.terminal_nodes += 1;
            }
            stats.max_depth = stats.max_depth.max(depth);
            stack.extend(node.present_children().map(|child| (child.index(), depth + 1)));
        }

        stats
    }

    /// Releases the trie's storage and leaves it torn down.
    ///
    /// Nodes are only counted during the walk: a post-order pass with an
    /// explicit worklist visits each node once, children before parent, without
    /// recursing. The arena is then freed in a single deallocation.
    ///
    /// # Returns
    ///
    /// The number of nodes released; 0 if the trie was already torn down.
    pub fn teardown(&mut self) -> usize {
        if self.is_torn_down() {
            return 0;
        }

        let mut released = 0;
        let mut stack = vec![(ROOT, false)];

        while let Some((index, children_done)) = stack.pop() {
            if children_done {
                released += 1;
            } else {
                stack.push((index, true));
                stack.extend(self.nodes[index].present_children().map(|c| (c.index(), false)));
            }
        }

        debug_assert_eq!(released, self.nodes.len(), "unreachable nodes in trie arena");
        self.nodes = Vec::new();

        tracing::debug!(released, "trie torn down");
        released
    }

    /// Reserves arena space for `additional` nodes without mutating the trie.
    fn reserve_nodes(&mut self, additional: usize) -> LanaiTrieResult<()> {
        if additional == 0 {
            return Ok(());
        }

        let target = self.nodes.len() + additional;
        if let Some(limit) = self.config.max_nodes {
            if target > limit {
                return Err(LanaiTrieError::NodeLimitExceeded { limit });
            }
        }
        if u32::try_from(target).is_err() {
            return Err(LanaiTrieError::AllocationFailure {
                requested: additional,
            });
        }

        self.nodes
            .try_reserve(additional)
            .map_err(|_| LanaiTrieError::AllocationFailure {
                requested: additional,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn trie_with(words: &[&str]) -> LanaiTrie {
        let mut trie = LanaiTrie::new().unwrap();
        for word in words {
            trie.insert(word).unwrap();
        }
        trie
    }

    #[test]
    fn test_trie_basic_operations() {
        let mut trie = LanaiTrie::new().unwrap();

        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);

        assert_eq!(trie.insert("cat").unwrap(), 3);
        assert_eq!(trie.insert("cats").unwrap(), 1);
        assert_eq!(trie.insert("dog").unwrap(), 3);
        assert!(!trie.is_empty());

        assert!(trie.contains("cat"));
        assert!(trie.contains("Cat"));
        assert!(trie.contains("cats"));
        assert!(trie.contains("dog"));
        assert!(!trie.contains("ca"));
        assert!(!trie.contains("catsup"));
        assert!(!trie.contains("do"));
    }

    #[test]
    fn test_apostrophe_is_significant() {
        let trie = trie_with(&["don't", "won't"]);

        assert!(trie.contains("don't"));
        assert!(trie.contains("DON'T"));
        assert!(trie.contains("Won't"));
        assert!(!trie.contains("dont"));
        assert!(!trie.contains("'"));
    }

    #[test]
    fn test_empty_and_foreign_queries() {
        let trie = trie_with(&["xyz", "a"]);

        assert!(!trie.contains(""));
        assert!(!trie.contains("xyz!"));
        assert!(!trie.contains("x-z"));
        assert!(!trie.contains("ä"));
        assert!(trie.contains("XYZ"));
    }

    #[test]
    fn test_duplicate_insert_is_structurally_idempotent() {
        let mut trie = LanaiTrie::new().unwrap();
        assert_eq!(trie.insert("a").unwrap(), 1);
        assert_eq!(trie.insert("a").unwrap(), 0);
        assert_eq!(trie.insert("A").unwrap(), 0);

        let stats = trie.stats();
        assert_eq!(stats.nodes, 2);
        assert_eq!(stats.terminal_nodes, 1);
        assert_eq!(stats.max_depth, 1);
        assert!(trie.contains("a"));
    }

    #[test]
    fn test_insert_rejections_leave_trie_untouched() {
        let mut trie = trie_with(&["cat"]);
        let before = trie.node_count();

        assert_eq!(trie.insert(""), Err(LanaiTrieError::EmptyWord));
        assert_eq!(
            trie.insert("cater!"),
            Err(LanaiTrieError::MalformedSymbol {
                word: "cater!".to_string(),
                symbol: '!',
                position: 5,
            })
        );
        assert!(matches!(
            trie.insert("naïve"),
            Err(LanaiTrieError::MalformedSymbol { symbol: 'ï', position: 2, .. })
        ));

        assert_eq!(trie.node_count(), before);
        assert!(!trie.contains("cater"));
    }

    #[test]
    fn test_word_length_limit() {
        let config = LanaiTrieConfig {
            max_word_length: 4,
            ..Default::default()
        };
        let mut trie = LanaiTrie::with_config(config).unwrap();

        assert!(trie.insert("word").is_ok());
        assert_eq!(
            trie.insert("words"),
            Err(LanaiTrieError::WordTooLong {
                word: "words".to_string(),
                max_length: 4,
            })
        );
        assert_eq!(trie.node_count(), 5);
    }

    #[test]
    fn test_node_limit_is_atomic() {
        let config = LanaiTrieConfig {
            max_nodes: Some(5),
            ..Default::default()
        };
        let mut trie = LanaiTrie::with_config(config).unwrap();

        assert_eq!(trie.insert("abc").unwrap(), 3);
        // "abxyz" needs three more nodes but only one fits.
        assert_eq!(
            trie.insert("abxyz"),
            Err(LanaiTrieError::NodeLimitExceeded { limit: 5 })
        );
        assert_eq!(trie.node_count(), 4);
        assert!(!trie.contains("abx"));

        // A path that fits is still accepted.
        assert_eq!(trie.insert("abd").unwrap(), 1);
        assert!(trie.contains("abd"));
    }

    #[test]
    fn test_teardown_releases_every_node_once() {
        let mut trie = trie_with(&["cat", "cats", "dog", "don't"]);
        let nodes = trie.node_count();
        assert_eq!(trie.stats().nodes, nodes);

        assert_eq!(trie.teardown(), nodes);
        assert!(trie.is_torn_down());
        assert_eq!(trie.node_count(), 0);
        assert_eq!(trie.stats(), TrieStats::default());

        assert_eq!(trie.teardown(), 0);
        assert!(!trie.contains("cat"));
        assert!(!trie.contains(""));
        assert_eq!(trie.insert("cat"), Err(LanaiTrieError::TornDown));
    }

    #[test]
    fn test_stats() {
        let trie = trie_with(&["cat", "cats", "dog"]);
        let stats = trie.stats();

        assert_eq!(stats.nodes, 8);
        assert_eq!(stats.terminal_nodes, 3);
        assert_eq!(stats.max_depth, 4);
        assert!(stats.approx_bytes >= 8 * std::mem::size_of::<TrieNode>());
    }

    #[test]
    fn test_deep_word_teardown() {
        let config = LanaiTrieConfig {
            max_word_length: 10_000,
            ..Default::default()
        };
        let mut trie = LanaiTrie::with_config(config).unwrap();
        let word = "a".repeat(10_000);

        trie.insert(&word).unwrap();
        assert!(trie.contains(&word));
        assert_eq!(trie.teardown(), 10_001);
    }

    /// Readers share an immutable trie without any locking.
    #[test]
    fn test_concurrent_readers() {
        const THREAD_COUNT: usize = 8;

        let trie = Arc::new(trie_with(&["alpha", "beta", "gamma", "o'clock"]));
        let mut handles = Vec::with_capacity(THREAD_COUNT);

        for _ in 0..THREAD_COUNT {
            let trie_ref = Arc::clone(&trie);
            handles.push(thread::spawn(move || {
                for _ in 0..1_000 {
                    assert!(trie_ref.contains("ALPHA"));
                    assert!(trie_ref.contains("o'clock"));
                    assert!(!trie_ref.contains("delta"));
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
