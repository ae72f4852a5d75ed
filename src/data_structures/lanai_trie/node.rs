// Copyright (c) 2025 Mauka Lexicon Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Lanai word trie.
//!
//! Nodes live in the trie's arena and refer to their children by index.
//! A node is referenced by exactly one parent slot, and the root (index 0)
//! is never anyone's child, which lets `NodeId` use a non-zero index.

use std::num::NonZeroU32;

use super::symbol::ALPHABET_SIZE;

/// Index of a non-root node in the trie arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(NonZeroU32);

impl NodeId {
    /// Builds an id from an arena index. Returns `None` for index 0 (the root)
    /// or for indices that do not fit in 32 bits.
    pub fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index).ok().and_then(NonZeroU32::new).map(Self)
    }

    /// Returns the arena index of this node.
    #[inline]
    pub fn index(self) -> usize {
        self.0.get() as usize
    }
}

/// A node in the Lanai word trie.
///
/// Each node stands for one prefix. Terminal nodes end a stored word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrieNode {
    /// Child slots indexed by symbol slot
    pub children: [Option<NodeId>; ALPHABET_SIZE],

    /// Whether the path to this node spells a stored word
    pub is_terminal: bool,
}

impl TrieNode {
    /// Creates a new non-terminal node with no children.
    pub fn new() -> Self {
        Self {
            children: [None; ALPHABET_SIZE],
            is_terminal: false,
        }
    }

    /// Returns the child in `slot`, if present.
    #[inline]
    pub fn child(&self, slot: usize) -> Option<NodeId> {
        self.children[slot]
    }

    /// Iterates over the present children.
    pub fn present_children(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.children.iter().flatten().copied()
    }
}

impl Default for TrieNode {
    fn default() -> Self {
        Self::new()
    }
}
