//! Mauka Lexicon Library
//!
//! An in-memory word-membership index for spell checking. A word list is
//! loaded into a 27-symbol trie (letters plus apostrophe) and queried
//! case-insensitively.
//!
//! # Architecture
//!
//! - [`data_structures::lanai_trie`]: the arena-backed trie
//! - [`dictionary`]: load / check / size / unload over a trie
//! - [`config`]: layered configuration with validation
//! - [`error`]: error types and reporting
//!
//! # Example
//!
//! ```
//! use mauka_lexicon_lib::dictionary::Dictionary;
//! use std::io::Cursor;
//!
//! let mut dictionary = Dictionary::new();
//! dictionary.load_from_reader(Cursor::new("cat\ncats\ndog"), "inline").unwrap();
//!
//! assert_eq!(dictionary.size(), 3);
//! assert!(dictionary.check("Cat"));
//! assert!(!dictionary.check("ca"));
//! assert!(dictionary.unload());
//! ```

pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Mauka Lexicon.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
