//! Test modules for Mauka Lexicon.
//!
//! Crate-level tests that span several components:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Property-based tests of dictionary membership
//! - Shared fixtures and proptest strategies


// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{foreign_word_strategy, word_list_strategy, word_strategy, TestFixture};
