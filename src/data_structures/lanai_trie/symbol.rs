// Copyright (c) 2025 Mauka Lexicon Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Symbol-to-slot mapping for the 27-symbol word alphabet.
//!
//! Letters fold to slots `0..26` regardless of case and the apostrophe takes
//! slot 26. Everything else, including any byte of a multi-byte UTF-8
//! sequence, has no slot.

/// Number of child slots per node: 26 letters plus the apostrophe.
pub const ALPHABET_SIZE: usize = 27;

/// Slot reserved for the apostrophe.
pub const APOSTROPHE_SLOT: usize = 26;

/// Maps a byte to its child slot, or `None` if it is outside the alphabet.
#[inline]
pub fn slot_for(byte: u8) -> Option<usize> {
    match byte {
        b'a'..=b'z' => Some((byte - b'a') as usize),
        b'A'..=b'Z' => Some((byte - b'A') as usize),
        b'\'' => Some(APOSTROPHE_SLOT),
        _ => None,
    }
}

/// Returns the byte offset and character of the first symbol outside the alphabet.
pub fn first_invalid(word: &str) -> Option<(usize, char)> {
    word.char_indices()
        .find(|&(_, c)| !c.is_ascii() || slot_for(c as u8).is_none())
}
