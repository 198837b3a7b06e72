// SPDX-License-Identifier: PMPL-1.0-or-later

//! Glyph alphabet of a single language
//!
//! A language's strings are counted ([`frequency`]), the distinct glyphs are
//! given byte codes ([`allocator`]), and strings are rewritten into those
//! codes ([`encoder`]). Codes 0 to 11 are fixed for every language:
//!
//! | Code      | Glyph              |
//! |-----------|--------------------|
//! | 0x00      | string terminator  |
//! | 0x01      | newline            |
//! | 0x02-0x0B | digits `0` to `9`  |
//! | 0x0C-     | by frequency       |

pub mod allocator;
pub mod encoder;
pub mod frequency;

pub use allocator::{allocate, Allocation, CapacityExceeded, MAX_GLYPHS};
pub use encoder::{Encoded, StringEncoder};
pub use frequency::{count_glyphs, normalize_escapes, GlyphFrequencies};
