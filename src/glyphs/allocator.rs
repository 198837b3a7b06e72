// SPDX-License-Identifier: PMPL-1.0-or-later

//! Byte code allocation for a language's glyphs
//!
//! Frequent glyphs get low codes. The newline and the ten digits sit at fixed
//! codes so firmware code can print numbers without a lookup.

use super::frequency::GlyphFrequencies;
use std::collections::BTreeMap;
use std::fmt;

pub const TERMINATOR_CODE: u8 = 0x00;
pub const NEWLINE_CODE: u8 = 0x01;
pub const FIRST_DIGIT_CODE: u8 = 0x02;
pub const FIRST_FREE_CODE: u8 = 0x0C;
pub const MAX_CODE: u8 = 0xFC;

pub const DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Distinct glyphs (digits included) one language may use.
pub const MAX_GLYPHS: usize = 253 - DIGITS.len();

/// Too many distinct glyphs to fit the code space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityExceeded {
    pub count: usize,
    pub limit: usize,
}

impl fmt::Display for CapacityExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} distinct glyphs, limit is {}", self.count, self.limit)
    }
}

impl std::error::Error for CapacityExceeded {}

/// Glyph to byte code mapping of one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    codes: BTreeMap<char, u8>,
    sequence: Vec<char>,
}

impl Allocation {
    pub fn code(&self, glyph: char) -> Option<u8> {
        self.codes.get(&glyph).copied()
    }

    /// Glyphs that need a bitmap, in code order: digits, then by frequency.
    /// The newline is a control code and is not part of the sequence.
    pub fn sequence(&self) -> &[char] {
        &self.sequence
    }

    /// `(glyph, code)` pairs in sequence order.
    pub fn entries(&self) -> impl Iterator<Item = (char, u8)> + '_ {
        self.sequence
            .iter()
            .map(move |glyph| (*glyph, self.codes[glyph]))
    }

    pub fn glyph_count(&self) -> usize {
        self.sequence.len()
    }

    pub fn highest_code(&self) -> u8 {
        self.codes
            .values()
            .copied()
            .max()
            .unwrap_or(NEWLINE_CODE)
    }
}

/// Order glyphs by descending count, ties by descending code point.
///
/// Sorting ascending on `(count, glyph)` and reversing gives exactly that
/// tie-break; generated tables depend on it staying this way.
pub fn order_by_frequency(frequencies: &GlyphFrequencies) -> Vec<char> {
    let mut entries: Vec<(usize, char)> = frequencies
        .iter()
        .map(|(&glyph, &count)| (count, glyph))
        .collect();
    entries.sort();
    entries.reverse();
    entries.into_iter().map(|(_, glyph)| glyph).collect()
}

/// Assign codes to every glyph in `frequencies`.
///
/// The limit applies to glyphs that actually occur, digits included. Digits
/// that never occur still hold their reserved codes, so the free glyphs must
/// also end at or below [`MAX_CODE`].
pub fn allocate(frequencies: &GlyphFrequencies) -> Result<Allocation, CapacityExceeded> {
    let ordering = order_by_frequency(frequencies);

    let count = ordering.iter().filter(|glyph| **glyph != '\n').count();
    if count > MAX_GLYPHS {
        return Err(CapacityExceeded {
            count,
            limit: MAX_GLYPHS,
        });
    }

    let free_glyphs = ordering
        .iter()
        .filter(|glyph| **glyph != '\n' && !DIGITS.contains(*glyph))
        .count();
    let needed = free_glyphs + DIGITS.len();
    if FIRST_FREE_CODE as usize + free_glyphs > MAX_CODE as usize + 1 {
        return Err(CapacityExceeded {
            count: needed,
            limit: MAX_GLYPHS,
        });
    }

    let mut codes = BTreeMap::new();
    let mut sequence = Vec::with_capacity(needed);
    codes.insert('\n', NEWLINE_CODE);

    let mut next = FIRST_DIGIT_CODE;
    for digit in DIGITS {
        codes.insert(digit, next);
        sequence.push(digit);
        next += 1;
    }

    for glyph in ordering {
        if codes.contains_key(&glyph) {
            continue;
        }
        codes.insert(glyph, next);
        sequence.push(glyph);
        next += 1;
    }

    Ok(Allocation { codes, sequence })
}
