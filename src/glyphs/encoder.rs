// SPDX-License-Identifier: PMPL-1.0-or-later

//! Rewrites source strings into a language's byte codes

use super::allocator::Allocation;
use super::frequency::normalize_escapes;

/// C string literal body plus the glyphs that could not be encoded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Encoded {
    pub text: String,
    pub dropped: Vec<char>,
}

impl Encoded {
    pub fn is_lossless(&self) -> bool {
        self.dropped.is_empty()
    }
}

pub struct StringEncoder<'a> {
    allocation: &'a Allocation,
}

impl<'a> StringEncoder<'a> {
    pub fn new(allocation: &'a Allocation) -> Self {
        Self { allocation }
    }

    /// Encode `source` as a run of `\xHH` escapes.
    ///
    /// Glyphs without a code are left out of the text and listed in
    /// [`Encoded::dropped`]; reporting them is up to the caller.
    pub fn encode(&self, source: &str) -> Encoded {
        let mut encoded = Encoded::default();
        for glyph in normalize_escapes(source).chars() {
            match self.allocation.code(glyph) {
                Some(code) => encoded.text.push_str(&escape_code(code)),
                None => encoded.dropped.push(glyph),
            }
        }
        encoded
    }
}

pub fn escape_code(code: u8) -> String {
    format!("\\x{:02X}", code)
}
