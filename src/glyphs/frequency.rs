// SPDX-License-Identifier: PMPL-1.0-or-later

//! Glyph frequency counting over a language corpus

use std::collections::BTreeMap;

/// Occurrence count per glyph. Ordered by glyph so iteration is stable.
pub type GlyphFrequencies = BTreeMap<char, usize>;

/// Turn the escape tokens translators type into the characters they mean.
///
/// A literal `\r` token is removed, a literal `\n` token becomes a newline,
/// and physical carriage returns are removed.
pub fn normalize_escapes(text: &str) -> String {
    text.replace("\\r", "")
        .replace("\\n", "\n")
        .replace('\r', "")
}

/// Count every glyph of every corpus string after escape normalisation.
pub fn count_glyphs<I, S>(corpus: I) -> GlyphFrequencies
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts = GlyphFrequencies::new();
    for line in corpus {
        for glyph in normalize_escapes(line.as_ref()).chars() {
            *counts.entry(glyph).or_insert(0) += 1;
        }
    }
    counts
}
