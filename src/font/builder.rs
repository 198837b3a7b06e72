// SPDX-License-Identifier: PMPL-1.0-or-later

//! Per-language font tables in allocation order

use super::{FontSize, FontTables};
use crate::emit::comment_text;
use crate::error::{GenerateError, Result};
use crate::glyphs::encoder::escape_code;
use crate::glyphs::Allocation;

/// Annotated rows of one font size, ready to be declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontTable {
    pub size: FontSize,
    pub rows: Vec<String>,
}

impl FontTable {
    pub fn declaration(&self) -> String {
        let mut out = format!("const uint8_t {}[] = {{\n", self.size.table_name());
        for row in &self.rows {
            out.push_str(row);
            out.push('\n');
        }
        out.push_str("};\n");
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageFonts {
    pub large: FontTable,
    pub small: FontTable,
}

impl LanguageFonts {
    pub fn declarations(&self) -> String {
        format!("{}{}", self.large.declaration(), self.small.declaration())
    }
}

pub struct FontTableBuilder<'a> {
    tables: &'a FontTables,
}

impl<'a> FontTableBuilder<'a> {
    pub fn new(tables: &'a FontTables) -> Self {
        Self { tables }
    }

    /// Look up every allocated glyph in both sizes, in allocation order.
    ///
    /// The first glyph missing from either table aborts the language.
    pub fn build(&self, language: &str, allocation: &Allocation) -> Result<LanguageFonts> {
        let mut large = Vec::with_capacity(allocation.glyph_count());
        let mut small = Vec::with_capacity(allocation.glyph_count());

        for (glyph, code) in allocation.entries() {
            let annotation = format!(
                "//{} -> {}",
                escape_code(code),
                comment_text(&glyph.to_string())
            );

            for (size, rows) in [(FontSize::Large, &mut large), (FontSize::Small, &mut small)] {
                let row = self
                    .tables
                    .row(size, glyph)
                    .ok_or_else(|| self.missing(language, size, glyph))?;
                rows.push(format!("{}{}", row, annotation));
            }
        }

        Ok(LanguageFonts {
            large: FontTable {
                size: FontSize::Large,
                rows: large,
            },
            small: FontTable {
                size: FontSize::Small,
                rows: small,
            },
        })
    }

    fn missing(&self, language: &str, size: FontSize, glyph: char) -> GenerateError {
        GenerateError::MissingFontGlyph {
            language: language.to_string(),
            size,
            glyph,
        }
    }
}
