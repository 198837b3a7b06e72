// SPDX-License-Identifier: PMPL-1.0-or-later

//! Glyph to bitmap row lookup tables
//!
//! The built-in tables cover printable ASCII. Languages using other scripts
//! bring their glyphs through a supplementary JSON file:
//!
//! ```json
//! {
//!   "large": { "Ä": "0x00,0x00,...,0x00," },
//!   "small": { "Ä": "0x00,0x7C,0x12,0x11,0x12,0x7C," }
//! }
//! ```
//!
//! Supplementary rows replace built-in rows for the same glyph.

use super::{bitmap, builtin, FontSize};
use crate::error::{GenerateError, Result};
use crate::loader::read_text;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontTables {
    large: BTreeMap<char, String>,
    small: BTreeMap<char, String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SupplementFile {
    #[serde(default)]
    large: BTreeMap<String, String>,
    #[serde(default)]
    small: BTreeMap<String, String>,
}

impl FontTables {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let mut tables = Self::empty();
        for glyph in builtin::glyphs() {
            if let Some(pattern) = builtin::pattern(glyph) {
                for size in FontSize::all() {
                    tables.insert(size, glyph, bitmap::render_row(&bitmap::columns(size, pattern)));
                }
            }
        }
        tables
    }

    /// Built-in tables extended with the glyphs of a supplementary file.
    pub fn with_supplement(path: &Path) -> Result<Self> {
        let mut tables = Self::builtin();
        tables.merge_file(path)?;
        Ok(tables)
    }

    pub fn insert(&mut self, size: FontSize, glyph: char, row: String) {
        self.table_mut(size).insert(glyph, row);
    }

    pub fn row(&self, size: FontSize, glyph: char) -> Option<&str> {
        self.table(size).get(&glyph).map(String::as_str)
    }

    pub fn len(&self, size: FontSize) -> usize {
        self.table(size).len()
    }

    pub fn merge_file(&mut self, path: &Path) -> Result<()> {
        let content = read_text(path)?;
        let supplement: SupplementFile =
            serde_json::from_str(&content).map_err(|source| GenerateError::MalformedInput {
                path: path.to_path_buf(),
                source,
            })?;

        for (size, entries) in [
            (FontSize::Large, supplement.large),
            (FontSize::Small, supplement.small),
        ] {
            for (key, row) in entries {
                let glyph = single_glyph(&key).ok_or_else(|| GenerateError::InvalidRecord {
                    path: path.to_path_buf(),
                    detail: format!("{} font key {:?} is not a single character", size, key),
                })?;
                let bytes = bitmap::parse_row(&row)
                    .filter(|bytes| bytes.len() == size.bytes_per_glyph())
                    .ok_or_else(|| GenerateError::InvalidRecord {
                        path: path.to_path_buf(),
                        detail: format!(
                            "{} font row for {:?} must be {} byte literals",
                            size,
                            glyph,
                            size.bytes_per_glyph()
                        ),
                    })?;
                self.insert(size, glyph, bitmap::render_row(&bytes));
            }
        }
        Ok(())
    }

    fn table(&self, size: FontSize) -> &BTreeMap<char, String> {
        match size {
            FontSize::Large => &self.large,
            FontSize::Small => &self.small,
        }
    }

    fn table_mut(&mut self, size: FontSize) -> &mut BTreeMap<char, String> {
        match size {
            FontSize::Large => &mut self.large,
            FontSize::Small => &mut self.small,
        }
    }
}

fn single_glyph(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(glyph), None) => Some(glyph),
        _ => None,
    }
}
