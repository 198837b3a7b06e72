// SPDX-License-Identifier: PMPL-1.0-or-later

//! Bitmap font tables for the firmware's two text sizes
//!
//! The firmware draws text from two column-major tables, `USER_FONT_12`
//! (12x16) and `USER_FONT_6x8`. Each language ships only the glyphs its
//! allocation uses, in allocation order, so glyph code `n` indexes row
//! `n - 2` of either table.

pub mod bitmap;
pub mod builder;
pub mod builtin;
pub mod tables;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use builder::{FontTable, FontTableBuilder, LanguageFonts};
pub use tables::FontTables;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Large,
    Small,
}

impl FontSize {
    pub fn all() -> [FontSize; 2] {
        [FontSize::Large, FontSize::Small]
    }

    /// Name of the array declared in the translation unit.
    pub fn table_name(&self) -> &'static str {
        match self {
            FontSize::Large => "USER_FONT_12",
            FontSize::Small => "USER_FONT_6x8",
        }
    }

    pub fn width(&self) -> usize {
        match self {
            FontSize::Large => 12,
            FontSize::Small => 6,
        }
    }

    pub fn height(&self) -> usize {
        match self {
            FontSize::Large => 16,
            FontSize::Small => 8,
        }
    }

    /// One byte per column per 8-pixel page.
    pub fn bytes_per_glyph(&self) -> usize {
        self.width() * self.height() / 8
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSize::Large => write!(f, "Large"),
            FontSize::Small => write!(f, "Small"),
        }
    }
}
