// SPDX-License-Identifier: PMPL-1.0-or-later

//! Conversion of 8x8 row patterns into the firmware's column layouts
//!
//! Both tables store one byte per column per 8-pixel page with bit 0 at the
//! top. The 12x16 glyph is the 8x8 pattern scaled by two; its top page
//! (12 bytes) comes before its bottom page.

use super::FontSize;

fn pixel(pattern: u64, x: usize, y: usize) -> bool {
    if x >= 8 || y >= 8 {
        return false;
    }
    (pattern >> (8 * (7 - y) + (7 - x))) & 1 == 1
}

fn column_byte(page: usize, lit: impl Fn(usize) -> bool) -> u8 {
    (0..8).fold(0u8, |byte, bit| {
        if lit(page * 8 + bit) {
            byte | (1 << bit)
        } else {
            byte
        }
    })
}

pub fn small_columns(pattern: u64) -> Vec<u8> {
    let size = FontSize::Small;
    (0..size.width())
        .map(|x| column_byte(0, |y| pixel(pattern, x, y)))
        .collect()
}

pub fn large_columns(pattern: u64) -> Vec<u8> {
    let size = FontSize::Large;
    let pages = size.height() / 8;
    (0..pages)
        .flat_map(|page| {
            (0..size.width()).map(move |x| column_byte(page, |y| pixel(pattern, x / 2, y / 2)))
        })
        .collect()
}

pub fn columns(size: FontSize, pattern: u64) -> Vec<u8> {
    match size {
        FontSize::Large => large_columns(pattern),
        FontSize::Small => small_columns(pattern),
    }
}

/// Render bytes the way the font tables list them: `0x00,0x7C,`.
pub fn render_row(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("0x{:02X},", byte)).collect()
}

/// Parse a row of comma separated byte literals (hex `0x..` or decimal).
pub fn parse_row(text: &str) -> Option<Vec<u8>> {
    text.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            match item
                .strip_prefix("0x")
                .or_else(|| item.strip_prefix("0X"))
            {
                Some(hex) => u8::from_str_radix(hex, 16).ok(),
                None => item.parse::<u8>().ok(),
            }
        })
        .collect()
}
