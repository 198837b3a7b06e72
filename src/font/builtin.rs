// SPDX-License-Identifier: PMPL-1.0-or-later

//! Built-in 8x8 patterns for printable ASCII.
//!
//! One `u64` per glyph, most significant byte is the top row and bit 7 of a
//! row is its leftmost pixel. Glyphs are 4 pixels wide and leave the right
//! columns blank as letter spacing.

const FIRST: char = ' ';
const LAST: char = '~';

#[rustfmt::skip]
const PRINTABLE_ASCII: [u64; 95] = [
    0x0000000000000000, // ' '
    0x2020202000200000, // !
    0x5050500000000000, // "
    0x0050f850f8500000, // #
    0x0070a07028700000, // $
    0x8090204090100000, // %
    0xc0c0182020180000, // &
    0x8080800000000000, // '
    0x2040404040200000, // (
    0x4020202020400000, // )
    0x40a0400000000000, // *
    0x002020f820200000, // +
    0x0000000030204000, // ,
    0x0000007000000000, // -
    0x0000000060600000, // .
    0x0010204080000000, // /
    0x6090b0d090600000, // 0
    0x2060202020700000, // 1
    0x6090102040f00000, // 2
    0xf010601090600000, // 3
    0x2060a0f020200000, // 4
    0xf080e01090600000, // 5
    0x6080e09090600000, // 6
    0xf010202040400000, // 7
    0x6090609090600000, // 8
    0x6090907010600000, // 9
    0x0060600060600000, // :
    0x0060600060408000, // ;
    0x0010204020100000, // <
    0x0000f000f0000000, // =
    0x0040201020400000, // >
    0x2050102000200000, // ?
    0x6090b0b080600000, // @
    0x609090f090900000, // A
    0xe090e09090e00000, // B
    0x6090808090600000, // C
    0xe090909090e00000, // D
    0xf080e08080f00000, // E
    0xf080e08080800000, // F
    0x609080b090700000, // G
    0x9090f09090900000, // H
    0x7020202020700000, // I
    0x1010101090600000, // J
    0x90a0c0c0a0900000, // K
    0x8080808080f00000, // L
    0x90f0f09090900000, // M
    0x90d0d0b0b0900000, // N
    0x6090909090600000, // O
    0xe09090e080800000, // P
    0x60909090d0601000, // Q
    0xe09090e0a0900000, // R
    0x6090402090600000, // S
    0x7020202020200000, // T
    0x9090909090600000, // U
    0x9090909060600000, // V
    0x909090f0f0900000, // W
    0x9090606090900000, // X
    0x5050502020200000, // Y
    0xf010204080f00000, // Z
    0x7040404040700000, // [
    0x0080402010000000, // backslash
    0x7010101010700000, // ]
    0x2050000000000000, // ^
    0x0000000000f00000, // _
    0x4020000000000000, // `
    0x00007090b0500000, // a
    0x8080e09090e00000, // b
    0x0000608080600000, // c
    0x1010709090700000, // d
    0x000060b0c0600000, // e
    0x205040e040400000, // f
    0x0000709060807000, // g
    0x8080e09090900000, // h
    0x2000602020700000, // i
    0x1000101010502000, // j
    0x8080a0c0a0900000, // k
    0x6020202020700000, // l
    0x0000a0f090900000, // m
    0x0000e09090900000, // n
    0x0000609090600000, // o
    0x0000e09090e08000, // p
    0x0000709090701000, // q
    0x0000e09080800000, // r
    0x000070c030e00000, // s
    0x4040e04040300000, // t
    0x0000909090700000, // u
    0x0000505050200000, // v
    0x00009090f0f00000, // w
    0x0000906060900000, // x
    0x0000909050204000, // y
    0x0000f02040f00000, // z
    0x1020602020100000, // {
    0x2020202020200000, // |
    0x4020302020400000, // }
    0x50a0000000000000, // ~
];

/// Pattern for `glyph`, if it is printable ASCII.
pub fn pattern(glyph: char) -> Option<u64> {
    if (FIRST..=LAST).contains(&glyph) {
        PRINTABLE_ASCII
            .get(glyph as usize - FIRST as usize)
            .copied()
    } else {
        None
    }
}

/// Every glyph with a built-in pattern.
pub fn glyphs() -> impl Iterator<Item = char> {
    FIRST..=LAST
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_printable_ascii() {
        assert_eq!(glyphs().count(), PRINTABLE_ASCII.len());
        assert_eq!(pattern(' '), Some(0));
        assert_eq!(pattern('A'), Some(0x609090f090900000));
        assert_eq!(pattern('~'), Some(0x50a0000000000000));
    }

    #[test]
    fn nothing_outside_ascii() {
        assert_eq!(pattern('\n'), None);
        assert_eq!(pattern('\u{7f}'), None);
        assert_eq!(pattern('Ä'), None);
    }

    #[test]
    fn zero_and_letter_o_differ() {
        assert_ne!(pattern('0'), pattern('O'));
    }
}
