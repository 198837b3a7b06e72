// SPDX-License-Identifier: PMPL-1.0-or-later

//! C source emission
//!
//! [`corpus`] resolves a language against the definition, [`language`]
//! writes its `#ifdef LANG_<CODE>` block, [`unit`] writes its `unit.h`
//! entry, and [`composer`] orders languages and assembles both artifacts.

pub mod composer;
pub mod corpus;
pub mod firmware;
pub mod language;
pub mod unit;

pub use composer::{emission_order, GenerateOptions, Generated, OutputComposer};
pub use corpus::{LanguageCorpus, ResolvedLanguage};
pub use firmware::FirmwareStrings;
pub use language::{LanguageBlock, LanguageBlockEmitter, LanguageSummary};

/// Source text made safe for a trailing `//` comment.
///
/// Line breaks become `_`. A final backslash would splice the next source
/// line into the comment, so it gets a `_` after it.
pub fn comment_text(text: &str) -> String {
    let mut out: String = text
        .chars()
        .filter(|c| *c != '\r')
        .map(|c| if c == '\n' { '_' } else { c })
        .collect();
    if out.ends_with('\\') {
        out.push('_');
    }
    out
}

/// `/* id */` column used by the settings tables: padded or cut to 25 chars.
pub(crate) fn id_column(id: &str) -> String {
    format!("  /* {:<25.25} */ ", id)
}
