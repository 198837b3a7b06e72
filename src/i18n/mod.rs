// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language code metadata.
//!
//! An unknown code is only worth a warning: the firmware build selects a
//! language by its `LANG_<code>` symbol and does not care what it means.

mod iso639;

pub use iso639::{is_known_language_code, is_valid_iso639_1, language_name, primary_subtag};
