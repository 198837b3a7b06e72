// SPDX-License-Identifier: PMPL-1.0-or-later

//! transglyph: translation tables for small-display firmware.
//!
//! Each language gets its own glyph alphabet of at most 243 characters,
//! coded into single bytes. Font tables are cut down to exactly that
//! alphabet, and every UI string is rewritten into the byte codes, so the
//! firmware can never reference a glyph its font does not contain.
//!
//! PIPELINE:
//! 1. **Loader**: definition and translation files into an immutable `Catalog`.
//! 2. **Glyphs**: frequency count, code allocation and string encoding.
//! 3. **Font**: bitmap rows for every allocated glyph in both sizes.
//! 4. **Emit**: per-language C blocks, `unit.h` entries and their ordering.
//! 5. **Artifacts**: staged, atomic writes of `Translation.cpp` and `unit.h`.

pub mod artifacts;
pub mod config;
pub mod emit;
pub mod error;
pub mod font;
pub mod glyphs;
pub mod i18n;
pub mod loader;
pub mod pipeline;
pub mod report;
pub mod types;
pub mod version;

pub use error::{GenerateError, Result};
pub use pipeline::{run, RunOutcome};
