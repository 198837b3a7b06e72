// SPDX-License-Identifier: PMPL-1.0-or-later

//! Failure taxonomy for a generation run.
//!
//! Every stage returns [`GenerateError`]; only the binary maps a failure to a
//! process exit status through [`GenerateError::exit_code`].

use crate::font::FontSize;
use std::path::PathBuf;
use thiserror::Error;

/// Exit status for usage errors and generic fatal failures.
pub const EXIT_FAILURE: u8 = 1;
/// Exit status for structured-data parse failures.
pub const EXIT_PARSE_FAILURE: u8 = 2;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// Input file is not valid structured data.
    #[error("failed to decode {}: {source}", path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Structured data parsed but does not fit the expected schema.
    #[error("invalid record in {}: {detail}", path.display())]
    InvalidRecord { path: PathBuf, detail: String },

    /// Language code in the file name disagrees with the declared one.
    #[error("invalid languageCode {declared} in file {file} (file name says {expected})")]
    SchemaMismatch {
        file: String,
        expected: String,
        declared: String,
    },

    #[error("{language}: too many used symbols for this version ({count} > {limit})")]
    CapacityExceeded {
        language: String,
        count: usize,
        limit: usize,
    },

    #[error("{language}: missing {size} font element for {glyph:?}")]
    MissingFontGlyph {
        language: String,
        size: FontSize,
        glyph: char,
    },

    #[error("{language}: no {table} entry for required id '{id}'")]
    MissingTranslationKey {
        language: String,
        table: &'static str,
        id: String,
    },

    #[error("{language}: message '{id}' is untranslated and has no default text")]
    MissingMessageKey { language: String, id: String },

    /// Only raised in strict mode; otherwise the character is dropped with a warning.
    #[error("{language}: missing font definition for {glyph:?} in '{context}'")]
    UnencodableCharacter {
        language: String,
        glyph: char,
        context: String,
    },

    #[error("could not determine build version: {0}")]
    Version(String),

    #[error("{0}")]
    Usage(String),

    #[error("{action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenerateError::Io {
            action,
            path: path.into(),
            source,
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            GenerateError::MalformedInput { .. } | GenerateError::InvalidRecord { .. } => {
                EXIT_PARSE_FAILURE
            }
            _ => EXIT_FAILURE,
        }
    }
}

pub type Result<T> = std::result::Result<T, GenerateError>;
