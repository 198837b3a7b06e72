// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for transglyph
//!
//! The definition file and the per-language translation files are parsed
//! into these types once, at load time. Nothing here is mutated afterwards;
//! the whole model is handed to the generator by shared reference.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::slice;

/// Language-independent list of required ids and their emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Definition {
    pub menu_options: Vec<MenuOptionDef>,
    pub messages: Vec<MessageDef>,
    pub characters: Vec<KeyDef>,
    pub menu_groups: Vec<KeyDef>,
}

/// A settings entry; `feature` names a preprocessor symbol gating it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuOptionDef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature: Option<String>,
}

/// A message string; `default` is used when a language leaves it out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

/// Characters and menu groups only carry an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDef {
    pub id: String,
}

/// How menu option short names are laid out on the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShortNameLayout {
    Single,
    Double,
}

impl ShortNameLayout {
    pub fn from_menu_double(menu_double: bool) -> Self {
        if menu_double {
            ShortNameLayout::Double
        } else {
            ShortNameLayout::Single
        }
    }

    /// Firmware enum value selecting this layout.
    pub fn selector(&self) -> &'static str {
        match self {
            ShortNameLayout::Single => "SHORT_NAME_SINGLE_LINE",
            ShortNameLayout::Double => "SHORT_NAME_DOUBLE_LINE",
        }
    }
}

/// Short name of a menu option, already narrowed to the language's layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortName {
    Single(String),
    Double([String; 2]),
}

impl ShortName {
    pub fn lines(&self) -> &[String] {
        match self {
            ShortName::Single(text) => slice::from_ref(text),
            ShortName::Double(lines) => lines,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub desc: String,
    pub short_name: ShortName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuGroup {
    pub desc: String,
    pub name: [String; 2],
}

/// One language as loaded from `translation_<code>.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageRecord {
    pub code: String,
    /// `languageLocalName`, or the code when the file has none.
    pub display_name: String,
    pub layout: ShortNameLayout,
    /// `tempUnitFahrenheit`, true when the file has none.
    pub fahrenheit: bool,
    pub menu_options: BTreeMap<String, MenuOption>,
    pub messages: BTreeMap<String, String>,
    pub characters: BTreeMap<String, String>,
    pub menu_groups: BTreeMap<String, MenuGroup>,
}

/// Immutable run context: the definition plus every loaded language.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub definition: Definition,
    languages: BTreeMap<String, LanguageRecord>,
    fahrenheit_by_code: BTreeMap<String, bool>,
}

impl Catalog {
    pub fn new(definition: Definition, records: Vec<LanguageRecord>) -> Self {
        let fahrenheit_by_code = records
            .iter()
            .map(|record| (record.code.clone(), record.fahrenheit))
            .collect();
        let languages = records
            .into_iter()
            .map(|record| (record.code.clone(), record))
            .collect();
        Self {
            definition,
            languages,
            fahrenheit_by_code,
        }
    }

    pub fn language(&self, code: &str) -> Option<&LanguageRecord> {
        self.languages.get(code)
    }

    /// Language codes in ascending lexical order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    pub fn fahrenheit_enabled(&self, code: &str) -> bool {
        self.fahrenheit_by_code.get(code).copied().unwrap_or(true)
    }
}

/// Values baked into the firmware constants and the debug menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInfo {
    pub version: String,
    /// Already formatted as `dd-mm-yy`.
    pub date: String,
}
