// SPDX-License-Identifier: PMPL-1.0-or-later

//! A language resolved against the definition, and its string corpus

use super::firmware::FirmwareStrings;
use crate::error::{GenerateError, Result};
use crate::types::{Definition, LanguageRecord, MenuGroup, MenuOption};

#[derive(Debug, Clone, Copy)]
pub struct ResolvedOption<'a> {
    pub id: &'a str,
    pub feature: Option<&'a str>,
    pub option: &'a MenuOption,
}

/// Message or character entry; messages may carry definition default text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedText<'a> {
    pub id: &'a str,
    pub text: &'a str,
}

#[derive(Debug, Clone, Copy)]
pub struct ResolvedGroup<'a> {
    pub id: &'a str,
    pub group: &'a MenuGroup,
}

/// Every table of one language in definition order, with fallbacks applied.
#[derive(Debug, Clone)]
pub struct ResolvedLanguage<'a> {
    pub record: &'a LanguageRecord,
    pub options: Vec<ResolvedOption<'a>>,
    pub messages: Vec<ResolvedText<'a>>,
    pub characters: Vec<ResolvedText<'a>>,
    pub groups: Vec<ResolvedGroup<'a>>,
}

impl<'a> ResolvedLanguage<'a> {
    pub fn resolve(definition: &'a Definition, record: &'a LanguageRecord) -> Result<Self> {
        let missing = |table: &'static str, id: &str| GenerateError::MissingTranslationKey {
            language: record.code.clone(),
            table,
            id: id.to_string(),
        };

        let options = definition
            .menu_options
            .iter()
            .map(|def| {
                record
                    .menu_options
                    .get(&def.id)
                    .map(|option| ResolvedOption {
                        id: &def.id,
                        feature: def.feature.as_deref(),
                        option,
                    })
                    .ok_or_else(|| missing("menuOptions", &def.id))
            })
            .collect::<Result<Vec<_>>>()?;

        let messages = definition
            .messages
            .iter()
            .map(|def| {
                record
                    .messages
                    .get(&def.id)
                    .map(String::as_str)
                    .or(def.default.as_deref())
                    .map(|text| ResolvedText { id: &def.id, text })
                    .ok_or_else(|| GenerateError::MissingMessageKey {
                        language: record.code.clone(),
                        id: def.id.clone(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        let characters = definition
            .characters
            .iter()
            .map(|def| {
                record
                    .characters
                    .get(&def.id)
                    .map(|text| ResolvedText { id: &def.id, text })
                    .ok_or_else(|| missing("characters", &def.id))
            })
            .collect::<Result<Vec<_>>>()?;

        let groups = definition
            .menu_groups
            .iter()
            .map(|def| {
                record
                    .menu_groups
                    .get(&def.id)
                    .map(|group| ResolvedGroup { id: &def.id, group })
                    .ok_or_else(|| missing("menuGroups", &def.id))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            record,
            options,
            messages,
            characters,
            groups,
        })
    }

    /// Flatten into the ordered list of strings the glyph counter scans.
    pub fn corpus(&self, firmware: &'a FirmwareStrings) -> LanguageCorpus<'a> {
        let mut strings: Vec<&'a str> = Vec::new();
        strings.extend(self.options.iter().map(|o| o.option.desc.as_str()));
        strings.extend(self.messages.iter().map(|m| m.text));
        strings.extend(self.characters.iter().map(|c| c.text));
        for option in &self.options {
            strings.extend(option.option.short_name.lines().iter().map(String::as_str));
        }
        for group in &self.groups {
            strings.extend(group.group.name.iter().map(String::as_str));
        }
        strings.extend(self.groups.iter().map(|g| g.group.desc.as_str()));
        strings.extend(firmware.strings());
        LanguageCorpus { strings }
    }
}

/// Ordered strings of one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageCorpus<'a> {
    strings: Vec<&'a str>,
}

impl<'a> LanguageCorpus<'a> {
    pub fn strings(&self) -> &[&'a str] {
        &self.strings
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
