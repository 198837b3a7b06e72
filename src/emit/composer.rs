// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language ordering and assembly of both artifacts

use super::firmware::FirmwareStrings;
use super::language::{LanguageBlockEmitter, LanguageSummary};
use super::unit::{unit_block, UNIT_BANNER, UNIT_FOOTER};
use crate::error::{GenerateError, Result};
use crate::font::FontTables;
use crate::types::{BuildInfo, Catalog};

pub const TRANSLATION_BANNER: &str = "// WARNING: THIS FILE WAS AUTO GENERATED BY transglyph. PLEASE DO NOT EDIT.

#include \"Translation.h\"
#ifndef LANG
#define LANG_EN
#endif
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Emitted first in both artifacts.
    pub default_language: String,
    pub strict: bool,
    pub quiet: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            default_language: "EN".to_string(),
            strict: false,
            quiet: false,
        }
    }
}

/// Both artifacts, composed in memory, plus what each language used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub translation: String,
    pub unit_header: String,
    pub languages: Vec<LanguageSummary>,
}

/// Default language first, every other code in ascending order.
pub fn emission_order<'c>(catalog: &'c Catalog, default_language: &str) -> Result<Vec<&'c str>> {
    let first = catalog
        .codes()
        .find(|code| *code == default_language)
        .ok_or_else(|| {
            GenerateError::Usage(format!(
                "default language {} has no translation file",
                default_language
            ))
        })?;
    let mut order = vec![first];
    order.extend(catalog.codes().filter(|code| *code != default_language));
    Ok(order)
}

pub struct OutputComposer<'a> {
    catalog: &'a Catalog,
    build: &'a BuildInfo,
    fonts: &'a FontTables,
    options: &'a GenerateOptions,
}

impl<'a> OutputComposer<'a> {
    pub fn new(
        catalog: &'a Catalog,
        build: &'a BuildInfo,
        fonts: &'a FontTables,
        options: &'a GenerateOptions,
    ) -> Self {
        Self {
            catalog,
            build,
            fonts,
            options,
        }
    }

    /// Generate every language; the first failure aborts the whole run.
    pub fn compose(&self) -> Result<Generated> {
        let order = emission_order(self.catalog, &self.options.default_language)?;
        let firmware = FirmwareStrings::new(self.build);
        let emitter = LanguageBlockEmitter::new(
            &self.catalog.definition,
            self.fonts,
            &firmware,
            self.options.strict,
        );

        let mut translation = String::from(TRANSLATION_BANNER);
        let mut unit_header = String::from(UNIT_BANNER);
        let mut languages = Vec::with_capacity(order.len());

        for code in order {
            let record = self
                .catalog
                .language(code)
                .ok_or_else(|| GenerateError::Usage(format!("unknown language {}", code)))?;

            if !self.options.quiet {
                println!("Generating block for {}", code);
            }
            let block = emitter.emit(record)?;
            translation.push_str(&block.text);
            unit_header.push_str(&unit_block(record, self.catalog.fahrenheit_enabled(code)));
            languages.push(block.summary);
        }
        unit_header.push_str(UNIT_FOOTER);

        Ok(Generated {
            translation,
            unit_header,
            languages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Definition, LanguageRecord, ShortNameLayout};
    use std::collections::BTreeMap;

    fn record(code: &str, fahrenheit: bool) -> LanguageRecord {
        LanguageRecord {
            code: code.to_string(),
            display_name: format!("{} name", code),
            layout: ShortNameLayout::Single,
            fahrenheit,
            menu_options: BTreeMap::new(),
            messages: BTreeMap::new(),
            characters: BTreeMap::new(),
            menu_groups: BTreeMap::new(),
        }
    }

    fn catalog(codes: &[(&str, bool)]) -> Catalog {
        let definition = Definition {
            menu_options: Vec::new(),
            messages: Vec::new(),
            characters: Vec::new(),
            menu_groups: Vec::new(),
        };
        Catalog::new(
            definition,
            codes.iter().map(|(code, f)| record(code, *f)).collect(),
        )
    }

    fn build() -> BuildInfo {
        BuildInfo {
            version: "v2.10".to_string(),
            date: "19-10-26".to_string(),
        }
    }

    #[test]
    fn default_language_goes_first() {
        let catalog = catalog(&[("RU", true), ("EN", true), ("DE", true), ("BG", true)]);
        assert_eq!(
            emission_order(&catalog, "EN").unwrap(),
            vec!["EN", "BG", "DE", "RU"]
        );
        assert_eq!(
            emission_order(&catalog, "RU").unwrap(),
            vec!["RU", "BG", "DE", "EN"]
        );
    }

    #[test]
    fn missing_default_language_is_a_usage_error() {
        let catalog = catalog(&[("DE", true)]);
        assert!(matches!(
            emission_order(&catalog, "EN"),
            Err(GenerateError::Usage(_))
        ));
    }

    #[test]
    fn both_artifacts_share_the_order() {
        let catalog = catalog(&[("DE", false), ("EN", true)]);
        let fonts = FontTables::builtin();
        let options = GenerateOptions {
            quiet: true,
            ..GenerateOptions::default()
        };
        let build = build();
        let generated = OutputComposer::new(&catalog, &build, &fonts, &options)
            .compose()
            .unwrap();

        assert!(generated.translation.starts_with(TRANSLATION_BANNER));
        let en = generated.translation.find("#ifdef LANG_EN").unwrap();
        let de = generated.translation.find("#ifdef LANG_DE").unwrap();
        assert!(en < de);

        let en = generated.unit_header.find("LANG_EN").unwrap();
        let de = generated.unit_header.find("LANG_DE").unwrap();
        assert!(en < de);
        assert!(generated
            .unit_header
            .contains("  #ifdef LANG_DE\n    //#define  ENABLED_FAHRENHEIT_SUPPORT\n"));
        assert!(generated.unit_header.ends_with(UNIT_FOOTER));

        let codes: Vec<&str> = generated.languages.iter().map(|l| l.code.as_str()).collect();
        assert_eq!(codes, vec!["EN", "DE"]);
    }

    #[test]
    fn output_is_deterministic() {
        let catalog = catalog(&[("DE", true), ("EN", true)]);
        let fonts = FontTables::builtin();
        let options = GenerateOptions {
            quiet: true,
            ..GenerateOptions::default()
        };
        let build = build();
        let composer = OutputComposer::new(&catalog, &build, &fonts, &options);
        assert_eq!(composer.compose().unwrap(), composer.compose().unwrap());
    }
}
