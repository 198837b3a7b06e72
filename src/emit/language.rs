// SPDX-License-Identifier: PMPL-1.0-or-later

//! One `#ifdef LANG_<CODE>` block of the translation unit

use super::corpus::ResolvedLanguage;
use super::firmware::FirmwareStrings;
use super::{comment_text, id_column};
use crate::error::{GenerateError, Result};
use crate::font::{FontTableBuilder, FontTables};
use crate::glyphs::{allocate, count_glyphs, Allocation, StringEncoder};
use crate::types::{Definition, LanguageRecord, ShortName};
use serde::Serialize;
use std::fmt::Write as _;

/// What a block ended up using, for the run summary and report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageSummary {
    pub code: String,
    pub display_name: String,
    pub glyph_count: usize,
    pub highest_code: u8,
    pub dropped: Vec<char>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageBlock {
    pub text: String,
    pub summary: LanguageSummary,
}

pub struct LanguageBlockEmitter<'a> {
    definition: &'a Definition,
    fonts: &'a FontTables,
    firmware: &'a FirmwareStrings,
    strict: bool,
}

impl<'a> LanguageBlockEmitter<'a> {
    pub fn new(
        definition: &'a Definition,
        fonts: &'a FontTables,
        firmware: &'a FirmwareStrings,
        strict: bool,
    ) -> Self {
        Self {
            definition,
            fonts,
            firmware,
            strict,
        }
    }

    pub fn emit(&self, record: &LanguageRecord) -> Result<LanguageBlock> {
        let resolved = ResolvedLanguage::resolve(self.definition, record)?;
        let corpus = resolved.corpus(self.firmware);
        let allocation = allocate(&count_glyphs(corpus.strings().iter().copied())).map_err(
            |err| GenerateError::CapacityExceeded {
                language: record.code.clone(),
                count: err.count,
                limit: err.limit,
            },
        )?;
        let fonts = FontTableBuilder::new(self.fonts).build(&record.code, &allocation)?;

        let mut writer = BlockWriter::new(&record.code, &allocation, self.strict);
        writer.raw(&format!("\n#ifdef LANG_{}\n", record.code));
        writer.raw(&fonts.declarations());
        writer.raw(&format!("// ---- {} ----\n\n", record.display_name));

        self.settings_descriptions(&mut writer, &resolved)?;
        self.named_strings(&mut writer, &resolved)?;
        self.tip_models(&mut writer)?;
        self.debug_menu(&mut writer)?;
        self.short_names(&mut writer, &resolved)?;
        self.menu_groups(&mut writer, &resolved)?;
        writer.raw("#endif\n");

        let summary = LanguageSummary {
            code: record.code.clone(),
            display_name: record.display_name.clone(),
            glyph_count: allocation.glyph_count(),
            highest_code: allocation.highest_code(),
            dropped: writer.dropped,
        };
        Ok(LanguageBlock {
            text: writer.out,
            summary,
        })
    }

    fn settings_descriptions(
        &self,
        w: &mut BlockWriter<'_>,
        resolved: &ResolvedLanguage<'_>,
    ) -> Result<()> {
        w.raw("const char* SettingsDescriptions[] = {\n");
        for entry in &resolved.options {
            w.open_feature(entry.feature);
            w.raw(&id_column(entry.id));
            w.array_item(&entry.option.desc)?;
            w.close_feature(entry.feature);
        }
        w.raw("};\n\n");
        Ok(())
    }

    /// Messages, characters and firmware constants, each as a named pointer.
    fn named_strings(&self, w: &mut BlockWriter<'_>, resolved: &ResolvedLanguage<'_>) -> Result<()> {
        for message in &resolved.messages {
            w.declaration(message.id, message.text)?;
        }
        w.raw("\n");
        for character in &resolved.characters {
            w.declaration(character.id, character.text)?;
        }
        w.raw("\n");
        for (name, value) in self.firmware.constants() {
            w.declaration(name, value)?;
        }
        w.raw("\n");
        Ok(())
    }

    fn tip_models(&self, w: &mut BlockWriter<'_>) -> Result<()> {
        w.raw("const char* TipModelStrings[] = {\n");
        w.raw("#ifdef MODEL_TS100\n");
        for model in self.firmware.ts100_tip_models() {
            w.indented_item(model)?;
        }
        w.raw("#else\n");
        for model in self.firmware.ts80_tip_models() {
            w.indented_item(model)?;
        }
        w.raw("#endif\n");
        w.raw("};\n\n");
        Ok(())
    }

    fn debug_menu(&self, w: &mut BlockWriter<'_>) -> Result<()> {
        w.raw("const char* DebugMenu[] = {\n");
        for label in self.firmware.debug_menu() {
            w.indented_item(label)?;
        }
        w.raw("};\n\n");
        Ok(())
    }

    fn short_names(&self, w: &mut BlockWriter<'_>, resolved: &ResolvedLanguage<'_>) -> Result<()> {
        w.raw(&format!(
            "const enum ShortNameType SettingsShortNameType = {};\n",
            resolved.record.layout.selector()
        ));
        w.raw("const char* SettingsShortNames[][2] = {\n");
        for entry in &resolved.options {
            w.open_feature(entry.feature);
            w.raw(&id_column(entry.id));
            let lines = entry.option.short_name.lines();
            let encoded = lines
                .iter()
                .map(|line| w.literal(line))
                .collect::<Result<Vec<_>>>()?;
            let source = match &entry.option.short_name {
                ShortName::Single(text) => comment_text(text),
                ShortName::Double(lines) => pair_comment(lines),
            };
            w.raw(&format!("{{ {} }},//{} \n", encoded.join(", "), source));
            w.close_feature(entry.feature);
        }
        w.raw("};\n\n");
        Ok(())
    }

    /// Group count comes from the definition, so every language declares
    /// arrays of the same length.
    fn menu_groups(&self, w: &mut BlockWriter<'_>, resolved: &ResolvedLanguage<'_>) -> Result<()> {
        let count = self.definition.menu_groups.len();

        w.raw(&format!("const char* SettingsMenuEntries[{}] = {{\n", count));
        for entry in &resolved.groups {
            w.raw(&id_column(entry.id));
            let [first, second] = &entry.group.name;
            let joined = format!("{}\\n{}", first, second);
            let encoded = w.literal(&joined)?;
            w.raw(&format!("{},//{} \n", encoded, pair_comment(&entry.group.name)));
        }
        w.raw("};\n\n");

        w.raw(&format!(
            "const char* SettingsMenuEntriesDescriptions[{}] = {{\n",
            count
        ));
        for entry in &resolved.groups {
            w.raw(&id_column(entry.id));
            w.array_item(&entry.group.desc)?;
        }
        w.raw("};\n\n");
        Ok(())
    }
}

/// `['Power', 'source']`, the comment form of a two-line name.
fn pair_comment(lines: &[String; 2]) -> String {
    comment_text(&format!("['{}', '{}']", lines[0], lines[1]))
}

/// Accumulates block text and encodes literals against one allocation.
struct BlockWriter<'a> {
    language: &'a str,
    encoder: StringEncoder<'a>,
    strict: bool,
    out: String,
    dropped: Vec<char>,
}

impl<'a> BlockWriter<'a> {
    fn new(language: &'a str, allocation: &'a Allocation, strict: bool) -> Self {
        Self {
            language,
            encoder: StringEncoder::new(allocation),
            strict,
            out: String::new(),
            dropped: Vec::new(),
        }
    }

    fn raw(&mut self, text: &str) {
        self.out.push_str(text);
    }

    /// Quoted, encoded form of `source`.
    fn literal(&mut self, source: &str) -> Result<String> {
        let encoded = self.encoder.encode(source);
        if encoded.is_lossless() {
            return Ok(format!("\"{}\"", encoded.text));
        }
        for glyph in &encoded.dropped {
            if self.strict {
                return Err(GenerateError::UnencodableCharacter {
                    language: self.language.to_string(),
                    glyph: *glyph,
                    context: source.to_string(),
                });
            }
            eprintln!(
                "warning: {}: missing font definition for {:?} in {:?}, dropped",
                self.language, glyph, source
            );
            if !self.dropped.contains(glyph) {
                self.dropped.push(*glyph);
            }
        }
        Ok(format!("\"{}\"", encoded.text))
    }

    fn declaration(&mut self, name: &str, source: &str) -> Result<()> {
        let literal = self.literal(source)?;
        let _ = writeln!(
            self.out,
            "const char* {} = {};//{} ",
            name,
            literal,
            comment_text(source)
        );
        Ok(())
    }

    fn array_item(&mut self, source: &str) -> Result<()> {
        let literal = self.literal(source)?;
        let _ = writeln!(self.out, "{},//{} ", literal, comment_text(source));
        Ok(())
    }

    fn indented_item(&mut self, source: &str) -> Result<()> {
        self.raw("\t ");
        self.array_item(source)
    }

    fn open_feature(&mut self, feature: Option<&str>) {
        if let Some(feature) = feature {
            let _ = writeln!(self.out, "#ifdef {}", feature);
        }
    }

    fn close_feature(&mut self, feature: Option<&str>) {
        if feature.is_some() {
            self.raw("#endif\n");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyphs::count_glyphs;
    use crate::types::{
        BuildInfo, KeyDef, MenuGroup, MenuOption, MenuOptionDef, MessageDef, ShortNameLayout,
    };
    use std::collections::BTreeMap;

    fn definition() -> Definition {
        Definition {
            menu_options: vec![
                MenuOptionDef {
                    id: "SleepTemperature".to_string(),
                    feature: None,
                },
                MenuOptionDef {
                    id: "PowerSource".to_string(),
                    feature: Some("POW_DC".to_string()),
                },
            ],
            messages: vec![MessageDef {
                id: "SettingsResetMessage".to_string(),
                default: Some("Settings were\nreset!".to_string()),
            }],
            characters: vec![KeyDef {
                id: "SettingRightChar".to_string(),
            }],
            menu_groups: vec![KeyDef {
                id: "SolderingMenu".to_string(),
            }],
        }
    }

    fn record(layout: ShortNameLayout) -> LanguageRecord {
        let short = |single: &str, double: [&str; 2]| match layout {
            ShortNameLayout::Single => ShortName::Single(single.to_string()),
            ShortNameLayout::Double => {
                ShortName::Double([double[0].to_string(), double[1].to_string()])
            }
        };
        let mut menu_options = BTreeMap::new();
        menu_options.insert(
            "SleepTemperature".to_string(),
            MenuOption {
                desc: "Sleep temperature".to_string(),
                short_name: short("STMP", ["Sleep", "temp"]),
            },
        );
        menu_options.insert(
            "PowerSource".to_string(),
            MenuOption {
                desc: "Power source".to_string(),
                short_name: short("PWRSC", ["Power", "source"]),
            },
        );
        let mut characters = BTreeMap::new();
        characters.insert("SettingRightChar".to_string(), "R".to_string());
        let mut menu_groups = BTreeMap::new();
        menu_groups.insert(
            "SolderingMenu".to_string(),
            MenuGroup {
                desc: "Soldering settings".to_string(),
                name: ["Soldering".to_string(), "settings".to_string()],
            },
        );
        LanguageRecord {
            code: "EN".to_string(),
            display_name: "English".to_string(),
            layout,
            fahrenheit: true,
            menu_options,
            messages: BTreeMap::new(),
            characters,
            menu_groups,
        }
    }

    fn emit(layout: ShortNameLayout) -> LanguageBlock {
        let definition = definition();
        let fonts = FontTables::builtin();
        let firmware = FirmwareStrings::new(&BuildInfo {
            version: "v2.10".to_string(),
            date: "19-10-26".to_string(),
        });
        LanguageBlockEmitter::new(&definition, &fonts, &firmware, false)
            .emit(&record(layout))
            .unwrap()
    }

    #[test]
    fn block_sections_in_order() {
        let text = emit(ShortNameLayout::Double).text;
        let markers = [
            "\n#ifdef LANG_EN\n",
            "const uint8_t USER_FONT_12[] = {\n",
            "const uint8_t USER_FONT_6x8[] = {\n",
            "// ---- English ----\n\n",
            "const char* SettingsDescriptions[] = {\n",
            "const char* SettingsResetMessage = ",
            "const char* SettingRightChar = ",
            "const char* SymbolPlus = ",
            "const char* SymbolVersionNumber = ",
            "const char* TipModelStrings[] = {\n#ifdef MODEL_TS100\n",
            "#else\n",
            "const char* DebugMenu[] = {\n",
            "const enum ShortNameType SettingsShortNameType = SHORT_NAME_DOUBLE_LINE;\n",
            "const char* SettingsShortNames[][2] = {\n",
            "const char* SettingsMenuEntries[1] = {\n",
            "const char* SettingsMenuEntriesDescriptions[1] = {\n",
        ];
        let mut from = 0;
        for marker in markers {
            let at = text[from..]
                .find(marker)
                .unwrap_or_else(|| panic!("{:?} missing or out of order", marker));
            from += at + marker.len();
        }
        assert!(text.ends_with("};\n\n#endif\n"));
    }

    #[test]
    fn feature_gated_entries_are_wrapped() {
        let text = emit(ShortNameLayout::Double).text;
        let gated = "#ifdef POW_DC\n  /* PowerSource              */ ";
        assert_eq!(text.matches(gated).count(), 2);
        assert!(text.contains("//Power source \n#endif\n"));
    }

    #[test]
    fn message_comment_shows_newline_as_underscore() {
        let text = emit(ShortNameLayout::Single).text;
        assert!(text.contains("//Settings were_reset! \n"));
        let line = text
            .lines()
            .find(|line| line.starts_with("const char* SettingsResetMessage = "))
            .unwrap();
        assert!(line.contains("\\x01"));
    }

    #[test]
    fn short_names_follow_layout() {
        let single = emit(ShortNameLayout::Single).text;
        assert!(single.contains("SettingsShortNameType = SHORT_NAME_SINGLE_LINE;"));
        assert!(single.contains(" },//STMP \n"));

        let double = emit(ShortNameLayout::Double).text;
        assert!(double.contains("\", \""));
        assert!(double.contains(" },//['Sleep', 'temp'] \n"));
    }

    #[test]
    fn menu_entries_join_lines_with_newline_code() {
        let text = emit(ShortNameLayout::Single).text;
        let line = text
            .lines()
            .find(|line| line.starts_with("  /* SolderingMenu") && line.contains("['Soldering'"))
            .unwrap();
        assert!(line.contains("\\x01"));
    }

    #[test]
    fn summary_matches_allocation() {
        let block = emit(ShortNameLayout::Single);
        assert_eq!(block.summary.code, "EN");
        assert_eq!(block.summary.display_name, "English");
        assert!(block.summary.dropped.is_empty());
        assert_eq!(
            block.summary.highest_code as usize,
            block.summary.glyph_count + 1
        );
    }

    #[test]
    fn capacity_is_checked_per_language() {
        let mut definition = definition();
        definition.messages.push(MessageDef {
            id: "Everything".to_string(),
            default: Some(('\u{100}'..'\u{200}').collect()),
        });
        let fonts = FontTables::builtin();
        let firmware = FirmwareStrings::new(&BuildInfo {
            version: "v2".to_string(),
            date: "19-10-26".to_string(),
        });
        let err = LanguageBlockEmitter::new(&definition, &fonts, &firmware, false)
            .emit(&record(ShortNameLayout::Single))
            .unwrap_err();
        assert!(matches!(
            err,
            GenerateError::CapacityExceeded { ref language, limit: 243, .. } if language == "EN"
        ));
    }

    #[test]
    fn dropped_characters_warn_unless_strict() {
        let allocation = allocate(&count_glyphs(["ab"])).unwrap();

        let mut lenient = BlockWriter::new("EN", &allocation, false);
        assert_eq!(lenient.literal("abc").unwrap(), "\"\\x0D\\x0C\"");
        assert_eq!(lenient.dropped, vec!['c']);

        let mut strict = BlockWriter::new("EN", &allocation, true);
        assert!(matches!(
            strict.literal("abc"),
            Err(GenerateError::UnencodableCharacter { glyph: 'c', .. })
        ));
    }
}
