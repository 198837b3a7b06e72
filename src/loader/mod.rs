// SPDX-License-Identifier: PMPL-1.0-or-later

//! Loading of the definition file and the per-language translation files
//!
//! Everything is validated here, once: file-name/language-code agreement,
//! required fields, and the short-name shape each language's layout needs.
//! The result is an immutable [`Catalog`].

use crate::error::{GenerateError, Result};
use crate::i18n;
use crate::types::{
    Catalog, Definition, LanguageRecord, MenuGroup, MenuOption, ShortName, ShortNameLayout,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const DEFINITION_FILE: &str = "translations_def.js";

const TRANSLATION_PREFIX: &str = "translation_";
const TRANSLATION_SUFFIX: &str = ".json";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LanguageFile {
    language_code: Option<String>,
    language_local_name: Option<String>,
    temp_unit_fahrenheit: Option<bool>,
    menu_double: bool,
    #[serde(default)]
    menu_options: BTreeMap<String, MenuOptionFile>,
    #[serde(default)]
    messages: BTreeMap<String, String>,
    #[serde(default)]
    characters: BTreeMap<String, String>,
    #[serde(default)]
    menu_groups: BTreeMap<String, MenuGroupFile>,
}

#[derive(Debug, Deserialize)]
struct MenuOptionFile {
    desc: String,
    text: Option<String>,
    text2: Option<[String; 2]>,
}

#[derive(Debug, Deserialize)]
struct MenuGroupFile {
    desc: String,
    text2: [String; 2],
}

/// Read a UTF-8 text file, tolerating a leading byte-order mark.
pub(crate) fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| GenerateError::io("reading", path, source))?;
    let (text, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(&bytes);
    if had_errors {
        return Err(GenerateError::InvalidRecord {
            path: path.to_path_buf(),
            detail: "file is not valid UTF-8".to_string(),
        });
    }
    Ok(text.into_owned())
}

fn parse_json<T: serde::de::DeserializeOwned>(path: &Path, text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|source| GenerateError::MalformedInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the definition file. Its first line is a banner, not data.
pub fn load_definition(path: &Path) -> Result<Definition> {
    let text = read_text(path)?;
    let body = text.split_once('\n').map(|(_, rest)| rest).unwrap_or("");
    parse_json(path, body)
}

/// `translation_<code>.json` files of `dir`, keyed by upper-cased code.
/// Symlinked files count as translations.
pub fn discover_translations(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    if !dir.is_dir() {
        return Err(GenerateError::Usage(format!(
            "not a directory: {}",
            dir.display()
        )));
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|err| {
            let source = err
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("directory walk failed"));
            GenerateError::io("listing", dir, source)
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if let Some(code) = language_code_from_file_name(&name) {
            found.push((code, entry.path().to_path_buf()));
        }
    }
    Ok(found)
}

/// `translation_de.json` -> `DE`. The match on prefix and suffix ignores case.
pub fn language_code_from_file_name(name: &str) -> Option<String> {
    let lower = name.to_lowercase();
    if lower.len() != name.len()
        || !lower.starts_with(TRANSLATION_PREFIX)
        || !lower.ends_with(TRANSLATION_SUFFIX)
    {
        return None;
    }
    let code = &name[TRANSLATION_PREFIX.len()..name.len() - TRANSLATION_SUFFIX.len()];
    if code.is_empty() {
        return None;
    }
    Some(code.to_uppercase())
}

/// Parse one translation file and check it declares `expected_code`.
pub fn load_language(path: &Path, expected_code: &str) -> Result<LanguageRecord> {
    let text = read_text(path)?;
    let file: LanguageFile = parse_json(path, &text)?;

    let declared = file
        .language_code
        .clone()
        .unwrap_or_else(|| "(missing)".to_string());
    if declared != expected_code {
        return Err(GenerateError::SchemaMismatch {
            file: path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string()),
            expected: expected_code.to_string(),
            declared,
        });
    }

    into_record(path, expected_code, file)
}

fn into_record(path: &Path, code: &str, file: LanguageFile) -> Result<LanguageRecord> {
    let layout = ShortNameLayout::from_menu_double(file.menu_double);

    let mut menu_options = BTreeMap::new();
    for (id, option) in file.menu_options {
        let short_name = match (layout, option.text2, option.text) {
            (ShortNameLayout::Double, Some(lines), _) => ShortName::Double(lines),
            (ShortNameLayout::Single, _, Some(text)) => ShortName::Single(text),
            (ShortNameLayout::Double, None, _) => {
                return Err(invalid(path, format!("menu option '{}' needs text2", id)))
            }
            (ShortNameLayout::Single, _, None) => {
                return Err(invalid(path, format!("menu option '{}' needs text", id)))
            }
        };
        menu_options.insert(
            id,
            MenuOption {
                desc: option.desc,
                short_name,
            },
        );
    }

    let menu_groups = file
        .menu_groups
        .into_iter()
        .map(|(id, group)| {
            (
                id,
                MenuGroup {
                    desc: group.desc,
                    name: group.text2,
                },
            )
        })
        .collect();

    Ok(LanguageRecord {
        code: code.to_string(),
        display_name: file
            .language_local_name
            .unwrap_or_else(|| code.to_string()),
        layout,
        fahrenheit: file.temp_unit_fahrenheit.unwrap_or(true),
        menu_options,
        messages: file.messages,
        characters: file.characters,
        menu_groups,
    })
}

fn invalid(path: &Path, detail: String) -> GenerateError {
    GenerateError::InvalidRecord {
        path: path.to_path_buf(),
        detail,
    }
}

/// Load the definition and every translation of `dir` into a [`Catalog`].
pub fn load_catalog(dir: &Path) -> Result<Catalog> {
    let mut records: Vec<LanguageRecord> = Vec::new();
    for (code, path) in discover_translations(dir)? {
        if records.iter().any(|record| record.code == code) {
            return Err(invalid(
                &path,
                format!("language {} is defined by more than one file", code),
            ));
        }
        if !i18n::is_known_language_code(&code) {
            eprintln!(
                "warning: {} does not start with an ISO 639-1 language code",
                code
            );
        }
        records.push(load_language(&path, &code)?);
    }

    let definition = load_definition(&dir.join(DEFINITION_FILE))?;
    Ok(Catalog::new(definition, records))
}
