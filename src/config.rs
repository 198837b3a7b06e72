// SPDX-License-Identifier: PMPL-1.0-or-later

//! Run configuration
//!
//! Everything a run needs is fixed here before any input is read. Output
//! locations default to the firmware tree next to the translations
//! directory.

use crate::emit::GenerateOptions;
use crate::error::{GenerateError, Result};
use crate::types::BuildInfo;
use crate::version;
use chrono::{DateTime, Local, NaiveDate, Utc};
use std::path::{Path, PathBuf};

pub const TRANSLATION_CPP: &str = "Translation.cpp";
pub const UNIT_H: &str = "unit.h";
pub const DATE_FORMAT: &str = "%d-%m-%y";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSource {
    Explicit(String),
    /// Read `BUILD_VERSION` from this header and append the git revision.
    Header(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub input_dir: PathBuf,
    pub translation_out: PathBuf,
    pub unit_out: PathBuf,
    pub default_language: String,
    pub strict: bool,
    pub quiet: bool,
    pub font_tables: Option<PathBuf>,
    pub version: VersionSource,
    pub build_date: Option<String>,
    pub report: Option<PathBuf>,
}

impl GeneratorConfig {
    /// Configuration with every default derived from `input_dir`.
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        let input_dir = input_dir.into();
        Self {
            translation_out: default_translation_path(&input_dir),
            unit_out: default_unit_path(&input_dir),
            version: VersionSource::Header(default_version_header(&input_dir)),
            input_dir,
            default_language: "EN".to_string(),
            strict: false,
            quiet: false,
            font_tables: None,
            build_date: None,
            report: None,
        }
    }

    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            default_language: self.default_language.to_uppercase(),
            strict: self.strict,
            quiet: self.quiet,
        }
    }

    pub fn build_info(&self) -> Result<BuildInfo> {
        let version = match &self.version {
            VersionSource::Explicit(version) => version.clone(),
            VersionSource::Header(path) => version::derive_build_version(path, &self.input_dir)?,
        };
        let date = resolve_build_date(
            self.build_date.as_deref(),
            std::env::var("SOURCE_DATE_EPOCH").ok().as_deref(),
        )?;
        Ok(BuildInfo { version, date })
    }
}

fn firmware_root(input_dir: &Path) -> PathBuf {
    input_dir.join("..").join("workspace").join("TS100")
}

pub fn default_translation_path(input_dir: &Path) -> PathBuf {
    firmware_root(input_dir)
        .join("Core")
        .join("Src")
        .join(TRANSLATION_CPP)
}

pub fn default_unit_path(input_dir: &Path) -> PathBuf {
    firmware_root(input_dir)
        .join("Core")
        .join("Inc")
        .join(UNIT_H)
}

pub fn default_version_header(input_dir: &Path) -> PathBuf {
    firmware_root(input_dir).join("version.h")
}

/// Build date shown in the debug menu, as `dd-mm-yy`.
///
/// An explicit date wins, then `SOURCE_DATE_EPOCH` (UTC), then today.
pub fn resolve_build_date(explicit: Option<&str>, source_date_epoch: Option<&str>) -> Result<String> {
    if let Some(date) = explicit {
        let parsed = NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| {
            GenerateError::Usage(format!("build date {:?} is not DD-MM-YY", date))
        })?;
        return Ok(parsed.format(DATE_FORMAT).to_string());
    }

    if let Some(epoch) = source_date_epoch {
        let seconds: i64 = epoch.trim().parse().map_err(|_| {
            GenerateError::Usage(format!("SOURCE_DATE_EPOCH {:?} is not a number", epoch))
        })?;
        let moment = DateTime::<Utc>::from_timestamp(seconds, 0).ok_or_else(|| {
            GenerateError::Usage(format!("SOURCE_DATE_EPOCH {} is out of range", seconds))
        })?;
        return Ok(moment.format(DATE_FORMAT).to_string());
    }

    Ok(Local::now().format(DATE_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_into_the_firmware_tree() {
        let config = GeneratorConfig::new("Translations");
        assert_eq!(
            config.translation_out,
            Path::new("Translations/../workspace/TS100/Core/Src/Translation.cpp")
        );
        assert_eq!(
            config.unit_out,
            Path::new("Translations/../workspace/TS100/Core/Inc/unit.h")
        );
        assert_eq!(
            config.version,
            VersionSource::Header(PathBuf::from("Translations/../workspace/TS100/version.h"))
        );
        assert_eq!(config.default_language, "EN");
    }

    #[test]
    fn default_language_is_upper_cased() {
        let mut config = GeneratorConfig::new(".");
        config.default_language = "de".to_string();
        assert_eq!(config.generate_options().default_language, "DE");
    }

    #[test]
    fn explicit_date_wins() {
        assert_eq!(
            resolve_build_date(Some("05-03-26"), Some("0")).unwrap(),
            "05-03-26"
        );
    }

    #[test]
    fn explicit_date_must_parse() {
        assert!(matches!(
            resolve_build_date(Some("2026-03-05"), None),
            Err(GenerateError::Usage(_))
        ));
    }

    #[test]
    fn source_date_epoch_is_utc() {
        // 2021-01-01T00:00:00Z
        assert_eq!(
            resolve_build_date(None, Some("1609459200")).unwrap(),
            "01-01-21"
        );
        assert!(resolve_build_date(None, Some("soon")).is_err());
    }

    #[test]
    fn today_otherwise() {
        let date = resolve_build_date(None, None).unwrap();
        assert!(NaiveDate::parse_from_str(&date, DATE_FORMAT).is_ok());
    }

    #[test]
    fn explicit_version_skips_header() {
        let mut config = GeneratorConfig::new("/nonexistent");
        config.version = VersionSource::Explicit("v9".to_string());
        config.build_date = Some("01-02-03".to_string());
        let build = config.build_info().unwrap();
        assert_eq!(build.version, "v9");
        assert_eq!(build.date, "01-02-03");
    }
}
