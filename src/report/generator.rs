// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report assembly

use super::GenerationReport;
use crate::artifacts::WrittenArtifact;
use crate::emit::LanguageSummary;
use crate::types::BuildInfo;
use anyhow::{anyhow, Result};

pub struct ReportGenerator;

impl ReportGenerator {
    pub fn new() -> Self {
        Self
    }

    /// `artifacts` holds the translation unit then the unit header.
    pub fn generate(
        &self,
        build: BuildInfo,
        artifacts: Vec<WrittenArtifact>,
        languages: Vec<LanguageSummary>,
    ) -> Result<GenerationReport> {
        let mut artifacts = artifacts.into_iter();
        let (translation, unit_header) = match (artifacts.next(), artifacts.next(), artifacts.next()) {
            (Some(translation), Some(unit_header), None) => (translation, unit_header),
            _ => return Err(anyhow!("expected exactly two written artifacts")),
        };

        let lossy_languages = languages
            .iter()
            .filter(|language| !language.dropped.is_empty())
            .count();

        Ok(GenerationReport {
            build,
            translation,
            unit_header,
            languages,
            lossy_languages,
        })
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn artifact(name: &str) -> WrittenArtifact {
        WrittenArtifact {
            path: PathBuf::from(name),
            blake3: "00".repeat(32),
            bytes: 1,
            changed: true,
        }
    }

    fn summary(code: &str, dropped: Vec<char>) -> LanguageSummary {
        LanguageSummary {
            code: code.to_string(),
            display_name: code.to_string(),
            glyph_count: 40,
            highest_code: 41,
            dropped,
        }
    }

    fn build() -> BuildInfo {
        BuildInfo {
            version: "v2".to_string(),
            date: "19-10-26".to_string(),
        }
    }

    #[test]
    fn counts_lossy_languages() {
        let report = ReportGenerator::new()
            .generate(
                build(),
                vec![artifact("Translation.cpp"), artifact("unit.h")],
                vec![summary("EN", Vec::new()), summary("RU", vec!['Ж'])],
            )
            .unwrap();
        assert_eq!(report.lossy_languages, 1);
        assert_eq!(report.translation.path, PathBuf::from("Translation.cpp"));
        assert_eq!(report.unit_header.path, PathBuf::from("unit.h"));
    }

    #[test]
    fn needs_both_artifacts() {
        assert!(ReportGenerator::new()
            .generate(build(), vec![artifact("Translation.cpp")], Vec::new())
            .is_err());
    }
}
