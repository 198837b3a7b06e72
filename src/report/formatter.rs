// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report formatting and output

use super::GenerationReport;
use crate::artifacts::{write_artifacts, WrittenArtifact};
use crate::emit::LanguageSummary;
use crate::glyphs::encoder::escape_code;
use crate::glyphs::MAX_GLYPHS;
use crate::i18n;
use anyhow::Result;
use colored::*;
use std::path::Path;

pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print(&self, report: &GenerationReport) {
        println!("\n{}", "=== TRANSGLYPH GENERATION SUMMARY ===".bold().cyan());
        println!("  Build version: {}", report.build.version);
        println!("  Build date: {}", report.build.date);
        println!();

        println!("{}", "ARTIFACTS".bold().yellow());
        self.print_artifact(&report.translation);
        self.print_artifact(&report.unit_header);
        println!();

        println!("{}", "LANGUAGES".bold().yellow());
        for language in &report.languages {
            self.print_language(language);
        }
        println!();

        if report.lossy_languages == 0 {
            println!("{}", "All strings encoded without loss".green());
        } else {
            println!(
                "{}",
                format!(
                    "{} language(s) dropped characters without a font entry",
                    report.lossy_languages
                )
                .red()
                .bold()
            );
        }
    }

    fn print_artifact(&self, artifact: &WrittenArtifact) {
        let status = if artifact.changed {
            "written".green()
        } else {
            "unchanged".dimmed()
        };
        println!(
            "  {} ({}, {} bytes, blake3 {})",
            artifact.path.display(),
            status,
            artifact.bytes,
            &artifact.blake3[..12.min(artifact.blake3.len())]
        );
    }

    fn print_language(&self, language: &LanguageSummary) {
        let name = match i18n::language_name(&language.code) {
            Some(english) => format!("{} ({})", language.display_name, english),
            None => language.display_name.clone(),
        };
        let usage = format!("{}/{} glyphs", language.glyph_count, MAX_GLYPHS);
        let usage = if language.glyph_count * 10 >= MAX_GLYPHS * 9 {
            usage.yellow()
        } else {
            usage.normal()
        };
        println!(
            "  {:<8} {:<28} {}, highest code {}",
            language.code.bold(),
            name,
            usage,
            escape_code(language.highest_code)
        );
        if !language.dropped.is_empty() {
            let dropped: Vec<String> = language.dropped.iter().map(|c| format!("{:?}", c)).collect();
            println!("    Dropped: {}", dropped.join(", ").red());
        }
    }

    pub fn save<P: AsRef<Path>>(&self, report: &GenerationReport, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        write_artifacts(&[(path.as_ref(), json.as_str())])?;
        Ok(())
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}
