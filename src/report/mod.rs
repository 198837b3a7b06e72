// SPDX-License-Identifier: PMPL-1.0-or-later

//! Run summary and JSON generation report

pub mod formatter;
pub mod generator;

use crate::artifacts::WrittenArtifact;
use crate::emit::LanguageSummary;
use crate::types::BuildInfo;
use anyhow::Result;
use serde::Serialize;
use std::path::Path;

pub use formatter::ReportFormatter;
pub use generator::ReportGenerator;

/// Everything a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub build: BuildInfo,
    pub translation: WrittenArtifact,
    pub unit_header: WrittenArtifact,
    pub languages: Vec<LanguageSummary>,
    /// Languages that dropped at least one character.
    pub lossy_languages: usize,
}

pub fn generate_report(
    build: BuildInfo,
    artifacts: Vec<WrittenArtifact>,
    languages: Vec<LanguageSummary>,
) -> Result<GenerationReport> {
    ReportGenerator::new().generate(build, artifacts, languages)
}

pub fn save_report<P: AsRef<Path>>(report: &GenerationReport, path: P) -> Result<()> {
    ReportFormatter::new().save(report, path)
}

pub fn print_report(report: &GenerationReport) {
    ReportFormatter::new().print(report);
}
