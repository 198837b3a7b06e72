// SPDX-License-Identifier: PMPL-1.0-or-later

//! One generation run, from input directory to written artifacts

use crate::artifacts::{self, WrittenArtifact};
use crate::config::GeneratorConfig;
use crate::emit::{Generated, LanguageSummary, OutputComposer};
use crate::error::Result;
use crate::font::FontTables;
use crate::loader;
use crate::types::BuildInfo;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub build: BuildInfo,
    /// Translation unit first, then the unit header.
    pub artifacts: Vec<WrittenArtifact>,
    pub languages: Vec<LanguageSummary>,
}

/// Generate both artifacts, or fail and leave neither behind.
///
/// Any failure removes existing files at the output paths so a stale
/// translation unit can never be compiled against a newer definition.
pub fn run(config: &GeneratorConfig) -> Result<RunOutcome> {
    let result = generate(config);
    if result.is_err() {
        let outputs = [config.translation_out.as_path(), config.unit_out.as_path()];
        for path in artifacts::invalidate(&outputs) {
            eprintln!("warning: removed stale {}", path.display());
        }
    }
    result
}

fn generate(config: &GeneratorConfig) -> Result<RunOutcome> {
    let build = config.build_info()?;
    if !config.quiet {
        println!("Build version: {}", build.version);
        println!(
            "Making {} from {}",
            config.translation_out.display(),
            config.input_dir.display()
        );
        println!(
            "Making {} from {}",
            config.unit_out.display(),
            config.input_dir.display()
        );
    }

    let catalog = loader::load_catalog(&config.input_dir)?;
    let fonts = match &config.font_tables {
        Some(path) => FontTables::with_supplement(path)?,
        None => FontTables::builtin(),
    };

    let options = config.generate_options();
    let Generated {
        translation,
        unit_header,
        languages,
    } = OutputComposer::new(&catalog, &build, &fonts, &options).compose()?;

    let artifacts = artifacts::write_artifacts(&[
        (config.translation_out.as_path(), translation.as_str()),
        (config.unit_out.as_path(), unit_header.as_str()),
    ])?;

    if !config.quiet {
        println!("Done");
    }
    Ok(RunOutcome {
        build,
        artifacts,
        languages,
    })
}
