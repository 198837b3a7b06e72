// SPDX-License-Identifier: PMPL-1.0-or-later

//! transglyph: glyph allocation, font tables and encoded strings for
//! translated OLED firmware
//!
//! Reads `translation_<code>.json` files plus `translations_def.js` and
//! writes `Translation.cpp` and `unit.h` for the firmware build.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use transglyph::config::{GeneratorConfig, VersionSource};
use transglyph::error::{GenerateError, EXIT_FAILURE};
use transglyph::report;

#[derive(Parser)]
#[command(name = "transglyph")]
#[command(version = "1.0.0")]
#[command(about = "Generate per-language font tables and encoded strings for firmware translations")]
#[command(long_about = None)]
struct Cli {
    /// Directory with translation_<code>.json files and translations_def.js
    #[arg(value_name = "INPUT_DIR", default_value = ".")]
    input_dir: PathBuf,

    /// Translation unit to write [default: <INPUT_DIR>/../workspace/TS100/Core/Src/Translation.cpp]
    #[arg(value_name = "TRANSLATION_OUT")]
    translation_out: Option<PathBuf>,

    /// Unit header to write [default: <INPUT_DIR>/../workspace/TS100/Core/Inc/unit.h]
    #[arg(value_name = "UNIT_OUT")]
    unit_out: Option<PathBuf>,

    /// Language emitted first
    #[arg(long, value_name = "CODE", default_value = "EN")]
    default_language: String,

    /// Use this version string instead of reading the version header
    #[arg(long, value_name = "STRING", conflicts_with = "version_header")]
    build_version: Option<String>,

    /// Header defining BUILD_VERSION [default: <INPUT_DIR>/../workspace/TS100/version.h]
    #[arg(long, value_name = "PATH")]
    version_header: Option<PathBuf>,

    /// Date shown in the debug menu [default: SOURCE_DATE_EPOCH, else today]
    #[arg(long, value_name = "DD-MM-YY")]
    build_date: Option<String>,

    /// Supplementary glyph bitmaps (JSON); built-in fonts cover printable ASCII only
    #[arg(long, value_name = "PATH")]
    font_tables: Option<PathBuf>,

    /// Treat characters without a font entry as fatal
    #[arg(long)]
    strict: bool,

    /// Write a JSON generation report
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,

    /// Suppress progress and summary output
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn into_config(self) -> GeneratorConfig {
        let mut config = GeneratorConfig::new(self.input_dir);
        if let Some(path) = self.translation_out {
            config.translation_out = path;
        }
        if let Some(path) = self.unit_out {
            config.unit_out = path;
        }
        if let Some(version) = self.build_version {
            config.version = VersionSource::Explicit(version);
        } else if let Some(header) = self.version_header {
            config.version = VersionSource::Header(header);
        }
        config.default_language = self.default_language;
        config.build_date = self.build_date;
        config.font_tables = self.font_tables;
        config.strict = self.strict;
        config.report = self.report;
        config.quiet = self.quiet;
        config
    }
}

fn execute(config: GeneratorConfig) -> Result<()> {
    let outcome = transglyph::run(&config)?;
    let generation_report =
        report::generate_report(outcome.build, outcome.artifacts, outcome.languages)?;

    if !config.quiet {
        report::print_report(&generation_report);
    }
    if let Some(path) = &config.report {
        report::save_report(&generation_report, path)?;
        if !config.quiet {
            println!("Report saved to: {}", path.display());
        }
    }
    Ok(())
}

fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<GenerateError>()
        .map(GenerateError::exit_code)
        .unwrap_or(EXIT_FAILURE)
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(EXIT_FAILURE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match execute(cli.into_config()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if err.downcast_ref::<GenerateError>().is_some() {
                eprintln!("error: {}", err);
            } else {
                eprintln!("error: {:#}", err);
            }
            ExitCode::from(exit_code(&err))
        }
    }
}
