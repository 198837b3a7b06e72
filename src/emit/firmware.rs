// SPDX-License-Identifier: PMPL-1.0-or-later

//! Strings every language block carries regardless of translation

use crate::types::BuildInfo;

/// Tip model names for `MODEL_TS100` builds.
pub const TS100_TIP_MODELS: [&str; 8] =
    ["B02", "D24", "BC2", " C1", "TS100", "BC2", "Hakko", "User"];

/// Tip model names for every other model.
pub const TS80_TIP_MODELS: [&str; 4] = ["B02", "D25", "TS80", "User"];

/// Debug menu labels shown after the build date.
pub const DEBUG_LABELS: [&str; 10] = [
    "HW G ", "HW M ", "HW P ", "Time ", "Move ", "RTip ", "CTip ", "CHan ", "Vin  ", "PCB  ",
];

const SYMBOLS: [(&str, &str); 12] = [
    ("SymbolPlus", "+"),
    ("SymbolMinus", "-"),
    ("SymbolSpace", " "),
    ("SymbolDot", "."),
    ("SymbolDegC", "C"),
    ("SymbolDegF", "F"),
    ("SymbolMinutes", "M"),
    ("SymbolSeconds", "S"),
    ("SymbolWatts", "W"),
    ("SymbolVolts", "V"),
    ("SymbolDC", "DC"),
    ("SymbolCellCount", "S"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirmwareStrings {
    constants: Vec<(&'static str, String)>,
    debug_menu: Vec<String>,
}

impl FirmwareStrings {
    pub fn new(build: &BuildInfo) -> Self {
        let mut constants: Vec<(&'static str, String)> = SYMBOLS
            .iter()
            .map(|(name, value)| (*name, value.to_string()))
            .collect();
        constants.push(("SymbolVersionNumber", build.version.clone()));

        let mut debug_menu = Vec::with_capacity(DEBUG_LABELS.len() + 1);
        debug_menu.push(build.date.clone());
        debug_menu.extend(DEBUG_LABELS.iter().map(|label| label.to_string()));

        Self {
            constants,
            debug_menu,
        }
    }

    /// Named `const char*` symbols, version number last.
    pub fn constants(&self) -> &[(&'static str, String)] {
        &self.constants
    }

    pub fn ts100_tip_models(&self) -> &'static [&'static str] {
        &TS100_TIP_MODELS
    }

    pub fn ts80_tip_models(&self) -> &'static [&'static str] {
        &TS80_TIP_MODELS
    }

    /// Build date followed by the hardware labels.
    pub fn debug_menu(&self) -> &[String] {
        &self.debug_menu
    }

    /// Every string in corpus order: constants, TS100 tips, TS80 tips, debug menu.
    pub fn strings(&self) -> impl Iterator<Item = &str> {
        self.constants
            .iter()
            .map(|(_, value)| value.as_str())
            .chain(TS100_TIP_MODELS.iter().copied())
            .chain(TS80_TIP_MODELS.iter().copied())
            .chain(self.debug_menu.iter().map(String::as_str))
    }
}
