// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation directory fixtures shared by the integration tests

#![allow(dead_code)]

use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use transglyph::config::{GeneratorConfig, VersionSource};

pub const DEFINITION: &str = r#"var def =
{
  "messages": [
    {"id": "SettingsCalibrationWarning", "default": "Before rebooting, make sure tip & handle are at room temperature!"},
    {"id": "SettingsResetMessage", "default": "Settings were\nreset!"},
    {"id": "NoAccelerometerMessage"}
  ],
  "characters": [
    {"id": "SettingRightChar"},
    {"id": "SettingLeftChar"}
  ],
  "menuGroups": [
    {"id": "SolderingMenu"},
    {"id": "PowerMenu"}
  ],
  "menuOptions": [
    {"id": "DCInCutoff"},
    {"id": "SleepTemperature"},
    {"id": "QCMaxVoltage", "feature": "POW_QC"}
  ]
}
"#;

pub fn english() -> Value {
    json!({
        "languageCode": "EN",
        "languageLocalName": "English",
        "menuDouble": false,
        "messages": {
            "SettingsCalibrationWarning": "Before rebooting, make sure tip & handle are at room temperature!",
            "SettingsResetMessage": "Settings were\nreset!",
            "NoAccelerometerMessage": "No accelerometer detected!"
        },
        "characters": {
            "SettingRightChar": "R",
            "SettingLeftChar": "L"
        },
        "menuGroups": {
            "SolderingMenu": {"text2": ["Soldering", "settings"], "desc": "Soldering settings"},
            "PowerMenu": {"text2": ["Power", "settings"], "desc": "Power settings"}
        },
        "menuOptions": {
            "DCInCutoff": {"text": "PWRSC", "text2": ["Power", "source"], "desc": "Power source. Sets cutoff voltage."},
            "SleepTemperature": {"text": "STMP", "text2": ["Sleep", "temp"], "desc": "Sleep temperature"},
            "QCMaxVoltage": {"text": "QC", "text2": ["QC", "voltage"], "desc": "Max QC voltage"}
        }
    })
}

pub fn german() -> Value {
    json!({
        "languageCode": "DE",
        "languageLocalName": "Deutsch",
        "tempUnitFahrenheit": false,
        "menuDouble": true,
        "messages": {
            "SettingsCalibrationWarning": "Vor dem Neustart bitte sicherstellen, dass Spitze & Halterung Raumtemperatur haben!",
            "NoAccelerometerMessage": "Kein Bewegungssensor!"
        },
        "characters": {
            "SettingRightChar": "R",
            "SettingLeftChar": "L"
        },
        "menuGroups": {
            "SolderingMenu": {"text2": ["Loet-", "einstellungen"], "desc": "Loeteinstellungen"},
            "PowerMenu": {"text2": ["Energie-", "einstellungen"], "desc": "Energieeinstellungen"}
        },
        "menuOptions": {
            "DCInCutoff": {"text2": ["Spannungs-", "quelle"], "desc": "Spannungsquelle"},
            "SleepTemperature": {"text2": ["Ruhe-", "temperatur"], "desc": "Ruhetemperatur"},
            "QCMaxVoltage": {"text2": ["QC", "Spannung"], "desc": "Maximale QC Spannung"}
        }
    })
}

pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    /// Definition plus English and German translations.
    pub fn new() -> Self {
        let fixture = Self::empty();
        fixture.write_language("EN", &english());
        fixture.write_language("DE", &german());
        fixture
    }

    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("Translations")).unwrap();
        fs::write(
            dir.path().join("Translations").join("translations_def.js"),
            DEFINITION,
        )
        .unwrap();
        Self { dir }
    }

    pub fn input_dir(&self) -> PathBuf {
        self.dir.path().join("Translations")
    }

    pub fn write_language(&self, file_code: &str, value: &Value) {
        self.write_raw(
            &format!("translation_{}.json", file_code),
            &serde_json::to_string_pretty(value).unwrap(),
        );
    }

    pub fn write_raw(&self, file_name: &str, content: &str) {
        fs::write(self.input_dir().join(file_name), content).unwrap();
    }

    pub fn translation_out(&self) -> PathBuf {
        self.dir.path().join("out").join("Translation.cpp")
    }

    pub fn unit_out(&self) -> PathBuf {
        self.dir.path().join("out").join("unit.h")
    }

    /// Quiet config with a fixed version and date.
    pub fn config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::new(self.input_dir());
        config.translation_out = self.translation_out();
        config.unit_out = self.unit_out();
        config.version = VersionSource::Explicit("v2.13.ABCDEF0".to_string());
        config.build_date = Some("19-10-26".to_string());
        config.quiet = true;
        config
    }
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}
