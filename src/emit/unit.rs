// SPDX-License-Identifier: PMPL-1.0-or-later

//! `unit.h`: which languages may switch to Fahrenheit

use crate::types::LanguageRecord;

pub const UNIT_BANNER: &str = "// WARNING: THIS FILE WAS AUTO GENERATED BY transglyph. PLEASE DO NOT EDIT.
 
/**
 * °F Fahrenheit Support
 * You will find the default Fahrenheit configuration in the translation_xx.json
 * If tempUnitFahrenheit is set to:
 *    true -  you can switch in menu settings to Fahrenheit or Celsius.
 *    false - you see only Celsius. All settings are then is in Celsius only.
 */

#ifndef _UNIT_H
#define _UNIT_H

";

pub const UNIT_FOOTER: &str = "\n#endif /* _UNIT_H */\n";

pub fn unit_block(record: &LanguageRecord, fahrenheit: bool) -> String {
    let define = if fahrenheit {
        "    #define  ENABLED_FAHRENHEIT_SUPPORT\n"
    } else {
        "    //#define  ENABLED_FAHRENHEIT_SUPPORT\n"
    };
    format!(
        "  #ifdef LANG_{}\n{}  #endif /* ---- {} ---- */\n",
        record.code, define, record.display_name
    )
}
