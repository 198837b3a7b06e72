// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-1 checks for translation file language codes
//!
//! Translation codes are upper case and may carry a script or region
//! subtag (`SR_CYRL`, `ZH_TW`, `PT-BR`). Only the primary subtag is checked.

/// Whether `code` is a lower-case ISO 639-1 two-letter code.
pub fn is_valid_iso639_1(code: &str) -> bool {
    matches!(
        code,
        "aa" | "ab" | "af" | "ak" | "am" | "an" | "ar" | "as" | "av" | "ay" | "az"
            | "ba" | "be" | "bg" | "bh" | "bi" | "bm" | "bn" | "bo" | "br" | "bs"
            | "ca" | "ce" | "ch" | "co" | "cr" | "cs" | "cu" | "cv" | "cy"
            | "da" | "de" | "dv" | "dz"
            | "ee" | "el" | "en" | "eo" | "es" | "et" | "eu"
            | "fa" | "ff" | "fi" | "fj" | "fo" | "fr" | "fy"
            | "ga" | "gd" | "gl" | "gn" | "gu" | "gv"
            | "ha" | "he" | "hi" | "ho" | "hr" | "ht" | "hu" | "hy" | "hz"
            | "ia" | "id" | "ie" | "ig" | "ii" | "ik" | "io" | "is" | "it" | "iu"
            | "ja" | "jv"
            | "ka" | "kg" | "ki" | "kj" | "kk" | "kl" | "km" | "kn" | "ko" | "kr" | "ks" | "ku" | "kv" | "kw" | "ky"
            | "la" | "lb" | "lg" | "li" | "ln" | "lo" | "lt" | "lu" | "lv"
            | "mg" | "mh" | "mi" | "mk" | "ml" | "mn" | "mr" | "ms" | "mt" | "my"
            | "na" | "nb" | "nd" | "ne" | "ng" | "nl" | "nn" | "no" | "nr" | "nv" | "ny"
            | "oc" | "oj" | "om" | "or" | "os"
            | "pa" | "pi" | "pl" | "ps" | "pt"
            | "qu"
            | "rm" | "rn" | "ro" | "ru" | "rw"
            | "sa" | "sc" | "sd" | "se" | "sg" | "si" | "sk" | "sl" | "sm" | "sn" | "so" | "sq" | "sr" | "ss" | "st" | "su" | "sv" | "sw"
            | "ta" | "te" | "tg" | "th" | "ti" | "tk" | "tl" | "tn" | "to" | "tr" | "ts" | "tt" | "tw" | "ty"
            | "ug" | "uk" | "ur" | "uz"
            | "ve" | "vi" | "vo"
            | "wa" | "wo"
            | "xh"
            | "yi" | "yo"
            | "za" | "zh" | "zu"
    )
}

/// Primary subtag of a translation code, lower-cased: `SR_CYRL` -> `sr`.
pub fn primary_subtag(code: &str) -> String {
    code.split(['_', '-'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// Whether a translation code starts with an ISO 639-1 language.
pub fn is_known_language_code(code: &str) -> bool {
    is_valid_iso639_1(&primary_subtag(code))
}

/// English name of the language a translation code refers to.
pub fn language_name(code: &str) -> Option<&'static str> {
    match primary_subtag(code).as_str() {
        "be" => Some("Belarusian"),
        "bg" => Some("Bulgarian"),
        "cs" => Some("Czech"),
        "da" => Some("Danish"),
        "de" => Some("German"),
        "el" => Some("Greek"),
        "en" => Some("English"),
        "es" => Some("Spanish"),
        "fi" => Some("Finnish"),
        "fr" => Some("French"),
        "hr" => Some("Croatian"),
        "hu" => Some("Hungarian"),
        "it" => Some("Italian"),
        "ja" => Some("Japanese"),
        "lt" => Some("Lithuanian"),
        "lv" => Some("Latvian"),
        "nl" => Some("Dutch"),
        "no" | "nb" => Some("Norwegian"),
        "pl" => Some("Polish"),
        "pt" => Some("Portuguese"),
        "ro" => Some("Romanian"),
        "ru" => Some("Russian"),
        "sk" => Some("Slovak"),
        "sl" => Some("Slovenian"),
        "sr" => Some("Serbian"),
        "sv" => Some("Swedish"),
        "tr" => Some("Turkish"),
        "uk" => Some("Ukrainian"),
        "zh" => Some("Chinese"),
        _ => None,
    }
}
