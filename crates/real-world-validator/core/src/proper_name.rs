//! Proper-name validation
//!
//! A proper name is a single Latin-script token such as `Kalle-Veikko`,
//! `O'Brien` or `Åsa`. Segments are joined by a hyphen or apostrophe variant
//! and every segment starts with an uppercase letter.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::error::{Result, ValidationError};
use crate::messages::{self, Lang};
use crate::rule::{Outcome, Rule, Verdict};
use crate::value::Value;

pub const MIN_LEN: usize = 1;
pub const MAX_LEN: usize = 64;

/// Latin letters: Basic Latin, Latin-1 Supplement (without × and ÷),
/// Latin Extended-A/B and Latin Extended Additional
const LATIN_LETTER: &str = r"A-Za-z\u{C0}-\u{D6}\u{D8}-\u{F6}\u{F8}-\u{24F}\u{1E00}-\u{1EFF}";

/// Hyphen, U+00AD soft hyphen, U+2010 hyphen, U+2011 non-breaking hyphen,
/// apostrophe, U+2019 right single quote
const SEPARATOR: &str = r"\-\u{AD}\u{2010}\u{2011}'\u{2019}";

static PROPER_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    let upper = format!(r"[\p{{Lu}}\p{{Lt}}&&[{LATIN_LETTER}]]");
    let letter = format!("[{LATIN_LETTER}]");
    let segment = format!("{upper}{letter}*");
    Regex::new(&format!("^{segment}(?:[{SEPARATOR}]{segment})*$")).unwrap()
});

/// Check a name that is already text
pub fn is_valid_proper_name(name: &str) -> bool {
    let normalized: String = name.nfc().collect();
    let s = normalized.trim();

    let len = s.chars().count();
    if !(MIN_LEN..=MAX_LEN).contains(&len) {
        return false;
    }

    PROPER_NAME_REGEX.is_match(s)
}

/// Strict check: anything but text is a type error
pub fn validate_proper_name(value: &Value) -> Result<bool> {
    let name = value
        .as_str()
        .ok_or_else(|| ValidationError::type_mismatch("name", "string", value.type_name()))?;
    Ok(is_valid_proper_name(name))
}

/// Validate a rule and produce a localized outcome
pub fn validate_proper_name_field(rule: &Rule, lang: Lang) -> Result<Outcome> {
    let ok = validate_proper_name(&rule.value)?;
    Ok(Outcome::localized(
        rule,
        Verdict::from(ok),
        crate::registry::codes::INVALID_PROPER_NAME,
        &messages::PROPER_NAME,
        lang,
    ))
}
