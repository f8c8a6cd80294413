//! Phone number validation
//!
//! One global format: `+`, a three-digit country code that does not start
//! with 0, then nine subscriber digits. `+358401234567` is valid; spaces,
//! dashes, extensions and short codes are not.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, ValidationError};
use crate::messages::{self, Lang};
use crate::registry::codes;
use crate::rule::{Outcome, Rule, Verdict};
use crate::value::Value;

/// `+` + 3 + 9
pub const PHONE_NUMBER_LEN: usize = 13;

static PHONE_NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[1-9][0-9]{2}[0-9]{9}$").unwrap());

/// Cheap checks that reject most bad input before the pattern runs
fn fast_reject(number: &str) -> bool {
    number.len() != PHONE_NUMBER_LEN || !number.starts_with('+')
}

pub fn is_valid_phone_number(number: &str) -> bool {
    if fast_reject(number) {
        return false;
    }
    PHONE_NUMBER_REGEX.is_match(number)
}

/// Lenient check: anything but text is simply not a phone number
pub fn is_phone_number_value(value: &Value) -> bool {
    value.as_str().is_some_and(is_valid_phone_number)
}

/// Strict check: anything but text is a type error
pub fn validate_phone_number(value: &Value) -> Result<bool> {
    let number = value.as_str().ok_or_else(|| {
        ValidationError::type_mismatch("phone number", "string", value.type_name())
    })?;
    Ok(is_valid_phone_number(number))
}

/// Validate a rule and produce a localized outcome
///
/// A fast reject still produces a full outcome with the error message.
pub fn validate_phone_number_field(rule: &Rule, lang: Lang) -> Result<Outcome> {
    let ok = validate_phone_number(&rule.value)?;
    Ok(Outcome::localized(
        rule,
        Verdict::from(ok),
        codes::INVALID_PHONE_NUMBER,
        &messages::PHONE_NUMBER,
        lang,
    ))
}
