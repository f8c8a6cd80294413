//! Checkbox validation

use crate::error::{Result, ValidationError};
use crate::messages::{self, Lang};
use crate::registry::codes;
use crate::rule::{Outcome, Rule, Verdict};
use crate::value::Value;

/// A checkbox fails only when it is required and left unchecked
pub fn validate_checkbox(value: &Value, required: bool) -> Result<bool> {
    let checked = value.as_bool().ok_or_else(|| {
        ValidationError::type_mismatch("checkbox value", "boolean", value.type_name())
    })?;
    Ok(!required || checked)
}

pub fn validate_checkbox_field(rule: &Rule, lang: Lang) -> Result<Outcome> {
    let ok = validate_checkbox(&rule.value, rule.required)?;
    Ok(Outcome::localized(
        rule,
        Verdict::from(ok),
        codes::INVALID_CHECKBOX_INPUT,
        &messages::CHECKBOX_INPUT,
        lang,
    ))
}
