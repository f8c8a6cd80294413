//! Email address validation
//!
//! Pragmatic rules: a Latin local part and an ASCII or Punycode domain with
//! at least one dot.
//!
//! Length limits:
//! - local part ≤ 64 (RFC 5321 §4.5.3.1.1)
//! - whole address ≤ 254 (RFC 3696 errata 1690)
//! - DNS label ≤ 63 (RFC 1035 §2.3.4)
//! - Punycode TLD payload after `xn--` ≤ 59, keeping the label within 63
//!
//! The local part is case-sensitive and is never lowercased. Quoted local
//! parts (`"a b"@example.com`) and domain literals (`user@[192.0.2.1]`) are
//! not supported.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, ValidationError};
use crate::messages::{self, Lang};
use crate::rule::{Outcome, Rule, Verdict};
use crate::value::Value;

pub const MAX_ADDRESS_LEN: usize = 254;
pub const MAX_LOCAL_LEN: usize = 64;

static EMAIL_ADDRESS_REGEX: Lazy<Regex> = Lazy::new(|| {
    let atom = r"[A-Za-z0-9\u{C0}-\u{D6}\u{D8}-\u{F6}\u{F8}-\u{24F}\u{1E00}-\u{1EFF}_%+'\-]+";
    let label = r"[A-Za-z0-9](?:[A-Za-z0-9\-]{0,61}[A-Za-z0-9])?";
    let tld = r"(?:[A-Za-z]{2,63}|xn--[A-Za-z0-9\-]{2,59})";
    Regex::new(&format!(r"^{atom}(?:\.{atom})*@(?:{label}\.)+{tld}$")).unwrap()
});

/// Check an address that is already text
pub fn is_valid_email_address(address: &str) -> bool {
    let s = address.trim();

    // Length guards run before the pattern
    let len = s.chars().count();
    if len == 0 || len > MAX_ADDRESS_LEN {
        return false;
    }
    let Some((local, _)) = s.split_once('@') else {
        return false;
    };
    let local_len = local.chars().count();
    if local_len == 0 || local_len > MAX_LOCAL_LEN {
        return false;
    }

    EMAIL_ADDRESS_REGEX.is_match(s)
}

/// Strict check: anything but text is a type error
pub fn validate_email_address(value: &Value) -> Result<bool> {
    let address = value.as_str().ok_or_else(|| {
        ValidationError::type_mismatch("email address", "string", value.type_name())
    })?;
    Ok(is_valid_email_address(address))
}

/// Validate a rule and produce a localized outcome
pub fn validate_email_address_field(rule: &Rule, lang: Lang) -> Result<Outcome> {
    let ok = validate_email_address(&rule.value)?;
    Ok(Outcome::localized(
        rule,
        Verdict::from(ok),
        crate::registry::codes::INVALID_EMAIL_ADDRESS,
        &messages::EMAIL_ADDRESS,
        lang,
    ))
}
