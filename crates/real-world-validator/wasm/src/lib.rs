//! Real-World Validator WASM
//!
//! WebAssembly bindings for the validator core.
//! Runs the exact same rules in the browser that the server enforces.

use js_sys::{Array, Reflect};
use real_world_validator as core;
use real_world_validator::{SanitizeOptions, ValidationError, Validator, ValidatorConfig, Value};
use std::collections::HashMap;
use wasm_bindgen::prelude::*;

const RULE_KEYS: &[&str] = &[
    "kind",
    "type",
    "value",
    "required",
    "successMessage",
    "errorMessage",
];

const OPTION_KEYS: &[&str] = &[
    "trim",
    "collapseWhitespace",
    "collapse_whitespace",
    "stripControls",
    "strip_controls",
    "maxLen",
    "max_len",
];

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Convert any JS value, mapping what has no `Value` form to `Null`
///
/// Functions, symbols, typed arrays and other exotic objects become `Null`
/// instead of failing the whole conversion.
fn to_value(input: &JsValue) -> Value {
    if input.is_undefined() || input.is_null() {
        return Value::Null;
    }
    if let Some(b) = input.as_bool() {
        return Value::Bool(b);
    }
    if let Some(n) = input.as_f64() {
        return Value::Number(n);
    }
    if let Some(s) = input.as_string() {
        return Value::String(s);
    }
    if Array::is_array(input) {
        return Value::Array(Array::from(input).iter().map(|item| to_value(&item)).collect());
    }
    if input.is_function() || input.is_symbol() || input.is_bigint() {
        return Value::Null;
    }
    serde_wasm_bindgen::from_value(input.clone()).unwrap_or(Value::Null)
}

/// Copy the listed keys of an object one by one
///
/// A key that is present but `undefined` reads as `Null`, so callers can
/// tell it apart from a missing key.
fn pick_fields(input: &JsValue, keys: &[&str]) -> Value {
    if !input.is_object() || Array::is_array(input) {
        return to_value(input);
    }
    let mut fields = HashMap::new();
    for &key in keys {
        let key_js = JsValue::from_str(key);
        if Reflect::has(input, &key_js).unwrap_or(false) {
            let field = Reflect::get(input, &key_js).unwrap_or(JsValue::UNDEFINED);
            fields.insert(key.to_string(), to_value(&field));
        }
    }
    Value::Object(fields)
}

/// Read a rule array element by element
///
/// Throws only when `rules` is not an array.
fn read_rules(rules: &JsValue) -> Result<Value, JsValue> {
    if !Array::is_array(rules) {
        let found = to_value(rules).type_name();
        return Err(JsValue::from_str(&ValidationError::NotASequence { found }.to_string()));
    }
    Ok(Value::Array(
        Array::from(rules)
            .iter()
            .map(|rule| pick_fields(&rule, RULE_KEYS))
            .collect(),
    ))
}

fn run_batch(validator: &Validator, rules: JsValue) -> Result<JsValue, JsValue> {
    let raw = read_rules(&rules)?;
    let outcomes = validator
        .validate_value(&raw)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(serde_wasm_bindgen::to_value(&outcomes)?)
}

/// Validate an array of rules into outcomes
///
/// # Example (JavaScript)
/// ```javascript
/// const outcomes = validate([
///     { kind: 'properName', value: 'Jean-Luc', successMessage: 'OK' },
///     { kind: 'emailAddress', value: 'bad@', errorMessage: 'Email' },
/// ]);
/// // [{ kind: 'properName', ok: true, message: 'OK' },
/// //  { kind: 'emailAddress', ok: false, message: 'Email', code: 'invalid-email-address' }]
/// ```
///
/// Throws only when `rules` is not an array.
#[wasm_bindgen(js_name = validate)]
pub fn validate_js(rules: JsValue) -> Result<JsValue, JsValue> {
    run_batch(Validator::shared(), rules)
}

/// Promise-returning variant of `validate`
#[wasm_bindgen(js_name = validateAsync)]
pub async fn validate_async_js(rules: JsValue) -> Result<JsValue, JsValue> {
    run_batch(Validator::shared(), rules)
}

/// A validator with its own configuration
///
/// ```javascript
/// const v = new FormValidator({ lang: 'fi', localizedDefaults: true });
/// v.validate([{ kind: 'checkboxInput', value: false, required: true }]);
/// ```
#[wasm_bindgen]
pub struct FormValidator {
    inner: Validator,
}

#[wasm_bindgen]
impl FormValidator {
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<FormValidator, JsValue> {
        let config: ValidatorConfig = if config.is_undefined() || config.is_null() {
            ValidatorConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?
        };
        Ok(FormValidator {
            inner: Validator::new().with_config(config),
        })
    }

    pub fn validate(&self, rules: JsValue) -> Result<JsValue, JsValue> {
        run_batch(&self.inner, rules)
    }
}

/// Sanitize any value as text; `options` may be omitted
///
/// Never throws. Unusable options fall back as described on
/// `SanitizeOptions::from_value`.
#[wasm_bindgen(js_name = sanitizeString)]
pub fn sanitize_string_js(input: JsValue, options: JsValue) -> String {
    let opts = SanitizeOptions::from_value(&pick_fields(&options, OPTION_KEYS));
    core::sanitize_string(&to_value(&input), &opts)
}

#[wasm_bindgen(js_name = escapeHTML)]
pub fn escape_html_js(input: JsValue) -> String {
    core::escape_html(&to_value(&input))
}

/// Quick proper-name check
#[wasm_bindgen(js_name = isValidProperName)]
pub fn is_valid_proper_name_js(name: &str) -> bool {
    core::is_valid_proper_name(name)
}

/// Quick email check
#[wasm_bindgen(js_name = isValidEmailAddress)]
pub fn is_valid_email_address_js(address: &str) -> bool {
    core::is_valid_email_address(address)
}

/// Quick phone number check
#[wasm_bindgen(js_name = isValidPhoneNumber)]
pub fn is_valid_phone_number_js(number: &str) -> bool {
    core::is_valid_phone_number(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use js_sys::{Function, Object, Uint8Array};
    use real_world_validator::Outcome;
    use wasm_bindgen_test::*;

    fn object(fields: &[(&str, JsValue)]) -> JsValue {
        let obj = Object::new();
        for (key, value) in fields {
            Reflect::set(&obj, &JsValue::from_str(key), value).unwrap();
        }
        obj.into()
    }

    fn outcomes(rules: &[JsValue]) -> Vec<Outcome> {
        let array: Array = rules.iter().collect();
        let out = validate_js(array.into()).unwrap();
        serde_wasm_bindgen::from_value(out).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_quick_checks() {
        assert!(is_valid_email_address_js("user@example.com"));
        assert!(!is_valid_email_address_js("user@localhost"));
        assert!(is_valid_proper_name_js("Kalle-Veikko"));
        assert!(is_valid_phone_number_js("+358401234567"));
    }

    #[wasm_bindgen_test]
    fn test_sanitize_without_options() {
        let out = sanitize_string_js(JsValue::from_str("  a   b "), JsValue::UNDEFINED);
        assert_eq!(out, "a b");
        assert_eq!(escape_html_js(JsValue::NULL), "");
    }

    #[wasm_bindgen_test]
    fn test_falsy_max_len_disables_truncation() {
        let input = JsValue::from_str("abcdef");
        let null_len = object(&[("maxLen", JsValue::NULL)]);
        assert_eq!(sanitize_string_js(input.clone(), null_len), "abcdef");

        let undefined_len = object(&[("maxLen", JsValue::UNDEFINED)]);
        assert_eq!(sanitize_string_js(input.clone(), undefined_len), "abcdef");

        let odd_options = object(&[
            ("maxLen", JsValue::from_f64(3.7)),
            ("trim", JsValue::UNDEFINED),
        ]);
        assert_eq!(sanitize_string_js(input, odd_options), "abc");
    }

    #[wasm_bindgen_test]
    fn test_exotic_values_yield_one_outcome_each() {
        let callback: JsValue = Function::new_no_args("return 1").into();
        let bytes: JsValue = Uint8Array::new_with_length(2).into();
        let results = outcomes(&[
            object(&[("kind", "properName".into()), ("value", callback)]),
            object(&[("kind", "html".into()), ("value", bytes)]),
            object(&[("kind", "emailAddress".into()), ("value", "user@example.com".into())]),
            JsValue::from_f64(7.0),
        ]);

        assert_eq!(results.len(), 4);
        assert_eq!(results[0].code.as_deref(), Some("invalid-proper-name"));
        assert!(!results[1].ok);
        assert!(results[2].ok);
        assert_eq!(results[3].code.as_deref(), Some("unknown-kind"));
    }

    #[wasm_bindgen_test]
    fn test_validate_rejects_non_array() {
        assert!(validate_js(JsValue::from_str("nope")).is_err());
    }
}
