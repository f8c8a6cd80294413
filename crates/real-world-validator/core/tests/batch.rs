//! Batch dispatcher behaviour through the public API
//!
//! Covers:
//! 1. One outcome per rule, in order
//! 2. Unknown kinds and malformed values never abort a batch
//! 3. Boundary cases for every built-in kind

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use real_world_validator::{
    validate, validate_async, validate_value, Outcome, Rule, ValidationError, Value,
};
use rstest::rstest;

fn outcome(rule: Rule) -> Outcome {
    validate(&[rule]).remove(0)
}

#[test]
fn test_mixed_batch_from_json() {
    let raw: Value = serde_json::from_str(
        r#"[
            {"kind": "properName", "value": "Jean-Luc", "successMessage": "OK", "errorMessage": "Name"},
            {"kind": "emailAddress", "value": "bad@", "errorMessage": "Email"},
            {"kind": "phoneNumber", "value": "+358401234567"}
        ]"#,
    )
    .unwrap();

    let outcomes = validate_value(&raw).unwrap();
    let json = serde_json::to_value(&outcomes).unwrap();

    assert_eq!(
        json,
        serde_json::json!([
            {"kind": "properName", "ok": true, "message": "OK"},
            {"kind": "emailAddress", "ok": false, "message": "Email", "code": "invalid-email-address"},
            {"kind": "phoneNumber", "ok": true}
        ])
    );
}

#[test]
fn test_non_sequence_propagates() {
    let raw: Value = serde_json::from_str(r#"{"kind": "string", "value": "x"}"#).unwrap();
    assert_eq!(
        validate_value(&raw),
        Err(ValidationError::NotASequence { found: "object" })
    );
}

#[test]
fn test_malformed_elements_still_yield_outcomes() {
    let raw: Value = serde_json::from_str(r#"[null, 7, {"value": "x"}, {"kind": 3}]"#).unwrap();
    let outcomes = validate_value(&raw).unwrap();
    assert_eq!(outcomes.len(), 4);
    for o in &outcomes {
        assert!(!o.ok);
        assert_eq!(o.code.as_deref(), Some("unknown-kind"));
    }
    assert_eq!(outcomes[3].kind, "3");
}

#[rstest]
#[case("user@example.com", true)]
#[case("user@localhost", false)]
#[case("user@xn--bcher-kva.example", true)]
#[case("user@example.xn--p1ai", true)]
#[case("  padded@example.com ", true)]
#[case("user@[192.0.2.1]", false)]
fn test_email_cases(#[case] address: &str, #[case] ok: bool) {
    assert_eq!(outcome(Rule::new("emailAddress", address)).ok, ok);
}

#[test]
fn test_email_length_boundaries() {
    let long_local = format!("{}@example.com", "a".repeat(65));
    assert!(!outcome(Rule::new("emailAddress", long_local)).ok);

    let long_label = format!("user@{}.example", "a".repeat(64));
    assert!(!outcome(Rule::new("emailAddress", long_label)).ok);
}

#[rstest]
#[case("Kalle-Veikko", true)]
#[case("kalle", false)]
#[case("-Jori", false)]
#[case("Jori-", false)]
#[case("Matti Meikäläinen", false)]
#[case("O\u{2019}Neill", true)]
fn test_proper_name_cases(#[case] name: &str, #[case] ok: bool) {
    let o = outcome(Rule::new("properName", name));
    assert_eq!(o.ok, ok);
    assert_eq!(o.code.is_some(), !ok);
}

#[rstest]
#[case("+358401234567", true)]
#[case("+0581234567890", false)]
#[case("358401234567", false)]
#[case("+35840123456", false)]
#[case("+3584012345678", false)]
#[case("+358 401234567", false)]
fn test_phone_cases(#[case] number: &str, #[case] ok: bool) {
    assert_eq!(outcome(Rule::new("phoneNumber", number)).ok, ok);
}

#[rstest]
#[case(true, false, false)]
#[case(true, true, true)]
#[case(false, false, true)]
#[case(false, true, true)]
fn test_checkbox_cases(#[case] required: bool, #[case] value: bool, #[case] ok: bool) {
    let o = outcome(Rule::new("checkboxInput", value).required(required));
    assert_eq!(o.ok, ok);
}

#[test]
fn test_messages_are_echoed_verbatim() {
    let o = outcome(Rule::new("emailAddress", "nope").error_message("<b>Check your email</b>"));
    assert_eq!(o.message.as_deref(), Some("<b>Check your email</b>"));
}

#[tokio::test]
async fn test_async_matches_sync() {
    let rules = vec![
        Rule::new("string", "  hi  "),
        Rule::new("html", "a & b"),
        Rule::new("nope", 1),
    ];
    assert_eq!(validate_async(&rules).await, validate(&rules));
}

fn any_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1e6f64..1e6).prop_map(Value::Number),
        "\\PC{0,40}".prop_map(Value::String),
    ]
}

fn any_kind() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("properName".to_string()),
        Just("emailAddress".to_string()),
        Just("phoneNumber".to_string()),
        Just("checkboxInput".to_string()),
        Just("string".to_string()),
        Just("html".to_string()),
        "[a-zA-Z]{0,12}",
    ]
}

fn any_rule() -> impl Strategy<Value = Rule> {
    (any_kind(), any_value(), any::<bool>())
        .prop_map(|(kind, value, required)| Rule::new(kind, value).required(required))
}

proptest! {
    #[test]
    fn batch_preserves_length_and_order(rules in prop::collection::vec(any_rule(), 0..20)) {
        let outcomes = validate(&rules);
        prop_assert_eq!(outcomes.len(), rules.len());
        for (rule, outcome) in rules.iter().zip(&outcomes) {
            prop_assert_eq!(&outcome.kind, &rule.kind);
            prop_assert_eq!(outcome.code.is_none(), outcome.ok);
        }
    }

    #[test]
    fn unknown_kinds_always_report_unknown(
        kind in "[A-Z][a-zA-Z]{0,10}|x[a-z]{0,10}",
        value in any_value(),
    ) {
        let o = outcome(Rule::new(kind, value));
        prop_assert!(!o.ok);
        prop_assert_eq!(o.code.as_deref(), Some("unknown-kind"));
    }
}
