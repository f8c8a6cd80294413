// File: src/rule.rs
// Purpose: Rule (input) and Outcome (output) shapes shared by every handler

use serde::{Deserialize, Serialize};

use crate::messages::{Lang, MessageTable};
use crate::value::Value;

/// One request to validate or sanitize a value of a named kind
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    /// Selects the handler; matched exactly, case-sensitive
    #[serde(alias = "type")]
    pub kind: String,

    #[serde(default)]
    pub value: Value,

    /// Only meaningful to handlers that treat `false` specially (checkbox)
    #[serde(default)]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl Rule {
    pub fn new(kind: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = Some(message.into());
        self
    }

    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Build a rule from an arbitrary value without failing
    ///
    /// Anything that is not an object, or lacks a kind, ends up with an empty
    /// kind so the dispatcher reports it as unknown. Fields with the wrong
    /// type are coerced (`kind`, messages) or ignored (`required`).
    pub fn from_value(raw: &Value) -> Self {
        let kind = raw
            .get("kind")
            .or_else(|| raw.get("type"))
            .map(Value::to_text)
            .unwrap_or_default();

        let text = |key: &str| raw.get(key).filter(|v| !v.is_null()).map(Value::to_text);

        Self {
            kind,
            value: raw.get("value").cloned().unwrap_or_default(),
            required: raw.get("required").and_then(Value::as_bool).unwrap_or(false),
            success_message: text("successMessage"),
            error_message: text("errorMessage"),
        }
    }

    /// The caller-supplied message for the given result, if any
    pub fn message_for(&self, ok: bool) -> Option<&str> {
        if ok {
            self.success_message.as_deref()
        } else {
            self.error_message.as_deref()
        }
    }
}

/// What a handler decided about a single value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub ok: bool,
    /// Transformed text, set by the sanitizing kinds
    pub sanitized: Option<String>,
}

impl Verdict {
    pub fn pass() -> Self {
        Self {
            ok: true,
            sanitized: None,
        }
    }

    pub fn fail() -> Self {
        Self {
            ok: false,
            sanitized: None,
        }
    }

    /// Sanitized output counts as ok when it is not empty
    pub fn sanitized(text: String) -> Self {
        Self {
            ok: !text.is_empty(),
            sanitized: Some(text),
        }
    }
}

impl From<bool> for Verdict {
    fn from(ok: bool) -> Self {
        Self {
            ok,
            sanitized: None,
        }
    }
}

/// The result for one rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    pub kind: String,
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sanitized: Option<String>,
}

impl Outcome {
    /// Outcome carrying only the caller's own message
    pub fn from_verdict(rule: &Rule, verdict: Verdict, failure_code: &str) -> Self {
        Self {
            kind: rule.kind.clone(),
            ok: verdict.ok,
            message: rule.message_for(verdict.ok).map(str::to_string),
            code: (!verdict.ok).then(|| failure_code.to_string()),
            sanitized: verdict.sanitized,
        }
    }

    /// Outcome whose message falls back to the built-in table
    pub fn localized(
        rule: &Rule,
        verdict: Verdict,
        failure_code: &str,
        table: &MessageTable,
        lang: Lang,
    ) -> Self {
        let message = table.resolve(
            verdict.ok,
            rule.success_message.as_deref(),
            rule.error_message.as_deref(),
            lang,
        );
        Self {
            message: Some(message),
            ..Self::from_verdict(rule, verdict, failure_code)
        }
    }

    /// Outcome for a rule whose kind has no handler
    pub fn unknown_kind(rule: &Rule, code: &str) -> Self {
        Self {
            kind: rule.kind.clone(),
            ok: false,
            message: rule.error_message.clone(),
            code: Some(code.to_string()),
            sanitized: None,
        }
    }
}
