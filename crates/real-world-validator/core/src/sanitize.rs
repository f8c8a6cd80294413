//! String sanitizers
//!
//! Pure text transforms. They accept any [`Value`], coerce it to text and
//! never fail.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::value::Value;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Options for [`sanitize_string`]
///
/// Every step can be toggled on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SanitizeOptions {
    /// Remove leading/trailing whitespace
    pub trim: bool,
    /// Collapse consecutive whitespace into a single space
    #[serde(alias = "collapse_whitespace")]
    pub collapse_whitespace: bool,
    /// Strip control characters (U+0000–U+001F, U+007F)
    #[serde(alias = "strip_controls")]
    pub strip_controls: bool,
    /// Maximum length of the output in characters, 0 disables truncation
    #[serde(alias = "max_len")]
    pub max_len: usize,
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        Self {
            trim: true,
            collapse_whitespace: true,
            strip_controls: true,
            max_len: 4096,
        }
    }
}

impl SanitizeOptions {
    /// All steps disabled; the input passes through unchanged
    pub fn none() -> Self {
        Self {
            trim: false,
            collapse_whitespace: false,
            strip_controls: false,
            max_len: 0,
        }
    }

    /// Read options from untyped input without failing
    ///
    /// Keys may be camelCase or snake_case. A toggle that is not a boolean
    /// keeps its default. A `maxLen` that is present but not a positive
    /// number (null, false, negative) disables truncation; fractions are
    /// rounded down.
    pub fn from_value(raw: &Value) -> Self {
        let defaults = Self::default();
        let field = |camel: &str, snake: &str| raw.get(camel).or_else(|| raw.get(snake));
        let toggle = |camel: &str, snake: &str, default: bool| {
            field(camel, snake).and_then(Value::as_bool).unwrap_or(default)
        };

        let max_len = match field("maxLen", "max_len") {
            None => defaults.max_len,
            Some(Value::Number(n)) if *n >= 1.0 => n.floor() as usize,
            Some(_) => 0,
        };

        Self {
            trim: toggle("trim", "trim", defaults.trim),
            collapse_whitespace: toggle(
                "collapseWhitespace",
                "collapse_whitespace",
                defaults.collapse_whitespace,
            ),
            strip_controls: toggle("stripControls", "strip_controls", defaults.strip_controls),
            max_len,
        }
    }
}

fn is_stripped_control(c: char) -> bool {
    matches!(c, '\u{0000}'..='\u{001F}' | '\u{007F}')
}

/// Sanitize any value as text
///
/// Steps run in a fixed order: trim, strip controls, collapse whitespace,
/// truncate. With `trim` enabled the edges exposed by the later steps are
/// trimmed again, so the output never starts or ends with whitespace.
pub fn sanitize_string(input: &Value, opts: &SanitizeOptions) -> String {
    sanitize_str(&input.to_text(), opts)
}

/// Same as [`sanitize_string`] for text that is already a `&str`
pub fn sanitize_str(input: &str, opts: &SanitizeOptions) -> String {
    let mut s = if opts.trim { input.trim() } else { input }.to_string();

    if opts.strip_controls {
        s.retain(|c| !is_stripped_control(c));
    }

    if opts.collapse_whitespace {
        s = WHITESPACE_RUN.replace_all(&s, " ").into_owned();
    }

    if opts.max_len > 0 {
        if let Some((idx, _)) = s.char_indices().nth(opts.max_len) {
            s.truncate(idx);
        }
    }

    if opts.trim {
        let trimmed = s.trim();
        if trimmed.len() != s.len() {
            s = trimmed.to_string();
        }
    }

    s
}

/// Escape the five HTML-significant characters
///
/// `&` is handled first so entities produced for the other characters are
/// never escaped twice.
pub fn escape_html(input: &Value) -> String {
    escape_html_str(&input.to_text())
}

pub fn escape_html_str(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_sanitize() {
        let opts = SanitizeOptions::default();
        assert_eq!(sanitize_str("  hello   world \n", &opts), "hello world");
        assert_eq!(sanitize_str("tab\there", &opts), "tab here");
        assert_eq!(sanitize_str("bell\u{0007}char\u{007F}", &opts), "bellchar");
    }

    #[test]
    fn test_null_is_empty() {
        assert_eq!(sanitize_string(&Value::Null, &SanitizeOptions::default()), "");
        assert_eq!(escape_html(&Value::Null), "");
    }

    #[test]
    fn test_non_text_is_coerced() {
        let opts = SanitizeOptions::default();
        assert_eq!(sanitize_string(&Value::from(12), &opts), "12");
        assert_eq!(sanitize_string(&Value::from(false), &opts), "false");
    }

    #[test]
    fn test_truncation_counts_characters() {
        let opts = SanitizeOptions {
            max_len: 3,
            ..SanitizeOptions::default()
        };
        assert_eq!(sanitize_str("äöüß", &opts), "äöü");
        assert_eq!(sanitize_str("ab", &opts), "ab");
    }

    #[test]
    fn test_truncation_runs_after_cleanup() {
        let opts = SanitizeOptions {
            max_len: 5,
            ..SanitizeOptions::default()
        };
        // Collapsing first leaves room for the "c"
        assert_eq!(sanitize_str("a    b    c", &opts), "a b c");
    }

    #[test]
    fn test_zero_max_len_disables_truncation() {
        let opts = SanitizeOptions {
            max_len: 0,
            ..SanitizeOptions::default()
        };
        let long = "x".repeat(10_000);
        assert_eq!(sanitize_str(&long, &opts).len(), 10_000);
    }

    #[test]
    fn test_steps_toggle_independently() {
        let opts = SanitizeOptions::none();
        assert_eq!(sanitize_str("  a \u{0001}  b  ", &opts), "  a \u{0001}  b  ");

        let only_trim = SanitizeOptions {
            trim: true,
            ..SanitizeOptions::none()
        };
        assert_eq!(sanitize_str("  a   b  ", &only_trim), "a   b");

        let only_collapse = SanitizeOptions {
            collapse_whitespace: true,
            ..SanitizeOptions::none()
        };
        assert_eq!(sanitize_str("  a   b  ", &only_collapse), " a b ");
    }

    #[test]
    fn test_edges_exposed_by_stripping_are_trimmed() {
        let opts = SanitizeOptions::default();
        assert_eq!(sanitize_str("\u{0000} name", &opts), "name");
    }

    #[test]
    fn test_options_from_value_are_lenient() {
        let read = |json: serde_json::Value| SanitizeOptions::from_value(&Value::from(json));

        assert_eq!(read(serde_json::json!({})), SanitizeOptions::default());
        assert_eq!(read(serde_json::json!(null)), SanitizeOptions::default());
        assert_eq!(read(serde_json::json!({"maxLen": null})).max_len, 0);
        assert_eq!(read(serde_json::json!({"maxLen": false})).max_len, 0);
        assert_eq!(read(serde_json::json!({"maxLen": -5})).max_len, 0);
        assert_eq!(read(serde_json::json!({"maxLen": "10"})).max_len, 0);
        assert_eq!(read(serde_json::json!({"maxLen": 2.9})).max_len, 2);
        assert_eq!(read(serde_json::json!({"max_len": 7})).max_len, 7);

        let opts = read(serde_json::json!({"trim": null, "collapseWhitespace": false}));
        assert!(opts.trim);
        assert!(!opts.collapse_whitespace);
        assert!(opts.strip_controls);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html_str(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape_html_str("&lt;"), "&amp;lt;");
        assert_eq!(escape_html_str("plain"), "plain");
    }

    fn options() -> impl Strategy<Value = SanitizeOptions> {
        (any::<bool>(), any::<bool>(), any::<bool>(), 0usize..40).prop_map(
            |(trim, collapse_whitespace, strip_controls, max_len)| SanitizeOptions {
                trim,
                collapse_whitespace,
                strip_controls,
                max_len,
            },
        )
    }

    proptest! {
        #[test]
        fn sanitize_is_idempotent(input in "\\PC*|[ \\t\\n\\u{0}-\\u{1f}a-z]*", opts in options()) {
            let once = sanitize_str(&input, &opts);
            let twice = sanitize_str(&once, &opts);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn sanitize_respects_max_len(input in "\\PC*", max_len in 1usize..64) {
            let opts = SanitizeOptions { max_len, ..SanitizeOptions::default() };
            prop_assert!(sanitize_str(&input, &opts).chars().count() <= max_len);
        }

        #[test]
        fn escaped_html_has_no_raw_markup(input in "\\PC*") {
            let escaped = escape_html_str(&input);
            prop_assert!(!escaped.contains('<'));
            prop_assert!(!escaped.contains('>'));
            prop_assert!(!escaped.contains('"'));
            prop_assert!(!escaped.contains('\''));
        }
    }
}
