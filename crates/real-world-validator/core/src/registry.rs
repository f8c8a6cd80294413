// File: src/registry.rs
// Purpose: Kind name -> handler mapping used by the batch dispatcher

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

use crate::checkbox::validate_checkbox;
use crate::email::validate_email_address;
use crate::error::Result;
use crate::messages::{self, Lang, MessageTable};
use crate::phone::validate_phone_number;
use crate::proper_name::validate_proper_name;
use crate::rule::{Rule, Verdict};
use crate::sanitize::{escape_html, sanitize_string, SanitizeOptions};

/// Built-in kind names
pub mod kinds {
    pub const PROPER_NAME: &str = "properName";
    pub const EMAIL_ADDRESS: &str = "emailAddress";
    pub const PHONE_NUMBER: &str = "phoneNumber";
    pub const CHECKBOX_INPUT: &str = "checkboxInput";
    pub const STRING: &str = "string";
    pub const HTML: &str = "html";
}

/// Machine-readable failure codes
pub mod codes {
    pub const INVALID_PROPER_NAME: &str = "invalid-proper-name";
    pub const INVALID_EMAIL_ADDRESS: &str = "invalid-email-address";
    pub const INVALID_PHONE_NUMBER: &str = "invalid-phone-number";
    pub const INVALID_CHECKBOX_INPUT: &str = "invalid-checkbox-input";
    pub const INVALID_STRING: &str = "invalid-string";
    pub const INVALID_HTML: &str = "invalid-html";
    pub const UNKNOWN_KIND: &str = "unknown-kind";
}

/// Per-call settings handed to every handler
#[derive(Debug, Clone, Copy)]
pub struct HandlerContext<'a> {
    pub lang: Lang,
    pub sanitize: &'a SanitizeOptions,
}

/// A handler is a pure function from a rule to a verdict
///
/// Handlers may be strict and return errors; the dispatcher turns an error
/// into a negative outcome.
pub type HandlerFn = fn(&Rule, &HandlerContext<'_>) -> Result<Verdict>;

/// Everything the dispatcher needs to know about one kind
#[derive(Clone, Copy)]
pub struct KindHandler {
    pub handler: HandlerFn,
    pub failure_code: &'static str,
    /// Built-in messages, for kinds that have them
    pub messages: Option<&'static MessageTable>,
}

impl fmt::Debug for KindHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KindHandler")
            .field("failure_code", &self.failure_code)
            .field("messages", &self.messages.is_some())
            .finish_non_exhaustive()
    }
}

/// Immutable kind -> handler mapping
///
/// Keys are compared exactly as given; `emailaddress` is not `emailAddress`.
#[derive(Debug, Clone)]
pub struct Registry {
    handlers: HashMap<String, KindHandler>,
}

static BUILTIN: Lazy<Registry> = Lazy::new(|| RegistryBuilder::builtin().build());

impl Registry {
    /// The shared registry with the built-in kinds
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    /// Start from the built-in kinds and add more before freezing
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::builtin()
    }

    pub fn get(&self, kind: &str) -> Option<&KindHandler> {
        self.handlers.get(kind)
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.handlers.contains_key(kind)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registered kinds sorted by name
    pub fn kinds(&self) -> Vec<(&str, &KindHandler)> {
        let mut kinds: Vec<_> = self
            .handlers
            .iter()
            .map(|(kind, handler)| (kind.as_str(), handler))
            .collect();
        kinds.sort_by_key(|(kind, _)| *kind);
        kinds
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::builtin().clone()
    }
}

/// Collects handlers until [`RegistryBuilder::build`] freezes them
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    handlers: HashMap<String, KindHandler>,
}

impl RegistryBuilder {
    /// No kinds at all
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        Self::empty()
            .register_with_messages(
                kinds::PROPER_NAME,
                handle_proper_name,
                codes::INVALID_PROPER_NAME,
                &messages::PROPER_NAME,
            )
            .register_with_messages(
                kinds::EMAIL_ADDRESS,
                handle_email_address,
                codes::INVALID_EMAIL_ADDRESS,
                &messages::EMAIL_ADDRESS,
            )
            .register_with_messages(
                kinds::PHONE_NUMBER,
                handle_phone_number,
                codes::INVALID_PHONE_NUMBER,
                &messages::PHONE_NUMBER,
            )
            .register_with_messages(
                kinds::CHECKBOX_INPUT,
                handle_checkbox_input,
                codes::INVALID_CHECKBOX_INPUT,
                &messages::CHECKBOX_INPUT,
            )
            .register(kinds::STRING, handle_string, codes::INVALID_STRING)
            .register(kinds::HTML, handle_html, codes::INVALID_HTML)
    }

    /// Add (or replace) a kind
    pub fn register(
        self,
        kind: impl Into<String>,
        handler: HandlerFn,
        failure_code: &'static str,
    ) -> Self {
        self.insert(
            kind.into(),
            KindHandler {
                handler,
                failure_code,
                messages: None,
            },
        )
    }

    /// Add (or replace) a kind that has built-in messages
    pub fn register_with_messages(
        self,
        kind: impl Into<String>,
        handler: HandlerFn,
        failure_code: &'static str,
        messages: &'static MessageTable,
    ) -> Self {
        self.insert(
            kind.into(),
            KindHandler {
                handler,
                failure_code,
                messages: Some(messages),
            },
        )
    }

    fn insert(mut self, kind: String, handler: KindHandler) -> Self {
        if self.handlers.insert(kind.clone(), handler).is_some() {
            tracing::debug!("Replacing handler for kind '{}'", kind);
        }
        self
    }

    pub fn build(self) -> Registry {
        Registry {
            handlers: self.handlers,
        }
    }
}

fn handle_proper_name(rule: &Rule, _ctx: &HandlerContext<'_>) -> Result<Verdict> {
    validate_proper_name(&rule.value).map(Verdict::from)
}

fn handle_email_address(rule: &Rule, _ctx: &HandlerContext<'_>) -> Result<Verdict> {
    validate_email_address(&rule.value).map(Verdict::from)
}

fn handle_phone_number(rule: &Rule, _ctx: &HandlerContext<'_>) -> Result<Verdict> {
    validate_phone_number(&rule.value).map(Verdict::from)
}

fn handle_checkbox_input(rule: &Rule, _ctx: &HandlerContext<'_>) -> Result<Verdict> {
    validate_checkbox(&rule.value, rule.required).map(Verdict::from)
}

fn handle_string(rule: &Rule, ctx: &HandlerContext<'_>) -> Result<Verdict> {
    Ok(Verdict::sanitized(sanitize_string(&rule.value, ctx.sanitize)))
}

fn handle_html(rule: &Rule, _ctx: &HandlerContext<'_>) -> Result<Verdict> {
    Ok(Verdict::sanitized(escape_html(&rule.value)))
}
