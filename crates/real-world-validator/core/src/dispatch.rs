// File: src/dispatch.rs
// Purpose: Batch dispatcher turning rules into outcomes

use once_cell::sync::Lazy;

use crate::config::ValidatorConfig;
use crate::error::{Result, ValidationError};
use crate::registry::{codes, HandlerContext, Registry};
use crate::rule::{Outcome, Rule, Verdict};
use crate::value::Value;

/// Runs rule batches against a registry
///
/// A batch is total: every rule yields exactly one outcome, in input order.
/// Unknown kinds produce an `unknown-kind` outcome and handler errors are
/// downgraded to a negative outcome with the kind's failure code.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    registry: Registry,
    config: ValidatorConfig,
}

static DEFAULT_VALIDATOR: Lazy<Validator> = Lazy::new(Validator::new);

impl Validator {
    /// Built-in kinds with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide instance used by the free functions
    pub fn shared() -> &'static Validator {
        &DEFAULT_VALIDATOR
    }

    pub fn with_config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate a batch of rules
    pub fn validate(&self, rules: &[Rule]) -> Vec<Outcome> {
        tracing::trace!("Validating batch of {} rules", rules.len());
        let ctx = self.context();
        rules.iter().map(|rule| self.dispatch(rule, &ctx)).collect()
    }

    /// Same as [`Validator::validate`], for callers that await it next to
    /// other form-handling steps
    pub async fn validate_async(&self, rules: &[Rule]) -> Vec<Outcome> {
        self.validate(rules)
    }

    /// Validate one rule with the same fault containment as a batch
    pub fn validate_rule(&self, rule: &Rule) -> Outcome {
        self.dispatch(rule, &self.context())
    }

    /// Validate an untyped batch
    ///
    /// Fails only when `raw` is not an array. Elements that are not rule
    /// objects still produce an outcome (`unknown-kind`).
    pub fn validate_value(&self, raw: &Value) -> Result<Vec<Outcome>> {
        let items = raw.as_array().ok_or(ValidationError::NotASequence {
            found: raw.type_name(),
        })?;
        let rules: Vec<Rule> = items.iter().map(Rule::from_value).collect();
        Ok(self.validate(&rules))
    }

    fn context(&self) -> HandlerContext<'_> {
        HandlerContext {
            lang: self.config.lang,
            sanitize: &self.config.sanitize,
        }
    }

    fn dispatch(&self, rule: &Rule, ctx: &HandlerContext<'_>) -> Outcome {
        let Some(entry) = self.registry.get(&rule.kind) else {
            tracing::debug!("No handler registered for kind '{}'", rule.kind);
            return Outcome::unknown_kind(rule, codes::UNKNOWN_KIND);
        };

        tracing::trace!("Dispatching rule of kind '{}'", rule.kind);
        let verdict = match (entry.handler)(rule, ctx) {
            Ok(verdict) => verdict,
            Err(e) => {
                tracing::debug!("Handler for kind '{}' rejected the rule: {}", rule.kind, e);
                Verdict::fail()
            }
        };

        match entry.messages {
            Some(table) if self.config.localized_defaults => {
                Outcome::localized(rule, verdict, entry.failure_code, table, ctx.lang)
            }
            _ => Outcome::from_verdict(rule, verdict, entry.failure_code),
        }
    }
}

/// Validate a batch with the built-in kinds and default configuration
pub fn validate(rules: &[Rule]) -> Vec<Outcome> {
    DEFAULT_VALIDATOR.validate(rules)
}

pub async fn validate_async(rules: &[Rule]) -> Vec<Outcome> {
    DEFAULT_VALIDATOR.validate_async(rules).await
}

/// Validate an untyped batch with the built-in kinds
pub fn validate_value(raw: &Value) -> Result<Vec<Outcome>> {
    DEFAULT_VALIDATOR.validate_value(raw)
}
