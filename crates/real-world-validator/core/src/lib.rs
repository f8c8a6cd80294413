//! Real-World Validator Core
//!
//! Strict validators and sanitizers for common form inputs, plus a batch
//! dispatcher that turns a list of typed rules into UI-ready outcomes.
//! The same code runs in the browser (through the WASM bindings) and on the
//! server, so both sides share one validation policy.
//!
//! ```rust
//! use real_world_validator::{validate, Rule};
//!
//! let outcomes = validate(&[
//!     Rule::new("properName", "Jean-Luc").success_message("OK"),
//!     Rule::new("emailAddress", "bad@").error_message("Email"),
//!     Rule::new("phoneNumber", "+358401234567"),
//! ]);
//!
//! assert!(outcomes[0].ok);
//! assert_eq!(outcomes[1].code.as_deref(), Some("invalid-email-address"));
//! assert!(outcomes[2].ok);
//! ```
//!
//! Direct validator calls are strict: passing a non-text value to a text
//! validator is a [`ValidationError::TypeMismatch`]. The batch API never
//! fails per rule; it reports such errors as negative outcomes.

pub mod checkbox;
pub mod config;
pub mod dispatch;
pub mod email;
pub mod error;
pub mod messages;
pub mod phone;
pub mod proper_name;
pub mod registry;
pub mod rule;
pub mod sanitize;
pub mod value;

// Re-export the public surface
pub use checkbox::{validate_checkbox, validate_checkbox_field};
pub use config::ValidatorConfig;
pub use dispatch::{validate, validate_async, validate_value, Validator};
pub use email::{is_valid_email_address, validate_email_address, validate_email_address_field};
pub use error::ValidationError;
pub use messages::{Lang, LocalizedText, MessageTable};
pub use phone::{
    is_phone_number_value, is_valid_phone_number, validate_phone_number,
    validate_phone_number_field,
};
pub use proper_name::{is_valid_proper_name, validate_proper_name, validate_proper_name_field};
pub use registry::{
    codes, kinds, HandlerContext, HandlerFn, KindHandler, Registry, RegistryBuilder,
};
pub use rule::{Outcome, Rule, Verdict};
pub use sanitize::{escape_html, escape_html_str, sanitize_str, sanitize_string, SanitizeOptions};
pub use value::Value;
