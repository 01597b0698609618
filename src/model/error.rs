//! Error types for the site.
//!
//! Errors are split by concern and composed with `thiserror`:
//!
//! - [`SiteError`] - Startup failure wrapping every fatal concern
//!   - [`ConfigError`] - Bundled configuration could not be parsed or validated
//!   - [`LoggingError`] - Tracing subscriber could not be installed
//! - [`DomError`] - Browser API failures inside the animation shell
//! - [`SubmitError`] - Contact form submission failures
//!
//! # Recovery Strategy
//!
//! Visual enhancement never takes the page down. `DomError`s raised while
//! wiring observers, frames or listeners are logged at `warn` and the affected
//! animation is skipped; the markup stays usable without it. Only the startup
//! path (`SiteError`) and the contact submission boundary (`SubmitError`)
//! surface errors to a caller.

use crate::model::contact::ContactField;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Top-level startup error.
///
/// Returned by the entry point before the application is mounted. Domain
/// errors convert via `From` so startup code composes with `?`.
#[derive(Debug, Error)]
pub enum SiteError {
    /// Bundled or overridden configuration was rejected.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// The browser environment is missing something the site requires.
    #[error("Browser error: {0}")]
    Dom(#[from] DomError),
}

/// Errors raised while loading configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config source contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {source_name}: {reason}")]
    Parse {
        /// Human-readable name of the config source (e.g. `site.toml`).
        source_name: String,
        /// Parse error details.
        reason: String,
    },

    /// A value parsed but lies outside its allowed range.
    #[error("Invalid value for `{key}`: {reason}")]
    InvalidValue {
        /// Dotted key path, e.g. `reveal.threshold`.
        key: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Errors raised while installing the tracing subscriber.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoggingError {
    /// The configured filter directive could not be parsed.
    #[error("Invalid log filter `{filter}`: {reason}")]
    InvalidFilter {
        /// The rejected directive string.
        filter: String,
        /// Parser message.
        reason: String,
    },

    /// Tracing subscriber already initialized
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Failures from browser APIs.
///
/// These are always recoverable: callers log them and skip the enhancement.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomError {
    /// `window` is not available (e.g. running outside a browser).
    #[error("No global window")]
    NoWindow,

    /// The window has no document.
    #[error("No document on window")]
    NoDocument,

    /// A DOM call threw a JavaScript exception.
    #[error("{operation} failed: {message}")]
    Js {
        /// The browser API that failed.
        operation: &'static str,
        /// Stringified JavaScript error value.
        message: String,
    },
}

impl DomError {
    /// Wrap a thrown JavaScript value with the name of the failing call.
    pub fn js(operation: &'static str, value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        Self::Js { operation, message }
    }
}

/// Errors at the contact submission boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// One or more fields that the form marks `required` were blank.
    #[error("Missing required fields: {}", format_fields(.0))]
    MissingFields(Vec<ContactField>),

    /// The configured submitter refused the submission.
    #[error("Submission rejected: {0}")]
    Rejected(String),

    /// The submission could not be encoded for transport.
    #[error("Failed to encode submission: {0}")]
    Encode(String),
}

fn format_fields(fields: &[ContactField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_converts_into_site_error() {
        let err: SiteError = ConfigError::InvalidValue {
            key: "reveal.threshold".to_string(),
            reason: "must be within 0.0..=1.0".to_string(),
        }
        .into();

        assert!(matches!(err, SiteError::Config(_)));
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid value for `reveal.threshold`: must be within 0.0..=1.0"
        );
    }

    #[test]
    fn missing_fields_message_lists_labels_in_order() {
        let err = SubmitError::MissingFields(vec![ContactField::Email, ContactField::Message]);
        assert_eq!(err.to_string(), "Missing required fields: Email, Your Message");
    }

    #[test]
    fn logging_error_converts_into_site_error() {
        let err: SiteError = LoggingError::SubscriberAlreadySet.into();
        assert!(matches!(err, SiteError::Logging(LoggingError::SubscriberAlreadySet)));
    }
}
