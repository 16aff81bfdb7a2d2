//! twist Options
//!
//! The user-facing configuration surface for the twist utility-class
//! generator: named property groups, durations, timing functions, delays,
//! will-change targets, and variant names. All fields are optional and
//! keyed exactly as in the original plugin options (camelCase).
//!
//! # Example
//!
//! ```
//! use twist_config::Options;
//!
//! let options = Options::from_json(r#"{ "properties": { "transform": "transform" } }"#).unwrap();
//! let config = options.resolve();
//! assert_eq!(config.default_duration, "500ms");
//! ```

pub mod options;
pub mod resolve;

pub use options::{Options, PropertyList};
pub use resolve::Config;

/// Options error, raised when an options document cannot be deserialized.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Invalid options: {message}")]
pub struct ConfigError {
    pub message: String,
}
