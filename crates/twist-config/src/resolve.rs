//! Defaults resolution.
//!
//! Turns a raw `Options` record into a fully-populated `Config` before any
//! rule is generated: prefixes get their defaults, the reserved `default`
//! keys are lifted out of the named maps, and property lists are
//! normalized to ordered sequences.

use crate::Options;

/// Fallback prefix for transition classes.
pub const DEFAULT_TRANSITION_PREFIX: &str = "transition";
/// Fallback prefix for will-change classes.
pub const DEFAULT_WILL_CHANGE_PREFIX: &str = "will-change";
/// Duration applied to property shorthands when `durations.default` is unset.
pub const DEFAULT_DURATION: &str = "500ms";

/// The reserved key in `durations` / `timingFunctions` / `delays`.
const DEFAULT_KEY: &str = "default";

/// A resolved configuration, ready for rule generation.
///
/// The named maps no longer contain the `default` key; the values it
/// carried (if any) live in the `default_*` fields. Entry order matches
/// the order of the originating options maps.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub transition_prefix: String,
    pub will_change_prefix: String,
    /// Always concrete: `durations.default` if set, else `"500ms"`.
    pub default_duration: String,
    pub default_timing_function: Option<String>,
    pub default_delay: Option<String>,
    pub properties: Vec<(String, Vec<String>)>,
    pub durations: Vec<(String, String)>,
    pub timing_functions: Vec<(String, String)>,
    pub delays: Vec<(String, String)>,
    pub will_change: Vec<(String, String)>,
    pub variants: Vec<String>,
}

impl Options {
    /// Resolve all defaults, producing a `Config`.
    pub fn resolve(&self) -> Config {
        Config {
            transition_prefix: self
                .transition_prefix
                .clone()
                .unwrap_or_else(|| DEFAULT_TRANSITION_PREFIX.into()),
            will_change_prefix: self
                .will_change_prefix
                .clone()
                .unwrap_or_else(|| DEFAULT_WILL_CHANGE_PREFIX.into()),
            default_duration: self
                .durations
                .get(DEFAULT_KEY)
                .cloned()
                .unwrap_or_else(|| DEFAULT_DURATION.into()),
            default_timing_function: self.timing_functions.get(DEFAULT_KEY).cloned(),
            default_delay: self.delays.get(DEFAULT_KEY).cloned(),
            properties: self
                .properties
                .iter()
                .map(|(name, list)| (name.clone(), list.to_vec()))
                .collect(),
            durations: named_entries(&self.durations),
            timing_functions: named_entries(&self.timing_functions),
            delays: named_entries(&self.delays),
            will_change: self
                .will_change
                .iter()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
            variants: self.variants.clone(),
        }
    }
}

/// Copy a named map in order, skipping the reserved `default` key.
fn named_entries(map: &indexmap::IndexMap<String, String>) -> Vec<(String, String)> {
    map.iter()
        .filter(|(name, _)| name.as_str() != DEFAULT_KEY)
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}
