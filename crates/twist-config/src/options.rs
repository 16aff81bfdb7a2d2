//! The raw options record, as supplied by the user.
//!
//! Every field is optional; missing mappings are treated as empty. Values
//! are passed through uninterpreted — no CSS validation happens here or
//! anywhere else in the pipeline.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::ConfigError;

/// One or more CSS property names for a single transition class.
///
/// `"transform"` and `["opacity", "color"]` are both accepted; order is
/// preserved for the multi-property form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PropertyList {
    Single(String),
    Many(Vec<String>),
}

impl PropertyList {
    /// Normalize to an ordered sequence of property names.
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            PropertyList::Single(p) => vec![p.clone()],
            PropertyList::Many(ps) => ps.clone(),
        }
    }
}

/// The twist options record.
///
/// Mappings use insertion-ordered maps so generated rules follow the
/// order the options were written in. The `"default"` key in `durations`,
/// `timing_functions`, and `delays` is reserved: it sets the value applied
/// to every `properties` entry instead of producing its own class.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    pub transition_prefix: Option<String>,
    pub will_change_prefix: Option<String>,
    pub properties: IndexMap<String, PropertyList>,
    pub durations: IndexMap<String, String>,
    pub timing_functions: IndexMap<String, String>,
    pub delays: IndexMap<String, String>,
    pub will_change: IndexMap<String, String>,
    /// Opaque variant names, forwarded verbatim to the host.
    pub variants: Vec<String>,
}

impl Options {
    /// Deserialize an options record from a JSON document.
    ///
    /// Unknown keys are ignored, matching the permissive options surface.
    pub fn from_json(source: &str) -> Result<Options, ConfigError> {
        serde_json::from_str(source).map_err(|e| ConfigError {
            message: e.to_string(),
        })
    }
}
