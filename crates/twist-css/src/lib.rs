//! twist reference host
//!
//! Implements the two host capabilities the emitter expects — class-name
//! escaping and rule registration — plus what a host framework does with
//! registered rules: variant expansion and serialization to CSS text.
//! The emitter itself stays decoupled from all of this.
//!
//! ```text
//! Options → emit(·, CssHost) → expand variants → serialize → CSS text
//! ```

pub mod escape;
pub mod serialize;
pub mod variants;

pub use escape::escape_class_name;
pub use serialize::serialize;
pub use variants::expand;

use twist_config::{ConfigError, Options};
use twist_gen::{Host, RuleSet};

/// A host that collects registered rules and renders them as CSS.
#[derive(Debug, Default)]
pub struct CssHost {
    rules: RuleSet,
}

impl CssHost {
    pub fn new() -> CssHost {
        CssHost::default()
    }

    /// The registered rules, variant-expanded.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Serialize the registered rules to CSS text.
    pub fn css(&self) -> String {
        serialize(&self.rules)
    }
}

impl Host for CssHost {
    fn escape(&self, fragment: &str) -> String {
        escape_class_name(fragment)
    }

    fn register_rules(&mut self, rules: RuleSet, variants: &[String]) {
        self.rules = expand(&rules, variants);
    }
}

/// Generate CSS text for an options record.
pub fn render(options: &Options) -> String {
    let mut host = CssHost::new();
    twist_gen::emit(options, &mut host);
    host.css()
}

/// Generate CSS text straight from a JSON options document.
pub fn render_json(source: &str) -> Result<String, ConfigError> {
    Ok(render(&Options::from_json(source)?))
}
