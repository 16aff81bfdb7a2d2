//! twist Utility-Class Emitter
//!
//! Generates the ordered set of transition / will-change utility rules
//! from a resolved configuration. Selector escaping and variant expansion
//! belong to the host; the emitter receives them as two injected
//! capabilities (an escape function and a rule-registration sink).
//!
//! ```text
//! Options → resolve() → generate() → RuleSet → Host::register_rules
//! ```

pub mod rules;

pub use rules::{Declaration, Rule, RuleSet};

use twist_config::{Config, Options};

/// The two capabilities a host framework provides.
///
/// `escape` turns a raw class-name fragment (e.g. `transition-duration-200`)
/// into a selector-safe string; `register_rules` receives the full ordered
/// rule set exactly once per emission, together with the verbatim variant
/// names from the options.
pub trait Host {
    fn escape(&self, fragment: &str) -> String;
    fn register_rules(&mut self, rules: RuleSet, variants: &[String]);
}

/// Resolve the options and hand the generated rules to the host.
///
/// This is the plugin entry point: one generation pass, one
/// `register_rules` call, no other side effects.
pub fn emit(options: &Options, host: &mut impl Host) {
    let config = options.resolve();
    let rules = generate(&config, |fragment| host.escape(fragment));
    host.register_rules(rules, &config.variants);
}

/// Generate the ordered rule set for a resolved configuration.
///
/// Group order is fixed: the static `none` rule, property shorthands,
/// named durations, named timing functions, named delays, will-change.
/// The `none` selector is built from the prefix alone and never passes
/// through `escape`; every other selector escapes its full
/// `prefix-suffix` fragment.
pub fn generate<E>(config: &Config, escape: E) -> RuleSet
where
    E: Fn(&str) -> String,
{
    let mut rules = RuleSet::new();

    rules.push(Rule::single(
        format!(".{}-none", config.transition_prefix),
        "transition",
        "none",
    ));

    for (name, properties) in &config.properties {
        let fragment = format!("{}-{}", config.transition_prefix, name);
        rules.push(Rule::single(
            format!(".{}", escape(&fragment)),
            "transition",
            shorthand(properties, config),
        ));
    }

    for (name, value) in &config.durations {
        let fragment = format!("{}-duration-{}", config.transition_prefix, name);
        rules.push(Rule::single(
            format!(".{}", escape(&fragment)),
            "transition-duration",
            value.clone(),
        ));
    }

    for (name, value) in &config.timing_functions {
        let fragment = format!("{}-timing-{}", config.transition_prefix, name);
        rules.push(Rule::single(
            format!(".{}", escape(&fragment)),
            "transition-timing-function",
            value.clone(),
        ));
    }

    for (name, value) in &config.delays {
        let fragment = format!("{}-delay-{}", config.transition_prefix, name);
        rules.push(Rule::single(
            format!(".{}", escape(&fragment)),
            "transition-delay",
            value.clone(),
        ));
    }

    for (name, value) in &config.will_change {
        let fragment = format!("{}-{}", config.will_change_prefix, name);
        rules.push(Rule::single(
            format!(".{}", escape(&fragment)),
            "will-change",
            value.clone(),
        ));
    }

    rules
}

/// Build the shorthand `transition` value for one property list.
///
/// Each property contributes `<prop> <duration>[ <timing>][ <delay>]`;
/// components are joined with `", "` in input order. Timing and delay
/// appear only when the corresponding `default` was set.
fn shorthand(properties: &[String], config: &Config) -> String {
    properties
        .iter()
        .map(|property| {
            let mut component = format!("{property} {}", config.default_duration);
            if let Some(ref timing) = config.default_timing_function {
                component.push(' ');
                component.push_str(timing);
            }
            if let Some(ref delay) = config.default_delay {
                component.push(' ');
                component.push_str(delay);
            }
            component
        })
        .collect::<Vec<String>>()
        .join(", ")
}
