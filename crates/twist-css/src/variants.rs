//! Variant expansion.
//!
//! Expands a base rule set across pseudo-class variants: for each variant
//! `v`, every base rule `.sel` additionally produces `.v\:sel:v` with the
//! same declarations. The full base set comes first, then one full copy
//! per variant, in the order the variants were requested.

use twist_gen::{Rule, RuleSet};

/// Expand a rule set across the requested variants.
///
/// The variant copies reuse the already-escaped base selector; only the
/// separating colon needs escaping. Variant names are taken verbatim and
/// used both as the class prefix and the pseudo-class.
pub fn expand(rules: &RuleSet, variants: &[String]) -> RuleSet {
    let mut expanded = RuleSet::new();

    for rule in rules {
        expanded.push(rule.clone());
    }
    for variant in variants {
        for rule in rules {
            expanded.push(Rule {
                selector: variant_selector(&rule.selector, variant),
                declarations: rule.declarations.clone(),
            });
        }
    }

    expanded
}

/// `.transition-none` + `hover` → `.hover\:transition-none:hover`
fn variant_selector(selector: &str, variant: &str) -> String {
    let base = selector.strip_prefix('.').unwrap_or(selector);
    format!(".{variant}\\:{base}:{variant}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn base() -> RuleSet {
        let mut rules = RuleSet::new();
        rules.push(Rule::single(".transition-none", "transition", "none"));
        rules.push(Rule::single(".transition-transform", "transition", "transform 500ms"));
        rules
    }

    #[test]
    fn test_no_variants_is_identity() {
        let rules = base();
        assert_eq!(expand(&rules, &[]), rules);
    }

    #[test]
    fn test_variant_selector_shape() {
        assert_eq!(
            variant_selector(".transition-none", "hover"),
            ".hover\\:transition-none:hover"
        );
    }

    #[test]
    fn test_variants_copy_the_whole_set_in_order() {
        let expanded = expand(&base(), &["hover".to_string(), "active".to_string()]);
        assert_eq!(
            expanded.selectors(),
            vec![
                ".transition-none",
                ".transition-transform",
                ".hover\\:transition-none:hover",
                ".hover\\:transition-transform:hover",
                ".active\\:transition-none:active",
                ".active\\:transition-transform:active",
            ]
        );
    }

    #[test]
    fn test_variant_copies_keep_declarations() {
        let expanded = expand(&base(), &["hover".to_string()]);
        let copy = expanded.get(".hover\\:transition-transform:hover").unwrap();
        assert_eq!(copy.declarations[0].value, "transform 500ms");
    }
}
