//! Rule-set serialization to CSS text.

use twist_gen::RuleSet;

/// Serialize a rule set to CSS text.
///
/// One block per rule, two-space-indented declarations, no blank lines
/// between blocks, trailing newline.
pub fn serialize(rules: &RuleSet) -> String {
    let mut css = String::new();

    for rule in rules {
        css.push_str(&rule.selector);
        css.push_str(" {\n");
        for declaration in &rule.declarations {
            css.push_str(&format!("  {}: {};\n", declaration.property, declaration.value));
        }
        css.push_str("}\n");
    }

    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use twist_gen::Rule;

    #[test]
    fn test_empty_set_serializes_to_nothing() {
        assert_eq!(serialize(&RuleSet::new()), "");
    }

    #[test]
    fn test_single_rule_block() {
        let mut rules = RuleSet::new();
        rules.push(Rule::single(".transition-none", "transition", "none"));
        assert_eq!(serialize(&rules), ".transition-none {\n  transition: none;\n}\n");
    }

    #[test]
    fn test_blocks_are_adjacent() {
        let mut rules = RuleSet::new();
        rules.push(Rule::single(".transition-none", "transition", "none"));
        rules.push(Rule::single(".will-change-opacity", "will-change", "opacity"));
        assert_eq!(
            serialize(&rules),
            ".transition-none {\n  transition: none;\n}\n.will-change-opacity {\n  will-change: opacity;\n}\n"
        );
    }
}
