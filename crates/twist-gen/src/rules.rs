//! Generated rule types.
//!
//! A `RuleSet` is an append-only ordered sequence of class rules; order is
//! significant and is fixed by the emitter.

/// A single CSS declaration, uninterpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

/// One utility-class rule: a selector and its declaration block.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

impl Rule {
    /// Build a rule with a single declaration, the common case here.
    pub fn single(
        selector: impl Into<String>,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Rule {
        Rule {
            selector: selector.into(),
            declarations: vec![Declaration {
                property: property.into(),
                value: value.into(),
            }],
        }
    }
}

/// An ordered collection of generated rules.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> RuleSet {
        RuleSet::default()
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// The selector of each rule, in emission order.
    pub fn selectors(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.selector.as_str()).collect()
    }

    /// Find a rule by its exact selector.
    pub fn get(&self, selector: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.selector == selector)
    }
}

impl IntoIterator for RuleSet {
    type Item = Rule;
    type IntoIter = std::vec::IntoIter<Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_builds_one_declaration() {
        let rule = Rule::single(".transition-none", "transition", "none");
        assert_eq!(rule.selector, ".transition-none");
        assert_eq!(rule.declarations.len(), 1);
        assert_eq!(rule.declarations[0].property, "transition");
        assert_eq!(rule.declarations[0].value, "none");
    }

    #[test]
    fn test_push_preserves_order() {
        let mut rules = RuleSet::new();
        rules.push(Rule::single(".a", "transition", "none"));
        rules.push(Rule::single(".b", "will-change", "opacity"));
        assert_eq!(rules.selectors(), vec![".a", ".b"]);
    }

    #[test]
    fn test_get_by_selector() {
        let mut rules = RuleSet::new();
        rules.push(Rule::single(".a", "transition", "none"));
        assert!(rules.get(".a").is_some());
        assert!(rules.get(".b").is_none());
    }
}
