//! Rule sets can be built with the builder pattern.

use crate::rule_set::{Alternative, RuleSet};

/// The rule builder.
pub struct RuleBuilder<'a> {
    lhs: Option<String>,
    rule_set: &'a mut RuleSet,
}

impl<'a> RuleBuilder<'a> {
    /// Creates a rule builder.
    pub fn new(rule_set: &'a mut RuleSet) -> Self {
        RuleBuilder {
            lhs: None,
            rule_set,
        }
    }

    /// Starts building alternatives of the given nonterminal.
    ///
    /// The nonterminal is declared even if no alternatives follow.
    pub fn rule(mut self, lhs: impl Into<String>) -> Self {
        let lhs = lhs.into();
        self.rule_set.declare(lhs.clone());
        self.lhs = Some(lhs);
        self
    }

    /// Adds an alternative for the current nonterminal.
    ///
    /// # Panics
    ///
    /// Panics if called before `rule`.
    pub fn rhs<'s, S>(self, syms: S) -> Self
    where
        S: AsRef<[&'s str]>,
    {
        let lhs = self
            .lhs
            .clone()
            .expect("RuleBuilder::rhs called before RuleBuilder::rule");
        self.rule_set
            .declare(lhs)
            .push(Alternative::new(syms.as_ref().iter().copied()));
        self
    }
}

impl RuleSet {
    /// Starts building rules in this set.
    pub fn rules(&mut self) -> RuleBuilder {
        RuleBuilder::new(self)
    }
}
