//! Definitions of rule sets and their alternatives.
//!
//! Declaration order matters here: it decides which number each
//! production receives when flattened. All maps in this module keep
//! insertion order.

use std::fmt;

use indexmap::{map, IndexMap};
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::production::Productions;
use crate::rule_builder::RuleBuilder;

/// One right-hand side of a nonterminal. An empty alternative derives
/// the empty string.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Alternative {
    symbols: Vec<String>,
}

impl Alternative {
    /// Creates an alternative from a string of symbol names.
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Alternative {
            symbols: symbols.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the symbols of this alternative.
    pub fn symbols(&self) -> &[String] {
        &self.symbols[..]
    }

    /// Determines whether this alternative derives the empty string
    /// directly.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns the number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }
}

impl From<Vec<String>> for Alternative {
    fn from(symbols: Vec<String>) -> Self {
        Alternative { symbols }
    }
}

// `null` elements mark the empty string, as in `[null]`.
impl<'de> Deserialize<'de> for Alternative {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let symbols: Vec<Option<String>> = Vec::deserialize(deserializer)?;
        Ok(Alternative {
            symbols: symbols.into_iter().flatten().collect(),
        })
    }
}

/// A named group of nonterminals, each with its ordered alternatives.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: IndexMap<String, Vec<Alternative>>,
}

impl RuleSet {
    /// Creates an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the alternatives of a nonterminal declared in this set.
    pub fn alternatives(&self, lhs: &str) -> Option<&[Alternative]> {
        self.rules.get(lhs).map(|alternatives| &alternatives[..])
    }

    /// Iterates over nonterminals and their alternatives in declaration
    /// order.
    pub fn iter(&self) -> map::Iter<String, Vec<Alternative>> {
        self.rules.iter()
    }

    /// Returns the number of nonterminals declared in this set.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Determines whether this set declares no nonterminals.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the alternatives of `lhs`, declaring it if needed.
    pub(crate) fn declare(&mut self, lhs: String) -> &mut Vec<Alternative> {
        self.rules.entry(lhs).or_default()
    }
}

/// Rule sets, in declaration order.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RuleSets {
    sets: IndexMap<String, RuleSet>,
}

impl RuleSets {
    /// Creates an empty collection of rule sets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts building rules inside the named rule set. The set is
    /// appended if it does not exist yet.
    pub fn rule_set(&mut self, name: impl Into<String>) -> RuleBuilder {
        RuleBuilder::new(self.sets.entry(name.into()).or_default())
    }

    /// Appends a rule set, or replaces an existing one of the same name
    /// in place.
    pub fn insert(&mut self, name: impl Into<String>, rule_set: RuleSet) {
        self.sets.insert(name.into(), rule_set);
    }

    /// Returns the rule set with the given name.
    pub fn get(&self, name: &str) -> Option<&RuleSet> {
        self.sets.get(name)
    }

    /// Iterates over named rule sets in declaration order.
    pub fn iter(&self) -> map::Iter<String, RuleSet> {
        self.sets.iter()
    }

    /// Returns the number of rule sets.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Determines whether there are no rule sets.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Iterates over all nonterminals of all rule sets, along with their
    /// alternatives.
    ///
    /// This is the canonical traversal order: rule sets in order, then
    /// nonterminals in order. Productions are numbered by walking
    /// alternatives in this order.
    pub fn nonterminals(&self) -> Nonterminals {
        Nonterminals {
            sets: self.sets.values(),
            current: None,
        }
    }

    /// Iterates over numbered productions in traversal order.
    pub fn productions(&self) -> Productions {
        Productions::new(self.nonterminals())
    }

    /// Returns the total number of alternatives.
    pub fn num_productions(&self) -> usize {
        self.nonterminals()
            .map(|(_, alternatives)| alternatives.len())
            .sum()
    }
}

impl<S: Into<String>> FromIterator<(S, RuleSet)> for RuleSets {
    fn from_iter<I: IntoIterator<Item = (S, RuleSet)>>(iter: I) -> Self {
        RuleSets {
            sets: iter
                .into_iter()
                .map(|(name, rule_set)| (name.into(), rule_set))
                .collect(),
        }
    }
}

// An array of rule sets gets positional names "0", "1", ...
impl<'de> Deserialize<'de> for RuleSets {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RuleSetsVisitor)
    }
}

struct RuleSetsVisitor;

impl<'de> Visitor<'de> for RuleSetsVisitor {
    type Value = RuleSets;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an array of rule sets or an object of named rule sets")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<RuleSets, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut sets = IndexMap::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(rule_set) = seq.next_element::<RuleSet>()? {
            sets.insert(sets.len().to_string(), rule_set);
        }
        Ok(RuleSets { sets })
    }

    fn visit_map<A>(self, mut map: A) -> Result<RuleSets, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut sets = IndexMap::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((name, rule_set)) = map.next_entry::<String, RuleSet>()? {
            sets.insert(name, rule_set);
        }
        Ok(RuleSets { sets })
    }
}

impl fmt::Display for RuleSets {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for production in self.productions() {
            writeln!(f, "{};", production)?;
        }
        Ok(())
    }
}

/// Iterator over all nonterminals of rule sets.
///
/// Created with [`RuleSets::nonterminals`].
pub struct Nonterminals<'a> {
    sets: map::Values<'a, String, RuleSet>,
    current: Option<map::Iter<'a, String, Vec<Alternative>>>,
}

impl<'a> Iterator for Nonterminals<'a> {
    type Item = (&'a str, &'a [Alternative]);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((lhs, alternatives)) = self.current.as_mut().and_then(Iterator::next) {
                return Some((&lhs[..], &alternatives[..]));
            }
            self.current = Some(self.sets.next()?.rules.iter());
        }
    }
}
