//! Representations of FIRST, FOLLOW and PREDICT sets.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use cfg_rule_sets::ProductionId;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::grammar::{InternedGrammar, Symbol};

/// The name under which the end of input is written out.
pub const END_OF_INPUT: &str = "\u{0}";

/// A set of terminals, together with a flag for the "none" element.
///
/// The flag stands for the empty string in FIRST sets, and for the end of
/// input in FOLLOW and PREDICT sets.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PerSymbolSetVal {
    /// Whether the set contains the "none" element.
    pub has_none: bool,
    /// Sorted terminals without duplicates.
    pub list: Vec<Symbol>,
}

impl PerSymbolSetVal {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of elements, counting "none".
    pub fn len(&self) -> usize {
        self.list.len() + self.has_none as usize
    }

    /// Determines whether the set has no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds terminals to the set.
    pub fn extend(&mut self, syms: &[Symbol]) {
        self.list.extend(syms.iter().copied());
        self.list.sort_unstable();
        self.list.dedup();
    }

    /// Adds all elements of another set, including "none".
    pub fn union_with(&mut self, other: &PerSymbolSetVal) {
        self.extend(&other.list[..]);
        self.has_none |= other.has_none;
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.list.clear();
        self.has_none = false;
    }

    /// Converts into a set of named lookaheads, where "none" becomes the
    /// given lookahead.
    pub fn to_lookahead_set(&self, grammar: &InternedGrammar, none: Lookahead) -> LookaheadSet {
        let mut result: LookaheadSet = self
            .list
            .iter()
            .map(|&sym| Lookahead::Terminal(grammar.name(sym).to_string()))
            .collect();
        if self.has_none {
            result.insert(none);
        }
        result
    }
}

/// Sets over interned symbols, keyed by nonterminal.
pub type PerSymbolSets = BTreeMap<Symbol, PerSymbolSetVal>;

/// Access to sets keyed by nonterminal.
pub trait SymbolSets {
    /// Returns a reference to the sets.
    fn symbol_sets(&self) -> &PerSymbolSets;
}

/// An element of a FIRST, FOLLOW or PREDICT set.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Lookahead {
    /// The empty string. Appears in FIRST sets of nullable nonterminals.
    Empty,
    /// The end of input.
    EndOfInput,
    /// A terminal symbol.
    Terminal(String),
}

impl Lookahead {
    /// Creates a terminal lookahead.
    pub fn terminal(name: impl Into<String>) -> Self {
        Lookahead::Terminal(name.into())
    }
}

impl fmt::Display for Lookahead {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Lookahead::Empty => write!(f, "ε"),
            Lookahead::EndOfInput => write!(f, "$"),
            Lookahead::Terminal(name) => write!(f, "{}", name),
        }
    }
}

// `Empty` is written as `null` and `EndOfInput` as "\u0000".
impl Serialize for Lookahead {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Lookahead::Empty => serializer.serialize_none(),
            Lookahead::EndOfInput => serializer.serialize_str(END_OF_INPUT),
            Lookahead::Terminal(name) => serializer.serialize_str(name),
        }
    }
}

impl<'de> Deserialize<'de> for Lookahead {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<String>::deserialize(deserializer)? {
            None => Lookahead::Empty,
            Some(name) if name == END_OF_INPUT => Lookahead::EndOfInput,
            Some(name) => Lookahead::Terminal(name),
        })
    }
}

/// A set of lookaheads, in a deterministic order.
pub type LookaheadSet = BTreeSet<Lookahead>;

/// Lookahead sets keyed by nonterminal name, in order of appearance.
pub type PerNonterminalSets = IndexMap<String, LookaheadSet>;

/// Lookahead sets keyed by production id.
pub type PerProductionSets = BTreeMap<ProductionId, LookaheadSet>;
