//! Productions with interned symbols.

use std::num::NonZeroU32;

use bit_vec::BitVec;
use cfg_rule_sets::{Production, ProductionId};

use crate::string_interner::StringInterner;

/// A grammar symbol, interned from its name.
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub struct Symbol {
    n: NonZeroU32,
}

impl Symbol {
    fn from_index(index: usize) -> Self {
        let n = u32::try_from(index + 1)
            .ok()
            .and_then(NonZeroU32::new)
            .expect("ran out of Symbol space?");
        Symbol { n }
    }

    /// Returns the zero-based index of this symbol.
    pub fn usize(&self) -> usize {
        self.n.get() as usize - 1
    }
}

/// A production with interned symbols.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InternedRule {
    /// The production's identifier.
    pub id: ProductionId,
    /// The rule's left-hand side symbol.
    pub lhs: Symbol,
    /// The rule's right-hand side symbols.
    pub rhs: Vec<Symbol>,
}

/// Productions over interned symbols.
///
/// Symbols that appear on the left-hand side of some production are
/// nonterminals. All others are terminals.
pub struct InternedGrammar {
    interner: StringInterner,
    rules: Vec<InternedRule>,
    nonterminals: Vec<Symbol>,
    terminal_set: BitVec,
}

impl InternedGrammar {
    /// Interns the symbols of all productions, keeping their order.
    pub fn new(productions: &[Production]) -> Self {
        let interner = StringInterner::new();
        let mut num_syms = 0;
        let mut intern = |name: &str| {
            let sym = Symbol::from_index(interner.get_or_intern(name));
            num_syms = num_syms.max(sym.usize() + 1);
            sym
        };
        let rules: Vec<_> = productions
            .iter()
            .map(|production| InternedRule {
                id: production.id,
                lhs: intern(production.lhs),
                rhs: production.rhs.iter().map(|name| intern(name)).collect(),
            })
            .collect();

        let mut terminal_set = BitVec::from_elem(num_syms, true);
        let mut nonterminals = vec![];
        for rule in &rules {
            if terminal_set[rule.lhs.usize()] {
                terminal_set.set(rule.lhs.usize(), false);
                nonterminals.push(rule.lhs);
            }
        }

        InternedGrammar {
            interner,
            rules,
            nonterminals,
            terminal_set,
        }
    }

    /// Returns the rules in their original order.
    pub fn rules(&self) -> &[InternedRule] {
        &self.rules[..]
    }

    /// Returns nonterminals in order of their first appearance as a
    /// left-hand side.
    pub fn nonterminals(&self) -> &[Symbol] {
        &self.nonterminals[..]
    }

    /// Returns the start symbol: the left-hand side of the first rule.
    pub fn start(&self) -> Option<Symbol> {
        self.rules.first().map(|rule| rule.lhs)
    }

    /// Returns the set of terminal symbols, indexed by symbol.
    pub fn terminal_set(&self) -> &BitVec {
        &self.terminal_set
    }

    /// Determines whether the symbol is a terminal.
    pub fn is_terminal(&self, sym: Symbol) -> bool {
        self.terminal_set.get(sym.usize()).unwrap_or(true)
    }

    /// Returns the number of symbols in use.
    pub fn num_syms(&self) -> usize {
        self.terminal_set.len()
    }

    /// Returns the symbol's name.
    ///
    /// # Panics
    ///
    /// Panics if the symbol comes from a different grammar.
    pub fn name(&self, sym: Symbol) -> &str {
        self.interner
            .resolve(sym.usize())
            .expect("symbol not interned in this grammar")
    }

    /// Looks up the symbol with the given name.
    pub fn symbol(&self, name: &str) -> Option<Symbol> {
        (0..self.num_syms())
            .find(|&index| self.interner.resolve(index) == Some(name))
            .map(Symbol::from_index)
    }
}
