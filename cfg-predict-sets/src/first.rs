//! FIRST sets.

use bit_vec::BitVec;

use crate::grammar::{InternedGrammar, Symbol};
use crate::sets::{PerSymbolSetVal, PerSymbolSets, SymbolSets};

/// Collector of FIRST sets.
///
/// The `has_none` flag of each set marks a nullable nonterminal.
pub struct FirstSets {
    pub(super) map: PerSymbolSets,
    terminal_set: BitVec,
}

impl FirstSets {
    /// Compute all FIRST sets of the grammar.
    ///
    /// We define a binary relation FIRST(N, S), in which N is related to S
    /// if the grammar has a production of the form `N ⸬= α S β`, where
    /// α is a nullable string of symbols.
    ///
    /// We compute the transitive closure of this relation.
    pub fn new(grammar: &InternedGrammar) -> Self {
        let mut this = FirstSets {
            map: grammar
                .nonterminals()
                .iter()
                .map(|&lhs| (lhs, PerSymbolSetVal::new()))
                .collect(),
            terminal_set: grammar.terminal_set().clone(),
        };

        this.collect_from(grammar);
        this
    }

    /// Calculates a FIRST set for a string of symbols.
    ///
    /// The result has `has_none` set if the whole string is nullable.
    pub fn first_set_for_string(&self, string: &[Symbol]) -> PerSymbolSetVal {
        let mut result = PerSymbolSetVal::new();
        for &sym in string {
            if self.terminal_set.get(sym.usize()).unwrap_or(true) {
                result.extend(&[sym]);
                return result;
            }
            match self.map.get(&sym) {
                Some(first_set) => {
                    result.extend(&first_set.list[..]);
                    if !first_set.has_none {
                        return result;
                    }
                }
                None => {
                    // A nonterminal without rules derives nothing.
                    return result;
                }
            }
        }
        result.has_none = true;
        result
    }

    fn collect_from(&mut self, grammar: &InternedGrammar) {
        let mut changed = true;
        let mut passes = 0;
        while changed {
            changed = false;
            for rule in grammar.rules() {
                changed |= self.process_rule(rule.lhs, &rule.rhs[..]);
            }
            passes += 1;
        }
        log::trace!("FIRST sets reached a fixed point after {} passes", passes);
    }

    fn process_rule(&mut self, lhs: Symbol, rhs: &[Symbol]) -> bool {
        let lookahead = self.first_set_for_string(rhs);
        let first_set = self.map.entry(lhs).or_insert_with(PerSymbolSetVal::new);
        let prev_cardinality = first_set.len();
        first_set.union_with(&lookahead);
        prev_cardinality != first_set.len()
    }
}

impl SymbolSets for FirstSets {
    /// Returns a reference to FIRST sets.
    fn symbol_sets(&self) -> &PerSymbolSets {
        &self.map
    }
}

impl FirstSets {
    /// Returns the FIRST set of a nonterminal.
    pub fn get(&self, sym: Symbol) -> Option<&PerSymbolSetVal> {
        self.map.get(&sym)
    }
}

