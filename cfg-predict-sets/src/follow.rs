//! FOLLOW sets.

use crate::first::FirstSets;
use crate::grammar::{InternedGrammar, Symbol};
use crate::sets::{PerSymbolSetVal, PerSymbolSets, SymbolSets};

/// FOLLOW sets.
///
/// The `has_none` flag of each set marks the end of input.
pub struct FollowSets {
    /// Mapping from nonterminals to FOLLOW sets.
    map: PerSymbolSets,
}

impl FollowSets {
    /// Compute all FOLLOW sets of the grammar.
    ///
    /// The end of input follows the start symbol. For every production
    /// `A ⸬= α B β`, FOLLOW(B) includes FIRST(β), and also FOLLOW(A) if
    /// β is nullable.
    pub fn new(grammar: &InternedGrammar, first_sets: &FirstSets) -> Self {
        let mut this = FollowSets {
            map: grammar
                .nonterminals()
                .iter()
                .map(|&lhs| (lhs, PerSymbolSetVal::new()))
                .collect(),
        };

        if let Some(start) = grammar.start() {
            if let Some(follow_set) = this.map.get_mut(&start) {
                follow_set.has_none = true;
            }
        }

        let mut changed = true;
        while changed {
            changed = false;
            for rule in grammar.rules() {
                let mut follow_set = this.map.get(&rule.lhs).cloned().unwrap_or_default();

                for &sym in rule.rhs.iter().rev() {
                    if grammar.is_terminal(sym) {
                        follow_set.clear();
                        follow_set.extend(&[sym]);
                    } else {
                        if let Some(followed) = this.map.get_mut(&sym) {
                            let prev_cardinality = followed.len();
                            followed.union_with(&follow_set);
                            changed |= prev_cardinality != followed.len();
                        }

                        let empty = PerSymbolSetVal::new();
                        let first_set = first_sets.get(sym).unwrap_or(&empty);
                        if !first_set.has_none {
                            follow_set.clear();
                        }
                        follow_set.extend(&first_set.list[..]);
                    }
                }
            }
        }

        this
    }

    /// Returns the FOLLOW set of a nonterminal.
    pub fn get(&self, sym: Symbol) -> Option<&PerSymbolSetVal> {
        self.map.get(&sym)
    }
}

impl SymbolSets for FollowSets {
    /// Returns a reference to FOLLOW sets.
    fn symbol_sets(&self) -> &PerSymbolSets {
        &self.map
    }
}
