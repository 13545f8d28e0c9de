//! PREDICT sets, one per production.

use std::collections::BTreeMap;

use cfg_rule_sets::ProductionId;

use crate::first::FirstSets;
use crate::follow::FollowSets;
use crate::grammar::InternedGrammar;
use crate::sets::PerSymbolSetVal;

/// PREDICT sets.
///
/// The `has_none` flag of each set marks the end of input.
pub struct PredictionSets {
    map: BTreeMap<ProductionId, PerSymbolSetVal>,
}

impl PredictionSets {
    /// Compute the PREDICT set of every production.
    ///
    /// The PREDICT set of `A ⸬= α` is FIRST(α), together with FOLLOW(A)
    /// if α is nullable.
    pub fn new(
        grammar: &InternedGrammar,
        first_sets: &FirstSets,
        follow_sets: &FollowSets,
    ) -> Self {
        let mut map = BTreeMap::new();
        for rule in grammar.rules() {
            let mut prediction = first_sets.first_set_for_string(&rule.rhs[..]);
            if prediction.has_none {
                prediction.has_none = false;
                if let Some(follow_set) = follow_sets.get(rule.lhs) {
                    prediction.union_with(follow_set);
                }
            }
            log::trace!("PREDICT {} = {:?}", rule.id, prediction);
            map.insert(rule.id, prediction);
        }
        PredictionSets { map }
    }

    /// Returns the PREDICT set of a production.
    pub fn get(&self, id: ProductionId) -> Option<&PerSymbolSetVal> {
        self.map.get(&id)
    }

    /// Iterates over PREDICT sets in the order of production ids.
    pub fn iter(&self) -> impl Iterator<Item = (ProductionId, &PerSymbolSetVal)> {
        self.map.iter().map(|(&id, set)| (id, set))
    }
}
