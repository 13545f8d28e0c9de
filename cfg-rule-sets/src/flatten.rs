//! Flattening of rule sets into one ordered list of productions.

use log::debug;

use crate::production::Production;
use crate::rule_set::RuleSets;

/// Collects every alternative of every nonterminal into a single list.
///
/// Productions appear in traversal order: rule sets in declaration order,
/// then nonterminals, then alternatives. The production at position `i`
/// has the id `i + 1`. Nothing is deduplicated, reordered or filtered.
pub fn flatten(rule_sets: &RuleSets) -> Vec<Production> {
    let productions: Vec<_> = rule_sets.productions().collect();
    debug!(
        "flattened {} rule sets into {} productions",
        rule_sets.len(),
        productions.len()
    );
    productions
}
