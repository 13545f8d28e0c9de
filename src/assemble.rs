//! Assembly of a grammar table from rule sets and their analysis.
//!
//! The analysis addresses PREDICT sets by production id. Ids are not
//! stored in the rule sets, so the assembler walks the rule sets in the
//! same order as flattening did and counts productions along the way.
//! Any gap between the count and the analysis is an error.

use std::collections::HashSet;

use cfg_predict_sets::{Analysis, LookaheadSet};
use cfg_rule_sets::{ProductionId, RuleSets};
use log::{debug, trace, warn};

use crate::error::AssembleError;
use crate::table::{GrammarTable, TableEntry, TableRule};

/// Builds the table entry of every nonterminal, attaching the PREDICT set
/// of each alternative.
///
/// A nonterminal declared in several rule sets gets a single entry that
/// holds all of its alternatives in traversal order. Its FIRST and FOLLOW
/// sets must be present if any of its declarations has alternatives.
pub fn assemble(rule_sets: &RuleSets, analysis: &Analysis) -> Result<GrammarTable, AssembleError> {
    let mut table = GrammarTable::new();
    let mut next_id = ProductionId::first();
    // Alternatives may come from a later declaration.
    let with_alternatives: HashSet<&str> = rule_sets
        .nonterminals()
        .filter(|(_, alternatives)| !alternatives.is_empty())
        .map(|(lhs, _)| lhs)
        .collect();

    for (lhs, alternatives) in rule_sets.nonterminals() {
        let sets = if table.contains(lhs) {
            warn!(
                "nonterminal `{}` is declared more than once, merging its alternatives",
                lhs
            );
            None
        } else {
            Some(lookup_sets(lhs, with_alternatives.contains(lhs), analysis)?)
        };

        let mut rules = Vec::with_capacity(alternatives.len());
        for alternative in alternatives {
            let prediction = analysis.predict_sets.get(&next_id).ok_or_else(|| {
                AssembleError::MissingPredictSet {
                    id: next_id,
                    lhs: lhs.to_string(),
                }
            })?;
            trace!(
                "{} {} ::= {:?} predicted by {:?}",
                next_id,
                lhs,
                alternative.symbols(),
                prediction
            );
            rules.push(TableRule {
                rule: alternative.clone(),
                prediction: prediction.clone(),
            });
            next_id = next_id.next();
        }

        match sets {
            Some((first, follow)) => table.push(
                lhs,
                TableEntry {
                    first,
                    follow,
                    rules,
                },
            ),
            None => {
                if let Some(entry) = table.get_mut(lhs) {
                    entry.rules.extend(rules);
                }
            }
        }
    }

    let mut unclaimed = analysis.predict_sets.range(next_id..);
    if let Some((&first, _)) = unclaimed.next() {
        return Err(AssembleError::UnclaimedPredictSets {
            first,
            count: unclaimed.count() + 1,
        });
    }

    debug!(
        "assembled a table of {} nonterminals and {} rules",
        table.len(),
        next_id.usize()
    );
    Ok(table)
}

/// Looks up FIRST and FOLLOW sets of a nonterminal.
///
/// A nonterminal without alternatives in any rule set never reaches the
/// analysis as a left-hand side, so its sets may be absent. They are empty
/// in that case.
fn lookup_sets(
    lhs: &str,
    has_alternatives: bool,
    analysis: &Analysis,
) -> Result<(LookaheadSet, LookaheadSet), AssembleError> {
    let first = analysis.first_sets.get(lhs);
    let follow = analysis.follow_sets.get(lhs);
    match (first, follow) {
        (Some(first), Some(follow)) => Ok((first.clone(), follow.clone())),
        (None, _) if has_alternatives => Err(AssembleError::MissingFirstSet {
            name: lhs.to_string(),
        }),
        (_, None) if has_alternatives => Err(AssembleError::MissingFollowSet {
            name: lhs.to_string(),
        }),
        (first, follow) => {
            warn!(
                "nonterminal `{}` has no alternatives and was not analyzed, its sets are empty",
                lhs
            );
            Ok((
                first.cloned().unwrap_or_default(),
                follow.cloned().unwrap_or_default(),
            ))
        }
    }
}
