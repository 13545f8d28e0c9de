//! The analysis engine interface and its built-in implementation.
//!
//! An engine receives productions in their flattened order and returns
//! FIRST and FOLLOW sets by nonterminal name, and PREDICT sets by
//! production id.

use cfg_rule_sets::{Production, ProductionId};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::cfg_sets_ext::CfgSetsExt;
use crate::grammar::InternedGrammar;
use crate::sets::{Lookahead, PerNonterminalSets, PerProductionSets, END_OF_INPUT};

/// Results of an analysis.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// FIRST sets by nonterminal name.
    pub first_sets: PerNonterminalSets,
    /// FOLLOW sets by nonterminal name.
    pub follow_sets: PerNonterminalSets,
    /// PREDICT sets by production id.
    pub predict_sets: PerProductionSets,
}

/// Computes FIRST, FOLLOW and PREDICT sets for a list of productions.
pub trait AnalysisEngine {
    /// The error returned when the engine rejects its input.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Analyzes productions given in flattened order.
    fn analyze(&self, productions: &[Production]) -> Result<Analysis, Self::Error>;
}

/// Represents an error when the built-in engine rejects its input.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    /// There are no productions, hence no start symbol.
    #[error("grammar has no productions")]
    EmptyGrammar,
    /// A symbol is spelled like the end-of-input marker.
    #[error("production {id} uses the reserved end-of-input symbol")]
    ReservedSymbol {
        /// The offending production.
        id: ProductionId,
    },
}

/// The built-in engine for LL(1) sets.
///
/// Nonterminals are symbols that appear on some left-hand side, and the
/// left-hand side of the first production is the start symbol.
#[derive(Clone, Copy, Debug, Default)]
pub struct LlSets;

impl AnalysisEngine for LlSets {
    type Error = AnalysisError;

    fn analyze(&self, productions: &[Production]) -> Result<Analysis, AnalysisError> {
        if productions.is_empty() {
            return Err(AnalysisError::EmptyGrammar);
        }
        if let Some(production) = productions
            .iter()
            .find(|p| p.lhs == END_OF_INPUT || p.rhs.iter().any(|sym| sym == END_OF_INPUT))
        {
            return Err(AnalysisError::ReservedSymbol { id: production.id });
        }

        let grammar = InternedGrammar::new(productions);
        let first_sets = grammar.first_sets();
        let follow_sets = grammar.follow_sets_with_first(&first_sets);
        let prediction_sets = grammar.prediction_sets(&first_sets, &follow_sets);

        let mut analysis = Analysis::default();
        for &lhs in grammar.nonterminals() {
            let name = grammar.name(lhs).to_string();
            if let Some(first_set) = first_sets.get(lhs) {
                analysis.first_sets.insert(
                    name.clone(),
                    first_set.to_lookahead_set(&grammar, Lookahead::Empty),
                );
            }
            if let Some(follow_set) = follow_sets.get(lhs) {
                analysis.follow_sets.insert(
                    name,
                    follow_set.to_lookahead_set(&grammar, Lookahead::EndOfInput),
                );
            }
        }
        for (id, prediction) in prediction_sets.iter() {
            analysis
                .predict_sets
                .insert(id, prediction.to_lookahead_set(&grammar, Lookahead::EndOfInput));
        }

        debug!(
            "analyzed {} productions over {} symbols: {} nonterminals",
            productions.len(),
            grammar.num_syms(),
            analysis.first_sets.len()
        );
        Ok(analysis)
    }
}

/// An engine that returns results computed elsewhere, such as sets loaded
/// from a file.
#[derive(Clone, Debug, Default)]
pub struct Precomputed(pub Analysis);

impl AnalysisEngine for Precomputed {
    type Error = std::convert::Infallible;

    fn analyze(&self, productions: &[Production]) -> Result<Analysis, Self::Error> {
        debug!(
            "using precomputed sets for {} productions ({} PREDICT sets)",
            productions.len(),
            self.0.predict_sets.len()
        );
        Ok(self.0.clone())
    }
}
