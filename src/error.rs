//! Errors of table assembly and compilation.

use cfg_rule_sets::ProductionId;

/// The assembled table would not match the analysis.
///
/// These errors mean the analysis was computed over a different list of
/// productions than the one obtained from the rule sets.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum AssembleError {
    /// The analysis has no FIRST set for a nonterminal.
    #[error("no FIRST set for nonterminal `{name}`")]
    MissingFirstSet {
        /// The nonterminal.
        name: String,
    },
    /// The analysis has no FOLLOW set for a nonterminal.
    #[error("no FOLLOW set for nonterminal `{name}`")]
    MissingFollowSet {
        /// The nonterminal.
        name: String,
    },
    /// The analysis has no PREDICT set for a production.
    #[error("no PREDICT set for production {id} of `{lhs}`")]
    MissingPredictSet {
        /// The production.
        id: ProductionId,
        /// The production's left-hand side.
        lhs: String,
    },
    /// The analysis has PREDICT sets past the last production.
    #[error("{count} PREDICT sets do not belong to any production, starting at {first}")]
    UnclaimedPredictSets {
        /// The lowest unclaimed id.
        first: ProductionId,
        /// The number of unclaimed sets.
        count: usize,
    },
}

/// Represents an error when compiling rule sets into a table.
#[derive(Debug, thiserror::Error)]
pub enum Error<E> {
    /// The analysis engine rejected the productions.
    #[error("analysis failed")]
    Analysis(#[source] E),
    /// The analysis does not fit the rule sets.
    #[error("table assembly failed")]
    Assemble(#[from] AssembleError),
}
