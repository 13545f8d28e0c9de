//! Predict sets: FIRST, FOLLOW and PREDICT set computation over a flat
//! list of productions.

#![deny(unsafe_code)]
#![deny(missing_docs)]

pub mod cfg_sets_ext;
pub mod engine;
pub mod first;
pub mod follow;
pub mod grammar;
pub mod predict;
pub mod sets;
mod string_interner;

pub use self::cfg_sets_ext::CfgSetsExt;
pub use self::engine::{Analysis, AnalysisEngine, AnalysisError, LlSets, Precomputed};
pub use self::first::FirstSets;
pub use self::follow::FollowSets;
pub use self::grammar::{InternedGrammar, InternedRule, Symbol};
pub use self::predict::PredictionSets;
pub use self::sets::{
    Lookahead, LookaheadSet, PerNonterminalSets, PerProductionSets, PerSymbolSetVal,
    PerSymbolSets, SymbolSets, END_OF_INPUT,
};
