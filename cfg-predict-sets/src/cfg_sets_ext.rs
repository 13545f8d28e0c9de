//! Extension trait for computing sets on a grammar.

use crate::first::FirstSets;
use crate::follow::FollowSets;
use crate::grammar::InternedGrammar;
use crate::predict::PredictionSets;

/// Set computations on a grammar.
pub trait CfgSetsExt {
    /// Computes FIRST sets.
    fn first_sets(&self) -> FirstSets;
    /// Computes FOLLOW sets.
    fn follow_sets(&self) -> FollowSets;
    /// Computes FOLLOW sets from already computed FIRST sets.
    fn follow_sets_with_first(&self, first_sets: &FirstSets) -> FollowSets;
    /// Computes PREDICT sets from already computed FIRST and FOLLOW sets.
    fn prediction_sets(&self, first_sets: &FirstSets, follow_sets: &FollowSets) -> PredictionSets;
}

impl CfgSetsExt for InternedGrammar {
    fn first_sets(&self) -> FirstSets {
        FirstSets::new(self)
    }

    fn follow_sets(&self) -> FollowSets {
        FollowSets::new(self, &self.first_sets())
    }

    fn follow_sets_with_first(&self, first_sets: &FirstSets) -> FollowSets {
        FollowSets::new(self, first_sets)
    }

    fn prediction_sets(&self, first_sets: &FirstSets, follow_sets: &FollowSets) -> PredictionSets {
        PredictionSets::new(self, first_sets, follow_sets)
    }
}
