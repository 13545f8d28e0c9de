//! The whole pipeline: flattening, analysis and assembly.

use cfg_predict_sets::{AnalysisEngine, AnalysisError, LlSets};
use cfg_rule_sets::{flatten, RuleSets};
use log::debug;

use crate::assemble::assemble;
use crate::error::Error;
use crate::table::GrammarTable;

/// Compiles rule sets into a grammar table, using the given engine for
/// set computation.
pub fn compile<E>(rule_sets: &RuleSets, engine: &E) -> Result<GrammarTable, Error<E::Error>>
where
    E: AnalysisEngine + ?Sized,
{
    let productions = flatten(rule_sets);
    let analysis = engine.analyze(&productions).map_err(Error::Analysis)?;
    debug!(
        "analysis returned {} FIRST, {} FOLLOW and {} PREDICT sets",
        analysis.first_sets.len(),
        analysis.follow_sets.len(),
        analysis.predict_sets.len()
    );
    Ok(assemble(rule_sets, &analysis)?)
}

/// Compilation of rule sets into grammar tables.
pub trait RuleSetsTableExt {
    /// Compiles into a grammar table with the built-in engine.
    fn ll_table(&self) -> Result<GrammarTable, Error<AnalysisError>>;
}

impl RuleSetsTableExt for RuleSets {
    fn ll_table(&self) -> Result<GrammarTable, Error<AnalysisError>> {
        compile(self, &LlSets)
    }
}
