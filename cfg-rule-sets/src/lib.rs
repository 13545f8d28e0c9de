//! Rule sets of a context-free grammar, grouped by name and kept in
//! declaration order, along with their flattening into a single list of
//! numbered productions.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

pub mod flatten;
pub mod load;
pub mod production;
pub mod rule_builder;
pub mod rule_set;

pub use crate::flatten::flatten;
pub use crate::load::LoadError;
pub use crate::production::{Production, ProductionId, Productions};
pub use crate::rule_builder::RuleBuilder;
pub use crate::rule_set::{Alternative, Nonterminals, RuleSet, RuleSets};
