//! Compiles rule sets of a context-free grammar into a table for a
//! predictive LL(1) parser.
//!
//! Rule sets are flattened into a numbered list of productions, an
//! analysis engine computes FIRST, FOLLOW and PREDICT sets over that list,
//! and the results are assembled back into a table keyed by nonterminal.
//!
//! ```
//! use cfg_ll_table::RuleSetsTableExt;
//! use cfg_rule_sets::RuleSets;
//!
//! let mut rule_sets = RuleSets::new();
//! rule_sets
//!     .rule_set("main")
//!     .rule("S")
//!     .rhs(["a", "B"])
//!     .rhs(["b"])
//!     .rule("B")
//!     .rhs(["c"]);
//!
//! let table = rule_sets.ll_table().unwrap();
//! assert_eq!(table["S"].rules.len(), 2);
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

pub mod assemble;
pub mod cli;
pub mod compile;
pub mod error;
pub mod table;

pub use crate::assemble::assemble;
pub use crate::compile::{compile, RuleSetsTableExt};
pub use crate::error::{AssembleError, Error};
pub use crate::table::{GrammarTable, PersistError, TableEntry, TableRule};
pub use cfg_predict_sets::{Analysis, AnalysisEngine, Lookahead, LookaheadSet, LlSets};
pub use cfg_rule_sets::{flatten, Alternative, Production, ProductionId, RuleSets};
