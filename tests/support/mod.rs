#![allow(dead_code)]

use std::convert::Infallible;

use cfg_ll_table::{Analysis, AnalysisEngine, GrammarTable, Lookahead, LookaheadSet, Production};

/// Builds a set of lookaheads, where `None` is the empty string and `"$"`
/// is the end of input.
pub fn set(elements: &[Option<&str>]) -> LookaheadSet {
    elements
        .iter()
        .map(|element| match element {
            None => Lookahead::Empty,
            Some("$") => Lookahead::EndOfInput,
            Some(name) => Lookahead::terminal(*name),
        })
        .collect()
}

/// The lookahead that `Tagging` assigns to a production.
pub fn tag(lhs: &str, rhs: &[String]) -> Lookahead {
    Lookahead::terminal(format!("{} -> {}", lhs, rhs.join(" ")))
}

/// An engine that tags every production with a unique PREDICT set made
/// from its own symbols, so a misplaced set is easy to spot.
pub struct Tagging;

impl AnalysisEngine for Tagging {
    type Error = Infallible;

    fn analyze(&self, productions: &[Production]) -> Result<Analysis, Infallible> {
        let mut analysis = Analysis::default();
        for production in productions {
            let lhs = production.lhs.to_string();
            analysis
                .first_sets
                .entry(lhs.clone())
                .or_default()
                .insert(Lookahead::terminal(format!("first {}", lhs)));
            analysis
                .follow_sets
                .entry(lhs.clone())
                .or_default()
                .insert(Lookahead::terminal(format!("follow {}", lhs)));
            analysis.predict_sets.insert(
                production.id,
                [tag(production.lhs, production.rhs)].into_iter().collect(),
            );
        }
        Ok(analysis)
    }
}

/// Checks that every rule carries the set `Tagging` made for it.
pub fn assert_tagged(table: &GrammarTable) {
    for (lhs, entry) in table {
        for rule in &entry.rules {
            let expected: LookaheadSet = [tag(lhs, rule.rule.symbols())].into_iter().collect();
            assert_eq!(
                rule.prediction, expected,
                "rule {} ::= {:?} has a PREDICT set of another production",
                lhs,
                rule.rule.symbols()
            );
        }
    }
}

pub fn assert_eq_tables(left: &GrammarTable, right: &GrammarTable) {
    if left != right {
        eprintln!(
            "{}\n{}",
            left.to_json_pretty().unwrap(),
            right.to_json_pretty().unwrap()
        );
        panic!("Tables expected to be equal");
    }
}
