//! Productions and their identifiers.

use std::fmt;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::rule_set::{Alternative, Nonterminals};

/// Identifier of a production in the flattened list.
///
/// Identifiers are handed out in traversal order, starting at 1, so the
/// production with id `n` is the `n`-th element of the flattened list.
#[derive(Clone, Copy, Debug, Hash, Eq, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductionId {
    n: NonZeroUsize,
}

impl ProductionId {
    /// The id of the first production.
    pub fn first() -> Self {
        ProductionId {
            n: NonZeroUsize::MIN,
        }
    }

    /// Creates an id from its one-based value, or `None` for zero.
    pub fn new(n: usize) -> Option<Self> {
        NonZeroUsize::new(n).map(|n| ProductionId { n })
    }

    /// The id that follows this one.
    pub fn next(self) -> Self {
        ProductionId {
            n: self
                .n
                .checked_add(1)
                .expect("ran out of ProductionId space?"),
        }
    }

    /// Returns the one-based value.
    pub fn get(self) -> usize {
        self.n.get()
    }

    /// Returns the zero-based position in the flattened list.
    pub fn usize(self) -> usize {
        self.n.get() - 1
    }
}

impl Default for ProductionId {
    fn default() -> Self {
        Self::first()
    }
}

impl fmt::Display for ProductionId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.n)
    }
}

/// A single `lhs ::= rhs` production borrowed from rule sets.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Production<'a> {
    /// The production's identifier.
    pub id: ProductionId,
    /// The left-hand side nonterminal.
    #[serde(rename = "left")]
    pub lhs: &'a str,
    /// The right-hand side symbols.
    #[serde(rename = "right")]
    pub rhs: &'a [String],
}

impl<'a> fmt::Display for Production<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ::=", self.lhs)?;
        if self.rhs.is_empty() {
            write!(f, " ()")?;
        }
        for sym in self.rhs {
            write!(f, " {}", sym)?;
        }
        Ok(())
    }
}

/// Iterator over productions in traversal order.
///
/// Created with [`RuleSets::productions`].
///
/// [`RuleSets::productions`]: crate::RuleSets::productions
pub struct Productions<'a> {
    nonterminals: Nonterminals<'a>,
    current: Option<(&'a str, std::slice::Iter<'a, Alternative>)>,
    next_id: ProductionId,
}

impl<'a> Productions<'a> {
    pub(crate) fn new(nonterminals: Nonterminals<'a>) -> Self {
        Productions {
            nonterminals,
            current: None,
            next_id: ProductionId::first(),
        }
    }
}

impl<'a> Iterator for Productions<'a> {
    type Item = Production<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((lhs, alternatives)) = &mut self.current {
                if let Some(alternative) = alternatives.next() {
                    let id = self.next_id;
                    self.next_id = id.next();
                    return Some(Production {
                        id,
                        lhs: *lhs,
                        rhs: alternative.symbols(),
                    });
                }
            }
            let (lhs, alternatives) = self.nonterminals.next()?;
            self.current = Some((lhs, alternatives.iter()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_one_based() {
        let first = ProductionId::first();
        assert_eq!(first.get(), 1);
        assert_eq!(first.usize(), 0);
        assert_eq!(first.next().get(), 2);
        assert_eq!(ProductionId::new(0), None);
        assert_eq!(ProductionId::new(3), Some(first.next().next()));
        assert_eq!(first.to_string(), "#1");
    }
}
