//! The grammar table and its persistence.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::ops::Index;
use std::path::Path;

use cfg_predict_sets::LookaheadSet;
use cfg_rule_sets::Alternative;
use indexmap::{map, IndexMap};
use serde::{Deserialize, Serialize};

/// A table for a predictive parser, keyed by nonterminal.
///
/// Nonterminals keep the order of their first declaration.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GrammarTable {
    entries: IndexMap<String, TableEntry>,
}

/// Sets and rules of one nonterminal.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TableEntry {
    /// The FIRST set.
    pub first: LookaheadSet,
    /// The FOLLOW set.
    pub follow: LookaheadSet,
    /// Alternatives in declaration order.
    pub rules: Vec<TableRule>,
}

/// An alternative together with the lookaheads that select it.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TableRule {
    /// The alternative's symbols.
    pub rule: Alternative,
    /// The PREDICT set.
    pub prediction: LookaheadSet,
}

/// Represents an error when writing a table.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// The output could not be written.
    #[error("failed to write grammar table")]
    Io(#[from] io::Error),
    /// The table could not be serialized.
    #[error("failed to serialize grammar table")]
    Json(#[from] serde_json::Error),
}

impl GrammarTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entry of a nonterminal.
    pub fn get(&self, name: &str) -> Option<&TableEntry> {
        self.entries.get(name)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut TableEntry> {
        self.entries.get_mut(name)
    }

    /// Appends an entry for a new nonterminal.
    pub(crate) fn push(&mut self, name: &str, entry: TableEntry) {
        self.entries.insert(name.to_string(), entry);
    }

    /// Determines whether the table has an entry for the nonterminal.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterates over nonterminals and their entries in declaration order.
    pub fn iter(&self) -> map::Iter<String, TableEntry> {
        self.entries.iter()
    }

    /// Returns the number of nonterminals.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Determines whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the total number of rules.
    pub fn num_rules(&self) -> usize {
        self.entries.values().map(|entry| entry.rules.len()).sum()
    }

    /// Serializes the table into a compact JSON string.
    pub fn to_json(&self) -> Result<String, PersistError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the table into a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, PersistError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the table as JSON.
    pub fn write_json<W: Write>(&self, writer: W, pretty: bool) -> Result<(), PersistError> {
        let mut writer = BufWriter::new(writer);
        if pretty {
            serde_json::to_writer_pretty(&mut writer, self)?;
        } else {
            serde_json::to_writer(&mut writer, self)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Writes the table as JSON to a file, replacing its contents.
    pub fn save(&self, path: impl AsRef<Path>, pretty: bool) -> Result<(), PersistError> {
        self.write_json(File::create(path)?, pretty)
    }

    /// Loads a previously written table.
    pub fn from_json_str(json: &str) -> Result<Self, PersistError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Index<&str> for GrammarTable {
    type Output = TableEntry;

    fn index(&self, name: &str) -> &TableEntry {
        &self.entries[name]
    }
}

impl<'a> IntoIterator for &'a GrammarTable {
    type Item = (&'a String, &'a TableEntry);
    type IntoIter = map::Iter<'a, String, TableEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
