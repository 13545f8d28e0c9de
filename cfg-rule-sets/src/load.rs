//! Loading rule sets from JSON.

use std::fs::File;
use std::io;
use std::path::Path;
use std::str::FromStr;

use crate::rule_set::RuleSets;

/// Represents an error when loading rule sets.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The rule sets could not be read.
    #[error("failed to read rule sets")]
    Io(#[from] io::Error),
    /// The input is not a valid rule set document.
    #[error("malformed rule sets: {0}")]
    Json(#[from] serde_json::Error),
}

impl RuleSets {
    /// Loads rule sets from a JSON string.
    ///
    /// The document is either an array of rule sets or an object of named
    /// rule sets. Each rule set maps nonterminals to arrays of
    /// alternatives.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads rule sets from a reader of JSON.
    pub fn from_json_reader<R: io::Read>(reader: R) -> Result<Self, LoadError> {
        Ok(serde_json::from_reader(io::BufReader::new(reader))?)
    }

    /// Loads rule sets from a JSON file.
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        Self::from_json_reader(File::open(path)?)
    }
}

impl FromStr for RuleSets {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json_str(s)
    }
}
