//! The `cfg-ll-table` command.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use cfg_predict_sets::{Analysis, LlSets, Precomputed};
use cfg_rule_sets::RuleSets;
use clap::Parser;
use log::info;

use crate::compile::compile;
use crate::table::GrammarTable;

/// Computes an LL(1) grammar table from rule sets written in JSON.
#[derive(Clone, Debug, Parser)]
#[command(name = "cfg-ll-table", version, about)]
pub struct Cli {
    /// Path to the rule sets.
    pub rules: PathBuf,

    /// Where to write the table, or `-` for standard output.
    #[arg(short, long, default_value = "grammar.json")]
    pub output: PathBuf,

    /// Pretty-print the table.
    #[arg(long)]
    pub pretty: bool,

    /// Use FIRST, FOLLOW and PREDICT sets from this file instead of
    /// computing them.
    #[arg(long, value_name = "PATH")]
    pub analysis: Option<PathBuf>,
}

impl Cli {
    /// Builds the table and writes it where `--output` says.
    pub fn run(&self) -> anyhow::Result<()> {
        let table = self.table()?;
        self.write_table(&table, io::stdout().lock())
    }

    /// Loads the rule sets and compiles them, with the sets given by
    /// `--analysis` if present.
    pub fn table(&self) -> anyhow::Result<GrammarTable> {
        let rule_sets = RuleSets::from_json_path(&self.rules)
            .with_context(|| format!("cannot load rule sets from {}", self.rules.display()))?;
        info!(
            "loaded {} rule sets with {} productions",
            rule_sets.len(),
            rule_sets.num_productions()
        );

        let table = match &self.analysis {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("cannot read analysis from {}", path.display()))?;
                let analysis: Analysis = serde_json::from_str(&json)
                    .with_context(|| format!("malformed analysis in {}", path.display()))?;
                compile(&rule_sets, &Precomputed(analysis))?
            }
            None => compile(&rule_sets, &LlSets)?,
        };
        Ok(table)
    }

    /// Determines whether the table goes to standard output.
    pub fn writes_to_stdout(&self) -> bool {
        self.output.as_os_str() == "-"
    }

    /// Writes the table to `stdout` for `-o -`, or to the output file
    /// otherwise.
    pub fn write_table<W>(&self, table: &GrammarTable, mut stdout: W) -> anyhow::Result<()>
    where
        W: Write,
    {
        if self.writes_to_stdout() {
            table.write_json(&mut stdout, self.pretty)?;
            writeln!(stdout)?;
        } else {
            table
                .save(&self.output, self.pretty)
                .with_context(|| format!("cannot write table to {}", self.output.display()))?;
            info!(
                "wrote {} nonterminals and {} rules to {}",
                table.len(),
                table.num_rules(),
                self.output.display()
            );
        }
        Ok(())
    }
}
