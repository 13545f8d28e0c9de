use std::fs;
use std::path::PathBuf;

use cfg_ll_table::cli::Cli;
use cfg_ll_table::{Analysis, AnalysisEngine, RuleSetsTableExt};
use clap::Parser;

mod grammars;
mod support;

use grammars::expressions::statements;
use support::{assert_eq_tables, assert_tagged, Tagging};

/// Writes `contents` to a file in the temporary directory, unique to this
/// test process.
fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "cfg-ll-table-cli-{}-{}",
        std::process::id(),
        name
    ));
    fs::write(&path, contents).unwrap();
    path
}

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(["cfg-ll-table"].iter().chain(args)).unwrap()
}

#[test]
fn test_defaults() {
    let cli = parse(&["rules.json"]);
    assert_eq!(cli.rules, PathBuf::from("rules.json"));
    assert_eq!(cli.output, PathBuf::from("grammar.json"));
    assert!(!cli.pretty);
    assert_eq!(cli.analysis, None);
    assert!(!cli.writes_to_stdout());
}

#[test]
fn test_write_to_stdout() {
    let rules = temp_file(
        "stdout-rules.json",
        r#"{"main": {"S": [["a", "B"], ["b"]], "B": [["c"]]}}"#,
    );
    let cli = parse(&[rules.to_str().unwrap(), "-o", "-"]);
    assert!(cli.writes_to_stdout());

    let table = cli.table().unwrap();
    let mut out = vec![];
    cli.write_table(&table, &mut out).unwrap();
    fs::remove_file(&rules).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text, format!("{}\n", table.to_json().unwrap()));
    assert!(!PathBuf::from("-").exists());
}

#[test]
fn test_write_to_file() {
    let rules = temp_file("file-rules.json", &serde_json::to_string(&statements()).unwrap());
    let output = std::env::temp_dir().join(format!(
        "cfg-ll-table-cli-{}-out.json",
        std::process::id()
    ));
    let cli = parse(&[
        rules.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
        "--pretty",
    ]);

    let table = cli.table().unwrap();
    let mut out = vec![];
    cli.write_table(&table, &mut out).unwrap();
    let written = fs::read_to_string(&output).unwrap();
    fs::remove_file(&rules).unwrap();
    fs::remove_file(&output).unwrap();

    assert!(out.is_empty());
    assert_eq!(written, table.to_json_pretty().unwrap());
    assert_eq_tables(&table, &statements().ll_table().unwrap());
}

#[test]
fn test_analysis_file() {
    let rule_sets = statements();
    let productions = cfg_ll_table::flatten(&rule_sets);
    let analysis: Analysis = Tagging.analyze(&productions).unwrap();
    let rules = temp_file("tagged-rules.json", &serde_json::to_string(&rule_sets).unwrap());
    let sets = temp_file("tagged-analysis.json", &serde_json::to_string(&analysis).unwrap());
    let cli = parse(&[
        rules.to_str().unwrap(),
        "--analysis",
        sets.to_str().unwrap(),
        "-o",
        "-",
    ]);

    let table = cli.table().unwrap();
    fs::remove_file(&rules).unwrap();
    fs::remove_file(&sets).unwrap();

    assert_tagged(&table);
    assert_eq!(table.num_rules(), rule_sets.num_productions());
}

#[test]
fn test_analysis_file_must_fit() {
    let rules = temp_file("unfit-rules.json", &serde_json::to_string(&statements()).unwrap());
    let sets = temp_file(
        "unfit-analysis.json",
        r#"{"firstSets": {}, "followSets": {}, "predictSets": {}}"#,
    );
    let cli = parse(&[rules.to_str().unwrap(), "--analysis", sets.to_str().unwrap()]);

    let error = cli.table().unwrap_err();
    fs::remove_file(&rules).unwrap();
    fs::remove_file(&sets).unwrap();

    assert_eq!(error.to_string(), "table assembly failed");
    assert_eq!(
        error.root_cause().to_string(),
        "no FIRST set for nonterminal `Program`"
    );
}

#[test]
fn test_missing_rules_file() {
    let cli = parse(&["does/not/exist.json"]);
    let error = cli.table().unwrap_err();
    assert!(
        error.to_string().starts_with("cannot load rule sets from"),
        "{}",
        error
    );
}
