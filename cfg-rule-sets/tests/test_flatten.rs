use cfg_rule_sets::{flatten, Alternative, ProductionId, RuleSets};
use test_case::test_case;

fn example() -> RuleSets {
    let mut rule_sets = RuleSets::new();
    rule_sets
        .rule_set("main")
        .rule("S")
        .rhs(["a", "B"])
        .rhs(["b"])
        .rule("B")
        .rhs(["c"]);
    rule_sets
}

fn pairs(rule_sets: &RuleSets) -> Vec<(usize, String, Vec<String>)> {
    flatten(rule_sets)
        .into_iter()
        .map(|p| (p.id.get(), p.lhs.to_string(), p.rhs.to_vec()))
        .collect()
}

fn strings(syms: &[&str]) -> Vec<String> {
    syms.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_flatten_single_rule_set() {
    let rule_sets = example();
    assert_eq!(
        pairs(&rule_sets),
        vec![
            (1, "S".to_string(), strings(&["a", "B"])),
            (2, "S".to_string(), strings(&["b"])),
            (3, "B".to_string(), strings(&["c"])),
        ]
    );
}

#[test]
fn test_flatten_follows_rule_set_order() {
    let mut rule_sets = RuleSets::new();
    rule_sets
        .rule_set("statements")
        .rule("Stmt")
        .rhs(["Expr", ";"])
        .rhs(["return", "Expr", ";"]);
    rule_sets
        .rule_set("expressions")
        .rule("Expr")
        .rhs(["id", "ExprTail"])
        .rule("ExprTail")
        .rhs(["+", "id", "ExprTail"])
        .rhs([]);

    let flat = flatten(&rule_sets);
    let lhs: Vec<_> = flat.iter().map(|p| p.lhs).collect();
    assert_eq!(lhs, ["Stmt", "Stmt", "Expr", "ExprTail", "ExprTail"]);
    assert!(flat[4].rhs.is_empty());
}

#[test]
fn test_ids_match_positions() {
    let mut rule_sets = example();
    rule_sets
        .rule_set("more")
        .rule("C")
        .rhs(["x"])
        .rhs(["y", "C"]);

    for (position, production) in flatten(&rule_sets).iter().enumerate() {
        assert_eq!(production.id.usize(), position);
        assert_eq!(ProductionId::new(position + 1), Some(production.id));
    }
}

#[test]
fn test_zero_alternatives_take_no_id() {
    let mut rule_sets = RuleSets::new();
    rule_sets
        .rule_set("main")
        .rule("S")
        .rhs(["a"])
        .rule("Unused")
        .rule("T")
        .rhs(["b"]);

    assert_eq!(rule_sets.nonterminals().count(), 3);
    assert_eq!(
        pairs(&rule_sets),
        vec![
            (1, "S".to_string(), strings(&["a"])),
            (2, "T".to_string(), strings(&["b"])),
        ]
    );
}

#[test]
fn test_redeclared_rule_stays_contiguous() {
    let mut rule_sets = RuleSets::new();
    rule_sets.rule_set("main").rule("S").rhs(["a"]).rule("T").rhs(["t"]);
    rule_sets.rule_set("main").rule("S").rhs(["b"]);

    let flat = flatten(&rule_sets);
    let lhs: Vec<_> = flat.iter().map(|p| p.lhs).collect();
    assert_eq!(lhs, ["S", "S", "T"]);
    assert_eq!(
        rule_sets.get("main").unwrap().alternatives("S"),
        Some(&[Alternative::new(["a"]), Alternative::new(["b"])][..])
    );
}

#[test]
fn test_duplicates_are_kept() {
    let mut rule_sets = RuleSets::new();
    rule_sets.rule_set("main").rule("S").rhs(["a"]).rhs(["a"]);
    assert_eq!(flatten(&rule_sets).len(), 2);
}

#[test]
fn test_empty_rule_sets() {
    let rule_sets = RuleSets::new();
    assert!(flatten(&rule_sets).is_empty());
    assert_eq!(rule_sets.num_productions(), 0);
}

#[test_case(1, 1)]
#[test_case(3, 4)]
#[test_case(10, 25)]
fn test_flatten_counts(num_sets: usize, alternatives_per_rule: usize) {
    let mut rule_sets = RuleSets::new();
    for set in 0..num_sets {
        let lhs = format!("N{}", set);
        let mut builder = rule_sets.rule_set(format!("set{}", set)).rule(lhs.as_str());
        for alt in 0..alternatives_per_rule {
            let terminal = format!("t{}", alt);
            builder = builder.rhs([terminal.as_str()]);
        }
    }

    let flat = flatten(&rule_sets);
    assert_eq!(flat.len(), num_sets * alternatives_per_rule);
    assert_eq!(rule_sets.num_productions(), flat.len());
    assert_eq!(flat.last().unwrap().id.get(), flat.len());
    for (chunk_index, chunk) in flat.chunks(alternatives_per_rule).enumerate() {
        let expected_lhs = format!("N{}", chunk_index);
        assert!(chunk.iter().all(|p| p.lhs == expected_lhs));
        let terminals: Vec<_> = chunk.iter().map(|p| p.rhs[0].clone()).collect();
        let expected: Vec<_> = (0..alternatives_per_rule).map(|alt| format!("t{}", alt)).collect();
        assert_eq!(terminals, expected);
    }
}

#[test]
fn test_display() {
    let mut rule_sets = example();
    rule_sets.rule_set("main").rule("E").rhs([]);
    assert_eq!(
        rule_sets.to_string(),
        "S ::= a B;\nS ::= b;\nB ::= c;\nE ::= ();\n"
    );
}
