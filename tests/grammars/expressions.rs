use cfg_ll_table::RuleSets;

/// Arithmetic expressions without left recursion, split over two rule
/// sets.
pub fn expressions() -> RuleSets {
    let mut rule_sets = RuleSets::new();
    rule_sets
        .rule_set("expressions")
        .rule("E")
        .rhs(["T", "E'"])
        .rule("E'")
        .rhs(["+", "T", "E'"])
        .rhs([])
        .rule("T")
        .rhs(["F", "T'"])
        .rule("T'")
        .rhs(["*", "F", "T'"])
        .rhs([]);
    rule_sets
        .rule_set("factors")
        .rule("F")
        .rhs(["(", "E", ")"])
        .rhs(["id"]);
    rule_sets
}

/// A fragment of a C-like language.
pub fn statements() -> RuleSets {
    let mut rule_sets = RuleSets::new();
    rule_sets
        .rule_set("program")
        .rule("Program")
        .rhs(["DeclarationList"])
        .rule("DeclarationList")
        .rhs(["Declaration", "DeclarationList"])
        .rhs([])
        .rule("Declaration")
        .rhs(["int", "ID", "DeclarationTail"])
        .rule("DeclarationTail")
        .rhs([";"])
        .rhs(["(", ")", "CompoundStmt"]);
    rule_sets
        .rule_set("statements")
        .rule("CompoundStmt")
        .rhs(["{", "StatementList", "}"])
        .rule("StatementList")
        .rhs(["Statement", "StatementList"])
        .rhs([])
        .rule("Statement")
        .rhs(["ID", "=", "NUM", ";"])
        .rhs(["return", ";"])
        .rhs(["CompoundStmt"]);
    rule_sets
}
