use pascalina::{
    error::SemanticError,
    interpreter::{
        analyzer::core::{SemanticAnalyzer, analyze},
        lexer::tokenize,
        parser::core::{parse, parse_bare_expression},
    },
};

fn check(src: &str) -> Result<(), SemanticError> {
    analyze(&parse(&tokenize(src).unwrap()).unwrap())
}

#[test]
fn well_scoped_program_passes() {
    let src = "program main;
                 var x, y: real;
                 procedure alpha(a: integer);
                   var y: integer;
                 begin
                   x := a + x + y
                 end;
               begin
                 x := 1
               end.";
    assert_eq!(check(src), Ok(()));
}

#[test]
fn duplicate_in_one_scope() {
    let err = check("program p;\nvar a: integer;\n    a: real;\nbegin end.").unwrap_err();
    assert_eq!(err,
               SemanticError::DuplicateIdentifier { name:  "a".to_string(),
                                                    scope: "global".to_string(),
                                                    line:  3, });
}

#[test]
fn duplicate_inside_a_procedure_names_that_scope() {
    let err = check("program p; procedure q(a: integer); var a: real; begin end; begin end.")
        .unwrap_err();
    assert!(matches!(&err, SemanticError::DuplicateIdentifier { scope, .. } if scope == "q"),
            "got {err:?}");
}

#[test]
fn inner_scope_may_shadow() {
    assert_eq!(check("program p; var a: integer; procedure q; var a: real; begin a := 1.5 end; \
                      begin a := 1 end."),
               Ok(()));
}

#[test]
fn enclosing_variables_are_visible_in_procedures() {
    assert_eq!(check("program p; var a: integer; procedure q; begin a := 1 end; begin end."),
               Ok(()));
}

#[test]
fn undeclared_assignment_target() {
    let err = check("program p;\nbegin\n  total := 1\nend.").unwrap_err();
    assert_eq!(err,
               SemanticError::UndeclaredIdentifier { name: "total".to_string(),
                                                     line: 3, });
}

#[test]
fn procedure_locals_are_not_visible_outside() {
    let err = check("program p; procedure q; var z: integer; begin end; begin z := 1 end.")
        .unwrap_err();
    assert!(matches!(&err, SemanticError::UndeclaredIdentifier { name, .. } if name == "z"),
            "got {err:?}");
}

#[test]
fn lookups_are_case_insensitive() {
    assert_eq!(check("program p; var Count: integer; begin COUNT := count + 1 end."), Ok(()));
}

#[test]
fn analyzer_returns_to_global_scope() {
    let program = parse(&tokenize("program p; procedure a; procedure b; begin end; begin end; \
                                   begin end.").unwrap()).unwrap();
    let mut analyzer = SemanticAnalyzer::new();
    analyzer.analyze_program(&program).unwrap();

    let global = analyzer.scopes().current();
    assert_eq!(global.name(), "global");
    assert_eq!(global.level(), 1);
    let names: Vec<_> = global.symbols().map(|s| s.name().to_string()).collect();
    assert_eq!(names, vec!["integer", "real", "a"]);
}

#[test]
fn procedure_names_are_not_variables() {
    let err = check("program p; var a: integer; procedure q; begin end; begin a := q end.")
        .unwrap_err();
    assert!(matches!(&err, SemanticError::NotAVariable { name, .. } if name == "q"),
            "got {err:?}");

    let err = check("program p;\nprocedure q; begin end;\nbegin\n  q := 1\nend.").unwrap_err();
    assert_eq!(err,
               SemanticError::NotAVariable { name: "q".to_string(),
                                             line: 4, });
}

#[test]
fn bare_expressions_cannot_reference_variables() {
    let expr = parse_bare_expression(&tokenize("1 + x").unwrap()).unwrap();
    let err = SemanticAnalyzer::new().analyze_expression(&expr).unwrap_err();
    assert!(matches!(err, SemanticError::UndeclaredIdentifier { .. }));
}
