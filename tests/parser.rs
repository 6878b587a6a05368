use pascalina::{
    ast::{BinaryOperator, Declaration, Expr, LiteralValue, Statement, TypeName, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::tokenize,
        parser::core::{parse, parse_bare_expression},
    },
};

fn expr(src: &str) -> Expr {
    parse_bare_expression(&tokenize(src).unwrap()).unwrap()
}

fn parse_err(src: &str) -> ParseError {
    parse(&tokenize(src).unwrap()).unwrap_err()
}

fn int(value: i64) -> Expr {
    Expr::Literal { value: LiteralValue::Integer(value),
                    line:  1, }
}

fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    Expr::BinaryOp { left: Box::new(left),
                     op,
                     right: Box::new(right),
                     line: 1 }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(expr("1 + 2 * 3"),
               binary(int(1), BinaryOperator::Add, binary(int(2), BinaryOperator::Mul, int(3))));
}

#[test]
fn operators_associate_left() {
    assert_eq!(expr("8 - 4 - 2"),
               binary(binary(int(8), BinaryOperator::Sub, int(4)), BinaryOperator::Sub, int(2)));
    assert_eq!(expr("8 div 4 / 2"),
               binary(binary(int(8), BinaryOperator::IntegerDiv, int(4)),
                      BinaryOperator::FloatDiv,
                      int(2)));
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(expr("(1 + 2) * 3"),
               binary(binary(int(1), BinaryOperator::Add, int(2)), BinaryOperator::Mul, int(3)));
}

#[test]
fn unary_signs_nest() {
    let negated = Expr::UnaryOp { op:   UnaryOperator::Negate,
                                  expr: Box::new(int(3)),
                                  line: 1, };
    assert_eq!(expr("- - 3"),
               Expr::UnaryOp { op:   UnaryOperator::Negate,
                               expr: Box::new(negated),
                               line: 1, });
    assert_eq!(expr("+3"),
               Expr::UnaryOp { op:   UnaryOperator::Plus,
                               expr: Box::new(int(3)),
                               line: 1, });
}

#[test]
fn unclosed_parenthesis_is_rejected() {
    let err = parse_bare_expression(&tokenize("(2 + 3").unwrap()).unwrap_err();
    assert_eq!(err,
               ParseError::UnexpectedToken { expected: "')'".to_string(),
                                             found:    "end of input".to_string(),
                                             line:     1,
                                             column:   7, });
}

#[test]
fn trailing_tokens_are_rejected() {
    let err = parse_bare_expression(&tokenize("1 2").unwrap()).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedTrailingTokens { column: 3, .. }),
            "got {err:?}");

    let err = parse_err("program p; begin end. x");
    assert!(matches!(err, ParseError::UnexpectedTrailingTokens { .. }), "got {err:?}");
}

#[test]
fn program_structure() {
    let src = "program Demo;\nvar a, b: integer;\n    c: real;\nbegin\n  a := 1;\n  begin b := a end;\nend.";
    let program = parse(&tokenize(src).unwrap()).unwrap();

    assert_eq!(program.name, "demo");
    let names: Vec<_> = program.block
                               .declarations
                               .iter()
                               .map(|d| match d {
                                   Declaration::Variable(v) => (v.name.as_str(), v.type_spec.name),
                                   Declaration::Procedure(_) => panic!("unexpected procedure"),
                               })
                               .collect();
    assert_eq!(names,
               vec![("a", TypeName::Integer), ("b", TypeName::Integer), ("c", TypeName::Real)]);

    let children = &program.block.compound.children;
    assert_eq!(children.len(), 3);
    assert!(matches!(&children[0], Statement::Assign { target, line: 5, .. } if target.name == "a"));
    assert!(matches!(&children[1], Statement::Compound(inner) if inner.children.len() == 1));
    assert_eq!(children[2], Statement::NoOp);
}

#[test]
fn procedures_with_parameters() {
    let src = "program p; procedure alpha(a, b: integer; c: real); var x: integer; begin end; \
               procedure beta; begin end; begin end.";
    let program = parse(&tokenize(src).unwrap()).unwrap();

    let Declaration::Procedure(alpha) = &program.block.declarations[0] else {
        panic!("expected a procedure");
    };
    assert_eq!(alpha.name, "alpha");
    let params: Vec<_> = alpha.params.iter().map(|p| (p.name.as_str(), p.type_spec.name)).collect();
    assert_eq!(params,
               vec![("a", TypeName::Integer), ("b", TypeName::Integer), ("c", TypeName::Real)]);
    assert_eq!(alpha.block.declarations.len(), 1);

    let Declaration::Procedure(beta) = &program.block.declarations[1] else {
        panic!("expected a procedure");
    };
    assert!(beta.params.is_empty());
}

#[test]
fn errors_name_expected_and_found() {
    let err = parse_err("program p;\nvar x integer;\nbegin end.");
    assert_eq!(err.to_string(), "Error on line 2, column 7: Expected ':', found 'integer'.");

    let err = parse_err("program p; begin x := end.");
    assert!(matches!(&err, ParseError::UnexpectedToken { expected, .. } if expected == "an expression"),
            "got {err:?}");

    let err = parse_err("program p; begin end");
    assert!(matches!(&err, ParseError::UnexpectedToken { found, .. } if found == "end of input"),
            "got {err:?}");
}

#[test]
fn missing_separator_between_statements() {
    let err = parse_err("program p; var a: integer; begin a := 1 a := 2 end.");
    assert!(matches!(&err, ParseError::UnexpectedToken { expected, found, .. }
                          if expected == "'end'" && found == "identifier 'a'"),
            "got {err:?}");
}
