use pascalina::{
    error::{Error, RuntimeError},
    evaluate_expression,
    interpreter::{
        evaluator::{core::Context, environment::Environment},
        lexer::tokenize,
        parser::core::parse,
        value::Value,
    },
    run_program,
};

fn runtime_err(src: &str) -> RuntimeError {
    match run_program(src) {
        Err(Error::Runtime(e)) => e,
        other => panic!("expected a runtime error, got {other:?}"),
    }
}

#[test]
fn integer_arithmetic_stays_integer() {
    let outcome = run_program("program p; var a, b: integer; begin a := 2; b := 10 * a + 10 * a div 4; end.")
        .unwrap();

    assert_eq!(outcome.variables["a"], Value::Integer(2));
    assert_eq!(outcome.variables["b"], Value::Integer(25));
    assert_eq!(outcome.result, Some(Value::Integer(25)));
}

#[test]
fn slash_always_produces_a_real() {
    assert_eq!(evaluate_expression("10 / 3").unwrap(), Value::Real(10.0 / 3.0));
    assert_eq!(evaluate_expression("10 / 2").unwrap(), Value::Real(5.0));
}

#[test]
fn div_truncates_toward_zero() {
    assert_eq!(evaluate_expression("7 div 2").unwrap(), Value::Integer(3));
    assert_eq!(evaluate_expression("-7 div 2").unwrap(), Value::Integer(-3));
    assert_eq!(evaluate_expression("7.5 div 2").unwrap(), Value::Real(3.0));
    assert_eq!(evaluate_expression("-7.5 div 2").unwrap(), Value::Real(-3.0));
}

#[test]
fn mixed_operands_promote_to_real() {
    assert_eq!(evaluate_expression("1 + 0.5").unwrap(), Value::Real(1.5));
    assert_eq!(evaluate_expression("2 * 2.0").unwrap(), Value::Real(4.0));
    assert_eq!(evaluate_expression("3.0 - 1").unwrap(), Value::Real(2.0));
}

#[test]
fn long_bare_expression() {
    assert_eq!(evaluate_expression("7 + 3 * (10 / (12 / (3 + 1) - 1)) / (2 + 3) - 5 - 3 + (8)").unwrap(),
               Value::Real(10.0));
    assert_eq!(evaluate_expression("7 + 3 * (10 / (12 / (3 + 1) - 1))").unwrap(),
               Value::Real(22.0));
}

#[test]
fn unary_signs() {
    assert_eq!(evaluate_expression("- 3").unwrap(), Value::Integer(-3));
    assert_eq!(evaluate_expression("+ 3").unwrap(), Value::Integer(3));
    assert_eq!(evaluate_expression("5 - - - + - 3").unwrap(), Value::Integer(8));
    assert_eq!(evaluate_expression("5 - - - + - (3 + 4) - +2").unwrap(), Value::Integer(10));
}

#[test]
fn division_by_zero() {
    assert_eq!(runtime_err("program p; var a: integer; begin a := 1 div 0 end."),
               RuntimeError::DivisionByZero { line: 1 });
    assert_eq!(runtime_err("program p; var a: real; begin a := 1.5 / 0 end."),
               RuntimeError::DivisionByZero { line: 1 });
    assert_eq!(runtime_err("program p; var a: real; begin a := 1.5 div 0.0 end."),
               RuntimeError::DivisionByZero { line: 1 });
}

#[test]
fn integer_overflow() {
    assert_eq!(runtime_err("program p; var a: integer; begin a := 9223372036854775807 * 2 end."),
               RuntimeError::Overflow { line: 1 });
    assert_eq!(runtime_err("program p; var a: integer; begin a := -9223372036854775807 - 2 end."),
               RuntimeError::Overflow { line: 1 });
}

#[test]
fn large_integers_still_promote() {
    assert_eq!(evaluate_expression("10000000000000000 / 3").unwrap(),
               Value::Real(10_000_000_000_000_000.0 / 3.0));
    assert_eq!(evaluate_expression("9007199254740993 + 0.5").unwrap(),
               Value::Real(9_007_199_254_740_992.0 + 0.5));
}

#[test]
fn reading_an_unassigned_variable() {
    assert_eq!(runtime_err("program p;\nvar a, b: integer;\nbegin\n  a := b\nend."),
               RuntimeError::UnassignedVariable { name: "b".to_string(),
                                                  line: 4, });
}

#[test]
fn reassignment_replaces_the_value() {
    let outcome = run_program("program p; var a: integer; begin a := 1; a := a + 1; a := a * 10 end.")
        .unwrap();
    assert_eq!(outcome.variables["a"], Value::Integer(20));
}

#[test]
fn variables_are_typed_by_value_not_declaration() {
    let outcome = run_program("program p; var a: integer; b: real; begin a := 1.5; b := 2 end.")
        .unwrap();
    assert_eq!(outcome.variables["a"], Value::Real(1.5));
    assert_eq!(outcome.variables["b"], Value::Integer(2));
}

#[test]
fn result_is_last_assigned_value() {
    let outcome = run_program("program p; var a: integer; begin a := 1; begin a := 2 end; ; end.")
        .unwrap();
    assert_eq!(outcome.result, Some(Value::Integer(2)));

    let outcome = run_program("program p; begin end.").unwrap();
    assert_eq!(outcome.result, None);
    assert!(outcome.variables.is_empty());
}

#[test]
fn context_exposes_the_store() {
    let program = parse(&tokenize("program p; var x, y: integer; begin x := 4; y := x div 3 end.").unwrap())
        .unwrap();
    let mut context = Context::new(Environment::new());
    context.eval_program(&program).unwrap();

    let env = context.into_environment();
    assert_eq!(env.len(), 2);
    assert_eq!(env.get("y"), Some(Value::Integer(1)));
    assert_eq!(env.get("z"), None);
}

#[test]
fn unanalyzed_tree_reports_unknown_variable() {
    let program = parse(&tokenize("program p; begin x := y end.").unwrap()).unwrap();
    let mut context = Context::new(Environment::new());

    assert_eq!(context.eval_program(&program),
               Err(RuntimeError::UnknownVariable { name: "y".to_string(),
                                                   line: 1, }));
}

#[test]
fn values_display() {
    assert_eq!(Value::Integer(25).to_string(), "25");
    assert_eq!(Value::Real(10.0).to_string(), "10.0");
    assert_eq!(Value::Real(2.5).to_string(), "2.5");
}
