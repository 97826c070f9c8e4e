use std::fs::{self};

use glint::{
    Callable, Error, Interpreter, ParseError, RuntimeError, Value, Variable,
    ast::{Expr, Statement},
};
use walkdir::WalkDir;

/// The environment every example in the docs is written against.
fn fixture() -> Interpreter {
    let increment = Callable::new("increment", |caller, args| match (caller, args) {
        (Some(Value::Number(n)), [Value::Number(by)]) => Ok(Value::Number(n + by)),
        (Some(Value::Number(n)), []) => Ok(Value::Number(n + 1.0)),
        _ => Err("expected a number receiver".to_string()),
    });
    let toggle = Callable::new("toggle", |caller, _| match caller {
        Some(Value::Boolean(b)) => Ok(Value::Boolean(!b)),
        _ => Err("expected a bool receiver".to_string()),
    });
    let greet = Callable::new("greet", |_, args| match args {
        [Value::Text(name)] => Ok(Value::Text(format!("Hello, {name}!"))),
        _ => Err("expected one string".to_string()),
    });

    Interpreter::new(vec![Variable::new("a", 2.0),
                          Variable::new("price", 12.5),
                          Variable::new("quantity", 3),
                          Variable::new("name", "Widget"),
                          Variable::new("in_stock", true)],
                     vec![increment, toggle, greet])
}

#[test]
fn doc_examples_work() {
    let interpreter = fixture();
    let mut count = 0;

    for entry in
        WalkDir::new("docs").into_iter()
                            .filter_map(Result::ok)
                            .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (code, expected)) in extract_glint_blocks(&content).into_iter().enumerate() {
            count += 1;
            match interpreter.interpret(&code) {
                Ok(value) => {
                    if let Some(expected) = expected {
                        assert_eq!(value.to_string(),
                                   expected,
                                   "glint example {} in {:?} printed the wrong value:\n{}",
                                   i + 1,
                                   path,
                                   code);
                    }
                },
                Err(e) => panic!("glint example {} in {:?} failed:\n{}\nError: {:?}",
                                 i + 1,
                                 path,
                                 code,
                                 e),
            }
        }
    }

    assert!(count > 0, "No glint examples found in docs");
}

/// Collects the contents of every ```` ```glint ```` block, along with the
/// expected output given as ```` ```glint => output ````.
fn extract_glint_blocks(content: &str) -> Vec<(String, Option<String>)> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut expected = None;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if let Some(info) = trimmed.strip_prefix("```glint") {
            inside = true;
            expected = info.trim().strip_prefix("=>").map(|s| s.trim().to_string());
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push((buf.clone(), expected.take()));
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn eval(src: &str) -> Value {
    fixture().interpret(src)
             .unwrap_or_else(|e| panic!("Expression {src:?} failed: {e}"))
}

fn runtime_error(src: &str) -> RuntimeError {
    match fixture().interpret(src) {
        Err(Error::Runtime(e)) => e,
        other => panic!("Expected a runtime error from {src:?}, got {other:?}"),
    }
}

fn parse_error(src: &str) -> ParseError {
    match fixture().interpret(src) {
        Err(Error::Parse(e)) => e,
        other => panic!("Expected a parse error from {src:?}, got {other:?}"),
    }
}

#[test]
fn arithmetic_and_precedence() {
    assert_eq!(eval("(3 + 3) + (2 * 4)"), Value::Number(14.0));
    assert_eq!(eval("-1+1"), Value::Number(0.0));
    assert_eq!(eval("2 + 3 * 4"), Value::Number(14.0));
    assert_eq!(eval("10 - 4 - 3"), Value::Number(3.0));
    assert_eq!(eval("100 / 10 / 5"), Value::Number(2.0));
    assert_eq!(eval("--3"), Value::Number(3.0));
    assert_eq!(eval("25 / 4"), Value::Number(6.25));
}

#[test]
fn addition_coerces_numbers_to_text() {
    assert_eq!(eval("\"$\"+(100/25)"), Value::from("$4"));
    assert_eq!(eval("1+\"a\""), Value::from("1a"));
    assert_eq!(eval("1+\"1\"+1"), Value::from("111"));
    assert_eq!(eval("\"a\" + \"b\""), Value::from("ab"));
    assert_eq!(eval("\"x\" + 0.5"), Value::from("x0.5"));
}

#[test]
fn logic_and_comparisons() {
    assert_eq!(eval("!true"), Value::Boolean(false));
    assert_eq!(eval("!(1 == 1)"), Value::Boolean(false));
    assert_eq!(eval("!nil"), Value::Boolean(true));
    assert_eq!(eval("!0"), Value::Boolean(false));
    assert_eq!(eval("2 < 3"), Value::Boolean(true));
    assert_eq!(eval("3 >= 3"), Value::Boolean(true));
    assert_eq!(eval("2 > 3"), Value::Boolean(false));
    assert_eq!(eval("2 <= 1"), Value::Boolean(false));
    assert_eq!(eval("\"a\" == \"a\""), Value::Boolean(true));
    assert_eq!(eval("1 == \"1\""), Value::Boolean(false));
    assert_eq!(eval("nil == nil"), Value::Boolean(true));
    assert_eq!(eval("1 != 2"), Value::Boolean(true));
}

#[test]
fn runtime_errors() {
    assert_eq!(runtime_error("1/0"), RuntimeError::DivisionByZero { offset: 1 });
    assert_eq!(runtime_error("-true"),
               RuntimeError::OperandMustBeNumber { operator: "-".to_string(),
                                                   offset:   0, });
    assert!(matches!(runtime_error("-\"foo\""),
                     RuntimeError::OperandMustBeNumber { .. }));
    assert_eq!(runtime_error("1 < \"2\""),
               RuntimeError::OperandsMustBeNumbers { operator: "<".to_string(),
                                                     offset:   2, });
    assert_eq!(runtime_error("true + 1"),
               RuntimeError::InvalidAddition { left:   "bool".to_string(),
                                               right:  "number".to_string(),
                                               offset: 5, });
    assert!(matches!(runtime_error("\"a\" * 2"),
                     RuntimeError::OperandsMustBeNumbers { .. }));
}

#[test]
fn interpolation() {
    assert_eq!(eval("\"$\\(25/4)\""), Value::from("$6.25"));
    assert_eq!(eval(r#""leading\("1" + 2)trailing""#),
               Value::from("leading12trailing"));
    assert_eq!(eval(r#""\(name) costs \(price * quantity)""#),
               Value::from("Widget costs 37.5"));
    assert_eq!(eval(r#""\(in_stock)""#), Value::from("true"));
    assert_eq!(eval(r#""(\((1 + 2) * 3))""#), Value::from("(9)"));
    assert_eq!(eval(r#""""#), Value::from(""));
    assert_eq!(eval(r#""\(nil)""#), Value::Nil);
}

#[test]
fn escapes() {
    assert_eq!(eval(r#""say \"hi\"""#), Value::from("say \"hi\""));
    assert_eq!(eval(r#""a\nb""#), Value::from("a\nb"));
    assert_eq!(eval(r#""back\\slash""#), Value::from("back\\slash"));
    assert_eq!(eval(r#""\q""#), Value::from("\\q"));
}

#[test]
fn method_dispatch() {
    assert_eq!(eval("a.increment(1)"), Value::Number(3.0));
    assert_eq!(eval("a.increment(1).increment(2)"), Value::Number(5.0));
    assert_eq!(eval("false.toggle().toggle()"), Value::Boolean(false));
    assert_eq!(eval("greet(name)"), Value::from("Hello, Widget!"));
    assert_eq!(eval("(1 + 1).increment()"), Value::Number(3.0));
}

#[test]
fn method_access_without_call_is_a_bound_function() {
    match eval("a.increment") {
        Value::Callable(f) => {
            assert_eq!(f.selector(), "increment");
            assert_eq!(f.caller(), Some(&Value::Number(2.0)));
        },
        other => panic!("Expected a callable, got {other:?}"),
    }
    assert_eq!(eval("a.increment").to_string(), "<fn increment>");
}

#[test]
fn unbound_identifiers_are_nil() {
    assert_eq!(eval("missing"), Value::Nil);
    assert_eq!(eval("missing == nil"), Value::Boolean(true));
    assert_eq!(eval("!missing"), Value::Boolean(true));
}

#[test]
fn call_errors() {
    assert_eq!(runtime_error("missing(1)"),
               RuntimeError::UnknownFunction { name:   "missing".to_string(),
                                               offset: 7, });
    assert_eq!(runtime_error("2(1)"),
               RuntimeError::NotCallable { found:  "number".to_string(),
                                           offset: 1, });
    assert_eq!(runtime_error("2.nothing"),
               RuntimeError::UnknownMethod { name:   "nothing".to_string(),
                                             offset: 2, });
    assert_eq!(runtime_error("\"a\".rounded()"),
               RuntimeError::CallFailed { selector: "rounded".to_string(),
                                          message:  "expected a number, found string".to_string(),
                                          offset:   11, });
    assert!(matches!(runtime_error("name.increment(1)"),
                     RuntimeError::CallFailed { .. }));
}

#[test]
fn builtin_functions() {
    assert_eq!(eval("3.14159.formatted(2)"), Value::from("3.14"));
    assert_eq!(eval("price.formatted()"), Value::from("12.5"));
    assert_eq!(eval("formatted(2.5)"), Value::from("2.5"));
    assert_eq!(eval("formatted(2, 3)"), Value::from("2.000"));
    assert_eq!(eval("2.5.rounded()"), Value::Number(3.0));
    assert_eq!(eval("-2.5.rounded()"), Value::Number(-3.0));
    assert_eq!(eval("rounded(price)"), Value::Number(13.0));
    assert_eq!(eval("name.uppercased()"), Value::from("WIDGET"));
    assert_eq!(eval("lowercased(\"MiXeD\")"), Value::from("mixed"));
}

#[test]
fn builtin_argument_errors() {
    assert!(matches!(runtime_error("1.formatted(20)"),
                     RuntimeError::CallFailed { .. }));
    assert!(matches!(runtime_error("1.formatted(1.5)"),
                     RuntimeError::CallFailed { .. }));
    assert!(matches!(runtime_error("1.formatted(1, 2)"),
                     RuntimeError::CallFailed { .. }));
    assert!(matches!(runtime_error("rounded()"),
                     RuntimeError::CallFailed { .. }));
    assert!(matches!(runtime_error("1.uppercased()"),
                     RuntimeError::CallFailed { .. }));
}

#[test]
fn host_functions_shadow_builtins() {
    let rounded = Callable::new("rounded", |_, _| Ok(Value::from("custom")));
    let interpreter = Interpreter::new(Vec::new(), vec![rounded]);

    assert_eq!(interpreter.interpret("1.5.rounded()"), Ok(Value::from("custom")));
}

#[test]
fn variables_shadow_functions() {
    let interpreter = Interpreter::new(vec![Variable::new("rounded", 7)], Vec::new());

    assert_eq!(interpreter.interpret("rounded"), Ok(Value::Number(7.0)));
    assert_eq!(interpreter.interpret("1.4.rounded()"), Ok(Value::Number(1.0)));
}

#[test]
fn empty_source_is_nil() {
    assert_eq!(eval(""), Value::Nil);
    assert_eq!(eval("   \n\t"), Value::Nil);
    assert_eq!(eval("#"), Value::Nil);
}

#[test]
fn parse_errors() {
    assert_eq!(parse_error("1 +"), ParseError::UnexpectedEndOfInput { offset: 3 });
    assert_eq!(parse_error("(1 + 2"), ParseError::UnexpectedEndOfInput { offset: 6 });
    assert_eq!(parse_error("1 2"),
               ParseError::UnexpectedTrailingTokens { token:  "'2'".to_string(),
                                                      offset: 2, });
    assert_eq!(parse_error("a.(1)"),
               ParseError::ExpectedMethodName { token:  "'('".to_string(),
                                                offset: 2, });
    assert_eq!(parse_error("f(1 2)"),
               ParseError::ExpectedClosingParen { token:  "'2'".to_string(),
                                                  offset: 4, });
    assert_eq!(parse_error("*"),
               ParseError::UnexpectedToken { token:  "'*'".to_string(),
                                             offset: 0, });
    assert_eq!(parse_error(r#""\(1 2)""#),
               ParseError::ExpectedInterpolationEnd { token:  "'2'".to_string(),
                                                      offset: 5, });
    assert!(matches!(parse_error("1 && 2"),
                     ParseError::UnexpectedTrailingTokens { .. }));
}

#[test]
fn unterminated_string_is_skipped() {
    // The literal becomes trivia, leaving nothing to evaluate.
    assert_eq!(eval("\"open"), Value::Nil);
    assert!(matches!(parse_error("1 + \"open"),
                     ParseError::UnexpectedEndOfInput { .. }));
}

#[test]
fn execute_returns_nil_for_several_statements() {
    let interpreter = fixture();
    let one = Statement::Expression(Expr::LiteralNumber(1.0));
    let two = Statement::Expression(Expr::LiteralNumber(2.0));

    assert_eq!(interpreter.execute(std::slice::from_ref(&one)), Ok(Value::Number(1.0)));
    assert_eq!(interpreter.execute(&[one, two]), Ok(Value::Nil));
    assert_eq!(interpreter.execute(&[]), Ok(Value::Nil));
}

#[test]
fn execute_stops_at_first_error() {
    let interpreter = fixture();
    let failing = Statement::Expression(Expr::binary(Expr::LiteralNumber(1.0),
                                                     glint::ast::BinaryOperator::Div,
                                                     Expr::LiteralNumber(0.0),
                                                     1));
    let fine = Statement::Expression(Expr::LiteralNil);

    assert_eq!(interpreter.execute(&[failing, fine]),
               Err(RuntimeError::DivisionByZero { offset: 1 }));
}

#[test]
fn evaluate_or_falls_back() {
    let interpreter = fixture();

    assert_eq!(interpreter.evaluate_or("price * 2", 0.0), 25.0);
    assert_eq!(interpreter.evaluate_or("price / 0", -1.0), -1.0);
    assert_eq!(interpreter.evaluate_or("name", String::new()), "Widget");
    assert_eq!(interpreter.evaluate_or("price", String::from("none")), "none");
    assert!(interpreter.evaluate_or("in_stock", false));
    assert!(interpreter.evaluate_or("1 +", true));
}

#[test]
fn evaluation_is_deterministic() {
    let interpreter = fixture();
    let src = r#""\(name): \(price.formatted(2)) x \(quantity)""#;

    let first = interpreter.interpret(src);
    assert_eq!(first, Ok(Value::from("Widget: 12.50 x 3")));
    for _ in 0..10 {
        assert_eq!(interpreter.interpret(src), first);
    }
}

#[test]
fn interpret_shorthand() {
    assert_eq!(glint::interpret("x * x", vec![Variable::new("x", 4)], Vec::new()),
               Ok(Value::Number(16.0)));
}

#[test]
fn interpreter_is_shareable_across_threads() {
    let interpreter = fixture();

    std::thread::scope(|scope| {
        let handles = (0..4).map(|i| {
                                let interpreter = &interpreter;
                                scope.spawn(move || interpreter.interpret(&format!("a + {i}")))
                            })
                            .collect::<Vec<_>>();
        for (i, handle) in handles.into_iter().enumerate() {
            let expected = 2.0 + f64::from(u8::try_from(i).unwrap());
            assert_eq!(handle.join().unwrap(), Ok(Value::Number(expected)));
        }
    });
}
