use std::path::Path;

use pretty_assertions::assert_eq;
use quill::{
    Interpreter,
    error::{Error, ErrorKind, ParseError, RuntimeError},
    interpreter::value::core::Value,
    loader::{FsLoader, MemoryLoader},
    run,
};
use walkdir::WalkDir;

const SCRIPTS: &str = "tests/scripts";

#[test]
fn script_corpus_passes() {
    let mut count = 0;

    for entry in
        WalkDir::new(SCRIPTS).max_depth(1)
                             .into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "ql"))
    {
        count += 1;
        let name = entry.file_name().to_string_lossy().into_owned();
        let mut interpreter = Interpreter::new().with_loader(FsLoader::new(SCRIPTS));

        if let Err(e) = interpreter.run_file(&name) {
            panic!("Script {name} failed:\n{e}");
        }
        assert_eq!(interpreter.get("passed"),
                   Some(&Value::Bool(true)),
                   "script {name} did not set passed = True");
    }

    assert!(count > 0, "No scripts found in {SCRIPTS}");
}

fn assert_success(src: &str) -> Interpreter {
    run(src).unwrap_or_else(|e| panic!("Expected success for {src:?}, got error: {e}"))
}

fn assert_failure(src: &str, kind: ErrorKind) -> Error {
    match run(src) {
        Ok(interpreter) => panic!("Expected failure for {src:?}, got {interpreter:?}"),
        Err(e) => {
            assert_eq!(e.kind(), kind, "wrong kind of failure for {src:?}: {e}");
            e
        },
    }
}

fn number(interpreter: &Interpreter, name: &str) -> f64 {
    match interpreter.get(name) {
        Some(Value::Number(n)) => *n,
        other => panic!("Expected {name} to be a number, found {other:?}"),
    }
}

#[test]
fn function_call_with_arithmetic_argument() {
    let interpreter = assert_success("b = Function(x, y) { Return x + y; }; a = b(4, 1 + 3);");
    assert_eq!(number(&interpreter, "a"), 8.0);
}

#[test]
fn assignment_inside_if_shadows() {
    let interpreter = assert_success("x = 1; If (True) { x = 2; };");
    assert_eq!(number(&interpreter, "x"), 1.0);
}

#[test]
fn ref_assignment_inside_if_writes_back() {
    let interpreter = assert_success("x = 1; If (True) { x =& 2; };");
    assert_eq!(number(&interpreter, "x"), 2.0);
}

#[test]
fn loop_counts_up() {
    let interpreter = assert_success("i = 0; Loop (i < 3) { i =& i + 1; };");
    assert_eq!(number(&interpreter, "i"), 3.0);
}

#[test]
fn division_by_zero_is_its_own_kind() {
    let err = assert_failure("3 / 0;", ErrorKind::DivideByZero);
    assert!(matches!(err, Error::DivideByZero(_)));
}

#[test]
fn table_lookup_and_absent_key() {
    let mut interpreter = assert_success(r#"t = [3: 4, "k": True]; a = t[3];"#);
    assert_eq!(number(&interpreter, "a"), 4.0);

    interpreter.run("a = t[9];").unwrap();
    assert_eq!(interpreter.get("a"), Some(&Value::Null));
}

#[test]
fn nested_return_has_no_function_frame() {
    let err = assert_failure("f = Function() { If (True) { Return 1; }; }; f();",
                             ErrorKind::Runtime);
    assert!(matches!(err, Error::Runtime(RuntimeError::NoFunctionFrame { line: 1 })));
}

#[test]
fn return_inside_loop_has_no_function_frame() {
    let err = assert_failure("f = Function() { Loop (True) { Return 1; }; }; f();",
                             ErrorKind::Runtime);
    assert!(matches!(err, Error::Runtime(RuntimeError::NoFunctionFrame { line: 1 })));
}

#[test]
fn precedence_and_associativity() {
    let interpreter = assert_success("a = 1 + 2 * 3; b = 2 * 3 + 1; c = 8 - 2 - 1; d = -2 * 3;");
    assert_eq!(number(&interpreter, "a"), 7.0);
    assert_eq!(number(&interpreter, "b"), 7.0);
    assert_eq!(number(&interpreter, "c"), 5.0);
    assert_eq!(number(&interpreter, "d"), -6.0);
}

#[test]
fn assignment_never_touches_outer_scopes() {
    let interpreter = assert_success("x = 1; f = Function() { x = 99; }; f(); \
                                      If (True) { Loop (False) { }; x = 5; };");
    assert_eq!(number(&interpreter, "x"), 1.0);
}

#[test]
fn ref_assignment_to_unknown_name_fails() {
    let err = assert_failure("If (True) { y =& 1; };", ErrorKind::Runtime);
    assert!(matches!(err,
                     Error::Runtime(RuntimeError::UnidentifiedReference { ref name, .. }) if name == "y"));
}

#[test]
fn tables_are_shared_by_reference() {
    let interpreter = assert_success("t = []; u = t; u[1] = 5; a = t[1];");
    assert_eq!(number(&interpreter, "a"), 5.0);
}

#[test]
fn effects_before_a_runtime_error_are_kept() {
    let mut interpreter = Interpreter::new();
    let err = interpreter.run("a = 1; b = a / 0; c = 3;").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DivideByZero);
    assert_eq!(interpreter.get("a"), Some(&Value::Number(1.0)));
    assert_eq!(interpreter.get("c"), None);
}

#[test]
fn parse_errors_prevent_execution() {
    let mut interpreter = Interpreter::new();
    let err = interpreter.run("a = 1; b = ;").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert_eq!(interpreter.get("a"), None);
}

#[test]
fn lexical_errors() {
    assert_failure("a = 1.;", ErrorKind::Lex);
    assert_failure("a = 1.2.3;", ErrorKind::Lex);
    assert_failure("a = \"open;", ErrorKind::Lex);
    assert_failure("a = 1 $ 2;", ErrorKind::Lex);
    assert_failure("abcdefghijklmnopqrstuvwxyz = 1;", ErrorKind::Lex);
}

#[test]
fn errors_report_their_line() {
    let err = assert_failure("a = 1;\nb = 2;\nc = d;", ErrorKind::Runtime);
    assert_eq!(err.to_string(), "Error on line 3: Undefined identifier 'd'.");
}

#[test]
fn syntax_errors() {
    assert_failure("a = 1", ErrorKind::Parse);
    assert_failure("a = 1 < 2 < 3;", ErrorKind::Parse);
    assert_failure("t = [1: 2,];", ErrorKind::Parse);
    assert_failure("f = Function(x,) { };", ErrorKind::Parse);
    assert_failure("If (True) { a = 1; }", ErrorKind::Parse);
    assert_failure("Get 5;", ErrorKind::Parse);
}

#[test]
fn type_errors() {
    assert_failure("a = 1 + True;", ErrorKind::Runtime);
    assert_failure("a = \"x\" * 2;", ErrorKind::Runtime);
    assert_failure("If (1) { };", ErrorKind::Runtime);
    assert_failure("a = 5; a();", ErrorKind::Runtime);
    assert_failure("a = 5; b = a[1];", ErrorKind::Runtime);
    assert_failure("t = []; t[t] = 1;", ErrorKind::Runtime);
}

#[test]
fn imports_run_in_the_importing_scope() {
    let loader = MemoryLoader::new().with_file("lib.ql", "double = Function(x) { Return x * 2; };");
    let mut interpreter = Interpreter::new().with_loader(loader);
    interpreter.run(r#"Get "lib.ql"; a = double(21);"#).unwrap();
    assert_eq!(interpreter.get("a"), Some(&Value::Number(42.0)));
}

#[test]
fn errors_in_imports_name_the_file() {
    let loader = MemoryLoader::new().with_file("bad.ql", "x = 1;\ny = x / 0;");
    let mut interpreter = Interpreter::new().with_loader(loader);
    let err = interpreter.run(r#"Get "bad.ql";"#).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::DivideByZero);
    assert_eq!(err.to_string(),
               "Error on line 2: Division by zero. (in file 'bad.ql')");
}

#[test]
fn imported_functions_keep_their_file() {
    let loader = MemoryLoader::new().with_file("lib.ql", "\n\nd = Function(v) { Return v / 0; };")
                                    .with_file("main.ql", "Get \"lib.ql\";\na = d(1);");
    let mut interpreter = Interpreter::new().with_loader(loader);

    let err = interpreter.run("Get \"lib.ql\"; a = d(1);").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DivideByZero);
    assert_eq!(err.to_string(),
               "Error on line 3: Division by zero. (in file 'lib.ql')");

    let err = interpreter.run_file("main.ql").unwrap_err();
    assert_eq!(err.to_string(),
               "Error on line 3: Division by zero. (in file 'lib.ql') (in file 'main.ql')");
}

#[test]
fn missing_and_cyclic_imports() {
    let loader = MemoryLoader::new().with_file("a.ql", r#"Get "b.ql";"#)
                                    .with_file("b.ql", r#"Get "a.ql";"#);
    let interpreter = Interpreter::new().with_loader(loader);

    let err = interpreter.parse(r#"Get "nope.ql";"#).unwrap_err();
    assert!(matches!(err, Error::Parse(ParseError::ImportNotFound { .. })));

    let err = interpreter.parse(r#"Get "a.ql";"#).unwrap_err();
    assert!(matches!(err.root(), Error::Parse(ParseError::CyclicImport { file, .. }) if file == "a.ql"));
}

#[test]
fn run_file_resolves_imports_next_to_the_script() {
    assert!(Path::new(SCRIPTS).join("lib/math.ql").exists());

    let mut interpreter = Interpreter::new().with_loader(FsLoader::new(SCRIPTS));
    interpreter.run_file("imports.ql").unwrap();
    assert_eq!(interpreter.get("math_loaded"), Some(&Value::Bool(true)));

    let err = interpreter.run_file("missing.ql").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn bindings_are_sorted() {
    let interpreter = assert_success("b = 2; a = 1; c = \"three\";");
    let names: Vec<_> = interpreter.bindings().map(|(name, _)| name).collect();
    assert_eq!(names, ["a", "b", "c"]);
}
