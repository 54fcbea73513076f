//! Black-box scenarios driving the library's public API directly (spec §8
//! "End-to-end scenarios"), in-process rather than spawning a binary.
//!
//! `print` writes straight to the process's real stdout (see
//! `src/interpreter/stmt.rs`), so these tests assert on the `Diagnostics`
//! flags each scenario should leave behind rather than on captured stdout
//! text; process-boundary tests in `tests/cli.rs` cover actual stdout
//! content via `assert_cmd`.

use rook::diagnostics::Diagnostics;
use rook::driver;

fn run(source: &str) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    driver::run_source(source, &mut diagnostics);
    diagnostics
}

#[test]
fn test_scenario_arithmetic_runs_clean() {
    let diagnostics = run("print 1 + 2;");
    assert!(!diagnostics.had_error());
    assert!(!diagnostics.had_runtime_error());
}

#[test]
fn test_scenario_string_concatenation_runs_clean() {
    let diagnostics = run("print \"a\" + \"b\";");
    assert!(!diagnostics.had_error());
    assert!(!diagnostics.had_runtime_error());
}

#[test]
fn test_scenario_mixed_plus_operands_is_a_runtime_error() {
    let diagnostics = run("print 1 + \"a\";");
    assert!(!diagnostics.had_error());
    assert!(diagnostics.had_runtime_error());
}

#[test]
fn test_scenario_closure_capture_runs_clean() {
    let diagnostics = run(
        "fun makeCounter() { var i = 0; fun count() { i = i + 1; print i; } return count; } \
         var c = makeCounter(); c(); c(); c();",
    );
    assert!(!diagnostics.had_error());
    assert!(!diagnostics.had_runtime_error());
}

#[test]
fn test_scenario_shadowing_runs_clean() {
    let diagnostics = run(
        "var a = \"global\"; { var a = \"outer\"; { var a = \"inner\"; print a; } print a; } print a;",
    );
    assert!(!diagnostics.had_error());
    assert!(!diagnostics.had_runtime_error());
}

#[test]
fn test_scenario_for_loop_desugars_and_runs_clean() {
    let diagnostics = run("for (var i = 0; i < 3; i = i + 1) print i;");
    assert!(!diagnostics.had_error());
    assert!(!diagnostics.had_runtime_error());
}

#[test]
fn test_scenario_initializer_self_read_is_a_resolution_error() {
    let diagnostics = run("{ var a = a; }");
    assert!(diagnostics.had_error());
    assert!(!diagnostics.had_runtime_error());
}

#[test]
fn test_scenario_top_level_return_is_a_resolution_error() {
    let diagnostics = run("return;");
    assert!(diagnostics.had_error());
    assert!(!diagnostics.had_runtime_error());
}

#[test]
fn test_scenario_class_instance_and_method_call_runs_clean() {
    let diagnostics = run(
        "class Greeter { greet() { return \"hi\"; } } \
         var g = Greeter(); print g.greet();",
    );
    assert!(!diagnostics.had_error());
    assert!(!diagnostics.had_runtime_error());
}

#[test]
fn test_scenario_unterminated_string_is_a_lex_error() {
    let diagnostics = run("print \"unterminated;");
    assert!(diagnostics.had_error());
}

#[test]
fn test_scenario_unexpected_character_is_a_lex_error() {
    let diagnostics = run("print 1 @ 2;");
    assert!(diagnostics.had_error());
}

#[test]
fn test_scenario_invalid_assignment_target_is_a_parse_error() {
    let diagnostics = run("1 + 2 = 3;");
    assert!(diagnostics.had_error());
}

#[test]
fn test_scenario_division_by_number_types_required() {
    let diagnostics = run("print \"a\" - 1;");
    assert!(!diagnostics.had_error());
    assert!(diagnostics.had_runtime_error());
}

#[test]
fn test_scenario_undefined_variable_is_a_runtime_error() {
    let diagnostics = run("print undefined_name;");
    assert!(!diagnostics.had_error());
    assert!(diagnostics.had_runtime_error());
}
