//! Process-boundary CLI tests: the things that can only be observed by
//! spawning the actual built binary (stdin prompting, process exit code,
//! real stdout/stderr content), per spec §6.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn rook_cmd() -> Command {
    Command::cargo_bin("rook").expect("binary `rook` should be built by cargo test")
}

fn script_file(source: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp script file");
    write!(file, "{}", source).expect("failed to write temp script file");
    file
}

#[test]
fn test_too_many_args_prints_usage_and_exits_one() {
    rook_cmd()
        .arg("a.lox")
        .arg("b.lox")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: rook [script]"));
}

#[test]
fn test_file_mode_runs_script_and_exits_zero() {
    let file = script_file("print 1 + 2;\n");

    rook_cmd()
        .arg(file.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("3"));
}

#[test]
fn test_file_mode_nonexistent_path_exits_one() {
    rook_cmd()
        .arg("/nonexistent/path/for/rook/cli_tests.lox")
        .assert()
        .code(1);
}

#[test]
fn test_file_mode_lex_error_exits_one() {
    let file = script_file("print 1 @ 2;\n");

    rook_cmd()
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("[line 1] Error"));
}

#[test]
fn test_file_mode_parse_error_exits_one() {
    let file = script_file("var;\n");

    rook_cmd()
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("[line 1] Error"));
}

#[test]
fn test_file_mode_resolution_error_exits_one() {
    let file = script_file("{ var a = a; }\n");

    rook_cmd()
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Can't read local variable in its own initializer.",
        ));
}

#[test]
fn test_file_mode_runtime_error_exits_one_with_message_and_line() {
    let file = script_file("print 1 + \"a\";\n");

    rook_cmd()
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Operands must be two numbers or two strings.",
        ))
        .stderr(predicate::str::contains("[line 1]"));
}

#[test]
fn test_file_mode_closure_scenario_prints_expected_sequence() {
    let file = script_file(
        "fun makeCounter() { var i = 0; fun count() { i = i + 1; print i; } return count; }\n\
         var c = makeCounter(); c(); c(); c();\n",
    );

    rook_cmd()
        .arg(file.path())
        .assert()
        .code(0)
        .stdout(predicate::str::diff("1\n2\n3\n"));
}

#[test]
fn test_file_mode_shadowing_scenario_prints_expected_sequence() {
    let file = script_file(
        "var a = \"global\"; { var a = \"outer\"; { var a = \"inner\"; print a; } print a; } print a;\n",
    );

    rook_cmd()
        .arg(file.path())
        .assert()
        .code(0)
        .stdout(predicate::str::diff("inner\nouter\nglobal\n"));
}

#[test]
fn test_file_mode_for_loop_scenario_prints_expected_sequence() {
    let file = script_file("for (var i = 0; i < 3; i = i + 1) print i;\n");

    rook_cmd()
        .arg(file.path())
        .assert()
        .code(0)
        .stdout(predicate::str::diff("0\n1\n2\n"));
}

#[test]
fn test_repl_prompts_and_evaluates_each_line() {
    rook_cmd()
        .write_stdin("print 1 + 2;\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("> "))
        .stdout(predicate::str::contains("3"));
}

#[test]
fn test_repl_empty_line_exits_cleanly() {
    rook_cmd().write_stdin("\n").assert().success();
}

#[test]
fn test_repl_runtime_error_does_not_terminate_session() {
    rook_cmd()
        .write_stdin("print 1 + \"a\";\nprint 9;\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("9"));
}

#[test]
fn test_repl_persists_globals_across_lines() {
    rook_cmd()
        .write_stdin("var x = 1;\nx = x + 1;\nprint x;\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2"));
}
