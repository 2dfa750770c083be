//! Common test utilities for Monk integration tests.
//!
//! This module provides shared helper functions used across all
//! integration test files.

// Each test file is compiled as a separate crate, so not all functions
// are used in every test file. This is expected behavior.
#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use monk::evaluator::{EvalError, evaluate};
use monk::lexer::Lexer;
use monk::object::{Environment, Value};
use monk::parser::{ParseError, Parser};

use tempfile::tempdir;

/// Returns the path to the monk binary built by cargo.
pub fn monk_binary() -> String {
    env!("CARGO_BIN_EXE_monk").to_string()
}

/// Lexes, parses, and evaluates a program in-process with a fresh
/// environment.
pub fn run_program(source: &str) -> Result<Value, RunFailure> {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.tokenize();

    let mut parser = Parser::new(tokens);
    let program = parser.parse().map_err(RunFailure::Parse)?;

    let env = Environment::new();
    evaluate(&program, &env).map_err(RunFailure::Eval)
}

/// A failure from either phase of [`run_program`].
#[derive(Debug)]
pub enum RunFailure {
    Parse(ParseError),
    Eval(EvalError),
}

impl RunFailure {
    /// Returns the underlying error message.
    pub fn message(&self) -> &str {
        match self {
            RunFailure::Parse(e) => e.message(),
            RunFailure::Eval(e) => e.message(),
        }
    }
}

/// Writes `source` to a temp file and runs the monk binary on it.
///
/// Returns the process output; the temp directory is cleaned up before
/// returning.
pub fn run_file(source: &str) -> Output {
    let dir = tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("program.monk");
    std::fs::write(&path, source).expect("Failed to write source file");
    run_binary_on(&path)
}

/// Runs the monk binary on an existing path.
pub fn run_binary_on(path: &Path) -> Output {
    Command::new(monk_binary())
        .arg(path)
        .output()
        .expect("Failed to run monk binary")
}

/// Runs the monk binary in REPL mode, feeding it the given input on
/// stdin, and returns the process output.
pub fn run_repl(input: &str) -> Output {
    let mut child = Command::new(monk_binary())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn monk binary");

    child
        .stdin
        .as_mut()
        .expect("Child has no stdin")
        .write_all(input.as_bytes())
        .expect("Failed to write REPL input");

    child
        .wait_with_output()
        .expect("Failed to wait for monk binary")
}

/// Returns stdout as a UTF-8 string.
pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Returns stderr as a UTF-8 string.
pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
