use treevm::parser::DEFAULT_MAX_NESTING;
use treevm::{Error, ErrorKind, Execution, InputMode, SymbolTable};

/// Runs `source` through both paths and returns each result.
fn both(source: &str) -> (Result<Execution, Error>, Result<Execution, Error>) {
    let program = treevm::parse_source(source, InputMode::File).unwrap();
    let interpreted = treevm::interpret(&program).map_err(Error::from);
    let machined = treevm::assemble_and_run(&treevm::generate(&program), InputMode::File);
    (interpreted, machined)
}

fn agree(source: &str) -> Execution {
    let (interpreted, machined) = both(source);
    let interpreted = interpreted.unwrap();
    assert_eq!(Ok(interpreted.clone()), machined, "{source}");
    interpreted
}

fn both_fail_with(source: &str) -> ErrorKind {
    let (interpreted, machined) = both(source);
    let interpreted = interpreted.unwrap_err().kind();
    assert_eq!(interpreted, machined.unwrap_err().kind(), "{source}");
    interpreted
}

// ---------------------------------------------------------------------------
// Agreement on successful programs
// ---------------------------------------------------------------------------

#[test]
fn negation_prints_negative_five() {
    assert_eq!(agree("= x ! 5\n@ x").output, vec![-5]);
}

#[test]
fn prefix_grouping_prints_fourteen() {
    assert_eq!(agree("= x + 2 * 3 4\n@ x").output, vec![14]);
}

#[test]
fn reassignment_prints_six() {
    let execution = agree("= a 5\n= a + a 1\n@ a");
    assert_eq!(execution.output, vec![6]);
    assert_eq!(execution.symbols, SymbolTable::from_iter([("a", 6)]));
}

#[test]
fn mixed_program_agrees() {
    let execution = agree(
        "= x 10\n\
         = y - x 3\n\
         @ / x y\n\
         @ % x y\n\
         = z $ * x y\n\
         @ ! z\n\
         = x - 0 - y x\n\
         @ x",
    );
    assert_eq!(execution.output, vec![1, 3, -8, 3]);
    assert_eq!(
        execution.symbols,
        SymbolTable::from_iter([("x", 3), ("y", 7), ("z", 8)])
    );
}

#[test]
fn overflow_wraps_identically() {
    let execution = agree("= m * 65536 65536\n@ + 2147483647 1\n@ / -2147483648 -1");
    assert_eq!(execution.output, vec![i32::MIN, i32::MIN]);
    assert_eq!(execution.symbols.get("m").unwrap(), 0);
}

#[test]
fn compile_and_run_matches_interpretation() {
    let source = "= r $ 99\n@ * r r";
    let program = treevm::parse_source(source, InputMode::File).unwrap();
    assert_eq!(
        treevm::compile_and_run(source, InputMode::File).unwrap(),
        treevm::interpret(&program).unwrap()
    );
}

#[test]
fn nesting_at_default_limit_runs_on_both_paths() {
    let mut source = String::from("@ ");
    source.push_str(&"! ".repeat(DEFAULT_MAX_NESTING));
    source.push_str("7\n= sum ");
    source.push_str(&"+ ".repeat(DEFAULT_MAX_NESTING));
    source.push_str(&"1 ".repeat(DEFAULT_MAX_NESTING + 1));

    let execution = agree(&source);
    assert_eq!(execution.output, vec![7]);
    assert_eq!(
        execution.symbols.get("sum").unwrap(),
        DEFAULT_MAX_NESTING as i32 + 1
    );
}

// ---------------------------------------------------------------------------
// Agreement on failures
// ---------------------------------------------------------------------------

#[test]
fn divide_by_zero_in_both_paths() {
    assert_eq!(both_fail_with("= x / 10 0"), ErrorKind::DivideByZero);
}

#[test]
fn negative_square_root_in_both_paths() {
    assert_eq!(both_fail_with("= x $ -4"), ErrorKind::NegativeSquareRoot);
}

#[test]
fn uninitialized_in_both_paths() {
    assert_eq!(both_fail_with("@ y"), ErrorKind::Uninitialized);
}

#[test]
fn first_failure_wins_in_both_paths() {
    assert_eq!(
        both_fail_with("@ 1\n@ + $ -9 q\n@ / 1 0"),
        ErrorKind::NegativeSquareRoot
    );
}

// ---------------------------------------------------------------------------
// Front-end errors through the crate error
// ---------------------------------------------------------------------------

#[test]
fn parse_errors_surface_through_crate_error() {
    let err = treevm::compile_and_run("= x", InputMode::File).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PrematureEnd);
    assert!(matches!(err, Error::Parse(_)));

    let err = treevm::compile_and_run("? 1", InputMode::File).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IllegalAction);
}

#[test]
fn assemble_errors_surface_through_crate_error() {
    let err = treevm::assemble_and_run("PUSH 1\nHALT\n", InputMode::File).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IllegalInstruction);
    assert!(err.to_string().contains("HALT"));
}

#[test]
fn machine_underflow_surfaces_through_crate_error() {
    let err = treevm::assemble_and_run("ADD\n", InputMode::File).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::StackUnderflow);
}

#[test]
fn interactive_machine_input_stops_at_terminator() {
    let execution = treevm::assemble_and_run("PUSH 4\nPRINT\n.\nADD\n", InputMode::Interactive)
        .unwrap();
    assert_eq!(execution.output, vec![4]);
}
