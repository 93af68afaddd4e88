use treevm::InputMode;
use treevm::parser::{Action, BinaryOp, Expr, Program, UnaryOp};

fn parse(source: &str) -> Program {
    treevm::parse_source(source, InputMode::File).unwrap()
}

#[test]
fn empty_source_is_an_empty_program() {
    let program = parse("");
    assert!(program.is_empty());
    assert_eq!(program.len(), 0);
}

#[test]
fn assignment_takes_target_then_expression() {
    let program = parse("= x 5");
    assert_eq!(program.actions, vec![Action::assign("x", Expr::constant(5))]);
}

#[test]
fn print_takes_one_expression() {
    let program = parse("@ y");
    assert_eq!(program.actions, vec![Action::print(Expr::variable("y"))]);
}

#[test]
fn actions_keep_source_order() {
    let program = parse("= a 5\n= a + a 1\n@ a");
    assert_eq!(
        program.actions,
        vec![
            Action::assign("a", Expr::constant(5)),
            Action::assign(
                "a",
                Expr::binary(BinaryOp::Add, Expr::variable("a"), Expr::constant(1))
            ),
            Action::print(Expr::variable("a")),
        ]
    );
}

#[test]
fn statements_do_not_depend_on_line_breaks() {
    assert_eq!(parse("= x 1 @ x"), parse("= x 1\n@ x"));
    assert_eq!(parse("= x\n+ 1\n2"), parse("= x + 1 2"));
}

#[test]
fn action_expr_accessor_returns_the_child() {
    let program = parse("= x ! 5\n@ $ 9");
    assert_eq!(
        program.actions[0].expr(),
        &Expr::unary(UnaryOp::Negate, Expr::constant(5))
    );
    assert_eq!(
        program.actions[1].expr(),
        &Expr::unary(UnaryOp::Sqrt, Expr::constant(9))
    );
}

#[test]
fn parsing_is_deterministic() {
    let source = "= x + 2 * 3 4\n@ - x % 7 3\n= y $ ! ! 16";
    assert_eq!(parse(source), parse(source));
}

#[test]
fn interactive_parse_ignores_text_after_terminator() {
    let program = treevm::parse_source("@ 1\n.\n@ bogus +", InputMode::Interactive).unwrap();
    assert_eq!(program.actions, vec![Action::print(Expr::constant(1))]);
}

#[test]
fn program_iterates_by_reference() {
    let program = parse("@ 1\n@ 2");
    let printed: Vec<_> = program.iter().map(|action| action.expr().clone()).collect();
    assert_eq!(printed, vec![Expr::constant(1), Expr::constant(2)]);
    assert_eq!((&program).into_iter().count(), 2);
}
