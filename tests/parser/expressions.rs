use treevm::lexer::{InputMode, tokenize};
use treevm::parser::{BinaryOp, Expr, ParseOptions, Parser, TokenStream, UnaryOp, parse};

fn expr(source: &str) -> Expr {
    let mut parser = Parser::new(
        ParseOptions::default(),
        TokenStream::from_source(source, InputMode::File),
    );
    parser.parse_expr().unwrap()
}

#[test]
fn integer_literals_become_constants() {
    assert_eq!(expr("42"), Expr::constant(42));
    assert_eq!(expr("-4"), Expr::constant(-4));
    assert_eq!(expr("007"), Expr::constant(7));
    assert_eq!(expr("2147483647"), Expr::constant(i32::MAX));
    assert_eq!(expr("-2147483648"), Expr::constant(i32::MIN));
}

#[test]
fn identifiers_start_with_a_letter() {
    assert_eq!(expr("x"), Expr::variable("x"));
    assert_eq!(expr("Total2"), Expr::variable("Total2"));
}

#[test]
fn prefix_grouping_binds_operands_in_order() {
    assert_eq!(
        expr("+ 2 * 3 4"),
        Expr::binary(
            BinaryOp::Add,
            Expr::constant(2),
            Expr::binary(BinaryOp::Mul, Expr::constant(3), Expr::constant(4)),
        )
    );
    assert_eq!(
        expr("- * 3 4 2"),
        Expr::binary(
            BinaryOp::Sub,
            Expr::binary(BinaryOp::Mul, Expr::constant(3), Expr::constant(4)),
            Expr::constant(2),
        )
    );
}

#[test]
fn every_binary_symbol_is_recognised() {
    for (symbol, op) in [
        ("+", BinaryOp::Add),
        ("-", BinaryOp::Sub),
        ("*", BinaryOp::Mul),
        ("/", BinaryOp::Div),
        ("%", BinaryOp::Mod),
    ] {
        assert_eq!(BinaryOp::from_symbol(symbol), Some(op));
        assert_eq!(op.symbol(), symbol);
        assert_eq!(
            expr(&format!("{symbol} a b")),
            Expr::binary(op, Expr::variable("a"), Expr::variable("b"))
        );
    }
}

#[test]
fn unary_operators_take_exactly_one_operand() {
    assert_eq!(
        expr("! $ x"),
        Expr::unary(UnaryOp::Negate, Expr::unary(UnaryOp::Sqrt, Expr::variable("x")))
    );
    assert_eq!(UnaryOp::from_symbol("!"), Some(UnaryOp::Negate));
    assert_eq!(UnaryOp::from_symbol("$"), Some(UnaryOp::Sqrt));
    assert_eq!(UnaryOp::from_symbol("~"), None);
}

#[test]
fn lone_minus_is_an_operator_not_a_literal() {
    assert_eq!(
        expr("- 5 -5"),
        Expr::binary(BinaryOp::Sub, Expr::constant(5), Expr::constant(-5))
    );
}

#[test]
fn expression_stops_before_next_action() {
    let program = parse(tokenize("@ + 1 2 @ 3", InputMode::File)).unwrap();
    assert_eq!(program.len(), 2);
}

#[test]
fn nesting_within_limit_parses() {
    let mut source = "! ".repeat(8);
    source.push('1');
    let mut parser = Parser::new(
        ParseOptions { max_nesting: 8 },
        TokenStream::from_source(&source, InputMode::File),
    );
    assert!(parser.parse_expr().is_ok());
    assert_eq!(parser.options().max_nesting, 8);
}
