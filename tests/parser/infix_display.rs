use treevm::InputMode;

fn infix(source: &str) -> String {
    treevm::parse_source(source, InputMode::File)
        .unwrap()
        .to_string()
}

#[test]
fn constants_and_variables_render_bare() {
    assert_eq!(infix("@ 5\n@ x"), "Print 5\nPrint x\n");
}

#[test]
fn binary_operations_are_parenthesized() {
    assert_eq!(infix("= x + 2 * 3 4"), "x = ( 2 + ( 3 * 4 ) )\n");
}

#[test]
fn unary_operators_prefix_their_operand() {
    assert_eq!(infix("= x ! 5"), "x = !5\n");
    assert_eq!(infix("@ $ - y 1"), "Print $( y - 1 )\n");
}

#[test]
fn negative_literals_render_with_sign() {
    assert_eq!(infix("@ % -7 2"), "Print ( -7 % 2 )\n");
}
