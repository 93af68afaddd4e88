use treevm::runtime::RuntimeErrorKind;
use treevm::vm::OperandStack;

#[test]
fn push_pop_is_lifo() {
    let mut stack = OperandStack::new(8);
    stack.push(1).unwrap();
    stack.push(2).unwrap();
    assert_eq!(stack.depth(), 2);
    assert_eq!(stack.pop().unwrap(), 2);
    assert_eq!(stack.pop().unwrap(), 1);
    assert!(stack.is_empty());
}

#[test]
fn peek_does_not_remove() {
    let mut stack = OperandStack::new(8);
    stack.push(9).unwrap();
    assert_eq!(stack.peek().unwrap(), 9);
    assert_eq!(stack.depth(), 1);
}

#[test]
fn pop_and_peek_on_empty_underflow() {
    let mut stack = OperandStack::new(8);
    assert_eq!(stack.pop().unwrap_err().kind, RuntimeErrorKind::StackUnderflow);
    assert_eq!(stack.peek().unwrap_err().kind, RuntimeErrorKind::StackUnderflow);
}

#[test]
fn push_past_limit_overflows() {
    let mut stack = OperandStack::new(1);
    stack.push(1).unwrap();
    assert_eq!(stack.push(2).unwrap_err().kind, RuntimeErrorKind::StackOverflow);
    assert_eq!(stack.as_slice(), &[1]);
}
