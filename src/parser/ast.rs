//! Expression and action trees produced by the parser.
//!
//! Nodes own their children exclusively. `Display` renders the infix form,
//! which is for people only and is not meant to be parsed back.

use std::fmt;

/// Unary operators of the source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `!`: arithmetic negation.
    Negate,
    /// `$`: integer square root.
    Sqrt,
}

impl UnaryOp {
    /// All unary operators.
    pub const ALL: [UnaryOp; 2] = [UnaryOp::Negate, UnaryOp::Sqrt];

    /// Returns the source symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Negate => "!",
            Self::Sqrt => "$",
        }
    }

    /// Looks up the operator spelled `symbol`.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

/// Binary operators of the source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl BinaryOp {
    /// All binary operators.
    pub const ALL: [BinaryOp; 5] = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Mod,
    ];

    /// Returns the source symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        }
    }

    /// Looks up the operator spelled `symbol`.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }
}

/// Value-producing node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Constant(i32),
    Variable(String),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    pub fn constant(value: i32) -> Self {
        Self::Constant(value)
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Self::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Self::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "{value}"),
            Self::Variable(name) => write!(f, "{name}"),
            Self::Unary { op, operand } => write!(f, "{}{operand}", op.symbol()),
            Self::Binary { op, lhs, rhs } => write!(f, "( {lhs} {} {rhs} )", op.symbol()),
        }
    }
}

/// Statement-level node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// `= name <expr>`
    Assign { name: String, expr: Expr },
    /// `@ <expr>`
    Print { expr: Expr },
}

impl Action {
    pub fn assign(name: impl Into<String>, expr: Expr) -> Self {
        Self::Assign {
            name: name.into(),
            expr,
        }
    }

    pub fn print(expr: Expr) -> Self {
        Self::Print { expr }
    }

    /// Returns the expression evaluated by this action.
    pub fn expr(&self) -> &Expr {
        match self {
            Self::Assign { expr, .. } | Self::Print { expr } => expr,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assign { name, expr } => write!(f, "{name} = {expr}"),
            Self::Print { expr } => write!(f, "Print {expr}"),
        }
    }
}

/// A parsed program: actions in execution order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub actions: Vec<Action>,
}

impl Program {
    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions }
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.actions.iter()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for action in &self.actions {
            writeln!(f, "{action}")?;
        }
        Ok(())
    }
}
