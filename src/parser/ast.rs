// Expression tree definitions for the calculator

use std::fmt;

/// Position of a token within a single-line expression, for error reporting.
/// Columns are 1-based and count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub column: usize,
}

impl SourceLocation {
    pub fn new(column: usize) -> Self {
        Self { column }
    }
}

/// Built-in numeric functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Sqrt,
    Log10,
}

impl Function {
    /// Every function, in keypad order
    pub const USER: [Function; 5] = [
        Function::Sin,
        Function::Cos,
        Function::Tan,
        Function::Sqrt,
        Function::Log10,
    ];

    /// Name as written in an expression
    pub fn name(self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Sqrt => "sqrt",
            Function::Log10 => "log",
        }
    }

    /// Opening text inserted by a function key, e.g. `sin(`
    pub fn prefix(self) -> &'static str {
        match self {
            Function::Sin => "sin(",
            Function::Cos => "cos(",
            Function::Tan => "tan(",
            Function::Sqrt => "sqrt(",
            Function::Log10 => "log(",
        }
    }

    pub fn from_name(name: &str) -> Option<Function> {
        match name {
            "sin" => Some(Function::Sin),
            "cos" => Some(Function::Cos),
            "tan" => Some(Function::Tan),
            "sqrt" => Some(Function::Sqrt),
            "log" => Some(Function::Log10),
            _ => None,
        }
    }

    /// Whether the argument is an angle (and so depends on the angle mode)
    pub fn is_trigonometric(self) -> bool {
        matches!(self, Function::Sin | Function::Cos | Function::Tan)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Neg,  // -x
    Plus, // +x
}

/// Expression tree produced by the parser
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number {
        value: f64,
        location: SourceLocation,
    },
    UnaryOp {
        op: UnOp,
        operand: Box<Expr>,
        location: SourceLocation,
    },
    BinaryOp {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
        location: SourceLocation,
    },
    Call {
        function: Function,
        arg: Box<Expr>,
        location: SourceLocation,
    },
}

impl Expr {
    pub fn location(&self) -> SourceLocation {
        match self {
            Expr::Number { location, .. }
            | Expr::UnaryOp { location, .. }
            | Expr::BinaryOp { location, .. }
            | Expr::Call { location, .. } => *location,
        }
    }
}
