//! Expression nodes for the Lince AST.

use std::fmt;

use super::stmt::Block;
use crate::token::Span;

/// A unary (prefix) operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// Logical negation `!`.
    Not,
    /// Arithmetic negation `-`.
    Neg,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Not => write!(f, "!"),
            UnaryOp::Neg => write!(f, "-"),
        }
    }
}

/// A binary (infix) operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// Addition `+` (also string concatenation).
    Add,
    /// Subtraction `-`.
    Sub,
    /// Multiplication `*`.
    Mul,
    /// Division `/` (truncating).
    Div,
    /// Less than `<`.
    Lt,
    /// Greater than `>`.
    Gt,
    /// Equality `==`.
    Eq,
    /// Inequality `!=`.
    NotEq,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
        };
        write!(f, "{}", symbol)
    }
}

/// An identifier with its source location.
///
/// Used both as an expression (a variable reference) and as a binding
/// position: the name of a `variable` declaration, an assignment target, or
/// a function parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    /// The identifier's name.
    pub name: String,
    /// The source location of the identifier.
    pub span: Span,
}

impl Identifier {
    /// Creates a new identifier.
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Identifier {
            name: name.into(),
            span,
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The kind of an expression, without source location information.
///
/// Use [`Expr`] for the full AST node with span information.
#[derive(Debug, Clone)]
pub enum ExprKind {
    /// A variable reference.
    Identifier(String),

    /// An integer literal. Literals are non-negative; negative values are
    /// produced by the `-` prefix operator at evaluation time.
    Integer(i64),

    /// A boolean literal (`verdadero` or `falso`).
    Boolean(bool),

    /// A string literal. The contained `String` is the unquoted content.
    Str(String),

    /// The `nulo` literal.
    Null,

    /// A prefix operation: `!<right>` or `-<right>`.
    Prefix {
        /// The prefix operator.
        operator: UnaryOp,
        /// The operand.
        right: Box<Expr>,
    },

    /// A binary operation: `<left> <op> <right>`.
    Infix {
        /// The left operand.
        left: Box<Expr>,
        /// The binary operator.
        operator: BinaryOp,
        /// The right operand.
        right: Box<Expr>,
    },

    /// A conditional expression:
    /// `si (<condition>) { … } [si_no { … }]`.
    If {
        /// The tested condition.
        condition: Box<Expr>,
        /// The block evaluated when the condition is truthy.
        consequence: Block,
        /// The optional `si_no` block.
        alternative: Option<Block>,
    },

    /// A function literal: `procedimiento(<params>) { … }`.
    ///
    /// Functions are first-class values; evaluating this node captures the
    /// current environment into a closure.
    Function {
        /// The parameter names.
        parameters: Vec<Identifier>,
        /// The function body.
        body: Block,
    },

    /// A call expression: `<function>(<arguments>)`.
    ///
    /// The callee is an arbitrary expression, so both named functions and
    /// immediately-invoked function literals are supported.
    Call {
        /// The expression evaluating to the callee.
        function: Box<Expr>,
        /// The argument expressions, in call order.
        arguments: Vec<Expr>,
    },
}

/// An expression with its source location.
#[derive(Debug, Clone)]
pub struct Expr {
    /// The kind of expression.
    pub kind: ExprKind,
    /// The source location of this expression.
    pub span: Span,
}

impl Expr {
    /// Creates a new expression with the given kind and span.
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Display for Expr {
    /// Renders the canonical form of the expression.
    ///
    /// Prefix and infix operations render fully parenthesized
    /// (`(-a)`, `(a + b)`); the remaining forms mirror their source syntax.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Identifier(name) => write!(f, "{}", name),
            ExprKind::Integer(value) => write!(f, "{}", value),
            ExprKind::Boolean(true) => write!(f, "verdadero"),
            ExprKind::Boolean(false) => write!(f, "falso"),
            ExprKind::Str(value) => write!(f, "{}", value),
            ExprKind::Null => write!(f, "nulo"),
            ExprKind::Prefix { operator, right } => write!(f, "({}{})", operator, right),
            ExprKind::Infix {
                left,
                operator,
                right,
            } => write!(f, "({} {} {})", left, operator, right),
            ExprKind::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "si {} {}", condition, consequence)?;
                if let Some(alternative) = alternative {
                    write!(f, " si_no{}", alternative)?;
                }
                Ok(())
            }
            ExprKind::Function { parameters, body } => {
                let parameters: Vec<String> =
                    parameters.iter().map(Identifier::to_string).collect();
                write!(f, "procedimiento({}){{{}}}", parameters.join(", "), body)
            }
            ExprKind::Call {
                function,
                arguments,
            } => {
                let arguments: Vec<String> = arguments.iter().map(Expr::to_string).collect();
                write!(f, "{}({})", function, arguments.join(", "))
            }
        }
    }
}
