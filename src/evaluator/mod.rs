//! Tree-walking evaluator for the Lince language.
//!
//! This module provides the [`Evaluator`] struct, which walks the AST
//! produced by the [`crate::parser`] against a chain of environments and
//! yields a [`Value`].
//!
//! # Overview
//!
//! Evaluation is a recursive dispatch on node kind:
//! - A program yields the value of its last statement, unwrapping a
//!   `regresa` value and stopping at the first error.
//! - Blocks propagate `regresa` and error values upward still wrapped, so
//!   that only the outermost program evaluation (or the enclosing function
//!   call) unwraps them.
//! - Declarations and assignments both write the innermost scope.
//! - Function literals capture the environment they are evaluated in;
//!   calls extend that captured environment with the argument bindings.
//! - Unknown identifiers resolve to a built-in function of that name if
//!   one exists, and to `nulo` otherwise.
//!
//! Runtime failures are ordinary [`Value::Error`] values flowing through
//! the same return path as results; each one is also appended to the
//! evaluator's diagnostics list.
//!
//! # Truthiness
//!
//! Only `nulo` and `falso` are falsy. Every other value, including `0` and
//! the empty string, is truthy.
//!
//! # Module Structure
//!
//! - [`builtins`] - The built-in function table
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::object`] - The value and environment model
//! * [`crate::interpreter`] - The driver that wires the pipeline together

mod builtins;

#[cfg(test)]
mod tests;

pub use builtins::Builtin;

use std::rc::Rc;

use crate::ast::{BinaryOp, Block, Expr, ExprKind, Program, Stmt, StmtKind, UnaryOp};
use crate::object::{Env, Environment, FALSE, FunctionValue, NULL, TRUE, Value};

/// Whether a value behaves as true in a condition.
///
/// Only `nulo` and `falso` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Boolean(false))
}

fn boolean(value: bool) -> Value {
    if value { TRUE } else { FALSE }
}

/// Equality across values that are neither both integers nor both strings.
///
/// Booleans compare by value, `nulo` equals `nulo`, and every other pair is
/// unequal.
fn mixed_equality(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Boolean(a), Value::Boolean(b)) => a == b,
        (Value::Null, Value::Null) => true,
        _ => false,
    }
}

/// A tree-walking evaluator.
///
/// The evaluator accumulates the diagnostic messages of every error value
/// it produces; the list is owned by the evaluation driver and persists
/// across program evaluations (the REPL reuses one evaluator for the whole
/// session).
#[derive(Default)]
pub struct Evaluator {
    diagnostics: Vec<String>,
}

impl Evaluator {
    /// Creates a new evaluator with no accumulated diagnostics.
    pub fn new() -> Self {
        Evaluator {
            diagnostics: Vec::new(),
        }
    }

    /// The diagnostic messages accumulated so far, in evaluation order.
    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    /// Evaluates a program under `env`.
    ///
    /// Statements run in order. A `regresa` value ends the program and is
    /// unwrapped; an error ends the program and is returned as-is;
    /// otherwise the last statement's value is the result. An empty program
    /// yields `None`.
    pub fn eval_program(&mut self, program: &Program, env: &Env) -> Option<Value> {
        let mut result = None;

        for statement in &program.statements {
            let value = self.eval_statement(statement, env);
            match value {
                Value::Return(inner) => return Some(*inner),
                Value::Error(message) => return Some(Value::Error(message)),
                other => result = Some(other),
            }
        }

        result
    }

    fn eval_statement(&mut self, statement: &Stmt, env: &Env) -> Value {
        match &statement.kind {
            // Declaration and assignment are runtime-identical: both write
            // the innermost scope and yield the bound value.
            StmtKind::Let { name, value } | StmtKind::Assign { name, value } => {
                let value = self.eval_expression(value, env);
                env.borrow_mut().set(&name.name, value.clone());
                value
            }
            StmtKind::Return(value) => {
                let value = self.eval_expression(value, env);
                Value::Return(Box::new(value))
            }
            StmtKind::Loop { condition, body } => self.eval_loop(condition, body, env),
            StmtKind::Expr(expression) => self.eval_expression(expression, env),
        }
    }

    /// Evaluates a block.
    ///
    /// Unlike [`Evaluator::eval_program`], a `regresa` value propagates
    /// upward still wrapped; only the outermost program evaluation and
    /// function calls unwrap it. An empty block yields `nulo`.
    fn eval_block(&mut self, block: &Block, env: &Env) -> Value {
        let mut result = NULL;

        for statement in &block.statements {
            result = self.eval_statement(statement, env);
            if matches!(result, Value::Return(_) | Value::Error(_)) {
                return result;
            }
        }

        result
    }

    /// Evaluates a `mientras` loop.
    ///
    /// The body's value is discarded unconditionally; in particular a
    /// `regresa` inside the body does not unwind to the enclosing function,
    /// and an error ends the iteration's block without ending the loop
    /// (its message still lands in the diagnostics list). The loop always
    /// yields `nulo`.
    fn eval_loop(&mut self, condition: &Expr, body: &Block, env: &Env) -> Value {
        while is_truthy(&self.eval_expression(condition, env)) {
            self.eval_block(body, env);
        }
        NULL
    }

    fn eval_expression(&mut self, expression: &Expr, env: &Env) -> Value {
        match &expression.kind {
            ExprKind::Identifier(name) => self.eval_identifier(name, env),
            ExprKind::Integer(value) => Value::Integer(*value),
            ExprKind::Boolean(value) => boolean(*value),
            ExprKind::Str(value) => Value::Str(value.clone()),
            ExprKind::Null => NULL,
            ExprKind::Prefix { operator, right } => {
                let right = self.eval_expression(right, env);
                self.eval_prefix(*operator, right, expression.span.line)
            }
            ExprKind::Infix {
                left,
                operator,
                right,
            } => {
                let left = self.eval_expression(left, env);
                let right = self.eval_expression(right, env);
                self.eval_infix(*operator, left, right, expression.span.line)
            }
            ExprKind::If {
                condition,
                consequence,
                alternative,
            } => {
                let tested = self.eval_expression(condition, env);
                if is_truthy(&tested) {
                    self.eval_block(consequence, env)
                } else if let Some(alternative) = alternative {
                    self.eval_block(alternative, env)
                } else {
                    NULL
                }
            }
            ExprKind::Function { parameters, body } => Value::Function(Rc::new(FunctionValue {
                parameters: parameters.clone(),
                body: body.clone(),
                env: Rc::clone(env),
            })),
            ExprKind::Call {
                function,
                arguments,
            } => {
                let callee = self.eval_expression(function, env);
                let arguments: Vec<Value> = arguments
                    .iter()
                    .map(|argument| self.eval_expression(argument, env))
                    .collect();
                self.apply_function(callee, arguments, expression.span.line)
            }
        }
    }

    /// Resolves an identifier: environment first, then the built-in table,
    /// then `nulo`. Unknown identifiers are not an error.
    fn eval_identifier(&mut self, name: &str, env: &Env) -> Value {
        if let Some(value) = env.borrow().get(name) {
            return value;
        }
        if let Some(builtin) = Builtin::lookup(name) {
            return Value::Builtin(builtin);
        }
        NULL
    }

    fn eval_prefix(&mut self, operator: UnaryOp, right: Value, line: usize) -> Value {
        match operator {
            UnaryOp::Not => match right {
                Value::Boolean(value) => boolean(!value),
                Value::Null => TRUE,
                _ => FALSE,
            },
            UnaryOp::Neg => match right {
                Value::Integer(value) => Value::Integer(value.wrapping_neg()),
                other => self.error(format!(
                    "Operador desconocido: -{} cerca de la línea {}",
                    other.type_name(),
                    line
                )),
            },
        }
    }

    fn eval_infix(&mut self, operator: BinaryOp, left: Value, right: Value, line: usize) -> Value {
        match (&left, &right) {
            (Value::Integer(l), Value::Integer(r)) => {
                self.eval_integer_infix(operator, *l, *r, line)
            }
            (Value::Str(l), Value::Str(r)) => match operator {
                BinaryOp::Add => Value::Str(format!("{}{}", l, r)),
                BinaryOp::Eq => boolean(l == r),
                BinaryOp::NotEq => boolean(l != r),
                _ => self.unknown_infix(operator, &left, &right, line),
            },
            _ => match operator {
                BinaryOp::Eq => boolean(mixed_equality(&left, &right)),
                BinaryOp::NotEq => boolean(!mixed_equality(&left, &right)),
                _ if left.type_name() != right.type_name() => self.error(format!(
                    "Discrepancia de tipos: {} {} {} cerca de la línea {}",
                    left.type_name(),
                    operator,
                    right.type_name(),
                    line
                )),
                _ => self.unknown_infix(operator, &left, &right, line),
            },
        }
    }

    /// Integer arithmetic wraps; division truncates toward zero and a zero
    /// divisor is a runtime error rather than a panic.
    fn eval_integer_infix(&mut self, operator: BinaryOp, l: i64, r: i64, line: usize) -> Value {
        match operator {
            BinaryOp::Add => Value::Integer(l.wrapping_add(r)),
            BinaryOp::Sub => Value::Integer(l.wrapping_sub(r)),
            BinaryOp::Mul => Value::Integer(l.wrapping_mul(r)),
            BinaryOp::Div => {
                if r == 0 {
                    self.error(format!("División entre cero cerca de la línea {}", line))
                } else {
                    Value::Integer(l.wrapping_div(r))
                }
            }
            BinaryOp::Lt => boolean(l < r),
            BinaryOp::Gt => boolean(l > r),
            BinaryOp::Eq => boolean(l == r),
            BinaryOp::NotEq => boolean(l != r),
        }
    }

    fn apply_function(&mut self, callee: Value, arguments: Vec<Value>, line: usize) -> Value {
        match callee {
            Value::Function(function) => {
                if function.parameters.len() != arguments.len() {
                    return self.error(format!(
                        "Cantidad errónea de argumentos para la función cerca de la línea {}, \
                         se esperaban {} pero se obtuvo {}",
                        line,
                        function.parameters.len(),
                        arguments.len()
                    ));
                }

                let call_env = Environment::enclosed(Rc::clone(&function.env));
                for (parameter, argument) in function.parameters.iter().zip(arguments) {
                    call_env.borrow_mut().set(&parameter.name, argument);
                }

                match self.eval_block(&function.body, &call_env) {
                    Value::Return(inner) => *inner,
                    other => other,
                }
            }
            Value::Builtin(builtin) => {
                let result = builtin.apply(&arguments, line);
                if let Value::Error(message) = &result {
                    self.diagnostics.push(message.clone());
                }
                result
            }
            other => self.error(format!(
                "No es una function: {} cerca de la línea {}",
                other.type_name(),
                line
            )),
        }
    }

    fn unknown_infix(
        &mut self,
        operator: BinaryOp,
        left: &Value,
        right: &Value,
        line: usize,
    ) -> Value {
        self.error(format!(
            "Operador desconocido: {} {} {} cerca de la línea {}",
            left.type_name(),
            operator,
            right.type_name(),
            line
        ))
    }

    /// Records `message` and wraps it as an error value.
    fn error(&mut self, message: String) -> Value {
        self.diagnostics.push(message.clone());
        Value::Error(message)
    }
}
