//! Runtime values and environments for the Lince evaluator.
//!
//! This module defines [`Value`], the sum type every Lince expression
//! evaluates to, and the [`Environment`] chain that implements lexical
//! scoping.
//!
//! # Overview
//!
//! - Plain values: integers, booleans, strings, and `nulo`
//! - Control-flow carriers: [`Value::Return`] (a value travelling out of a
//!   block) and [`Value::Error`] (a runtime diagnostic travelling out of a
//!   program)
//! - Callables: [`Value::Function`] (a closure over its defining
//!   environment) and [`Value::Builtin`] (a native function)
//!
//! The canonical [`TRUE`], [`FALSE`], and [`NULL`] constants are the values
//! the evaluator hands out for boolean and null results.
//!
//! # Module Structure
//!
//! - [`environment`] - The scope chain ([`Environment`], [`Env`])
//!
//! # See Also
//!
//! * [`crate::evaluator`] - Produces and consumes these values

pub mod environment;

pub use environment::{Env, Environment};

use std::fmt;
use std::rc::Rc;

use crate::ast::{Block, Identifier};
use crate::evaluator::Builtin;

/// The canonical `verdadero` value.
pub const TRUE: Value = Value::Boolean(true);
/// The canonical `falso` value.
pub const FALSE: Value = Value::Boolean(false);
/// The canonical `nulo` value.
pub const NULL: Value = Value::Null;

/// A runtime value.
#[derive(Debug, Clone)]
pub enum Value {
    /// A signed 64-bit integer.
    Integer(i64),
    /// A boolean.
    Boolean(bool),
    /// The null value.
    Null,
    /// A string of characters.
    Str(String),
    /// A value travelling upward out of a `regresa` statement.
    ///
    /// `Return` never escapes a top-level program evaluation: the program
    /// result and function calls unwrap it.
    Return(Box<Value>),
    /// A runtime error carrying its diagnostic message.
    Error(String),
    /// A user-defined function closed over its defining environment.
    Function(Rc<FunctionValue>),
    /// A built-in function.
    Builtin(Builtin),
}

/// The payload of a [`Value::Function`].
///
/// The payload is reference-counted so that binding a function in an
/// environment, passing it as an argument, and returning it from a call all
/// share one closure.
#[derive(Clone)]
pub struct FunctionValue {
    /// The parameter names, in declaration order.
    pub parameters: Vec<Identifier>,
    /// The function body.
    pub body: Block,
    /// The environment captured where the function literal was evaluated.
    ///
    /// Calls extend this environment, which is what gives closures access
    /// to the bindings of their defining scope.
    pub env: Env,
}

impl fmt::Debug for FunctionValue {
    // The captured environment may transitively contain this function;
    // printing it would never terminate.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

impl Value {
    /// The uppercase type name used by runtime diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Boolean(_) => "BOOLEAN",
            Value::Null => "NULL",
            Value::Str(_) => "STRING",
            Value::Return(_) => "RETURN",
            Value::Error(_) => "ERROR",
            Value::Function(_) => "FUNCTION",
            Value::Builtin(_) => "BUILTIN",
        }
    }

    /// The user-facing rendering of this value.
    ///
    /// Integers render as decimal digits, booleans as
    /// `verdadero`/`falso`, null as `nulo`, strings as their raw contents,
    /// and errors as their message.
    pub fn inspect(&self) -> String {
        match self {
            Value::Integer(value) => value.to_string(),
            Value::Boolean(true) => "verdadero".to_string(),
            Value::Boolean(false) => "falso".to_string(),
            Value::Null => "nulo".to_string(),
            Value::Str(value) => value.clone(),
            Value::Return(inner) => inner.inspect(),
            Value::Error(message) => message.clone(),
            Value::Function(_) => "Función".to_string(),
            Value::Builtin(_) => "builtin function".to_string(),
        }
    }

    /// Whether this value is a runtime error.
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }
}

impl PartialEq for Value {
    /// Structural equality; functions compare by identity (two function
    /// values are equal only when they are the same closure).
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Return(a), Value::Return(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Builtin(a), Value::Builtin(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Span;

    #[test]
    fn test_inspect_plain_values() {
        assert_eq!(Value::Integer(15).inspect(), "15");
        assert_eq!(Value::Integer(-7).inspect(), "-7");
        assert_eq!(TRUE.inspect(), "verdadero");
        assert_eq!(FALSE.inspect(), "falso");
        assert_eq!(NULL.inspect(), "nulo");
        assert_eq!(Value::Str("Hola mundo".to_string()).inspect(), "Hola mundo");
    }

    #[test]
    fn test_inspect_unwraps_return() {
        let value = Value::Return(Box::new(Value::Integer(10)));
        assert_eq!(value.inspect(), "10");
    }

    #[test]
    fn test_inspect_error_is_its_message() {
        let value = Value::Error("algo salió mal".to_string());
        assert_eq!(value.inspect(), "algo salió mal");
    }

    #[test]
    fn test_inspect_callables() {
        assert_eq!(Value::Builtin(Builtin::Longitud).inspect(), "builtin function");
        let function = Value::Function(Rc::new(FunctionValue {
            parameters: vec![],
            body: Block::new(vec![], Span::new(0, 0, 1, 1)),
            env: Environment::new(),
        }));
        assert_eq!(function.inspect(), "Función");
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Integer(1).type_name(), "INTEGER");
        assert_eq!(TRUE.type_name(), "BOOLEAN");
        assert_eq!(NULL.type_name(), "NULL");
        assert_eq!(Value::Str(String::new()).type_name(), "STRING");
        assert_eq!(Value::Return(Box::new(NULL)).type_name(), "RETURN");
        assert_eq!(Value::Error(String::new()).type_name(), "ERROR");
        assert_eq!(Value::Builtin(Builtin::Salir).type_name(), "BUILTIN");
    }

    #[test]
    fn test_canonical_values_compare_equal() {
        assert_eq!(TRUE, Value::Boolean(true));
        assert_eq!(FALSE, Value::Boolean(false));
        assert_eq!(NULL, Value::Null);
        assert_ne!(TRUE, FALSE);
        assert_ne!(NULL, FALSE);
    }

    #[test]
    fn test_functions_compare_by_identity() {
        let function = Rc::new(FunctionValue {
            parameters: vec![],
            body: Block::new(vec![], Span::new(0, 0, 1, 1)),
            env: Environment::new(),
        });
        let same = Value::Function(Rc::clone(&function));
        let other = Value::Function(Rc::new(FunctionValue::clone(&function)));

        assert_eq!(Value::Function(function), same);
        assert_ne!(same, other);
    }
}
