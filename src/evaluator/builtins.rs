//! Built-in functions.
//!
//! Built-ins live in a fixed name table consulted by identifier resolution
//! after the environment chain. Each one receives its already-evaluated
//! arguments and the call-site line number for diagnostics.

use crate::object::Value;

/// A built-in function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// `longitud(cadena)` - the number of characters in a string.
    Longitud,
    /// `salir()` - terminates the process with success status.
    Salir,
    /// `entero_a_cadena(entero)` - the decimal rendering of an integer.
    EnteroACadena,
    /// `cadena_a_entero(cadena)` - the integer a string of decimal digits
    /// denotes.
    CadenaAEntero,
}

impl Builtin {
    /// Looks a name up in the built-in table.
    pub fn lookup(name: &str) -> Option<Builtin> {
        match name {
            "longitud" => Some(Builtin::Longitud),
            "salir" => Some(Builtin::Salir),
            "entero_a_cadena" => Some(Builtin::EnteroACadena),
            "cadena_a_entero" => Some(Builtin::CadenaAEntero),
            _ => None,
        }
    }

    /// The name this built-in is registered under.
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Longitud => "longitud",
            Builtin::Salir => "salir",
            Builtin::EnteroACadena => "entero_a_cadena",
            Builtin::CadenaAEntero => "cadena_a_entero",
        }
    }

    /// Invokes the built-in with the evaluated `args` from a call on
    /// `line`.
    ///
    /// `salir` terminates the process and does not return. The other
    /// built-ins report wrong arity or an unsupported argument type as
    /// error values.
    pub fn apply(self, args: &[Value], line: usize) -> Value {
        match self {
            Builtin::Salir => std::process::exit(0),
            Builtin::Longitud => {
                if args.len() != 1 {
                    return self.wrong_arity(args.len(), line);
                }
                match &args[0] {
                    Value::Str(value) => Value::Integer(value.chars().count() as i64),
                    other => self.unsupported_argument(other, line),
                }
            }
            Builtin::EnteroACadena => {
                if args.len() != 1 {
                    return self.wrong_arity(args.len(), line);
                }
                match &args[0] {
                    Value::Integer(value) => Value::Str(value.to_string()),
                    other => self.unsupported_argument(other, line),
                }
            }
            Builtin::CadenaAEntero => {
                if args.len() != 1 {
                    return self.wrong_arity(args.len(), line);
                }
                match &args[0] {
                    Value::Str(value) => match value.parse::<i64>() {
                        Ok(parsed) => Value::Integer(parsed),
                        Err(_) => Value::Error(format!(
                            "No se pudo convertir \"{}\" a entero cerca de la línea {}",
                            value, line
                        )),
                    },
                    other => self.unsupported_argument(other, line),
                }
            }
        }
    }

    fn wrong_arity(self, received: usize, line: usize) -> Value {
        Value::Error(format!(
            "Número incorrecto de argumentos para {}, se recibieron {}, se esperaba 1, \
             cerca de la línea {}",
            self.name(),
            received,
            line
        ))
    }

    fn unsupported_argument(self, argument: &Value, line: usize) -> Value {
        Value::Error(format!(
            "Argumento para {} sin soporte, se recibió {} cerca de la línea {}",
            self.name(),
            argument.type_name(),
            line
        ))
    }
}
