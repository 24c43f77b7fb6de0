//! Runtime error production and propagation tests.
//!
//! The message shapes are part of the language's contract; these tests pin
//! them down exactly.

use super::*;

#[test]
fn test_error_messages() {
    let cases = [
        (
            "5 + verdadero",
            "Discrepancia de tipos: INTEGER + BOOLEAN cerca de la línea 1",
        ),
        (
            "5 + verdadero; 9;",
            "Discrepancia de tipos: INTEGER + BOOLEAN cerca de la línea 1",
        ),
        (
            "-verdadero",
            "Operador desconocido: -BOOLEAN cerca de la línea 1",
        ),
        (
            "1; verdadero + falso",
            "Operador desconocido: BOOLEAN + BOOLEAN cerca de la línea 1",
        ),
        (
            "5; verdadero - falso; 10;",
            "Operador desconocido: BOOLEAN - BOOLEAN cerca de la línea 1",
        ),
        (
            "\"foo\" - \"bar\";",
            "Operador desconocido: STRING - STRING cerca de la línea 1",
        ),
    ];

    for (input, expected) in cases {
        assert_error(&run(input), expected);
    }
}

#[test]
fn test_error_line_numbers_follow_the_source() {
    let cases = [
        (
            "si (10 > 7) {\n    regresa verdadero + falso;\n}",
            "Operador desconocido: BOOLEAN + BOOLEAN cerca de la línea 2",
        ),
        (
            "si (10 > 1) {\n    si (verdadero) {\n        regresa verdadero * falso;\n    }\n    regresa 1;\n}",
            "Operador desconocido: BOOLEAN * BOOLEAN cerca de la línea 3",
        ),
        (
            "si (5 < 2) {\n    regresa 1;\n} si_no {\n    regresa verdadero / falso;\n}",
            "Operador desconocido: BOOLEAN / BOOLEAN cerca de la línea 4",
        ),
    ];

    for (input, expected) in cases {
        assert_error(&run(input), expected);
    }
}

#[test]
fn test_program_stops_at_the_first_error() {
    // The trailing statements never run; the error is the program result.
    assert_error(
        &run("5 + verdadero; 9; 10;"),
        "Discrepancia de tipos: INTEGER + BOOLEAN cerca de la línea 1",
    );
}

#[test]
fn test_error_propagates_through_nested_blocks() {
    assert_error(
        &run("si (verdadero) { si (verdadero) { verdadero + falso } 5 }"),
        "Operador desconocido: BOOLEAN + BOOLEAN cerca de la línea 1",
    );
}

#[test]
fn test_error_inside_a_call_becomes_the_call_result() {
    assert_error(
        &run("variable f = procedimiento() { verdadero + 1 }; f()"),
        "Discrepancia de tipos: BOOLEAN + INTEGER cerca de la línea 1",
    );
}

#[test]
fn test_error_operand_keeps_its_type_name() {
    // Operands are evaluated strictly; an error value participates in the
    // outer operation under its own type name.
    assert_error(
        &run("(5 + verdadero) + 1"),
        "Discrepancia de tipos: ERROR + INTEGER cerca de la línea 1",
    );
}
