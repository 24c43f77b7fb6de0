//! Diagnostic rendering for file runs.
//!
//! Parser diagnostics carry byte spans; this module renders them over the
//! source with labeled reports. Rendering failures fall back to printing
//! the plain message.

use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use lince::parser::Diagnostic;

/// Renders every diagnostic over the source to stderr.
pub(crate) fn report(filename: &str, source: &str, diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        if let Err(error) = print_report(filename, source, diagnostic) {
            eprintln!("{}", diagnostic.message);
            eprintln!("(No se pudo mostrar el reporte detallado: {})", error);
        }
    }
}

fn print_report(filename: &str, source: &str, diagnostic: &Diagnostic) -> std::io::Result<()> {
    let range = label_range(source, diagnostic);

    Report::build(ReportKind::Error, (filename, range.clone()))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message(&diagnostic.message)
        .with_label(
            Label::new((filename, range))
                .with_message(&diagnostic.message)
                .with_color(Color::Red),
        )
        .finish()
        .eprint((filename, Source::from(source)))
}

/// The byte range to label for a diagnostic.
///
/// A diagnostic at the end of input has an empty span; widen it to the last
/// byte so the label has something to point at.
fn label_range(source: &str, diagnostic: &Diagnostic) -> Range<usize> {
    let span = diagnostic.span;
    if span.start < span.end {
        span.start..span.end
    } else if source.is_empty() {
        0..0
    } else {
        let end = source.len();
        end.saturating_sub(1)..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lince::token::Span;

    fn diagnostic_at(start: usize, end: usize) -> Diagnostic {
        Diagnostic::new("mensaje", Span::new(start, end, 1, 1))
    }

    #[test]
    fn test_label_range_uses_the_span() {
        assert_eq!(label_range("variable x", &diagnostic_at(0, 8)), 0..8);
    }

    #[test]
    fn test_label_range_for_empty_span_points_at_last_byte() {
        assert_eq!(label_range("abc", &diagnostic_at(3, 3)), 2..3);
    }

    #[test]
    fn test_label_range_for_empty_source() {
        assert_eq!(label_range("", &diagnostic_at(0, 0)), 0..0);
    }
}
