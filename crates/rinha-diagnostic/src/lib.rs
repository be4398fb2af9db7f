//! Diagnostic and error reporting for Rinha.
//! Rinha 的诊断和错误报告。
//!
//! Documents only carry byte offsets into the original program. When that
//! program is at hand, reports are rendered with source context using
//! ariadne; otherwise they fall back to a compact plain-text form.

mod codes;
mod diagnostic;

pub use codes::ErrorCode;
pub use diagnostic::{Diagnostic, DiagnosticKind, Label, Severity};

use ariadne::{ColorGenerator, Label as AriadneLabel, Report, ReportKind, Source};
use std::fmt::Write as _;

/// Render a diagnostic with source context to stderr.
/// 将带源码上下文的诊断信息渲染到标准错误输出。
pub fn emit(source: &str, diagnostic: &Diagnostic) -> std::io::Result<()> {
    let kind = match diagnostic.severity {
        Severity::Error => ReportKind::Error,
    };

    let filename = diagnostic.filename().unwrap_or("<input>");
    let offset = diagnostic
        .location
        .as_ref()
        .map(|location| usize::from(location.start))
        .unwrap_or(0);

    let mut colors = ColorGenerator::new();
    let mut report = Report::build(kind, filename, offset).with_message(&diagnostic.message);

    if let Some(code) = &diagnostic.code {
        report = report.with_code(code.as_str());
    }

    // Offsets come from the document; a reversed span cannot be drawn.
    for label in diagnostic.labels.iter().filter(|l| l.location.start <= l.location.end) {
        let color = colors.next();
        let ariadne_label = AriadneLabel::new((filename, label.location.span().range()))
            .with_message(&label.message)
            .with_color(color);
        report = report.with_label(ariadne_label);
    }

    for note in &diagnostic.notes {
        report = report.with_note(note);
    }

    if let Some(help) = &diagnostic.help {
        report = report.with_help(help);
    }

    report
        .finish()
        .eprint((filename, Source::from(source)))
}

/// Render a diagnostic without source context.
/// 在没有源码的情况下渲染诊断信息。
///
/// ```text
/// error[E0200]: unbound variable `fib`
///   --> fib.rinha:45..48
///   = note: ...
/// ```
pub fn render_plain(diagnostic: &Diagnostic) -> String {
    let mut out = String::new();
    let _ = write!(out, "{}", diagnostic.severity.as_str());
    if let Some(code) = &diagnostic.code {
        let _ = write!(out, "[{code}]");
    }
    let _ = writeln!(out, ": {}", diagnostic.message);
    if let Some(location) = &diagnostic.location {
        let _ = writeln!(out, "  --> {location}");
    }
    for label in &diagnostic.labels {
        if Some(&label.location) != diagnostic.location.as_ref() {
            let _ = writeln!(out, "  --> {}: {}", label.location, label.message);
        }
    }
    for note in &diagnostic.notes {
        let _ = writeln!(out, "  = note: {note}");
    }
    if let Some(help) = &diagnostic.help {
        let _ = writeln!(out, "  = help: {help}");
    }
    out
}

/// Print [`render_plain`] output to stderr.
pub fn emit_plain(diagnostic: &Diagnostic) {
    eprint!("{}", render_plain(diagnostic));
}
