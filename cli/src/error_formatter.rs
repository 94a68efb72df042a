use ariadne::{Color, Label, Report, ReportKind, Source};
use entail::{ErrorDetails, LogicError};

/// Format a LogicError with fancy terminal output using Ariadne
pub fn format_error(error: &LogicError) -> String {
    match error {
        LogicError::Parse(details) | LogicError::Invalid(details) => {
            let error_type = match error {
                LogicError::Parse(_) => "Parse error",
                _ => "Invalid expression",
            };
            render_report(error_type, details).unwrap_or_else(|| error.to_string())
        }
        LogicError::ResourceLimitExceeded {
            limit_name,
            limit_value,
            actual_value,
            suggestion,
        } => {
            format!(
                "Resource limit exceeded: {}\n  Limit: {}\n  Actual: {}\n  {}",
                limit_name, limit_value, actual_value, suggestion
            )
        }
        LogicError::Input(msg) => format!("Input error: {}", msg),
    }
}

fn render_report(error_type: &str, details: &ErrorDetails) -> Option<String> {
    let mut output = Vec::new();

    let message = format!(
        "{}: {} (at {}:{}:{})",
        error_type, details.message, details.source_id, details.span.line, details.span.col
    );

    let mut report = Report::build(ReportKind::Error, &details.source_id, details.span.start)
        .with_message(message)
        .with_label(
            Label::new((&details.source_id, details.span.start..details.span.end))
                .with_message("here")
                .with_color(Color::Red),
        );

    if let Some(suggestion) = &details.suggestion {
        report = report.with_help(suggestion);
    }

    report
        .finish()
        .write(
            (
                &details.source_id,
                Source::from(details.source_text.as_ref()),
            ),
            &mut output,
        )
        .ok()?;

    Some(String::from_utf8_lossy(&output).to_string())
}
