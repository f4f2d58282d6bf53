//! Plain-text rendering of a `MappingResult`.
//!
//! One block per section, errors before warnings, then a one-line verdict.
//! Color is only applied when asked for.

use crate::diagnostics::{Diagnostics, Message, Severity};
use crate::pipeline::MappingResult;
use colored::{Color, Colorize};

/// Formatting options for text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextFormatOptions {
    pub use_color: bool,
    /// Also list sections that have nothing to report.
    pub show_clean: bool,
}

impl TextFormatOptions {
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            use_color: false,
            show_clean: true,
        }
    }
}

impl Default for TextFormatOptions {
    fn default() -> Self {
        Self::plain()
    }
}

fn paint(text: &str, color: Color, options: TextFormatOptions) -> String {
    if !options.use_color {
        return text.to_string();
    }
    text.color(color).to_string()
}

/// Short status next to a section title.
#[must_use]
pub fn format_section_status(diagnostics: Option<&Diagnostics>, options: TextFormatOptions) -> String {
    match diagnostics {
        None => paint("not checked", Color::BrightBlack, options),
        Some(d) if d.has_any_errors() => paint(
            &format!("{} error(s)", d.errors().len()),
            Color::Red,
            options,
        ),
        Some(d) if d.has_any_warnings() => paint(
            &format!("{} warning(s)", d.warnings().len()),
            Color::Yellow,
            options,
        ),
        Some(_) => paint("OK", Color::Green, options),
    }
}

/// One diagnostic line, plus its link on a second line when present.
#[must_use]
pub fn format_message_line(severity: Severity, message: &Message, options: TextFormatOptions) -> String {
    let label = match severity {
        Severity::Error => paint("ERROR  ", Color::Red, options),
        Severity::Warning => paint("WARNING", Color::Yellow, options),
    };
    let mut line = format!("  {label} {}", message.text);
    if let Some(link) = &message.link {
        line.push_str(&format!("\n          {}: {}", link.label, link.url));
    }
    line
}

fn push_block(
    out: &mut Vec<String>,
    title: &str,
    diagnostics: Option<&Diagnostics>,
    options: TextFormatOptions,
) {
    let quiet = diagnostics.is_some_and(Diagnostics::is_empty);
    if quiet && !options.show_clean {
        return;
    }
    out.push(format!("{title}: {}", format_section_status(diagnostics, options)));
    if let Some(diagnostics) = diagnostics {
        for (severity, message) in diagnostics.iter() {
            out.push(format_message_line(severity, message, options));
        }
    }
}

/// Render the whole result.
#[must_use]
pub fn format_mapping_result(result: &MappingResult, options: TextFormatOptions) -> String {
    let mut lines = Vec::new();

    for section in &result.system_fields {
        push_block(&mut lines, &section.title, section.diagnostics.as_ref(), options);
    }
    if !result.custom_field_values.is_empty() {
        lines.push(String::new());
        lines.push("Custom field values".to_string());
        for section in &result.custom_field_values {
            push_block(
                &mut lines,
                &format!("  {}", section.name),
                section.diagnostics.as_ref(),
                options,
            );
        }
    }

    lines.push(String::new());
    lines.push(format_verdict(result, options));
    lines.join("\n")
}

/// Final line: whether the import may proceed, with counts.
#[must_use]
pub fn format_verdict(result: &MappingResult, options: TextFormatOptions) -> String {
    let counts = format!(
        "{} error(s), {} warning(s)",
        result.error_count(),
        result.warning_count()
    );
    if result.can_import() {
        paint(&format!("Import can proceed ({counts})"), Color::Green, options)
    } else {
        paint(&format!("Import blocked ({counts})"), Color::Red, options)
    }
}
