//! Styled terminal output.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Render a section header.
#[must_use]
pub fn header(text: &str) -> String {
    let plain = format!("=== {text} ===");
    if is_color_disabled() {
        plain
    } else {
        style(plain).bold().cyan().to_string()
    }
}

/// Render a `label: value` line with the label aligned.
#[must_use]
pub fn field(label: &str, value: &str) -> String {
    let label = format!("{label:>9}:");
    if is_color_disabled() {
        format!("{label} {value}")
    } else {
        format!("{} {value}", style(label).dim())
    }
}

/// Render a notice that needs the user's attention.
#[must_use]
pub fn notice(text: &str) -> String {
    if is_color_disabled() {
        format!("[?] {text}")
    } else {
        format!("{} {text}", style("[?]").yellow().bold())
    }
}

/// Print an error message to stderr.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}
