//! Styled text for session and one-shot output

use colored::*;
use filemod_core::ProcessReport;

/// Format bytes as human-readable string
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", size as u64, UNITS[unit_index])
    } else {
        format!("{:.2} {}", size, UNITS[unit_index])
    }
}

pub fn success(message: &str) -> ColoredString {
    message.green()
}

pub fn failure(message: &str) -> ColoredString {
    message.red()
}

pub fn notice(message: &str) -> ColoredString {
    message.yellow()
}

pub fn heading(message: &str) -> ColoredString {
    message.bold()
}

/// Human summary of a one-shot run
pub fn report_text(report: &ProcessReport) -> String {
    format!(
        "{}\nSize: {} ({} bytes)\nEncoding: {}\n\n{}\n\n{}",
        heading(&format!("Processed '{}'", report.source.display())),
        format_bytes(report.size_bytes),
        report.size_bytes,
        report.encoding,
        report.stats,
        success(&format!(
            "Successfully wrote modified content to '{}'",
            report.output.display()
        ))
    )
}
