//! Formatting functions for user-facing output.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::VersionInfo;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// One-line summary of a version, e.g. `1.6-alpha-dev2-230a (dev, tag 1.6-alpha)`
pub fn version_summary(info: &VersionInfo) -> String {
    let kind = if info.is_dev_version() {
        "dev"
    } else if info.is_stable_version() == Some(true) {
        "stable"
    } else {
        "release"
    };
    format!(
        "{} ({}, tag {})",
        info.version_string(),
        kind,
        info.tag_name()
    )
}

/// Display the version that was derived from the repository.
pub fn display_version(info: &VersionInfo) {
    println!(
        "\n{} {}",
        style("Version:").bold(),
        style(version_summary(info)).green()
    );
}
