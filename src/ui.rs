//! Formatting helpers for CLI output.

use console::style;

use crate::domain::Reference;

/// Print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print a reference that passed the filter.
pub fn display_included(reference: &Reference) {
    println!("{} {}", style("+").green(), reference);
}

/// Print a reference that was filtered out.
pub fn display_excluded(reference: &Reference) {
    println!("{} {}", style("-").red(), style(reference).dim());
}

/// Print the kept/dropped totals.
pub fn display_summary(included: usize, excluded: usize) {
    println!(
        "\n{} {} included, {} excluded",
        style("→").yellow(),
        included,
        excluded
    );
}
