use std::io::{self, Write};

use anyhow::Result;
use console::style;

use crate::boundary::BoundaryWarning;
use crate::selector::SelectionResult;
use crate::strategy::Strategy;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Render the keep/delete report for a selection.
///
/// One line per release in the shape `- <tag> (<name or "no name">)`,
/// split into the keep section and the delete section.
pub fn display_selection_report(result: &SelectionResult, strategy: &Strategy) {
    println!("\n{}", style(format!("Strategy: {}", strategy)).bold());

    println!(
        "\n{}",
        style(format!("Releases to keep ({}):", result.keep.len())).bold()
    );
    for release in &result.keep {
        println!("  - {} ({})", style(&release.tag_name).green(), release.label());
    }

    println!(
        "\n{}",
        style(format!("Releases to delete ({}):", result.delete.len())).bold()
    );
    for release in &result.delete {
        println!("  - {} ({})", style(&release.tag_name).red(), release.label());
    }
}

/// List the recognized strategy tokens.
pub fn display_strategies() {
    println!("{}", style("Recognized strategies:").bold());
    for token in Strategy::VOCABULARY {
        println!("  - {}", token);
    }
}

/// Prompts user to confirm an action with a yes/no prompt.
///
/// Displays the given prompt and accepts "y" or "yes" (case-insensitive) as
/// confirmation. Default is "no" if user presses Enter.
///
/// # Arguments
/// * `prompt` - The prompt message to display (without the "(y/N): " suffix)
///
/// # Returns
/// * `Ok(true)` - If user entered "y" or "yes"
/// * `Ok(false)` - Otherwise (including Enter, or "n"/"no")
/// * `Err` - If input error occurs
pub fn confirm_action(prompt: &str) -> Result<bool> {
    print!("\n{} (y/N): ", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}
