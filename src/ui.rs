use colored::*;
use jiff::Timestamp;

use crate::models::project::Project;

/// Get the terminal width, defaulting to 80 if unavailable
fn get_terminal_width() -> usize {
    term_size::dimensions().map(|(w, _)| w).unwrap_or(80)
}

fn format_date(timestamp: Timestamp) -> String {
    timestamp.strftime("%Y-%m-%d %H:%M").to_string()
}

/// Indent of the lines printed under a project name
const INDENT: usize = 4;

fn separator(terminal_width: usize) -> String {
    "─".repeat(terminal_width.saturating_sub(INDENT).max(1))
}

/// Spaces needed to push `right_len` columns to the right edge after
/// `left_len` columns, or `None` when the line is too narrow for it.
fn right_align_padding(left_len: usize, right_len: usize, terminal_width: usize) -> Option<usize> {
    let total_content = left_len + right_len;
    if total_content + 4 < terminal_width {
        Some(terminal_width - total_content - 2)
    } else {
        None
    }
}

pub fn render_view_header(title: &str, count: usize) {
    println!(
        "{} ({} {})\n",
        title.cyan(),
        count,
        if count == 1 { "project" } else { "projects" }
    );
}

/// Render one project of a list: name with the creation date right-aligned,
/// then the description
pub fn render_project_line(project: &Project) {
    let terminal_width = get_terminal_width();

    let left_section = format!("{} {}", "•".green(), project.name.bold());
    let left_visible_len = 2 + project.name.chars().count();
    let date = format_date(project.creation_date);

    match right_align_padding(left_visible_len, date.chars().count(), terminal_width) {
        Some(padding) => println!("{}{}{}", left_section, " ".repeat(padding), date.dimmed()),
        // Not enough space for right alignment
        None => println!("{}  {}", left_section, date.dimmed()),
    }

    if !project.description.is_empty() {
        println!("{}{}", " ".repeat(INDENT), project.description);
    }

    println!(
        "{}{}",
        " ".repeat(INDENT),
        separator(terminal_width).dimmed()
    );
}

pub fn render_project_details(project: &Project) {
    println!("{}\n", project.name.cyan().bold());
    if !project.description.is_empty() {
        println!("{}\n", project.description);
    }
    println!(
        "{} {}",
        "Created:  ".dimmed(),
        format_date(project.creation_date)
    );
    println!("{} {}", "Last edit:".dimmed(), format_date(project.last_edit));
}

pub fn render_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_follows_terminal_width() {
        assert_eq!(separator(80).chars().count(), 76);
        assert_eq!(separator(120).chars().count(), 116);
        assert_eq!(separator(2).chars().count(), 1);
    }

    #[test]
    fn test_right_align_padding() {
        // "• Apollo" is 8 columns, a date is 16
        assert_eq!(right_align_padding(8, 16, 80), Some(54));
        assert_eq!(right_align_padding(8, 16, 200), Some(174));
    }

    #[test]
    fn test_right_align_padding_on_narrow_terminal() {
        assert_eq!(right_align_padding(8, 16, 28), None);
        assert_eq!(right_align_padding(60, 16, 80), None);
    }
}
