//! Terminal rendering of the roster screen.

use colored::Colorize;

use roster_application::Screen;
use roster_core::view::{Row, ViewMode};

/// Prints the employee list, one row per line. Sentinel rows are dimmed.
pub fn print_rows(rows: &[Row]) {
    for row in rows {
        if row.is_sentinel() {
            println!("{}", row.to_string().bright_black());
        } else {
            println!("{}", row);
        }
    }
}

/// Prints the full screen: title, active view and inputs, then the rows.
pub fn print_screen(screen: &Screen) {
    println!("{}", screen.title.bright_magenta().bold());
    println!("{}", status_line(screen).bright_black());
    println!("{}", format!("Employees ({})", screen.employee_count).bold());
    print_rows(&screen.rows);
}

pub fn print_alert(message: &str) {
    eprintln!("{}", message.red().bold());
}

fn status_line(screen: &Screen) -> String {
    match screen.mode {
        ViewMode::Search => format!("view: search \"{}\"", screen.search_text),
        ViewMode::Filter => format!("view: filter \"{}\"", screen.filter_text),
        mode => format!("view: {}", mode),
    }
}
