//! One-shot subcommands.

use std::process::ExitCode;

use anyhow::Result;

use roster_application::{Feedback, FormField, RosterController, UiEvent};

use crate::render::{print_alert, print_rows};
use crate::Commands;

/// Translates a subcommand into controller events and prints the resulting rows.
///
/// A rejected `add` prints the alert and exits with a failure code.
pub fn run(controller: &mut RosterController, command: Commands) -> Result<ExitCode> {
    for event in events_for(command) {
        if let Feedback::Alert(message) = controller.handle(event)? {
            print_alert(&message);
            return Ok(ExitCode::FAILURE);
        }
    }

    print_rows(&controller.rows());
    Ok(ExitCode::SUCCESS)
}

fn events_for(command: Commands) -> Vec<UiEvent> {
    match command {
        Commands::List | Commands::Repl => vec![UiEvent::ClickList],
        Commands::Sort => vec![UiEvent::ClickSort],
        Commands::Search { text } => vec![UiEvent::SearchInput(text)],
        Commands::Filter { text } => vec![UiEvent::FilterInput(text)],
        Commands::Add {
            name,
            department,
            role,
        } => vec![
            UiEvent::EditField(FormField::Name, name),
            UiEvent::EditField(FormField::Department, department),
            UiEvent::EditField(FormField::Role, role),
            UiEvent::SubmitForm,
        ],
    }
}
