//! Interactive roster editor built on rustyline.

use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tracing::debug;

use roster_application::{Feedback, FormField, RosterController, UiEvent};
use roster_core::roster::Roster;

use crate::render::{print_alert, print_screen};

const COMMANDS: [&str; 6] = ["/list", "/sort", "/search", "/filter", "/add", "/help"];

/// Rustyline helper: completes slash commands, then the argument of
/// `/search` (employee names) and `/filter` (department names).
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
    names: Vec<String>,
    departments: Vec<String>,
}

impl CliHelper {
    fn new(roster: &Roster) -> Self {
        let mut helper = Self {
            commands: COMMANDS.iter().map(|cmd| cmd.to_string()).collect(),
            names: Vec::new(),
            departments: Vec::new(),
        };
        helper.refresh(roster);
        helper
    }

    /// Re-reads the completion values after the roster changed.
    fn refresh(&mut self, roster: &Roster) {
        self.names = distinct(roster.iter().map(|employee| employee.name.as_str()));
        self.departments = distinct(roster.iter().map(|employee| employee.department.as_str()));
    }

    /// Values completing the argument of `command`, if it takes one.
    fn argument_values(&self, command: &str) -> Option<&[String]> {
        match command {
            "/search" => Some(&self.names),
            "/filter" => Some(&self.departments),
            _ => None,
        }
    }
}

/// First occurrence of each value, in roster order.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = Vec::<String>::new();
    for value in values {
        if !seen.iter().any(|known| known == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if !line.starts_with('/') {
            return Ok((0, vec![]));
        }

        let (start, candidates): (usize, Vec<&String>) = match line.split_once(' ') {
            None => (0, self.commands.iter().filter(|cmd| cmd.starts_with(line)).collect()),
            Some((command, typed)) => {
                let typed = typed.to_lowercase();
                let values = self.argument_values(command).unwrap_or_default();
                (
                    command.len() + 1,
                    values
                        .iter()
                        .filter(|value| value.to_lowercase().starts_with(&typed))
                        .collect(),
                )
            }
        };

        let pairs = candidates
            .into_iter()
            .map(|candidate| Pair {
                display: candidate.clone(),
                replacement: candidate.clone(),
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// A parsed REPL input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ReplCommand {
    Event(UiEvent),
    Add,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

/// Parses one input line. `/search` and `/filter` take the rest of the line
/// as their text; no text clears the input and returns to the list.
fn parse_line(line: &str) -> ReplCommand {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ReplCommand::Empty;
    }
    if trimmed == "quit" || trimmed == "exit" {
        return ReplCommand::Quit;
    }

    let (command, rest) = match trimmed.split_once(' ') {
        Some((command, rest)) => (command, rest.trim_start()),
        None => (trimmed, ""),
    };

    match command {
        "/list" => ReplCommand::Event(UiEvent::ClickList),
        "/sort" => ReplCommand::Event(UiEvent::ClickSort),
        "/search" => ReplCommand::Event(UiEvent::SearchInput(rest.to_string())),
        "/filter" => ReplCommand::Event(UiEvent::FilterInput(rest.to_string())),
        "/add" => ReplCommand::Add,
        "/help" => ReplCommand::Help,
        _ => ReplCommand::Unknown(trimmed.to_string()),
    }
}

fn print_help() {
    println!("{}", "Commands:".bright_yellow());
    println!("  /list             show employees in stored order");
    println!("  /sort             show employees sorted by name");
    println!("  /search <text>    show employees whose name contains text");
    println!("  /filter <text>    show employees whose department contains text");
    println!("  /add              add an employee (prompts for each field)");
    println!("  quit | exit       leave the editor");
}

/// Prompts for each form field, seeding the prompt with the current draft,
/// then submits. Ctrl-C abandons the submit but keeps what was typed.
fn add_employee(
    rl: &mut Editor<CliHelper, DefaultHistory>,
    controller: &mut RosterController,
) -> Result<()> {
    for field in [FormField::Name, FormField::Department, FormField::Role] {
        let draft = controller.form().get(field).to_string();
        let prompt = format!("{}: ", field.label());
        match rl.readline_with_initial(&prompt, (&draft, "")) {
            Ok(value) => {
                controller.handle(UiEvent::EditField(field, value))?;
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("{}", "Add cancelled, draft kept.".yellow());
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        }
    }

    match controller.handle(UiEvent::SubmitForm)? {
        Feedback::Alert(message) => print_alert(&message),
        Feedback::Rendered => println!("{}", "Employee added.".green()),
    }
    Ok(())
}

/// Runs the interactive editor until `quit`, `exit`, or Ctrl-D.
pub fn run(controller: &mut RosterController) -> Result<()> {
    let mut rl: Editor<CliHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(CliHelper::new(controller.roster())));

    println!(
        "{}",
        "Type '/help' for commands, or 'quit' to exit.".bright_black()
    );
    println!();
    print_screen(&controller.snapshot());

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let command = parse_line(&line);
                debug!(?command, "repl input");

                match command {
                    ReplCommand::Empty => continue,
                    ReplCommand::Quit => {
                        println!("{}", "Goodbye!".bright_green());
                        break;
                    }
                    ReplCommand::Help => {
                        let _ = rl.add_history_entry(line.as_str());
                        print_help();
                        continue;
                    }
                    ReplCommand::Unknown(input) => {
                        println!("{}", format!("Unknown command: {}", input).bright_black());
                        continue;
                    }
                    ReplCommand::Add => {
                        let _ = rl.add_history_entry(line.as_str());
                        add_employee(&mut rl, controller)?;
                        if let Some(helper) = rl.helper_mut() {
                            helper.refresh(controller.roster());
                        }
                    }
                    ReplCommand::Event(event) => {
                        let _ = rl.add_history_entry(line.as_str());
                        if let Feedback::Alert(message) = controller.handle(event)? {
                            print_alert(&message);
                        }
                    }
                }

                println!();
                print_screen(&controller.snapshot());
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}
