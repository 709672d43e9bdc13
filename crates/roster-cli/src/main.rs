use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use roster_application::open_file_session;
use roster_infrastructure::{ConfigService, RosterPaths};

mod commands;
mod logging;
mod render;
mod repl;

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Roster - keep a list of employees and browse it by name or department", long_about = None)]
struct Cli {
    /// Directory for config, storage and logs (platform directories by default)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Config file to use instead of config.toml in the config directory
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Commands {
    /// Show employees in stored order
    List,
    /// Show employees sorted by name
    Sort,
    /// Show employees whose name contains TEXT (case-insensitive)
    Search { text: String },
    /// Show employees whose department contains TEXT (case-insensitive)
    Filter { text: String },
    /// Add an employee at the end of the roster
    Add {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        department: String,
        #[arg(long, default_value = "")]
        role: String,
    },
    /// Start the interactive editor (default)
    Repl,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let paths = RosterPaths::new(cli.data_dir.clone());
    let config_service = match &cli.config {
        Some(path) => ConfigService::new(path.clone()),
        None => ConfigService::from_paths(&paths)?,
    };
    let config = config_service.load()?;

    let _log_guard = logging::init(&paths, &config.logging)?;

    let mut controller = open_file_session(&paths, &config)?;

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => {
            repl::run(&mut controller)?;
            Ok(ExitCode::SUCCESS)
        }
        command => commands::run(&mut controller, command),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_defaults_to_repl() {
        let cli = Cli::try_parse_from(["roster"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_search_takes_text() {
        let cli = Cli::try_parse_from(["roster", "search", "sa"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Search { text: "sa".into() }));
    }

    #[test]
    fn test_add_fields_default_to_empty() {
        let cli = Cli::try_parse_from(["roster", "add", "--name", "Nino"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Add {
                name: "Nino".into(),
                department: String::new(),
                role: String::new(),
            })
        );
    }

    #[test]
    fn test_global_data_dir_after_subcommand() {
        let cli = Cli::try_parse_from(["roster", "list", "--data-dir", "/tmp/r"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/r")));
        assert_eq!(cli.command, Some(Commands::List));
    }
}
