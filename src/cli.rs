//! Command-line surface: the help banner and positional command parsing.

use crate::error::ActivityError;

/// Usage banner printed for `help` and when no command is given.
pub const HELP_MENU: &str = "
    ----------------
    GitHub User Activity CLI
    ----------------

    Use: github-activity <command>

    Commands:
        - help
        - <username>
";

/// What the positional arguments ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the usage banner.
    Help,
    /// Print the activity report for a user.
    Report { username: String },
}

impl Command {
    /// Interpret positional arguments.
    ///
    /// `help` anywhere in the list wins; otherwise the first argument is the
    /// username and the rest are ignored.
    pub fn from_args(args: &[String]) -> Result<Self, ActivityError> {
        if args.iter().any(|arg| arg == "help") {
            return Ok(Command::Help);
        }

        match args.first() {
            Some(username) if !username.is_empty() => Ok(Command::Report {
                username: username.clone(),
            }),
            _ => Err(ActivityError::MissingArgument),
        }
    }
}

pub fn print_help() {
    println!("{}", HELP_MENU);
}

pub fn print_missing_command() {
    println!("No command provided. Showing help menu.\n{}", HELP_MENU);
}
