use clap::{Parser, Subcommand};

/// Command-line interface definition for ttpro
/// Terminal front end for the TimeTracker Pro demo
#[derive(Parser)]
#[command(
    name = "ttpro",
    version = env!("CARGO_PKG_VERSION"),
    about = "TimeTracker Pro: global search, views, clock-in/out and leave requests in your terminal",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal operation log
    Log {
        /// Print rows from the internal `log` table
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Search employees, projects and reports
    ///
    /// Matching is a case-insensitive substring test on name, department
    /// and kind. Queries shorter than two characters show nothing.
    ///
    /// Examples:
    ///   ttpro search eng
    ///   ttpro search "hr system"
    Search {
        /// Text to look for
        query: String,
    },

    /// Show or change the stored theme preference
    Theme {
        /// Flip between light and dark and store the result
        #[arg(long, conflicts_with = "set")]
        toggle: bool,

        /// Store an explicit theme (light or dark)
        #[arg(long, value_name = "THEME")]
        set: Option<String>,
    },

    /// Start an interactive session (type `help` for commands)
    Shell,
}
