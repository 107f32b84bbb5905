use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::commands::config::ConfigCommands;
use crate::commands::lookup::{ShowArgs, ViewArgs};

#[derive(Parser)]
#[command(
    name = "ghlookup",
    bin_name = "ghl",
    version,
    about,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Browse a GitHub user's profile and repositories interactively
    View(ViewArgs),

    /// Print a GitHub user's profile and repositories
    Show(ShowArgs),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}
