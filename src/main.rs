mod cli;
mod commands;
mod infra;
mod shared;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Cli { command } = Cli::parse();

    if let Commands::Completions { shell } = command {
        clap_complete::generate(shell, &mut Cli::command(), "ghl", &mut std::io::stdout());
        return Ok(());
    }

    let config = shared::config::load_config()?;
    // Flushes buffered log lines on drop, so it must outlive the command.
    let _log_guard = shared::logging::init(&config.log);

    match command {
        Commands::View(args) => args.run(&config)?,
        Commands::Show(args) => args.run(&config)?,
        Commands::Config(config_cmd) => config_cmd.run()?,
        Commands::Completions { .. } => {}
    }

    Ok(())
}
