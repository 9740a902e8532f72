pub mod types;
pub mod commands;
pub mod logging;

use clap::Parser;
use log::error;

/// Run the command-line interface, returning the process exit code
pub fn run() -> i32 {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    let result = match &cli.command {
        types::Commands::Generate { .. } => {
            commands::handle_generate_command(&cli.command, cli.config.as_ref())
        }
        types::Commands::Tree { .. } => {
            commands::handle_tree_command(&cli.command, cli.config.as_ref())
        }
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            error!("{}", e);
            1
        }
    }
}
