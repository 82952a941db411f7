pub mod types;
pub mod commands;
pub mod logging;

use clap::Parser;

/// Run the command-line interface and return the process exit code
pub fn run() -> i32 {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(logging::level_for(cli.debug, cli.quiet));

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    if cli.list_themes {
        commands::handle_themes_command();
        return 0;
    }

    match commands::handle_convert_command(&cli) {
        Ok(()) => 0,
        Err(e) => {
            log::error!("Conversion failed: {}", e);
            1
        }
    }
}
