use clap::Parser;
use drills::app::{handle_fatal_error, init_logging, AppConfig};
use drills::cli::{execute_command, Cli};

fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::new(cli.verbose) {
        Ok(config) => config,
        Err(e) => handle_fatal_error(e, cli.verbose),
    };
    init_logging(&config);

    if let Err(e) = execute_command(cli.command, &config) {
        handle_fatal_error(e, config.verbose);
    }
}
