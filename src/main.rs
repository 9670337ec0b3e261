use clap::Parser;
use diary::application::Session;
use diary::cli::{Cli, Shell};
use diary::error::DiaryError;
use diary::infrastructure::{logging, Config};
use std::io;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), DiaryError> {
    let config = Config::load(cli.config.as_deref())?;
    logging::init(cli.verbose, &config.log_level)?;
    tracing::debug!(?config, "configuration loaded");

    // Stores live only as long as this session; nothing is written to disk
    let stdin = io::stdin();
    let mut shell = Shell::new(Session::new(), config, stdin.lock(), io::stdout());
    if let Some(today) = cli.today {
        shell = shell.with_clock(move || today);
    }
    shell.run()
}
