use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use sort_search_rs::config::Config;
use sort_search_rs::menu::Menu;

fn main() -> ExitCode {
    // Logs go to stderr, stdout carries the dialogue.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = Config::parse();
    tracing::debug!(?config, "starting");

    let mut menu = Menu::new(io::stdin().lock(), io::stdout(), config);

    match menu.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
