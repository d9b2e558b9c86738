use assetz::api::AssetzApi;
use assetz::config::AssetzConfig;
use assetz::error::Result;
use assetz::store::fs::FileBackend;
use clap::Parser;
use directories::ProjectDirs;
use std::io::IsTerminal;
use tracing::warn;

mod cli;
use cli::args::Cli;
use cli::input::{EditorInput, ReaderInput};
use cli::shell::Shell;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let config = load_config();
    let data_file = config.resolve_data_file(cli.file);
    let api = AssetzApi::new(FileBackend::new(data_file));

    if std::io::stdin().is_terminal() {
        Shell::new(api, EditorInput::new()?, std::io::stdout(), config.currency).run()
    } else {
        Shell::new(api, ReaderInput::stdin(), std::io::stdout(), config.currency).run()
    }
}

fn load_config() -> AssetzConfig {
    let Some(dirs) = ProjectDirs::from("com", "assetz", "assetz") else {
        return AssetzConfig::default();
    };
    AssetzConfig::load(dirs.config_dir()).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config");
        AssetzConfig::default()
    })
}

fn setup_tracing(verbose: bool) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_target(false)
        .init();
}
