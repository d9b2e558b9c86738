use clap::Parser;
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("GIT_COMMIT_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "assetz")]
#[command(about = "Interactive editor for a comma-separated inventory file", long_about = None)]
#[command(version, long_version = LONG_VERSION)]
pub struct Cli {
    /// Data file to edit (defaults to the configured file, then Asset.txt)
    pub file: Option<PathBuf>,

    /// Verbose diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_means_no_file() {
        let cli = Cli::parse_from(["assetz"]);
        assert!(cli.file.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn takes_file_and_verbose() {
        let cli = Cli::parse_from(["assetz", "-v", "stock.csv"]);
        assert_eq!(cli.file, Some(PathBuf::from("stock.csv")));
        assert!(cli.verbose);
    }
}
