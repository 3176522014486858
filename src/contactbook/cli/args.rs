use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "contactbook", version)]
#[command(about = "Command-driven contact book with birthday reminders", long_about = None)]
pub struct Cli {
    /// Directory holding the address book and config.json
    /// (default: $CONTACTBOOK_HOME, then the OS data directory)
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Address book file name inside the data directory
    #[arg(short, long, value_name = "NAME")]
    pub file: Option<String>,

    /// Verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::parse_from(["contactbook", "--data-dir", "/tmp/book", "-f", "x.json", "-v"]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/book")));
        assert_eq!(cli.file.as_deref(), Some("x.json"));
        assert!(cli.verbose);
    }

    #[test]
    fn everything_is_optional() {
        let cli = Cli::parse_from(["contactbook"]);
        assert!(cli.data_dir.is_none());
        assert!(cli.file.is_none());
        assert!(!cli.verbose);
    }
}
