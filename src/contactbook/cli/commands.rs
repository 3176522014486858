use super::args::Cli;
use super::print::print_messages;
use clap::Parser;
use contactbook::api::BookApi;
use contactbook::commands::help::help_text;
use contactbook::error::Result;
use contactbook::init::initialize;
use contactbook::store::fs::FileStore;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = initialize(cli.data_dir, cli.file)?;
    let mut api = BookApi::open(ctx.store)?;

    println!("Welcome to Assistant Bot!");
    println!("{}", help_text());

    repl(&mut api, &ctx.config.prompt)
}

/// Logs go to stderr so stdout carries only the conversation.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn repl(api: &mut BookApi<FileStore>, prompt: &str) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut buf = Vec::new();

    loop {
        print!("{}", prompt);
        io::stdout().flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            // End of input counts as `exit`, except a failed save is fatal here.
            println!();
            api.save()?;
            println!("Good bye!");
            return Ok(());
        }

        // Undecodable bytes become U+FFFD and fall through as an unknown command.
        let line = String::from_utf8_lossy(&buf);
        let result = api.execute(line.trim_end_matches(['\n', '\r']));
        print_messages(&result.messages);
        if result.exit {
            return Ok(());
        }
    }
}
