mod cli;

use clap::Parser;

use crate::cli::Cli;

fn main() {
    // Parse CLI and dispatch; logging is set up once the mode is known.
    let cli = Cli::parse();
    if let Err(err) = cli.run() {
        eprintln!("imgfetch error: {:#}", err);
        std::process::exit(1);
    }
}
