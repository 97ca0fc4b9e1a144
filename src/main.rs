//! Route Finder CLI entrypoint

use clap::Parser;

use route_finder::cli::Cli;
use route_finder::output;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.execute() {
        output::error(&format!("Error: {:#}", e));
        std::process::exit(1);
    }
}
