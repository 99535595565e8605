use clap::Parser;
use emvcalc::cli::{self, output, Cli};

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    if let Err(e) = cli::dispatch(&cli) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
