mod accumulator;
mod cli;
mod commands;
mod error;
mod grade;
mod logging;
mod math;
mod report_helpers;
mod runner;
mod suites;
#[cfg(test)]
mod test_support;

use clap::Parser;

use cli::{Cli, Commands};
use commands::RunOptions;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Run {
            json,
            penalty,
            disable,
            group,
        } => commands::run(&RunOptions {
            json,
            penalty,
            disable,
            groups: group,
        }),
        Commands::List { json } => commands::list(json),
        Commands::Completions { shell } => {
            commands::completions(shell);
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
